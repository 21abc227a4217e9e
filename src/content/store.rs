//! Content store - the fixed, read-only collection of posts

use indexmap::IndexMap;
use std::collections::HashSet;
use thiserror::Error;

use super::fixtures;
use super::Post;

/// Errors raised while building a content store
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("Duplicate post id: {0}")]
    DuplicateId(u32),
}

/// Ordered, immutable collection of posts
#[derive(Debug, Clone)]
pub struct ContentStore {
    posts: Vec<Post>,
}

impl ContentStore {
    /// Build a store, rejecting duplicate ids
    pub fn new(posts: Vec<Post>) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.id) {
                return Err(ContentError::DuplicateId(post.id));
            }
        }
        Ok(Self { posts })
    }

    /// The built-in articles
    pub fn builtin() -> Self {
        Self {
            posts: fixtures::posts(),
        }
    }

    /// All posts, in display order
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a post by id
    pub fn by_id(&self, id: u32) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Look up a post by its title slug
    pub fn by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug() == slug)
    }

    /// Look up a post by id if `key` is numeric, otherwise by slug
    pub fn find(&self, key: &str) -> Option<&Post> {
        match key.trim().parse::<u32>() {
            Ok(id) => self.by_id(id),
            Err(_) => self.by_slug(key.trim()),
        }
    }

    /// Tag usage counts, in order of first appearance
    pub fn tag_counts(&self) -> IndexMap<&str, usize> {
        let mut counts = IndexMap::new();
        for post in &self.posts {
            for tag in &post.tags {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::builtin()
    }
}
