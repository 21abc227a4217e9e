//! Post model

use chrono::NaiveDate;
use serde::Serialize;

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Unique identifier
    pub id: u32,

    /// Post title
    pub title: String,

    /// Publication date (YYYY-MM-DD)
    pub date: String,

    /// Short summary shown on the post card
    pub excerpt: String,

    /// Reading time estimate, e.g. "5 min read"
    pub read_time: String,

    /// Raw markdown body
    pub markdown: String,

    /// Post tags, in display order
    pub tags: Vec<String>,
}

impl Post {
    /// Create a new post
    pub fn new(
        id: u32,
        title: &str,
        date: &str,
        excerpt: &str,
        read_time: &str,
        markdown: &str,
        tags: &[&str],
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            date: date.to_string(),
            excerpt: excerpt.to_string(),
            read_time: read_time.to_string(),
            markdown: markdown.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// URL-friendly name derived from the title
    pub fn slug(&self) -> String {
        slug::slugify(&self.title)
    }

    /// Parse the publication date
    pub fn published_on(&self) -> Option<NaiveDate> {
        let s = self.date.trim();
        ["%Y-%m-%d", "%Y/%m/%d"]
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    }

    /// Publication date in long form ("October 15, 2023"), or the raw string
    pub fn display_date(&self) -> String {
        match self.published_on() {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => self.date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::new(
            7,
            "Hello, Rust World!",
            "2023-10-15",
            "An excerpt",
            "1 min read",
            "# Hi",
            &["Rust", "Rust"],
        )
    }

    #[test]
    fn test_slug() {
        assert_eq!(sample().slug(), "hello-rust-world");
    }

    #[test]
    fn test_published_on() {
        let post = sample();
        assert_eq!(
            post.published_on(),
            NaiveDate::from_ymd_opt(2023, 10, 15)
        );
        assert_eq!(post.display_date(), "October 15, 2023");
    }

    #[test]
    fn test_unparseable_date_falls_back_to_raw() {
        let mut post = sample();
        post.date = "sometime".to_string();
        assert_eq!(post.published_on(), None);
        assert_eq!(post.display_date(), "sometime");
    }

    #[test]
    fn test_duplicate_tags_are_kept() {
        assert_eq!(sample().tags, vec!["Rust", "Rust"]);
    }
}
