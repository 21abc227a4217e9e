//! List tags with their post counts

use anyhow::Result;
use std::io::Write;

use crate::Blog;

/// Print tags, most used first
pub fn run(blog: &Blog, out: &mut impl Write) -> Result<()> {
    let mut tags = blog.store.tag_counts();
    // stable: ties keep first-seen order
    tags.sort_by(|_, a, _, b| b.cmp(a));

    writeln!(out, "Tags ({}):", tags.len())?;
    for (tag, count) in tags {
        writeln!(out, "  {} ({})", tag, count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;
    use crate::content::{ContentStore, Post};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn output(blog: &Blog) -> Vec<String> {
        let mut out = Vec::new();
        run(blog, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_most_used_first_then_first_seen() {
        let posts = vec![
            Post::new(1, "One", "2024-01-01", "", "1 min read", "", &["Zig", "Rust"]),
            Post::new(2, "Two", "2024-01-02", "", "1 min read", "", &["Go", "Rust"]),
            Post::new(3, "Three", "2024-01-03", "", "1 min read", "", &["Go", "Ada"]),
        ];
        let mut blog = Blog::with_config(BlogConfig::default(), PathBuf::from("."));
        blog.store = Arc::new(ContentStore::new(posts).unwrap());

        assert_eq!(
            output(&blog),
            vec!["Tags (4):", "  Rust (2)", "  Go (2)", "  Zig (1)", "  Ada (1)"]
        );
    }

    #[test]
    fn test_builtin_tags() {
        let blog = Blog::with_config(BlogConfig::default(), PathBuf::from("."));
        let lines = output(&blog);
        assert_eq!(lines[0], format!("Tags ({}):", blog.store.tag_counts().len()));
        assert!(lines[1..].iter().all(|l| l.starts_with("  ") && l.ends_with(')')));
    }
}
