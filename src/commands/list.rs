//! List the articles

use anyhow::Result;
use std::io::Write;

use crate::Blog;

/// Print every post, in display order
pub fn run(blog: &Blog, out: &mut impl Write) -> Result<()> {
    let posts = blog.store.all();
    writeln!(out, "Posts ({}):", posts.len())?;
    for post in posts {
        writeln!(
            out,
            "  #{} {} - {} ({}) [{}]",
            post.id,
            post.date,
            post.title,
            post.read_time,
            post.tags.join(", ")
        )?;
    }
    Ok(())
}
