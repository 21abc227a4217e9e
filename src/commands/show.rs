//! Show a single article

use anyhow::Result;
use clap::ValueEnum;
use std::io::Write;

use super::{clear_screen, print_lines};
use crate::display::{HtmlRenderer, PageRenderer};
use crate::view::ViewState;
use crate::Blog;

/// How `show` prints the article
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled text for the terminal
    Terminal,
    /// An HTML <article>
    Html,
    /// The post and its rendered document as JSON
    Json,
}

/// Open a post through the view controller and print it
pub async fn run(
    blog: &Blog,
    key: &str,
    format: OutputFormat,
    color: bool,
    out: &mut impl Write,
) -> Result<()> {
    let Some(post) = blog.store.find(key) else {
        anyhow::bail!("No post matching {:?}. Run `dev-insights list` to see them.", key);
    };

    let page = PageRenderer::new(&blog.config, color);
    let mut view = blog.controller();

    view.select(post.id);
    // the skeleton is only cleared again on a color terminal
    if format == OutputFormat::Terminal && color {
        print_lines(out, &page.body(view.state(), &blog.store))?;
        out.flush()?;
    }
    view.settle().await;

    let ViewState::Reading { post, document } = view.state() else {
        anyhow::bail!("Post #{} did not load", post.id);
    };

    match format {
        OutputFormat::Terminal => {
            clear_screen(out, color)?;
            print_lines(out, &page.screen(view.state(), &blog.store))?;
        }
        OutputFormat::Html => {
            let html = HtmlRenderer::new(blog.config.highlight.line_number).article(post, document);
            write!(out, "{}", html)?;
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "post": post,
                "document": document,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }

    Ok(())
}
