//! Interactive reader

use anyhow::Result;
use owo_colors::Style;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{clear_screen, print_lines};
use crate::display::text::paint;
use crate::display::PageRenderer;
use crate::view::{ViewController, ViewState};
use crate::Blog;

const LISTING_HELP: &str = "Enter a post number or slug to read it, q to quit";
const READING_HELP: &str = "n next page · p previous page · b back · q quit";

/// Read commands from stdin until `q` or end of input
pub async fn run(blog: &Blog, color: bool) -> Result<()> {
    let page = PageRenderer::new(&blog.config, color);
    let mut view = blog.controller();
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();
    let mut notice: Option<String> = None;
    let page_height = blog.config.page_height.max(1);

    loop {
        clear_screen(&mut stdout, color)?;
        draw(&mut stdout, &page, &mut view, blog, page_height)?;
        if let Some(message) = notice.take() {
            writeln!(stdout, "{}", paint(&message, Style::new().yellow(), color))?;
        }
        let help = if view.state().is_reading() {
            READING_HELP
        } else {
            LISTING_HELP
        };
        write!(stdout, "{} > ", paint(help, Style::new().dimmed(), color))?;
        stdout.flush()?;

        let Some(line) = input.next_line().await? else {
            break;
        };
        let command = line.trim();
        if command == "q" {
            break;
        }

        if view.state().is_reading() {
            match command {
                "b" => {
                    view.back();
                }
                "n" | "" => view.scroll_by(page_height as isize),
                "p" => view.scroll_by(-(page_height as isize)),
                other => notice = Some(format!("Unknown command {:?}", other)),
            }
            continue;
        }

        if command.is_empty() {
            continue;
        }
        let id = match command.parse::<u32>() {
            Ok(id) => Some(id),
            Err(_) => blog.store.by_slug(command).map(|p| p.id),
        };
        if let Some(id) = id {
            view.select(id);
        }
        if view.state().is_loading() {
            clear_screen(&mut stdout, color)?;
            draw(&mut stdout, &page, &mut view, blog, page_height)?;
            stdout.flush()?;
            view.settle().await;
        } else {
            notice = Some(format!("No post matching {:?}", command));
        }
    }

    writeln!(stdout)?;
    Ok(())
}

/// Print the current view; the reading view is windowed by the scroll offset
fn draw(
    out: &mut impl Write,
    page: &PageRenderer<'_>,
    view: &mut ViewController,
    blog: &Blog,
    height: usize,
) -> Result<()> {
    let lines = match view.state() {
        ViewState::Reading { post, document } => page.reading(post, document),
        state => {
            print_lines(out, &page.screen(state, &blog.store))?;
            return Ok(());
        }
    };

    let shown = view.window(lines.len(), height);
    let status = format!(
        "── lines {}-{} of {}",
        shown.start + 1,
        shown.end,
        lines.len()
    );
    print_lines(out, &lines[shown])?;
    writeln!(out, "{}", paint(&status, Style::new().dimmed(), page.color()))?;
    Ok(())
}
