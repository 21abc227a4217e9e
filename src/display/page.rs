//! Full screens: header, the body for the current view, footer

use chrono::Datelike;
use owo_colors::Style;

use super::components::{Button, Card, Skeleton};
use super::terminal::TerminalRenderer;
use super::text::{center, paint, spread, word_wrap};
use crate::config::BlogConfig;
use crate::content::{ContentStore, Document, Post};
use crate::view::ViewState;

/// Lays out whole screens for the terminal
pub struct PageRenderer<'a> {
    config: &'a BlogConfig,
    color: bool,
}

impl<'a> PageRenderer<'a> {
    pub fn new(config: &'a BlogConfig, color: bool) -> Self {
        Self { config, color }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    fn width(&self) -> usize {
        self.config.width.max(20)
    }

    /// Header, body and footer for `state`
    pub fn screen(&self, state: &ViewState, store: &ContentStore) -> Vec<String> {
        let mut lines = self.header();
        lines.push(String::new());
        lines.extend(self.body(state, store));
        lines.push(String::new());
        lines.extend(self.footer());
        lines
    }

    /// Just the part that changes between views
    pub fn body(&self, state: &ViewState, store: &ContentStore) -> Vec<String> {
        match state {
            ViewState::Listing => self.listing(store.all()),
            ViewState::Loading { .. } => self.loading(),
            ViewState::Reading { post, document } => self.reading(post, document),
        }
    }

    pub fn header(&self) -> Vec<String> {
        let width = self.width();
        let mut lines = vec![paint(&"═".repeat(width), Style::new().blue(), self.color)];
        lines.push(center(&paint(&self.config.title, Style::new().bold(), self.color), width));
        for line in word_wrap(&self.config.subtitle, width.saturating_sub(8)) {
            lines.push(center(&paint(&line, Style::new().dimmed(), self.color), width));
        }
        if !self.config.featured_tags.is_empty() {
            lines.push(String::new());
            lines.push(center(&self.tag_line(&self.config.featured_tags), width));
        }
        lines.push(paint(&"═".repeat(width), Style::new().blue(), self.color));
        lines
    }

    pub fn footer(&self) -> Vec<String> {
        let width = self.width();
        vec![
            paint(&"─".repeat(width), Style::new().dimmed(), self.color),
            center(
                &format!(
                    "© {} {}. All rights reserved.",
                    chrono::Local::now().year(),
                    self.config.title
                ),
                width,
            ),
        ]
    }

    /// All posts as cards
    pub fn listing(&self, posts: &[Post]) -> Vec<String> {
        let mut lines = vec![paint("Latest Articles", Style::new().bold(), self.color), String::new()];
        for (i, post) in posts.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.extend(self.post_card(post));
        }
        lines
    }

    pub fn post_card(&self, post: &Post) -> Vec<String> {
        let meta = format!("{} · {}", post.display_date(), post.read_time);
        Card::new()
            .header(self.tag_line(&post.tags))
            .title(&post.title)
            .content(&post.excerpt)
            .footer(
                paint(&meta, Style::new().dimmed(), self.color),
                Button::outline(format!("Read #{}", post.id)).render(self.color),
            )
            .render(self.width(), self.color)
    }

    /// Placeholder shown while a post loads
    pub fn loading(&self) -> Vec<String> {
        let width = self.width();
        let bar = |s: Skeleton| s.render(width, self.color);
        vec![
            bar(Skeleton::columns(16)),
            String::new(),
            bar(Skeleton::columns(24)),
            String::new(),
            bar(Skeleton::full()),
            bar(Skeleton::fraction(5, 6)),
            bar(Skeleton::fraction(4, 6)),
        ]
    }

    /// A single post with its rendered body
    pub fn reading(&self, post: &Post, document: &Document) -> Vec<String> {
        let width = self.width();
        let back = Button::outline("← Back to all posts (b)").render(self.color);

        let mut lines = vec![back.clone(), String::new()];
        lines.push(self.tag_line(&post.tags));
        for line in word_wrap(&post.title, width) {
            lines.push(paint(&line, Style::new().bold(), self.color));
        }
        lines.push(paint(
            &format!("{} · {}", post.display_date(), post.read_time),
            Style::new().dimmed(),
            self.color,
        ));
        lines.push(paint(&"─".repeat(width), Style::new().dimmed(), self.color));
        lines.push(String::new());

        lines.extend(
            TerminalRenderer::new(width, self.color)
                .with_line_numbers(self.config.highlight.line_number)
                .render(document),
        );

        lines.push(String::new());
        lines.push(paint(&"─".repeat(width), Style::new().dimmed(), self.color));
        lines.push(spread(&back, "Thanks for reading!", width));
        lines
    }

    fn tag_line(&self, tags: &[String]) -> String {
        tags.iter()
            .map(|t| paint(&format!("#{}", t), Style::new().cyan(), self.color))
            .collect::<Vec<_>>()
            .join("  ")
    }
}
