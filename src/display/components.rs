//! UI primitives: buttons, cards and skeleton placeholders

use owo_colors::Style;

use super::text::{paint, pad_right, spread, visible_width, word_wrap};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled
    #[default]
    Default,
    /// Bordered
    Outline,
}

/// A one-line button label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub variant: ButtonVariant,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Default,
        }
    }

    pub fn outline(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Outline,
        }
    }

    pub fn render(&self, color: bool) -> String {
        match self.variant {
            ButtonVariant::Default => paint(
                &format!("[ {} ]", self.label),
                Style::new().bold().white().on_blue(),
                color,
            ),
            ButtonVariant::Outline => paint(&format!("( {} )", self.label), Style::new().blue(), color),
        }
    }
}

/// A boxed block: header line, title, body and an optional footer
#[derive(Debug, Clone, Default)]
pub struct Card {
    header: Option<String>,
    title: Option<String>,
    content: Option<String>,
    footer: Option<(String, String)>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line above the title (may already be styled)
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Body text, wrapped to the card width
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Footer with a left and a right-aligned part (may already be styled)
    pub fn footer(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.footer = Some((left.into(), right.into()));
        self
    }

    /// Render to `width` columns, borders included
    pub fn render(&self, width: usize, color: bool) -> Vec<String> {
        let width = width.max(8);
        let inner = width - 4;
        let border = |l: &str, r: &str| format!("{}{}{}", l, "─".repeat(width - 2), r);
        let row = |line: &str| format!("│ {} │", pad_right(line, inner));

        let mut lines = vec![border("┌", "┐")];

        if let Some(header) = &self.header {
            lines.push(row(header));
        }
        if let Some(title) = &self.title {
            for line in word_wrap(title, inner) {
                lines.push(row(&paint(&line, Style::new().bold(), color)));
            }
        }
        if let Some(content) = &self.content {
            if self.header.is_some() || self.title.is_some() {
                lines.push(row(""));
            }
            for line in word_wrap(content, inner) {
                lines.push(row(&line));
            }
        }
        if let Some((left, right)) = &self.footer {
            lines.push(border("├", "┤"));
            let footer = spread(left, right, inner);
            if visible_width(&footer) <= inner {
                lines.push(row(&footer));
            } else {
                lines.push(row(left));
                lines.push(row(right));
            }
        }

        lines.push(border("└", "┘"));
        lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonWidth {
    /// Share of the container, numerator over denominator
    Fraction(usize, usize),
    /// Fixed number of columns
    Columns(usize),
}

/// Placeholder bar shown while content is loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skeleton {
    pub width: SkeletonWidth,
}

impl Skeleton {
    pub fn fraction(numerator: usize, denominator: usize) -> Self {
        Self {
            width: SkeletonWidth::Fraction(numerator, denominator.max(1)),
        }
    }

    pub fn columns(columns: usize) -> Self {
        Self {
            width: SkeletonWidth::Columns(columns),
        }
    }

    pub fn full() -> Self {
        Self::fraction(1, 1)
    }

    /// Columns this skeleton occupies inside `container` columns
    pub fn resolve(&self, container: usize) -> usize {
        match self.width {
            SkeletonWidth::Fraction(n, d) => container * n / d,
            SkeletonWidth::Columns(c) => c,
        }
        .min(container)
    }

    pub fn render(&self, container: usize, color: bool) -> String {
        paint(&"░".repeat(self.resolve(container)), Style::new().dimmed(), color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_button_variants() {
        assert_eq!(Button::new("Subscribe").render(false), "[ Subscribe ]");
        assert_eq!(Button::outline("Read").render(false), "( Read )");
        assert!(Button::outline("Read").render(true).contains("\x1b[34m"));
    }

    #[test]
    fn test_card_layout() {
        let lines = Card::new()
            .header("React · Frontend")
            .title("Getting Started with React")
            .content("Learn the fundamentals of React development")
            .footer("2023-10-15", Button::outline("Read").render(false))
            .render(40, false);

        assert!(lines.iter().all(|l| visible_width(l) == 40));
        assert!(lines[0].starts_with('┌'));
        assert!(lines.last().unwrap().starts_with('└'));
        assert!(lines.iter().any(|l| l.starts_with('├')));
        let footer = &lines[lines.len() - 2];
        assert!(footer.contains("2023-10-15"));
        assert!(footer.trim_end_matches('│').trim_end().ends_with("( Read )"));
    }

    #[test]
    fn test_card_wraps_content() {
        let lines = Card::new()
            .content("one two three four five six seven eight")
            .render(16, false);
        // top, 4 wrapped rows, bottom
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| visible_width(l) == 16));
    }

    #[test]
    fn test_card_with_wide_characters_keeps_its_border() {
        let lines = Card::new()
            .header("#日本語")
            .title("日本語のタイトル")
            .content("Rust 入門 ガイドは、はじめての方のための記事です")
            .footer("2023年10月15日", Button::outline("読む").render(false))
            .render(30, false);

        assert!(lines.iter().all(|l| l.width() == 30), "{:#?}", lines);
        assert!(lines.iter().any(|l| l.contains("日本語のタイトル")));
    }

    #[test]
    fn test_card_width_ignores_color() {
        let plain = Card::new().title("入門").content("Rust 入門").render(24, false);
        let colored = Card::new().title("入門").content("Rust 入門").render(24, true);
        assert_eq!(plain.len(), colored.len());
        assert!(colored.iter().all(|l| visible_width(l) == 24));
    }

    #[test]
    fn test_skeleton_widths() {
        assert_eq!(Skeleton::fraction(3, 4).resolve(80), 60);
        assert_eq!(Skeleton::full().resolve(80), 80);
        assert_eq!(Skeleton::columns(32).resolve(20), 20);
        assert_eq!(Skeleton::fraction(5, 6).render(12, false), "░".repeat(10));
    }
}
