//! Render documents as terminal text

use crate::content::document::{Block, CodeBlock, Highlight, Inline, TokenSpan};
use crate::content::Document;

use owo_colors::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::text::paint;

/// Lays out a [`Document`] as lines of terminal text
#[derive(Debug, Clone, Copy)]
pub struct TerminalRenderer {
    pub width: usize,
    pub color: bool,
    pub line_numbers: bool,
}

impl TerminalRenderer {
    pub fn new(width: usize, color: bool) -> Self {
        Self {
            width,
            color,
            line_numbers: false,
        }
    }

    pub fn with_line_numbers(mut self, line_numbers: bool) -> Self {
        self.line_numbers = line_numbers;
        self
    }

    /// Render a document; blocks are separated by blank lines
    pub fn render(&self, document: &Document) -> Vec<String> {
        self.render_blocks(&document.blocks, self.width.max(10))
    }

    fn render_blocks(&self, blocks: &[Block], width: usize) -> Vec<String> {
        let mut out = Vec::new();
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                out.push(String::new());
            }
            out.extend(self.render_block(block, width));
        }
        out
    }

    fn render_block(&self, block: &Block, width: usize) -> Vec<String> {
        match block {
            Block::Heading { level, content } => {
                let marker = "#".repeat(usize::from(*level));
                let mut words = Words::new(self.color);
                let style = Style::new().bold().cyan();
                words.push_text(&marker, style);
                words.space();
                words.push_inlines(content, style);
                words.wrap(width)
            }
            Block::Paragraph { content } => {
                let mut words = Words::new(self.color);
                words.push_inlines(content, Style::new());
                words.wrap(width)
            }
            Block::List(list) => {
                let mut out = Vec::new();
                for (i, item) in list.items.iter().enumerate() {
                    let marker = match list.start {
                        Some(start) => format!("{}. ", start + i as u64),
                        None => "• ".to_string(),
                    };
                    let indent = marker.width();
                    let body = self.render_blocks(&item.blocks, width.saturating_sub(indent).max(10));
                    for (j, line) in body.into_iter().enumerate() {
                        if j == 0 {
                            out.push(format!("{}{}", marker, line));
                        } else if line.is_empty() {
                            out.push(line);
                        } else {
                            out.push(format!("{}{}", " ".repeat(indent), line));
                        }
                    }
                }
                out
            }
            Block::Code(code) => self.render_code(code),
            Block::Quote { blocks } => self
                .render_blocks(blocks, width.saturating_sub(2).max(10))
                .into_iter()
                .map(|line| format!("{} {}", paint("│", Style::new().dimmed(), self.color), line))
                .collect(),
            Block::Rule => vec![paint(&"─".repeat(width), Style::new().dimmed(), self.color)],
        }
    }

    fn render_code(&self, code: &CodeBlock) -> Vec<String> {
        let lines: Vec<String> = match &code.highlight {
            Highlight::Tokens(lines) => lines.iter().map(|spans| self.paint_spans(spans)).collect(),
            Highlight::Plain => code.code.lines().map(|l| l.to_string()).collect(),
        };

        let mut out = Vec::with_capacity(lines.len() + 1);
        if let Some(lang) = &code.language {
            out.push(paint(lang, Style::new().dimmed(), self.color));
        }

        let gutter = lines.len().to_string().len();
        for (i, line) in lines.into_iter().enumerate() {
            if self.line_numbers {
                let number = format!("{:>gutter$} │", i + 1, gutter = gutter);
                out.push(format!("  {} {}", paint(&number, Style::new().dimmed(), self.color), line));
            } else {
                out.push(format!("  {}", line));
            }
        }
        out
    }

    fn paint_spans(&self, spans: &[TokenSpan]) -> String {
        let mut line = String::new();
        for span in spans {
            let text = span.text.trim_end_matches(['\n', '\r']);
            if !self.color {
                line.push_str(text);
                continue;
            }
            let token = span.style;
            let mut style = Style::new().truecolor(token.color.r, token.color.g, token.color.b);
            if token.bold {
                style = style.bold();
            }
            if token.italic {
                style = style.italic();
            }
            if token.underline {
                style = style.underline();
            }
            line.push_str(&paint(text, style, true));
        }
        line
    }
}

/// A styled run without whitespace inside
struct Piece {
    text: String,
    style: Style,
}

/// Inline content split into wrappable words; each word may hold several
/// differently styled pieces ("**Components**:" is one word, two pieces).
struct Words {
    color: bool,
    words: Vec<Vec<Piece>>,
    /// Whether the next text continues the last word
    open: bool,
}

impl Words {
    fn new(color: bool) -> Self {
        Self {
            color,
            words: Vec::new(),
            open: false,
        }
    }

    fn space(&mut self) {
        self.open = false;
    }

    fn push_text(&mut self, text: &str, style: Style) {
        for (i, part) in text.split(char::is_whitespace).enumerate() {
            if i > 0 {
                self.open = false;
            }
            if part.is_empty() {
                continue;
            }
            let piece = Piece {
                text: part.to_string(),
                style,
            };
            match self.words.last_mut() {
                Some(word) if self.open => word.push(piece),
                _ => self.words.push(vec![piece]),
            }
            self.open = true;
        }
    }

    fn push_inlines(&mut self, inlines: &[Inline], style: Style) {
        for inline in inlines {
            match inline {
                Inline::Text(text) => self.push_text(text, style),
                Inline::Code(code) => {
                    if self.color {
                        self.push_text(code, style.cyan());
                    } else {
                        self.push_text(&format!("`{}`", code), style);
                    }
                }
                Inline::Strong(content) => self.push_inlines(content, style.bold()),
                Inline::Emphasis(content) => self.push_inlines(content, style.italic()),
                Inline::Strikethrough(content) => self.push_inlines(content, style.strikethrough()),
                Inline::Link { url, content } => {
                    self.push_inlines(content, style.underline().blue());
                    if crate::content::document::inline_text(content) != *url {
                        self.space();
                        self.push_text(&format!("({})", url), style.dimmed());
                    }
                }
                Inline::Image { alt, .. } => self.push_text(&format!("[image: {}]", alt), style),
                Inline::SoftBreak | Inline::LineBreak => self.space(),
            }
        }
    }

    /// Lay the words out in lines of at most `width` columns
    fn wrap(self, width: usize) -> Vec<String> {
        let mut lines = Lines {
            color: self.color,
            lines: Vec::new(),
            line: String::new(),
            used: 0,
        };

        for word in &self.words {
            let word_len: usize = word.iter().map(|p| p.text.width()).sum();
            if lines.used > 0 && lines.used + word_len + 1 > width {
                lines.break_line();
            }
            if lines.used > 0 {
                lines.line.push(' ');
                lines.used += 1;
            }
            if word_len <= width {
                for piece in word {
                    lines.push(&piece.text, piece.style, piece.text.width());
                }
            } else {
                lines.push_broken(word, width);
            }
        }

        lines.finish()
    }
}

/// Output lines being filled by [`Words::wrap`]
struct Lines {
    color: bool,
    lines: Vec<String>,
    line: String,
    used: usize,
}

impl Lines {
    fn push(&mut self, text: &str, style: Style, width: usize) {
        self.line.push_str(&paint(text, style, self.color));
        self.used += width;
    }

    /// Spread a word wider than the line over several lines, breaking
    /// between characters
    fn push_broken(&mut self, word: &[Piece], width: usize) {
        for piece in word {
            let mut run = String::new();
            let mut run_width = 0;
            for c in piece.text.chars() {
                let w = c.width().unwrap_or(0);
                if self.used + run_width + w > width && self.used + run_width > 0 {
                    self.push(&run, piece.style, run_width);
                    self.break_line();
                    run.clear();
                    run_width = 0;
                }
                run.push(c);
                run_width += w;
            }
            self.push(&run, piece.style, run_width);
        }
    }

    fn break_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.line));
        self.used = 0;
    }

    fn finish(mut self) -> Vec<String> {
        if !self.line.is_empty() {
            self.lines.push(self.line);
        }
        self.lines
    }
}
