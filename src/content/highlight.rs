//! Syntax highlighting for code blocks
//!
//! The renderer only talks to the [`Highlighter`] trait, so the syntect
//! engine can be swapped out (or switched off) without touching parsing.

use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::document::{Rgb, TokenSpan, TokenStyle};

/// Turns source code into styled token spans
pub trait Highlighter: Send + Sync {
    /// Highlight `code` as `language`.
    ///
    /// Returns `None` when the language is not recognized; callers fall back
    /// to plain text. Each inner vector holds the spans of one source line,
    /// trailing newline included.
    fn highlight(&self, code: &str, language: &str) -> Option<Vec<Vec<TokenSpan>>>;
}

/// Highlighter backed by syntect's bundled grammars and themes
pub struct SyntectHighlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl SyntectHighlighter {
    /// Create a highlighter using the default theme
    pub fn new() -> Self {
        Self::with_theme("base16-ocean.dark")
    }

    /// Create a highlighter with a named bundled theme
    pub fn with_theme(theme_name: &str) -> Self {
        let mut theme_set = ThemeSet::load_defaults();
        let theme = match theme_set.themes.remove(theme_name) {
            Some(theme) => theme,
            None => {
                tracing::warn!("Unknown highlight theme {:?}, using default", theme_name);
                theme_set
                    .themes
                    .remove("base16-ocean.dark")
                    .unwrap_or_default()
            }
        };

        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
        }
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, code: &str, language: &str) -> Option<Vec<Vec<TokenSpan>>> {
        // matches file extensions first, then syntax names
        let syntax = self.syntax_set.find_syntax_by_token(language)?;

        // plain text "highlighting" is no highlighting
        if syntax.name == self.syntax_set.find_syntax_plain_text().name {
            return None;
        }

        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let mut lines = Vec::new();
        for line in LinesWithEndings::from(code) {
            let ranges = match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => ranges,
                Err(e) => {
                    tracing::debug!("Highlighting {} failed: {}", language, e);
                    return None;
                }
            };
            lines.push(
                ranges
                    .into_iter()
                    .map(|(style, text)| TokenSpan {
                        text: text.to_string(),
                        style: token_style(style),
                    })
                    .collect(),
            );
        }

        Some(lines)
    }
}

/// Highlighter that recognizes nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, _code: &str, _language: &str) -> Option<Vec<Vec<TokenSpan>>> {
        None
    }
}

fn token_style(style: Style) -> TokenStyle {
    let fg = style.foreground;
    TokenStyle {
        color: Rgb {
            r: fg.r,
            g: fg.g,
            b: fg.b,
        },
        bold: style.font_style.contains(FontStyle::BOLD),
        italic: style.font_style.contains(FontStyle::ITALIC),
        underline: style.font_style.contains(FontStyle::UNDERLINE),
    }
}
