//! Text helpers shared by the terminal and HTML output

use owo_colors::{OwoColorize, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap text at word boundaries, measuring in terminal columns.
/// Words wider than `width` are broken between characters.
pub fn word_wrap(s: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in s.split_whitespace() {
        let word_len = word.width();
        if line_len > 0 && line_len + word_len + 1 > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if word_len > width {
            // starts on a fresh line; the last chunk stays open
            let mut chunks = break_word(word, width);
            let last = chunks.pop().unwrap_or_default();
            lines.extend(chunks);
            line_len = last.width();
            line = last;
            continue;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Split a word into chunks of at most `width` columns. A character wider
/// than `width` still gets a chunk of its own.
fn break_word(word: &str, width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut used = 0;

    for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width && !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
            used = 0;
        }
        chunk.push(c);
        used += w;
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}

/// Apply `style` to `s`, or return it unchanged when color is off
pub fn paint(s: &str, style: Style, color: bool) -> String {
    if !color || s.is_empty() {
        s.to_string()
    } else {
        s.style(style).to_string()
    }
}

/// Remove ANSI escape sequences
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        match c {
            '\x1b' => in_escape = true,
            'm' if in_escape => in_escape = false,
            _ if in_escape => {}
            _ => out.push(c),
        }
    }
    out
}

/// Display width in terminal columns, ignoring ANSI escape sequences
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Pad with spaces up to `width` visible columns
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Center within `width` visible columns
pub fn center(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s)) / 2;
    format!("{}{}", " ".repeat(pad), s)
}

/// Place `left` and `right` on one line, `right` flush with `width`
pub fn spread(left: &str, right: &str, width: usize) -> String {
    let used = visible_width(left) + visible_width(right);
    let gap = width.saturating_sub(used).max(1);
    format!("{}{}{}", left, " ".repeat(gap), right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_word_wrap() {
        assert_eq!(
            word_wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
        assert_eq!(
            word_wrap("supercalifragilistic ok", 5),
            vec!["super", "calif", "ragil", "istic", "ok"]
        );
        assert!(word_wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_wide_characters_count_two_columns() {
        assert_eq!(visible_width("日本語"), 6);
        assert_eq!(visible_width("Rust 入門"), 9);
        assert_eq!(pad_right("入門", 6), "入門  ");
        assert_eq!(center("入門", 8), "  入門");
    }

    #[test]
    fn test_word_wrap_wide_characters() {
        let lines = word_wrap("Rust 入門 ガイド", 8);
        assert_eq!(lines, vec!["Rust", "入門", "ガイド"]);
        // a run with no spaces is broken between characters, never mid-glyph
        let lines = word_wrap("日本語のタイトル", 5);
        assert_eq!(lines, vec!["日本", "語の", "タイ", "トル"]);
        assert!(lines.iter().all(|l| l.width() <= 5));
    }

    #[test]
    fn test_visible_width_ignores_ansi() {
        let painted = paint("Read", Style::new().bold().blue(), true);
        assert_ne!(painted, "Read");
        assert!(painted.contains('\x1b'));
        assert_eq!(visible_width(&painted), 4);
        assert_eq!(strip_ansi(&painted), "Read");
        assert_eq!(paint("Read", Style::new().bold(), false), "Read");
    }

    #[test]
    fn test_spread() {
        assert_eq!(spread("ab", "cd", 8), "ab    cd");
        assert_eq!(spread("abcd", "efgh", 4), "abcd efgh");
    }
}
