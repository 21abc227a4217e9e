//! Structured document produced by the markdown renderer

use serde::Serialize;

/// A rendered post body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// Block-level node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, content: Vec<Inline> },
    Paragraph { content: Vec<Inline> },
    List(List),
    Code(CodeBlock),
    Quote { blocks: Vec<Block> },
    Rule,
}

/// Ordered (`start` is set) or bullet list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub start: Option<u64>,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub blocks: Vec<Block>,
}

/// Inline node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Code(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Link { url: String, content: Vec<Inline> },
    Image { url: String, alt: String },
    SoftBreak,
    LineBreak,
}

/// A fenced or indented code block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    /// Declared language, first word of the fence info string
    pub language: Option<String>,
    /// Source text, exactly as written
    pub code: String,
    pub highlight: Highlight,
}

/// Highlighting result for a code block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "lines", rename_all = "snake_case")]
pub enum Highlight {
    /// Language not recognized; show `code` as is
    Plain,
    /// One entry per source line; span texts concatenate back to `code`
    Tokens(Vec<Vec<TokenSpan>>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSpan {
    pub text: String,
    pub style: TokenStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenStyle {
    pub color: Rgb,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// CSS hex notation, e.g. `#c0c5ce`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All code blocks, in document order, including nested ones
    pub fn code_blocks(&self) -> Vec<&CodeBlock> {
        let mut out = Vec::new();
        collect_code_blocks(&self.blocks, &mut out);
        out
    }

    /// Headings as (level, text) pairs
    pub fn headings(&self) -> Vec<(u8, String)> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading { level, content } => Some((*level, inline_text(content))),
                _ => None,
            })
            .collect()
    }

    /// Text content with all markup dropped, one block per line
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        push_plain_text(&self.blocks, &mut out);
        out
    }
}

impl CodeBlock {
    pub fn is_highlighted(&self) -> bool {
        matches!(self.highlight, Highlight::Tokens(_))
    }
}

fn collect_code_blocks<'a>(blocks: &'a [Block], out: &mut Vec<&'a CodeBlock>) {
    for block in blocks {
        match block {
            Block::Code(code) => out.push(code),
            Block::List(list) => {
                for item in &list.items {
                    collect_code_blocks(&item.blocks, out);
                }
            }
            Block::Quote { blocks } => collect_code_blocks(blocks, out),
            _ => {}
        }
    }
}

fn push_plain_text(blocks: &[Block], out: &mut String) {
    for block in blocks {
        match block {
            Block::Heading { content, .. } | Block::Paragraph { content } => {
                out.push_str(&inline_text(content));
                out.push('\n');
            }
            Block::List(list) => {
                for item in &list.items {
                    push_plain_text(&item.blocks, out);
                }
            }
            Block::Code(code) => {
                out.push_str(&code.code);
                if !code.code.ends_with('\n') {
                    out.push('\n');
                }
            }
            Block::Quote { blocks } => push_plain_text(blocks, out),
            Block::Rule => {}
        }
    }
}

/// Flatten inline nodes to their visible text
pub fn inline_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(t) | Inline::Code(t) => out.push_str(t),
            Inline::Strong(c) | Inline::Emphasis(c) | Inline::Strikethrough(c) => {
                out.push_str(&inline_text(c))
            }
            Inline::Link { content, .. } => out.push_str(&inline_text(content)),
            Inline::Image { alt, .. } => out.push_str(alt),
            Inline::SoftBreak | Inline::LineBreak => out.push(' '),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> CodeBlock {
        CodeBlock {
            language: None,
            code: text.to_string(),
            highlight: Highlight::Plain,
        }
    }

    #[test]
    fn test_code_blocks_are_collected_from_nested_blocks() {
        let doc = Document {
            blocks: vec![
                Block::Code(code("a")),
                Block::List(List {
                    start: None,
                    items: vec![ListItem {
                        blocks: vec![Block::Quote {
                            blocks: vec![Block::Code(code("b"))],
                        }],
                    }],
                }),
            ],
        };
        let found: Vec<_> = doc.code_blocks().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(found, vec!["a", "b"]);
    }

    #[test]
    fn test_inline_text_flattens_markup() {
        let inlines = vec![
            Inline::Strong(vec![Inline::Text("Bold".into())]),
            Inline::Text(": rest".into()),
            Inline::SoftBreak,
            Inline::Link {
                url: "http://x".into(),
                content: vec![Inline::Code("x".into())],
            },
        ];
        assert_eq!(inline_text(&inlines), "Bold: rest x");
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb { r: 192, g: 197, b: 206 }.hex(), "#c0c5ce");
    }
}
