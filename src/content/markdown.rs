//! Markdown rendering with syntax highlighting

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};
use std::mem;
use std::sync::Arc;

use super::document::{Block, CodeBlock, Document, Highlight, Inline, List, ListItem};
use super::highlight::{Highlighter, PlainHighlighter, SyntectHighlighter};
use crate::config::HighlightConfig;

/// Markdown renderer with syntax highlighting
///
/// Rendering is a pure function of the input: the same markdown always
/// yields the same [`Document`]. Nothing here fails; unknown code languages
/// come out as plain text and odd markup is rendered best-effort.
#[derive(Clone)]
pub struct MarkdownRenderer {
    highlighter: Arc<dyn Highlighter>,
}

impl MarkdownRenderer {
    /// Create a renderer using syntect with the default theme
    pub fn new() -> Self {
        Self::with_highlighter(Arc::new(SyntectHighlighter::new()))
    }

    /// Create a renderer with a custom highlighter
    pub fn with_highlighter(highlighter: Arc<dyn Highlighter>) -> Self {
        Self { highlighter }
    }

    /// Create a renderer from the highlight settings
    pub fn from_config(config: &HighlightConfig) -> Self {
        if config.enable {
            Self::with_highlighter(Arc::new(SyntectHighlighter::with_theme(&config.theme)))
        } else {
            Self::with_highlighter(Arc::new(PlainHighlighter))
        }
    }

    /// Render markdown to a structured document
    pub fn render(&self, markdown: &str) -> Document {
        let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH);

        let mut builder = DocumentBuilder::new(self.highlighter.as_ref());
        for event in parser {
            builder.push(event);
        }
        builder.finish()
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Open container while walking the event stream
enum Frame {
    Blocks {
        kind: Container,
        blocks: Vec<Block>,
        /// Inline content not wrapped in a paragraph (tight list items)
        loose: Vec<Inline>,
    },
    List {
        start: Option<u64>,
        items: Vec<ListItem>,
    },
    Inlines {
        kind: Span,
        content: Vec<Inline>,
    },
    Code {
        language: Option<String>,
        code: String,
    },
    /// Unsupported container; its children go to the enclosing frame
    Transparent,
}

enum Container {
    Root,
    Item,
    Quote,
}

enum Span {
    Paragraph,
    Heading(u8),
    Strong,
    Emphasis,
    Strikethrough,
    Link(String),
    Image(String),
}

struct DocumentBuilder<'h> {
    highlighter: &'h dyn Highlighter,
    stack: Vec<Frame>,
}

impl<'h> DocumentBuilder<'h> {
    fn new(highlighter: &'h dyn Highlighter) -> Self {
        Self {
            highlighter,
            stack: vec![Frame::Blocks {
                kind: Container::Root,
                blocks: Vec::new(),
                loose: Vec::new(),
            }],
        }
    }

    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => {
                let frame = open_frame(tag);
                self.stack.push(frame);
            }
            Event::End(_) => self.close_top(),
            Event::Text(text) => {
                if let Some(Frame::Code { code, .. }) = self.stack.last_mut() {
                    code.push_str(&text);
                } else {
                    self.add_inline(Inline::Text(text.to_string()));
                }
            }
            Event::Code(code) => self.add_inline(Inline::Code(code.to_string())),
            // raw HTML is shown, never interpreted
            Event::Html(html) | Event::InlineHtml(html) => {
                self.add_inline(Inline::Text(html.to_string()))
            }
            Event::SoftBreak => self.add_inline(Inline::SoftBreak),
            Event::HardBreak => self.add_inline(Inline::LineBreak),
            Event::Rule => self.add_block(Block::Rule),
            _ => {}
        }
    }

    fn finish(mut self) -> Document {
        while self.stack.len() > 1 {
            self.close_top();
        }

        match self.stack.pop() {
            Some(Frame::Blocks {
                mut blocks, loose, ..
            }) => {
                flush_loose(&mut blocks, loose);
                Document { blocks }
            }
            _ => Document::default(),
        }
    }

    fn close_top(&mut self) {
        // the root frame is only closed by finish()
        if self.stack.len() <= 1 {
            return;
        }
        let Some(frame) = self.stack.pop() else {
            return;
        };

        match frame {
            Frame::Blocks {
                kind,
                mut blocks,
                loose,
            } => {
                flush_loose(&mut blocks, loose);
                match kind {
                    Container::Item => self.add_item(ListItem { blocks }),
                    Container::Quote => self.add_block(Block::Quote { blocks }),
                    Container::Root => {
                        for block in blocks {
                            self.add_block(block);
                        }
                    }
                }
            }
            Frame::List { start, items } => self.add_block(Block::List(List { start, items })),
            Frame::Inlines { kind, content } => match kind {
                Span::Paragraph => {
                    if !content.is_empty() {
                        self.add_block(Block::Paragraph { content });
                    }
                }
                Span::Heading(level) => self.add_block(Block::Heading { level, content }),
                Span::Strong => self.add_inline(Inline::Strong(content)),
                Span::Emphasis => self.add_inline(Inline::Emphasis(content)),
                Span::Strikethrough => self.add_inline(Inline::Strikethrough(content)),
                Span::Link(url) => self.add_inline(Inline::Link { url, content }),
                Span::Image(url) => self.add_inline(Inline::Image {
                    url,
                    alt: super::document::inline_text(&content),
                }),
            },
            Frame::Code { language, code } => {
                let block = self.code_block(language, code);
                self.add_block(Block::Code(block));
            }
            Frame::Transparent => {}
        }
    }

    fn add_inline(&mut self, inline: Inline) {
        for frame in self.stack.iter_mut().rev() {
            match frame {
                Frame::Inlines { content, .. } => {
                    push_inline(content, inline);
                    return;
                }
                Frame::Blocks { loose, .. } => {
                    push_inline(loose, inline);
                    return;
                }
                _ => continue,
            }
        }
    }

    fn add_block(&mut self, block: Block) {
        for frame in self.stack.iter_mut().rev() {
            if let Frame::Blocks { blocks, loose, .. } = frame {
                flush_loose(blocks, mem::take(loose));
                blocks.push(block);
                return;
            }
        }
    }

    fn add_item(&mut self, item: ListItem) {
        if let Some(Frame::List { items, .. }) = self.stack.last_mut() {
            items.push(item);
        } else {
            for block in item.blocks {
                self.add_block(block);
            }
        }
    }

    fn code_block(&self, language: Option<String>, code: String) -> CodeBlock {
        let highlight = match language.as_deref() {
            Some(lang) => match self.highlighter.highlight(&code, lang) {
                Some(lines) => Highlight::Tokens(lines),
                None => {
                    tracing::debug!("No highlighting for language {:?}", lang);
                    Highlight::Plain
                }
            },
            None => Highlight::Plain,
        };

        CodeBlock {
            language,
            code,
            highlight,
        }
    }
}

fn open_frame(tag: Tag<'_>) -> Frame {
    let inlines = |kind| Frame::Inlines {
        kind,
        content: Vec::new(),
    };
    let blocks = |kind| Frame::Blocks {
        kind,
        blocks: Vec::new(),
        loose: Vec::new(),
    };

    match tag {
        Tag::Paragraph | Tag::HtmlBlock => inlines(Span::Paragraph),
        Tag::Heading { level, .. } => inlines(Span::Heading(level as u8)),
        Tag::Emphasis => inlines(Span::Emphasis),
        Tag::Strong => inlines(Span::Strong),
        Tag::Strikethrough => inlines(Span::Strikethrough),
        Tag::Link { dest_url, .. } => inlines(Span::Link(dest_url.to_string())),
        Tag::Image { dest_url, .. } => inlines(Span::Image(dest_url.to_string())),
        Tag::BlockQuote(_) => blocks(Container::Quote),
        Tag::Item => blocks(Container::Item),
        Tag::List(start) => Frame::List {
            start,
            items: Vec::new(),
        },
        Tag::CodeBlock(kind) => Frame::Code {
            language: fence_language(&kind),
            code: String::new(),
        },
        _ => Frame::Transparent,
    }
}

/// First word of a fence info string: "rust,ignore" and "rust {.x}" are both rust
fn fence_language(kind: &CodeBlockKind<'_>) -> Option<String> {
    match kind {
        CodeBlockKind::Fenced(info) => info
            .split(|c: char| c.is_whitespace() || c == ',' || c == '{')
            .next()
            .filter(|lang| !lang.is_empty())
            .map(|lang| lang.to_string()),
        CodeBlockKind::Indented => None,
    }
}

/// Push an inline, merging adjacent text runs
fn push_inline(content: &mut Vec<Inline>, inline: Inline) {
    if let (Some(Inline::Text(prev)), Inline::Text(next)) = (content.last_mut(), &inline) {
        prev.push_str(next);
        return;
    }
    content.push(inline);
}

fn flush_loose(blocks: &mut Vec<Block>, loose: Vec<Inline>) {
    if !loose.is_empty() {
        blocks.push(Block::Paragraph { content: loose });
    }
}
