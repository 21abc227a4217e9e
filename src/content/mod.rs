//! Content module - posts, the content store and markdown rendering

pub mod document;
mod fixtures;
pub mod highlight;
mod markdown;
mod post;
mod store;

pub use document::{Block, CodeBlock, Document, Highlight, Inline, TokenSpan};
pub use highlight::{Highlighter, PlainHighlighter, SyntectHighlighter};
pub use markdown::MarkdownRenderer;
pub use post::Post;
pub use store::{ContentError, ContentStore};
