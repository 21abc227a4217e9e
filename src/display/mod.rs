//! Display layer - turns view state and documents into something to show

pub mod components;
pub mod html;
pub mod page;
pub mod terminal;
pub mod text;

pub use components::{Button, ButtonVariant, Card, Skeleton};
pub use html::HtmlRenderer;
pub use page::PageRenderer;
pub use terminal::TerminalRenderer;
