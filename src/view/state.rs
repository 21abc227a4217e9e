//! View state

use crate::content::{Document, Post};

/// The screen currently shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    /// All posts as cards
    #[default]
    Listing,
    /// A post was selected; waiting for the transition delay
    Loading { target: Post },
    /// A single post with its rendered body
    Reading { post: Post, document: Document },
}

impl ViewState {
    /// Short name, for logs
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Listing => "listing",
            ViewState::Loading { .. } => "loading",
            ViewState::Reading { .. } => "reading",
        }
    }

    /// The post being loaded or read
    pub fn post(&self) -> Option<&Post> {
        match self {
            ViewState::Listing => None,
            ViewState::Loading { target } => Some(target),
            ViewState::Reading { post, .. } => Some(post),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading { .. })
    }

    pub fn is_reading(&self) -> bool {
        matches!(self, ViewState::Reading { .. })
    }
}
