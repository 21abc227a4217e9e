//! View controller - the listing / loading / reading state machine

use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use super::{ScheduledTransition, ViewState};
use crate::content::{ContentStore, MarkdownRenderer};

/// Owns the current [`ViewState`] and is its only writer.
///
/// Selecting a post moves to `Loading` and starts a timer; [`settle`] waits
/// for that timer and moves on to `Reading`. Display code observes the state
/// through [`subscribe`].
///
/// [`settle`]: ViewController::settle
/// [`subscribe`]: ViewController::subscribe
pub struct ViewController {
    store: Arc<ContentStore>,
    renderer: Arc<MarkdownRenderer>,
    delay: Duration,
    state: ViewState,
    pending: Option<ScheduledTransition>,
    scroll_offset: usize,
    state_tx: watch::Sender<ViewState>,
}

impl ViewController {
    /// Create a controller in the `Listing` state
    pub fn new(store: Arc<ContentStore>, renderer: Arc<MarkdownRenderer>, delay: Duration) -> Self {
        let (state_tx, _) = watch::channel(ViewState::Listing);
        Self {
            store,
            renderer,
            delay,
            state: ViewState::Listing,
            pending: None,
            scroll_offset: 0,
            state_tx,
        }
    }

    /// Current state
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Receive every state change
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state_tx.subscribe()
    }

    /// Open a post.
    ///
    /// Only acts while listing. An unknown id leaves the view on the listing.
    /// Must be called inside a tokio runtime.
    pub fn select(&mut self, id: u32) -> &ViewState {
        if !matches!(self.state, ViewState::Listing) {
            tracing::debug!("Ignoring select({}) while {}", id, self.state.name());
            return &self.state;
        }

        let Some(post) = self.store.by_id(id) else {
            tracing::warn!("No post with id {}, staying on the listing", id);
            return &self.state;
        };

        tracing::debug!("Loading post {} ({:?})", post.id, post.title);
        let target = post.clone();
        self.pending = Some(ScheduledTransition::after(self.delay));
        self.set_state(ViewState::Loading { target });
        &self.state
    }

    /// Wait for a pending load to finish.
    ///
    /// Returns immediately when nothing is loading.
    pub async fn settle(&mut self) -> &ViewState {
        if let Some(mut pending) = self.pending.take() {
            if pending.elapsed().await {
                self.finish_loading();
            }
        }
        &self.state
    }

    /// Go back to the listing.
    ///
    /// While loading this cancels the pending transition, so the post is
    /// never shown.
    pub fn back(&mut self) -> &ViewState {
        match self.state {
            ViewState::Listing => {}
            ViewState::Loading { .. } => {
                if let Some(pending) = self.pending.take() {
                    pending.cancel();
                }
                tracing::debug!("Load cancelled");
                self.set_state(ViewState::Listing);
            }
            ViewState::Reading { .. } => {
                self.set_state(ViewState::Listing);
            }
        }
        &self.state
    }

    /// First line of the reading view that is on screen
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Move the reading viewport, clamping at the top
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
    }

    /// Lines of a `len`-line reading view to show in a `height`-line window.
    ///
    /// Clamps the scroll offset so the last page stays full; a view shorter
    /// than one page always starts at the top.
    pub fn window(&mut self, len: usize, height: usize) -> Range<usize> {
        let height = height.max(1);
        let last_start = len.saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(last_start);
        self.scroll_offset..(self.scroll_offset + height).min(len)
    }

    fn finish_loading(&mut self) {
        let ViewState::Loading { target } = &self.state else {
            return;
        };
        let target = target.clone();

        let document = self.renderer.render(&target.markdown);
        tracing::debug!("Reading {:?}", target.title);
        self.scroll_offset = 0;
        self.set_state(ViewState::Reading {
            post: target,
            document,
        });
    }

    fn set_state(&mut self, state: ViewState) {
        tracing::debug!("View: {} -> {}", self.state.name(), state.name());
        self.state = state;
        self.state_tx.send_replace(self.state.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PlainHighlighter;

    fn controller(delay_ms: u64) -> ViewController {
        ViewController::new(
            Arc::new(ContentStore::builtin()),
            Arc::new(MarkdownRenderer::new()),
            Duration::from_millis(delay_ms),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_goes_through_loading() {
        let mut view = controller(300);
        assert_eq!(view.state(), &ViewState::Listing);

        view.select(1);
        match view.state() {
            ViewState::Loading { target } => assert_eq!(target.id, 1),
            other => panic!("expected loading, got {:?}", other),
        }

        match view.settle().await {
            ViewState::Reading { post, document } => {
                assert_eq!(post.id, 1);
                assert_eq!(document.headings()[0].1, "Getting Started with React");
            }
            other => panic!("expected reading, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_still_loads_first() {
        let mut view = controller(0);
        assert!(view.select(3).is_loading());
        assert_eq!(view.settle().await.name(), "reading");
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_waits_for_the_delay() {
        let start = tokio::time::Instant::now();
        let mut view = controller(300);
        view.select(2);
        view.settle().await;
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_from_reading() {
        let mut view = controller(300);
        view.select(1);
        view.settle().await;

        assert_eq!(view.back(), &ViewState::Listing);
        // idle back is a no-op
        assert_eq!(view.back(), &ViewState::Listing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_while_loading_cancels() {
        let mut view = controller(300);
        let mut states = view.subscribe();

        view.select(2);
        assert_eq!(view.back(), &ViewState::Listing);

        tokio::time::advance(Duration::from_millis(1000)).await;
        assert_eq!(view.settle().await, &ViewState::Listing);
        assert_eq!(*states.borrow_and_update(), ViewState::Listing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_id_stays_on_listing() {
        let mut view = controller(300);
        assert_eq!(view.select(99), &ViewState::Listing);
        assert_eq!(view.settle().await, &ViewState::Listing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_ignored_unless_listing() {
        let mut view = controller(300);
        view.select(1);
        view.select(2);
        assert_eq!(view.state().post().map(|p| p.id), Some(1));

        view.settle().await;
        view.select(3);
        assert_eq!(view.state().post().map(|p| p.id), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_post_keeps_nothing_from_previous() {
        let mut view = controller(10);
        view.select(1);
        view.settle().await;
        view.back();

        view.select(3);
        match view.settle().await {
            ViewState::Reading { post, document } => {
                assert_eq!(post.id, 3);
                let text = document.plain_text();
                assert!(text.contains("Tailwind"));
                assert!(!text.contains("create-react-app"));
                assert!(!text.contains("Getting Started with React"));
            }
            other => panic!("expected reading, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_each_transition() {
        let mut view = controller(300);
        let mut states = view.subscribe();

        view.select(1);
        assert!(states.has_changed().unwrap());
        assert!(states.borrow_and_update().is_loading());

        view.settle().await;
        assert!(states.has_changed().unwrap());
        assert_eq!(states.borrow_and_update().name(), "reading");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reading_starts_at_the_top() {
        let mut view = controller(0);
        view.select(1);
        view.settle().await;
        view.scroll_by(15);
        view.scroll_by(-5);
        assert_eq!(view.scroll_offset(), 10);
        view.scroll_by(-50);
        assert_eq!(view.scroll_offset(), 0);
        view.scroll_by(7);

        view.back();
        view.select(2);
        view.settle().await;
        assert_eq!(view.scroll_offset(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_paging_stops_at_the_last_page() {
        let mut view = controller(0);
        view.select(1);
        view.settle().await;

        assert_eq!(view.window(50, 20), 0..20);
        view.scroll_by(20);
        assert_eq!(view.window(50, 20), 20..40);
        view.scroll_by(20);
        assert_eq!(view.window(50, 20), 30..50);
        view.scroll_by(20);
        view.scroll_by(20);
        assert_eq!(view.window(50, 20), 30..50);
        assert_eq!(view.scroll_offset(), 30);

        // one page back from the clamped end
        view.scroll_by(-20);
        assert_eq!(view.window(50, 20), 10..30);
    }

    #[tokio::test(start_paused = true)]
    async fn test_paging_back_stops_at_the_top() {
        let mut view = controller(0);
        view.select(2);
        view.settle().await;

        view.scroll_by(-20);
        assert_eq!(view.window(50, 20), 0..20);
        view.scroll_by(5);
        view.scroll_by(-20);
        assert_eq!(view.window(50, 20), 0..20);
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_view_fits_one_page() {
        let mut view = controller(0);
        view.select(3);
        view.settle().await;

        view.scroll_by(20);
        assert_eq!(view.window(7, 20), 0..7);
        assert_eq!(view.scroll_offset(), 0);
        assert_eq!(view.window(0, 20), 0..0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_injected_renderer_is_used() {
        let mut view = ViewController::new(
            Arc::new(ContentStore::builtin()),
            Arc::new(MarkdownRenderer::with_highlighter(Arc::new(PlainHighlighter))),
            Duration::ZERO,
        );
        view.select(1);
        match view.settle().await {
            ViewState::Reading { document, .. } => {
                assert!(document.code_blocks().iter().all(|b| !b.is_highlighted()))
            }
            other => panic!("expected reading, got {:?}", other),
        }
    }
}
