//! One-shot, cancelable timers

use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Handle to a transition scheduled to fire after a delay.
///
/// Dropping or cancelling the handle aborts the timer task. Must be created
/// inside a tokio runtime.
#[derive(Debug)]
pub struct ScheduledTransition {
    task: JoinHandle<()>,
    fired: oneshot::Receiver<()>,
}

impl ScheduledTransition {
    /// Start a timer that fires once `delay` has passed
    pub fn after(delay: Duration) -> Self {
        let (tx, fired) = oneshot::channel();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(());
        });
        Self { task, fired }
    }

    /// Wait for the timer. Returns false if it can no longer fire.
    pub async fn elapsed(&mut self) -> bool {
        (&mut self.fired).await.is_ok()
    }

    /// Abort the timer
    pub fn cancel(self) {
        self.task.abort();
    }
}

impl Drop for ScheduledTransition {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let start = tokio::time::Instant::now();
        let mut timer = ScheduledTransition::after(Duration::from_millis(300));
        assert!(timer.elapsed().await);
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_the_task() {
        let timer = ScheduledTransition::after(Duration::from_millis(300));
        let abort = timer.task.abort_handle();
        timer.cancel();
        tokio::time::advance(Duration::from_millis(500)).await;
        for _ in 0..10 {
            if abort.is_finished() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(abort.is_finished());
    }
}
