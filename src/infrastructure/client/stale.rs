//! One-shot staleness timers and the staleness predicate

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;

/// Default threshold after which cached data counts as stale (5 minutes)
pub const DEFAULT_STALE_THRESHOLD: Duration = Duration::from_millis(300_000);

/// Handle to a scheduled one-shot "data may be stale" callback
///
/// Dropping the handle aborts the pending task, so a torn-down owner can
/// never receive a late callback. Resetting guarantees at most one live
/// timer per logical subject.
#[derive(Debug)]
pub struct StaleTimer {
    handle: JoinHandle<()>,
}

impl StaleTimer {
    /// Schedule `callback` to fire once after `threshold`
    pub fn spawn<F>(threshold: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(threshold).await;
            callback();
        });

        Self { handle }
    }

    /// Cancel the previous timer (if any), then schedule a fresh one
    pub fn reset<F>(previous: Option<StaleTimer>, threshold: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(timer) = previous {
            timer.cancel();
        }
        Self::spawn(threshold, callback)
    }

    /// Cancel the pending callback
    pub fn cancel(self) {
        self.handle.abort();
    }

    /// Whether the timer already fired (or was cancelled)
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for StaleTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Whether data last updated at `last_updated` has crossed the threshold
pub fn is_stale(last_updated: DateTime<Utc>, threshold: Duration) -> bool {
    let elapsed = Utc::now().signed_duration_since(last_updated);
    let threshold =
        chrono::Duration::from_std(threshold).unwrap_or_else(|_| chrono::Duration::MAX);

    elapsed >= threshold
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_once_after_threshold() {
        let fired = Arc::new(AtomicUsize::new(0));
        let flag = fired.clone();

        let timer = StaleTimer::spawn(Duration::from_millis(500), move || {
            flag.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_previous_timer() {
        let old_fired = Arc::new(AtomicUsize::new(0));
        let new_fired = Arc::new(AtomicUsize::new(0));

        let old_flag = old_fired.clone();
        let timer = StaleTimer::spawn(Duration::from_millis(300), move || {
            old_flag.fetch_add(1, Ordering::SeqCst);
        });

        let new_flag = new_fired.clone();
        let _timer = StaleTimer::reset(Some(timer), Duration::from_millis(300), move || {
            new_flag.fetch_add(1, Ordering::SeqCst);
        });

        // Long past both deadlines: only the replacement fires
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(old_fired.load(Ordering::SeqCst), 0);
        assert_eq!(new_fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending_callback() {
        let fired = Arc::new(AtomicUsize::new(0));

        {
            let flag = fired.clone();
            let _timer = StaleTimer::spawn(Duration::from_millis(100), move || {
                flag.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_without_previous_just_schedules() {
        let fired = Arc::new(AtomicUsize::new(0));
        let flag = fired.clone();

        let _timer = StaleTimer::reset(None, Duration::from_millis(100), move || {
            flag.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_is_stale_past_threshold() {
        let last_updated = Utc::now() - chrono::Duration::minutes(10);
        assert!(is_stale(last_updated, DEFAULT_STALE_THRESHOLD));
    }

    #[test]
    fn test_is_stale_fresh_data() {
        assert!(!is_stale(Utc::now(), DEFAULT_STALE_THRESHOLD));
    }

    #[test]
    fn test_is_stale_inclusive_boundary() {
        // Clearly past the boundary counts; just inside does not
        let threshold = Duration::from_secs(60);
        assert!(is_stale(Utc::now() - chrono::Duration::seconds(61), threshold));
        assert!(!is_stale(Utc::now() - chrono::Duration::seconds(30), threshold));
    }
}
