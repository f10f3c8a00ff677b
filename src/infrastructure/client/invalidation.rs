//! Dirty-marking for cache key families

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

/// Marks cache key families dirty without touching their stored values
///
/// A mark records the instant a key prefix was invalidated. An entry is
/// considered dirty when some mark covering its key is at least as recent
/// as the entry's own fetch time; refreshing the entry therefore cleans it
/// implicitly, page by page, without un-marking the rest of its family.
#[derive(Debug, Default)]
pub struct InvalidationQueue {
    marks: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl InvalidationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every key starting with `prefix` dirty as of now
    pub fn mark(&self, prefix: impl Into<String>) {
        self.marks.lock().unwrap().insert(prefix.into(), Utc::now());
    }

    /// Whether `key` was invalidated at or after `fetched_at`
    pub fn invalidated_since(&self, key: &str, fetched_at: DateTime<Utc>) -> bool {
        self.marks
            .lock()
            .unwrap()
            .iter()
            .any(|(prefix, marked_at)| key.starts_with(prefix) && *marked_at >= fetched_at)
    }

    /// Number of live marks
    pub fn len(&self) -> usize {
        self.marks.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_unmarked_key_is_clean() {
        let queue = InvalidationQueue::new();
        assert!(!queue.invalidated_since("expenses:list:a:page=1", Utc::now()));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_mark_dirties_entries_fetched_before() {
        let queue = InvalidationQueue::new();
        let fetched_at = Utc::now() - Duration::seconds(10);

        queue.mark("expenses:list:category=food:");

        assert!(queue.invalidated_since(
            "expenses:list:category=food:month=*:page=1:size=20",
            fetched_at
        ));
        assert!(queue.invalidated_since(
            "expenses:list:category=food:month=*:page=7:size=20",
            fetched_at
        ));
    }

    #[test]
    fn test_mark_scopes_to_prefix() {
        let queue = InvalidationQueue::new();
        let fetched_at = Utc::now() - Duration::seconds(10);

        queue.mark("expenses:list:category=food:");

        assert!(!queue.invalidated_since(
            "expenses:list:category=travel:month=*:page=1:size=20",
            fetched_at
        ));
        assert!(!queue.invalidated_since("expenses:summary:category=food:month=*", fetched_at));
    }

    #[test]
    fn test_refetch_after_mark_is_clean() {
        let queue = InvalidationQueue::new();
        queue.mark("expenses:list:category=food:");

        // An entry stored after the mark is considered reconciled
        let refetched_at = Utc::now() + Duration::seconds(1);
        assert!(!queue.invalidated_since(
            "expenses:list:category=food:month=*:page=1:size=20",
            refetched_at
        ));
    }

    #[test]
    fn test_remark_replaces_existing_mark() {
        let queue = InvalidationQueue::new();
        queue.mark("expenses:summary:category=food:month=*");

        let refetched_at = Utc::now() + Duration::seconds(1);
        assert!(!queue.invalidated_since("expenses:summary:category=food:month=*", refetched_at));

        // Same prefix marked twice keeps one entry, with the newer instant
        std::thread::sleep(std::time::Duration::from_millis(5));
        queue.mark("expenses:summary:category=food:month=*");
        assert_eq!(queue.len(), 1);
    }
}
