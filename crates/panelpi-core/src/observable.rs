//! Observable printer feeds
//!
//! A [`Feed`] holds the current value of something the controller reports
//! and notifies subscribers when it changes. Only the latest value is kept:
//! a slow subscriber skips intermediate values instead of queueing them.

use crate::data::{FileInfo, PrinterSnapshot};
use tokio::sync::watch;

/// Latest-value feed with change notification
#[derive(Debug)]
pub struct Feed<T> {
    sender: watch::Sender<T>,
}

/// Feed of printer status snapshots
pub type SnapshotFeed = Feed<PrinterSnapshot>;

/// Feed of the currently selected file, `None` when no file is loaded
pub type FileFeed = Feed<Option<FileInfo>>;

impl<T: Clone> Feed<T> {
    /// Create a feed holding an initial value
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Replace the current value and notify subscribers
    ///
    /// The value is stored even when nobody is subscribed yet.
    pub fn publish(&self, value: T) {
        self.sender.send_replace(value);
    }

    /// Clone of the current value
    pub fn current(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Subscribe to changes
    ///
    /// The receiver sees the current value immediately and is notified of
    /// every later change until the feed is dropped.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T: Clone + Default> Default for Feed<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PrinterStatus;

    #[test]
    fn test_publish_without_subscribers_keeps_value() {
        let feed = SnapshotFeed::default();
        feed.publish(PrinterSnapshot::with_status(PrinterStatus::Paused));
        assert_eq!(feed.current().status, PrinterStatus::Paused);
        assert_eq!(feed.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_subscriber_sees_latest_value_only() {
        let feed = SnapshotFeed::default();
        let mut rx = feed.subscribe();

        feed.publish(PrinterSnapshot::with_status(PrinterStatus::Idle));
        feed.publish(PrinterSnapshot::with_status(PrinterStatus::Active));

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().status, PrinterStatus::Active);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_dropping_feed_closes_subscribers() {
        let feed = FileFeed::new(Some(FileInfo::named("a.gcode")));
        let mut rx = feed.subscribe();
        drop(feed);

        assert_eq!(
            rx.borrow().as_ref().map(|f| f.file_name.clone()),
            Some("a.gcode".to_string())
        );
        assert!(rx.changed().await.is_err());
    }
}
