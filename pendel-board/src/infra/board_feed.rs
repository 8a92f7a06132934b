//! Periodic board refresh.
//!
//! The navigation core never performs I/O; this feed is the collaborator
//! that does. It polls the backend on a fixed cadence and publishes each
//! assembled snapshot over a watch channel. On failure the previous
//! snapshot stays published, so the dashboard degrades to stale data
//! rather than blanking.

use std::time::Duration;

use log::{debug, warn};
use pendel_model::BoardSnapshot;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::api_client::ApiClient;

#[derive(Debug)]
pub struct BoardFeed {
    receiver: watch::Receiver<Option<BoardSnapshot>>,
    handle: JoinHandle<()>,
}

impl BoardFeed {
    /// Spawn the refresh loop. The first fetch happens immediately, then
    /// every `interval`.
    pub fn spawn(client: ApiClient, interval: Duration) -> Self {
        let (sender, receiver) = watch::channel(None);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match client.fetch_snapshot().await {
                    Ok(snapshot) => {
                        debug!(
                            "board refresh: {} lines, {} journeys, {} predictions",
                            snapshot.by_line.len(),
                            snapshot.journeys.len(),
                            snapshot.predictions.len()
                        );
                        if sender.send(Some(snapshot)).is_err() {
                            break;
                        }
                    }
                    Err(err) => warn!("board refresh failed: {err:#}"),
                }
            }
        });
        Self { receiver, handle }
    }

    /// Subscribe to published snapshots. The value is `None` until the
    /// first successful fetch.
    pub fn subscribe(&self) -> watch::Receiver<Option<BoardSnapshot>> {
        self.receiver.clone()
    }

    /// Stop the refresh loop.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for BoardFeed {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn feed_publishes_none_until_first_fetch() {
        // Unroutable backend: the loop runs but never publishes.
        let client = ApiClient::new("localhost:9").unwrap();
        let feed = BoardFeed::spawn(client, Duration::from_secs(3600));
        let receiver = feed.subscribe();
        assert!(receiver.borrow().is_none());
        feed.shutdown();
    }
}
