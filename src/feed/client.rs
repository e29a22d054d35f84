use futures_util::{SinkExt, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::tungstenite;

use crate::error::FeedError;
use crate::event::{AppEvent, FeedStatus};
use crate::feed::wire;
use crate::model::record::PriceRecord;

const RECORD_CHANNEL_CAPACITY: usize = 256;
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// WebSocket price feed. One `connect` call opens exactly one
/// connection; when it drops, for any reason, the feed does not come
/// back until the dashboard is mounted again.
#[derive(Debug, Clone)]
pub struct PriceFeed {
    url: String,
}

/// Per-mount handle returned by [`PriceFeed::connect`]. Owns the
/// record/event receivers and the shutdown signal; dropping it tears
/// the feed task down.
pub struct FeedHandle {
    pub records: mpsc::Receiver<PriceRecord>,
    pub events: mpsc::Receiver<AppEvent>,
    shutdown: watch::Sender<bool>,
}

impl FeedHandle {
    /// Signal the feed task to stop. Idempotent, never fails.
    pub fn close(&self) {
        let _ = self.shutdown.send(true);
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

impl PriceFeed {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }

    /// Spawn the feed task for one dashboard mount and hand back its
    /// channels. The connection attempt itself happens inside the task;
    /// failures surface as events, not as a return value, and no
    /// timeout is applied to the attempt.
    pub fn connect(&self) -> FeedHandle {
        let (record_tx, record_rx) = mpsc::channel(RECORD_CHANNEL_CAPACITY);
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let feed = self.clone();
        tokio::spawn(async move {
            feed.run(record_tx, event_tx, shutdown_rx).await;
        });

        FeedHandle {
            records: record_rx,
            events: event_rx,
            shutdown: shutdown_tx,
        }
    }

    /// Drive one connection to completion and report how it ended.
    pub async fn run(
        &self,
        record_tx: mpsc::Sender<PriceRecord>,
        event_tx: mpsc::Sender<AppEvent>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        match self
            .connect_once(&record_tx, &event_tx, &mut shutdown)
            .await
        {
            Ok(()) => {
                tracing::info!(url = %self.url, "Price feed stopped");
            }
            Err(e) => {
                tracing::warn!(url = %self.url, error = %e, "Price feed terminated");
                let _ = event_tx.send(AppEvent::Error(e.to_string())).await;
            }
        }
        let _ = event_tx
            .send(AppEvent::FeedStatus(FeedStatus::Disconnected))
            .await;
    }

    async fn connect_once(
        &self,
        record_tx: &mpsc::Sender<PriceRecord>,
        event_tx: &mpsc::Sender<AppEvent>,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Result<(), FeedError> {
        let _ = event_tx
            .send(AppEvent::FeedStatus(FeedStatus::Connecting))
            .await;
        let _ = event_tx
            .send(AppEvent::LogMessage(format!("Connecting to {}", self.url)))
            .await;

        let (ws_stream, _) = tokio_tungstenite::connect_async(&self.url)
            .await
            .map_err(|e| FeedError::Connect(e.to_string()))?;

        tracing::info!(url = %self.url, "WebSocket connected");
        let _ = event_tx
            .send(AppEvent::FeedStatus(FeedStatus::Connected))
            .await;
        let _ = event_tx
            .send(AppEvent::LogMessage("WebSocket connected".to_string()))
            .await;

        let (mut write, mut read) = ws_stream.split();

        loop {
            tokio::select! {
                msg = read.next() => {
                    match msg {
                        Some(Ok(tungstenite::Message::Text(text))) => {
                            match wire::parse_frame(&text) {
                                Ok(Some(record)) => {
                                    if record_tx.send(record).await.is_err() {
                                        // receiver gone: the mount ended
                                        return Ok(());
                                    }
                                }
                                Ok(None) => {
                                    // failed the shape check: dropped silently
                                }
                                Err(e) => {
                                    tracing::debug!(error = %e, "Discarding undecodable frame");
                                    let _ = event_tx
                                        .send(AppEvent::LogMessage(format!(
                                            "Frame decode failed: {}",
                                            e
                                        )))
                                        .await;
                                }
                            }
                        }
                        Some(Ok(tungstenite::Message::Ping(data))) => {
                            let _ = write.send(tungstenite::Message::Pong(data)).await;
                        }
                        Some(Ok(tungstenite::Message::Close(_))) => {
                            return Err(FeedError::StreamEnded);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            return Err(FeedError::Read(e.to_string()));
                        }
                        None => {
                            return Err(FeedError::StreamEnded);
                        }
                    }
                }
                _ = shutdown.changed() => {
                    tracing::debug!("Price feed shutdown requested");
                    return Ok(());
                }
            }
        }
    }
}
