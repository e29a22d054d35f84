use thiserror::Error;

/// Failures inside the price feed task. None of these cross the
/// process boundary: the feed reports them as events and ends; a new
/// connection only happens on an explicit refresh.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("WebSocket read error: {0}")]
    Read(String),

    #[error("WebSocket stream ended")]
    StreamEnded,

    #[error("frame decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
