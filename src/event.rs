/// Connection lifecycle as observed by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Connecting,
    Connected,
    Disconnected,
}

impl FeedStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FeedStatus::Connecting => "CONNECTING",
            FeedStatus::Connected => "CONNECTED",
            FeedStatus::Disconnected => "DISCONNECTED",
        }
    }
}

/// Diagnostics the feed task sends to the session loop. Price records
/// travel on their own channel; these only describe the connection.
#[derive(Debug, Clone)]
pub enum AppEvent {
    FeedStatus(FeedStatus),
    LogMessage(String),
    Error(String),
}
