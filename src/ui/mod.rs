pub mod chart;
pub mod dashboard;
pub mod format;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::event::{AppEvent, FeedStatus};
use crate::model::record::PriceRecord;
use crate::store::history::PriceHistory;
use crate::store::theme::{Palette, Theme};
use crate::ui::chart::MidPriceChart;
use crate::ui::dashboard::{HeaderBar, KeybindBar, LogPanel, QuoteBoard, StatusBar, SummaryBoard};

const MAX_LOG_MESSAGES: usize = 200;

/// Everything the terminal renders from. Mutated only by the session
/// loop; the feed task talks to it through channels, never directly.
pub struct AppState {
    pub symbol: String,
    pub company: String,
    pub history: PriceHistory,
    pub theme: Theme,
    pub feed_status: FeedStatus,
    pub tick_count: u64,
    pub log_messages: Vec<String>,
}

impl AppState {
    pub fn new(symbol: &str, company: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            company: company.to_string(),
            history: PriceHistory::new(),
            theme: Theme::default(),
            feed_status: FeedStatus::Connecting,
            tick_count: 0,
            log_messages: Vec::new(),
        }
    }

    /// Fold one validated record into the dashboard.
    pub fn apply_record(&mut self, record: PriceRecord) {
        self.tick_count += 1;
        self.history.append(record);
    }

    /// Fold one feed diagnostic into the dashboard.
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::FeedStatus(status) => {
                if status == FeedStatus::Disconnected
                    && self.feed_status != FeedStatus::Disconnected
                {
                    self.push_log("[WARN] WebSocket disconnected".to_string());
                }
                self.feed_status = status;
            }
            AppEvent::LogMessage(msg) => self.push_log(msg),
            AppEvent::Error(msg) => self.push_log(format!("[ERR] {}", msg)),
        }
    }

    /// Return the dashboard to its pre-data state for a fresh mount:
    /// empty history, zero ticks, connection pending. Theme and session
    /// log survive a remount.
    pub fn reset_for_mount(&mut self) {
        self.history.clear();
        self.tick_count = 0;
        self.feed_status = FeedStatus::Connecting;
    }

    pub fn push_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_MESSAGES {
            self.log_messages.remove(0);
        }
    }
}

/// Draw the full dashboard for the current state.
pub fn render(frame: &mut Frame, state: &AppState) {
    let palette = Palette::for_theme(state.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(
        HeaderBar {
            symbol: &state.symbol,
            company: &state.company,
            latest: state.history.latest(),
            theme: state.theme,
            palette,
        },
        chunks[0],
    );
    frame.render_widget(
        MidPriceChart::new(state.history.records(), &state.symbol, palette),
        chunks[1],
    );
    frame.render_widget(QuoteBoard::new(state.history.latest(), palette), chunks[2]);
    frame.render_widget(SummaryBoard::new(state.history.latest(), palette), chunks[3]);
    frame.render_widget(LogPanel::new(&state.log_messages, palette), chunks[4]);
    frame.render_widget(
        StatusBar {
            symbol: &state.symbol,
            status: state.feed_status,
            tick_count: state.tick_count,
            palette,
        },
        chunks[5],
    );
    frame.render_widget(KeybindBar { palette }, chunks[6]);
}
