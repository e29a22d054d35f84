use ratatui::backend::TestBackend;
use ratatui::Terminal;

use tickdeck::event::{AppEvent, FeedStatus};
use tickdeck::model::record::PriceRecord;
use tickdeck::ui::{self, AppState};

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn draw(state: &AppState) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal
        .draw(|frame| ui::render(frame, state))
        .expect("draw");
    buffer_text(&terminal)
}

fn record(bid: f64, will_go_up: i64) -> PriceRecord {
    PriceRecord {
        bid,
        ask: Some(bid + 0.5),
        will_go_up: Some(will_go_up),
        earnings: Some(12.301),
        operations: Some(42),
        accuracy: Some(0.873),
        timestamp: "2024-05-02T09:30:05".to_string(),
    }
}

#[test]
/// Before any data arrives every panel shows its dashed placeholder
/// and the chart shows the waiting notice.
fn empty_state_shows_placeholders_and_waiting_notice() {
    let state = AppState::new("A", "Agile Technologies Inc.");
    let text = draw(&state);

    assert!(text.contains("Agile Technologies Inc."), "header company missing");
    assert!(text.contains("Waiting for server data..."), "waiting notice missing");
    assert!(text.contains("$--"), "profits placeholder missing");
    assert!(text.contains("--%"), "accuracy placeholder missing");
    assert!(text.contains("CONNECTING"), "initial status missing");
    assert!(text.contains("ticks: 0"), "tick counter missing");
    assert!(text.contains(" Bid "), "bid panel missing");
    assert!(text.contains(" Mid Price "), "mid panel missing");
    assert!(text.contains(" Ask "), "ask panel missing");
}

#[test]
/// A tick with an upward model call renders BUY with the up arrow and
/// every derived value in its panel.
fn buy_tick_renders_derived_values() {
    let mut state = AppState::new("A", "Agile Technologies Inc.");
    state.apply(AppEvent::FeedStatus(FeedStatus::Connected));
    state.apply_record(record(100.0, 1));

    let text = draw(&state);
    assert!(text.contains("100.00"), "bid missing");
    assert!(text.contains("100.25"), "mid missing");
    assert!(text.contains("100.50"), "ask missing");
    assert!(text.contains("$12.30"), "profits missing");
    assert!(text.contains("42"), "operations missing");
    assert!(text.contains("87%"), "accuracy missing");
    assert!(text.contains("BUY ↑"), "buy signal missing");
    assert!(!text.contains("DISCONNECTED"), "status should be connected");
    assert!(text.contains("CONNECTED"), "status missing");
    assert!(text.contains("ticks: 1"), "tick counter missing");
    assert!(text.contains("09:30:05"), "tick wall clock missing");
    assert!(!text.contains("Waiting for server data..."), "waiting notice should be gone");
}

#[test]
/// A downward model call renders SELL with the down arrow.
fn sell_tick_renders_down_arrow() {
    let mut state = AppState::new("A", "Agile Technologies Inc.");
    state.apply_record(record(100.0, 0));

    let text = draw(&state);
    assert!(text.contains("SELL ↓"), "sell signal missing");
    assert!(!text.contains("BUY ↑"), "buy signal should not render");
}

#[test]
/// Losing the connection shows DISCONNECTED and the warning reaches
/// the visible log panel.
fn disconnect_shows_status_and_warning() {
    let mut state = AppState::new("A", "Agile Technologies Inc.");
    state.apply(AppEvent::FeedStatus(FeedStatus::Connected));
    state.apply_record(record(100.0, 1));
    state.apply(AppEvent::FeedStatus(FeedStatus::Disconnected));

    let text = draw(&state);
    assert!(text.contains("DISCONNECTED"), "status missing");
    assert!(
        text.contains("[WARN] WebSocket disconnected"),
        "warning missing from log panel"
    );
    // the data stays on screen after the drop
    assert!(text.contains("100.25"), "mid should survive the disconnect");
}

#[test]
/// Toggling the theme repaints but never changes the data: everything
/// below the header line is textually identical.
fn theme_toggle_changes_presentation_only() {
    let mut state = AppState::new("A", "Agile Technologies Inc.");
    state.apply_record(record(100.0, 1));

    let dark = draw(&state);
    state.theme.toggle();
    let light = draw(&state);

    assert!(dark.contains("[dark]"), "dark theme label missing");
    assert!(light.contains("[light]"), "light theme label missing");

    let dark_body: Vec<&str> = dark.lines().skip(1).collect();
    let light_body: Vec<&str> = light.lines().skip(1).collect();
    assert_eq!(dark_body, light_body);
}

#[test]
/// The chart plots only ticks that carry an ask; a history of bid-only
/// ticks still shows the waiting notice.
fn chart_skips_ticks_without_mid() {
    let mut state = AppState::new("A", "Agile Technologies Inc.");
    state.apply_record(PriceRecord {
        bid: 100.0,
        ask: None,
        will_go_up: None,
        earnings: None,
        operations: None,
        accuracy: None,
        timestamp: "2024-05-02T09:30:05".to_string(),
    });

    let text = draw(&state);
    assert!(text.contains("Waiting for server data..."), "chart should have nothing to plot");
    assert!(text.contains("100.00"), "bid panel should still show the tick");
}
