use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::event::FeedStatus;
use crate::model::record::PriceRecord;
use crate::model::signal::Signal;
use crate::store::theme::{Palette, Theme};
use crate::ui::format;

/// Top line: ticker badge, company name, the newest tick's wall clock
/// and the active theme.
pub struct HeaderBar<'a> {
    pub symbol: &'a str,
    pub company: &'a str,
    pub latest: Option<&'a PriceRecord>,
    pub theme: Theme,
    pub palette: Palette,
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (date, time) = match self.latest {
            Some(r) => (
                format::date_label(&r.timestamp),
                format::clock_label(&r.timestamp),
            ),
            None => ("--".to_string(), "--:--:--".to_string()),
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.symbol),
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.company, Style::default().fg(self.palette.text)),
            Span::styled(
                format!("  {} {}", date, time),
                Style::default().fg(self.palette.dim),
            ),
            Span::styled(
                format!("  [{}]", self.theme.label()),
                Style::default().fg(self.palette.dim),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

fn render_value_box(
    area: Rect,
    buf: &mut Buffer,
    title: &str,
    value: &str,
    value_style: Style,
    border: Color,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", title));
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height == 0 || inner.width == 0 {
        return;
    }
    let width = value.chars().count() as u16;
    let x = inner.x + inner.width.saturating_sub(width) / 2;
    buf.set_string(x, inner.y, value, value_style);
}

/// Bid / mid / ask row for the newest tick. All three show the dashed
/// placeholder until the first record lands.
pub struct QuoteBoard<'a> {
    latest: Option<&'a PriceRecord>,
    palette: Palette,
}

impl<'a> QuoteBoard<'a> {
    pub fn new(latest: Option<&'a PriceRecord>, palette: Palette) -> Self {
        Self { latest, palette }
    }
}

impl Widget for QuoteBoard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        let bid = format::format_price(self.latest.map(|r| r.bid));
        let mid = format::format_price(self.latest.and_then(|r| r.mid()));
        let ask = format::format_price(self.latest.and_then(|r| r.ask));

        let bold = Modifier::BOLD;
        render_value_box(
            chunks[0],
            buf,
            "Bid",
            &bid,
            Style::default().fg(self.palette.up).add_modifier(bold),
            self.palette.border,
        );
        render_value_box(
            chunks[1],
            buf,
            "Mid Price",
            &mid,
            Style::default().fg(self.palette.accent).add_modifier(bold),
            self.palette.border,
        );
        render_value_box(
            chunks[2],
            buf,
            "Ask",
            &ask,
            Style::default().fg(self.palette.down).add_modifier(bold),
            self.palette.border,
        );
    }
}

/// Model summary row: running profits, operation count, hit accuracy
/// and the current buy/sell call with its direction arrow.
pub struct SummaryBoard<'a> {
    latest: Option<&'a PriceRecord>,
    palette: Palette,
}

impl<'a> SummaryBoard<'a> {
    pub fn new(latest: Option<&'a PriceRecord>, palette: Palette) -> Self {
        Self { latest, palette }
    }
}

impl Widget for SummaryBoard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
            ])
            .split(area);

        let earnings = self.latest.and_then(|r| r.earnings);
        let profits = format::format_currency(earnings);
        let profits_color = match earnings {
            Some(e) if e < 0.0 => self.palette.down,
            Some(_) => self.palette.up,
            None => self.palette.dim,
        };

        let operations = format::format_count(self.latest.and_then(|r| r.operations));
        let accuracy = format::format_percentage(self.latest.and_then(|r| r.accuracy));

        let (signal_text, signal_color) = match self.latest {
            Some(r) => {
                let signal = r.signal();
                let color = match signal {
                    Signal::Buy => self.palette.up,
                    Signal::Sell => self.palette.down,
                };
                (format!("{} {}", signal.label(), signal.arrow()), color)
            }
            None => ("--".to_string(), self.palette.dim),
        };

        let bold = Modifier::BOLD;
        render_value_box(
            chunks[0],
            buf,
            "Profits",
            &profits,
            Style::default().fg(profits_color).add_modifier(bold),
            self.palette.border,
        );
        render_value_box(
            chunks[1],
            buf,
            "Operations",
            &operations,
            Style::default().fg(self.palette.text),
            self.palette.border,
        );
        render_value_box(
            chunks[2],
            buf,
            "Accuracy",
            &accuracy,
            Style::default().fg(self.palette.text),
            self.palette.border,
        );
        render_value_box(
            chunks[3],
            buf,
            "Signal",
            &signal_text,
            Style::default().fg(signal_color).add_modifier(bold),
            self.palette.border,
        );
    }
}

/// Rolling session log, newest line at the bottom. Warnings and errors
/// keep their prefix and get their own color.
pub struct LogPanel<'a> {
    messages: &'a [String],
    palette: Palette,
}

impl<'a> LogPanel<'a> {
    pub fn new(messages: &'a [String], palette: Palette) -> Self {
        Self { messages, palette }
    }
}

impl Widget for LogPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
            .title(" System Log ");
        let inner = block.inner(area);

        let start = self.messages.len().saturating_sub(inner.height as usize);
        let lines: Vec<Line> = self.messages[start..]
            .iter()
            .map(|msg| {
                let style = if msg.starts_with("[ERR]") {
                    Style::default().fg(self.palette.down)
                } else if msg.starts_with("[WARN]") {
                    Style::default().fg(self.palette.series)
                } else {
                    Style::default().fg(self.palette.text)
                };
                Line::from(Span::styled(msg.as_str(), style))
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// One-line connection strip: app name, symbol, feed status, tick count.
pub struct StatusBar<'a> {
    pub symbol: &'a str,
    pub status: FeedStatus,
    pub tick_count: u64,
    pub palette: Palette,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status_color = match self.status {
            FeedStatus::Connected => self.palette.up,
            FeedStatus::Connecting => self.palette.series,
            FeedStatus::Disconnected => self.palette.down,
        };

        let line = Line::from(vec![
            Span::styled(
                " tickdeck ",
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("| {} | ", self.symbol),
                Style::default().fg(self.palette.dim),
            ),
            Span::styled(
                self.status.label(),
                Style::default().fg(status_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" | ticks: {}", self.tick_count),
                Style::default().fg(self.palette.dim),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

/// Bottom key help strip.
pub struct KeybindBar {
    pub palette: Palette,
}

impl Widget for KeybindBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key = Style::default()
            .fg(self.palette.text)
            .add_modifier(Modifier::BOLD);
        let hint = Style::default().fg(self.palette.dim);

        let line = Line::from(vec![
            Span::styled(" q", key),
            Span::styled(" quit  ", hint),
            Span::styled("t", key),
            Span::styled(" theme  ", hint),
            Span::styled("r", key),
            Span::styled(" refresh", hint),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
