use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Widget};

use crate::model::record::PriceRecord;
use crate::store::theme::Palette;
use crate::ui::format;

/// Line chart of mid prices over the retained history. Each column is
/// one tick; when the history is wider than the panel only the newest
/// window is shown. Records without an ask carry no mid and are
/// skipped.
pub struct MidPriceChart<'a> {
    records: &'a [PriceRecord],
    symbol: &'a str,
    palette: Palette,
}

impl<'a> MidPriceChart<'a> {
    pub fn new(records: &'a [PriceRecord], symbol: &'a str, palette: Palette) -> Self {
        Self {
            records,
            symbol,
            palette,
        }
    }
}

impl Widget for MidPriceChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
            .title(format!(" Mid Price ({}) ", self.symbol));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 12 || inner.height < 4 {
            return;
        }

        let points: Vec<(f64, &str)> = self
            .records
            .iter()
            .filter_map(|r| r.mid().map(|mid| (mid, r.timestamp.as_str())))
            .collect();

        if points.is_empty() {
            let msg = "Waiting for server data...";
            let x = inner.x + (inner.width.saturating_sub(msg.len() as u16)) / 2;
            let y = inner.y + inner.height / 2;
            buf.set_string(x, y, msg, Style::default().fg(self.palette.dim));
            return;
        }

        // bottom row is the time axis, the rest is the plot
        let plot_height = inner.height - 1;
        let plot_width = inner.width as usize;

        let start = points.len().saturating_sub(plot_width);
        let visible = &points[start..];

        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for (mid, _) in visible {
            min = min.min(*mid);
            max = max.max(*mid);
        }
        let range = if (max - min) <= f64::EPSILON {
            1.0
        } else {
            max - min
        };

        let series_style = Style::default().fg(self.palette.series);
        for (i, (mid, _)) in visible.iter().enumerate() {
            let norm = (mid - min) / range;
            let y_off = ((1.0 - norm) * (plot_height - 1) as f64).round() as u16;
            buf.set_string(inner.x + i as u16, inner.y + y_off, "●", series_style);
        }

        let label_style = Style::default().fg(self.palette.dim);
        buf.set_string(inner.x, inner.y, format!("{:.2}", max), label_style);
        buf.set_string(
            inner.x,
            inner.y + plot_height - 1,
            format!("{:.2}", min),
            label_style,
        );

        // oldest visible tick on the left edge, newest on the right
        let axis_y = inner.y + inner.height - 1;
        if let Some((_, first_ts)) = visible.first() {
            buf.set_string(inner.x, axis_y, format::clock_label(first_ts), label_style);
        }
        if visible.len() > 1 && inner.width >= 20 {
            if let Some((_, last_ts)) = visible.last() {
                let label = format::clock_label(last_ts);
                let x = inner.x + inner.width - label.len() as u16;
                buf.set_string(x, axis_y, label, label_style);
            }
        }
    }
}
