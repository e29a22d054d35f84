use ratatui::style::Color;

/// Display preference for the whole dashboard; dark is the default.
/// Switching themes changes presentation only, never data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Flip dark to light and back.
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Colors resolved from the active theme. Panels never pick colors
/// themselves; everything goes through here so a toggle repaints the
/// whole screen consistently.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub series: Color,
    pub up: Color,
    pub down: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                text: Color::White,
                dim: Color::DarkGray,
                border: Color::DarkGray,
                accent: Color::Cyan,
                series: Color::Yellow,
                up: Color::Green,
                down: Color::Red,
            },
            Theme::Light => Self {
                text: Color::Black,
                dim: Color::Gray,
                border: Color::Gray,
                accent: Color::Blue,
                series: Color::Yellow,
                up: Color::Green,
                down: Color::Red,
            },
        }
    }
}
