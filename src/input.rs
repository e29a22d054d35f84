use crossterm::event::KeyCode;

/// Session-level commands available from the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Quit,
    ToggleTheme,
    Refresh,
}

/// Map a key press to a command. Character keys are case-insensitive;
/// unmapped keys are ignored.
pub fn parse_main_command(key_code: &KeyCode) -> Option<UiCommand> {
    match key_code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Some(UiCommand::Quit),
            't' => Some(UiCommand::ToggleTheme),
            'r' => Some(UiCommand::Refresh),
            _ => None,
        },
        KeyCode::Esc => Some(UiCommand::Quit),
        _ => None,
    }
}
