// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.
// The notification popup is not a modal: it lives in App with its own
// auto-close timing.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Scroll up in content
    ScrollUp,
    /// Scroll down in content
    ScrollDown,
    /// Page up vertically
    PageUp,
    /// Page down vertically
    PageDown,
    /// Jump to top
    ScrollTop,
    /// Jump to bottom
    ScrollBottom,
    /// Clear the captured logs
    ClearLogs,
}

/// Available modal types
#[derive(Debug, Clone)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Captured log viewer
    Logs,
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn logs() -> Self {
        Modal::Logs
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Logs => match key {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('l') => ModalAction::Close,
                KeyCode::Up | KeyCode::Char('k') => ModalAction::ScrollUp,
                KeyCode::Down | KeyCode::Char('j') => ModalAction::ScrollDown,
                KeyCode::PageUp => ModalAction::PageUp,
                KeyCode::PageDown => ModalAction::PageDown,
                KeyCode::Home => ModalAction::ScrollTop,
                KeyCode::End => ModalAction::ScrollBottom,
                KeyCode::Char('c') => ModalAction::ClearLogs,
                _ => ModalAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_closes_on_usual_keys() {
        let mut modal = Modal::help();
        assert!(matches!(modal.handle_input(KeyCode::Esc), ModalAction::Close));
        assert!(matches!(
            modal.handle_input(KeyCode::Char('?')),
            ModalAction::Close
        ));
        assert!(matches!(
            modal.handle_input(KeyCode::Char('x')),
            ModalAction::None
        ));
    }

    #[test]
    fn test_logs_scroll_and_clear() {
        let mut modal = Modal::logs();
        assert!(matches!(
            modal.handle_input(KeyCode::Char('j')),
            ModalAction::ScrollDown
        ));
        assert!(matches!(
            modal.handle_input(KeyCode::Char('c')),
            ModalAction::ClearLogs
        ));
        assert!(matches!(
            modal.handle_input(KeyCode::Char('l')),
            ModalAction::Close
        ));
    }
}
