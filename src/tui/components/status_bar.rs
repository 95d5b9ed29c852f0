// Status bar component
//
// Renders session info at the bottom: uptime, current section, theme,
// captured log count, and the help hint.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    let theme_icon = match app.theme {
        crate::tui::theme::ThemeKind::Dark => "🌙",
        crate::tui::theme::ThemeKind::Light => "☀",
    };

    let status_text = format!(
        " {} │ {} │ {} {} │ logs {} │ ? help │ q quit",
        app.uptime(),
        app.nav.current.name(),
        theme_icon,
        app.theme.name(),
        app.log_buffer.len(),
    );

    let status = Paragraph::new(status_text)
        .style(theme.status_style())
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
