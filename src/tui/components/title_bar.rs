// Title bar component
//
// Renders the owner's name and role, with a spinner while a section
// transition or theme switch is playing.

use crate::content;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();
    let profile = content::profile();

    let activity = if app.nav.animating {
        format!(" {} ", app.spinner_char())
    } else if app.theme_transitioning {
        format!(" {} {}", app.spinner_char(), app.theme.name())
    } else {
        String::new()
    };

    let title_text = format!(" ◆ {} · {}{}", profile.name, profile.role, activity);

    let title = Paragraph::new(title_text)
        .style(theme.title_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.title_style())
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
