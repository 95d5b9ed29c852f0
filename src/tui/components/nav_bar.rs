// Navigation bar component
//
// One tab per section, numbered for direct jumps. The current section is
// highlighted; during a transition the incoming section pulses instead.

use crate::navigation::{SectionId, SectionPhase};
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the section tabs under the title bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, section) in SectionId::all().iter().enumerate() {
        let label = format!(" {} {} ", i + 1, section.name());
        let style = match app.nav.phase(*section) {
            SectionPhase::Active => theme.selected_style(),
            SectionPhase::Entering => theme.accent_style(),
            SectionPhase::Exiting => theme.muted_style(),
            SectionPhase::Inactive => theme.base_style(),
        };
        spans.push(Span::styled(label, style));
        if i + 1 < SectionId::COUNT {
            spans.push(Span::styled("│", theme.border_style()));
        }
    }

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.border_style()));

    f.render_widget(bar, area);
}
