// Projects section - cards that launch demo windows
//
// Three project cards with tags. Enter on the selected card opens its
// demo showcase, rendered as an overlay on top of the section.

use crate::content;
use crate::navigation::SectionId;
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the projects section
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();
    let phase = app.nav.phase(SectionId::Projects);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(super::phase_border_style(&theme, phase))
        .title(" Projects ")
        .title_bottom(Line::from(" Enter run demo ").right_aligned());
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let cards = content::project_cards();
    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Length(4))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = super::rows(inner, &constraints);

    for (i, card) in cards.iter().enumerate() {
        if !super::row_revealed(app, SectionId::Projects, i) {
            continue;
        }

        let selected = app.projects_selected == i;
        let running = app
            .showcase
            .as_ref()
            .map(|s| s.request.kind == card.demo)
            .unwrap_or(false);

        let border = if selected {
            theme.border_focused_style()
        } else {
            theme.border_style()
        };
        let title_style = if selected {
            theme.selected_style()
        } else {
            theme.base_style().add_modifier(Modifier::BOLD)
        };

        let marker = if running {
            " ▶ "
        } else if selected {
            " ▸ "
        } else {
            "   "
        };

        let mut tag_spans: Vec<Span> = vec![Span::raw("   ")];
        for (t, tag) in card.tags.iter().enumerate() {
            if t > 0 {
                tag_spans.push(Span::raw(" "));
            }
            tag_spans.push(Span::styled(format!("[{tag}]"), theme.accent_style()));
        }

        let body = vec![
            Line::from(vec![
                Span::styled(marker, theme.accent_style()),
                Span::styled(card.summary, theme.base_style()),
            ]),
            Line::from(tag_spans),
        ];

        let widget = Paragraph::new(body).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(format!(" {} ", card.title), title_style)),
        );
        f.render_widget(widget, chunks[i]);
    }
}
