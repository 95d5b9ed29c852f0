// Skills section - proficiency gauges grouped by category
//
// Categories release one after another, then each skill bar fills to
// its target over 1.5s with a count-up percentage label. A check mark
// lands when a bar completes. `r` replays the whole sequence.

use std::time::Instant;

use crate::content;
use crate::navigation::SectionId;
use crate::sequencer::AnimPhase;
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the skills section
pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App, now: Instant) {
    let theme = app.theme.theme();
    let phase = app.nav.phase(SectionId::Skills);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(super::phase_border_style(&theme, phase))
        .title(" Skills ")
        .title_bottom(Line::from(" r replay ").right_aligned());
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let catalog = content::skill_categories();

    // One block per category, a gauge line per skill plus the title row
    let constraints: Vec<Constraint> = catalog
        .iter()
        .map(|c| Constraint::Length(c.skills.len() as u16 + 2))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = super::rows(inner, &constraints);

    for (ci, category) in catalog.iter().enumerate() {
        if !super::row_revealed(app, SectionId::Skills, ci) {
            continue;
        }
        let Some(state) = app.skills.categories.get(ci) else {
            continue;
        };

        let border = if state.released {
            theme.accent_style()
        } else {
            theme.muted_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", category.title));
        let body = block.inner(chunks[ci]);
        f.render_widget(block, chunks[ci]);

        let skill_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(1); category.skills.len()])
            .split(body);

        for (si, skill) in category.skills.iter().enumerate() {
            let Some(anim) = state.skills.get(si) else {
                continue;
            };

            let row = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(14), Constraint::Min(10)])
                .split(skill_rows[si]);

            let name_style = match anim.phase {
                AnimPhase::Settled => theme.base_style().add_modifier(Modifier::BOLD),
                _ => theme.base_style(),
            };
            f.render_widget(
                Paragraph::new(Line::styled(skill.name, name_style)),
                row[0],
            );

            let (fill, label) = match anim.phase {
                AnimPhase::Settled => (
                    theme.gauge_complete,
                    format!("{}% ✓", skill.target),
                ),
                AnimPhase::Running => (
                    theme.gauge_fill,
                    format!("{}%", anim.value(now)),
                ),
                _ => (theme.gauge_fill, "0%".to_string()),
            };

            let gauge = Gauge::default()
                .gauge_style(
                    ratatui::style::Style::default()
                        .fg(fill)
                        .bg(theme.selected_bg),
                )
                .ratio(anim.percent_ratio(now).clamp(0.0, 1.0))
                .label(label);
            f.render_widget(gauge, row[1]);
        }
    }
}
