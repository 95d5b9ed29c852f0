// About section - bio, expertise list, live statistics
//
// The expertise list is interactive: Enter highlights the selected item
// and plays its effect (symbol rain, pulse, or shimmer) inline. The
// statistics panel computes mean/median/std dev over the skill targets
// on every render, the same numbers the Skills gauges animate toward.

use std::time::Instant;

use crate::content::{self, EffectKind};
use crate::navigation::SectionId;
use crate::stats::{calculate_statistic, Metric};
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the about section
pub fn render(f: &mut Frame, area: Rect, app: &App, now: Instant) {
    let theme = app.theme.theme();
    let phase = app.nav.phase(SectionId::About);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(super::phase_border_style(&theme, phase))
        .title(" About ");
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = super::rows(
        inner,
        &[Constraint::Length(5), Constraint::Min(9), Constraint::Length(6)],
    );

    if super::row_revealed(app, SectionId::About, 0) {
        render_bio(f, chunks[0], app);
    }
    if super::row_revealed(app, SectionId::About, 1) {
        render_expertise(f, chunks[1], app, now);
    }
    if super::row_revealed(app, SectionId::About, 2) {
        render_numbers(f, chunks[2], app);
    }
}

fn render_bio(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();
    let profile = content::profile();

    let lines: Vec<Line> = profile.bio.iter().map(|l| Line::from(*l)).collect();
    let bio = Paragraph::new(lines)
        .style(theme.base_style())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Background "),
        );
    f.render_widget(bio, area);
}

/// The expertise list with selection, highlight, and inline effects
fn render_expertise(f: &mut Frame, area: Rect, app: &App, now: Instant) {
    let theme = app.theme.theme();
    let items = content::expertise();

    let mut lines: Vec<Line> = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let selected = app.about_selected == i;
        let highlighted = app.expertise.highlighted == Some(i);

        let marker = if selected { "▸ " } else { "  " };
        let title_style = if highlighted {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else if selected {
            theme.selected_style()
        } else {
            theme.base_style()
        };

        lines.push(Line::from(vec![
            Span::styled(marker, theme.accent_style()),
            Span::styled(item.title, title_style),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(item.detail, theme.muted_style()),
        ]));

        // Effect line appears under the item while its effect is running
        match &app.expertise.effect {
            Some(effect) if effect.item == i => {
                lines.push(effect_line(&theme, effect.kind, effect.started, now, app));
            }
            _ => lines.push(Line::from("")),
        }
    }

    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(" Expertise ")
            .title_bottom(Line::from(" ↑↓ select · Enter highlight ").right_aligned()),
    );
    f.render_widget(list, area);
}

/// One line of inline effect, shaped by the effect kind
fn effect_line(
    theme: &crate::tui::theme::Theme,
    kind: EffectKind,
    started: Instant,
    now: Instant,
    app: &App,
) -> Line<'static> {
    let elapsed = now.saturating_duration_since(started);
    match kind {
        EffectKind::Statistical => {
            // One symbol lands every 200ms
            let visible = (elapsed.as_millis() / 200 + 1).min(content::STAT_SYMBOLS.len() as u128);
            let shown = content::STAT_SYMBOLS[..visible as usize].join(" ");
            Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    shown,
                    Style::default()
                        .fg(theme.highlight)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        }
        EffectKind::Visualization => {
            let frame = if app.tick_count / 4 % 2 == 0 {
                "▁▃▅▇▅▃▁"
            } else {
                "▃▅▇▅▃▁▃"
            };
            Line::from(vec![
                Span::raw("    "),
                Span::styled(frame.to_string(), Style::default().fg(theme.chart_secondary)),
            ])
        }
        EffectKind::Ml => {
            let shimmer = if app.tick_count / 3 % 2 == 0 {
                "◦─●─◦─●─◦"
            } else {
                "●─◦─●─◦─●"
            };
            Line::from(vec![
                Span::raw("    "),
                Span::styled(shimmer.to_string(), Style::default().fg(theme.highlight)),
            ])
        }
    }
}

/// Live statistics over the skill targets
fn render_numbers(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();
    let targets = content::skill_targets();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(
            stat_block_inner(f, area, &theme, targets.len()),
        );

    let metrics = [Metric::Mean, Metric::Median, Metric::Std];
    for (i, metric) in metrics.iter().enumerate() {
        let value = calculate_statistic(&targets, *metric, 1);
        let lines = vec![
            Line::from(Span::styled(
                format!("{value}"),
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(metric.label(), theme.muted_style())),
        ];
        f.render_widget(
            Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
            columns[i],
        );
    }
}

fn stat_block_inner(f: &mut Frame, area: Rect, theme: &crate::tui::theme::Theme, n: usize) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(format!(" Skill Profile (n={n}) "));
    let inner = block.inner(area);
    f.render_widget(block, area);
    inner
}
