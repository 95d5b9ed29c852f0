// Home section - hero banner
//
// The landing page: name and role, tagline, the animated activity chart
// with drifting statistical glyphs, and the three count-up statistics.
// Content rows fade in one at a time on first visit.

use std::time::Instant;

use crate::content;
use crate::navigation::SectionId;
use crate::sequencer::AnimPhase;
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph},
    Frame,
};

/// Render the home section
pub fn render(f: &mut Frame, area: Rect, app: &App, now: Instant) {
    let theme = app.theme.theme();
    let phase = app.nav.phase(SectionId::Home);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(super::phase_border_style(&theme, phase))
        .title(" Home ");
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = super::rows(
        inner,
        &[
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(4),
        ],
    );

    if super::row_revealed(app, SectionId::Home, 0) {
        render_banner(f, chunks[0], app);
    }
    if super::row_revealed(app, SectionId::Home, 1) {
        render_tagline(f, chunks[1], app);
    }
    if super::row_revealed(app, SectionId::Home, 2) {
        render_visualization(f, chunks[2], app, now);
    }
    if super::row_revealed(app, SectionId::Home, 3) {
        render_stats(f, chunks[3], app, now);
    }
}

fn render_banner(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();
    let profile = content::profile();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            profile.name,
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(profile.role, theme.accent_style())),
    ];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_tagline(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();
    let profile = content::profile();

    let tagline = Paragraph::new(Line::from(Span::styled(profile.tagline, theme.muted_style())))
        .alignment(Alignment::Center);
    f.render_widget(tagline, area);
}

/// The hero visualization: bar chart on the left, glyph field on the right
fn render_visualization(f: &mut Frame, area: Rect, app: &App, now: Instant) {
    let theme = app.theme.theme();

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    // Chart block pulses while the replay sequence is running
    let chart_border = if app.hero.pulse {
        theme.accent_style().add_modifier(Modifier::BOLD)
    } else {
        theme.border_style()
    };
    let chart_title = if app.hero.pulse {
        " ● Data Visualization "
    } else {
        " Data Visualization "
    };

    let heights: Vec<(&str, u64)> = app
        .hero
        .bars
        .iter()
        .map(|bar| ("", bar.value(now)))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(chart_border)
                .title(chart_title),
        )
        .data(&heights)
        .bar_width(5)
        .bar_gap(2)
        .max(100)
        .bar_style(Style::default().fg(theme.chart_primary))
        .value_style(
            Style::default()
                .fg(theme.chart_secondary)
                .bg(theme.chart_primary),
        );
    f.render_widget(chart, halves[0]);

    render_particles(f, halves[1], app);
}

/// Floating statistical glyphs next to the chart
///
/// Glyphs drift horizontally with the tick counter. Released glyphs get
/// the accent color, the rest stay dim until their turn in the cascade.
fn render_particles(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    let glyphs = content::particles();

    let mut lines: Vec<Line> = vec![Line::from("")];
    let mut row: Vec<Span> = Vec::new();
    for (i, released) in app.hero.particles.iter().enumerate() {
        let Some(glyph) = glyphs.get(i) else { break };
        let drift = ((app.tick_count / 8 + i as u64) % 3) as usize;
        row.push(Span::raw(" ".repeat(1 + drift)));
        let style = if *released {
            theme.accent_style().add_modifier(Modifier::BOLD)
        } else {
            theme.muted_style().add_modifier(Modifier::DIM)
        };
        row.push(Span::styled(*glyph, style));

        // Two glyphs per row keeps the field airy at narrow widths
        if i % 2 == 1 {
            lines.push(Line::from(std::mem::take(&mut row)));
            lines.push(Line::from(""));
        }
    }
    if !row.is_empty() {
        lines.push(Line::from(row));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Signals ");
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

/// Count-up statistics across the bottom of the hero
fn render_stats(f: &mut Frame, area: Rect, app: &App, now: Instant) {
    let theme = app.theme.theme();
    let specs = content::hero_stats();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (i, stat) in app.hero.stats.iter().enumerate() {
        let Some(spec) = specs.get(i) else { break };

        let value_style = match stat.phase {
            AnimPhase::Running => theme.accent_style().add_modifier(Modifier::BOLD),
            AnimPhase::Settled => Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
            _ => theme.muted_style(),
        };

        let lines = vec![
            Line::from(Span::styled(
                format!("{}{}", stat.value(now), spec.suffix),
                value_style,
            )),
            Line::from(Span::styled(spec.label, theme.muted_style())),
        ];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), columns[i]);
    }
}
