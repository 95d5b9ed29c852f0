// Overlay rendering - demo showcase, help and logs modals, notification
//
// Overlays draw on top of the section content. Each clears its area
// first so the content underneath never bleeds through.

use std::time::Instant;

use crate::content::{self, DemoVisual};
use crate::logging::LogLevel;
use crate::sequencer::ease_out_cubic;
use crate::tui::app::App;
use crate::tui::modal::Modal;
use crate::tui::theme::Theme;
use crate::util::fit_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Calculate centered rect for an overlay dialog
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render a modal dialog as a centered overlay
pub fn render_modal(f: &mut Frame, modal: &Modal, app: &mut App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Logs => render_logs(f, app),
    }
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let theme = app.theme.theme();

    let key_style = Style::default().fg(theme.accent);
    let desc_style = Style::default().fg(theme.fg);
    let header_style = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Sections", header_style)),
        kb("1-5", "Jump to section"),
        kb("←/→, Tab", "Previous / next section"),
        kb("↑/↓, j/k", "Move selection"),
        kb("Enter", "Activate selection"),
        Line::raw(""),
        Line::from(Span::styled("  In Sections", header_style)),
        kb("Enter", "Home: replay visualization"),
        kb("Enter", "About: highlight expertise"),
        kb("r", "Skills: replay bars"),
        kb("Enter", "Projects: run demo"),
        kb("Tab", "Contact: switch pane"),
        kb("y", "Contact: copy method"),
        Line::raw(""),
        Line::from(Span::styled("  Form", header_style)),
        kb("Enter", "Edit field / submit"),
        kb("←/→", "Cursor / pick project type"),
        kb("Esc", "Leave field"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Toggle theme"),
        kb("l", "Show logs"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name(), key_style),
        ]),
    ]);

    let area = centered_rect(44, 30, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );
    f.render_widget(paragraph, area);
}

/// Render the captured-logs modal overlay
fn render_logs(f: &mut Frame, app: &mut App) {
    let theme = app.theme.theme();
    let frame_area = f.area();

    let width = frame_area.width.saturating_sub(8).max(40);
    let height = frame_area.height.saturating_sub(6).max(10);
    let area = centered_rect(width, height, frame_area);
    f.render_widget(Clear, area);

    let entries = app.log_buffer.get_all();
    let viewport = area.height.saturating_sub(2) as usize;
    let text_width = area.width.saturating_sub(2) as usize;

    // Scroll offset counts lines up from the bottom; clamp after the
    // buffer shrinks (clear) or the terminal grows
    let max_scroll = entries.len().saturating_sub(viewport);
    app.logs_scroll = app.logs_scroll.min(max_scroll);

    let end = entries.len() - app.logs_scroll;
    let start = end.saturating_sub(viewport);

    let lines: Vec<Line> = entries[start..end]
        .iter()
        .map(|entry| {
            let level_style = match entry.level {
                LogLevel::Error => Style::default().fg(theme.log_error),
                LogLevel::Warn => Style::default().fg(theme.log_warn),
                LogLevel::Info => Style::default().fg(theme.log_info),
                LogLevel::Debug => Style::default().fg(theme.log_debug),
                LogLevel::Trace => Style::default().fg(theme.log_trace),
            };
            let prefix = format!(
                "{} {:<5} ",
                entry.timestamp.format("%H:%M:%S"),
                entry.level.as_str()
            );
            let budget = text_width.saturating_sub(prefix.len());
            Line::from(vec![
                Span::styled(prefix, theme.muted_style()),
                Span::styled(fit_width(&entry.message, budget), level_style),
            ])
        })
        .collect();

    let scroll_info = if max_scroll > 0 {
        format!(" Logs ({}, -{} lines) ", entries.len(), app.logs_scroll)
    } else {
        format!(" Logs ({}) ", entries.len())
    };

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .title(scroll_info)
                .title_bottom(Line::from(" j/k scroll · c clear · Esc close ").centered()),
        );
    f.render_widget(paragraph, area);
}

/// Render the demo showcase window
pub fn render_showcase(f: &mut Frame, app: &App, now: Instant) {
    let theme = app.theme.theme();
    let Some(showcase) = &app.showcase else {
        return;
    };
    let config = content::demo_config(showcase.request.kind);
    let elapsed = now.saturating_duration_since(showcase.opened);

    let area = centered_rect(56, 18, f.area());
    f.render_widget(Clear, area);

    let remaining = config.duration.saturating_sub(elapsed);
    let hint = format!(" Esc close · {}s ", remaining.as_secs() + 1);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style().add_modifier(Modifier::BOLD))
        .title(format!(" {} ", config.title))
        .title_bottom(Line::from(hint).centered())
        .style(Style::default().bg(theme.bg));
    let body = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.push(Line::from(Span::styled(config.description, theme.muted_style())));
    lines.push(Line::from(""));

    match config.visual {
        DemoVisual::Network { layers, metrics } => {
            network_lines(&mut lines, &theme, layers, elapsed);
            metric_lines(&mut lines, &theme, metrics);
        }
        DemoVisual::Chart { bars, metrics } => {
            chart_lines(&mut lines, &theme, bars, elapsed);
            metric_lines(&mut lines, &theme, metrics);
        }
        DemoVisual::Prediction {
            segments,
            points,
            metrics,
        } => {
            prediction_lines(&mut lines, &theme, segments, points, elapsed);
            metric_lines(&mut lines, &theme, metrics);
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "{} · {} UTC",
            showcase.request.id,
            showcase.request.timestamp.format("%H:%M:%S")
        ),
        theme.muted_style().add_modifier(Modifier::DIM),
    )));

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );
}

/// Feed-forward network sketch, one layer landing every 300ms
fn network_lines(lines: &mut Vec<Line>, theme: &Theme, layers: &[usize], elapsed: std::time::Duration) {
    for (l, neurons) in layers.iter().enumerate() {
        let visible = elapsed.as_millis() >= (l as u128) * 300;
        if !visible {
            lines.push(Line::from(""));
            lines.push(Line::from(""));
            continue;
        }
        let row = vec!["●"; *neurons].join("   ");
        lines.push(Line::from(Span::styled(
            row,
            theme.accent_style().add_modifier(Modifier::BOLD),
        )));
        if l + 1 < layers.len() {
            lines.push(Line::from(Span::styled("│", theme.muted_style())));
        }
    }
    lines.push(Line::from(""));
}

/// Mini bar chart, bars growing with a 100ms stagger
fn chart_lines(lines: &mut Vec<Line>, theme: &Theme, bars: &[u16], elapsed: std::time::Duration) {
    const CELLS: usize = 24;
    for (i, pct) in bars.iter().enumerate() {
        let delay = 100 * (i as u128 + 1);
        let t = if elapsed.as_millis() <= delay {
            0.0
        } else {
            (((elapsed.as_millis() - delay) as f64) / 800.0).min(1.0)
        };
        let eased = ease_out_cubic(t);
        let filled = ((f64::from(*pct) / 100.0) * eased * CELLS as f64).round() as usize;

        let label = if t >= 1.0 {
            format!(" {pct}%")
        } else {
            String::new()
        };
        lines.push(Line::from(vec![
            Span::styled("█".repeat(filled), Style::default().fg(theme.chart_primary)),
            Span::styled(
                "░".repeat(CELLS.saturating_sub(filled)),
                theme.muted_style().add_modifier(Modifier::DIM),
            ),
            Span::styled(label, theme.muted_style()),
        ]));
    }
    lines.push(Line::from(""));
}

/// Fitted line climbing across sample points, one segment per 200ms
fn prediction_lines(
    lines: &mut Vec<Line>,
    theme: &Theme,
    segments: usize,
    points: usize,
    elapsed: std::time::Duration,
) {
    // Spread the sample points over the first, middle, and last segments
    let has_point = |i: usize| -> bool {
        points > 0 && (i == 0 || i == segments.saturating_sub(1) || i == segments / 2)
    };

    for r in 0..segments {
        let i = segments - 1 - r;
        let visible = elapsed.as_millis() >= (i as u128) * 200;
        if !visible {
            lines.push(Line::from(""));
            continue;
        }
        let indent = " ".repeat(2 + i * 4);
        let body = if i == segments.saturating_sub(1) {
            "──●"
        } else if has_point(i) {
            "●──╱"
        } else {
            "──╱"
        };
        lines.push(Line::from(vec![
            Span::raw(indent),
            Span::styled(body, Style::default().fg(theme.chart_primary)),
        ]));
    }
    lines.push(Line::from(""));
}

fn metric_lines(lines: &mut Vec<Line>, theme: &Theme, metrics: &[(&'static str, &'static str)]) {
    for (name, value) in metrics {
        lines.push(Line::from(vec![
            Span::styled(format!("{name}  "), theme.muted_style()),
            Span::styled(*value, theme.accent_style().add_modifier(Modifier::BOLD)),
        ]));
    }
}

/// Render the notification popup, always on top
pub fn render_notification(f: &mut Frame, app: &App) {
    let theme = app.theme.theme();
    let Some(notification) = &app.notification else {
        return;
    };

    let area = centered_rect(48, 7, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            notification.message.clone(),
            theme.base_style(),
        )),
    ];

    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD))
                .title(format!(" {} ", notification.title))
                .title_bottom(Line::from(" Enter dismiss ").centered()),
        );
    f.render_widget(popup, area);
}
