// Contact section - methods pane and inquiry form
//
// Left pane lists contact methods with a short activation animation.
// Right pane is the form: float labels that raise on focus or content,
// a cycling project type selector, flash-on-reset fields, and a send
// button that walks Idle -> Loading -> Success.

use crate::content;
use crate::form::{FieldId, SubmitState};
use crate::navigation::SectionId;
use crate::tui::app::{App, ContactPane, FORM_SEND_ROW};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the contact section
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();
    let phase = app.nav.phase(SectionId::Contact);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(super::phase_border_style(&theme, phase))
        .title(" Contact ");
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    if super::row_revealed(app, SectionId::Contact, 0) {
        render_methods(f, panes[0], app);
    }
    if super::row_revealed(app, SectionId::Contact, 1) {
        render_form(f, panes[1], app);
    }
}

fn render_methods(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();
    let focused = app.contact_pane == ContactPane::Methods;

    let border = if focused {
        theme.border_focused_style()
    } else {
        theme.border_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" Reach Me ")
        .title_bottom(Line::from(" Enter activate · y copy ").right_aligned());
    let body = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (i, method) in content::contact_methods().iter().enumerate() {
        let selected = focused && app.methods_selected == i;
        let active = app.methods.active == Some(i);

        let marker = if selected { "▸ " } else { "  " };
        let label_style = if active {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else if selected {
            theme.selected_style()
        } else {
            theme.base_style().add_modifier(Modifier::BOLD)
        };

        lines.push(Line::from(vec![
            Span::styled(marker, theme.accent_style()),
            Span::styled(method.label, label_style),
            Span::raw(if active { "  ◉" } else { "" }),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(method.value, theme.accent_style()),
        ]));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines), body);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();
    let focused_pane = app.contact_pane == ContactPane::Form;

    let border = if focused_pane {
        theme.border_focused_style()
    } else {
        theme.border_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" Start a Project ")
        .title_bottom(Line::from(" Tab pane · Enter edit ").right_aligned());
    let body = block.inner(area);
    f.render_widget(block, area);

    let rows = super::rows(
        body,
        &[
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(0),
        ],
    );

    for field in FieldId::all() {
        render_field(f, rows[field.index()], app, &theme, field, focused_pane);
    }
    render_send_row(f, rows[FORM_SEND_ROW], app, &theme, focused_pane);

    if app.form.loading_overlay {
        render_loading_overlay(f, body, app, &theme);
    }
}

/// One form field with its float label
///
/// The label lives in the block title once raised (focus or content),
/// otherwise it sits inside the field as a placeholder.
fn render_field(
    f: &mut Frame,
    area: Rect,
    app: &App,
    theme: &Theme,
    field: FieldId,
    focused_pane: bool,
) {
    let idx = field.index();
    let focused = app.form.focused == Some(field);
    let selected = focused_pane && app.form_selected == idx;
    let flashing = app.form.flashes[idx];

    let border = if flashing {
        theme.success_style().add_modifier(Modifier::BOLD)
    } else if focused {
        theme.border_focused_style()
    } else if selected {
        theme.accent_style()
    } else {
        theme.border_style()
    };

    let raised = app.form.label_raised(field);
    let mut block = Block::default().borders(Borders::ALL).border_style(border);
    if raised {
        let label_style = if focused {
            theme.accent_style()
        } else {
            theme.muted_style()
        };
        block = block.title(Span::styled(format!(" {} ", field.label()), label_style));
    }

    let content_line = if field == FieldId::ProjectType {
        project_type_line(app, theme, focused)
    } else if focused {
        let value = app.form.value(field);
        let cursor = app.form.cursor.min(value.len());
        Line::from(vec![
            Span::styled(value[..cursor].to_string(), theme.base_style()),
            Span::styled("│", theme.accent_style().add_modifier(Modifier::BOLD)),
            Span::styled(value[cursor..].to_string(), theme.base_style()),
        ])
    } else if raised {
        Line::from(Span::styled(app.form.value(field).to_string(), theme.base_style()))
    } else {
        // Placeholder doubles as the unraised label
        Line::from(Span::styled(
            field.label(),
            theme.muted_style().add_modifier(Modifier::DIM),
        ))
    };

    let widget = Paragraph::new(content_line)
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(widget, area);
}

fn project_type_line(app: &App, theme: &Theme, focused: bool) -> Line<'static> {
    let picked = app
        .form
        .project_type
        .and_then(|i| content::project_types().get(i))
        .map(|(_, label)| *label);

    if focused {
        let label = picked.unwrap_or("(choose)");
        Line::from(vec![
            Span::styled("◂ ", theme.accent_style()),
            Span::styled(label.to_string(), theme.base_style()),
            Span::styled(" ▸", theme.accent_style()),
        ])
    } else {
        match picked {
            Some(label) => Line::from(Span::styled(label.to_string(), theme.base_style())),
            None => Line::from(Span::styled(
                FieldId::ProjectType.label(),
                theme.muted_style().add_modifier(Modifier::DIM),
            )),
        }
    }
}

fn render_send_row(f: &mut Frame, area: Rect, app: &App, theme: &Theme, focused_pane: bool) {
    let selected = focused_pane && app.form_selected == FORM_SEND_ROW;

    let (text, style) = match app.form.submit {
        SubmitState::Idle => (
            "[ Send Message ]".to_string(),
            if selected {
                theme.selected_style()
            } else {
                theme.accent_style()
            },
        ),
        SubmitState::Loading => (
            format!("[ {} Sending... ]", app.spinner_char()),
            theme.muted_style().add_modifier(Modifier::BOLD),
        ),
        SubmitState::Success => (
            "[ ✓ Message Sent ]".to_string(),
            theme.success_style().add_modifier(Modifier::BOLD),
        ),
    };

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center),
        area,
    );
}

/// Dim the form while simulated delivery is in flight
fn render_loading_overlay(f: &mut Frame, body: Rect, app: &App, theme: &Theme) {
    let area = super::centered_rect(30, 3, body);
    f.render_widget(Clear, area);
    let overlay = Paragraph::new(Line::from(Span::styled(
        format!(" {} Sending your message... ", app.spinner_char()),
        theme.accent_style().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_focused_style()),
    );
    f.render_widget(overlay, area);
}
