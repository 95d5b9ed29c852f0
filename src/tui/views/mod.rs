// Views module - section-level rendering logic
//
// Each section is a full-screen page within the TUI:
// - Home: hero banner with activity chart, counters, and drifting glyphs
// - About: bio, expertise list with highlight effects, live statistics
// - Skills: proficiency gauges grouped by category
// - Projects: project cards that launch demo windows
// - Contact: contact methods and the inquiry form
//
// This module dispatches on the active section, then stacks overlays on
// top: demo window, then modal (help/logs), then notification popup.

mod about;
mod contact;
mod home;
mod overlay;
mod projects;
mod skills;

use std::time::Instant;

use super::app::App;
use crate::navigation::{SectionId, SectionPhase};
use crate::tui::components;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

pub(crate) use overlay::centered_rect;

/// Main draw function - called on every render
pub fn draw(f: &mut Frame, app: &mut App, now: Instant) {
    let theme = app.theme.theme();

    // Paint the background for the whole frame
    let bg = Block::default().style(Style::default().bg(theme.bg).fg(theme.fg));
    f.render_widget(bg, f.area());

    // Shell layout: title bar, nav tabs, section content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);
    components::render_nav(f, chunks[1], app);

    match app.nav.current {
        SectionId::Home => home::render(f, chunks[2], app, now),
        SectionId::About => about::render(f, chunks[2], app, now),
        SectionId::Skills => skills::render(f, chunks[2], app, now),
        SectionId::Projects => projects::render(f, chunks[2], app),
        SectionId::Contact => contact::render(f, chunks[2], app),
    }

    components::render_status(f, chunks[3], app);

    // Overlays, bottom to top: demo window, modal, notification
    if app.showcase.is_some() {
        overlay::render_showcase(f, app, now);
    }

    if let Some(modal_state) = app.modal.take() {
        overlay::render_modal(f, &modal_state, app);
        app.modal = Some(modal_state);
    }

    if app.notification.is_some() {
        overlay::render_notification(f, app);
    }
}

/// Border style for a section while a transition is playing
///
/// The exit leg dims the outgoing section, the enter leg tints the
/// incoming one with the accent color until it settles.
pub(crate) fn phase_border_style(theme: &Theme, phase: SectionPhase) -> Style {
    match phase {
        SectionPhase::Exiting => theme.muted_style(),
        SectionPhase::Entering => theme.accent_style(),
        _ => theme.border_style(),
    }
}

/// Whether a staggered content row has been revealed yet
///
/// Rows appear one at a time when a section is first visited. Until a
/// row's turn comes up it stays blank, then it sticks permanently.
pub(crate) fn row_revealed(app: &App, section: SectionId, row: usize) -> bool {
    app.revealed_rows[section.index()] > row
}

/// Split a content area into rows with a fixed height each, consuming
/// the remainder with the last constraint
pub(crate) fn rows(area: Rect, constraints: &[Constraint]) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints.to_vec())
        .split(area)
}
