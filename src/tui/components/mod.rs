// Components module - reusable UI building blocks
//
// Shell components are rendered in every view:
// - Title bar: owner name, role, activity spinner
// - Nav bar: numbered section tabs
// - Status bar: uptime, section, theme, log count
//
// Each component is a focused, single-responsibility module.

pub mod nav_bar;
pub mod status_bar;
pub mod title_bar;

// Re-export render functions for convenient access
// Usage: components::title_bar::render(f, area, app)
//    or: components::render_title(f, area, app)

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the navigation bar (convenience wrapper)
pub fn render_nav(f: &mut Frame, area: Rect, app: &App) {
    nav_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
