// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the UI
// - Driving the animation sequencer

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod modal;
pub mod theme;
pub mod views;

use crate::config::Config;
use crate::content;
use crate::form::FieldId;
use crate::logging::LogBuffer;
use crate::navigation::SectionId;
use anyhow::{Context, Result};
use app::{App, ContactPane, FORM_SEND_ROW};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done. The event loop handles keyboard input and timer ticks.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Create app state with config (initializes theme, intro sequence)
    let mut app = App::new(&config, log_buffer, Instant::now());

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &config).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles two types of events:
/// 1. Keyboard and mouse input (for navigation and commands)
/// 2. Timer ticks (to advance the sequencer and redraw)
///
/// The use of tokio::select! allows us to wait on multiple async operations
/// simultaneously, responding to whichever one completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> Result<()> {
    // Every animation rides on the tick, so it runs much faster than a
    // redraw-on-input loop would need to
    let mut tick_interval = tokio::time::interval(Duration::from_millis(config.tick_ms));

    loop {
        // Draw the UI
        let now = Instant::now();
        terminal
            .draw(|f| views::draw(f, app, now))
            .context("Failed to draw terminal")?;

        // Wait for events using tokio::select!
        // This is non-blocking and efficient - we only wake up when something happens
        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick: poll the sequencer, settle running animations
            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Notification → Modal → Form editing → Showcase →
/// Global → Section-specific
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    let now = Instant::now();

    // Layer 1: notification popup absorbs input while visible
    if handle_notification_input(app, &key_event) {
        return;
    }

    // Layer 2: modal (help / logs) captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 3: a focused form field takes raw typing
    if handle_form_input(app, &key_event, now) {
        return;
    }

    // Layer 4: the demo window absorbs everything else while open
    if handle_showcase_input(app, &key_event) {
        return;
    }

    // Layer 5: global keys (work regardless of section)
    if handle_global_keys(app, &key_event, now) {
        return;
    }

    let key = key_event.code;

    // Layer 6: section keys (use InputHandler for debounce)
    match key_event.kind {
        KeyEventKind::Press => {
            match key {
                KeyCode::Enter => {
                    if app.handle_key_press(key) && !app.should_debounce_action() {
                        activate_selection(app, now);
                    }
                    return;
                }
                KeyCode::Tab => {
                    if app.handle_key_press(key) {
                        // Contact splits into two panes; Tab moves between
                        // them instead of leaving the section
                        if app.nav.current == SectionId::Contact {
                            app.toggle_contact_pane();
                        } else {
                            app.navigate_next(now);
                        }
                    }
                    return;
                }
                KeyCode::BackTab => {
                    if app.handle_key_press(key) {
                        if app.nav.current == SectionId::Contact {
                            app.toggle_contact_pane();
                        } else {
                            app.navigate_prev(now);
                        }
                    }
                    return;
                }
                KeyCode::Right => {
                    if app.handle_key_press(key) {
                        app.navigate_next(now);
                    }
                    return;
                }
                KeyCode::Left => {
                    if app.handle_key_press(key) {
                        app.navigate_prev(now);
                    }
                    return;
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    if app.handle_key_press(key) {
                        match app.nav.current {
                            SectionId::Skills => app.animate_all_skills(now),
                            SectionId::Home => app.trigger_data_visualization(now),
                            _ => {}
                        }
                    }
                    return;
                }
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    if app.handle_key_press(key) {
                        copy_contact_method(app, now);
                    }
                    return;
                }
                _ => {}
            }

            // Navigation keys - use state tracking for hold-to-repeat
            if !app.handle_key_press(key) {
                return;
            }

            match key {
                KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp => app.select_previous(),
                KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown => app.select_next(),
                _ => {}
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key);
        }
        _ => {}
    }
}

/// Enter on the current selection, per section
fn activate_selection(app: &mut App, now: Instant) {
    match app.nav.current {
        SectionId::Home => app.trigger_data_visualization(now),
        SectionId::About => app.highlight_expertise(now, app.about_selected),
        SectionId::Skills => app.animate_all_skills(now),
        SectionId::Projects => {
            if let Some(card) = content::project_cards().get(app.projects_selected) {
                app.launch_demo(now, card.demo);
            }
        }
        SectionId::Contact => match app.contact_pane {
            ContactPane::Methods => app.activate_contact_method(now, app.methods_selected),
            ContactPane::Form => {
                if app.form_selected < FORM_SEND_ROW {
                    app.form.focus(FieldId::all()[app.form_selected]);
                } else {
                    app.submit_form(now);
                }
            }
        },
    }
}

/// y in the Contact methods pane copies the selected method's value
fn copy_contact_method(app: &mut App, now: Instant) {
    if app.nav.current != SectionId::Contact || app.contact_pane != ContactPane::Methods {
        return;
    }
    if let Some(method) = content::contact_methods().get(app.methods_selected) {
        match clipboard::copy_to_clipboard(method.value) {
            Ok(()) => {
                app.show_notification(
                    now,
                    "Copied",
                    &format!("{} copied to clipboard.", method.value),
                );
            }
            Err(e) => {
                tracing::warn!("clipboard copy failed: {:#}", e);
                app.show_notification(now, "Copy Failed", "Clipboard is not available here.");
            }
        }
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => {
            // If a modal is open, scroll it; otherwise move the selection
            if app.modal.is_some() {
                scroll_logs(app, 1);
            } else {
                app.select_previous();
            }
        }
        MouseEventKind::ScrollDown => {
            if app.modal.is_some() {
                scroll_logs(app, -1);
            } else {
                app.select_next();
            }
        }
        _ => {}
    }
}

/// Handle notification input - returns true if the popup absorbed it
fn handle_notification_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if app.notification.is_none() {
        return false;
    }

    // CRITICAL: Always process Release events to keep InputHandler in sync
    // Without this, keys get stuck in "pressed" state after the popup closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }
    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match key_event.code {
        KeyCode::Esc => {
            // Escape dismisses the popup and any demo window under it
            app.close_notification();
            if app.showcase.is_some() {
                app.close_showcase();
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('q') => app.close_notification(),
        _ => {}
    }

    true
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // CRITICAL: Always process Release events to keep InputHandler in sync
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }
    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::ScrollUp => scroll_logs(app, 1),
        ModalAction::ScrollDown => scroll_logs(app, -1),
        ModalAction::PageUp => scroll_logs(app, 10),
        ModalAction::PageDown => scroll_logs(app, -10),
        ModalAction::ScrollTop => app.logs_scroll = usize::MAX,
        ModalAction::ScrollBottom => app.logs_scroll = 0,
        ModalAction::ClearLogs => {
            app.log_buffer.clear();
            app.logs_scroll = 0;
        }
    }

    true
}

/// Move the logs scroll offset; the render pass clamps to content
fn scroll_logs(app: &mut App, delta: i64) {
    if delta >= 0 {
        app.logs_scroll = app.logs_scroll.saturating_add(delta as usize);
    } else {
        app.logs_scroll = app.logs_scroll.saturating_sub(delta.unsigned_abs() as usize);
    }
}

/// Handle typing while a form field is focused - returns true if absorbed
///
/// Typing bypasses the InputHandler debounce entirely; every printable
/// key must land in the field, including keys that are shortcuts
/// elsewhere (q, t, numbers).
fn handle_form_input(app: &mut App, key_event: &KeyEvent, now: Instant) -> bool {
    if app.nav.current != SectionId::Contact || app.form.focused.is_none() {
        return false;
    }

    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }
    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    let focused = app.form.focused;
    match key_event.code {
        KeyCode::Esc => app.form.blur(),
        KeyCode::Enter => {
            if focused == Some(FieldId::Message) {
                app.form.insert_char('\n');
            } else {
                // Like a browser form, Enter inside a field submits
                app.submit_form(now);
            }
        }
        KeyCode::Tab | KeyCode::Down => focus_form_row(app, app.form_selected + 1),
        KeyCode::BackTab | KeyCode::Up => {
            focus_form_row(app, app.form_selected.saturating_sub(1));
        }
        KeyCode::Left => {
            if focused == Some(FieldId::ProjectType) {
                app.form.cycle_project_type(-1);
            } else {
                app.form.cursor_left();
            }
        }
        KeyCode::Right => {
            if focused == Some(FieldId::ProjectType) {
                app.form.cycle_project_type(1);
            } else {
                app.form.cursor_right();
            }
        }
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char(c) => app.form.insert_char(c),
        _ => {}
    }

    true
}

/// Move form selection to `row`, focusing it when it is a field
fn focus_form_row(app: &mut App, row: usize) {
    let row = row.min(FORM_SEND_ROW);
    app.form_selected = row;
    if row < FORM_SEND_ROW {
        app.form.focus(FieldId::all()[row]);
    } else {
        app.form.blur();
    }
}

/// Handle input while the demo window is open - returns true if absorbed
fn handle_showcase_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if app.showcase.is_none() {
        return false;
    }

    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }
    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match key_event.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_showcase(),
        _ => {}
    }

    true
}

/// Handle global keys - returns true if handled
/// Global keys work the same regardless of current section
/// Uses InputHandler for debounce (StateChange behavior = trigger once per press)
fn handle_global_keys(app: &mut App, key_event: &KeyEvent, now: Instant) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // Direct section selection
        KeyCode::Char('1'..='5') => {
            if app.handle_key_press(key) {
                if let KeyCode::Char(c) = key {
                    let idx = (c as usize) - ('1' as usize);
                    if let Some(section) = SectionId::from_index(idx) {
                        app.navigate_to(now, section);
                    }
                }
            }
            true
        }
        // Theme toggle
        KeyCode::Char('t') | KeyCode::Char('T') => {
            if app.handle_key_press(key) {
                app.toggle_theme(now);
            }
            true
        }
        // Log viewer
        KeyCode::Char('l') | KeyCode::Char('L') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::logs());
            }
            true
        }
        // Help modal
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::help());
            }
            true
        }
        _ => false,
    }
}
