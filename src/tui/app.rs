// TUI application state
//
// This module holds the whole portfolio state: current section, running
// animations, the contact form, overlays, and the step schedule that
// drives every timed sequence. All action methods take the current
// instant so the tick loop and the tests share one clock.

use super::input::InputHandler;
use super::modal::Modal;
use super::theme::ThemeKind;
use crate::config::Config;
use crate::content::{self, DemoKind, DemoRequest, EffectKind};
use crate::form::{ContactForm, FieldId, FormSubmission, SubmitState};
use crate::logging::LogBuffer;
use crate::navigation::{Navigator, SectionId};
use crate::sequencer::{AnimPhase, CountUp, Sequencer, Step};
use crate::stats::stagger_delay;
use std::time::{Duration, Instant};

/// Delay before the hero visualization kicks off at startup
const INTRO_DELAY: Duration = Duration::from_millis(1000);
/// Growth time of one hero chart bar
const BAR_GROW_DURATION: Duration = Duration::from_millis(800);
/// Count-up time of the hero statistics
const STAT_COUNT_DURATION: Duration = Duration::from_millis(2000);
/// When the intro announces itself, measured from the trigger
const VISUALIZATION_NOTIFY_DELAY: Duration = Duration::from_millis(2000);
/// Fill time of one skill bar
const SKILL_FILL_DURATION: Duration = Duration::from_millis(1500);
/// Contact method: delay until its action fires, and until it clears
const METHOD_ACTION_DELAY: Duration = Duration::from_millis(300);
const METHOD_CLEAR_DELAY: Duration = Duration::from_millis(1000);
/// Simulated delivery round-trip for the contact form
const FORM_DELIVERY_DELAY: Duration = Duration::from_millis(2500);
/// Field flash length during the form reset cascade
const FLASH_DURATION: Duration = Duration::from_millis(500);
/// When the fields clear, measured from delivery
const FORM_CLEAR_DELAY: Duration = Duration::from_millis(800);
/// When the submit button returns to idle, measured from delivery
const SUBMIT_RESET_DELAY: Duration = Duration::from_millis(3000);
/// How long the showcase waits after closing before announcing completion
const SHOWCASE_NOTIFY_LAG: Duration = Duration::from_millis(500);
/// Notification popups auto-close after this long
const NOTIFICATION_DURATION: Duration = Duration::from_millis(4000);
/// Brief indicator while the theme switches
const THEME_TRANSITION: Duration = Duration::from_millis(300);

/// Debounce duration for action keys (Enter, Esc, q)
/// Prevents rapid-fire triggers on terminals that don't send release events
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Spinner frames for transitions and the submit overlay
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Which pane has focus in the Contact section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactPane {
    #[default]
    Methods,
    Form,
}

/// The notification popup's content
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

/// An open project showcase
pub struct Showcase {
    pub request: DemoRequest,
    pub opened: Instant,
}

/// A one-shot animated value with its lifecycle phase
#[derive(Debug, Default)]
pub struct CountAnim {
    pub countup: Option<CountUp>,
    pub phase: AnimPhase,
}

impl CountAnim {
    /// Displayed value at `now`, pinned to the target once settled
    pub fn value(&self, now: Instant) -> u64 {
        match (&self.countup, self.phase) {
            (Some(c), AnimPhase::Settled) => c.end,
            (Some(c), _) => c.value_at(now),
            (None, _) => 0,
        }
    }

    /// Fill ratio in [0, 1] for targets that are percentages
    pub fn percent_ratio(&self, now: Instant) -> f64 {
        match (&self.countup, self.phase) {
            (Some(c), AnimPhase::Settled) => c.end as f64 / 100.0,
            (Some(c), _) => (c.end as f64 / 100.0) * c.eased(now),
            (None, _) => 0.0,
        }
    }
}

/// Hero visualization state: chart bars, counters, particles
pub struct HeroState {
    pub bars: Vec<CountAnim>,
    pub pulse: bool,
    pub stats: Vec<CountAnim>,
    pub particles: Vec<bool>,
}

impl HeroState {
    fn new() -> Self {
        Self {
            bars: content::chart_bars().iter().map(|_| CountAnim::default()).collect(),
            pulse: false,
            stats: content::hero_stats().iter().map(|_| CountAnim::default()).collect(),
            particles: vec![false; content::particles().len()],
        }
    }
}

/// A running expertise effect, tied to the item that started it
pub struct ActiveEffect {
    pub item: usize,
    pub kind: EffectKind,
    pub started: Instant,
}

#[derive(Default)]
pub struct ExpertiseState {
    pub highlighted: Option<usize>,
    pub effect: Option<ActiveEffect>,
}

pub struct CategoryState {
    pub released: bool,
    pub skills: Vec<CountAnim>,
}

pub struct SkillsState {
    /// Set once the full sequence has been started
    pub animated: bool,
    pub categories: Vec<CategoryState>,
}

impl SkillsState {
    fn new() -> Self {
        Self {
            animated: false,
            categories: content::skill_categories()
                .iter()
                .map(|c| CategoryState {
                    released: false,
                    skills: c.skills.iter().map(|_| CountAnim::default()).collect(),
                })
                .collect(),
        }
    }

    /// Back to zero-width bars and idle counters
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[derive(Default)]
pub struct MethodsState {
    /// The contact method currently playing its activation
    pub active: Option<usize>,
}

/// Main application state for the TUI
pub struct App {
    /// Section navigation and transition lock
    pub nav: Navigator,

    /// Pending timed steps for every running sequence
    pub sequencer: Sequencer,

    pub hero: HeroState,
    pub expertise: ExpertiseState,
    pub skills: SkillsState,
    pub showcase: Option<Showcase>,
    pub methods: MethodsState,
    pub form: ContactForm,

    /// Submission held while its delivery delay runs
    pub pending_submission: Option<FormSubmission>,

    /// Notification popup, if one is showing
    pub notification: Option<Notification>,

    /// Active modal overlay (help, logs)
    pub modal: Option<Modal>,

    /// Rows revealed so far per section (first-visit cascade)
    pub revealed_rows: [usize; SectionId::COUNT],

    // Per-section selections
    pub about_selected: usize,
    pub projects_selected: usize,
    pub contact_pane: ContactPane,
    pub methods_selected: usize,
    /// 0..=3 are form fields, 4 is the send row
    pub form_selected: usize,

    /// Scroll offset in the logs overlay
    pub logs_scroll: usize,

    /// Current color theme
    pub theme: ThemeKind,
    pub theme_transitioning: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Frames rendered, drives the spinner and particle drift
    pub tick_count: u64,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Log buffer for the logs overlay
    pub log_buffer: LogBuffer,

    /// Last time an action key was triggered (for debouncing)
    last_action_time: Option<Instant>,
}

/// Index of the send row in the form pane
pub const FORM_SEND_ROW: usize = FieldId::COUNT;

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer, now: Instant) -> Self {
        let mut app = Self {
            nav: Navigator::new(),
            sequencer: Sequencer::new(),
            hero: HeroState::new(),
            expertise: ExpertiseState::default(),
            skills: SkillsState::new(),
            showcase: None,
            methods: MethodsState::default(),
            form: ContactForm::new(),
            pending_submission: None,
            notification: None,
            modal: None,
            revealed_rows: [0; SectionId::COUNT],
            about_selected: 0,
            projects_selected: 0,
            contact_pane: ContactPane::default(),
            methods_selected: 0,
            form_selected: 0,
            logs_scroll: 0,
            theme: config.theme,
            theme_transitioning: false,
            should_quit: false,
            start_time: now,
            tick_count: 0,
            input_handler: InputHandler::default(),
            log_buffer,
            last_action_time: None,
        };

        // Home is visible from the start, cascade its rows in
        app.schedule_reveal(now, SectionId::Home);
        if config.intro {
            app.sequencer.schedule_after(now, INTRO_DELAY, Step::IntroStart);
        }
        app
    }

    /// Advance the clock: fire due steps and settle running count-ups
    pub fn tick(&mut self, now: Instant) {
        self.tick_count += 1;

        for step in self.sequencer.poll(now) {
            self.apply_step(now, step);
        }

        // Hero count-ups settle on the frame their duration elapses
        for anim in self.hero.bars.iter_mut().chain(self.hero.stats.iter_mut()) {
            if anim.phase == AnimPhase::Running {
                if let Some(c) = &anim.countup {
                    if c.is_settled(now) {
                        anim.phase = AnimPhase::Settled;
                    }
                }
            }
        }
    }

    fn apply_step(&mut self, now: Instant, step: Step) {
        match step {
            Step::IntroStart => self.trigger_data_visualization(now),
            Step::SectionSwap { to } => {
                if self.nav.apply_swap(to) {
                    self.schedule_reveal(now, to);
                }
            }
            Step::SectionSettle { to } => {
                self.nav.apply_settle(to);
                // First settle on the skills section starts the bars
                if to == SectionId::Skills && !self.skills.animated {
                    self.animate_all_skills(now);
                }
            }
            Step::RevealRow { section, row } => {
                let idx = section.index();
                self.revealed_rows[idx] = self.revealed_rows[idx].max(row + 1);
            }
            Step::ChartBarRelease { index } => {
                let height = content::chart_bars().get(index).copied().unwrap_or(0);
                if let Some(bar) = self.hero.bars.get_mut(index) {
                    bar.countup = Some(CountUp::new(0, height as u64, BAR_GROW_DURATION, now));
                    bar.phase = AnimPhase::Running;
                }
            }
            Step::StatRelease { index } => {
                let target = content::hero_stats().get(index).map(|s| s.target).unwrap_or(0);
                if let Some(stat) = self.hero.stats.get_mut(index) {
                    stat.countup = Some(CountUp::new(0, target, STAT_COUNT_DURATION, now));
                    stat.phase = AnimPhase::Running;
                }
            }
            Step::ParticleRelease { index } => {
                if let Some(p) = self.hero.particles.get_mut(index) {
                    *p = true;
                }
            }
            Step::VisualizationNotify => {
                self.show_notification(
                    now,
                    "Data Visualization Activated!",
                    "Interactive charts and statistics are now animated.",
                );
            }
            Step::ExpertiseEffectEnd { index } => {
                if self.expertise.effect.as_ref().map_or(false, |e| e.item == index) {
                    self.expertise.effect = None;
                }
            }
            Step::ExpertiseClear { index } => {
                if self.expertise.highlighted == Some(index) {
                    self.expertise.highlighted = None;
                }
            }
            Step::CategoryRelease { index } => {
                if let Some(category) = self.skills.categories.get_mut(index) {
                    category.released = true;
                }
                let count = content::skill_categories()
                    .get(index)
                    .map(|c| c.skills.len())
                    .unwrap_or(0);
                for j in 0..count {
                    self.sequencer.schedule_after(
                        now,
                        stagger_delay(j, 100, 150),
                        Step::SkillRelease { category: index, index: j },
                    );
                }
            }
            Step::SkillRelease { category, index } => {
                let target = content::skill_categories()
                    .get(category)
                    .and_then(|c| c.skills.get(index))
                    .map(|s| s.target)
                    .unwrap_or(0);
                if let Some(anim) = self
                    .skills
                    .categories
                    .get_mut(category)
                    .and_then(|c| c.skills.get_mut(index))
                {
                    anim.countup = Some(CountUp::new(0, target as u64, SKILL_FILL_DURATION, now));
                    anim.phase = AnimPhase::Running;
                }
                self.sequencer.schedule_after(
                    now,
                    SKILL_FILL_DURATION,
                    Step::SkillComplete { category, index },
                );
            }
            Step::SkillComplete { category, index } => {
                if let Some(anim) = self
                    .skills
                    .categories
                    .get_mut(category)
                    .and_then(|c| c.skills.get_mut(index))
                {
                    anim.phase = AnimPhase::Settled;
                }
            }
            Step::ShowcaseClose => {
                self.showcase = None;
            }
            Step::ShowcaseNotify { kind } => {
                let title = content::demo_config(kind).title;
                let message = format!("{} demonstration finished successfully.", title);
                self.show_notification(now, "Demo Complete", &message);
            }
            Step::MethodAction { index } => {
                if let Some(method) = content::contact_methods().get(index) {
                    self.show_notification(now, method.notify_title, method.notify_message);
                }
            }
            Step::MethodClear { index } => {
                if self.methods.active == Some(index) {
                    self.methods.active = None;
                }
            }
            Step::FormDelivered => {
                if let Some(submission) = self.pending_submission.take() {
                    self.form.loading_overlay = false;
                    self.form.submit = SubmitState::Success;
                    tracing::info!(
                        "inquiry recorded from {} ({})",
                        submission.name,
                        submission.project_type
                    );
                    self.show_notification(now, "Message Sent!", &submission.success_message());
                    // Field flash cascade, then clear, then button reset
                    for i in 0..FieldId::COUNT {
                        let delay = stagger_delay(i, 100, 50);
                        self.sequencer.schedule_after(now, delay, Step::FieldFlash { index: i });
                        self.sequencer.schedule_after(
                            now,
                            delay + FLASH_DURATION,
                            Step::FieldFlashEnd { index: i },
                        );
                    }
                    self.sequencer.schedule_after(now, FORM_CLEAR_DELAY, Step::FormClear);
                    self.sequencer.schedule_after(now, SUBMIT_RESET_DELAY, Step::SubmitReset);
                }
            }
            Step::FieldFlash { index } => {
                if let Some(f) = self.form.flashes.get_mut(index) {
                    *f = true;
                }
            }
            Step::FieldFlashEnd { index } => {
                if let Some(f) = self.form.flashes.get_mut(index) {
                    *f = false;
                }
            }
            Step::FormClear => {
                self.form.clear();
            }
            Step::SubmitReset => {
                if self.form.submit == SubmitState::Success {
                    self.form.submit = SubmitState::Idle;
                }
            }
            Step::NotificationClose => {
                self.notification = None;
            }
            Step::ThemeSettle => {
                self.theme_transitioning = false;
            }
        }
    }

    /// Queue the reveal cascade for a section's rows
    fn schedule_reveal(&mut self, now: Instant, section: SectionId) {
        for row in 0..content::reveal_rows(section) {
            self.sequencer.schedule_after(
                now,
                stagger_delay(row, 100, 50),
                Step::RevealRow { section, row },
            );
        }
    }

    /// Start a section transition, unless one is running already
    pub fn navigate_to(&mut self, now: Instant, to: SectionId) {
        if self.nav.begin_transition(now, &mut self.sequencer, to) {
            tracing::debug!("navigating to {}", to.name());
        }
    }

    pub fn navigate_next(&mut self, now: Instant) {
        self.navigate_to(now, self.nav.current.next());
    }

    pub fn navigate_prev(&mut self, now: Instant) {
        self.navigate_to(now, self.nav.current.prev());
    }

    /// Kick off the hero chart, counters, and particles
    pub fn trigger_data_visualization(&mut self, now: Instant) {
        tracing::debug!("hero visualization triggered");
        for (i, bar) in self.hero.bars.iter_mut().enumerate() {
            bar.phase = AnimPhase::Scheduled;
            self.sequencer.schedule_after(
                now,
                stagger_delay(i, 200, 100),
                Step::ChartBarRelease { index: i },
            );
        }
        self.hero.pulse = true;
        for (i, stat) in self.hero.stats.iter_mut().enumerate() {
            stat.phase = AnimPhase::Scheduled;
            self.sequencer.schedule_after(
                now,
                stagger_delay(i, 300, 150),
                Step::StatRelease { index: i },
            );
        }
        for i in 0..self.hero.particles.len() {
            self.sequencer.schedule_after(
                now,
                stagger_delay(i, 500, 200),
                Step::ParticleRelease { index: i },
            );
        }
        self.sequencer
            .schedule_after(now, VISUALIZATION_NOTIFY_DELAY, Step::VisualizationNotify);
    }

    /// Highlight an expertise item and run its effect
    pub fn highlight_expertise(&mut self, now: Instant, index: usize) {
        let Some(item) = content::expertise().get(index) else {
            return;
        };
        self.expertise.highlighted = Some(index);
        self.expertise.effect = Some(ActiveEffect {
            item: index,
            kind: item.effect,
            started: now,
        });
        self.sequencer.schedule_after(
            now,
            item.effect.duration(),
            Step::ExpertiseEffectEnd { index },
        );
        self.sequencer.schedule_after(
            now,
            content::HIGHLIGHT_DURATION,
            Step::ExpertiseClear { index },
        );
    }

    /// Restart the full staggered skill sequence
    pub fn animate_all_skills(&mut self, now: Instant) {
        tracing::debug!("skill animation sequence started");
        self.skills.reset();
        for i in 0..self.skills.categories.len() {
            self.sequencer.schedule_after(
                now,
                stagger_delay(i, 200, 300),
                Step::CategoryRelease { index: i },
            );
        }
        self.skills.animated = true;
    }

    /// Open a project showcase; it closes and announces itself on schedule
    pub fn launch_demo(&mut self, now: Instant, kind: DemoKind) {
        let request = DemoRequest::new(kind);
        let config = content::demo_config(kind);
        tracing::info!("demo {} launched ({})", request.id, kind.key());
        self.sequencer.schedule_after(now, config.duration, Step::ShowcaseClose);
        self.sequencer.schedule_after(
            now,
            config.duration + SHOWCASE_NOTIFY_LAG,
            Step::ShowcaseNotify { kind },
        );
        self.showcase = Some(Showcase { request, opened: now });
    }

    pub fn close_showcase(&mut self) {
        self.showcase = None;
    }

    /// Play a contact method's activation: ripple now, action at 300ms
    pub fn activate_contact_method(&mut self, now: Instant, index: usize) {
        if content::contact_methods().get(index).is_none() {
            return;
        }
        self.methods.active = Some(index);
        self.sequencer
            .schedule_after(now, METHOD_ACTION_DELAY, Step::MethodAction { index });
        self.sequencer
            .schedule_after(now, METHOD_CLEAR_DELAY, Step::MethodClear { index });
    }

    /// Validate and, if clean, start the simulated delivery
    pub fn submit_form(&mut self, now: Instant) {
        if self.form.submit == SubmitState::Loading {
            return;
        }
        let submission = self.form.submission();
        if !submission.is_valid() {
            tracing::warn!("form rejected: {}", submission.error_summary());
            self.show_notification(now, "Form Error", &submission.error_summary());
            return;
        }
        tracing::info!("contact form submitted by {}", submission.name);
        self.form.submit = SubmitState::Loading;
        self.form.loading_overlay = true;
        self.pending_submission = Some(submission);
        self.sequencer
            .schedule_after(now, FORM_DELIVERY_DELAY, Step::FormDelivered);
    }

    /// Show the notification popup; it auto-closes after 4 seconds
    pub fn show_notification(&mut self, now: Instant, title: &str, message: &str) {
        self.notification = Some(Notification {
            title: title.to_string(),
            message: message.to_string(),
        });
        self.sequencer
            .schedule_after(now, NOTIFICATION_DURATION, Step::NotificationClose);
    }

    pub fn close_notification(&mut self) {
        self.notification = None;
    }

    pub fn toggle_theme(&mut self, now: Instant) {
        self.theme = self.theme.toggle();
        self.theme_transitioning = true;
        self.sequencer.schedule_after(now, THEME_TRANSITION, Step::ThemeSettle);
        tracing::info!("theme switched to {}", self.theme.name());
    }

    /// Move the current section's selection down
    pub fn select_next(&mut self) {
        match self.nav.current {
            SectionId::About => {
                let len = content::expertise().len();
                if self.about_selected + 1 < len {
                    self.about_selected += 1;
                }
            }
            SectionId::Projects => {
                let len = content::project_cards().len();
                if self.projects_selected + 1 < len {
                    self.projects_selected += 1;
                }
            }
            SectionId::Contact => match self.contact_pane {
                ContactPane::Methods => {
                    let len = content::contact_methods().len();
                    if self.methods_selected + 1 < len {
                        self.methods_selected += 1;
                    }
                }
                ContactPane::Form => {
                    if self.form_selected < FORM_SEND_ROW {
                        self.form_selected += 1;
                    }
                }
            },
            _ => {}
        }
    }

    /// Move the current section's selection up
    pub fn select_previous(&mut self) {
        match self.nav.current {
            SectionId::About => {
                self.about_selected = self.about_selected.saturating_sub(1);
            }
            SectionId::Projects => {
                self.projects_selected = self.projects_selected.saturating_sub(1);
            }
            SectionId::Contact => match self.contact_pane {
                ContactPane::Methods => {
                    self.methods_selected = self.methods_selected.saturating_sub(1);
                }
                ContactPane::Form => {
                    self.form_selected = self.form_selected.saturating_sub(1);
                }
            },
            _ => {}
        }
    }

    /// Toggle between the methods and form panes in Contact
    pub fn toggle_contact_pane(&mut self) {
        self.contact_pane = match self.contact_pane {
            ContactPane::Methods => ContactPane::Form,
            ContactPane::Form => ContactPane::Methods,
        };
    }

    /// Check if an action should be debounced
    /// Returns true if action should be blocked (too soon since last action)
    pub fn should_debounce_action(&mut self) -> bool {
        let now = Instant::now();
        if let Some(last) = self.last_action_time {
            if now.duration_since(last) < ACTION_DEBOUNCE {
                return true;
            }
        }
        self.last_action_time = Some(now);
        false
    }

    /// Handle a key press - returns true if the action should be triggered
    /// Uses the configured behavior for each key (state-change or repeatable)
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Current spinner frame, advancing with the tick count
    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[(self.tick_count / 2) as usize % SPINNER_FRAMES.len()]
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let elapsed = self.start_time.elapsed();
        let seconds = elapsed.as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldId;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn new_app(now: Instant) -> App {
        App::new(&Config::default(), LogBuffer::new(), now)
    }

    fn new_app_no_intro(now: Instant) -> App {
        let config = Config {
            intro: false,
            ..Config::default()
        };
        App::new(&config, LogBuffer::new(), now)
    }

    #[test]
    fn test_home_rows_cascade_at_startup() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);
        assert_eq!(app.revealed_rows[0], 0);
        app.tick(t0 + ms(100));
        assert_eq!(app.revealed_rows[0], 1);
        app.tick(t0 + ms(250));
        assert_eq!(app.revealed_rows[0], content::reveal_rows(SectionId::Home));
    }

    #[test]
    fn test_navigation_locks_for_full_transition() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);

        app.navigate_to(t0, SectionId::About);
        assert!(app.nav.animating);
        assert_eq!(app.nav.current, SectionId::Home);

        // Locked while the transition runs
        app.navigate_to(t0 + ms(100), SectionId::Projects);
        assert_eq!(app.nav.current, SectionId::Home);

        app.tick(t0 + ms(300));
        assert_eq!(app.nav.current, SectionId::About);
        assert!(app.nav.animating);

        app.tick(t0 + ms(800));
        assert!(!app.nav.animating);

        // Unlocked now
        app.navigate_to(t0 + ms(800), SectionId::Projects);
        assert!(app.nav.animating);
    }

    #[test]
    fn test_reveal_runs_once_per_section() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);

        app.navigate_to(t0, SectionId::About);
        app.tick(t0 + ms(300));
        // Rows scheduled from the swap land 100/150/200ms later
        app.tick(t0 + ms(500));
        assert_eq!(app.revealed_rows[1], content::reveal_rows(SectionId::About));
        app.tick(t0 + ms(800));

        // Leave and come back: the revisit swap queues no reveal rows
        app.navigate_to(t0 + ms(1000), SectionId::Home);
        app.tick(t0 + ms(1800));
        assert_eq!(app.sequencer.pending_len(), 0);
        app.navigate_to(t0 + ms(2000), SectionId::About);
        app.tick(t0 + ms(2300));
        // Just the settle remains
        assert_eq!(app.sequencer.pending_len(), 1);
        app.tick(t0 + ms(2800));
        assert_eq!(app.sequencer.pending_len(), 0);
    }

    #[test]
    fn test_intro_sequence_timeline() {
        let t0 = Instant::now();
        let mut app = new_app(t0);
        assert!(!app.hero.pulse);

        // Intro fires at 1000ms
        app.tick(t0 + ms(1000));
        assert!(app.hero.pulse);
        assert_eq!(app.hero.bars[0].phase, AnimPhase::Scheduled);

        // First bar releases 200ms after the trigger
        app.tick(t0 + ms(1200));
        assert_eq!(app.hero.bars[0].phase, AnimPhase::Running);

        // First stat releases at +300 and settles 2000ms later
        app.tick(t0 + ms(1300));
        assert_eq!(app.hero.stats[0].phase, AnimPhase::Running);
        assert_eq!(app.hero.stats[0].value(t0 + ms(1300)), 0);

        // Particles all enhanced by +500+200*(n-1)
        let last = app.hero.particles.len() - 1;
        app.tick(t0 + ms(1500 + 200 * last as u64));
        assert!(app.hero.particles.iter().all(|p| *p));

        app.tick(t0 + ms(3300));
        assert_eq!(app.hero.stats[0].phase, AnimPhase::Settled);
        assert_eq!(
            app.hero.stats[0].value(t0 + ms(3300)),
            content::hero_stats()[0].target
        );

        // The intro announced itself 2000ms after the trigger
        let n = app.notification.as_ref().unwrap();
        assert_eq!(n.title, "Data Visualization Activated!");
    }

    #[test]
    fn test_skills_animate_on_first_settle() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);

        app.navigate_to(t0, SectionId::Skills);
        app.tick(t0 + ms(300));
        assert!(!app.skills.animated);
        app.tick(t0 + ms(800));
        assert!(app.skills.animated);
        assert!(!app.skills.categories[0].released);

        // First category releases 200ms after the settle
        app.tick(t0 + ms(1000));
        assert!(app.skills.categories[0].released);
        assert!(!app.skills.categories[1].released);

        // Its first skill starts 100ms later and completes after 1500ms
        app.tick(t0 + ms(1100));
        assert_eq!(app.skills.categories[0].skills[0].phase, AnimPhase::Running);
        app.tick(t0 + ms(2600));
        assert_eq!(app.skills.categories[0].skills[0].phase, AnimPhase::Settled);
        let target = content::skill_categories()[0].skills[0].target as u64;
        assert_eq!(app.skills.categories[0].skills[0].value(t0 + ms(2600)), target);
    }

    #[test]
    fn test_skills_settle_does_not_retrigger() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);

        app.navigate_to(t0, SectionId::Skills);
        app.tick(t0 + ms(800));
        // Run the whole sequence out: last category at settle+800, its last
        // skill at +400 more, complete 1500ms after that
        app.tick(t0 + ms(1600));
        app.tick(t0 + ms(2000));
        app.tick(t0 + ms(3500));
        assert_eq!(app.skills.categories[2].skills[2].phase, AnimPhase::Settled);

        // Away and back: the second settle must not reset the finished bars
        app.navigate_to(t0 + ms(4000), SectionId::Home);
        app.tick(t0 + ms(4800));
        app.navigate_to(t0 + ms(5000), SectionId::Skills);
        app.tick(t0 + ms(5800));
        assert!(app.skills.animated);
        assert_eq!(app.skills.categories[2].skills[2].phase, AnimPhase::Settled);
    }

    #[test]
    fn test_expertise_highlight_lifecycle() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);

        app.highlight_expertise(t0, 0);
        assert_eq!(app.expertise.highlighted, Some(0));
        assert!(app.expertise.effect.is_some());

        // Statistical effect ends at 2500ms, highlight at 3000ms
        app.tick(t0 + ms(2500));
        assert!(app.expertise.effect.is_none());
        assert_eq!(app.expertise.highlighted, Some(0));
        app.tick(t0 + ms(3000));
        assert_eq!(app.expertise.highlighted, None);
    }

    #[test]
    fn test_expertise_rehighlight_survives_stale_clear() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);

        app.highlight_expertise(t0, 0);
        // Switch to another item just before the first clear fires
        app.highlight_expertise(t0 + ms(2900), 1);
        app.tick(t0 + ms(3000));
        // Item 0's clear targets item 0 only
        assert_eq!(app.expertise.highlighted, Some(1));
        // Item 1's own clear still lands
        app.tick(t0 + ms(2900 + 3000));
        assert_eq!(app.expertise.highlighted, None);
    }

    #[test]
    fn test_showcase_auto_close_then_notify() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);

        app.launch_demo(t0, DemoKind::Analytics);
        assert!(app.showcase.is_some());
        assert!(app.showcase.as_ref().unwrap().request.id.starts_with("demo_"));

        app.tick(t0 + ms(2499));
        assert!(app.showcase.is_some());
        app.tick(t0 + ms(2500));
        assert!(app.showcase.is_none());

        app.tick(t0 + ms(3000));
        let n = app.notification.as_ref().unwrap();
        assert_eq!(n.title, "Demo Complete");
        assert_eq!(
            n.message,
            "Business Analytics Dashboard demonstration finished successfully."
        );
    }

    #[test]
    fn test_showcase_manual_close_keeps_schedule() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);

        app.launch_demo(t0, DemoKind::Capstone);
        app.close_showcase();
        assert!(app.showcase.is_none());
        // The completion notice still arrives at duration + 500
        app.tick(t0 + ms(3500));
        assert_eq!(app.notification.as_ref().unwrap().title, "Demo Complete");
    }

    #[test]
    fn test_contact_method_action_timing() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);

        app.activate_contact_method(t0, 0);
        assert_eq!(app.methods.active, Some(0));
        assert!(app.notification.is_none());

        app.tick(t0 + ms(300));
        assert_eq!(app.notification.as_ref().unwrap().title, "Email Ready");

        app.tick(t0 + ms(1000));
        assert_eq!(app.methods.active, None);
    }

    #[test]
    fn test_invalid_form_shows_error_notification() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);

        app.submit_form(t0);
        assert_eq!(app.form.submit, SubmitState::Idle);
        let n = app.notification.as_ref().unwrap();
        assert_eq!(n.title, "Form Error");
        assert_eq!(
            n.message,
            "Name is required, Email is required, Message is required"
        );
    }

    #[test]
    fn test_form_submission_full_flow() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);

        app.form.focus(FieldId::Name);
        for c in "Jane".chars() {
            app.form.insert_char(c);
        }
        app.form.focus(FieldId::Email);
        for c in "jane@example.com".chars() {
            app.form.insert_char(c);
        }
        app.form.focus(FieldId::Message);
        for c in "Hello".chars() {
            app.form.insert_char(c);
        }
        app.form.blur();

        app.submit_form(t0);
        assert_eq!(app.form.submit, SubmitState::Loading);
        assert!(app.form.loading_overlay);

        // Delivery lands at 2500ms
        app.tick(t0 + ms(2500));
        assert_eq!(app.form.submit, SubmitState::Success);
        assert!(!app.form.loading_overlay);
        let n = app.notification.as_ref().unwrap();
        assert_eq!(n.title, "Message Sent!");
        assert_eq!(
            n.message,
            "Thank you Jane! Your general inquiry has been received."
        );

        // Field flashes cascade from delivery
        app.tick(t0 + ms(2500 + 100));
        assert!(app.form.flashes[0]);
        app.tick(t0 + ms(2500 + 100 + 500));
        assert!(!app.form.flashes[0]);

        // Fields clear at +800, button resets at +3000
        app.tick(t0 + ms(2500 + 800));
        assert!(app.form.name.is_empty());
        app.tick(t0 + ms(2500 + 3000));
        assert_eq!(app.form.submit, SubmitState::Idle);
    }

    #[test]
    fn test_submit_ignored_while_loading() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);

        app.form.focus(FieldId::Name);
        app.form.insert_char('a');
        app.form.focus(FieldId::Email);
        app.form.insert_char('b');
        app.form.focus(FieldId::Message);
        app.form.insert_char('c');

        app.submit_form(t0);
        let pending = app.sequencer.pending_len();
        app.submit_form(t0 + ms(100));
        assert_eq!(app.sequencer.pending_len(), pending);
    }

    #[test]
    fn test_notification_auto_close() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);

        app.show_notification(t0, "Hello", "world");
        app.tick(t0 + ms(3999));
        assert!(app.notification.is_some());
        app.tick(t0 + ms(4000));
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_stale_close_takes_newer_notification() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);

        app.show_notification(t0, "first", "one");
        app.show_notification(t0 + ms(3500), "second", "two");
        assert_eq!(app.notification.as_ref().unwrap().title, "second");
        // The first popup's close fires at 4000 and takes the second with it
        app.tick(t0 + ms(4000));
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_theme_toggle_settles() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);
        assert_eq!(app.theme, ThemeKind::Dark);

        app.toggle_theme(t0);
        assert_eq!(app.theme, ThemeKind::Light);
        assert!(app.theme_transitioning);
        app.tick(t0 + ms(300));
        assert!(!app.theme_transitioning);
    }

    #[test]
    fn test_selection_bounds() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);

        // Jump straight to About for selection purposes
        app.navigate_to(t0, SectionId::About);
        app.tick(t0 + ms(300));
        app.tick(t0 + ms(800));

        app.select_previous();
        assert_eq!(app.about_selected, 0);
        for _ in 0..10 {
            app.select_next();
        }
        assert_eq!(app.about_selected, content::expertise().len() - 1);
    }

    #[test]
    fn test_contact_pane_toggle_and_form_rows() {
        let t0 = Instant::now();
        let mut app = new_app_no_intro(t0);

        app.navigate_to(t0, SectionId::Contact);
        app.tick(t0 + ms(300));
        app.tick(t0 + ms(800));

        assert_eq!(app.contact_pane, ContactPane::Methods);
        app.toggle_contact_pane();
        assert_eq!(app.contact_pane, ContactPane::Form);

        for _ in 0..10 {
            app.select_next();
        }
        assert_eq!(app.form_selected, FORM_SEND_ROW);
    }
}
