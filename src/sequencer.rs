//! Timed-step sequencer driving every multi-stage animation
//!
//! Each stage of an animation is a [`Step`] scheduled at an absolute
//! [`Instant`]. The tick loop polls due steps once per frame and applies
//! them to the app state. Steps are never cancelled once scheduled: a step
//! whose subject has moved on simply finds nothing to do when it fires,
//! which keeps overlapping triggers honest instead of hiding them.

use std::time::{Duration, Instant};

use crate::content::DemoKind;
use crate::navigation::SectionId;

/// One stage of a timed sequence. Applying a step is cheap; all payloads
/// are indices into app state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Kick off the home-view visualization intro
    IntroStart,
    /// Exit animation finished; make `to` the current section
    SectionSwap { to: SectionId },
    /// Enter animation finished; release the navigation lock
    SectionSettle { to: SectionId },
    /// Reveal one row of a section on its first visit
    RevealRow { section: SectionId, row: usize },
    /// Start the growth animation of one hero chart bar
    ChartBarRelease { index: usize },
    /// Start the count-up of one hero statistic
    StatRelease { index: usize },
    /// Light up one particle glyph
    ParticleRelease { index: usize },
    /// Announce that the intro visualization is running
    VisualizationNotify,
    /// End the symbol/pulse effect attached to an expertise item
    ExpertiseEffectEnd { index: usize },
    /// Drop the highlight from an expertise item
    ExpertiseClear { index: usize },
    /// Mark a skill category as released
    CategoryRelease { index: usize },
    /// Start one skill bar's fill and count-up
    SkillRelease { category: usize, index: usize },
    /// Mark one skill bar as complete
    SkillComplete { category: usize, index: usize },
    /// Auto-close the project showcase
    ShowcaseClose,
    /// Announce that a project demo finished. Carries the kind because the
    /// showcase itself is already closed when this fires.
    ShowcaseNotify { kind: DemoKind },
    /// Fire the action behind a contact method
    MethodAction { index: usize },
    /// Drop the active state from a contact method
    MethodClear { index: usize },
    /// The simulated submission round-trip completed
    FormDelivered,
    /// Flash one form field group during reset
    FieldFlash { index: usize },
    /// End the flash on one form field group
    FieldFlashEnd { index: usize },
    /// Clear the form fields
    FormClear,
    /// Return the submit button from Success to Idle
    SubmitReset,
    /// Auto-close the notification popup
    NotificationClose,
    /// End the brief theme-switch indicator
    ThemeSettle,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: Instant,
    /// Monotonic tiebreaker so same-instant steps fire in schedule order
    seq: u64,
    step: Step,
}

/// Pending timed steps, polled by the tick loop
#[derive(Debug, Default)]
pub struct Sequencer {
    pending: Vec<Scheduled>,
    next_seq: u64,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `step` to fire `delay` after `now`
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, step: Step) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled { due: now + delay, seq, step });
    }

    /// Remove and return every step due at `now`, in (due, schedule) order
    pub fn poll(&mut self, now: Instant) -> Vec<Step> {
        if self.pending.is_empty() {
            return Vec::new();
        }
        let mut due: Vec<Scheduled> = Vec::new();
        self.pending.retain(|s| {
            if s.due <= now {
                due.push(*s);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|s| (s.due, s.seq));
        due.into_iter().map(|s| s.step).collect()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// Lifecycle of a one-shot animated element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimPhase {
    #[default]
    Idle,
    /// Release step is queued but has not fired yet
    Scheduled,
    /// Count-up in progress
    Running,
    /// Final value reached
    Settled,
}

/// Cubic ease-out: fast start, gentle settle
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// An eased integer count-up from `start` to `end` over `duration`
#[derive(Debug, Clone, Copy)]
pub struct CountUp {
    pub start: u64,
    pub end: u64,
    pub duration: Duration,
    pub started: Instant,
}

impl CountUp {
    pub fn new(start: u64, end: u64, duration: Duration, started: Instant) -> Self {
        Self { start, end, duration, started }
    }

    /// Linear progress in [0, 1] at `now`
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Eased progress in [0, 1] at `now`
    pub fn eased(&self, now: Instant) -> f64 {
        ease_out_cubic(self.progress(now))
    }

    /// Displayed value at `now`: the floor of the eased interpolation,
    /// except the exact end value once the duration elapses
    pub fn value_at(&self, now: Instant) -> u64 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.end;
        }
        let range = self.end as f64 - self.start as f64;
        (self.start as f64 + range * ease_out_cubic(t)).floor() as u64
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::stagger_delay;

    fn t0() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_poll_returns_only_due_steps() {
        let start = t0();
        let mut seq = Sequencer::new();
        seq.schedule_after(start, Duration::from_millis(100), Step::IntroStart);
        seq.schedule_after(start, Duration::from_millis(300), Step::VisualizationNotify);

        assert!(seq.poll(start).is_empty());
        assert_eq!(
            seq.poll(start + Duration::from_millis(100)),
            vec![Step::IntroStart]
        );
        assert_eq!(seq.pending_len(), 1);
        assert_eq!(
            seq.poll(start + Duration::from_millis(500)),
            vec![Step::VisualizationNotify]
        );
        assert_eq!(seq.pending_len(), 0);
    }

    #[test]
    fn test_poll_orders_by_due_then_schedule_order() {
        let start = t0();
        let mut seq = Sequencer::new();
        // Scheduled out of due order
        seq.schedule_after(start, Duration::from_millis(300), Step::StatRelease { index: 0 });
        seq.schedule_after(start, Duration::from_millis(100), Step::ChartBarRelease { index: 0 });
        // Same due instant: schedule order is the tiebreaker
        seq.schedule_after(start, Duration::from_millis(200), Step::ParticleRelease { index: 0 });
        seq.schedule_after(start, Duration::from_millis(200), Step::ParticleRelease { index: 1 });

        let fired = seq.poll(start + Duration::from_millis(300));
        assert_eq!(
            fired,
            vec![
                Step::ChartBarRelease { index: 0 },
                Step::ParticleRelease { index: 0 },
                Step::ParticleRelease { index: 1 },
                Step::StatRelease { index: 0 },
            ]
        );
    }

    #[test]
    fn test_poll_late_still_fires_everything() {
        let start = t0();
        let mut seq = Sequencer::new();
        for i in 0..5 {
            seq.schedule_after(start, stagger_delay(i, 100, 50), Step::RevealRow {
                section: SectionId::Home,
                row: i,
            });
        }
        // A single late poll drains the whole batch in order
        let fired = seq.poll(start + Duration::from_secs(2));
        assert_eq!(fired.len(), 5);
        for (i, step) in fired.iter().enumerate() {
            assert_eq!(*step, Step::RevealRow { section: SectionId::Home, row: i });
        }
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Front-loaded: halfway through time is well past halfway in value
        assert!(ease_out_cubic(0.5) > 0.8);
    }

    #[test]
    fn test_countup_value_monotonic_and_exact_end() {
        let start = t0();
        let c = CountUp::new(0, 150, Duration::from_millis(2000), start);

        assert_eq!(c.value_at(start), 0);
        let mid = c.value_at(start + Duration::from_millis(1000));
        assert!(mid > 0 && mid < 150);
        // Ease-out overshoots linear progress
        assert!(mid > 75);
        // Exactly the target at and after the duration
        assert_eq!(c.value_at(start + Duration::from_millis(2000)), 150);
        assert_eq!(c.value_at(start + Duration::from_millis(5000)), 150);
        assert!(c.is_settled(start + Duration::from_millis(2000)));
        assert!(!c.is_settled(start + Duration::from_millis(1999)));
    }

    #[test]
    fn test_countup_nonzero_start() {
        let start = t0();
        let c = CountUp::new(40, 90, Duration::from_millis(1500), start);
        assert_eq!(c.value_at(start), 40);
        assert_eq!(c.value_at(start + Duration::from_millis(1500)), 90);
        let mid = c.value_at(start + Duration::from_millis(700));
        assert!(mid >= 40 && mid <= 90);
    }

    #[test]
    fn test_countup_zero_duration_settles_immediately() {
        let start = t0();
        let c = CountUp::new(0, 10, Duration::ZERO, start);
        assert_eq!(c.value_at(start), 10);
        assert!(c.is_settled(start));
    }
}
