//! Section navigation with the exit/enter transition lock
//!
//! Exactly one section is current at any time. Switching sections runs a
//! two-stage sequence: 300ms exit on the old section, then the swap, then
//! 500ms enter on the new one. The `animating` lock rejects navigation for
//! the full 800ms so transitions can never interleave.

use std::time::{Duration, Instant};

use crate::sequencer::{Sequencer, Step};

pub const EXIT_DURATION: Duration = Duration::from_millis(300);
pub const ENTER_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const COUNT: usize = 5;

    pub fn all() -> [SectionId; Self::COUNT] {
        [
            SectionId::Home,
            SectionId::About,
            SectionId::Skills,
            SectionId::Projects,
            SectionId::Contact,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            SectionId::Home => 0,
            SectionId::About => 1,
            SectionId::Skills => 2,
            SectionId::Projects => 3,
            SectionId::Contact => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<SectionId> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> SectionId {
        Self::all()[(self.index() + 1) % Self::COUNT]
    }

    pub fn prev(&self) -> SectionId {
        Self::all()[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

/// Where a section sits in the transition lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionPhase {
    #[default]
    Inactive,
    /// Current section, no transition running
    Active,
    /// Old section playing its 300ms exit
    Exiting,
    /// New section playing its 500ms enter
    Entering,
}

/// Current section plus transition and first-visit state
#[derive(Debug)]
pub struct Navigator {
    pub current: SectionId,
    pub animating: bool,
    pub phases: [SectionPhase; SectionId::COUNT],
    /// Sections whose reveal sequence has already run
    pub revealed: [bool; SectionId::COUNT],
}

impl Navigator {
    pub fn new() -> Self {
        let mut phases = [SectionPhase::Inactive; SectionId::COUNT];
        phases[SectionId::Home.index()] = SectionPhase::Active;
        let mut revealed = [false; SectionId::COUNT];
        // Home is on screen from the start
        revealed[SectionId::Home.index()] = true;
        Self {
            current: SectionId::Home,
            animating: false,
            phases,
            revealed,
        }
    }

    pub fn phase(&self, section: SectionId) -> SectionPhase {
        self.phases[section.index()]
    }

    /// Start a transition to `to`. Rejected while a transition is running
    /// or when `to` is already current. Returns whether it started.
    pub fn begin_transition(&mut self, now: Instant, seq: &mut Sequencer, to: SectionId) -> bool {
        if self.animating || to == self.current {
            return false;
        }
        self.animating = true;
        self.phases[self.current.index()] = SectionPhase::Exiting;
        seq.schedule_after(now, EXIT_DURATION, Step::SectionSwap { to });
        seq.schedule_after(now, EXIT_DURATION + ENTER_DURATION, Step::SectionSettle { to });
        true
    }

    /// Apply the mid-transition swap. Returns true when this is the first
    /// visit to `to`, in which case the caller schedules its reveal rows.
    pub fn apply_swap(&mut self, to: SectionId) -> bool {
        self.phases[self.current.index()] = SectionPhase::Inactive;
        self.current = to;
        self.phases[to.index()] = SectionPhase::Entering;
        let first_visit = !self.revealed[to.index()];
        self.revealed[to.index()] = true;
        first_visit
    }

    /// Finish the transition and release the lock
    pub fn apply_settle(&mut self, to: SectionId) {
        self.phases[to.index()] = SectionPhase::Active;
        self.animating = false;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order_wraps() {
        assert_eq!(SectionId::Home.next(), SectionId::About);
        assert_eq!(SectionId::Contact.next(), SectionId::Home);
        assert_eq!(SectionId::Home.prev(), SectionId::Contact);
        assert_eq!(SectionId::Skills.prev(), SectionId::About);
    }

    #[test]
    fn test_section_index_round_trip() {
        for section in SectionId::all() {
            assert_eq!(SectionId::from_index(section.index()), Some(section));
        }
        assert_eq!(SectionId::from_index(5), None);
    }

    #[test]
    fn test_transition_rejected_when_same_or_locked() {
        let now = Instant::now();
        let mut seq = Sequencer::new();
        let mut nav = Navigator::new();

        // Already current
        assert!(!nav.begin_transition(now, &mut seq, SectionId::Home));
        assert_eq!(seq.pending_len(), 0);

        assert!(nav.begin_transition(now, &mut seq, SectionId::About));
        assert!(nav.animating);
        // Locked until settle
        assert!(!nav.begin_transition(now, &mut seq, SectionId::Skills));
        assert_eq!(seq.pending_len(), 2);
    }

    #[test]
    fn test_transition_timeline() {
        let t0 = Instant::now();
        let mut seq = Sequencer::new();
        let mut nav = Navigator::new();

        assert!(nav.begin_transition(t0, &mut seq, SectionId::Skills));
        assert_eq!(nav.phase(SectionId::Home), SectionPhase::Exiting);
        assert_eq!(nav.current, SectionId::Home);

        // Nothing due just before the exit completes
        assert!(seq.poll(t0 + Duration::from_millis(299)).is_empty());

        let steps = seq.poll(t0 + Duration::from_millis(300));
        assert_eq!(steps, vec![Step::SectionSwap { to: SectionId::Skills }]);
        let first_visit = nav.apply_swap(SectionId::Skills);
        assert!(first_visit);
        assert_eq!(nav.current, SectionId::Skills);
        assert_eq!(nav.phase(SectionId::Home), SectionPhase::Inactive);
        assert_eq!(nav.phase(SectionId::Skills), SectionPhase::Entering);
        assert!(nav.animating);

        let steps = seq.poll(t0 + Duration::from_millis(800));
        assert_eq!(steps, vec![Step::SectionSettle { to: SectionId::Skills }]);
        nav.apply_settle(SectionId::Skills);
        assert_eq!(nav.phase(SectionId::Skills), SectionPhase::Active);
        assert!(!nav.animating);

        // Unlocked again
        assert!(nav.begin_transition(t0 + Duration::from_millis(800), &mut seq, SectionId::About));
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut nav = Navigator::new();
        assert!(nav.apply_swap(SectionId::About));
        nav.apply_settle(SectionId::About);
        // Back and forth: About reveals only once
        assert!(!nav.apply_swap(SectionId::About));
        // Home was revealed at startup
        assert!(!nav.apply_swap(SectionId::Home));
    }
}
