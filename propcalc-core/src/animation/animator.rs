//! Per-value animation state machine.
//!
//! ```text
//!            set_target(t != displayed)
//!   Idle ─────────────────────────────────▶ Animating
//!    ▲                                       │  ▲
//!    │ tick: elapsed >= duration             │  │ set_target(new t):
//!    └───────────────────────────────────────┘  │ source = displayed now
//!                                               └──┘
//! ```
//!
//! The animator holds no timer of its own. The host calls [`Animator::tick`]
//! once per frame with the frame timestamp; the first tick of a transition
//! latches its start time.

use std::time::Duration;

use super::easing::interpolate;

/// Frame timestamp, measured from any fixed host epoch.
pub type FrameTime = Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating,
}

/// How a call to [`Animator::set_target`] was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetChange {
    /// Already showing or heading to this value; nothing changed.
    Ignored,
    /// Settled on the target without a transition.
    Snapped,
    /// Idle → Animating.
    Started,
    /// Animating → Animating from the value displayed at interruption.
    Restarted,
}

impl TargetChange {
    /// Whether the host must schedule a frame for this change.
    pub fn needs_frame(self) -> bool {
        matches!(self, TargetChange::Started | TargetChange::Restarted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No transition in flight.
    Idle,
    /// Transition advanced and needs another frame.
    Running,
    /// Transition reached its target on this frame.
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    source: f64,
    target: f64,
    duration: Duration,
    started_at: Option<FrameTime>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animator {
    displayed: f64,
    settled: f64,
    duration: Duration,
    transition: Option<Transition>,
}

impl Animator {
    /// Idle animator showing `initial`. The first value is never animated.
    pub fn new(initial: f64) -> Self {
        Self::with_duration(initial, DEFAULT_DURATION)
    }

    pub fn with_duration(initial: f64, duration: Duration) -> Self {
        Self {
            displayed: initial,
            settled: initial,
            duration,
            transition: None,
        }
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    /// Last target the animator came to rest on.
    pub fn settled(&self) -> f64 {
        self.settled
    }

    /// Where the animator is heading (the settled value when idle).
    pub fn target(&self) -> f64 {
        self.transition.map_or(self.settled, |t| t.target)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Duration for transitions started from now on; one in flight keeps
    /// the duration it started with.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn phase(&self) -> Phase {
        if self.transition.is_some() {
            Phase::Animating
        } else {
            Phase::Idle
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn set_target(&mut self, target: f64) -> TargetChange {
        match self.transition {
            Some(t) if t.target == target => TargetChange::Ignored,
            None if target == self.displayed => TargetChange::Ignored,
            in_flight => {
                if target == self.displayed || self.duration.is_zero() {
                    self.settle(target);
                    return TargetChange::Snapped;
                }
                self.transition = Some(Transition {
                    source: self.displayed,
                    target,
                    duration: self.duration,
                    started_at: None,
                });
                if in_flight.is_some() {
                    TargetChange::Restarted
                } else {
                    TargetChange::Started
                }
            }
        }
    }

    /// Advance to frame time `now`.
    pub fn tick(&mut self, now: FrameTime) -> TickOutcome {
        let Some(transition) = self.transition.as_mut() else {
            return TickOutcome::Idle;
        };

        let started_at = *transition.started_at.get_or_insert(now);
        let elapsed = now.saturating_sub(started_at);

        if elapsed >= transition.duration {
            let target = transition.target;
            self.settle(target);
            return TickOutcome::Settled;
        }

        let p = elapsed.as_secs_f64() / transition.duration.as_secs_f64();
        self.displayed = interpolate(transition.source, transition.target, p);
        TickOutcome::Running
    }

    /// Drop any in-flight transition, freezing the displayed value.
    pub fn cancel(&mut self) {
        if self.transition.take().is_some() {
            self.settled = self.displayed;
        }
    }

    fn settle(&mut self, value: f64) {
        self.transition = None;
        self.displayed = value;
        self.settled = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> FrameTime {
        Duration::from_millis(n)
    }

    #[test]
    fn first_value_is_not_animated() {
        let a = Animator::new(42.0);
        assert_eq!(a.displayed(), 42.0);
        assert_eq!(a.phase(), Phase::Idle);
    }

    #[test]
    fn same_value_is_ignored() {
        let mut a = Animator::new(10.0);
        assert_eq!(a.set_target(10.0), TargetChange::Ignored);
        assert!(!a.is_animating());
    }

    #[test]
    fn runs_from_source_to_target() {
        let mut a = Animator::new(0.0);
        assert_eq!(a.set_target(100.0), TargetChange::Started);

        assert_eq!(a.tick(ms(1_000)), TickOutcome::Running);
        assert_eq!(a.displayed(), 0.0);

        assert_eq!(a.tick(ms(1_200)), TickOutcome::Running);
        assert!((a.displayed() - 87.5).abs() < 1e-9);

        assert_eq!(a.tick(ms(1_400)), TickOutcome::Settled);
        assert_eq!(a.displayed(), 100.0);
        assert_eq!(a.settled(), 100.0);
        assert_eq!(a.tick(ms(1_500)), TickOutcome::Idle);
    }

    #[test]
    fn overshooting_frame_snaps_exactly() {
        let mut a = Animator::new(1.0);
        a.set_target(1.0 / 3.0);
        a.tick(ms(0));
        assert_eq!(a.tick(ms(10_000)), TickOutcome::Settled);
        assert_eq!(a.displayed(), 1.0 / 3.0);
    }

    #[test]
    fn repeated_target_does_not_extend() {
        let mut a = Animator::new(0.0);
        a.set_target(50.0);
        a.tick(ms(0));
        a.tick(ms(300));
        assert_eq!(a.set_target(50.0), TargetChange::Ignored);
        assert_eq!(a.tick(ms(400)), TickOutcome::Settled);
    }

    #[test]
    fn retarget_starts_from_displayed_value() {
        let mut a = Animator::new(0.0);
        a.set_target(100.0);
        a.tick(ms(0));
        a.tick(ms(200));
        let at_interrupt = a.displayed();

        assert_eq!(a.set_target(-100.0), TargetChange::Restarted);
        assert_eq!(a.displayed(), at_interrupt);

        // First frame of the new transition shows the interruption value.
        a.tick(ms(216));
        assert_eq!(a.displayed(), at_interrupt);

        assert_eq!(a.tick(ms(616)), TickOutcome::Settled);
        assert_eq!(a.displayed(), -100.0);
    }

    #[test]
    fn retarget_to_displayed_value_settles_in_place() {
        let mut a = Animator::new(0.0);
        a.set_target(100.0);
        a.tick(ms(0));
        a.tick(ms(100));
        let here = a.displayed();

        assert_eq!(a.set_target(here), TargetChange::Snapped);
        assert!(!a.is_animating());
        assert_eq!(a.settled(), here);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut a = Animator::with_duration(0.0, Duration::ZERO);
        assert_eq!(a.set_target(5.0), TargetChange::Snapped);
        assert_eq!(a.displayed(), 5.0);
        assert_eq!(a.tick(ms(0)), TickOutcome::Idle);
    }

    #[test]
    fn duration_change_applies_to_next_transition() {
        let mut a = Animator::new(0.0);
        a.set_target(10.0);
        a.tick(ms(0));
        a.set_duration(ms(1_000));
        assert_eq!(a.tick(ms(400)), TickOutcome::Settled);

        a.set_target(20.0);
        a.tick(ms(500));
        assert_eq!(a.tick(ms(900)), TickOutcome::Running);
        assert_eq!(a.tick(ms(1_500)), TickOutcome::Settled);
    }

    #[test]
    fn clock_going_backwards_holds_source() {
        let mut a = Animator::new(0.0);
        a.set_target(10.0);
        a.tick(ms(500));
        assert_eq!(a.tick(ms(100)), TickOutcome::Running);
        assert_eq!(a.displayed(), 0.0);
    }

    #[test]
    fn cancel_freezes_displayed_value() {
        let mut a = Animator::new(0.0);
        a.set_target(100.0);
        a.tick(ms(0));
        a.tick(ms(100));
        let frozen = a.displayed();

        a.cancel();
        assert!(!a.is_animating());
        assert_eq!(a.settled(), frozen);
        assert_eq!(a.tick(ms(1_000)), TickOutcome::Idle);
        assert_eq!(a.displayed(), frozen);
    }

    #[test]
    fn monotonic_towards_target() {
        let mut a = Animator::new(10.0);
        a.set_target(-10.0);
        let mut last = a.displayed();
        for t in (0..=400).step_by(16) {
            a.tick(ms(t));
            assert!(a.displayed() <= last);
            last = a.displayed();
        }
    }

    #[test]
    fn needs_frame_only_for_transitions() {
        assert!(TargetChange::Started.needs_frame());
        assert!(TargetChange::Restarted.needs_frame());
        assert!(!TargetChange::Snapped.needs_frame());
        assert!(!TargetChange::Ignored.needs_frame());
    }
}
