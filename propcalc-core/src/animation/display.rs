//! An animated numeric readout: one [`Animator`] plus its frame registration.

use std::fmt;
use std::time::Duration;

use super::animator::{Animator, FrameTime, TargetChange, TickOutcome};
use super::scheduler::{FrameScheduler, FrameToken};
use crate::format::Formatter;

/// A mounted readout.
///
/// Holds at most one pending frame. Any new request first revokes the
/// previous one, so two frame callbacks can never race on the same value.
pub struct AnimatedDisplay<K> {
    key: K,
    animator: Animator,
    formatter: Formatter,
    pending: Option<FrameToken>,
}

impl<K: Clone> AnimatedDisplay<K> {
    /// Mount showing `initial` with no transition.
    pub fn mount(key: K, initial: f64, duration: Duration, formatter: Formatter) -> Self {
        Self {
            key,
            animator: Animator::with_duration(initial, duration),
            formatter,
            pending: None,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn displayed(&self) -> f64 {
        self.animator.displayed()
    }

    pub fn target(&self) -> f64 {
        self.animator.target()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.animator.set_duration(duration);
    }

    /// Formatted current value.
    pub fn text(&self) -> String {
        (self.formatter)(self.animator.displayed())
    }

    pub fn set_target<S: FrameScheduler<K>>(&mut self, target: f64, sched: &mut S) -> TargetChange {
        let change = self.animator.set_target(target);
        match change {
            TargetChange::Ignored => {}
            TargetChange::Snapped => self.revoke(sched),
            TargetChange::Started | TargetChange::Restarted => {
                self.revoke(sched);
                self.pending = Some(sched.request_frame(self.key.clone()));
            }
        }
        change
    }

    /// Frame callback. Tokens other than the pending one are stale and ignored.
    pub fn on_frame<S: FrameScheduler<K>>(
        &mut self,
        token: FrameToken,
        now: FrameTime,
        sched: &mut S,
    ) -> TickOutcome {
        if self.pending != Some(token) {
            return TickOutcome::Idle;
        }
        self.pending = None;

        let outcome = self.animator.tick(now);
        if outcome == TickOutcome::Running {
            self.pending = Some(sched.request_frame(self.key.clone()));
        }
        outcome
    }

    /// Tear down: revoke the pending frame and freeze. Returns the last
    /// displayed value.
    pub fn unmount<S: FrameScheduler<K>>(mut self, sched: &mut S) -> f64 {
        self.revoke(sched);
        self.animator.cancel();
        self.animator.displayed()
    }

    fn revoke<S: FrameScheduler<K>>(&mut self, sched: &mut S) {
        if let Some(token) = self.pending.take() {
            sched.cancel_frame(token);
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for AnimatedDisplay<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedDisplay")
            .field("key", &self.key)
            .field("animator", &self.animator)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
