//! Keyed registry of animated readouts sharing one frame queue.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::time::Duration;

use super::animator::{FrameTime, TargetChange, TickOutcome, DEFAULT_DURATION};
use super::display::AnimatedDisplay;
use super::scheduler::FrameQueue;
use crate::format::Formatter;

/// Every mounted readout, keyed by a stable identifier.
///
/// Readouts are independent; the only shared piece is the queue the host
/// drains once per frame through [`DisplayBoard::advance`].
#[derive(Debug)]
pub struct DisplayBoard<K: Ord> {
    displays: BTreeMap<K, AnimatedDisplay<K>>,
    queue: FrameQueue<K>,
    duration: Duration,
}

impl<K: Ord + Clone + Debug> DisplayBoard<K> {
    pub fn new(duration: Duration) -> Self {
        Self {
            displays: BTreeMap::new(),
            queue: FrameQueue::new(),
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Duration for transitions started from now on.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
        for display in self.displays.values_mut() {
            display.set_duration(duration);
        }
    }

    /// Mount `key` showing `initial`. A key that is already mounted is torn
    /// down first.
    pub fn mount(&mut self, key: K, initial: f64, formatter: Formatter) {
        self.unmount(&key);
        tracing::trace!(?key, initial, "mount readout");
        let display = AnimatedDisplay::mount(key.clone(), initial, self.duration, formatter);
        self.displays.insert(key, display);
    }

    /// Tear down `key`, revoking its pending frame. Returns the value it was
    /// showing.
    pub fn unmount(&mut self, key: &K) -> Option<f64> {
        let display = self.displays.remove(key)?;
        tracing::trace!(?key, "unmount readout");
        Some(display.unmount(&mut self.queue))
    }

    pub fn is_mounted(&self, key: &K) -> bool {
        self.displays.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.displays.keys()
    }

    /// Retarget a mounted readout. `None` when `key` is not mounted.
    pub fn set_target(&mut self, key: &K, target: f64) -> Option<TargetChange> {
        let display = self.displays.get_mut(key)?;
        let change = display.set_target(target, &mut self.queue);
        if change != TargetChange::Ignored {
            tracing::trace!(?key, target, ?change, "retarget readout");
        }
        Some(change)
    }

    /// Deliver one frame at `now` to every readout that asked for it.
    /// Returns how many readouts were ticked.
    pub fn advance(&mut self, now: FrameTime) -> usize {
        let due = self.queue.take_due();
        let mut ticked = 0;
        for (token, key) in due {
            let Some(readout) = self.displays.get_mut(&key) else {
                continue;
            };
            match readout.on_frame(token, now, &mut self.queue) {
                TickOutcome::Idle => {}
                TickOutcome::Running => ticked += 1,
                TickOutcome::Settled => {
                    ticked += 1;
                    let value = readout.displayed();
                    tracing::trace!(?key, value, "readout settled");
                }
            }
        }
        ticked
    }

    /// Whether any readout is waiting for a frame.
    pub fn is_animating(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn displayed(&self, key: &K) -> Option<f64> {
        self.displays.get(key).map(|d| d.displayed())
    }

    pub fn text(&self, key: &K) -> Option<String> {
        self.displays.get(key).map(|d| d.text())
    }

    pub fn get(&self, key: &K) -> Option<&AnimatedDisplay<K>> {
        self.displays.get(key)
    }
}

impl<K: Ord + Clone + Debug> Default for DisplayBoard<K> {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}
