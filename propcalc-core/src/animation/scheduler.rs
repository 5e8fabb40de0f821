//! Frame scheduling primitives.
//!
//! A display asks for "one callback before the next refresh" and gets a
//! token it can revoke. Requests are one-shot: a display that still has
//! work after its frame must ask again.

use std::collections::BTreeMap;

/// Handle for one pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameToken(u64);

/// Request/cancel pair offered by the host environment.
pub trait FrameScheduler<K> {
    /// Schedule `key` for the next frame.
    fn request_frame(&mut self, key: K) -> FrameToken;

    /// Revoke a pending request. Unknown or already-delivered tokens are a no-op.
    fn cancel_frame(&mut self, token: FrameToken);
}

/// In-process scheduler: pending requests wait here until the host drains
/// them once per frame.
#[derive(Debug, Clone)]
pub struct FrameQueue<K> {
    next_id: u64,
    pending: BTreeMap<FrameToken, K>,
}

impl<K> FrameQueue<K> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_pending(&self, token: FrameToken) -> bool {
        self.pending.contains_key(&token)
    }

    /// Remove every pending request, oldest first.
    ///
    /// Requests made while the returned batch is being dispatched land in
    /// the queue for the following frame.
    pub fn take_due(&mut self) -> Vec<(FrameToken, K)> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }
}

impl<K> Default for FrameQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FrameScheduler<K> for FrameQueue<K> {
    fn request_frame(&mut self, key: K) -> FrameToken {
        self.next_id += 1;
        let token = FrameToken(self.next_id);
        self.pending.insert(token, key);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.pending.remove(&token);
    }
}
