//! Last-input memoization.
//!
//! Derived metrics are a pure function of their inputs, so a caller that
//! recomputes on every notification can skip the work when nothing changed.

/// Caches the output for the most recent input, compared by value.
#[derive(Debug, Clone)]
pub struct Memo<I, O> {
    cached: Option<(I, O)>,
}

impl<I: Clone + PartialEq, O> Memo<I, O> {
    pub fn new() -> Self {
        Self { cached: None }
    }

    /// Return the output for `input`, recomputing only when it differs from
    /// the cached input.
    pub fn get_or_compute(&mut self, input: &I, compute: impl FnOnce(&I) -> O) -> &O {
        if !matches!(&self.cached, Some((cached, _)) if cached == input) {
            self.cached = None;
        }
        let (_, output) = self.cached.get_or_insert_with(|| {
            tracing::trace!("memo miss, recomputing derived metrics");
            (input.clone(), compute(input))
        });
        output
    }

    /// Last computed output, if any.
    pub fn last(&self) -> Option<&O> {
        self.cached.as_ref().map(|(_, o)| o)
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

impl<I: Clone + PartialEq, O> Default for Memo<I, O> {
    fn default() -> Self {
        Self::new()
    }
}
