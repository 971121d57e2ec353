//! Revision-keyed cache for derived view data.
//!
//! The UI redraws every tick, but the selected rows only change when an input
//! does. Every input change bumps a [`Revision`] and the cache recomputes only
//! when asked for a revision it has not seen.

/// Monotonic counter identifying one state of the selection inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Revision(u64);

impl Revision {
    /// Returns the next revision.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Cache holding the value computed for the most recent revision.
#[derive(Debug, Clone)]
pub struct RowCache<T> {
    cached: Option<(Revision, T)>,
    recomputations: usize,
}

impl<T> Default for RowCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RowCache<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cached: None,
            recomputations: 0,
        }
    }

    /// Returns the value for `revision`, running `compute` only on a miss.
    pub fn get_or_compute<F>(&mut self, revision: Revision, compute: F) -> &T
    where
        F: FnOnce() -> T,
    {
        if !self.is_current(revision) {
            tracing::debug!(?revision, "Recomputing balance rows");
            self.recomputations += 1;
            self.cached = None;
        }
        let (_, value) = self.cached.get_or_insert_with(|| (revision, compute()));
        value
    }

    /// Returns the most recently computed value, whatever its revision.
    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.cached.as_ref().map(|(_, value)| value)
    }

    /// Returns `true` if the cached value was computed for `revision`.
    #[must_use]
    pub fn is_current(&self, revision: Revision) -> bool {
        matches!(&self.cached, Some((cached, _)) if *cached == revision)
    }

    /// Number of times the value was recomputed.
    #[cfg(test)]
    #[must_use]
    pub const fn recomputations(&self) -> usize {
        self.recomputations
    }
}
