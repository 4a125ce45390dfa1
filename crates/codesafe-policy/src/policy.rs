//! Ordered recovery-handler chains

use crate::handler::Handler;
use anyhow::Error;
use parking_lot::RwLock;
use std::sync::Arc;

/// Outcome of running a failure through a full handler chain
#[derive(Debug)]
pub enum Resolution {
    /// Some handler stopped the failure; nothing propagates
    Absorbed,

    /// The chain was exhausted; the last returned failure is the resolution
    Unhandled(Error),
}

impl Resolution {
    /// Whether the failure was absorbed
    #[inline]
    #[must_use]
    pub fn is_absorbed(&self) -> bool {
        matches!(self, Self::Absorbed)
    }

    /// The unresolved failure, if any
    #[must_use]
    pub fn into_failure(self) -> Option<Error> {
        match self {
            Self::Absorbed => None,
            Self::Unhandled(err) => Some(err),
        }
    }
}

/// An ordered, append-only sequence of recovery handlers for one scope.
///
/// Handlers run in insertion order; each receives the current failure
/// (which may be what a previous handler substituted) and either replaces
/// it or absorbs it. An empty chain is the identity: the failure resolves
/// to itself, unhandled.
///
/// Appending is safe to interleave with concurrent [`resolve`] calls:
/// resolution iterates an immutable snapshot, so a reader observes either
/// the pre- or post-append sequence, never a partially updated one.
///
/// [`resolve`]: RecoveryPolicy::resolve
#[derive(Debug)]
pub struct RecoveryPolicy {
    handlers: RwLock<Arc<Vec<Handler>>>,
}

impl RecoveryPolicy {
    /// Create a policy with no handlers (pass-through)
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Append one handler after any already present
    pub fn append(&self, handler: Handler) {
        self.append_all([handler]);
    }

    /// Append handlers in call order after any already present
    pub fn append_all(&self, handlers: impl IntoIterator<Item = Handler>) {
        let mut guard = self.handlers.write();
        let mut next: Vec<Handler> = guard.as_ref().clone();
        next.extend(handlers);
        *guard = Arc::new(next);
    }

    /// Feed a failure through the handler chain, left to right.
    ///
    /// Processing stops at the first absorption. If the chain is exhausted
    /// without absorption, the last returned failure is the resolution.
    #[must_use]
    pub fn resolve(&self, failure: Error) -> Resolution {
        let snapshot = Arc::clone(&self.handlers.read());
        let mut current = failure;
        for handler in snapshot.iter() {
            match handler.handle(current) {
                None => return Resolution::Absorbed,
                Some(next) => current = next,
            }
        }
        Resolution::Unhandled(current)
    }

    /// Number of handlers in the chain
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Whether the chain is empty (identity resolution)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handler_count() == 0
    }
}

impl Default for RecoveryPolicy {
    fn default() -> Self {
        Self::new()
    }
}
