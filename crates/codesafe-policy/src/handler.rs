//! Recovery handlers
//!
//! A handler inspects a caught failure and either substitutes a (possibly
//! different) failure for the next handler in the chain, or absorbs it,
//! stopping the chain.

use anyhow::Error;
use std::fmt;
use std::sync::Arc;

/// A single step of a recovery chain.
///
/// Wraps a function from a failure to either a replacement failure
/// (`Some`, handed to the next handler) or absorption (`None`, the chain
/// stops and nothing propagates). Handlers may carry arbitrary side
/// effects such as logging.
#[derive(Clone)]
pub struct Handler {
    inner: Arc<dyn Fn(Error) -> Option<Error> + Send + Sync>,
}

impl Handler {
    /// Wrap a raw handler function
    pub fn new(f: impl Fn(Error) -> Option<Error> + Send + Sync + 'static) -> Self {
        Self { inner: Arc::new(f) }
    }

    /// Handler that observes the failure, then absorbs it.
    ///
    /// The usual logging idiom:
    ///
    /// ```
    /// use codesafe_policy::Handler;
    ///
    /// let handler = Handler::absorbing(|err| tracing::warn!(error = %err, "recovered"));
    /// ```
    pub fn absorbing(observer: impl Fn(&Error) + Send + Sync + 'static) -> Self {
        Self::new(move |err| {
            observer(&err);
            None
        })
    }

    /// Handler that absorbs every failure without looking at it
    #[must_use]
    pub fn absorb() -> Self {
        Self::new(|_| None)
    }

    /// Handler that hands the failure to the next handler unchanged
    #[must_use]
    pub fn passthrough() -> Self {
        Self::new(Some)
    }

    /// Handler that substitutes the failure for the next handler
    pub fn map(f: impl Fn(Error) -> Error + Send + Sync + 'static) -> Self {
        Self::new(move |err| Some(f(err)))
    }

    /// Absorbing handler that logs the failure at `warn` level
    #[must_use]
    pub fn warn() -> Self {
        Self::absorbing(|err| tracing::warn!(error = %err, "failure absorbed by recovery policy"))
    }

    /// Run this handler on a failure
    #[must_use]
    pub fn handle(&self, failure: Error) -> Option<Error> {
        (self.inner)(failure)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn absorb_returns_none() {
        assert!(Handler::absorb().handle(anyhow!("boom")).is_none());
    }

    #[test]
    fn passthrough_returns_same_message() {
        let out = Handler::passthrough().handle(anyhow!("boom")).unwrap();
        assert_eq!(out.to_string(), "boom");
    }

    #[test]
    fn map_substitutes_failure() {
        let handler = Handler::map(|err| err.context("while doing work"));
        let out = handler.handle(anyhow!("boom")).unwrap();
        assert_eq!(out.to_string(), "while doing work");
    }

    #[test]
    fn absorbing_observes_before_absorbing() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);
        let handler = Handler::absorbing(move |_| {
            seen_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(handler.handle(anyhow!("boom")).is_none());
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
