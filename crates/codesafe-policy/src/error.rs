//! Error types for policy-mediated execution

use crate::scope::Scope;
use anyhow::Error;

/// A failure that completed policy resolution without being absorbed.
///
/// Carries the scope whose policy declined to absorb it and the resolved
/// failure (the original, or whatever the handler chain substituted).
/// This is the only failure type that crosses the operator boundary:
/// callers see either a recovered value or an `Unhandled`, never a bare
/// internal failure.
#[derive(Debug, thiserror::Error)]
#[error("unhandled failure in scope `{scope}`: {inner}")]
pub struct Unhandled {
    scope: Scope,
    inner: Error,
}

impl Unhandled {
    pub(crate) fn new(scope: Scope, inner: Error) -> Self {
        Self { scope, inner }
    }

    /// The scope whose policy resolved this failure
    #[inline]
    #[must_use]
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// The resolved failure
    #[inline]
    #[must_use]
    pub fn inner(&self) -> &Error {
        &self.inner
    }

    /// Unwrap the resolved failure
    #[must_use]
    pub fn into_inner(self) -> Error {
        self.inner
    }
}
