//! Failure-aware execution bound to a scope's recovery policy

use crate::error::Unhandled;
use crate::policy::{RecoveryPolicy, Resolution};
use crate::registry::PolicyRegistry;
use crate::scope::Scope;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

/// Runs fallible operations and routes their failures through the bound
/// scope's recovery policy.
///
/// Every failure has exactly two outcomes, decided by the policy alone:
/// *absorbed* (the caller sees a recovered default and nothing surfaces)
/// or *fatal* (the resolved failure is re-raised as [`Unhandled`]).
/// The operator itself holds no mutable state beyond its scope binding.
///
/// # Example
///
/// ```
/// use codesafe_policy::{Handler, PolicyRegistry, SafeOperator, Scope};
///
/// let registry = PolicyRegistry::new();
/// registry.append_handlers(Scope::new("jobs"), [Handler::absorb()]);
///
/// let safer = SafeOperator::with_registry(&registry, Scope::new("jobs"));
/// let count = safer.get_int(|| "not a number".parse::<i64>()).unwrap();
/// assert_eq!(count, 0);
/// ```
#[derive(Debug, Clone)]
pub struct SafeOperator {
    scope: Scope,
    policy: Arc<RecoveryPolicy>,
}

impl SafeOperator {
    /// Operator bound to `scope` in the process-wide registry
    #[must_use]
    pub fn for_scope(scope: Scope) -> Self {
        Self::with_registry(PolicyRegistry::global(), scope)
    }

    /// Operator bound to `scope` in an explicit registry
    #[must_use]
    pub fn with_registry(registry: &PolicyRegistry, scope: Scope) -> Self {
        Self {
            scope,
            policy: registry.for_scope(scope),
        }
    }

    /// The bound scope
    #[inline]
    #[must_use]
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// The bound policy
    #[inline]
    #[must_use]
    pub fn policy(&self) -> &RecoveryPolicy {
        &self.policy
    }

    fn recover(&self, failure: anyhow::Error) -> Result<(), Unhandled> {
        match self.policy.resolve(failure) {
            Resolution::Absorbed => {
                tracing::debug!(scope = %self.scope, "failure absorbed");
                Ok(())
            }
            Resolution::Unhandled(err) => Err(Unhandled::new(self.scope, err)),
        }
    }

    /// Run a fallible effect.
    ///
    /// On failure the bound policy resolves it: absorbed means `Ok(())`,
    /// otherwise the resolved failure comes back as [`Unhandled`].
    pub fn execute<E>(&self, effect: impl FnOnce() -> Result<(), E>) -> Result<(), Unhandled>
    where
        E: Into<anyhow::Error>,
    {
        match effect() {
            Ok(()) => Ok(()),
            Err(err) => self.recover(err.into()),
        }
    }

    /// Run a fallible value producer.
    ///
    /// Success yields `Ok(Some(value))`; an absorbed failure yields
    /// `Ok(None)`; a fatal resolution yields [`Unhandled`].
    pub fn get<T, E>(&self, producer: impl FnOnce() -> Result<T, E>) -> Result<Option<T>, Unhandled>
    where
        E: Into<anyhow::Error>,
    {
        match producer() {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                self.recover(err.into())?;
                Ok(None)
            }
        }
    }

    /// Substitute an absent value with the type's zero value.
    ///
    /// Total and failure-free; no policy involvement.
    #[inline]
    #[allow(clippy::unused_self)]
    pub fn ensure<T: Default>(&self, value: Option<T>) -> T {
        value.unwrap_or_default()
    }

    /// Run a producer, recover via policy on failure, then coalesce an
    /// absent result to the type's zero value
    pub fn get_or_default<T, E>(
        &self,
        producer: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, Unhandled>
    where
        T: Default,
        E: Into<anyhow::Error>,
    {
        let value = self.get(producer)?;
        Ok(self.ensure(value))
    }

    /// [`get_or_default`](Self::get_or_default) for booleans (`false`)
    pub fn get_bool<E>(&self, producer: impl FnOnce() -> Result<bool, E>) -> Result<bool, Unhandled>
    where
        E: Into<anyhow::Error>,
    {
        self.get_or_default(producer)
    }

    /// [`get_or_default`](Self::get_or_default) for text (`""`)
    pub fn get_string<E>(
        &self,
        producer: impl FnOnce() -> Result<String, E>,
    ) -> Result<String, Unhandled>
    where
        E: Into<anyhow::Error>,
    {
        self.get_or_default(producer)
    }

    /// [`get_or_default`](Self::get_or_default) for integers (`0`)
    pub fn get_int<E>(&self, producer: impl FnOnce() -> Result<i64, E>) -> Result<i64, Unhandled>
    where
        E: Into<anyhow::Error>,
    {
        self.get_or_default(producer)
    }

    /// [`get_or_default`](Self::get_or_default) for floats (`0.0`)
    pub fn get_float<E>(&self, producer: impl FnOnce() -> Result<f64, E>) -> Result<f64, Unhandled>
    where
        E: Into<anyhow::Error>,
    {
        self.get_or_default(producer)
    }

    /// [`get_or_default`](Self::get_or_default) for sequences (empty)
    pub fn get_list<T, E>(
        &self,
        producer: impl FnOnce() -> Result<Vec<T>, E>,
    ) -> Result<Vec<T>, Unhandled>
    where
        E: Into<anyhow::Error>,
    {
        self.get_or_default(producer)
    }

    /// [`get_or_default`](Self::get_or_default) for sets (empty)
    pub fn get_set<T, E>(
        &self,
        producer: impl FnOnce() -> Result<HashSet<T>, E>,
    ) -> Result<HashSet<T>, Unhandled>
    where
        T: Eq + Hash,
        E: Into<anyhow::Error>,
    {
        self.get_or_default(producer)
    }

    /// [`get_or_default`](Self::get_or_default) for mappings (empty)
    pub fn get_map<K, V, E>(
        &self,
        producer: impl FnOnce() -> Result<HashMap<K, V>, E>,
    ) -> Result<HashMap<K, V>, Unhandled>
    where
        K: Eq + Hash,
        E: Into<anyhow::Error>,
    {
        self.get_or_default(producer)
    }

    /// Turn a fallible effect into one that applies this operator's
    /// absorb-or-propagate logic when invoked
    pub fn into_effect<E, F>(&self, effect: F) -> impl FnOnce() -> Result<(), Unhandled>
    where
        E: Into<anyhow::Error>,
        F: FnOnce() -> Result<(), E>,
    {
        let operator = self.clone();
        move || operator.execute(effect)
    }

    /// Turn a fallible producer into one that applies this operator's
    /// absorb-or-propagate logic when invoked
    pub fn into_producer<T, E, F>(&self, producer: F) -> impl FnOnce() -> Result<Option<T>, Unhandled>
    where
        E: Into<anyhow::Error>,
        F: FnOnce() -> Result<T, E>,
    {
        let operator = self.clone();
        move || operator.get(producer)
    }
}
