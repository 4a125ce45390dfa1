//! Guarded default values

use codesafe_policy::{Resolution, SafeOperator, Scope};
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

/// Scope whose recovery policy observes failed productions
pub const DEF_SCOPE: Scope = Scope::new("def");

static SAFER: Lazy<SafeOperator> = Lazy::new(|| SafeOperator::for_scope(DEF_SCOPE));

fn swallow(failure: anyhow::Error) {
    if let Resolution::Unhandled(err) = SAFER.policy().resolve(failure) {
        tracing::debug!(error = %err, "production failure replaced by default");
    }
}

/// A default value paired with an acceptance predicate.
///
/// Values that fail production or fail the predicate are replaced by the
/// default. Production failures are shown to the def scope's recovery
/// policy for side effects, then the default applies.
///
/// # Example
///
/// ```
/// use codesafe_opt::Def;
///
/// let retries = Def::with_filter(3u32, |n| *n <= 10);
/// assert_eq!(retries.check(5), 5);
/// assert_eq!(retries.check(99), 3);
/// assert_eq!(retries.get(|| "oops".parse().map_err(Into::into)), 3);
/// ```
#[derive(Clone)]
pub struct Def<T> {
    default_value: T,
    tester: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Def<T> {
    /// A default that accepts every produced value
    pub fn of(default_value: T) -> Self {
        Self {
            default_value,
            tester: Arc::new(|_| true),
        }
    }

    /// A default with an acceptance predicate
    pub fn with_filter(
        default_value: T,
        tester: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            default_value,
            tester: Arc::new(tester),
        }
    }

    /// Replace the acceptance predicate
    #[must_use]
    pub fn filter(self, tester: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            default_value: self.default_value,
            tester: Arc::new(tester),
        }
    }

    /// The default value
    #[inline]
    #[must_use]
    pub fn default_value(&self) -> &T {
        &self.default_value
    }

    /// Produce a value, keep it if accepted, else `None`
    pub fn get_or_none(&self, producer: impl FnOnce() -> anyhow::Result<T>) -> Option<T> {
        match producer() {
            Ok(value) => self.check_or_none(value),
            Err(err) => {
                swallow(err);
                None
            }
        }
    }

    /// Keep `value` if accepted, else `None`
    pub fn check_or_none(&self, value: T) -> Option<T> {
        (self.tester)(&value).then_some(value)
    }
}

impl<T: Clone> Def<T> {
    /// Produce a value, keep it if accepted, else the default
    pub fn get(&self, producer: impl FnOnce() -> anyhow::Result<T>) -> T {
        self.get_or_none(producer)
            .unwrap_or_else(|| self.default_value.clone())
    }

    /// Keep `value` if accepted, else the default
    pub fn check(&self, value: T) -> T {
        self.check_or_none(value)
            .unwrap_or_else(|| self.default_value.clone())
    }
}

impl<T: Default> Def<T> {
    /// A default at the type's zero value, accepting everything
    #[must_use]
    pub fn standard() -> Self {
        Self::of(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Def<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Def")
            .field("default_value", &self.default_value)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn get_returns_accepted_value() {
        let def = Def::of(0);
        assert_eq!(def.get(|| Ok(42)), 42);
    }

    #[test]
    fn get_falls_back_on_failure() {
        let def = Def::of(7);
        assert_eq!(def.get(|| Err(anyhow!("boom"))), 7);
    }

    #[test]
    fn get_falls_back_on_rejected_value() {
        let def = Def::with_filter(1, |n| *n > 0);
        assert_eq!(def.get(|| Ok(-5)), 1);
    }

    #[test]
    fn check_applies_tester() {
        let def = Def::with_filter("fallback".to_string(), |s: &String| !s.is_empty());
        assert_eq!(def.check("value".to_string()), "value");
        assert_eq!(def.check(String::new()), "fallback");
    }

    #[test]
    fn check_or_none_rejects_to_none() {
        let def = Def::with_filter(0, |n| *n > 0);
        assert_eq!(def.check_or_none(5), Some(5));
        assert_eq!(def.check_or_none(-5), None);
    }

    #[test]
    fn filter_replaces_tester() {
        let def = Def::of(0).filter(|n| *n % 2 == 0);
        assert_eq!(def.check(4), 4);
        assert_eq!(def.check(5), 0);
    }

    #[test]
    fn standard_uses_zero_value() {
        let def = Def::<i64>::standard();
        assert_eq!(*def.default_value(), 0);
        assert_eq!(def.get(|| Err(anyhow!("boom"))), 0);
    }
}
