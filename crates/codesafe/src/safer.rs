//! Ready-made safe execution against a shared default scope
//!
//! The free-function face of [`SafeOperator`]: callers that do not need a
//! scope of their own use these directly. The backing scope is `safer`;
//! configure its recovery policy through the global
//! [`PolicyRegistry`](codesafe_policy::PolicyRegistry) at startup.

use codesafe_opt::Validity;
use codesafe_policy::{SafeOperator, Scope, Unhandled};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// The shared default scope
pub const SAFER_SCOPE: Scope = Scope::new("safer");

static SAFER: Lazy<SafeOperator> = Lazy::new(|| SafeOperator::for_scope(SAFER_SCOPE));

/// The operator behind these functions
#[must_use]
pub fn operator() -> &'static SafeOperator {
    &SAFER
}

/// Run a fallible effect; failures resolve through the `safer` policy
pub fn execute<E>(effect: impl FnOnce() -> Result<(), E>) -> Result<(), Unhandled>
where
    E: Into<anyhow::Error>,
{
    SAFER.execute(effect)
}

/// Run a fallible producer; absorbed failures yield `Ok(None)`
pub fn get<T, E>(producer: impl FnOnce() -> Result<T, E>) -> Result<Option<T>, Unhandled>
where
    E: Into<anyhow::Error>,
{
    SAFER.get(producer)
}

/// Substitute an absent value with the type's zero value
#[inline]
#[must_use]
pub fn ensure<T: Default>(value: Option<T>) -> T {
    SAFER.ensure(value)
}

/// Produce a boolean, recovering to `false`
pub fn get_bool<E>(producer: impl FnOnce() -> Result<bool, E>) -> Result<bool, Unhandled>
where
    E: Into<anyhow::Error>,
{
    SAFER.get_bool(producer)
}

/// Produce text, recovering to `""`
pub fn get_string<E>(producer: impl FnOnce() -> Result<String, E>) -> Result<String, Unhandled>
where
    E: Into<anyhow::Error>,
{
    SAFER.get_string(producer)
}

/// Produce an integer, recovering to `0`
pub fn get_int<E>(producer: impl FnOnce() -> Result<i64, E>) -> Result<i64, Unhandled>
where
    E: Into<anyhow::Error>,
{
    SAFER.get_int(producer)
}

/// Produce a float, recovering to `0.0`
pub fn get_float<E>(producer: impl FnOnce() -> Result<f64, E>) -> Result<f64, Unhandled>
where
    E: Into<anyhow::Error>,
{
    SAFER.get_float(producer)
}

/// Produce a sequence, recovering to empty
pub fn get_list<T, E>(producer: impl FnOnce() -> Result<Vec<T>, E>) -> Result<Vec<T>, Unhandled>
where
    E: Into<anyhow::Error>,
{
    SAFER.get_list(producer)
}

/// Produce a set, recovering to empty
pub fn get_set<T, E>(
    producer: impl FnOnce() -> Result<HashSet<T>, E>,
) -> Result<HashSet<T>, Unhandled>
where
    T: Eq + Hash,
    E: Into<anyhow::Error>,
{
    SAFER.get_set(producer)
}

/// Produce a mapping, recovering to empty
pub fn get_map<K, V, E>(
    producer: impl FnOnce() -> Result<HashMap<K, V>, E>,
) -> Result<HashMap<K, V>, Unhandled>
where
    K: Eq + Hash,
    E: Into<anyhow::Error>,
{
    SAFER.get_map(producer)
}

/// Iterate present values, dropping absent ones
pub fn compact<T>(values: impl IntoIterator<Item = Option<T>>) -> impl Iterator<Item = T> {
    values.into_iter().flatten()
}

/// Iterate values that pass their [`Validity`] check
pub fn valid_values<I>(values: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: Validity,
{
    values.into_iter().filter(Validity::valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_coalesces() {
        assert_eq!(ensure::<i64>(None), 0);
        assert_eq!(ensure(Some("x".to_string())), "x");
    }

    #[test]
    fn compact_drops_absent_values() {
        let values: Vec<i32> = compact([Some(1), None, Some(3)]).collect();
        assert_eq!(values, vec![1, 3]);
    }

    #[test]
    fn valid_values_drops_invalid_entries() {
        let values: Vec<&str> = valid_values(["a", "", "null", "b"]).collect();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn get_family_uses_default_scope() {
        // The `safer` scope has no handlers by default: resolution is the
        // identity and the failure surfaces wrapped.
        let err = get_int(|| "nope".parse::<i64>()).unwrap_err();
        assert_eq!(err.scope(), SAFER_SCOPE);
    }
}
