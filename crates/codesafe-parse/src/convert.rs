//! Lenient text → value conversion
//!
//! Conversion failures never propagate from these helpers: `parse_*`
//! functions yield `None` (or an empty container), `opt_*` functions wrap
//! the same outcome in an [`Opt`]. Capability-backed conversions show
//! their failures to the parse scope's recovery policy first.

use crate::capability::{JsonCapability, ParseError};
use codesafe_opt::Opt;
use codesafe_policy::{Resolution, SafeOperator, Scope};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::hash::Hash;
use std::str::FromStr;

/// Scope whose recovery policy observes swallowed conversion failures
pub const PARSE_SCOPE: Scope = Scope::new("parse");

static SAFER: Lazy<SafeOperator> = Lazy::new(|| SafeOperator::for_scope(PARSE_SCOPE));

fn swallow(failure: anyhow::Error) {
    if let Resolution::Unhandled(err) = SAFER.policy().resolve(failure) {
        tracing::debug!(error = %err, "conversion failure treated as absent");
    }
}

const TRUTHY: [&str; 6] = ["true", "1", "t", "y", "yes", "on"];
const FALSY: [&str; 6] = ["false", "0", "f", "n", "no", "off"];

/// Parse text carrying a broad boolean vocabulary.
///
/// Case-insensitive: `true`/`1`/`t`/`y`/`yes`/`on` are true,
/// `false`/`0`/`f`/`n`/`no`/`off` are false, anything else is `None`.
#[must_use]
pub fn parse_bool(text: &str) -> Option<bool> {
    let trimmed = text.trim();
    if TRUTHY.iter().any(|t| trimmed.eq_ignore_ascii_case(t)) {
        return Some(true);
    }
    if FALSY.iter().any(|f| trimmed.eq_ignore_ascii_case(f)) {
        return Some(false);
    }
    None
}

/// [`parse_bool`] wrapped in an [`Opt`]
#[must_use]
pub fn opt_bool(text: &str) -> Opt<bool> {
    Opt::of(parse_bool(text))
}

/// Parse text to any `FromStr` type; failures yield `None`
#[must_use]
pub fn parse_num<T: FromStr>(text: &str) -> Option<T> {
    text.trim().parse().ok()
}

/// Parse text to an integer; failures yield `None`
#[must_use]
pub fn parse_i64(text: &str) -> Option<i64> {
    parse_num(text)
}

/// [`parse_i64`] wrapped in an [`Opt`]
///
/// ```
/// use codesafe_parse::opt_i64;
///
/// assert_eq!(opt_i64("1").or_any([Some(0)]), Some(1));
/// assert_eq!(opt_i64("str").or_any([Some(0)]), Some(0));
/// assert_eq!(opt_i64("-1").filter(|n| *n > 0).or_any([Some(0)]), Some(0));
/// ```
#[must_use]
pub fn opt_i64(text: &str) -> Opt<i64> {
    Opt::of(parse_i64(text))
}

/// Parse text to a float; failures yield `None`
#[must_use]
pub fn parse_f64(text: &str) -> Option<f64> {
    parse_num(text)
}

/// [`parse_f64`] wrapped in an [`Opt`]
#[must_use]
pub fn opt_f64(text: &str) -> Opt<f64> {
    Opt::of(parse_f64(text))
}

/// Parse text to a typed object through an explicit capability
#[must_use]
pub fn parse_object_with<T: DeserializeOwned>(
    capability: &JsonCapability,
    text: &str,
) -> Option<T> {
    let parsed = capability
        .parser()
        .parse_value(text)
        .and_then(|value| serde_json::from_value(value).map_err(ParseError::from));
    match parsed {
        Ok(object) => Some(object),
        Err(err) => {
            swallow(err.into());
            None
        }
    }
}

/// Parse text to a typed object through the process-wide capability.
///
/// Requires [`JsonCapability::global`] to be installed first.
#[must_use]
pub fn parse_object<T: DeserializeOwned>(text: &str) -> Option<T> {
    parse_object_with(JsonCapability::global(), text)
}

/// Parse text to a typed list through an explicit capability; failures
/// yield an empty list
#[must_use]
pub fn parse_list_with<T: DeserializeOwned>(capability: &JsonCapability, text: &str) -> Vec<T> {
    let parsed: Result<Vec<T>, ParseError> =
        capability.parser().parse_values(text).and_then(|values| {
            values
                .into_iter()
                .map(|value| serde_json::from_value(value).map_err(ParseError::from))
                .collect()
        });
    match parsed {
        Ok(list) => list,
        Err(err) => {
            swallow(err.into());
            Vec::new()
        }
    }
}

/// Parse text to a typed list through the process-wide capability.
///
/// Requires [`JsonCapability::global`] to be installed first.
#[must_use]
pub fn parse_list<T: DeserializeOwned>(text: &str) -> Vec<T> {
    parse_list_with(JsonCapability::global(), text)
}

/// Build a map from items; later items win on key collision
pub fn parse_map<T, K, V>(
    items: impl IntoIterator<Item = T>,
    key_fn: impl Fn(&T) -> K,
    value_fn: impl Fn(T) -> V,
) -> HashMap<K, V>
where
    K: Eq + Hash,
{
    items
        .into_iter()
        .map(|item| (key_fn(&item), value_fn(item)))
        .collect()
}

/// Build an insertion-ordered map from items; later items win on key
/// collision but keep the original position
pub fn parse_ordered_map<T, K, V>(
    items: impl IntoIterator<Item = T>,
    key_fn: impl Fn(&T) -> K,
    value_fn: impl Fn(T) -> V,
) -> IndexMap<K, V>
where
    K: Eq + Hash,
{
    items
        .into_iter()
        .map(|item| (key_fn(&item), value_fn(item)))
        .collect()
}
