//! Strict optional values

use codesafe_policy::{Resolution, SafeOperator, Scope};
use once_cell::sync::Lazy;
use std::fmt;

/// Scope whose recovery policy observes swallowed combinator failures
pub const OPT_SCOPE: Scope = Scope::new("opt");

static SAFER: Lazy<SafeOperator> = Lazy::new(|| SafeOperator::for_scope(OPT_SCOPE));

/// Show a swallowed evaluation failure to the opt policy, then drop it.
/// Handlers get their side effects (logging); nothing ever propagates.
fn swallow(failure: anyhow::Error) {
    if let Resolution::Unhandled(err) = SAFER.policy().resolve(failure) {
        tracing::debug!(error = %err, "evaluation failure treated as absent");
    }
}

/// A strict optional value: either holds exactly one value, or nothing.
///
/// Unlike a bare `Option`, `Opt` carries combinators tuned for
/// recovery-heavy call sites: filtering that stays total when a predicate
/// fails, failure-swallowing mapping, multi-fallback resolution with
/// short-circuit evaluation, and throw-on-absence extraction. A populated
/// `Opt` structurally cannot hold an absent payload.
///
/// Immutable after construction; every combinator returns a new `Opt`.
///
/// # Example
///
/// ```
/// use codesafe_opt::Opt;
///
/// let port = Opt::of("8080".parse::<u16>().ok())
///     .filter(|p| *p > 1024)
///     .or_none();
/// assert_eq!(port, Some(8080));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opt<T> {
    value: Option<T>,
}

impl<T> Opt<T> {
    /// The empty instance
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Wrap a value that is known to exist
    #[inline]
    #[must_use]
    pub fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Wrap a possibly-absent value; `None` downgrades to empty
    #[inline]
    #[must_use]
    pub fn of(value: Option<T>) -> Self {
        Self { value }
    }

    /// Wrap a value the caller has already established to be present.
    ///
    /// # Panics
    /// Panics if `value` is `None` — requesting a populated instance
    /// from an absent value is a contract violation.
    #[must_use]
    pub fn check(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::some(v),
            None => panic!("Opt::check requires a present value"),
        }
    }

    /// Whether a value is present
    #[inline]
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Whether no value is present
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Borrow the value, if present
    #[inline]
    #[must_use]
    pub fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// An `Opt` borrowing this one's value
    #[inline]
    #[must_use]
    pub fn as_ref(&self) -> Opt<&T> {
        Opt {
            value: self.value.as_ref(),
        }
    }

    /// Call `f` with the value if present; chainable tap
    #[must_use]
    pub fn if_present(self, f: impl FnOnce(&T)) -> Self {
        if let Some(value) = &self.value {
            f(value);
        }
        self
    }

    /// Call `f` if no value is present; chainable tap
    #[must_use]
    pub fn if_absent(self, f: impl FnOnce()) -> Self {
        if self.value.is_none() {
            f();
        }
        self
    }

    /// Keep the value only if the predicate holds
    #[must_use]
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self.value {
            Some(v) if predicate(&v) => Self::some(v),
            _ => Self::empty(),
        }
    }

    /// Keep the value only if the fallible predicate holds.
    ///
    /// A predicate failure counts as `false`: the failure is shown to the
    /// opt scope's recovery policy for side effects and never propagates,
    /// keeping filtering total.
    #[must_use]
    pub fn try_filter(self, predicate: impl FnOnce(&T) -> anyhow::Result<bool>) -> Self {
        self.filter(|v| match predicate(v) {
            Ok(keep) => keep,
            Err(err) => {
                swallow(err);
                false
            }
        })
    }

    /// Keep the value only if the predicate holds on an extracted field
    /// (the original value is kept, not the field)
    #[must_use]
    pub fn filter_field<F>(
        self,
        extract: impl FnOnce(&T) -> F,
        predicate: impl FnOnce(&F) -> bool,
    ) -> Self {
        self.filter(|v| predicate(&extract(v)))
    }

    /// [`filter_field`](Self::filter_field) with a fallible predicate;
    /// failures count as `false`
    #[must_use]
    pub fn try_filter_field<F>(
        self,
        extract: impl FnOnce(&T) -> F,
        predicate: impl FnOnce(&F) -> anyhow::Result<bool>,
    ) -> Self {
        self.try_filter(|v| predicate(&extract(v)))
    }

    /// Keep the value only if the predicate does *not* hold
    #[must_use]
    pub fn drop_if(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        self.filter(|v| !predicate(v))
    }

    /// Keep the value only if the predicate does *not* hold on the field
    #[must_use]
    pub fn drop_field<F>(
        self,
        extract: impl FnOnce(&T) -> F,
        predicate: impl FnOnce(&F) -> bool,
    ) -> Self {
        self.filter_field(extract, |f| !predicate(f))
    }

    /// Transform the value if present
    #[must_use]
    pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> Opt<U> {
        Opt {
            value: self.value.map(mapper),
        }
    }

    /// Transform with a mapper that may yield nothing; `None` downgrades
    /// to empty
    #[must_use]
    pub fn map_nullable<U>(self, mapper: impl FnOnce(T) -> Option<U>) -> Opt<U> {
        Opt {
            value: self.value.and_then(mapper),
        }
    }

    /// Chain to a mapper whose result is already an `Opt`; the returned
    /// `Opt` is used directly
    #[must_use]
    pub fn map_opt<U>(self, mapper: impl FnOnce(T) -> Opt<U>) -> Opt<U> {
        match self.value {
            Some(v) => mapper(v),
            None => Opt::empty(),
        }
    }

    /// Transform with a fallible mapper; any failure is absorbed (shown
    /// to the opt scope's recovery policy) and yields empty
    #[must_use]
    pub fn try_map<U>(self, mapper: impl FnOnce(T) -> anyhow::Result<U>) -> Opt<U> {
        match self.value {
            Some(v) => match mapper(v) {
                Ok(mapped) => Opt::some(mapped),
                Err(err) => {
                    swallow(err);
                    Opt::empty()
                }
            },
            None => Opt::empty(),
        }
    }

    /// Unwrap to the value, or nothing
    #[inline]
    #[must_use]
    pub fn or_none(self) -> Option<T> {
        self.value
    }

    /// The held value, or the first present candidate
    #[must_use]
    pub fn or_any(self, candidates: impl IntoIterator<Item = Option<T>>) -> Option<T> {
        match self.value {
            Some(v) => Some(v),
            None => candidates.into_iter().flatten().next(),
        }
    }

    /// The held value, or the first present result from the producers.
    ///
    /// Producers run lazily, in order, each at most once, stopping at the
    /// first present result.
    #[must_use]
    pub fn or_any_with<F>(self, producers: impl IntoIterator<Item = F>) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        if let Some(v) = self.value {
            return Some(v);
        }
        for producer in producers {
            if let Some(v) = producer() {
                return Some(v);
            }
        }
        None
    }

    /// This `Opt` if present, else one wrapping `other`
    #[must_use]
    pub fn or_wrap(self, other: Option<T>) -> Self {
        if self.is_present() {
            self
        } else {
            Self::of(other)
        }
    }

    /// This `Opt` if present, else one wrapping the producer's result
    /// (invoked only when empty)
    #[must_use]
    pub fn or_wrap_with(self, other: impl FnOnce() -> Option<T>) -> Self {
        if self.is_present() {
            self
        } else {
            Self::of(other())
        }
    }

    /// This `Opt` if present, else `other`
    #[must_use]
    pub fn or_use(self, other: Opt<T>) -> Self {
        if self.is_present() {
            self
        } else {
            other
        }
    }

    /// This `Opt` if present, else the producer's `Opt` (invoked only
    /// when empty)
    #[must_use]
    pub fn or_use_with(self, other: impl FnOnce() -> Opt<T>) -> Self {
        if self.is_present() {
            self
        } else {
            other()
        }
    }

    /// The value, or the produced error (producer invoked only when empty)
    pub fn ok_or_else<E>(self, error: impl FnOnce() -> E) -> Result<T, E> {
        self.value.ok_or_else(error)
    }

    /// This `Opt` if present, or the produced error
    pub fn require<E>(self, error: impl FnOnce() -> E) -> Result<Self, E> {
        if self.is_present() {
            Ok(self)
        } else {
            Err(error())
        }
    }
}

impl<T> Default for Opt<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T: fmt::Display> fmt::Display for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Opt[{value}]"),
            None => f.write_str("Opt.empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn of_none_is_empty() {
        assert!(!Opt::<i32>::of(None).is_present());
    }

    #[test]
    fn of_value_is_present() {
        assert!(Opt::of(Some(5)).is_present());
    }

    #[test]
    #[should_panic(expected = "requires a present value")]
    fn check_absent_fails_fast() {
        let _ = Opt::<i32>::check(None);
    }

    #[test]
    fn round_trip_preserves_value() {
        assert_eq!(Opt::of(Some(5)).or_none(), Some(5));
        assert_eq!(Opt::<i32>::empty().or_none(), None);
    }

    #[test]
    fn filter_keeps_matching_value() {
        assert_eq!(Opt::some(5).filter(|v| *v > 0).or_none(), Some(5));
        assert_eq!(Opt::some(-5).filter(|v| *v > 0).or_none(), None);
    }

    #[test]
    fn failing_predicate_behaves_as_false() {
        let out = Opt::some(5).try_filter(|_| Err(anyhow!("predicate blew up")));
        assert!(out.is_empty());
    }

    #[test]
    fn filter_field_keeps_original_value() {
        let out = Opt::some(("id", 7)).filter_field(|pair| pair.1, |n| *n > 0);
        assert_eq!(out.or_none(), Some(("id", 7)));
    }

    #[test]
    fn drop_if_inverts_filter() {
        assert!(Opt::some(5).drop_if(|v| *v > 0).is_empty());
        assert_eq!(Opt::some(-5).drop_if(|v| *v > 0).or_none(), Some(-5));
    }

    #[test]
    fn drop_field_inverts_filter_field() {
        let out = Opt::some(("id", 7)).drop_field(|pair| pair.1, |n| *n > 0);
        assert!(out.is_empty());
    }

    #[test]
    fn map_transforms_present_value() {
        assert_eq!(Opt::some(5).map(|v| v * 2).or_none(), Some(10));
        assert_eq!(Opt::<i32>::empty().map(|v| v * 2).or_none(), None);
    }

    #[test]
    fn map_nullable_downgrades_none_to_empty() {
        assert!(Opt::some(5).map_nullable(|_| None::<i32>).is_empty());
        assert_eq!(Opt::some(5).map_nullable(|v| Some(v * 2)).or_none(), Some(10));
    }

    #[test]
    fn map_opt_uses_returned_opt_directly() {
        assert_eq!(Opt::some(5).map_opt(|v| Opt::some(v + 1)).or_none(), Some(6));
        assert!(Opt::some(5).map_opt(|_| Opt::<i32>::empty()).is_empty());
        assert!(Opt::<i32>::empty().map_opt(Opt::some).is_empty());
    }

    #[test]
    fn try_map_absorbs_mapper_failure() {
        let out = Opt::some(5).try_map(|_| Err::<i32, _>(anyhow!("mapper blew up")));
        assert!(out.is_empty());
        assert_eq!(Opt::some(5).try_map(|v| Ok(v * 3)).or_none(), Some(15));
    }

    #[test]
    fn or_any_returns_first_present_candidate() {
        let out = Opt::<&str>::empty().or_any([None, Some("B"), Some("C")]);
        assert_eq!(out, Some("B"));
    }

    #[test]
    fn or_any_with_short_circuits() {
        let third_ran = Cell::new(false);
        let producers: Vec<Box<dyn FnOnce() -> Option<&'static str> + '_>> = vec![
            Box::new(|| None),
            Box::new(|| Some("B")),
            Box::new(|| {
                third_ran.set(true);
                Some("C")
            }),
        ];

        let out = Opt::<&str>::empty().or_any_with(producers);
        assert_eq!(out, Some("B"));
        assert!(!third_ran.get());
    }

    #[test]
    fn or_any_with_prefers_held_value() {
        let ran = Cell::new(false);
        let out = Opt::some("A").or_any_with([|| {
            ran.set(true);
            Some("B")
        }]);
        assert_eq!(out, Some("A"));
        assert!(!ran.get());
    }

    #[test]
    fn or_wrap_and_or_use_fall_back_when_empty() {
        assert_eq!(Opt::<i32>::empty().or_wrap(Some(9)).or_none(), Some(9));
        assert_eq!(Opt::some(1).or_wrap(Some(9)).or_none(), Some(1));
        assert_eq!(Opt::<i32>::empty().or_use(Opt::some(9)).or_none(), Some(9));
        assert_eq!(
            Opt::<i32>::empty().or_use_with(|| Opt::some(9)).or_none(),
            Some(9)
        );
    }

    #[test]
    fn or_wrap_with_is_lazy() {
        let ran = Cell::new(false);
        let out = Opt::some(1).or_wrap_with(|| {
            ran.set(true);
            Some(9)
        });
        assert_eq!(out.or_none(), Some(1));
        assert!(!ran.get());
    }

    #[test]
    fn ok_or_else_raises_only_when_empty() {
        assert_eq!(Opt::some(5).ok_or_else(|| "missing"), Ok(5));
        assert_eq!(Opt::<i32>::empty().ok_or_else(|| "missing"), Err("missing"));
    }

    #[test]
    fn require_passes_self_through() {
        let present = Opt::some(5).require(|| "missing").unwrap();
        assert_eq!(present.or_none(), Some(5));
        assert!(Opt::<i32>::empty().require(|| "missing").is_err());
    }

    #[test]
    fn if_present_and_if_absent_tap() {
        let seen = Cell::new(0);
        let _ = Opt::some(5)
            .if_present(|v| seen.set(*v))
            .if_absent(|| seen.set(-1));
        assert_eq!(seen.get(), 5);

        let _ = Opt::<i32>::empty().if_absent(|| seen.set(-1));
        assert_eq!(seen.get(), -1);
    }

    #[test]
    fn equality_follows_state() {
        assert_eq!(Opt::some(5), Opt::of(Some(5)));
        assert_eq!(Opt::<i32>::empty(), Opt::<i32>::of(None));
        assert_ne!(Opt::some(5), Opt::some(6));
        assert_ne!(Opt::some(5), Opt::empty());
    }

    #[test]
    fn display_follows_state() {
        assert_eq!(Opt::some(5).to_string(), "Opt[5]");
        assert_eq!(Opt::<i32>::empty().to_string(), "Opt.empty");
    }
}
