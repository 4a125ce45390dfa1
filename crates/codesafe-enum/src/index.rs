//! Key → variant indexes

use indexmap::{Equivalent, IndexMap};
use std::fmt;
use std::hash::Hash;

/// Errors from index construction
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IndexError {
    /// Two variants mapped to equal keys
    #[error("index key must be unique across variants, found duplicate between {existing} and {incoming}")]
    DuplicateKey {
        /// The variant already holding the key
        existing: String,
        /// The variant that produced the same key
        incoming: String,
    },
}

/// An immutable mapping from an extracted key back to the variant it was
/// derived from.
///
/// Built eagerly from the complete variant list; the extraction function
/// must yield pairwise-distinct keys, and a collision is a construction
/// error, not a query error. Variant order is preserved for iteration.
///
/// # Example
///
/// ```
/// use codesafe_enum::EnumIndex;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Level {
///     Low,
///     High,
/// }
///
/// impl Level {
///     fn tag(self) -> &'static str {
///         match self {
///             Level::Low => "low",
///             Level::High => "high",
///         }
///     }
/// }
///
/// let index = EnumIndex::build([Level::Low, Level::High], |l| l.tag()).unwrap();
/// assert_eq!(index.get(&"high"), Some(&Level::High));
/// assert_eq!(index.get(&"off"), None);
/// ```
#[derive(Debug, Clone)]
pub struct EnumIndex<K, E> {
    map: IndexMap<K, E>,
}

impl<K, E> EnumIndex<K, E>
where
    K: Hash + Eq,
{
    /// Build an index over the full variant list.
    ///
    /// # Errors
    /// Returns [`IndexError::DuplicateKey`] naming both offending
    /// variants if the extraction function yields equal keys for two of
    /// them.
    pub fn build(
        variants: impl IntoIterator<Item = E>,
        key_fn: impl Fn(&E) -> K,
    ) -> Result<Self, IndexError>
    where
        E: fmt::Debug,
    {
        let mut map = IndexMap::new();
        for variant in variants {
            let key = key_fn(&variant);
            if let Some(existing) = map.get(&key) {
                return Err(IndexError::DuplicateKey {
                    existing: format!("{existing:?}"),
                    incoming: format!("{variant:?}"),
                });
            }
            map.insert(key, variant);
        }
        Ok(Self { map })
    }

    /// Look up the variant for `key`
    #[inline]
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&E>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.map.get(key)
    }

    /// Look up the variant for an optional key; an absent key or an
    /// unmapped key yields `default`
    #[must_use]
    pub fn get_or<'a, Q>(&'a self, key: Option<&Q>, default: &'a E) -> &'a E
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        key.and_then(|k| self.get(k)).unwrap_or(default)
    }

    /// Look up the variant for an optional key; an absent or unmapped
    /// key raises the produced error instead of defaulting
    pub fn get_or_else<Q, X>(
        &self,
        key: Option<&Q>,
        error: impl FnOnce() -> X,
    ) -> Result<&E, X>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        key.and_then(|k| self.get(k)).ok_or_else(error)
    }

    /// Whether `key` maps to a variant
    #[inline]
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Indexed keys, in variant order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    /// Indexed variants, in build order
    pub fn variants(&self) -> impl Iterator<Item = &E> {
        self.map.values()
    }

    /// Number of indexed variants
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the index is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Status {
        Unknown,
        Active,
        Disabled,
    }

    impl Status {
        fn code(self) -> u8 {
            match self {
                Status::Unknown => 0,
                Status::Active => 1,
                Status::Disabled => 2,
            }
        }
    }

    const ALL: [Status; 3] = [Status::Unknown, Status::Active, Status::Disabled];

    fn index() -> EnumIndex<u8, Status> {
        EnumIndex::build(ALL, |s| s.code()).unwrap()
    }

    #[test]
    fn build_and_lookup() {
        let index = index();
        assert_eq!(index.len(), 3);
        assert_eq!(index.get(&1), Some(&Status::Active));
        assert_eq!(index.get(&9), None);
    }

    #[test]
    fn duplicate_keys_fail_construction_naming_both_variants() {
        let err = EnumIndex::build(ALL, |_| 7u8).unwrap_err();
        match err {
            IndexError::DuplicateKey { existing, incoming } => {
                assert_eq!(existing, "Unknown");
                assert_eq!(incoming, "Active");
            }
        }
    }

    #[test]
    fn duplicate_key_error_message_names_variants() {
        let err = EnumIndex::build([Status::Active, Status::Disabled], |_| 1u8).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Active"));
        assert!(message.contains("Disabled"));
    }

    #[test]
    fn get_or_defaults_for_absent_and_unmapped_keys() {
        let index = index();
        assert_eq!(*index.get_or(Some(&2), &Status::Unknown), Status::Disabled);
        assert_eq!(*index.get_or(Some(&9), &Status::Unknown), Status::Unknown);
        assert_eq!(*index.get_or(None::<&u8>, &Status::Unknown), Status::Unknown);
    }

    #[test]
    fn get_or_else_raises_instead_of_defaulting() {
        let index = index();
        assert_eq!(
            index.get_or_else(Some(&1), || "no match"),
            Ok(&Status::Active)
        );
        assert_eq!(index.get_or_else(Some(&9), || "no match"), Err("no match"));
        assert_eq!(
            index.get_or_else(None::<&u8>, || "no match"),
            Err("no match")
        );
    }

    #[test]
    fn iteration_preserves_build_order() {
        let index = index();
        let variants: Vec<&Status> = index.variants().collect();
        assert_eq!(
            variants,
            vec![&Status::Unknown, &Status::Active, &Status::Disabled]
        );
        let keys: Vec<&u8> = index.keys().collect();
        assert_eq!(keys, vec![&0, &1, &2]);
    }

    #[test]
    fn multiple_indexes_over_one_enum() {
        let by_code = EnumIndex::build(ALL, |s| s.code()).unwrap();
        let by_name = EnumIndex::build(ALL, |s| format!("{s:?}")).unwrap();

        assert_eq!(by_code.get(&2), Some(&Status::Disabled));
        assert_eq!(by_name.get(&"Disabled".to_string()), Some(&Status::Disabled));
    }
}
