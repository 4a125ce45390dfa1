//! Codesafe enum indexing
//!
//! Immutable key → variant indexes built from an explicit, closed variant
//! list — the variant set is known at compile time, so callers pass it in
//! and get back an eager lookup table.
//!
//! # Core concepts
//!
//! - [`EnumIndex`]: key → variant map with default- and error-raising
//!   lookup forms
//! - [`IndexError`]: duplicate extraction keys are a construction-time
//!   error naming both offending variants
//!
//! # Example
//!
//! ```
//! use codesafe_enum::EnumIndex;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Mode {
//!     Off,
//!     On,
//! }
//!
//! let index = EnumIndex::build([Mode::Off, Mode::On], |m| match m {
//!     Mode::Off => 0,
//!     Mode::On => 1,
//! })
//! .unwrap();
//!
//! assert_eq!(index.get_or(Some(&1), &Mode::Off), &Mode::On);
//! assert_eq!(index.get_or(Some(&9), &Mode::Off), &Mode::Off);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod index;

pub use index::{EnumIndex, IndexError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
