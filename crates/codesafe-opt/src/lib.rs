//! Codesafe optional system
//!
//! Strict optional values with failure-aware combinators.
//!
//! # Core concepts
//!
//! - [`Opt`]: two-state optional — filtering, mapping (including
//!   failure-swallowing forms), chaining, multi-fallback resolution with
//!   short-circuit evaluation, throw-on-absence extraction
//! - [`Def`]: a default value guarded by an acceptance predicate
//! - [`Validity`]: the "is this domain object usable" hook, with built-in
//!   impls for recognized kinds
//!
//! Fallible combinators (`try_filter`, `try_map`) stay total: a predicate
//! or mapper failure counts as absent, after the failure has been shown to
//! the `opt` scope's recovery policy for side effects such as logging.
//!
//! # Example
//!
//! ```
//! use codesafe_opt::Opt;
//!
//! let label = Opt::of(Some("  widget  "))
//!     .map(str::trim)
//!     .filter(|s| !s.is_empty())
//!     .or_any([Some("unnamed")]);
//! assert_eq!(label, Some("widget"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod def;
mod opt;
mod validity;

pub use def::{Def, DEF_SCOPE};
pub use opt::{Opt, OPT_SCOPE};
pub use validity::{
    all_valid, any_valid, field_valid, is_all_blank, is_any_blank, is_blank, is_not_blank,
    is_valid, Validity,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
