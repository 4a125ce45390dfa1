//! Codesafe
//!
//! A small runtime utility layer for code that would rather recover than
//! crash: chainable per-scope failure-recovery policies, a strict optional
//! wrapper with failure-aware combinators, and immutable enum indexes.
//!
//! # Overview
//!
//! - [`Scope`] / [`PolicyRegistry`] / [`Handler`]: configure, once at
//!   startup, what each part of the program does with caught failures
//! - [`SafeOperator`] and the [`safer`] module: run fallible closures,
//!   receiving recovered defaults or a single wrapped [`Unhandled`]
//! - [`Opt`]: strict optional values with filtering, mapping, chaining and
//!   multi-fallback resolution
//! - [`EnumIndex`]: precomputed key → variant lookup over closed enums
//! - [`JsonCapability`]: the injected text-parsing capability
//!
//! # Example
//!
//! ```
//! use codesafe::{Handler, Opt, PolicyRegistry, SafeOperator, Scope};
//!
//! const INGEST: Scope = Scope::new("ingest");
//!
//! let registry = PolicyRegistry::new();
//! registry.append_handlers(INGEST, [Handler::warn()]);
//!
//! let safer = SafeOperator::with_registry(&registry, INGEST);
//! let size = safer.get_int(|| "oversize".parse::<i64>()).unwrap();
//!
//! let label = Opt::some(size)
//!     .filter(|n| *n > 0)
//!     .map(|n| n.to_string())
//!     .or_any([Some("unknown".to_string())]);
//! assert_eq!(label.as_deref(), Some("unknown"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod safer;

pub use codesafe_enum::{EnumIndex, IndexError};
pub use codesafe_opt::{
    all_valid, any_valid, field_valid, is_all_blank, is_any_blank, is_blank, is_not_blank,
    is_valid, Def, Opt, Validity, DEF_SCOPE, OPT_SCOPE,
};
pub use codesafe_parse::{
    opt_bool, opt_f64, opt_i64, parse_bool, parse_dynamic, parse_dynamic_with, parse_f64,
    parse_i64, parse_list, parse_list_with, parse_map, parse_num, parse_object, parse_object_with,
    parse_ordered_map, JsonCapability, ParseError, SerdeJsonParser, ValueKind, ValueParser,
    PARSE_SCOPE,
};
pub use codesafe_policy::{
    Handler, PolicyRegistry, RecoveryPolicy, Resolution, SafeOperator, Scope, Unhandled,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for recovery-aware code
    pub use crate::{
        Handler, JsonCapability, Opt, PolicyRegistry, SafeOperator, Scope, Unhandled, Validity,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
