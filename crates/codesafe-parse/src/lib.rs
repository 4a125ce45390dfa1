//! Codesafe parsing system
//!
//! The injected value-parser capability and lenient text conversion.
//!
//! # Core concepts
//!
//! - [`ValueParser`] / [`JsonCapability`]: parsing structured text is an
//!   external capability, installed once at startup; set-once with
//!   fail-fast misuse
//! - [`SerdeJsonParser`]: the default capability implementation
//! - Conversion helpers: `parse_*` yield `None`/empty on failure, `opt_*`
//!   wrap outcomes in [`Opt`](codesafe_opt::Opt)
//! - [`ValueKind`]: closed set of recognized value shapes for dynamic
//!   dispatch
//!
//! # Example
//!
//! ```
//! use codesafe_parse::{opt_i64, parse_bool};
//!
//! assert_eq!(parse_bool("YES"), Some(true));
//! assert_eq!(opt_i64("7").filter(|n| *n > 0).or_none(), Some(7));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod capability;
mod convert;
mod kind;

pub use capability::{JsonCapability, ParseError, SerdeJsonParser, ValueParser};
pub use convert::{
    opt_bool, opt_f64, opt_i64, parse_bool, parse_f64, parse_i64, parse_list, parse_list_with,
    parse_map, parse_num, parse_object, parse_object_with, parse_ordered_map, PARSE_SCOPE,
};
pub use kind::{parse_dynamic, parse_dynamic_with, ValueKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
