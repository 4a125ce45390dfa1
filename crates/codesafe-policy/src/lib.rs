//! Codesafe policy system
//!
//! Per-scope failure-recovery policies and the operator that applies them.
//!
//! # Core concepts
//!
//! - [`Scope`]: opaque token identifying the owner of a policy
//! - [`Handler`]: one step of a recovery chain — substitute or absorb
//! - [`RecoveryPolicy`]: ordered, append-only handler chain
//! - [`PolicyRegistry`]: process-wide scope → policy map (lazy, atomic
//!   get-or-create, no reset)
//! - [`SafeOperator`]: runs fallible closures and routes failures through
//!   the bound policy
//! - [`Unhandled`]: the single failure type that crosses the boundary
//!
//! # Example
//!
//! ```
//! use codesafe_policy::{Handler, PolicyRegistry, SafeOperator, Scope};
//!
//! const JOBS: Scope = Scope::new("jobs");
//!
//! // Configured once at startup: absorb and log
//! let registry = PolicyRegistry::new();
//! registry.append_handlers(JOBS, [Handler::warn()]);
//!
//! // Thereafter: recovered defaults instead of failures
//! let safer = SafeOperator::with_registry(&registry, JOBS);
//! let port = safer.get_int(|| "not-a-port".parse::<i64>()).unwrap();
//! assert_eq!(port, 0);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod handler;
mod operator;
mod policy;
mod registry;
mod scope;

pub use error::Unhandled;
pub use handler::Handler;
pub use operator::SafeOperator;
pub use policy::{RecoveryPolicy, Resolution};
pub use registry::PolicyRegistry;
pub use scope::Scope;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for policy-mediated execution
    pub use crate::{Handler, PolicyRegistry, SafeOperator, Scope, Unhandled};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
