//! The injected value-parser capability
//!
//! Parsing text into structured values is an external capability: callers
//! install a parser once (typically at startup) and the conversion helpers
//! query it thereafter. Installing twice, or using the capability before
//! installing, is a programmer error and fails fast.

use once_cell::sync::OnceCell;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Errors from value parsing
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The text was not a well-formed value
    #[error("value parse failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The text parsed, but not to the requested shape
    #[error("unexpected value shape: {0}")]
    UnexpectedShape(String),
}

/// Parses text into structured values.
///
/// The two injected parse shapes: a single value, and a list of values.
/// Typed deserialization is layered on top by the conversion helpers.
pub trait ValueParser: Send + Sync {
    /// Parse text to a single value
    fn parse_value(&self, text: &str) -> Result<Value, ParseError>;

    /// Parse text to a list of values
    fn parse_values(&self, text: &str) -> Result<Vec<Value>, ParseError>;
}

/// The default parser, backed by `serde_json`
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonParser;

impl ValueParser for SerdeJsonParser {
    fn parse_value(&self, text: &str) -> Result<Value, ParseError> {
        Ok(serde_json::from_str(text)?)
    }

    fn parse_values(&self, text: &str) -> Result<Vec<Value>, ParseError> {
        Ok(serde_json::from_str(text)?)
    }
}

static GLOBAL: JsonCapability = JsonCapability::new();

/// Set-once holder for the value-parser capability.
///
/// Single-assignment invariant: the first [`install`](Self::install)
/// succeeds; any further install is a contract violation, as is querying
/// before installing. Both fail fast and never enter failure recovery.
///
/// Most callers configure [`JsonCapability::global`] once at startup; an
/// owned instance exists for tests and explicit injection.
pub struct JsonCapability {
    parser: OnceCell<Arc<dyn ValueParser>>,
}

impl JsonCapability {
    /// Create an empty capability holder
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parser: OnceCell::new(),
        }
    }

    /// The process-wide capability (install once, no teardown)
    #[must_use]
    pub fn global() -> &'static JsonCapability {
        &GLOBAL
    }

    /// Install the parser.
    ///
    /// # Panics
    /// Panics if a parser is already installed.
    pub fn install(&self, parser: Arc<dyn ValueParser>) {
        assert!(
            self.parser.set(parser).is_ok(),
            "value parser can only be installed once"
        );
    }

    /// Whether a parser has been installed
    #[must_use]
    pub fn installed(&self) -> bool {
        self.parser.get().is_some()
    }

    /// The installed parser.
    ///
    /// # Panics
    /// Panics if no parser has been installed — a startup-order error.
    #[must_use]
    pub fn parser(&self) -> &dyn ValueParser {
        self.parser
            .get()
            .expect("value parser has not been installed")
            .as_ref()
    }
}

impl Default for JsonCapability {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for JsonCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonCapability")
            .field("installed", &self.installed())
            .finish()
    }
}
