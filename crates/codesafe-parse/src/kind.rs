//! Recognized value kinds
//!
//! A closed set of value shapes used to dispatch text parsing when the
//! target type is only known dynamically (configuration tables, wire
//! attributes). Unrecognized names fall back to [`ValueKind::Object`].

use crate::capability::JsonCapability;
use crate::convert::{parse_bool, parse_f64, parse_i64};
use codesafe_enum::EnumIndex;
use once_cell::sync::Lazy;
use serde_json::Value;

/// A recognized value shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Boolean
    Bool,

    /// Integer
    Int,

    /// Floating point
    Float,

    /// Text
    Text,

    /// Sequence of values
    List,

    /// String-keyed mapping
    Map,

    /// Anything else; parsed through the value-parser capability
    Object,
}

impl ValueKind {
    /// Every kind, in dispatch order
    pub const ALL: [ValueKind; 7] = [
        ValueKind::Bool,
        ValueKind::Int,
        ValueKind::Float,
        ValueKind::Text,
        ValueKind::List,
        ValueKind::Map,
        ValueKind::Object,
    ];

    /// Canonical name of this kind
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::List => "list",
            ValueKind::Map => "map",
            ValueKind::Object => "object",
        }
    }

    /// The kind with the given canonical name; unknown names are
    /// [`ValueKind::Object`]
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        *NAME_INDEX.get_or(Some(name), &ValueKind::Object)
    }
}

static NAME_INDEX: Lazy<EnumIndex<&'static str, ValueKind>> = Lazy::new(|| {
    EnumIndex::build(ValueKind::ALL, |kind| kind.name()).expect("value kind names are distinct")
});

/// Parse text according to a dynamically-selected kind.
///
/// `Bool`/`Int`/`Float`/`Text` parse locally; `List`, `Map` and `Object`
/// go through the capability (`Map` additionally requires the parsed
/// value to be an object). Anything that does not parse to the requested
/// shape yields `None`.
#[must_use]
pub fn parse_dynamic_with(
    capability: &JsonCapability,
    kind: ValueKind,
    text: &str,
) -> Option<Value> {
    match kind {
        ValueKind::Bool => parse_bool(text).map(Value::Bool),
        ValueKind::Int => parse_i64(text).map(Value::from),
        ValueKind::Float => parse_f64(text).map(Value::from),
        ValueKind::Text => Some(Value::String(text.to_string())),
        ValueKind::List => capability
            .parser()
            .parse_values(text)
            .ok()
            .map(Value::Array),
        ValueKind::Map => capability
            .parser()
            .parse_value(text)
            .ok()
            .filter(Value::is_object),
        ValueKind::Object => capability.parser().parse_value(text).ok(),
    }
}

/// [`parse_dynamic_with`] against the process-wide capability
#[must_use]
pub fn parse_dynamic(kind: ValueKind, text: &str) -> Option<Value> {
    parse_dynamic_with(JsonCapability::global(), kind, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::SerdeJsonParser;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    fn serde_capability() -> JsonCapability {
        let capability = JsonCapability::new();
        capability.install(Arc::new(SerdeJsonParser));
        capability
    }

    #[test]
    fn name_round_trips() {
        for kind in ValueKind::ALL {
            assert_eq!(ValueKind::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn unknown_name_falls_back_to_object() {
        assert_eq!(ValueKind::from_name("widget"), ValueKind::Object);
        assert_eq!(ValueKind::from_name(""), ValueKind::Object);
    }

    #[test]
    fn dynamic_scalar_parsing() {
        let capability = serde_capability();
        assert_eq!(
            parse_dynamic_with(&capability, ValueKind::Bool, "yes"),
            Some(Value::Bool(true))
        );
        assert_eq!(
            parse_dynamic_with(&capability, ValueKind::Int, "42"),
            Some(json!(42))
        );
        assert_eq!(
            parse_dynamic_with(&capability, ValueKind::Float, "2.5"),
            Some(json!(2.5))
        );
        assert_eq!(
            parse_dynamic_with(&capability, ValueKind::Text, "as-is"),
            Some(json!("as-is"))
        );
    }

    #[test]
    fn dynamic_container_parsing() {
        let capability = serde_capability();
        assert_eq!(
            parse_dynamic_with(&capability, ValueKind::List, "[1, 2]"),
            Some(json!([1, 2]))
        );
        assert_eq!(
            parse_dynamic_with(&capability, ValueKind::Map, "{\"a\": 1}"),
            Some(json!({"a": 1}))
        );
        assert_eq!(
            parse_dynamic_with(&capability, ValueKind::Object, "[1]"),
            Some(json!([1]))
        );
    }

    #[test]
    fn dynamic_shape_mismatch_yields_none() {
        let capability = serde_capability();
        assert_eq!(parse_dynamic_with(&capability, ValueKind::Int, "x"), None);
        assert_eq!(
            parse_dynamic_with(&capability, ValueKind::Map, "[1, 2]"),
            None
        );
        assert_eq!(
            parse_dynamic_with(&capability, ValueKind::List, "{oops"),
            None
        );
    }
}
