//! Parameter kind checking.
//!
//! Handlers that need it validate their parameters before doing any work.
//! Checking stops at the first mismatch and reports the offending position
//! or field together with the expected kind. The count of parameters is not
//! checked here, only the kinds of those passed.

use crate::domain::error::RpcError;
use serde_json::{Map, Value};

/// JSON value kinds, the closed vocabulary of the type checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ParamKind {
    /// Kind of a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ParamKind::Null,
            Value::Bool(_) => ParamKind::Bool,
            Value::Number(_) => ParamKind::Number,
            Value::String(_) => ParamKind::String,
            Value::Array(_) => ParamKind::Array,
            Value::Object(_) => ParamKind::Object,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ParamKind::Null => "Null",
            ParamKind::Bool => "Bool",
            ParamKind::Number => "Number",
            ParamKind::String => "String",
            ParamKind::Array => "Array",
            ParamKind::Object => "Object",
        }
    }
}

/// Check positional parameters against an expected-kind list.
///
/// With `allow_null`, a null value passes regardless of the expected kind.
pub fn check_positional(
    params: &[Value],
    expected: &[ParamKind],
    allow_null: bool,
) -> Result<(), RpcError> {
    for (index, (value, want)) in params.iter().zip(expected.iter()).enumerate() {
        if allow_null && value.is_null() {
            continue;
        }
        if ParamKind::of(value) != *want {
            return Err(RpcError::bad_positional(index, want.name()));
        }
    }
    Ok(())
}

/// Check named fields of an object parameter against an expected mapping.
///
/// Every expected field must be present with the expected kind; with
/// `allow_null`, a null field passes regardless.
pub fn check_named(
    object: &Map<String, Value>,
    expected: &[(&str, ParamKind)],
    allow_null: bool,
) -> Result<(), RpcError> {
    for (field, want) in expected {
        let value = object
            .get(*field)
            .ok_or_else(|| RpcError::bad_named(field, want.name()))?;
        if allow_null && value.is_null() {
            continue;
        }
        if ParamKind::of(value) != *want {
            return Err(RpcError::bad_named(field, want.name()));
        }
    }
    Ok(())
}
