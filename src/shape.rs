//! Recognized value shapes.
//!
//! Primitives, null/undefined, dates, functions and symbols are always
//! allowed. Arrays and plain objects are allowed when everything inside
//! them is. Anything else (an [`Instance`](crate::value::Instance)) is
//! rejected.

use crate::errors::FactoryError;
use crate::overrides::OverrideNode;
use crate::path::PathSegment;
use crate::value::Value;

pub fn is_allowed_value(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.iter().all(is_allowed_value),
        Value::Object(entries) => entries.values().all(is_allowed_value),
        Value::Instance(_) => false,
        _ => true,
    }
}

/// Like [`is_allowed_value`], but removal markers and `undefined` are
/// accepted at every depth.
pub fn is_allowed_override_value(node: &OverrideNode) -> bool {
    match node {
        OverrideNode::Remove => true,
        OverrideNode::Value(value) => is_allowed_value(value),
        OverrideNode::Array(items) => items.iter().all(is_allowed_override_value),
        OverrideNode::Object(entries) => entries.values().all(is_allowed_override_value),
    }
}

/// Reject `value` unless it is a recognized shape.
///
/// The error points at the first offending node, relative to `value`.
pub fn assert_allowed_value(value: &Value) -> Result<(), FactoryError> {
    match value {
        Value::Array(items) => items.iter().enumerate().try_for_each(|(index, item)| {
            assert_allowed_value(item).map_err(|e| e.within(PathSegment::Index(index)))
        }),
        Value::Object(entries) => entries.iter().try_for_each(|(key, entry)| {
            assert_allowed_value(entry).map_err(|e| e.within(PathSegment::Key(key.clone())))
        }),
        Value::Instance(instance) => Err(FactoryError::invalid_shape(format!(
            "instance of `{}`",
            instance.class_name()
        ))),
        _ => Ok(()),
    }
}
