//! Helpers for tests that consume fixtures.
//!
//! - **Assertion macros**: [`crate::assert_build_ok!`],
//!   [`crate::assert_build_err!`] and [`crate::assert_error_code!`] unwrap
//!   build results with messages that show the failing location.
//! - **Lookups**: [`value_at`] reads a nested value by dotted path, the same
//!   syntax the invalid-fixture helpers use.
//!
//! # Quick Start
//!
//! ```rust
//! use objectory::testkit::value_at;
//! use objectory::{assert_build_ok, create_factory, tree, Value};
//!
//! let factory = create_factory(|| tree! { "values" => vec![-1, 0, 1] });
//! let broken = assert_build_ok!(factory.build_invalid_without("values.1"));
//!
//! assert_eq!(value_at(&broken, "values.1"), Some(&Value::from(1)));
//! ```

pub mod assertions;

use crate::path::{normalize_path, PathSegment};
use crate::value::Value;

/// Look up the value at a dotted path; `None` when any segment is missing.
pub fn value_at<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    normalize_path(path)
        .iter()
        .try_fold(root, |current, segment| match (current, segment) {
            (Value::Array(items), PathSegment::Index(index)) => items.get(*index),
            (Value::Object(entries), segment) => entries.get(segment.as_key().as_ref()),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object;

    #[test]
    fn test_value_at_walks_objects_and_arrays() {
        let root = Value::from(object! {
            "profile" => object! { "tags" => vec!["a", "b"] },
        });

        assert_eq!(value_at(&root, "profile.tags.1"), Some(&Value::from("b")));
        assert_eq!(value_at(&root, "profile.tags.7"), None);
        assert_eq!(value_at(&root, "profile.missing"), None);
        assert_eq!(value_at(&root, "profile.tags.first"), None);
    }
}
