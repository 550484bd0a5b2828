//! Normalization of caller-supplied override trees.
//!
//! A raw override tree cannot tell "set this key to undefined" apart from
//! "delete this key". The normalized form makes the difference explicit:
//!
//! - top-level `undefined` (a key of the `build` argument itself) stays a
//!   literal `undefined` value, which is how optional fields get cleared;
//! - `undefined` anywhere deeper, inside a nested override object or a
//!   template array element, becomes [`OverrideNode::Remove`] and deletes
//!   the corresponding key or element from the nested result.
//!
//! During the merge, [`normalize_dispatch`] separates keys the override
//! tree does not mention at all ([`NormalizedOverride::NotApplied`]) from
//! keys it mentions with any value, including `undefined`.

use crate::value::{Overrides, Value};
use indexmap::IndexMap;

/// Normalized override tree, keyed like the generated tree it targets.
pub type PreparedOverrides = IndexMap<String, OverrideNode>;

/// One normalized override position.
#[derive(Debug, Clone, PartialEq)]
pub enum OverrideNode {
    /// Delete the corresponding key or element from the result.
    Remove,
    Value(Value),
    Object(PreparedOverrides),
    Array(Vec<OverrideNode>),
}

impl OverrideNode {
    /// Shape name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Remove => "removal marker",
            Self::Value(value) => value.kind_name(),
            Self::Object(_) => "object",
            Self::Array(_) => "array",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Value(Value::Undefined))
    }

    /// Plain value for a leaf position, with removal markers dropped.
    ///
    /// Returns `None` only for [`OverrideNode::Remove`] itself; nested
    /// markers omit their key (objects) or their element (arrays).
    pub fn to_value(&self) -> Option<Value> {
        match self {
            Self::Remove => None,
            Self::Value(value) => Some(value.clone()),
            Self::Object(entries) => Some(Value::Object(
                entries
                    .iter()
                    .filter_map(|(key, node)| node.to_value().map(|value| (key.clone(), value)))
                    .collect(),
            )),
            Self::Array(items) => Some(items.iter().filter_map(OverrideNode::to_value).collect()),
        }
    }
}

/// Dispatch state of a single key during the merge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormalizedOverride<'a> {
    /// The override tree does not mention the key.
    NotApplied,
    /// The key is present, with a possibly `undefined` or removal value.
    Applied(&'a OverrideNode),
}

impl<'a> NormalizedOverride<'a> {
    pub fn node(&self) -> Option<&'a OverrideNode> {
        match *self {
            Self::NotApplied => None,
            Self::Applied(node) => Some(node),
        }
    }

    /// True when the override asks for the removal of its position.
    pub fn is_removal(&self) -> bool {
        matches!(self, Self::Applied(OverrideNode::Remove))
    }

    /// The override to hand to a nested build: `None` when absent or a
    /// literal `undefined`, which both mean "use the defaults".
    pub fn effective(&self) -> Option<&'a OverrideNode> {
        self.node().filter(|node| !node.is_undefined())
    }
}

/// Normalize one raw override value supplied directly to `build`.
pub fn prepare_override(raw: &Value) -> OverrideNode {
    prepare(raw, false)
}

/// Normalize every key of a raw override tree.
pub fn prepare_overrides(raw: &Overrides) -> PreparedOverrides {
    raw.iter()
        .map(|(key, value)| (key.clone(), prepare_override(value)))
        .collect()
}

fn prepare(raw: &Value, nested: bool) -> OverrideNode {
    match raw {
        Value::Undefined if nested => OverrideNode::Remove,
        Value::Array(items) => {
            OverrideNode::Array(items.iter().map(|item| prepare(item, true)).collect())
        }
        Value::Object(entries) => OverrideNode::Object(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), prepare(value, true)))
                .collect(),
        ),
        leaf => OverrideNode::Value(leaf.clone()),
    }
}

/// Dispatch for a key, given its entry in the normalized override tree.
pub fn normalize_dispatch(entry: Option<&OverrideNode>) -> NormalizedOverride<'_> {
    match entry {
        Some(node) => NormalizedOverride::Applied(node),
        None => NormalizedOverride::NotApplied,
    }
}

/// Shallow union of two override trees.
///
/// A key present in `extension` replaces the same key of `base` as a
/// whole; nested overrides under that key are not merged.
pub fn merge_overrides<V: Clone>(
    base: &IndexMap<String, V>,
    extension: &IndexMap<String, V>,
) -> IndexMap<String, V> {
    let mut merged = base.clone();
    for (key, value) in extension {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_top_level_undefined_is_kept_as_value() {
        let prepared = prepare_overrides(&object! { "nickname" => Value::Undefined });
        assert_eq!(prepared["nickname"], OverrideNode::Value(Value::Undefined));
    }

    #[test]
    fn test_nested_undefined_becomes_removal() {
        let prepared = prepare_overrides(&object! {
            "profile" => object! { "age" => Value::Undefined, "name" => "Jane" },
        });

        let mut expected = PreparedOverrides::new();
        expected.insert("age".into(), OverrideNode::Remove);
        expected.insert("name".into(), OverrideNode::Value("Jane".into()));
        assert_eq!(prepared["profile"], OverrideNode::Object(expected));
    }

    #[test]
    fn test_array_elements_are_nested() {
        let prepared = prepare_override(&Value::from(vec![Value::Undefined, Value::from(2)]));
        assert_eq!(
            prepared,
            OverrideNode::Array(vec![OverrideNode::Remove, OverrideNode::Value(2.into())])
        );
    }

    #[test]
    fn test_dates_pass_through() {
        let now = Utc::now();
        assert_eq!(
            prepare_override(&Value::from(now)),
            OverrideNode::Value(Value::Date(now))
        );
    }

    #[test]
    fn test_to_value_drops_removal_markers() {
        let prepared = prepare_override(&Value::from(object! {
            "gone" => Value::Undefined,
            "list" => vec![Value::from(1), Value::Undefined, Value::from(3)],
        }));

        assert_eq!(
            prepared.to_value(),
            Some(Value::from(object! { "list" => vec![1, 3] }))
        );
        assert_eq!(OverrideNode::Remove.to_value(), None);
    }

    #[test]
    fn test_dispatch_distinguishes_absent_from_undefined() {
        let prepared = prepare_overrides(&object! { "present" => Value::Undefined });

        assert_eq!(
            normalize_dispatch(prepared.get("absent")),
            NormalizedOverride::NotApplied
        );
        let present = normalize_dispatch(prepared.get("present"));
        assert!(matches!(present, NormalizedOverride::Applied(_)));
        assert_eq!(present.effective(), None);
        assert!(!present.is_removal());
    }

    #[test]
    fn test_merge_replaces_whole_keys() {
        let base = object! { "nested" => object! { "a" => 1, "b" => 2 }, "keep" => true };
        let extension = object! { "nested" => object! { "a" => 10 } };

        let merged = merge_overrides(&base, &extension);

        assert_eq!(
            merged,
            object! { "nested" => object! { "a" => 10 }, "keep" => true }
        );
        assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["nested", "keep"]);
    }
}
