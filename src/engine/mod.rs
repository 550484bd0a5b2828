//! Override materialization.
//!
//! [`materialize`] walks one generated position together with its
//! normalized override and produces the final value, or
//! [`Materialized::Removed`] when the override deletes the position.
//! [`apply_overrides`] drives it over every key of a generated tree and is
//! the only place a removal is consumed, so none ever reaches a caller.

pub mod arrays;

use crate::errors::{FactoryError, OverridePosition};
use crate::overrides::{normalize_dispatch, NormalizedOverride, OverrideNode, PreparedOverrides};
use crate::path::PathSegment;
use crate::shape::assert_allowed_value;
use crate::template::{GeneratedTree, Template};
use crate::value::{Object, Value};
use tracing::trace;

/// Generated position for keys only the override tree mentions.
pub(crate) static UNDEFINED_TEMPLATE: Template = Template::Leaf(Value::Undefined);

/// Outcome of materializing one position.
#[derive(Debug, Clone, PartialEq)]
pub enum Materialized {
    Value(Value),
    /// The position is omitted from the enclosing object or array.
    Removed,
}

impl Materialized {
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Removed => None,
        }
    }
}

/// Resolve one generated position against its override.
pub fn materialize(
    template: &Template,
    dispatch: NormalizedOverride<'_>,
) -> Result<Materialized, FactoryError> {
    match template {
        Template::Factory(factory) => {
            if dispatch.is_removal() {
                return Ok(Materialized::Removed);
            }

            let built = match dispatch.effective() {
                None => factory.build_prepared(&PreparedOverrides::new())?,
                Some(OverrideNode::Object(nested)) => factory.build_prepared(nested)?,
                Some(other) => {
                    return Err(FactoryError::invalid_override(
                        OverridePosition::NestedFactory,
                        other.kind_name(),
                    ))
                }
            };
            Ok(Materialized::Value(Value::Object(built)))
        }
        Template::ArrayFactory(descriptor) => arrays::resolve_array(descriptor, dispatch),
        Template::Array(items) => arrays::merge_template_array(items, dispatch, materialize),
        Template::Leaf(Value::Array(items)) => {
            let items: Vec<Template> = items.iter().cloned().map(Template::Leaf).collect();
            arrays::merge_template_array(&items, dispatch, materialize)
        }
        Template::Leaf(generated) => match dispatch.node() {
            Some(node) => match node.to_value() {
                None => Ok(Materialized::Removed),
                Some(value) => {
                    assert_allowed_value(&value)?;
                    Ok(Materialized::Value(value))
                }
            },
            None => {
                assert_allowed_value(generated)?;
                Ok(Materialized::Value(generated.clone()))
            }
        },
    }
}

/// Merge a generated tree with a normalized override tree.
///
/// Generated keys keep their order; keys only the overrides mention follow
/// in override order. Removed keys are left out.
pub fn apply_overrides(
    generated: &GeneratedTree,
    overrides: &PreparedOverrides,
) -> Result<Object, FactoryError> {
    let override_only = overrides
        .keys()
        .filter(|key| !generated.contains_key(key.as_str()))
        .map(|key| (key, &UNDEFINED_TEMPLATE));

    let mut result = Object::with_capacity(generated.len());
    for (key, template) in generated.iter().chain(override_only) {
        let dispatch = normalize_dispatch(overrides.get(key));
        trace!(key = %key, overridden = dispatch.node().is_some(), "materializing key");

        let materialized =
            materialize(template, dispatch).map_err(|e| e.within(PathSegment::Key(key.clone())))?;
        if let Materialized::Value(value) = materialized {
            result.insert(key.clone(), value);
        }
    }
    Ok(result)
}
