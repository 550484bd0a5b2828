//! Array positions: array factories and template arrays.
//!
//! An array factory expands to `max(declared, overridden)` built elements,
//! so overrides can replace and extend elements but never shorten the
//! list. A template array follows its override array element by element;
//! the override array decides the length. Any override that is not an
//! array leaves the template array at its defaults.

use super::{Materialized, UNDEFINED_TEMPLATE};
use crate::errors::{FactoryError, OverridePosition};
use crate::overrides::{NormalizedOverride, OverrideNode, PreparedOverrides};
use crate::path::PathSegment;
use crate::template::{ArrayFactory, Template};
use crate::value::Value;
use im::Vector;
use tracing::trace;

/// Per-element resolver used for template arrays.
pub type Resolver = fn(&Template, NormalizedOverride<'_>) -> Result<Materialized, FactoryError>;

/// Expand an array-factory descriptor against its override.
pub fn resolve_array(
    descriptor: &ArrayFactory,
    dispatch: NormalizedOverride<'_>,
) -> Result<Materialized, FactoryError> {
    if dispatch.is_removal() {
        return Ok(Materialized::Removed);
    }

    let items: &[OverrideNode] = match dispatch.effective() {
        None => &[],
        Some(OverrideNode::Array(items)) => items,
        Some(other) => {
            return Err(FactoryError::invalid_override(
                OverridePosition::ArrayFactory,
                other.kind_name(),
            ))
        }
    };

    let length = descriptor.length.max(items.len());
    trace!(
        declared = descriptor.length,
        overridden = items.len(),
        length,
        "expanding array factory"
    );

    let defaults = PreparedOverrides::new();
    let elements = (0..length)
        .map(|index| {
            let built = match items.get(index) {
                None | Some(OverrideNode::Remove) | Some(OverrideNode::Value(Value::Undefined)) => {
                    descriptor.factory.build_prepared(&defaults)
                }
                Some(OverrideNode::Object(nested)) => descriptor.factory.build_prepared(nested),
                Some(other) => Err(FactoryError::invalid_override(
                    OverridePosition::ArrayFactoryElement,
                    other.kind_name(),
                )),
            };
            built
                .map(Value::Object)
                .map_err(|e| e.within(PathSegment::Index(index)))
        })
        .collect::<Result<Vector<Value>, _>>()?;

    Ok(Materialized::Value(Value::Array(elements)))
}

/// Merge a template array with its override, element by element.
pub fn merge_template_array(
    template: &[Template],
    dispatch: NormalizedOverride<'_>,
    resolve: Resolver,
) -> Result<Materialized, FactoryError> {
    if dispatch.is_removal() {
        return Ok(Materialized::Removed);
    }

    let resolved = match dispatch.effective() {
        Some(OverrideNode::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let generated = template.get(index).unwrap_or(&UNDEFINED_TEMPLATE);
                resolve(generated, NormalizedOverride::Applied(item))
                    .map_err(|e| e.within(PathSegment::Index(index)))
            })
            .collect::<Result<Vec<_>, _>>()?,
        other => {
            if let Some(ignored) = other {
                trace!(
                    found = ignored.kind_name(),
                    "non-array override left template array at defaults"
                );
            }
            template
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    resolve(item, NormalizedOverride::NotApplied)
                        .map_err(|e| e.within(PathSegment::Index(index)))
                })
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    Ok(Materialized::Value(Value::Array(
        resolved
            .into_iter()
            .filter_map(Materialized::into_value)
            .collect(),
    )))
}
