//! Fixture factories.
//!
//! A [`Factory`] pairs a generator closure with a set of default overrides
//! captured when the factory was derived. Factories are immutable:
//! [`Factory::with_overrides`] and [`Factory::extend`] return new handles
//! and leave the original untouched. Handles are cheap to clone and can be
//! embedded in other generators, either as a nested object or, through
//! [`Factory::as_array`], as a list of built elements.
//!
//! # Example
//!
//! ```rust
//! use objectory::{create_factory, object, tree, ListOptions, Value};
//!
//! let passenger = create_factory(|| tree! { "name" => "John Doe" });
//! let flight = create_factory(move || tree! {
//!     "number" => "LH 400",
//!     "passengers" => passenger.as_array(ListOptions::default()),
//! });
//!
//! assert_eq!(flight.build().unwrap()["passengers"], Value::from(Vec::<Value>::new()));
//!
//! let booked = flight
//!     .build_with(object! { "passengers" => vec![object! { "name" => "Jane Doe" }] })
//!     .unwrap();
//! assert_eq!(booked["passengers"][0]["name"], Value::from("Jane Doe"));
//! ```

use crate::engine::apply_overrides;
use crate::errors::FactoryError;
use crate::options::ListOptions;
use crate::overrides::{merge_overrides, prepare_overrides, PreparedOverrides};
use crate::path::{normalize_path, remove_at_path, replace_at_path};
use crate::template::{ArrayFactory, GeneratedTree};
use crate::value::{Object, Overrides, Value};
use serde::de::DeserializeOwned;
use std::any::type_name;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

type Generator = dyn Fn() -> GeneratedTree + Send + Sync;

/// Reusable fixture template.
#[derive(Clone)]
pub struct Factory {
    generator: Arc<Generator>,
    defaults: Arc<Overrides>,
}

/// Create a factory from a generator with no default overrides.
pub fn create_factory<G>(generator: G) -> Factory
where
    G: Fn() -> GeneratedTree + Send + Sync + 'static,
{
    Factory::new(generator)
}

impl Factory {
    pub fn new<G>(generator: G) -> Self
    where
        G: Fn() -> GeneratedTree + Send + Sync + 'static,
    {
        Self {
            generator: Arc::new(generator),
            defaults: Arc::new(Overrides::new()),
        }
    }

    /// Default overrides applied before every build's own overrides.
    pub fn defaults(&self) -> &Overrides {
        &self.defaults
    }

    /// Build with the factory's defaults only.
    pub fn build(&self) -> Result<Object, FactoryError> {
        self.build_with(Overrides::new())
    }

    /// Build with `overrides` layered over the factory's defaults.
    pub fn build_with(&self, overrides: Overrides) -> Result<Object, FactoryError> {
        let merged = merge_overrides(&*self.defaults, &overrides);
        self.materialize(&prepare_overrides(&merged))
            .inspect_err(|e| debug!(code = %e.code(), error = %e, "fixture build failed"))
    }

    /// Build and deserialize the result into `T`.
    pub fn build_as<T: DeserializeOwned>(&self, overrides: Overrides) -> Result<T, FactoryError> {
        let built = Value::Object(self.build_with(overrides)?);
        let json = built
            .to_json()
            .map_err(|e| FactoryError::conversion(type_name::<T>(), e.to_string()))?;
        serde_json::from_value(json)
            .map_err(|e| FactoryError::conversion(type_name::<T>(), e.to_string()))
    }

    /// Build `options.length` fixtures from the defaults.
    pub fn build_list(&self, options: ListOptions) -> Result<Vec<Object>, FactoryError> {
        (0..options.length).map(|_| self.build()).collect()
    }

    /// Descriptor for embedding this factory as a list inside another tree.
    pub fn as_array(&self, options: ListOptions) -> ArrayFactory {
        ArrayFactory::new(self.clone(), options.length)
    }

    /// New factory whose defaults are the current defaults with `overrides`
    /// replacing whole top-level keys.
    #[must_use]
    pub fn with_overrides(&self, overrides: Overrides) -> Factory {
        let defaults = merge_overrides(&*self.defaults, &overrides);
        debug!(
            keys = ?defaults.keys().collect::<Vec<_>>(),
            "derived factory with default overrides"
        );
        Self {
            generator: Arc::clone(&self.generator),
            defaults: Arc::new(defaults),
        }
    }

    /// New factory whose generated tree is this factory's tree with the
    /// extension's keys added, or replacing existing keys in place.
    ///
    /// The extended factory keeps this factory's default overrides.
    #[must_use]
    pub fn extend<G>(&self, extension: G) -> Factory
    where
        G: Fn() -> GeneratedTree + Send + Sync + 'static,
    {
        let base = Arc::clone(&self.generator);
        debug!("extended factory generator");
        Self {
            generator: Arc::new(move || {
                let mut tree = base();
                tree.extend(extension());
                tree
            }),
            defaults: Arc::clone(&self.defaults),
        }
    }

    /// Build with defaults, then remove the value at the dotted `path`.
    ///
    /// A path that does not exist leaves the built fixture unchanged.
    pub fn build_invalid_without(&self, path: &str) -> Result<Value, FactoryError> {
        let built = Value::Object(self.build()?);
        Ok(remove_at_path(&built, &normalize_path(path)).into_owned())
    }

    /// Build with defaults, then put `replacement` at the dotted `path`.
    ///
    /// The replacement skips shape validation; the point is an invalid fixture.
    pub fn build_invalid_with_changed(
        &self,
        path: &str,
        replacement: impl Into<Value>,
    ) -> Result<Value, FactoryError> {
        let built = Value::Object(self.build()?);
        Ok(replace_at_path(&built, &normalize_path(path), replacement.into()).into_owned())
    }

    /// Build for a nested position; `overrides` are already normalized.
    pub(crate) fn build_prepared(
        &self,
        overrides: &PreparedOverrides,
    ) -> Result<Object, FactoryError> {
        let defaults = prepare_overrides(&self.defaults);
        self.materialize(&merge_overrides(&defaults, overrides))
    }

    fn materialize(&self, overrides: &PreparedOverrides) -> Result<Object, FactoryError> {
        let generated = (self.generator)();
        apply_overrides(&generated, overrides)
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}
