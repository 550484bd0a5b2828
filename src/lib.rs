//! Declarative test fixture factories.
//!
//! A [`Factory`] wraps a generator closure that returns a default
//! [`GeneratedTree`]. Each build merges that tree with optional, partial,
//! deeply nested overrides:
//!
//! ```rust
//! use objectory::{create_factory, object, tree, Value};
//!
//! let profile = create_factory(|| tree! { "name" => "Alice", "age" => 30 });
//! let user = create_factory(move || tree! {
//!     "id" => 1,
//!     "profile" => profile.clone(),
//! });
//!
//! let built = user.build_with(object! { "profile" => object! { "age" => 31 } }).unwrap();
//! assert_eq!(built["profile"], Value::from(object! { "name" => "Alice", "age" => 31 }));
//! ```

// Export modules for library usage
pub mod engine;
pub mod errors;
pub mod factory;
pub mod options;
pub mod overrides;
pub mod path;
pub mod shape;
pub mod template;
pub mod testkit;
pub mod value;

// Re-export commonly used types
pub use crate::errors::{ErrorCode, FactoryError, OverridePosition};
pub use crate::factory::{create_factory, Factory};
pub use crate::options::ListOptions;
pub use crate::overrides::{
    merge_overrides, normalize_dispatch, prepare_override, prepare_overrides, NormalizedOverride,
    OverrideNode, PreparedOverrides,
};
pub use crate::path::{normalize_path, remove_at_path, replace_at_path, Path, PathSegment};
pub use crate::shape::{assert_allowed_value, is_allowed_override_value, is_allowed_value};
pub use crate::template::{ArrayFactory, GeneratedTree, Template};
pub use crate::value::{FunctionValue, Instance, Object, Overrides, Symbol, Value};

pub use crate::engine::{apply_overrides, materialize, Materialized};

/// Result alias used throughout the crate.
pub type Result<T, E = FactoryError> = std::result::Result<T, E>;
