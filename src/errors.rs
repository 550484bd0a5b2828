//! Error types for fixture construction.
//!
//! Building a fixture fails in exactly two ways: a value in the result is
//! not one of the recognized shapes, or an override was supplied for a
//! nested factory or array factory position in a form that position
//! cannot accept. Typed builds add a third, conversion failure.
//!
//! Every error carries the [`Path`] from the fixture root to the node that
//! failed, assembled by the engine as the error propagates outwards.
//!
//! # Error Codes
//!
//! - E001: invalid shape value
//! - E002: invalid override shape
//! - E003: typed conversion failure
//!
//! # Example
//!
//! ```rust
//! use objectory::{ErrorCode, FactoryError, Path, PathSegment};
//!
//! let err = FactoryError::invalid_shape("instance of `Regex`")
//!     .within(PathSegment::Key("pattern".into()));
//!
//! assert_eq!(err.code(), ErrorCode::INVALID_SHAPE_VALUE);
//! assert_eq!(err.path(), Some(&"pattern".parse::<Path>().unwrap()));
//! ```

use crate::path::{Path, PathSegment};
use serde::Serialize;
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// A leaf value is not one of the recognized shapes
    pub const INVALID_SHAPE_VALUE: ErrorCode = ErrorCode("E001");
    /// An override does not fit the position it was supplied for
    pub const INVALID_OVERRIDE_SHAPE: ErrorCode = ErrorCode("E002");
    /// A built fixture could not be converted into a typed value
    pub const CONVERSION: ErrorCode = ErrorCode("E003");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generated-tree position an override was rejected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OverridePosition {
    NestedFactory,
    ArrayFactory,
    ArrayFactoryElement,
}

impl OverridePosition {
    /// What an override at this position has to look like.
    pub fn expected(&self) -> &'static str {
        match self {
            Self::NestedFactory | Self::ArrayFactoryElement => "undefined or an object",
            Self::ArrayFactory => "undefined or an array",
        }
    }
}

impl std::fmt::Display for OverridePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NestedFactory => "nested factory",
            Self::ArrayFactory => "array factory",
            Self::ArrayFactoryElement => "array factory item",
        };
        f.write_str(name)
    }
}

/// Main error type for fixture construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FactoryError {
    /// A generated or overridden value is not a recognized shape
    #[error("invalid value provided for objectory factory at {}: {found}", .path.describe())]
    InvalidShapeValue { path: Path, found: String },

    /// An override does not fit the nested/array position it targets
    #[error(
        "invalid override value provided for {position} at {}: expected {}, found {found}",
        .path.describe(),
        .position.expected()
    )]
    InvalidOverrideShape {
        path: Path,
        position: OverridePosition,
        found: String,
    },

    /// A built fixture could not be deserialized into the requested type
    #[error("cannot convert fixture into `{target}`: {message}")]
    Conversion { target: &'static str, message: String },
}

impl FactoryError {
    /// Create a shape error for the node currently being materialized.
    pub fn invalid_shape(found: impl Into<String>) -> Self {
        Self::InvalidShapeValue {
            path: Path::default(),
            found: found.into(),
        }
    }

    /// Create an override-shape error for the node currently being materialized.
    pub fn invalid_override(position: OverridePosition, found: impl Into<String>) -> Self {
        Self::InvalidOverrideShape {
            path: Path::default(),
            position,
            found: found.into(),
        }
    }

    pub fn conversion(target: &'static str, message: impl Into<String>) -> Self {
        Self::Conversion {
            target,
            message: message.into(),
        }
    }

    /// Prefix the error's location with the segment of the enclosing node.
    #[must_use]
    pub fn within(self, segment: PathSegment) -> Self {
        match self {
            Self::InvalidShapeValue { path, found } => Self::InvalidShapeValue {
                path: path.prefixed(segment),
                found,
            },
            Self::InvalidOverrideShape {
                path,
                position,
                found,
            } => Self::InvalidOverrideShape {
                path: path.prefixed(segment),
                position,
                found,
            },
            other @ Self::Conversion { .. } => other,
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidShapeValue { .. } => ErrorCode::INVALID_SHAPE_VALUE,
            Self::InvalidOverrideShape { .. } => ErrorCode::INVALID_OVERRIDE_SHAPE,
            Self::Conversion { .. } => ErrorCode::CONVERSION,
        }
    }

    /// Location of the failing node, relative to the fixture root.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::InvalidShapeValue { path, .. } | Self::InvalidOverrideShape { path, .. } => {
                Some(path)
            }
            Self::Conversion { .. } => None,
        }
    }

    /// Every variant points at a mistake in a generator or override tree.
    pub fn is_user_fixable(&self) -> bool {
        true
    }
}
