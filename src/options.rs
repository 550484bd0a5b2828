//! Options accepted by list-producing factory operations.
//!
//! Options deserialize with every field defaulted, so they can be embedded
//! in a test harness's own configuration:
//!
//! ```toml
//! [fixtures.passengers]
//! length = 3
//! ```

use serde::{Deserialize, Serialize};

/// Element count for `build_list` and `as_array`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListOptions {
    /// Number of elements to build (default: 0)
    #[serde(default)]
    pub length: usize,
}

impl ListOptions {
    pub fn with_length(length: usize) -> Self {
        Self { length }
    }
}

impl From<usize> for ListOptions {
    fn from(length: usize) -> Self {
        Self::with_length(length)
    }
}
