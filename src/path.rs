//! Dotted paths into built fixtures, and copy-on-write edits at those paths.
//!
//! Paths are written as ASCII dot-separated segments. A segment made only
//! of digits addresses an array index; any other segment addresses an
//! object key (`"profile.age"`, `"values.1"`).
//!
//! [`remove_at_path`] and [`replace_at_path`] never mutate their input and
//! never fail: a path that does not resolve leaves the value as it was.
//! Containers on the walked path come back as fresh copies, everything
//! else is borrowed.

use crate::value::Value;
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use tracing::debug;

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl PathSegment {
    fn parse(segment: &str) -> Self {
        let numeric = !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit());
        match segment.parse::<usize>() {
            Ok(index) if numeric => Self::Index(index),
            _ => Self::Key(segment.to_string()),
        }
    }

    /// Object key this segment addresses; indices address their decimal text.
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            Self::Index(index) => Cow::Owned(index.to_string()),
            Self::Key(key) => Cow::Borrowed(key),
        }
    }

    /// Array index this segment addresses, if any.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Key(_) => None,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

/// Ordered sequence of segments from a root value to a nested node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<PathSegment>);

impl Path {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Copy of this path with `segment` placed in front.
    #[must_use]
    pub fn prefixed(mut self, segment: PathSegment) -> Self {
        self.0.insert(0, segment);
        self
    }

    /// Human-readable location used in error messages.
    pub fn describe(&self) -> String {
        if self.0.is_empty() {
            "<root>".to_string()
        } else {
            format!("`{self}`")
        }
    }
}

impl Deref for Path {
    type Target = [PathSegment];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(normalize_path(text))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Split a dotted path into its segments.
pub fn normalize_path(text: &str) -> Path {
    text.split('.').map(PathSegment::parse).collect()
}

/// Terminal action applied once the walk reaches the last segment.
#[derive(Clone, Copy)]
enum Edit<'v> {
    Remove,
    Replace(&'v Value),
}

/// Remove the value addressed by `path`, returning the edited copy.
///
/// Missing targets are a silent no-op.
pub fn remove_at_path<'a>(tree: &'a Value, path: &[PathSegment]) -> Cow<'a, Value> {
    edit_at_path(tree, path, Edit::Remove)
}

/// Replace the value addressed by `path` with `replacement`.
///
/// Walks exactly like [`remove_at_path`]; the replacement is not validated.
pub fn replace_at_path<'a>(
    tree: &'a Value,
    path: &[PathSegment],
    replacement: Value,
) -> Cow<'a, Value> {
    edit_at_path(tree, path, Edit::Replace(&replacement))
}

fn edit_at_path<'a>(tree: &'a Value, path: &[PathSegment], edit: Edit<'_>) -> Cow<'a, Value> {
    let Some((head, tail)) = path.split_first() else {
        return Cow::Borrowed(tree);
    };

    match tree {
        Value::Array(items) => {
            let Some(index) = head.as_index().filter(|index| *index < items.len()) else {
                debug!(segment = %head, "path segment does not address an array element");
                return Cow::Owned(tree.clone());
            };

            let mut copy = items.clone();
            match (tail.is_empty(), edit) {
                (true, Edit::Remove) => {
                    copy.remove(index);
                }
                (true, Edit::Replace(replacement)) => {
                    copy[index] = replacement.clone();
                }
                (false, _) => {
                    copy[index] = edit_at_path(&items[index], tail, edit).into_owned();
                }
            }
            Cow::Owned(Value::Array(copy))
        }
        Value::Object(entries) => {
            let key = head.as_key();
            let mut copy = entries.clone();

            let Some(current) = entries.get(key.as_ref()) else {
                debug!(segment = %head, "path segment does not address an object key");
                return Cow::Owned(Value::Object(copy));
            };

            match (tail.is_empty(), edit) {
                (true, Edit::Remove) => {
                    copy.shift_remove(key.as_ref());
                }
                (true, Edit::Replace(replacement)) => {
                    copy.insert(key.into_owned(), replacement.clone());
                }
                (false, _) => {
                    if let Cow::Owned(updated) = edit_at_path(current, tail, edit) {
                        copy.insert(key.into_owned(), updated);
                    }
                }
            }
            Cow::Owned(Value::Object(copy))
        }
        _ => {
            debug!(segment = %head, "path descends into a non-container value");
            Cow::Borrowed(tree)
        }
    }
}
