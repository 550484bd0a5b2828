//! Generated value trees returned by factory generators.

use crate::factory::Factory;
use crate::value::{Object, Value};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Default tree produced by one generator invocation.
pub type GeneratedTree = IndexMap<String, Template>;

/// One position in a generated tree.
///
/// A `Leaf` holding a [`Value::Array`] is treated as a template array, the
/// same as [`Template::Array`].
#[derive(Debug, Clone)]
pub enum Template {
    Leaf(Value),
    Factory(Factory),
    ArrayFactory(ArrayFactory),
    Array(Vec<Template>),
}

impl Template {
    pub fn leaf(value: impl Into<Value>) -> Self {
        Self::Leaf(value.into())
    }

    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Template>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

/// A nested factory expanded into a list of built elements.
///
/// The factory handle is shared with its origin, never copied.
#[derive(Debug, Clone)]
pub struct ArrayFactory {
    pub factory: Factory,
    pub length: usize,
}

impl ArrayFactory {
    pub fn new(factory: Factory, length: usize) -> Self {
        Self { factory, length }
    }
}

impl From<Factory> for Template {
    fn from(factory: Factory) -> Self {
        Self::Factory(factory)
    }
}

impl From<&Factory> for Template {
    fn from(factory: &Factory) -> Self {
        Self::Factory(factory.clone())
    }
}

impl From<ArrayFactory> for Template {
    fn from(array_factory: ArrayFactory) -> Self {
        Self::ArrayFactory(array_factory)
    }
}

impl From<Vec<Template>> for Template {
    fn from(items: Vec<Template>) -> Self {
        Self::Array(items)
    }
}

macro_rules! impl_leaf_from {
    ($($source:ty),+) => {
        $(
            impl From<$source> for Template {
                fn from(value: $source) -> Self {
                    Self::Leaf(Value::from(value))
                }
            }
        )+
    };
}

impl_leaf_from!(
    Value,
    Object,
    bool,
    &str,
    String,
    i32,
    i64,
    u32,
    u64,
    usize,
    f64,
    i128,
    DateTime<Utc>,
    Vec<Value>,
    Vec<i32>,
    Vec<f64>,
    Vec<&str>,
    Vec<String>
);
