//! Dynamic values that make up built fixtures and override trees.
//!
//! [`Value`] is a closed set of shapes. Everything except [`Instance`] is a
//! recognized fixture shape; instances stand in for opaque non-plain objects
//! a generator might produce and are rejected by the shape validator.
//!
//! Arrays are persistent [`im::Vector`]s so copy-on-write edits share
//! structure with the value they were derived from. Objects keep insertion
//! order.

mod macros;
mod serialize;

use chrono::{DateTime, Utc};
use im::Vector;
use indexmap::IndexMap;
use std::any::Any;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// Insertion-ordered plain object.
pub type Object = IndexMap<String, Value>;

/// Raw override tree supplied by a caller, mirroring the generated tree.
pub type Overrides = Object;

static UNDEFINED: Value = Value::Undefined;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(Symbol),
    Function(FunctionValue),
    Date(DateTime<Utc>),
    Array(Vector<Value>),
    Object(Object),
    Instance(Instance),
}

impl Value {
    /// Short name of the value's shape, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::BigInt(_) => "bigint",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Function(_) => "function",
            Self::Date(_) => "date",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Instance(_) => "instance",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vector<Value>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Object entry lookup; `None` for missing keys and non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|entries| entries.get(key))
    }

    pub fn bigint(value: i128) -> Self {
        Self::BigInt(value)
    }

    pub fn date(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }

    pub fn symbol(description: impl Into<String>) -> Self {
        Self::Symbol(Symbol::new(Some(description.into())))
    }

    pub fn function<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self::Function(FunctionValue::new(function))
    }

    pub fn instance<T>(class_name: &str, payload: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self::Instance(Instance::new(class_name, payload))
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Missing keys read as `undefined`.
    fn index(&self, key: &str) -> &Self::Output {
        self.get(key).unwrap_or(&UNDEFINED)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        self.as_array()
            .and_then(|items| items.get(index))
            .unwrap_or(&UNDEFINED)
    }
}

/// Unique, identity-compared marker value.
#[derive(Clone)]
pub struct Symbol(Arc<Option<String>>);

impl Symbol {
    pub fn new(description: Option<String>) -> Self {
        Self(Arc::new(description))
    }

    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}

type Callable = dyn Fn(&[Value]) -> Value + Send + Sync;

/// Shared callable stored as a fixture value; compared by identity.
#[derive(Clone)]
pub struct FunctionValue(Arc<Callable>);

impl FunctionValue {
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(function))
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Function]")
    }
}

/// Opaque non-plain object, e.g. a class instance other than a date.
#[derive(Clone)]
pub struct Instance {
    class_name: Arc<str>,
    payload: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    pub fn new<T>(class_name: &str, payload: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            class_name: Arc::from(class_name),
            payload: Arc::new(payload),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.payload, &other.payload)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.class_name)
    }
}

// Numbers are `f64`, so 64-bit integers beyond 2^53 lose precision here.
// Use `i128` (or `Value::bigint`) to keep large integers exact.
macro_rules! impl_from_number {
    ($($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Self::Number(value as f64)
                }
            }
        )+
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Self::BigInt(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl From<FunctionValue> for Value {
    fn from(value: FunctionValue) -> Self {
        Self::Function(value)
    }
}

impl From<Instance> for Value {
    fn from(value: Instance) -> Self {
        Self::Instance(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<Vector<Value>> for Value {
    fn from(value: Vector<Value>) -> Self {
        Self::Array(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}
