/// Build an [`Object`](crate::value::Object) (also usable as overrides).
///
/// ```rust
/// use objectory::{object, Value};
///
/// let overrides = object! { "name" => "Jane", "tags" => vec!["a", "b"] };
/// assert_eq!(overrides["name"], Value::from("Jane"));
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::value::Object::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut entries = $crate::value::Object::new();
        $(
            entries.insert(::std::string::String::from($key), $crate::value::Value::from($value));
        )+
        entries
    }};
}

/// Build a [`GeneratedTree`](crate::template::GeneratedTree) for a generator.
///
/// Values may be anything convertible into a [`Template`](crate::template::Template):
/// leaves, factories, array factories, or template arrays.
#[macro_export]
macro_rules! tree {
    () => {
        $crate::template::GeneratedTree::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut entries = $crate::template::GeneratedTree::new();
        $(
            entries.insert(::std::string::String::from($key), $crate::template::Template::from($value));
        )+
        entries
    }};
}
