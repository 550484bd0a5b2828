mod common;

use common::{init_tracing, user_factory};
use objectory::{create_factory, object, tree, Value};
use pretty_assertions::assert_eq;

#[test]
fn test_build_invalid_without_removes_top_level_property() {
    init_tracing();
    let factory = create_factory(|| tree! { "foo" => "value", "bar" => 42 });

    let actual = factory.build_invalid_without("bar").unwrap();

    assert_eq!(actual, Value::from(object! { "foo" => "value" }));
}

#[test]
fn test_build_invalid_without_removes_nested_property_using_dotted_path() {
    let factory = create_factory(|| {
        tree! {
            "outer" => create_factory(|| {
                tree! {
                    "inner" => create_factory(|| tree! { "leaf" => "remove-me", "keep" => "stay" }),
                }
            }),
        }
    });

    let actual = factory.build_invalid_without("outer.inner.leaf").unwrap();

    assert_eq!(
        actual,
        Value::from(object! { "outer" => object! { "inner" => object! { "keep" => "stay" } } })
    );
}

#[test]
fn test_build_invalid_without_removes_array_element() {
    let factory = create_factory(|| tree! { "items" => vec![-1, 0, 1] });

    let actual = factory.build_invalid_without("items.1").unwrap();

    assert_eq!(actual, Value::from(object! { "items" => vec![-1, 1] }));
}

#[test]
fn test_build_invalid_without_missing_path_is_noop() {
    let factory = user_factory();

    let actual = factory.build_invalid_without("profile.email").unwrap();

    assert_eq!(actual, Value::from(factory.build().unwrap()));
}

#[test]
fn test_build_invalid_with_changed_updates_nested_object_properties() {
    let factory = create_factory(|| {
        tree! { "profile" => create_factory(|| tree! { "name" => "Alice", "age" => 30 }) }
    });

    let actual = factory
        .build_invalid_with_changed("profile.age", "not-a-number")
        .unwrap();

    assert_eq!(
        actual,
        Value::from(object! { "profile" => object! { "name" => "Alice", "age" => "not-a-number" } })
    );
}

#[test]
fn test_build_invalid_with_changed_accepts_array_path_segments() {
    let factory = create_factory(|| tree! { "values" => vec![-1, 0, 1] });

    let actual = factory
        .build_invalid_with_changed("values.1", "not-a-number")
        .unwrap();

    assert_eq!(
        actual,
        Value::from(object! {
            "values" => vec![Value::from(-1), "not-a-number".into(), 1.into()],
        })
    );
}

#[test]
fn test_build_invalid_with_changed_leaves_original_defaults_untouched() {
    let factory = create_factory(|| tree! { "flag" => false });

    let modified = factory.build_invalid_with_changed("flag", 0).unwrap();
    let original = factory.build().unwrap();

    assert_eq!(modified, Value::from(object! { "flag" => 0 }));
    assert_eq!(original, object! { "flag" => false });
}

#[test]
fn test_build_invalid_with_changed_skips_shape_validation() {
    let factory = create_factory(|| tree! { "pattern" => "^a+$" });

    let actual = factory
        .build_invalid_with_changed("pattern", Value::instance("RegExp", ()))
        .unwrap();

    assert_eq!(actual["pattern"].kind_name(), "instance");
}

#[test]
fn test_invalid_helpers_propagate_build_errors() {
    let factory = create_factory(|| tree! { "pattern" => Value::instance("RegExp", ()) });

    assert!(factory.build_invalid_without("pattern").is_err());
    assert!(factory.build_invalid_with_changed("pattern", "x").is_err());
}
