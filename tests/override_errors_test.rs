mod common;

use common::{flight_factory, init_tracing, user_factory};
use objectory::{
    assert_build_err, assert_build_ok, assert_error_code, create_factory, object, tree, ErrorCode,
    FactoryError, OverridePosition, Value,
};
use pretty_assertions::assert_eq;

#[test]
fn test_instance_leaf_is_rejected_with_location() {
    init_tracing();
    let factory = create_factory(|| {
        tree! { "meta" => object! { "cache" => Value::instance("Map", ()) } }
    });

    let err = assert_error_code!(factory.build(), ErrorCode::INVALID_SHAPE_VALUE);

    assert_eq!(
        err,
        FactoryError::InvalidShapeValue {
            path: "meta.cache".parse().unwrap(),
            found: "instance of `Map`".into(),
        }
    );
}

#[test]
fn test_instance_override_is_rejected() {
    let err = assert_build_err!(user_factory().build_with(object! {
        "profile" => object! { "name" => Value::instance("Buffer", vec![0_u8]) },
    }));

    assert_eq!(err.code(), ErrorCode::INVALID_SHAPE_VALUE);
    assert_eq!(err.path().unwrap().to_string(), "profile.name");
}

#[test]
fn test_array_override_for_nested_factory_is_rejected() {
    let err = assert_build_err!(user_factory().build_with(object! { "profile" => vec![1, 2] }));

    assert_eq!(
        err,
        FactoryError::InvalidOverrideShape {
            path: "profile".parse().unwrap(),
            position: OverridePosition::NestedFactory,
            found: "array".into(),
        }
    );
    assert!(err.to_string().contains("expected undefined or an object"));
}

#[test]
fn test_leaf_override_for_nested_factory_is_rejected() {
    let err = assert_error_code!(
        user_factory().build_with(object! { "profile" => "Alice" }),
        ErrorCode::INVALID_OVERRIDE_SHAPE
    );

    assert!(err.to_string().contains("found string"));
}

#[test]
fn test_object_override_for_array_factory_is_rejected() {
    let err = assert_build_err!(
        flight_factory(1).build_with(object! { "passengers" => object! { "name" => "Jane" } })
    );

    assert_eq!(
        err,
        FactoryError::InvalidOverrideShape {
            path: "passengers".parse().unwrap(),
            position: OverridePosition::ArrayFactory,
            found: "object".into(),
        }
    );
}

#[test]
fn test_leaf_element_for_array_factory_is_rejected_with_index() {
    let err = assert_build_err!(
        flight_factory(0).build_with(object! { "passengers" => vec![Value::from("Jane")] })
    );

    assert_eq!(
        err,
        FactoryError::InvalidOverrideShape {
            path: "passengers.0".parse().unwrap(),
            position: OverridePosition::ArrayFactoryElement,
            found: "string".into(),
        }
    );
}

#[test]
fn test_non_array_override_for_template_array_keeps_defaults() {
    let factory = create_factory(|| tree! { "values" => vec![1, 2, 3] });

    for raw in [Value::Null, Value::from(5), Value::from(object! { "first" => 9 })] {
        let built = assert_build_ok!(factory.build_with(object! { "values" => raw }));

        assert_eq!(built["values"], Value::from(vec![1, 2, 3]));
    }
}

#[test]
fn test_errors_deep_inside_nested_factories_carry_full_path() {
    let flight = flight_factory(1);
    let booking = create_factory(move || tree! { "flight" => flight.clone() });

    let err = assert_build_err!(booking.build_with(object! {
        "flight" => object! { "passengers" => vec![object! { "seat" => Value::instance("Seat", ()) }] },
    }));

    assert_eq!(err.path().unwrap().to_string(), "flight.passengers.0.seat");
}
