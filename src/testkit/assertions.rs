//! Assertion macros for fixture builds.
//!
//! - [`crate::assert_build_ok!`] - Assert a build succeeded and extract the fixture
//! - [`crate::assert_build_err!`] - Assert a build failed and extract the error
//! - [`crate::assert_error_code!`] - Assert a build failed with a given [`ErrorCode`](crate::ErrorCode)
//!
//! # Example
//!
//! ```rust
//! use objectory::{assert_build_err, assert_error_code, create_factory, tree};
//! use objectory::{ErrorCode, Value};
//!
//! let factory = create_factory(|| tree! { "pattern" => Value::instance("RegExp", ()) });
//!
//! let err = assert_build_err!(factory.build());
//! assert_eq!(err.path().unwrap().to_string(), "pattern");
//!
//! assert_error_code!(factory.build(), ErrorCode::INVALID_SHAPE_VALUE);
//! ```

/// Assert that a build result is Ok and extract the fixture.
///
/// If the result is Err, panics with the error and its location.
#[macro_export]
macro_rules! assert_build_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!(
                "Expected fixture, got error: {}\n  at {}:{}:{}",
                e,
                file!(),
                line!(),
                column!()
            ),
        }
    };
    ($result:expr, $($msg:tt)+) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!(
                "{}: Expected fixture, got error: {}\n  at {}:{}:{}",
                format!($($msg)+),
                e,
                file!(),
                line!(),
                column!()
            ),
        }
    };
}

/// Assert that a build result is Err and extract the error.
///
/// If the result is Ok, panics with the fixture that was built.
#[macro_export]
macro_rules! assert_build_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!(
                "Expected build error, got fixture: {:?}\n  at {}:{}:{}",
                value,
                file!(),
                line!(),
                column!()
            ),
            Err(e) => e,
        }
    };
    ($result:expr, $($msg:tt)+) => {
        match $result {
            Ok(value) => panic!(
                "{}: Expected build error, got fixture: {:?}\n  at {}:{}:{}",
                format!($($msg)+),
                value,
                file!(),
                line!(),
                column!()
            ),
            Err(e) => e,
        }
    };
}

/// Assert that a build failed with a specific error code.
#[macro_export]
macro_rules! assert_error_code {
    ($result:expr, $code:expr) => {{
        let err = $crate::assert_build_err!($result);
        let code = err.code();
        if code != $code {
            panic!(
                "Expected error code {}, got {}: {}\n  at {}:{}:{}",
                $code,
                code,
                err,
                file!(),
                line!(),
                column!()
            );
        }
        err
    }};
}
