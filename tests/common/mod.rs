// Test utility module for objectory integration tests
#![allow(dead_code)]

use objectory::{create_factory, tree, Factory, ListOptions};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Route engine logs to the test writer; filter with `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// `{ name: "Alice", age: 30 }`
pub fn profile_factory() -> Factory {
    create_factory(|| tree! { "name" => "Alice", "age" => 30 })
}

/// `{ id: 1, profile: <profile_factory> }`
pub fn user_factory() -> Factory {
    let profile = profile_factory();
    create_factory(move || tree! { "id" => 1, "profile" => profile.clone() })
}

/// `{ flight: "LH 400", passengers: <passenger factory x length> }`
pub fn flight_factory(length: usize) -> Factory {
    let passenger = create_factory(|| tree! { "name" => "John Doe", "seat" => "1A" });
    create_factory(move || {
        tree! {
            "flight" => "LH 400",
            "passengers" => passenger.as_array(ListOptions::with_length(length)),
        }
    })
}
