use std::cell::Cell;

use ddd_rail::{Container, Eager, Error, IntoInvalid, IntoValid, Lazy, Supplier};

#[test]
fn into_valid_and_into_invalid_lift_explicitly() {
    let valid: Container<u32> = 7u32.into_valid();
    assert_eq!(valid.into_value(), Some(7));

    let invalid: Container<u32> = Error::new("bad").into_invalid();
    assert_eq!(invalid.into_errors().unwrap().first().message(), "bad");
}

#[test]
fn suppliers_produce_their_value() {
    assert_eq!(Eager("now").supply(), "now");

    let computed = Cell::new(false);
    let lazy = Lazy(|| {
        computed.set(true);
        42
    });
    assert!(!computed.get());
    assert_eq!(lazy.supply(), 42);
    assert!(computed.get());
}
