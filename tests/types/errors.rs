use ddd_rail::{ContractViolation, Container, Errors};

#[test]
fn errors_are_never_empty() {
    assert_eq!(Errors::<&str>::try_from_iter(Vec::new()).unwrap_err(), ContractViolation::EmptyErrors);
    assert_eq!(Errors::<&str>::try_from(Vec::new()).unwrap_err(), ContractViolation::EmptyErrors);

    let one = Errors::new("only");
    assert_eq!(one.len(), 1);
    assert_eq!(*one.first(), "only");
}

#[test]
#[should_panic]
fn from_iter_nonempty_panics_on_empty_input() {
    let _ = Errors::<&str>::from_iter_nonempty(std::iter::empty());
}

#[test]
fn append_and_concat_keep_insertion_order() {
    let mut errors = Errors::new("a");
    errors.push("b");
    errors.extend(["c", "d"]);
    let errors = errors.concat(Errors::from_iter_nonempty(["e"]));

    assert_eq!(errors.as_slice(), &["a", "b", "c", "d", "e"]);
    assert_eq!(errors[4], "e");
}

#[test]
fn map_preserves_order_and_length() {
    let errors = Errors::from_iter_nonempty([1, 2, 3]).map(|n| n * 10);
    assert_eq!(errors.into_vec(), vec![10, 20, 30]);
}

#[test]
fn single_error_stays_inline() {
    let errors = Errors::new("inline");
    assert!(!errors.into_inner().spilled());
}

#[test]
fn iteration_by_reference_and_by_value() {
    let errors = Errors::from_iter_nonempty(["x", "y"]);
    let borrowed: Vec<_> = (&errors).into_iter().copied().collect();
    let owned: Vec<_> = errors.into_iter().collect();
    assert_eq!(borrowed, owned);
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trips_containers_and_rejects_empty_errors() {
    use ddd_rail::Error;

    let invalid: Container<u32> = Container::invalid_many([Error::with_code("too large", "amount"), Error::new("x")]);
    let json = serde_json::to_string(&invalid).unwrap();
    let back: Container<u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, invalid);

    let valid: Container<u32> = Container::valid(7);
    let back: Container<u32> = serde_json::from_str(&serde_json::to_string(&valid).unwrap()).unwrap();
    assert_eq!(back, valid);

    assert!(serde_json::from_str::<Errors<Error>>("[]").is_err());
}

#[test]
fn container_errors_expose_the_sequence() {
    let invalid = Container::<(), &str>::invalid_many(["a", "b"]);
    assert_eq!(invalid.errors().map(Errors::len), Some(2));
}
