use std::cell::Cell;

use ddd_rail::{Container, ContractViolation, Eager, Entity, Error, Lazy, ValueObject};

#[test]
fn valid_and_invalid_helpers_behave_as_expected() {
    let valid = Container::<i32, &str>::valid(5);
    assert!(valid.is_valid());
    assert_eq!(valid.value(), Some(&5));
    assert_eq!(valid.into_value(), Some(5));

    let invalid = Container::<i32, &str>::invalid("missing");
    assert!(invalid.is_invalid());
    assert_eq!(invalid.value(), None);
    let errors = invalid.into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0], "missing");
}

#[test]
fn try_valid_rejects_absent_payload() {
    let present = Container::<i32, &str>::try_valid(Some(1)).unwrap();
    assert_eq!(present.into_value(), Some(1));

    let absent = Container::<i32, &str>::try_valid(None);
    assert_eq!(absent.unwrap_err(), ContractViolation::AbsentPayload);
}

#[test]
#[should_panic]
fn valid_present_panics_on_absent_payload() {
    let _ = Container::<i32, &str>::valid_present(None);
}

#[test]
fn try_invalid_many_rejects_empty_error_list() {
    let empty = Container::<i32, &str>::try_invalid_many(Vec::new());
    assert_eq!(empty.unwrap_err(), ContractViolation::EmptyErrors);

    let two = Container::<i32, &str>::try_invalid_many(["a", "b"]).unwrap();
    assert_eq!(two.iter_errors().count(), 2);
}

#[test]
#[should_panic]
fn invalid_many_panics_on_empty_error_list() {
    let _ = Container::<i32, &str>::invalid_many(Vec::<&str>::new());
}

#[test]
fn and_then_short_circuits_without_calling_the_step() {
    let calls = Cell::new(0);
    let step = |x: i32| {
        calls.set(calls.get() + 1);
        Container::<i32, &str>::valid(x + 1)
    };

    let invalid = Container::<i32, &str>::invalid("e").and_then(step);
    assert_eq!(calls.get(), 0);
    assert_eq!(invalid.into_errors().unwrap().as_slice(), &["e"]);

    let valid = Container::<i32, &str>::valid(1).and_then(step);
    assert_eq!(calls.get(), 1);
    assert_eq!(valid.into_value(), Some(2));
}

#[test]
fn map_on_invalid_keeps_errors_untouched() {
    let invalid = Container::<i32, &str>::invalid_many(["a", "b"]);
    let mapped = invalid.clone().map(|x| x.to_string());
    assert_eq!(mapped.into_errors(), invalid.into_errors());
}

#[test]
fn and_then_with_only_supplies_for_valid_containers() {
    let supplied = Cell::new(false);
    let lazy = Lazy(|| {
        supplied.set(true);
        10
    });

    let invalid = Container::<i32, &str>::invalid("e").and_then_with(lazy, |x, y| Container::valid(x + y));
    assert!(invalid.is_invalid());
    assert!(!supplied.get());

    let sum = Container::<i32, &str>::valid(1).and_then_with(Eager(2), |x, y| Container::valid(x + y));
    assert_eq!(sum.into_value(), Some(3));
}

#[test]
fn fold_round_trips_both_states() {
    let valid = Container::<i32, &str>::valid(7);
    let back = valid.clone().fold(Container::from_errors, Container::valid);
    assert_eq!(back, valid);

    let invalid = Container::<i32, &str>::invalid_many(["x", "y"]);
    let back = invalid.clone().fold(Container::from_errors, Container::valid);
    assert_eq!(back, invalid);
}

#[test]
fn inspect_runs_only_on_valid_payload() {
    let seen = Cell::new(0);
    let valid = Container::<i32, &str>::valid(4).inspect(|v| seen.set(*v));
    assert_eq!(seen.get(), 4);
    assert_eq!(valid.into_value(), Some(4));

    let invalid = Container::<i32, &str>::invalid("e").inspect(|_| seen.set(-1));
    assert_eq!(seen.get(), 4);
    assert!(invalid.is_invalid());
}

#[test]
fn zip_accumulates_both_sides_in_order() {
    let left = Container::<i32, &str>::invalid("left");
    let right = Container::<&str, &str>::invalid_many(["r1", "r2"]);
    let zipped = left.zip(right);
    assert_eq!(zipped.into_errors().unwrap().as_slice(), &["left", "r1", "r2"]);

    let both = Container::<i32, &str>::valid(1).zip(Container::valid("a"));
    assert_eq!(both.into_value(), Some((1, "a")));
}

#[test]
fn map_err_transforms_all_errors() {
    let container: Container<i32, &str> = Container::invalid_many(["a", "b"]);
    let mapped = container.map_err(|e| format!("ERR:{e}"));

    let errors: Vec<_> = mapped.into_errors().unwrap().into_iter().collect();
    assert_eq!(errors, vec!["ERR:a".to_string(), "ERR:b".to_string()]);
}

#[test]
fn or_else_recovers_only_invalid_containers() {
    let valid = Container::<i32, &str>::valid(42).or_else(|_| Container::valid(0));
    assert_eq!(valid.into_value(), Some(42));

    let recovered = Container::<i32, &str>::invalid("e").or_else(|errors| Container::valid(errors.len() as i32));
    assert_eq!(recovered.into_value(), Some(1));
}

#[test]
fn to_result_preserves_all_errors() {
    let container: Container<i32, &str> = Container::invalid_many(["first", "second"]);
    assert_eq!(container.to_result().unwrap_err().len(), 2);

    let ok = Container::from_result(Ok::<_, &str>(42));
    assert_eq!(ok.to_result(), Ok(42));
}

#[test]
fn aliases_demote_without_touching_state() {
    let entity: Entity<u32> = Container::invalid(Error::new("bad"));
    let value_object: ValueObject<u32> = entity.clone().into_value_object();
    assert_eq!(value_object.into_entity(), entity);
}

#[test]
fn as_ref_borrows_payload() {
    let owned = Container::<String, &str>::valid("cart".to_string());
    let borrowed = owned.as_ref().map(|s| s.len());
    assert_eq!(borrowed.into_value(), Some(4));
    assert!(owned.is_valid());
}
