use ddd_rail::Container;

#[test]
fn valid_container_iterates_its_payload_once() {
    let valid = Container::<i32, &str>::valid(3);
    assert_eq!(valid.iter().collect::<Vec<_>>(), vec![&3]);
    assert_eq!(valid.iter_errors().count(), 0);
    assert_eq!(valid.into_iter().collect::<Vec<_>>(), vec![3]);
}

#[test]
fn invalid_container_iterates_errors_in_insertion_order() {
    let invalid: Container<i32, &str> = Container::invalid_many(["x", "y"]);
    assert_eq!((&invalid).into_iter().count(), 0);

    let collected: Vec<_> = invalid.iter_errors().cloned().collect();
    assert_eq!(collected, vec!["x", "y"]);
}
