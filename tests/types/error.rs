use std::collections::HashSet;

use ddd_rail::Error;

#[test]
fn display_includes_code_only_when_present() {
    assert_eq!(Error::new("plain").to_string(), "plain");
    assert_eq!(Error::with_code("too large", "amount").to_string(), "[amount] too large");
}

#[test]
fn conversions_from_strings_have_empty_code() {
    let from_str: Error = "bad".into();
    let from_string: Error = String::from("bad").into();
    assert_eq!(from_str, from_string);
    assert_eq!(from_str.code(), "");
}

#[test]
fn equality_and_hashing_are_by_value() {
    let a = Error::with_code("m", "c");
    let b = Error::with_code("m", "c");
    assert_eq!(a, b);

    let set: HashSet<_> = [a, b, Error::with_code("m", "other")].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn ordering_groups_errors_by_code() {
    let mut errors = vec![
        Error::with_code("z", "b"),
        Error::with_code("a", "c"),
        Error::with_code("m", "a"),
    ];
    errors.sort();
    let codes: Vec<_> = errors.iter().map(Error::code).collect();
    assert_eq!(codes, vec!["a", "b", "c"]);
}

#[test]
fn is_matches_code() {
    let err = Error::with_code("missing", "name.missing");
    assert!(err.is("name.missing"));
    assert!(!err.is("name"));
}
