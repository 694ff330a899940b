//! Turning structures of containers into containers of structures.
//!
//! Every function here harvests errors: all invalid inputs contribute their
//! errors, in input order, and valid payloads are dropped as soon as one input
//! is invalid. Nothing short-circuits.

use crate::container::core::Container;
use crate::types::alloc_type::Vec;
use crate::types::Errors;

/// Splits containers into payloads or the concatenation of every error list.
fn harvest<T, E, I>(containers: I) -> Result<Vec<T>, Errors<E>>
where
    I: IntoIterator<Item = Container<T, E>>,
{
    let iter = containers.into_iter();
    // The upper bound of adapters like `take_while` can be far past what they yield.
    let mut values = Vec::with_capacity(iter.size_hint().0);
    let mut harvested: Option<Errors<E>> = None;

    for container in iter {
        match container {
            Container::Valid(value) => {
                if harvested.is_none() {
                    values.push(value);
                }
            },
            Container::Invalid(errors) => match harvested {
                Some(ref mut acc) => acc.append(errors),
                None => harvested = Some(errors),
            },
        }
    }

    match harvested {
        Some(errors) => Err(errors),
        None => Ok(values),
    }
}

/// Converts a sequence of containers into a container of a `Vec`.
///
/// An empty sequence yields `Valid(vec![])`.
///
/// # Examples
///
/// ```
/// use ddd_rail::{traverse, Container};
///
/// let all = traverse(vec![Container::<i32, &str>::valid(1), Container::valid(2)]);
/// assert_eq!(all.into_value(), Some(vec![1, 2]));
///
/// let mixed = traverse(vec![
///     Container::valid(1),
///     Container::invalid("e1"),
///     Container::valid(2),
///     Container::invalid("e2"),
/// ]);
/// assert_eq!(mixed.into_errors().unwrap().as_slice(), &["e1", "e2"]);
/// ```
#[inline]
pub fn traverse<T, E, I>(containers: I) -> Container<Vec<T>, E>
where
    I: IntoIterator<Item = Container<T, E>>,
{
    sequence_into(containers)
}

/// Like [`traverse`], mapping each payload once every input is known valid.
#[inline]
pub fn traverse_with<T, R, E, I, F>(containers: I, f: F) -> Container<Vec<R>, E>
where
    I: IntoIterator<Item = Container<T, E>>,
    F: FnMut(T) -> R,
{
    match harvest(containers) {
        Ok(values) => Container::Valid(values.into_iter().map(f).collect()),
        Err(errors) => Container::Invalid(errors),
    }
}

/// Converts a sequence of containers into a container of any collection.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use ddd_rail::{sequence_into, Container};
///
/// let set: Container<BTreeSet<i32>, &str> =
///     sequence_into([Container::valid(3), Container::valid(1), Container::valid(3)]);
/// assert_eq!(set.into_value().unwrap().len(), 2);
/// ```
#[inline]
pub fn sequence_into<C, T, E, I>(containers: I) -> Container<C, E>
where
    I: IntoIterator<Item = Container<T, E>>,
    C: FromIterator<T>,
{
    match harvest(containers) {
        Ok(values) => Container::Valid(values.into_iter().collect()),
        Err(errors) => Container::Invalid(errors),
    }
}

/// Converts keyed containers into a container of a keyed collection.
///
/// Keys of invalid entries never appear in the output. The output type is any
/// `FromIterator<(K, T)>`: `BTreeMap`, `HashMap`, `Vec<(K, T)>` and so on.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use ddd_rail::{traverse_map, Container};
///
/// let mut entries = BTreeMap::new();
/// entries.insert("a", Container::<i32, &str>::valid(1));
/// entries.insert("b", Container::valid(2));
///
/// let map: Container<BTreeMap<&str, i32>, &str> = traverse_map(entries);
/// assert_eq!(map.into_value().unwrap()["b"], 2);
/// ```
#[inline]
pub fn traverse_map<M, K, T, E, I>(entries: I) -> Container<M, E>
where
    I: IntoIterator<Item = (K, Container<T, E>)>,
    M: FromIterator<(K, T)>,
{
    traverse_map_with(entries, |value| value)
}

/// Like [`traverse_map`], mapping each payload once every entry is valid.
#[inline]
pub fn traverse_map_with<M, K, T, R, E, I, F>(entries: I, mut f: F) -> Container<M, E>
where
    I: IntoIterator<Item = (K, Container<T, E>)>,
    M: FromIterator<(K, R)>,
    F: FnMut(T) -> R,
{
    let keyed = entries.into_iter().map(|(key, container)| container.map(|value| (key, value)));
    match harvest(keyed) {
        Ok(pairs) => Container::Valid(pairs.into_iter().map(|(key, value)| (key, f(value))).collect()),
        Err(errors) => Container::Invalid(errors),
    }
}

/// Pulls an optional container inside out.
///
/// `None` is not a failure: it becomes `Valid(None)`.
///
/// # Examples
///
/// ```
/// use ddd_rail::{traverse_option, Container};
///
/// assert_eq!(traverse_option::<i32, &str>(None), Container::Valid(None));
/// assert_eq!(traverse_option(Some(Container::<_, &str>::valid(1))), Container::Valid(Some(1)));
/// assert!(traverse_option(Some(Container::<i32, _>::invalid("e"))).is_invalid());
/// ```
#[inline]
pub fn traverse_option<T, E>(option: Option<Container<T, E>>) -> Container<Option<T>, E> {
    traverse_option_with(option, |value| value)
}

/// Like [`traverse_option`], mapping a present valid payload with `f`.
#[inline]
pub fn traverse_option_with<T, R, E, F>(option: Option<Container<T, E>>, f: F) -> Container<Option<R>, E>
where
    F: FnOnce(T) -> R,
{
    match option {
        None => Container::Valid(None),
        Some(container) => container.map(|value| Some(f(value))),
    }
}

/// Collecting containers is the same as [`sequence_into`].
///
/// # Examples
///
/// ```
/// use ddd_rail::Container;
///
/// let collected: Container<Vec<i32>, &str> =
///     vec![Container::valid(1), Container::invalid("bad"), Container::invalid("worse")]
///         .into_iter()
///         .collect();
/// assert_eq!(collected.into_errors().unwrap().len(), 2);
/// ```
impl<C, T, E> FromIterator<Container<T, E>> for Container<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Container<T, E>>>(iter: I) -> Self {
        sequence_into(iter)
    }
}
