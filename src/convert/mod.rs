//! Conversion helpers between `Result` and [`Container`].
//!
//! Boundaries rarely speak containers: validators are often written against
//! `Result`, and callers downstream of an aggregate may only want the first
//! error. These adapters make both directions explicit.
//!
//! # Examples
//!
//! ```
//! use ddd_rail::convert::*;
//! use ddd_rail::Container;
//!
//! let container = result_to_container(Ok::<i32, &str>(42));
//! assert!(container.is_valid());
//!
//! let first = container_to_result(Container::<i32, &str>::invalid_many(["a", "b"]));
//! assert_eq!(first, Err("a"));
//! ```

use core::iter::FusedIterator;

use crate::container::{sequence_into, Container};
use crate::types::{ErrorVec, Errors};

/// Converts a container to a `Result`, keeping only the first error.
///
/// Use [`Container::to_result`] to keep all of them.
///
/// # Examples
///
/// ```
/// use ddd_rail::convert::container_to_result;
/// use ddd_rail::Container;
///
/// assert_eq!(container_to_result(Container::<i32, &str>::valid(42)), Ok(42));
/// assert_eq!(container_to_result(Container::<i32, &str>::invalid("error")), Err("error"));
/// ```
#[inline]
pub fn container_to_result<T, E>(container: Container<T, E>) -> Result<T, E> {
    match container {
        Container::Valid(value) => Ok(value),
        Container::Invalid(errors) => {
            let mut errors = errors.into_iter();
            match errors.next() {
                Some(first) => Err(first),
                None => unreachable!("Errors is never empty"),
            }
        },
    }
}

/// Converts a `Result` to a container holding at most one error.
#[inline]
pub fn result_to_container<T, E>(result: Result<T, E>) -> Container<T, E> {
    Container::from_result(result)
}

/// Turns a possibly empty list of errors into a unit container.
///
/// An empty list means nothing went wrong.
///
/// # Examples
///
/// ```
/// use ddd_rail::convert::collect_errors;
///
/// assert!(collect_errors(vec!["error1", "error2"]).is_invalid());
/// assert!(collect_errors(Vec::<&str>::new()).is_valid());
/// ```
#[inline]
pub fn collect_errors<E, I>(errors: I) -> Container<(), E>
where
    I: IntoIterator<Item = E>,
{
    let error_vec: ErrorVec<E> = errors.into_iter().collect();
    match Errors::try_from(error_vec) {
        Ok(errors) => Container::Invalid(errors),
        Err(_) => Container::Valid(()),
    }
}

/// Iterator returned by [`split_errors`].
pub enum SplitErrorsIter<T, E> {
    Valid(Option<T>),
    Invalid(<Errors<E> as IntoIterator>::IntoIter),
}

impl<T, E> Iterator for SplitErrorsIter<T, E> {
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Valid(value) => value.take().map(Ok),
            Self::Invalid(iter) => iter.next().map(Err),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Valid(value) => {
                let len = usize::from(value.is_some());
                (len, Some(len))
            },
            Self::Invalid(iter) => iter.size_hint(),
        }
    }
}

impl<T, E> ExactSizeIterator for SplitErrorsIter<T, E> {}
impl<T, E> FusedIterator for SplitErrorsIter<T, E> {}

/// Splits a container into one `Result` per payload or error.
///
/// # Examples
///
/// ```
/// use ddd_rail::convert::split_errors;
/// use ddd_rail::Container;
///
/// let results: Vec<_> = split_errors(Container::<i32, &str>::invalid_many(["e1", "e2"])).collect();
/// assert_eq!(results, vec![Err("e1"), Err("e2")]);
/// ```
pub fn split_errors<T, E>(container: Container<T, E>) -> SplitErrorsIter<T, E> {
    match container {
        Container::Valid(value) => SplitErrorsIter::Valid(Some(value)),
        Container::Invalid(errors) => SplitErrorsIter::Invalid(errors.into_iter()),
    }
}

impl<T, E> From<Result<T, E>> for Container<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Container::from_result(result)
    }
}

/// Collecting `Result`s accumulates every `Err` instead of stopping at the first.
///
/// # Examples
///
/// ```
/// use ddd_rail::Container;
///
/// let collected: Container<Vec<i32>, &str> = vec![Ok(1), Err("e1"), Err("e2")].into_iter().collect();
/// assert_eq!(collected.into_errors().unwrap().len(), 2);
/// ```
impl<C, T, E> FromIterator<Result<T, E>> for Container<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        sequence_into(iter.into_iter().map(Container::from_result))
    }
}
