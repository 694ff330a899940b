//! Explicit conversions into containers.
//!
//! Raw values and errors never turn into containers implicitly; these traits
//! spell the conversion out at the call site while keeping it short.
//!
//! # Examples
//!
//! ```
//! use ddd_rail::{Container, Error, IntoInvalid, IntoValid};
//!
//! let valid: Container<u32> = 7u32.into_valid();
//! let invalid: Container<u32> = Error::new("bad").into_invalid();
//!
//! assert!(valid.is_valid());
//! assert!(invalid.is_invalid());
//! ```
use crate::container::Container;

/// Lifts any value into an implicitly valid container.
///
/// This is how a raw parent enters an assembly chain.
pub trait IntoValid: Sized {
    #[inline]
    fn into_valid<E>(self) -> Container<Self, E> {
        Container::Valid(self)
    }
}

impl<T> IntoValid for T {}

/// Lifts an error into an invalid container of any payload type.
pub trait IntoInvalid: Sized {
    #[inline]
    fn into_invalid<T>(self) -> Container<T, Self> {
        Container::invalid(self)
    }
}

impl<E> IntoInvalid for E {}
