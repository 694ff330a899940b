//! The default error record carried by containers.
//!
//! [`Error`] is deliberately dumb: a human-readable message plus a
//! machine-discriminable code. Containers never look inside it; they only
//! store, concatenate and forward sequences of errors.

use core::fmt::{self, Display};

use crate::types::alloc_type::String;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable validation error with a message and a discriminating code.
///
/// Equality, ordering and hashing are by value, code first so that sorting a
/// list of errors groups them by kind.
///
/// # Examples
///
/// ```
/// use ddd_rail::Error;
///
/// let err = Error::with_code("amount must not exceed 1000", "amount.too_large");
/// assert_eq!(err.message(), "amount must not exceed 1000");
/// assert_eq!(err.code(), "amount.too_large");
/// assert_eq!(err.to_string(), "[amount.too_large] amount must not exceed 1000");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Error {
    code: String,
    message: String,
}

impl Error {
    /// Creates an error with an empty code.
    #[inline]
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self { code: String::new(), message: message.into() }
    }

    /// Creates an error carrying a discriminating code.
    #[inline]
    pub fn with_code<M, C>(message: M, code: C) -> Self
    where
        M: Into<String>,
        C: Into<String>,
    {
        Self { code: code.into(), message: message.into() }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The code, or `""` when the producer supplied none.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns `true` if this error carries `code`.
    #[inline]
    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

impl core::error::Error for Error {}

impl From<&str> for Error {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
