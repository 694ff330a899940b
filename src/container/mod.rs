//! The validation container and everything that operates on it.
//!
//! [`Container`] holds either one valid payload or a non-empty list of errors.
//! On top of it this module provides:
//!
//! - the core combinators (`map`, `and_then`, `fold`, `inspect`, ...)
//! - structural traversal ([`traverse`], [`traverse_map`], [`traverse_option`])
//! - composite-assembly setters (`set`, `set_child`, `set_all`, `set_map`,
//!   `set_optional`, `set_when`, `set_filtered`)
//!
//! # Examples
//!
//! ```
//! use ddd_rail::{Container, Error};
//!
//! let valid: Container<i32> = Container::valid(42);
//! assert!(valid.is_valid());
//!
//! let invalid: Container<i32> =
//!     Container::invalid_many([Error::new("err1"), Error::new("err2")]);
//! assert_eq!(invalid.iter_errors().count(), 2);
//! ```
pub mod core;
pub mod iter;
pub mod setters;
pub mod traverse;

pub(crate) mod installer;

pub use self::core::*;
pub use self::iter::*;
pub use self::traverse::*;
