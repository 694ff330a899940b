//! Error-side building blocks shared by every container.
//!
//! # Examples
//!
//! ```
//! use ddd_rail::{ContractViolation, Error, Errors};
//!
//! let errors = Errors::new(Error::with_code("name is required", "name.missing"));
//! assert_eq!(errors.first().code(), "name.missing");
//!
//! let empty: Result<Errors<Error>, _> = Errors::try_from_iter(Vec::new());
//! assert_eq!(empty.unwrap_err(), ContractViolation::EmptyErrors);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod contract;
pub mod error;
pub mod errors;

pub use contract::*;
pub use error::*;
pub use errors::*;

/// SmallVec-backed storage used for accumulating errors.
///
/// Uses inline storage for one element so that the overwhelmingly common
/// single-error container does not allocate.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
