//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use ddd_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Container`], [`Entity`], [`ValueObject`], [`Error`], [`Errors`]
//! - **Traits**: [`IntoValid`], [`IntoInvalid`], [`OptionExt`], [`Supplier`]
//! - **Suppliers**: [`Eager`], [`Lazy`]
//! - **Traversal**: [`traverse`], [`traverse_map`], [`traverse_option`] and their `_with` forms
//!
//! # Examples
//!
//! ```
//! use ddd_rail::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct Customer {
//!     name: String,
//!     age: u8,
//! }
//!
//! fn name(raw: &str) -> ValueObject<String> {
//!     if raw.is_empty() { Error::new("name is empty").into_invalid() } else { raw.to_string().into_valid() }
//! }
//!
//! fn age(raw: u8) -> ValueObject<u8> {
//!     if raw >= 18 { raw.into_valid() } else { Error::with_code("too young", "age").into_invalid() }
//! }
//!
//! let customer: Entity<Customer> = Customer::default()
//!     .into_valid()
//!     .set_child(Some(name("")), |c, name| Customer { name, ..c })
//!     .set_child(Some(age(12)), |c, age| Customer { age, ..c });
//!
//! let report = customer.fold(
//!     |errors| errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "),
//!     |c| c.name,
//! );
//! assert_eq!(report, "[age] too young; name is empty");
//! ```

pub use crate::container::{
    traverse, traverse_map, traverse_map_with, traverse_option, traverse_option_with,
    traverse_with, Container, Entity, ValueObject,
};
pub use crate::option::OptionExt;
pub use crate::traits::{Eager, IntoInvalid, IntoValid, Lazy, Supplier};
pub use crate::types::{Error, Errors};
