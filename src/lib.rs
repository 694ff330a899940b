//! Validation-accumulating containers for assembling domain aggregates.
//!
//! A [`Container<T, E>`] holds either one valid payload or a non-empty list of
//! errors. Aggregates are assembled field by field from independently
//! validated parts, and every failure met along the way is kept, in order,
//! instead of stopping at the first one. The crate never decides what makes a
//! value invalid; it only decides how invalidity propagates and combines.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! depend on `ddd_rail::*` or on [`prelude`].
//!
//! # Examples
//!
//! ## Assembling an aggregate
//!
//! ```
//! use ddd_rail::{Container, Error, IntoValid};
//!
//! #[derive(Debug, Default)]
//! struct Order {
//!     quantity: u32,
//!     lines: Vec<String>,
//! }
//!
//! fn line(raw: &str) -> Container<String> {
//!     if raw.is_empty() {
//!         Container::invalid(Error::with_code("empty line", "line"))
//!     } else {
//!         Container::valid(raw.to_string())
//!     }
//! }
//!
//! let order = Order::default()
//!     .into_valid()
//!     .set(Some(3), |o, quantity| Order { quantity, ..o })
//!     .set_all(["a", "", "b", ""].map(line), |o, lines| Order { lines, ..o });
//!
//! assert_eq!(order.into_errors().map(|e| e.len()), Some(2));
//! ```
//!
//! ## Collecting with accumulation
//!
//! ```
//! use ddd_rail::Container;
//!
//! let parts = vec![Container::<i32, &str>::valid(1), Container::invalid("e1"), Container::invalid("e2")];
//! let all: Container<Vec<i32>, &str> = parts.into_iter().collect();
//!
//! assert_eq!(all.into_errors().unwrap().as_slice(), &["e1", "e2"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// The container type, traversal and assembly setters
pub mod container;
/// Conversions between `Result` and containers
pub mod convert;
/// Extension methods on `Option`
pub mod option;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Explicit lifting and argument-supply traits
pub mod traits;
/// Error record, error list and contract violations
pub mod types;

/// Async extensions for containers (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use container::{
    sequence_into, traverse, traverse_map, traverse_map_with, traverse_option,
    traverse_option_with, traverse_with, Container, Entity, ValueObject,
};
pub use option::OptionExt;
pub use traits::*;
pub use types::{ContractViolation, Error, ErrorVec, Errors};
