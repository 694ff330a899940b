//! Traits that connect plain values to the container algebra.
//!
//! - [`IntoValid`] / [`IntoInvalid`]: explicit value and error lifting
//! - [`Supplier`]: eager or lazy argument supply for parameterized steps
//!
//! # Examples
//!
//! ```
//! use ddd_rail::traits::{Eager, IntoValid};
//! use ddd_rail::Container;
//!
//! let c: Container<i32, &str> = 1i32.into_valid();
//! let sum = c.and_then_with(Eager(2), |a, b| Container::valid(a + b));
//! assert_eq!(sum.into_value(), Some(3));
//! ```

pub mod into_container;
pub mod supplier;

pub use into_container::{IntoInvalid, IntoValid};
pub use supplier::{Eager, Lazy, Supplier};
