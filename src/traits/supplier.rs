//! Ways of supplying the extra argument of a parameterized step.
//!
//! A supplier is only asked for its value when the container it is attached
//! to is valid, so [`Lazy`] arguments are never computed for invalid input.
//!
//! # Examples
//!
//! ```
//! use ddd_rail::{Eager, Lazy, Supplier};
//!
//! assert_eq!(Eager(3).supply(), 3);
//! assert_eq!(Lazy(|| 2 + 2).supply(), 4);
//! ```

/// Produces one argument value, at most once.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot supply an argument of type `{P}`",
    label = "wrap the value in `Eager(..)` or the closure in `Lazy(..)`"
)]
pub trait Supplier<P> {
    fn supply(self) -> P;
}

/// An argument that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eager<P>(pub P);

/// An argument computed on demand by a zero-argument closure.
#[derive(Debug, Clone, Copy)]
pub struct Lazy<F>(pub F);

impl<P> Supplier<P> for Eager<P> {
    #[inline]
    fn supply(self) -> P {
        self.0
    }
}

impl<P, F> Supplier<P> for Lazy<F>
where
    F: FnOnce() -> P,
{
    #[inline]
    fn supply(self) -> P {
        (self.0)()
    }
}
