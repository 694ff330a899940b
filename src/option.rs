//! The optional-value half of the algebra.
//!
//! Presence and absence are carried by [`core::option::Option`]; absence is not
//! failure, so nothing here produces errors. [`OptionExt`] adds the vocabulary
//! the rest of the crate uses and the bridge into containers.
//!
//! # Examples
//!
//! ```
//! use ddd_rail::{Container, OptionExt};
//!
//! let described = Some(3).fold(|| "empty".to_string(), |v| v.to_string());
//! assert_eq!(described, "3");
//!
//! let bridged = Some(Container::<i32, &str>::valid(2)).traverse(|v| v * 10);
//! assert_eq!(bridged.into_value(), Some(Some(20)));
//! ```

use crate::container::{traverse_option_with, Container};

pub trait OptionExt<T>: Sized {
    /// Eliminates the option: `on_none` or `on_some`, never both.
    fn fold<R, N, S>(self, on_none: N, on_some: S) -> R
    where
        N: FnOnce() -> R,
        S: FnOnce(T) -> R;

    /// Chains a step that may itself be absent; `None` stays `None`.
    fn bind<R, F>(self, f: F) -> Option<R>
    where
        F: FnOnce(T) -> Option<R>;

    /// Keeps a present value, otherwise asks `f` for an alternative option.
    fn or_else_with<F>(self, f: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>;

    /// Bridges an optional container into a container of an option.
    ///
    /// `None` becomes `Valid(None)`, a valid container becomes
    /// `Valid(Some(f(v)))`, an invalid one keeps its errors.
    fn traverse<V, R, E, F>(self, f: F) -> Container<Option<R>, E>
    where
        Self: Into<Option<Container<V, E>>>,
        F: FnOnce(V) -> R,
    {
        traverse_option_with(self.into(), f)
    }
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn fold<R, N, S>(self, on_none: N, on_some: S) -> R
    where
        N: FnOnce() -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    #[inline]
    fn bind<R, F>(self, f: F) -> Option<R>
    where
        F: FnOnce(T) -> Option<R>,
    {
        self.and_then(f)
    }

    #[inline]
    fn or_else_with<F>(self, f: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        self.or_else(f)
    }
}
