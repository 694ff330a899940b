//! The four shapes a continuation can take, and asynchronous argument supply.
//!
//! A step chained after a valid container is either pure or fallible, and
//! either immediate or awaitable. Each shape gets a wrapper type so the
//! caller states which one it means; [`Container::then`](crate::Container::then)
//! accepts all four through the [`Continuation`] trait.
//!
//! # Examples
//!
//! ```
//! use ddd_rail::async_ext::{Awaitable, Fallible, Pure};
//! use ddd_rail::Container;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let doubled = Container::<i32, &str>::valid(4).then(Pure(|x: i32| x * 2)).await;
//! assert_eq!(doubled.into_value(), Some(8));
//!
//! let checked = Container::<i32, &str>::valid(4)
//!     .then(Fallible(|x: i32| if x > 10 { Container::valid(x) } else { Container::invalid("small") }))
//!     .await;
//! assert!(checked.is_invalid());
//!
//! let fetched = Container::<i32, &str>::valid(1)
//!     .then(Awaitable(|x: i32| async move { x + 1 }))
//!     .await;
//! assert_eq!(fetched.into_value(), Some(2));
//! # }
//! ```

use core::future::Future;

use crate::container::Container;
use crate::traits::{Eager, Lazy};

/// A step run on the payload of a valid container.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a continuation from `{T}` to `{R}`",
    label = "wrap the closure in `Pure`, `Fallible`, `Awaitable` or `AwaitableFallible`"
)]
pub trait Continuation<T, R, E> {
    fn run(self, value: T) -> impl Future<Output = Container<R, E>>;
}

/// `T -> R`, cannot fail.
#[derive(Debug, Clone, Copy)]
pub struct Pure<F>(pub F);

/// `T -> Container<R, E>`.
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

/// `T -> Future<R>`, cannot fail.
#[derive(Debug, Clone, Copy)]
pub struct Awaitable<F>(pub F);

/// `T -> Future<Container<R, E>>`.
#[derive(Debug, Clone, Copy)]
pub struct AwaitableFallible<F>(pub F);

impl<T, R, E, F> Continuation<T, R, E> for Pure<F>
where
    F: FnOnce(T) -> R,
{
    #[inline]
    fn run(self, value: T) -> impl Future<Output = Container<R, E>> {
        core::future::ready(Container::Valid((self.0)(value)))
    }
}

impl<T, R, E, F> Continuation<T, R, E> for Fallible<F>
where
    F: FnOnce(T) -> Container<R, E>,
{
    #[inline]
    fn run(self, value: T) -> impl Future<Output = Container<R, E>> {
        core::future::ready((self.0)(value))
    }
}

impl<T, R, E, F, Fut> Continuation<T, R, E> for Awaitable<F>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = R>,
{
    #[inline]
    fn run(self, value: T) -> impl Future<Output = Container<R, E>> {
        let future = (self.0)(value);
        async move { Container::Valid(future.await) }
    }
}

impl<T, R, E, F, Fut> Continuation<T, R, E> for AwaitableFallible<F>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Container<R, E>>,
{
    #[inline]
    fn run(self, value: T) -> impl Future<Output = Container<R, E>> {
        (self.0)(value)
    }
}

/// Supplies an argument that may have to be awaited.
///
/// Implemented by the synchronous [`Eager`] and [`Lazy`] suppliers and by
/// [`Deferred`]. As with [`Supplier`](crate::Supplier), nothing is produced
/// unless the container is valid.
pub trait AsyncSupplier<P> {
    fn supply_async(self) -> impl Future<Output = P>;
}

/// An argument produced by a zero-argument closure returning a future.
#[derive(Debug, Clone, Copy)]
pub struct Deferred<F>(pub F);

impl<P> AsyncSupplier<P> for Eager<P> {
    #[inline]
    fn supply_async(self) -> impl Future<Output = P> {
        core::future::ready(self.0)
    }
}

impl<P, F> AsyncSupplier<P> for Lazy<F>
where
    F: FnOnce() -> P,
{
    #[inline]
    fn supply_async(self) -> impl Future<Output = P> {
        async move { (self.0)() }
    }
}

impl<P, F, Fut> AsyncSupplier<P> for Deferred<F>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = P>,
{
    #[inline]
    fn supply_async(self) -> impl Future<Output = P> {
        (self.0)()
    }
}
