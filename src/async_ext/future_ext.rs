//! Extension trait for `Future<Output = Container<T, E>>`.
//!
//! Lets a pending container be chained without awaiting it first, mirroring
//! the methods available on a resolved [`Container`].

use core::future::Future;

use crate::container::Container;
use crate::types::alloc_type::Vec;

use super::continuation::{AsyncSupplier, Continuation};
use super::map_future::MapValid;

/// Chaining methods for futures that resolve to a container.
///
/// Each method awaits the receiver first and then behaves like the method of
/// the same meaning on [`Container`].
///
/// # Examples
///
/// ```
/// use ddd_rail::async_ext::{ContainerFutureExt, Pure};
/// use ddd_rail::Container;
///
/// async fn load(id: u32) -> Container<u32, &'static str> {
///     if id > 0 { Container::valid(id) } else { Container::invalid("unknown id") }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let label = load(7)
///     .map_valid(|id| id * 10)
///     .then_continue(Pure(|id: u32| format!("cart-{id}")))
///     .await;
/// assert_eq!(label.into_value().as_deref(), Some("cart-70"));
///
/// assert!(load(0).and_then_valid(|id| Container::valid(id + 1)).await.is_invalid());
/// # }
/// ```
pub trait ContainerFutureExt<T, E>: Future<Output = Container<T, E>> + Sized {
    /// Maps the payload once the container resolves.
    fn map_valid<R, F>(self, f: F) -> MapValid<Self, F>
    where
        F: FnOnce(T) -> R,
    {
        MapValid::new(self, f)
    }

    /// Chains a synchronous fallible step once the container resolves.
    fn and_then_valid<R, F>(self, f: F) -> impl Future<Output = Container<R, E>>
    where
        F: FnOnce(T) -> Container<R, E>,
    {
        async move { self.await.and_then(f) }
    }

    /// See [`Container::then`].
    fn then_continue<R, C>(self, continuation: C) -> impl Future<Output = Container<R, E>>
    where
        C: Continuation<T, R, E>,
    {
        async move { self.await.then(continuation).await }
    }

    /// See [`Container::then_with`].
    fn then_continue_with<P, R, S, C>(
        self,
        arg: S,
        continuation: C,
    ) -> impl Future<Output = Container<R, E>>
    where
        S: AsyncSupplier<P>,
        C: Continuation<(T, P), R, E>,
    {
        async move { self.await.then_with(arg, continuation).await }
    }

    /// See [`Container::persist`].
    fn persist<C, R, F, Fut>(self, save: F, context: C) -> impl Future<Output = Container<R, E>>
    where
        F: FnOnce(C, T) -> Fut,
        Fut: Future<Output = R>,
    {
        async move { self.await.persist(save, context).await }
    }

    /// See [`Container::map_parallel`].
    fn map_parallel<R, U, I, F, Fut, G>(
        self,
        continuations: I,
        combine: G,
    ) -> impl Future<Output = Container<U, E>>
    where
        T: Clone,
        I: IntoIterator<Item = F>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
        G: FnOnce(Vec<R>) -> U,
    {
        async move { self.await.map_parallel(continuations, combine).await }
    }

    /// See [`Container::and_then_parallel`].
    fn and_then_parallel<R, U, I, F, Fut, G>(
        self,
        continuations: I,
        combine: G,
    ) -> impl Future<Output = Container<U, E>>
    where
        T: Clone,
        I: IntoIterator<Item = F>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Container<R, E>>,
        G: FnOnce(Vec<R>) -> U,
    {
        async move { self.await.and_then_parallel(continuations, combine).await }
    }
}

impl<Fut, T, E> ContainerFutureExt<T, E> for Fut where Fut: Future<Output = Container<T, E>> {}
