//! Tokio-backed fan-out.
//!
//! Same contract as [`Container::map_parallel`] and
//! [`Container::and_then_parallel`], except each continuation's future runs
//! on its own Tokio task, so CPU-bound work can use several worker threads.
//!
//! # Feature Flag
//!
//! Requires the `tokio` feature:
//!
//! ```toml
//! [dependencies]
//! ddd-rail = { version = "0.1", features = ["tokio"] }
//! ```

use core::future::Future;

use tokio::task::JoinHandle;

use crate::container::{traverse, Container};
use crate::types::alloc_type::Vec;

/// Awaits every handle in spawn order.
///
/// A task that panicked re-raises its panic here, after the tasks not yet
/// joined have been aborted.
async fn join_spawned<R>(handles: Vec<JoinHandle<R>>) -> Vec<R> {
    let mut results = Vec::with_capacity(handles.len());
    let mut pending = handles.into_iter();
    while let Some(handle) = pending.next() {
        match handle.await {
            Ok(result) => results.push(result),
            Err(err) => {
                pending.by_ref().for_each(|rest| rest.abort());
                if err.is_panic() {
                    std::panic::resume_unwind(err.into_panic());
                }
                panic!("parallel continuation did not complete: {err}");
            },
        }
    }
    results
}

impl<T, E> Container<T, E>
where
    T: Clone,
{
    /// Like [`map_parallel`](Self::map_parallel), one Tokio task per continuation.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Panics
    ///
    /// Re-raises the panic of any continuation task.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::Container;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let steps = [1, 2, 3].map(|k| move |p: i32| async move { p + k });
    /// let sum = Container::<i32, &str>::valid(5)
    ///     .map_parallel_spawned(steps, |values| values.into_iter().sum::<i32>())
    ///     .await;
    /// assert_eq!(sum.into_value(), Some(21));
    /// # }
    /// ```
    pub async fn map_parallel_spawned<R, U, I, F, Fut, G>(
        self,
        continuations: I,
        combine: G,
    ) -> Container<U, E>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R> + Send + 'static,
        R: Send + 'static,
        G: FnOnce(Vec<R>) -> U,
    {
        let value = match self {
            Self::Valid(value) => value,
            Self::Invalid(errors) => return Container::Invalid(errors),
        };

        let handles: Vec<JoinHandle<R>> =
            continuations.into_iter().map(|f| tokio::spawn(f(value.clone()))).collect();
        #[cfg(feature = "tracing")]
        tracing::trace!(fan_out = handles.len(), "map_parallel_spawned started");

        Container::Valid(combine(join_spawned(handles).await))
    }

    /// Like [`and_then_parallel`](Self::and_then_parallel), one Tokio task per
    /// continuation.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Panics
    ///
    /// Re-raises the panic of any continuation task.
    pub async fn and_then_parallel_spawned<R, U, I, F, Fut, G>(
        self,
        continuations: I,
        combine: G,
    ) -> Container<U, E>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Container<R, E>> + Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        G: FnOnce(Vec<R>) -> U,
    {
        let value = match self {
            Self::Valid(value) => value,
            Self::Invalid(errors) => return Container::Invalid(errors),
        };

        let handles: Vec<JoinHandle<Container<R, E>>> =
            continuations.into_iter().map(|f| tokio::spawn(f(value.clone()))).collect();
        #[cfg(feature = "tracing")]
        tracing::trace!(fan_out = handles.len(), "and_then_parallel_spawned started");

        traverse(join_spawned(handles).await).map(combine)
    }
}
