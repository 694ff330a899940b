//! Fan-out of several asynchronous steps over one payload, then join.
//!
//! Each continuation gets its own clone of the payload. All of them are polled
//! concurrently on the current task with [`join_all`]; results are handed to
//! `combine` in submission order, whatever order they finished in. There is no
//! early exit: every continuation runs to completion.

use core::future::Future;

use futures::future::join_all;

use crate::container::{traverse, Container};
use crate::types::alloc_type::Vec;

impl<T, E> Container<T, E>
where
    T: Clone,
{
    /// Runs every continuation on a clone of the payload and combines the
    /// results.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::Container;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let steps = [1, 2, 3].map(|k| move |p: i32| async move { p + k });
    /// let sum = Container::<i32, &str>::valid(5)
    ///     .map_parallel(steps, |values| values.into_iter().sum::<i32>())
    ///     .await;
    /// assert_eq!(sum.into_value(), Some(21));
    /// # }
    /// ```
    pub async fn map_parallel<R, U, I, F, Fut, G>(self, continuations: I, combine: G) -> Container<U, E>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
        G: FnOnce(Vec<R>) -> U,
    {
        let value = match self {
            Self::Valid(value) => value,
            Self::Invalid(errors) => return Container::Invalid(errors),
        };

        let pending: Vec<Fut> = continuations.into_iter().map(|f| f(value.clone())).collect();
        #[cfg(feature = "tracing")]
        tracing::trace!(fan_out = pending.len(), "map_parallel started");

        Container::Valid(combine(join_all(pending).await))
    }

    /// Runs every fallible continuation on a clone of the payload.
    ///
    /// If any continuation returns an invalid container, the result carries
    /// the errors of every invalid one in submission order and `combine` is
    /// not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::Container;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let steps = ["ok", "e1", "e2"].map(|tag| move |p: i32| async move {
    ///     if tag == "ok" { Container::valid(p) } else { Container::invalid(tag) }
    /// });
    /// let joined = Container::<i32, &str>::valid(5)
    ///     .and_then_parallel(steps, |values| values.into_iter().sum::<i32>())
    ///     .await;
    /// assert_eq!(joined.into_errors().unwrap().as_slice(), &["e1", "e2"]);
    /// # }
    /// ```
    pub async fn and_then_parallel<R, U, I, F, Fut, G>(
        self,
        continuations: I,
        combine: G,
    ) -> Container<U, E>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Container<R, E>>,
        G: FnOnce(Vec<R>) -> U,
    {
        let value = match self {
            Self::Valid(value) => value,
            Self::Invalid(errors) => return Container::Invalid(errors),
        };

        let pending: Vec<Fut> = continuations.into_iter().map(|f| f(value.clone())).collect();
        #[cfg(feature = "tracing")]
        tracing::trace!(fan_out = pending.len(), "and_then_parallel started");

        let joined = traverse(join_all(pending).await);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            harvested = joined.errors().map_or(0, |errors| errors.len()),
            "and_then_parallel joined"
        );

        joined.map(combine)
    }
}
