//! Asynchronous counterparts of the core combinators.
//!
//! Every method here has the same short-circuit rule as its synchronous
//! sibling: on an invalid container nothing is called and the errors are
//! forwarded unchanged.

use core::future::Future;

use crate::container::Container;

use super::continuation::{AsyncSupplier, Continuation};

impl<T, E> Container<T, E> {
    /// Runs a continuation of any of the four kinds on the payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::async_ext::AwaitableFallible;
    /// use ddd_rail::Container;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let checked = Container::<u32, &str>::valid(3)
    ///     .then(AwaitableFallible(|x: u32| async move {
    ///         if x % 2 == 1 { Container::valid(x) } else { Container::invalid("even") }
    ///     }))
    ///     .await;
    /// assert_eq!(checked.into_value(), Some(3));
    /// # }
    /// ```
    pub async fn then<R, C>(self, continuation: C) -> Container<R, E>
    where
        C: Continuation<T, R, E>,
    {
        match self {
            Self::Valid(value) => continuation.run(value).await,
            Self::Invalid(errors) => Container::Invalid(errors),
        }
    }

    /// Runs a continuation on the payload paired with a supplied argument.
    ///
    /// The argument is only produced, and only awaited, for a valid container.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::async_ext::{Deferred, Pure};
    /// use ddd_rail::Container;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let total = Container::<u32, &str>::valid(40)
    ///     .then_with(Deferred(|| async { 2 }), Pure(|(x, y): (u32, u32)| x + y))
    ///     .await;
    /// assert_eq!(total.into_value(), Some(42));
    /// # }
    /// ```
    pub async fn then_with<P, R, S, C>(self, arg: S, continuation: C) -> Container<R, E>
    where
        S: AsyncSupplier<P>,
        C: Continuation<(T, P), R, E>,
    {
        match self {
            Self::Valid(value) => {
                let arg = arg.supply_async().await;
                continuation.run((value, arg)).await
            },
            Self::Invalid(errors) => Container::Invalid(errors),
        }
    }

    /// Maps the payload with an asynchronous function.
    pub async fn map_async<R, F, Fut>(self, f: F) -> Container<R, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        match self {
            Self::Valid(value) => Container::Valid(f(value).await),
            Self::Invalid(errors) => Container::Invalid(errors),
        }
    }

    /// Chains an asynchronous step that may itself fail.
    pub async fn and_then_async<R, F, Fut>(self, f: F) -> Container<R, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Container<R, E>>,
    {
        match self {
            Self::Valid(value) => f(value).await,
            Self::Invalid(errors) => Container::Invalid(errors),
        }
    }

    /// Awaits a side effect on the payload and returns the container unchanged.
    ///
    /// The future produced by `f` cannot borrow the payload; clone what it needs.
    pub async fn tap_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Valid(value) = &self {
            f(value).await;
        }
        self
    }

    /// Hands a valid payload to `save` together with `context`.
    ///
    /// The saved result becomes the new payload. `save` is never called for an
    /// invalid container, and the context is dropped unused.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::{Arc, Mutex};
    /// use ddd_rail::Container;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let store = Arc::new(Mutex::new(Vec::new()));
    /// let save = |store: Arc<Mutex<Vec<String>>>, name: String| async move {
    ///     let mut rows = store.lock().unwrap();
    ///     rows.push(name);
    ///     rows.len()
    /// };
    ///
    /// let saved = Container::<String, &str>::valid("cart".to_string()).persist(save, store.clone()).await;
    /// assert_eq!(saved.into_value(), Some(1));
    ///
    /// let skipped = Container::<String, &str>::invalid("no name").persist(save, store.clone()).await;
    /// assert!(skipped.is_invalid());
    /// assert_eq!(store.lock().unwrap().len(), 1);
    /// # }
    /// ```
    pub async fn persist<C, R, F, Fut>(self, save: F, context: C) -> Container<R, E>
    where
        F: FnOnce(C, T) -> Fut,
        Fut: Future<Output = R>,
    {
        match self {
            Self::Valid(value) => Container::Valid(save(context, value).await),
            Self::Invalid(errors) => Container::Invalid(errors),
        }
    }
}
