//! Future wrapper mapping the payload of a pending container.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::container::Container;

pin_project! {
    /// Maps the payload of a pending container once it resolves.
    ///
    /// The mapping function runs at most once, and only when the inner future
    /// resolves to a valid container.
    ///
    /// # Cancel Safety
    ///
    /// `MapValid` is cancel-safe if the inner future is cancel-safe.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddd_rail::async_ext::ContainerFutureExt;
    /// use ddd_rail::Container;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let mapped = async { Container::<i32, &str>::valid(20) }.map_valid(|x| x + 1).await;
    /// assert_eq!(mapped.into_value(), Some(21));
    /// # }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct MapValid<Fut, F> {
        #[pin]
        future: Fut,
        f: Option<F>,
    }
}

impl<Fut, F> MapValid<Fut, F> {
    #[inline]
    pub(crate) fn new(future: Fut, f: F) -> Self {
        Self { future, f: Some(f) }
    }
}

impl<Fut, F, T, R, E> Future for MapValid<Fut, F>
where
    Fut: Future<Output = Container<T, E>>,
    F: FnOnce(T) -> R,
{
    type Output = Container<R, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.future.poll(cx) {
            Poll::Ready(container) => match this.f.take() {
                Some(f) => Poll::Ready(container.map(f)),
                None => panic!("MapValid polled after completion"),
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<Fut, F, T, R, E> FusedFuture for MapValid<Fut, F>
where
    Fut: Future<Output = Container<T, E>>,
    F: FnOnce(T) -> R,
{
    fn is_terminated(&self) -> bool {
        self.f.is_none()
    }
}
