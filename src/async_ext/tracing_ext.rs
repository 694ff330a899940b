//! Tracing integration for containers.
//!
//! Records the outcome of a container, valid or invalid with its error count,
//! as a `debug` event. Nothing about the payload or the errors themselves is
//! logged unless the error type is `Debug` and the caller asks for it through
//! [`ContainerTraceExt::trace_errors`].
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! ddd-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Debug;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::container::Container;

fn record_outcome<T, E>(container: &Container<T, E>, label: &str) {
    match container.errors() {
        None => tracing::debug!(label, valid = true, "container resolved"),
        Some(errors) => tracing::debug!(label, valid = false, errors = errors.len(), "container resolved"),
    }
}

/// Logs container outcomes without changing them.
///
/// # Example
///
/// ```rust
/// use ddd_rail::async_ext::ContainerTraceExt;
/// use ddd_rail::Container;
///
/// let amount = Container::<u32, &str>::invalid("negative").trace_outcome("amount");
/// assert!(amount.is_invalid());
/// ```
pub trait ContainerTraceExt<T, E>: Sized {
    /// Emits one `debug` event with the outcome and returns the container.
    fn trace_outcome(self, label: &str) -> Self;

    /// Emits one `warn` event per error, in order, and returns the container.
    fn trace_errors(self, label: &str) -> Self
    where
        E: Debug;
}

impl<T, E> ContainerTraceExt<T, E> for Container<T, E> {
    fn trace_outcome(self, label: &str) -> Self {
        record_outcome(&self, label);
        self
    }

    fn trace_errors(self, label: &str) -> Self
    where
        E: Debug,
    {
        for (index, error) in self.iter_errors().enumerate() {
            tracing::warn!(label, index, error = ?error, "invalid container");
        }
        self
    }
}

/// Extension trait wrapping a pending container in a span.
pub trait FutureTraceExt<T, E>: Future<Output = Container<T, E>> + Sized {
    /// Polls inside the current span and logs the outcome on completion.
    fn traced(self, label: &'static str) -> TracedContainerFuture<Self> {
        TracedContainerFuture { inner: self, span: Span::current(), label }
    }

    /// Polls inside `span` and logs the outcome on completion.
    fn traced_in(self, span: Span, label: &'static str) -> TracedContainerFuture<Self> {
        TracedContainerFuture { inner: self, span, label }
    }
}

impl<F, T, E> FutureTraceExt<T, E> for F where F: Future<Output = Container<T, E>> {}

pin_project! {
    /// Future wrapper that enters a span while polling and records the
    /// resolved container's outcome.
    ///
    /// Created by [`FutureTraceExt::traced`] or [`FutureTraceExt::traced_in`].
    #[must_use = "futures do nothing unless polled"]
    pub struct TracedContainerFuture<F> {
        #[pin]
        inner: F,
        span: Span,
        label: &'static str,
    }
}

impl<F, T, E> Future for TracedContainerFuture<F>
where
    F: Future<Output = Container<T, E>>,
{
    type Output = Container<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let _entered = this.span.enter();

        match this.inner.poll(cx) {
            Poll::Ready(container) => {
                record_outcome(&container, *this.label);
                Poll::Ready(container)
            },
            Poll::Pending => Poll::Pending,
        }
    }
}
