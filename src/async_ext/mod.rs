//! Async extensions for containers.
//!
//! Asynchronous steps follow the same short-circuit and harvesting rules as
//! the synchronous combinators. Everything here is runtime-neutral plain
//! `Future`s; only [`tokio_ext`] needs a Tokio runtime.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! ddd-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use ddd_rail::prelude_async::*;
//!
//! async fn price_of(sku: &'static str) -> Container<u32, &'static str> {
//!     match sku {
//!         "apple" => Container::valid(3),
//!         _ => Container::invalid("unknown sku"),
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let total = price_of("apple")
//!     .and_then_valid(|p| Container::valid(p * 2))
//!     .then_continue(Awaitable(|p: u32| async move { p + 1 }))
//!     .await;
//! assert_eq!(total.into_value(), Some(7));
//! # }
//! ```

mod container;
mod continuation;
mod future_ext;
mod map_future;
mod parallel;

#[cfg(feature = "tokio")]
pub mod tokio_ext;

#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use continuation::{
    AsyncSupplier, Awaitable, AwaitableFallible, Continuation, Deferred, Fallible, Pure,
};
pub use future_ext::ContainerFutureExt;
pub use map_future::MapValid;

#[cfg(feature = "tracing")]
pub use tracing_ext::{ContainerTraceExt, FutureTraceExt, TracedContainerFuture};
