//! Async prelude: the sync [`prelude`](crate::prelude) plus the async extensions.
//!
//! # Usage
//!
//! ```
//! use ddd_rail::prelude_async::*;
//!
//! async fn load_quantity() -> Container<u32> {
//!     Container::valid(2)
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let doubled = load_quantity().map_valid(|q| q * 2).await;
//! assert_eq!(doubled.into_value(), Some(4));
//! # }
//! ```
//!
//! # What's Included
//!
//! - Everything from [`prelude`](crate::prelude)
//! - **Traits**: [`ContainerFutureExt`], [`Continuation`], [`AsyncSupplier`]
//! - **Continuation kinds**: [`Pure`], [`Fallible`], [`Awaitable`], [`AwaitableFallible`]
//! - **Suppliers**: [`Deferred`]
//! - With `tracing`: [`ContainerTraceExt`](crate::async_ext::ContainerTraceExt),
//!   [`FutureTraceExt`](crate::async_ext::FutureTraceExt)

pub use crate::prelude::*;

pub use crate::async_ext::{
    AsyncSupplier, Awaitable, AwaitableFallible, ContainerFutureExt, Continuation, Deferred,
    Fallible, Pure,
};

#[cfg(feature = "tracing")]
pub use crate::async_ext::{ContainerTraceExt, FutureTraceExt};
