//! Async extensions for status-rail.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! status-rail = { version = "0.1", features = ["async"] }
//! ```

mod future_ext;
mod status_future;

pub use future_ext::FutureStatusExt;
pub use status_future::StatusFuture;
