//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Mirrors [`StatusResultExt`](crate::traits::StatusResultExt) for async code.

use core::future::Future;

use crate::types::alloc_type::String;
use crate::types::{Code, SharedError};

use super::status_future::StatusFuture;

/// Attaches a status to the error of a `Result`-returning future.
///
/// # Examples
///
/// ```rust
/// use status_rail::async_ext::FutureStatusExt;
/// use status_rail::traits::StatusExt;
/// use status_rail::Code;
/// use std::io;
///
/// async fn fetch() -> Result<u32, io::Error> {
///     Err(io::Error::new(io::ErrorKind::TimedOut, "upstream timed out"))
/// }
///
/// async fn handler() -> Code {
///     match fetch().with_status(Code::UNAVAILABLE, "inventory offline").await {
///         Ok(_) => Code::OK,
///         Err(err) => err.status_code(),
///     }
/// }
/// ```
pub trait FutureStatusExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Wraps the error in a [`WithStatus`](crate::WithStatus) with a fixed message.
    fn with_status<M>(self, code: Code, message: M) -> StatusFuture<Self, impl FnOnce() -> String>
    where
        M: Into<String>,
    {
        self.with_status_with(code, move || message.into())
    }

    /// Wraps the error, building the message only when the future fails.
    fn with_status_with<F>(self, code: Code, f: F) -> StatusFuture<Self, F>
    where
        F: FnOnce() -> String;
}

impl<Fut, T, E> FutureStatusExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<SharedError>,
{
    #[inline]
    fn with_status_with<F>(self, code: Code, f: F) -> StatusFuture<Self, F>
    where
        F: FnOnce() -> String,
    {
        StatusFuture::new(self, code, f)
    }
}
