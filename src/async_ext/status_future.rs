//! Future wrapper that attaches a status lazily.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::alloc_type::String;
use crate::types::{Code, SharedError, WithStatus};

pin_project! {
    /// A future that wraps its error in a [`WithStatus`] node.
    ///
    /// The message closure only runs when the inner future resolves to an
    /// error.
    ///
    /// # Cancel Safety
    ///
    /// `StatusFuture` is cancel-safe if the inner future is cancel-safe.
    #[must_use = "futures do nothing unless polled"]
    pub struct StatusFuture<Fut, F> {
        #[pin]
        future: Fut,
        code: Code,
        message_fn: Option<F>,
    }
}

impl<Fut, F> StatusFuture<Fut, F> {
    #[inline]
    pub fn new(future: Fut, code: Code, message_fn: F) -> Self {
        Self { future, code, message_fn: Some(message_fn) }
    }
}

impl<Fut, F, T, E> Future for StatusFuture<Fut, F>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce() -> String,
    E: Into<SharedError>,
{
    type Output = Result<T, WithStatus>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let code = *this.code;

        this.future.poll(cx).map(|res| {
            res.map_err(|err| {
                let message_fn = this
                    .message_fn
                    .take()
                    .expect("StatusFuture polled after completion; this is a bug");
                WithStatus::new(err, code, message_fn())
            })
        })
    }
}

impl<Fut, F, T, E> FusedFuture for StatusFuture<Fut, F>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    F: FnOnce() -> String,
    E: Into<SharedError>,
{
    fn is_terminated(&self) -> bool {
        self.message_fn.is_none() || self.future.is_terminated()
    }
}
