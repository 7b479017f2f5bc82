//! Tower integration for status-rail.
//!
//! [`StatusLayer`] sits at a service boundary and turns whatever error the
//! inner service produced into its resolved [`Status`], the way an RPC
//! interceptor would before writing a response.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! status-rail = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use status_rail::tower::StatusLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(StatusLayer::new())
//!     .service(my_service);
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{BoxError, Layer, Service};

use crate::resolve::Resolver;
use crate::types::Status;

/// A Tower [`Layer`] that resolves service errors into [`Status`] values.
///
/// Uses the default [`Resolver`] unless one is supplied with
/// [`StatusLayer::with_resolver`].
#[derive(Clone, Debug, Default)]
pub struct StatusLayer {
    resolver: Resolver,
}

impl StatusLayer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves errors with a custom resolver.
    #[inline]
    pub fn with_resolver(resolver: Resolver) -> Self {
        Self { resolver }
    }

    #[inline]
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }
}

impl<S> Layer<S> for StatusLayer {
    type Service = StatusService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        StatusService { inner, resolver: self.resolver.clone() }
    }
}

/// A Tower [`Service`] whose error type is [`Status`].
///
/// The inner error may be anything convertible into a [`BoxError`], which
/// covers concrete errors as well as boxed ones.
///
/// Created by [`StatusLayer`] or [`ServiceStatusExt::with_status_errors`].
#[derive(Clone, Debug)]
pub struct StatusService<S> {
    inner: S,
    resolver: Resolver,
}

impl<S> StatusService<S> {
    #[inline]
    pub fn new(inner: S, resolver: Resolver) -> Self {
        Self { inner, resolver }
    }

    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, Request> Service<Request> for StatusService<S>
where
    S: Service<Request>,
    S::Error: Into<BoxError>,
{
    type Response = S::Response;
    type Error = Status;
    type Future = StatusServiceFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        let resolver = &self.resolver;
        self.inner.poll_ready(cx).map_err(|e| resolve_service_error(resolver, e.into()))
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        StatusServiceFuture::new(self.inner.call(request), self.resolver.clone())
    }
}

fn resolve_service_error(resolver: &Resolver, err: BoxError) -> Status {
    let status = resolver.convert(Some(&*err));
    #[cfg(feature = "tracing")]
    tracing::debug!(error = %err, code = %status.code(), "service error resolved to status");
    status
}

pin_project! {
    /// Future returned by [`StatusService`].
    #[must_use = "futures do nothing unless polled"]
    pub struct StatusServiceFuture<F> {
        #[pin]
        inner: F,
        resolver: Option<Resolver>,
    }
}

impl<F> StatusServiceFuture<F> {
    #[inline]
    fn new(inner: F, resolver: Resolver) -> Self {
        Self { inner, resolver: Some(resolver) }
    }
}

impl<F, T, E> Future for StatusServiceFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    type Output = Result<T, Status>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(Ok(response)) => {
                this.resolver.take();
                Poll::Ready(Ok(response))
            },
            Poll::Ready(Err(error)) => {
                let resolver = this.resolver.take().expect("polled after completion");
                Poll::Ready(Err(resolve_service_error(&resolver, error.into())))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T, E> FusedFuture for StatusServiceFuture<F>
where
    F: FusedFuture<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.resolver.is_none() || self.inner.is_terminated()
    }
}

/// Extension trait for wrapping a service in a [`StatusService`].
pub trait ServiceStatusExt<Request>: Service<Request> + Sized {
    /// Resolves this service's errors into [`Status`] values.
    fn with_status_errors(self) -> StatusService<Self> {
        StatusService::new(self, Resolver::new())
    }
}

impl<S, Request> ServiceStatusExt<Request> for S where S: Service<Request> {}
