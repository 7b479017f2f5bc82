//! Reference-counted cause shared by several outer wrappers.

use core::any::Any;
use core::error::Error;
use core::fmt;
use core::ops::Deref;

use crate::chain::AsDynError;
use crate::types::alloc_type::{Arc, Box};

type Inner = Arc<dyn Error + Send + Sync>;

/// An error held by reference count so one cause can sit under several
/// wrappers.
///
/// `SharedError` does not implement [`Error`]. It is a handle to the node it
/// holds: walking, resolving and displaying it go straight to that node, and
/// wrapping it never adds a layer of its own. Where a `&dyn Error` is
/// expected, pass `&*shared` or `shared.as_dyn_error()`.
///
/// # Examples
///
/// ```
/// use status_rail::traits::StatusExt;
/// use status_rail::{code, Code, SharedError, WithStatus};
/// use std::io;
///
/// let shared = SharedError::new(WithStatus::new(io::Error::other("x"), Code::ABORTED, "y"));
///
/// assert_eq!(shared.status_code(), Code::ABORTED);
/// assert_eq!(code(Some(&*shared)), Code::ABORTED);
/// assert_eq!(shared.to_string(), "x");
/// ```
#[derive(Clone)]
pub struct SharedError(Inner);

impl SharedError {
    /// Shares `err`.
    ///
    /// An `Arc<dyn Error + Send + Sync>` is adopted as-is instead of being
    /// wrapped a second time.
    pub fn new<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        if let Some(arc) = (&err as &dyn Any).downcast_ref::<Inner>() {
            return Self(Arc::clone(arc));
        }
        Self(Arc::new(err))
    }

    /// Shares a boxed error without re-boxing the node it holds.
    #[inline]
    pub fn from_boxed(err: Box<dyn Error + Send + Sync>) -> Self {
        Self(Arc::from(err))
    }

    /// Returns the shared node with its thread-safety bounds.
    #[inline]
    pub fn get(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.0
    }

    /// Number of handles pointing at the same node.
    #[inline]
    pub fn strong_count(this: &Self) -> usize {
        Arc::strong_count(&this.0)
    }

    /// Returns `true` when both handles point at the same node.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }
}

impl<E> From<E> for SharedError
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(err: E) -> Self {
        Self::new(err)
    }
}

impl Deref for SharedError {
    type Target = dyn Error + 'static;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl AsDynError for SharedError {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        &*self.0
    }
}

impl fmt::Display for SharedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for SharedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
