//! The status-carrying chain node produced by the attacher.

use core::error::Error;
use core::fmt;

use crate::traits::StatusCarrier;
use crate::types::alloc_type::{Box, String};
use crate::types::{Code, SharedError, Status};

/// Error node that wraps a cause and attaches an explicit [`Status`].
///
/// A `WithStatus` takes part in both chain capabilities: [`Error::source`]
/// returns the wrapped cause unchanged, and [`StatusCarrier`] exposes the
/// attached status. Its `Display` output is the cause's message; the status
/// message is only visible through the status.
///
/// # Examples
///
/// ```
/// use status_rail::{code, Code, WithStatus};
/// use std::io;
///
/// let cause = io::Error::new(io::ErrorKind::Other, "disk full");
/// let err = WithStatus::new(cause, Code::RESOURCE_EXHAUSTED, "quota exceeded");
///
/// assert_eq!(err.to_string(), "disk full");
/// assert_eq!(err.status().message(), "quota exceeded");
/// assert_eq!(code(Some(&err)), Code::RESOURCE_EXHAUSTED);
/// ```
#[derive(Debug, Clone)]
pub struct WithStatus {
    cause: Option<SharedError>,
    status: Status,
}

impl WithStatus {
    /// Wraps `cause`, which becomes the next node in the chain.
    ///
    /// A [`SharedError`] is linked directly, so the node it holds becomes
    /// the next node.
    #[inline]
    pub fn new(cause: impl Into<SharedError>, code: Code, message: impl Into<String>) -> Self {
        Self::from_shared(cause.into(), code, message)
    }

    /// Wraps a cause that may also be referenced by other chains.
    #[inline]
    pub fn from_shared(cause: SharedError, code: Code, message: impl Into<String>) -> Self {
        Self { cause: Some(cause), status: Status::new(code, message) }
    }

    /// Wraps a boxed cause.
    #[inline]
    pub fn from_boxed(
        cause: Box<dyn Error + Send + Sync>,
        code: Code,
        message: impl Into<String>,
    ) -> Self {
        Self::from_shared(SharedError::from_boxed(cause), code, message)
    }

    /// A node with no cause; its message is the status message.
    #[inline]
    pub(crate) fn detached(code: Code, message: impl Into<String>) -> Self {
        Self { cause: None, status: Status::new(code, message) }
    }

    #[inline]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Returns the wrapped cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&SharedError> {
        self.cause.as_ref()
    }
}

impl fmt::Display for WithStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => fmt::Display::fmt(cause, f),
            None => f.write_str(self.status.message()),
        }
    }
}

impl Error for WithStatus {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref()
    }
}

impl StatusCarrier for WithStatus {
    #[inline]
    fn carried_status(&self) -> Status {
        self.status.clone()
    }

    #[inline]
    fn carried_code(&self) -> Code {
        self.status.code()
    }
}
