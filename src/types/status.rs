//! The [`Status`] value type and its error form, [`StatusError`].
//!
//! A status is an immutable `{ code, message, details }` triple. It is not an
//! error by itself; [`Status::err`] turns a non-OK status into a
//! [`StatusError`], which can travel through `?` and be found again by the
//! resolver.

use core::fmt;

use crate::types::alloc_type::{String, Vec};
use crate::traits::StatusCarrier;
use crate::types::{Code, ErrorVec};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque detail payload attached to a [`Status`].
///
/// The crate never interprets the payload; `type_url` identifies its schema
/// and `value` holds the encoded bytes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Detail {
    type_url: String,
    value: Vec<u8>,
}

impl Detail {
    #[inline]
    pub fn new(type_url: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self { type_url: type_url.into(), value: value.into() }
    }

    #[inline]
    pub fn type_url(&self) -> &str {
        &self.type_url
    }

    #[inline]
    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

/// Canonical status of an operation.
///
/// # Examples
///
/// ```
/// use status_rail::{Code, Status};
///
/// let status = Status::new(Code::NOT_FOUND, "user 42 not found");
/// assert_eq!(status.code(), Code::NOT_FOUND);
/// assert_eq!(status.message(), "user 42 not found");
/// assert!(status.details().is_empty());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Status {
    code: Code,
    message: String,
    details: ErrorVec<Detail>,
}

impl Status {
    /// Creates a status with the given code and message.
    #[inline]
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), details: ErrorVec::new() }
    }

    /// The success status: [`Code::OK`] with an empty message.
    #[inline]
    pub fn ok() -> Self {
        Self::new(Code::OK, String::new())
    }

    #[inline]
    pub fn code(&self) -> Code {
        self.code
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn details(&self) -> &[Detail] {
        &self.details
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.code.is_ok()
    }

    /// Returns a copy of this status with `details` appended.
    ///
    /// Details only make sense on a failure, so an OK status is rejected.
    ///
    /// ```
    /// use status_rail::{Code, Detail, Status};
    ///
    /// let status = Status::new(Code::INVALID_ARGUMENT, "bad email")
    ///     .with_details([Detail::new("type.example/FieldViolation", b"email".to_vec())])
    ///     .unwrap();
    /// assert_eq!(status.details().len(), 1);
    ///
    /// assert!(Status::ok().with_details([]).is_err());
    /// ```
    pub fn with_details<I>(&self, details: I) -> Result<Status, DetailsError>
    where
        I: IntoIterator<Item = Detail>,
    {
        if self.is_ok() {
            return Err(DetailsError);
        }
        let mut status = self.clone();
        status.details.extend(details);
        Ok(status)
    }

    /// Returns the error form of this status, or `None` for [`Code::OK`].
    #[inline]
    pub fn err(&self) -> Option<StatusError> {
        self.clone().into_err()
    }

    /// Consuming variant of [`Status::err`].
    #[inline]
    pub fn into_err(self) -> Option<StatusError> {
        if self.is_ok() {
            None
        } else {
            Some(StatusError { status: self })
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::ok()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code = {} desc = {}", self.code, self.message)
    }
}

/// A non-OK [`Status`] travelling as an error value.
///
/// Produced by [`Status::err`], [`status_error`](crate::status_error()) and
/// [`status_error!`](crate::status_error!). The resolver recognizes it as a
/// status carrier.
///
/// ```
/// use status_rail::{status_error, Code};
///
/// let err = status_error(Code::INTERNAL, "test description").unwrap();
/// assert_eq!(err.to_string(), "rpc error: code = Internal desc = test description");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusError {
    status: Status,
}

impl StatusError {
    #[inline]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[inline]
    pub fn into_status(self) -> Status {
        self.status
    }

    #[inline]
    pub fn code(&self) -> Code {
        self.status.code
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rpc error: {}", self.status)
    }
}

impl core::error::Error for StatusError {}

impl StatusCarrier for StatusError {
    #[inline]
    fn carried_status(&self) -> Status {
        self.status.clone()
    }

    #[inline]
    fn carried_code(&self) -> Code {
        self.status.code
    }
}

impl From<StatusError> for Status {
    #[inline]
    fn from(err: StatusError) -> Self {
        err.status
    }
}

/// Returned when details are attached to an OK status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailsError;

impl fmt::Display for DetailsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no error details for status with code OK")
    }
}

impl core::error::Error for DetailsError {}
