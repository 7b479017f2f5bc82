//! Status attachment and status factories.
//!
//! [`with_status`] prepends a [`WithStatus`] node to a chain so that the
//! resolver finds the attached status before anything further down. The
//! factories build plain [`Status`] values and their error form; an error
//! value for [`Code::OK`] is always `None`.
//!
//! # Examples
//!
//! ```
//! use status_rail::{code, status_error, with_status, Code};
//!
//! assert!(with_status(None, Code::OK, "").is_none());
//! assert!(status_error(Code::OK, "fine").is_none());
//!
//! let err = with_status(None, Code::NOT_FOUND, "no such user").unwrap();
//! assert_eq!(err.to_string(), "no such user");
//! assert_eq!(code(Some(&err)), Code::NOT_FOUND);
//! ```

use crate::types::alloc_type::String;
use crate::types::{Code, SharedError, Status, StatusError, WithStatus};

/// Attaches `code` and `message` to `err`.
///
/// - `None` with [`Code::OK`] stays `None`.
/// - `None` with any other code becomes a node without a cause whose message
///   is `message`.
/// - `Some(err)` becomes a wrapper whose cause is `err` and whose `Display`
///   output is `err`'s, not `message`.
pub fn with_status(
    err: Option<SharedError>,
    code: Code,
    message: impl Into<String>,
) -> Option<WithStatus> {
    match err {
        None if code.is_ok() => None,
        None => Some(WithStatus::detached(code, message)),
        Some(cause) => Some(WithStatus::from_shared(cause, code, message)),
    }
}

/// Returns a [`Status`] for `code` and `message`.
#[inline]
pub fn new_status(code: Code, message: impl Into<String>) -> Status {
    Status::new(code, message)
}

/// Returns the error form of `code` and `message`, or `None` for [`Code::OK`].
#[inline]
pub fn status_error(code: Code, message: impl Into<String>) -> Option<StatusError> {
    Status::new(code, message).into_err()
}
