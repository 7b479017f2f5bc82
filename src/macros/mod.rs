//! Formatting shortcuts for the status factories.
//!
//! - [`macro@crate::status`] builds a [`Status`](crate::Status) from a format string.
//! - [`macro@crate::status_error`] builds the error form, `None` for `Code::OK`.
//!
//! # Examples
//!
//! ```
//! use status_rail::{status, status_error, Code};
//!
//! let user_id = 42;
//! let s = status!(Code::NOT_FOUND, "user {} not found", user_id);
//! assert_eq!(s.message(), "user 42 not found");
//!
//! let err = status_error!(Code::ALREADY_EXISTS, "user {user_id} exists").unwrap();
//! assert_eq!(err.status().message(), "user 42 exists");
//! ```

/// Creates a [`Status`](crate::Status) with a formatted message.
///
/// ```
/// use status_rail::{status, Code};
///
/// let s = status!(Code::OUT_OF_RANGE, "page {} of {}", 7, 5);
/// assert_eq!(s.code(), Code::OUT_OF_RANGE);
/// assert_eq!(s.message(), "page 7 of 5");
/// ```
#[macro_export]
macro_rules! status {
    ($code:expr, $($arg:tt)*) => {
        $crate::Status::new($code, $crate::__private::format!($($arg)*))
    };
}

/// Creates an `Option<StatusError>` with a formatted message.
///
/// Evaluates to `None` when the code is `Code::OK`.
///
/// ```
/// use status_rail::{status_error, Code};
///
/// assert!(status_error!(Code::OK, "all {} good", "is").is_none());
/// let err = status_error!(Code::INTERNAL, "shard {} failed", 3).unwrap();
/// assert_eq!(err.to_string(), "rpc error: code = Internal desc = shard 3 failed");
/// ```
#[macro_export]
macro_rules! status_error {
    ($code:expr, $($arg:tt)*) => {
        $crate::status!($code, $($arg)*).into_err()
    };
}
