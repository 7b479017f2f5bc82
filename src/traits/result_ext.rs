//! Extension trait for attaching a status to the error side of a `Result`.
//!
//! # Examples
//!
//! ```
//! use status_rail::traits::StatusResultExt;
//! use status_rail::{code, Code, WithStatus};
//!
//! fn load_config() -> Result<String, WithStatus> {
//!     std::fs::read_to_string("/definitely/not/here.toml")
//!         .with_status(Code::FAILED_PRECONDITION, "configuration missing")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert_eq!(code(Some(&err)), Code::FAILED_PRECONDITION);
//! ```


use crate::types::alloc_type::String;
use crate::types::{Code, SharedError, WithStatus};

/// Wraps the error of a `Result` in a [`WithStatus`] node.
///
/// Any `Error + Send + Sync + 'static` error qualifies, and so does a
/// [`SharedError`], whose node is linked without an extra layer.
pub trait StatusResultExt<T> {
    /// Attaches `code` and `message` to the error, leaving `Ok` untouched.
    fn with_status(self, code: Code, message: impl Into<String>) -> Result<T, WithStatus>;

    /// Like [`with_status`](Self::with_status), building the message only on error.
    fn with_status_with<F>(self, code: Code, f: F) -> Result<T, WithStatus>
    where
        F: FnOnce() -> String;
}

impl<T, E> StatusResultExt<T> for Result<T, E>
where
    E: Into<SharedError>,
{
    #[inline]
    fn with_status(self, code: Code, message: impl Into<String>) -> Result<T, WithStatus> {
        self.map_err(|e| WithStatus::new(e, code, message))
    }

    #[inline]
    fn with_status_with<F>(self, code: Code, f: F) -> Result<T, WithStatus>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| WithStatus::new(e, code, f()))
    }
}
