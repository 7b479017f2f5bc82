//! Status value types and the status-carrying chain node.
//!
//! # Examples
//!
//! ```
//! use status_rail::{Code, Status, WithStatus};
//! use std::io;
//!
//! let status = Status::new(Code::UNAVAILABLE, "backend down");
//! assert_eq!(status.to_string(), "code = Unavailable desc = backend down");
//!
//! let err = WithStatus::new(io::Error::new(io::ErrorKind::Other, "refused"), status.code(), "retry later");
//! assert_eq!(err.to_string(), "refused");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod code;
pub mod shared;
pub mod signal;
pub mod status;
pub mod with_status;

pub use code::Code;
pub use shared::SharedError;
pub use signal::{ContextError, CANCELED, DEADLINE_EXCEEDED};
pub use status::{Detail, DetailsError, Status, StatusError};
pub use with_status::WithStatus;

/// SmallVec-backed collection used for status details and registered probes.
///
/// Uses inline storage for a single element, which covers the common case
/// without touching the heap.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
