//! StatusRail keeps one canonical status per failure while errors collect
//! context on their way up the call stack.
//!
//! Each wrapper remembers the error it wraps, forming a cause chain. At any
//! point the chain can be asked for its authoritative [`Status`]: the
//! resolver walks it outermost first and returns the first status it finds,
//! so a status attached further out overrides one buried deeper.
//!
//! # Examples
//!
//! ## Attaching and resolving
//!
//! ```
//! use status_rail::{code, from_error, Code, WithStatus};
//! use std::io;
//!
//! let io_err = io::Error::new(io::ErrorKind::NotFound, "users.db missing");
//! let err = WithStatus::new(io_err, Code::UNAVAILABLE, "user store offline");
//!
//! assert_eq!(code(Some(&err)), Code::UNAVAILABLE);
//!
//! let (status, matched) = from_error(Some(&err));
//! assert!(matched);
//! assert_eq!(status.message(), "user store offline");
//! // The node itself still reads like its cause.
//! assert_eq!(err.to_string(), "users.db missing");
//! ```
//!
//! ## Cancellation signals
//!
//! ```
//! use status_rail::{convert, Code, CANCELED};
//!
//! let (status, _) = status_rail::from_error(Some(&CANCELED));
//! assert_eq!(status.code(), Code::CANCELED);
//! assert_eq!(convert(None).code(), Code::OK);
//! ```
//!
//! ## Walking a chain
//!
//! ```
//! use status_rail::chain::{cause, AsDynError};
//! use status_rail::{Code, WithStatus};
//! use std::io;
//!
//! let err = WithStatus::new(io::Error::new(io::ErrorKind::Other, "eof"), Code::DATA_LOSS, "truncated");
//! let innermost = cause(Some(err.as_dyn_error())).unwrap();
//! assert!(innermost.is::<io::Error>());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Status attachment and status factories
pub mod attach;
/// Cause-chain traversal
pub mod chain;
/// Formatting macros for the status factories
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Status resolution over cause chains
pub mod resolve;
/// Status capability and extension traits
pub mod traits;
/// Status values, codes, signals and the status-carrying node
pub mod types;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use attach::{new_status, status_error, with_status};
pub use resolve::{code, convert, from_context_error, from_error, Resolver};
pub use traits::{StatusCarrier, StatusExt, StatusResultExt};
pub use types::{
    Code, ContextError, Detail, DetailsError, ErrorVec, SharedError, Status, StatusError,
    WithStatus, CANCELED, DEADLINE_EXCEEDED,
};

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}
