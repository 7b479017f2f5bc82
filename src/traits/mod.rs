//! Traits at the seams of the crate.
//!
//! - [`StatusCarrier`]: the status capability of a chain node
//! - [`StatusResultExt`]: attach a status to the error side of a `Result`
//! - [`StatusExt`]: resolve a status directly from any error value
//!
//! The cause capability lives next to the walker, as
//! [`Chained`](crate::chain::Chained).
//!
//! # Examples
//!
//! ```
//! use status_rail::traits::{StatusExt, StatusResultExt};
//! use status_rail::Code;
//!
//! let parsed: Result<u32, _> = "x".parse::<u32>();
//! let err = parsed.with_status(Code::INVALID_ARGUMENT, "port must be numeric").unwrap_err();
//! assert_eq!(err.status_code(), Code::INVALID_ARGUMENT);
//! ```

pub mod result_ext;
pub mod status_carrier;
pub mod status_ext;

pub use result_ext::StatusResultExt;
pub use status_carrier::StatusCarrier;
pub use status_ext::StatusExt;
