//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use status_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`status!`], [`status_error!`]
//! - **Types**: [`Code`], [`Status`], [`StatusError`], [`WithStatus`]
//! - **Traits**: [`StatusExt`], [`StatusResultExt`], [`StatusCarrier`]
//! - **Functions**: [`code`], [`convert`], [`from_error`], [`with_status`]
//!
//! # Examples
//!
//! ```
//! use status_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Result<u16, WithStatus> {
//!     raw.parse::<u16>()
//!         .with_status(Code::INVALID_ARGUMENT, "port must be a number")
//! }
//!
//! let err = parse_port("http").unwrap_err();
//! assert_eq!(err.status_code(), Code::INVALID_ARGUMENT);
//! ```

// Macros
pub use crate::{status, status_error};

// Core types
pub use crate::types::{Code, Status, StatusError, WithStatus};

// Traits
pub use crate::traits::{StatusCarrier, StatusExt, StatusResultExt};

// Functions
pub use crate::attach::with_status;
pub use crate::resolve::{code, convert, from_error};
