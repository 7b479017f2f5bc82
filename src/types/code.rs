//! Canonical status codes.
//!
//! [`Code`] is a thin wrapper over `u32`. The well-known values follow the
//! canonical RPC code space, but any other value is accepted as-is: codes are
//! never validated, and unrecognized values simply display as `Code(N)`.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A status code.
///
/// # Examples
///
/// ```
/// use status_rail::Code;
///
/// assert!(Code::OK.is_ok());
/// assert_eq!(Code::INTERNAL.to_string(), "Internal");
/// assert_eq!(Code::from(1000).to_string(), "Code(1000)");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Code(u32);

impl Code {
    /// Not an error; returned on success.
    pub const OK: Code = Code(0);
    /// The operation was cancelled, typically by the caller.
    pub const CANCELED: Code = Code(1);
    /// Unknown error, or an error that carries no status information.
    pub const UNKNOWN: Code = Code(2);
    pub const INVALID_ARGUMENT: Code = Code(3);
    /// The deadline expired before the operation could complete.
    pub const DEADLINE_EXCEEDED: Code = Code(4);
    pub const NOT_FOUND: Code = Code(5);
    pub const ALREADY_EXISTS: Code = Code(6);
    pub const PERMISSION_DENIED: Code = Code(7);
    pub const RESOURCE_EXHAUSTED: Code = Code(8);
    pub const FAILED_PRECONDITION: Code = Code(9);
    pub const ABORTED: Code = Code(10);
    pub const OUT_OF_RANGE: Code = Code(11);
    pub const UNIMPLEMENTED: Code = Code(12);
    pub const INTERNAL: Code = Code(13);
    pub const UNAVAILABLE: Code = Code(14);
    pub const DATA_LOSS: Code = Code(15);
    pub const UNAUTHENTICATED: Code = Code(16);

    /// Creates a code from its raw value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Code(value)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns `true` for [`Code::OK`].
    #[inline]
    pub const fn is_ok(self) -> bool {
        self.0 == Code::OK.0
    }

    /// Returns the canonical name for well-known codes.
    pub const fn name(self) -> Option<&'static str> {
        Some(match self.0 {
            0 => "OK",
            1 => "Canceled",
            2 => "Unknown",
            3 => "InvalidArgument",
            4 => "DeadlineExceeded",
            5 => "NotFound",
            6 => "AlreadyExists",
            7 => "PermissionDenied",
            8 => "ResourceExhausted",
            9 => "FailedPrecondition",
            10 => "Aborted",
            11 => "OutOfRange",
            12 => "Unimplemented",
            13 => "Internal",
            14 => "Unavailable",
            15 => "DataLoss",
            16 => "Unauthenticated",
            _ => return None,
        })
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Code({})", self.0),
        }
    }
}

impl From<u32> for Code {
    #[inline]
    fn from(value: u32) -> Self {
        Code(value)
    }
}

impl From<Code> for u32 {
    #[inline]
    fn from(code: Code) -> Self {
        code.0
    }
}
