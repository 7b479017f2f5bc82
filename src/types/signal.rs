//! Well-known cancellation and deadline signals.
//!
//! These values do not carry a status. The resolver recognizes them by value
//! and synthesizes [`Code::CANCELED`] or [`Code::DEADLINE_EXCEEDED`] for them,
//! using the signal's own message.

use core::error::Error;
use core::fmt;

use crate::types::Code;

/// Sentinel errors raised when an operation is cancelled or runs out of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextError {
    Canceled,
    DeadlineExceeded,
}

/// The cancellation sentinel.
pub const CANCELED: ContextError = ContextError::Canceled;

/// The deadline sentinel.
pub const DEADLINE_EXCEEDED: ContextError = ContextError::DeadlineExceeded;

impl ContextError {
    /// The status code synthesized for this signal.
    #[inline]
    pub const fn code(self) -> Code {
        match self {
            ContextError::Canceled => Code::CANCELED,
            ContextError::DeadlineExceeded => Code::DEADLINE_EXCEEDED,
        }
    }

    /// Identifies `err` as one of the sentinels, without looking at its causes.
    ///
    /// With the `tokio` feature, `tokio::time::error::Elapsed` also counts as
    /// [`ContextError::DeadlineExceeded`].
    pub fn recognize(err: &(dyn Error + 'static)) -> Option<ContextError> {
        if let Some(signal) = err.downcast_ref::<ContextError>() {
            return Some(*signal);
        }
        #[cfg(feature = "tokio")]
        if err.is::<tokio::time::error::Elapsed>() {
            return Some(ContextError::DeadlineExceeded);
        }
        None
    }
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContextError::Canceled => "context canceled",
            ContextError::DeadlineExceeded => "context deadline exceeded",
        })
    }
}

impl Error for ContextError {}
