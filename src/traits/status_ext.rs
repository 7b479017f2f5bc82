//! Method-style access to the walker and the resolver.

use core::error::Error;

use crate::chain::{self, AsDynError, Chain};
use crate::resolve;
use crate::types::{Code, Status};

/// Resolution helpers available on every error value.
///
/// ```
/// use status_rail::traits::StatusExt;
/// use status_rail::{Code, WithStatus};
/// use std::io;
///
/// let err = WithStatus::new(io::Error::new(io::ErrorKind::Other, "eof"), Code::DATA_LOSS, "truncated");
///
/// assert_eq!(err.status_code(), Code::DATA_LOSS);
/// assert_eq!(err.to_status().message(), "truncated");
/// assert_eq!(err.root_cause().to_string(), "eof");
/// assert_eq!(err.causes().count(), 2);
/// ```
pub trait StatusExt: AsDynError {
    /// Resolves the status of the chain starting at `self`.
    #[inline]
    fn to_status(&self) -> Status {
        resolve::convert(Some(self.as_dyn_error()))
    }

    /// Resolves only the code of the chain starting at `self`.
    #[inline]
    fn status_code(&self) -> Code {
        resolve::code(Some(self.as_dyn_error()))
    }

    /// Returns the innermost error of the chain.
    #[inline]
    fn root_cause(&self) -> &(dyn Error + 'static) {
        let start = self.as_dyn_error();
        chain::cause(Some(start)).unwrap_or(start)
    }

    /// Iterates over `self` and its causes, outermost first.
    #[inline]
    fn causes(&self) -> Chain<'_, dyn Error + 'static> {
        chain::chain(Some(self.as_dyn_error()))
    }
}

impl<E: AsDynError + ?Sized> StatusExt for E {}
