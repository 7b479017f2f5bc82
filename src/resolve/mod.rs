//! Status resolution over cause chains.
//!
//! Resolution walks a chain outermost first and stops at the first node that
//! is either
//!
//! - a deadline or cancellation signal ([`ContextError`]), which yields
//!   [`Code::DEADLINE_EXCEEDED`] or [`Code::CANCELED`] with the signal's message, or
//! - a status carrier ([`StatusCarrier`]), which yields its own status verbatim.
//!
//! Because the outermost match wins, wrapping an error in a new
//! [`WithStatus`] overrides any status further down without touching the
//! inner nodes. When nothing matches, the chain resolves to
//! [`Code::UNKNOWN`] with the outermost error's message.
//!
//! # Examples
//!
//! ```
//! use status_rail::{code, from_error, with_status, Code, SharedError};
//! use std::io;
//!
//! let base = SharedError::new(io::Error::new(io::ErrorKind::Other, "connection reset"));
//! let inner =
//!     SharedError::new(with_status(Some(base), Code::UNAVAILABLE, "backend unavailable").unwrap());
//! let outer = with_status(Some(inner), Code::ABORTED, "transaction aborted").unwrap();
//!
//! assert_eq!(code(Some(&outer)), Code::ABORTED);
//!
//! let (status, matched) = from_error(Some(&outer));
//! assert!(matched);
//! assert_eq!(status.message(), "transaction aborted");
//! assert_eq!(outer.to_string(), "connection reset");
//! ```

use core::error::Error;

use crate::chain::{self, ChainTooDeep};
use crate::traits::StatusCarrier;
use crate::types::alloc_type::String;
use crate::types::{Code, ContextError, ErrorVec, Status, StatusError, WithStatus};
use alloc::string::ToString;

/// Looks for a status on a single chain node.
pub type StatusProbe = fn(&(dyn Error + 'static)) -> Option<Status>;

/// Looks for a status code on a single chain node.
pub type CodeProbe = fn(&(dyn Error + 'static)) -> Option<Code>;

fn probe_status<T: StatusCarrier + 'static>(err: &(dyn Error + 'static)) -> Option<Status> {
    err.downcast_ref::<T>().map(StatusCarrier::carried_status)
}

fn probe_code<T: StatusCarrier + 'static>(err: &(dyn Error + 'static)) -> Option<Code> {
    err.downcast_ref::<T>().map(StatusCarrier::carried_code)
}

/// Configurable status resolver.
///
/// [`Resolver::new`] recognizes the crate's own carriers ([`WithStatus`],
/// [`StatusError`]) and the [`ContextError`] signals, and walks chains
/// without a depth limit. The free functions of this module use it.
///
/// # Examples
///
/// ```
/// use status_rail::resolve::Resolver;
/// use status_rail::{Code, WithStatus};
/// use std::io;
///
/// let resolver = Resolver::new().max_depth(8);
/// let err = WithStatus::new(io::Error::new(io::ErrorKind::Other, "boom"), Code::INTERNAL, "internal");
/// assert_eq!(resolver.code(Some(&err)), Code::INTERNAL);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    carriers: ErrorVec<(StatusProbe, CodeProbe)>,
    max_depth: Option<usize>,
}

impl Resolver {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recognizes `T` as an additional status carrier.
    #[must_use]
    pub fn carrier<T: StatusCarrier + 'static>(mut self) -> Self {
        self.carriers.push((probe_status::<T>, probe_code::<T>));
        self
    }

    /// Stops resolution after `max_depth` nodes.
    ///
    /// A longer chain without a match resolves as unmatched
    /// [`Code::UNKNOWN`]. Finite chains within the limit resolve exactly as
    /// without it.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Returns the configured depth limit, if any.
    #[inline]
    pub fn depth_limit(&self) -> Option<usize> {
        self.max_depth
    }

    /// Resolves the status of `err`.
    ///
    /// Returns `(Status::ok(), true)` for `None`. The flag is `false` when no
    /// node in the chain carried a status or signal; the status is then
    /// [`Code::UNKNOWN`] with `err`'s own message.
    pub fn from_error(&self, err: Option<&(dyn Error + 'static)>) -> (Status, bool) {
        let Some(err) = err else {
            return (Status::ok(), true);
        };
        match self.locate(err, |node| self.node_status(node)) {
            Some(status) => (status, true),
            None => (Status::new(Code::UNKNOWN, err.to_string()), false),
        }
    }

    /// Resolves the code of `err` without building a full status.
    pub fn code(&self, err: Option<&(dyn Error + 'static)>) -> Code {
        let Some(err) = err else {
            return Code::OK;
        };
        self.locate(err, |node| self.node_code(node)).unwrap_or(Code::UNKNOWN)
    }

    /// Resolves the status of `err`, ignoring whether anything matched.
    #[inline]
    pub fn convert(&self, err: Option<&(dyn Error + 'static)>) -> Status {
        self.from_error(err).0
    }

    fn node_status(&self, node: &(dyn Error + 'static)) -> Option<Status> {
        if let Some(signal) = ContextError::recognize(node) {
            return Some(Status::new(signal.code(), node.to_string()));
        }
        probe_status::<WithStatus>(node)
            .or_else(|| probe_status::<StatusError>(node))
            .or_else(|| self.carriers.iter().find_map(|(probe, _)| probe(node)))
    }

    fn node_code(&self, node: &(dyn Error + 'static)) -> Option<Code> {
        if let Some(signal) = ContextError::recognize(node) {
            return Some(signal.code());
        }
        probe_code::<WithStatus>(node)
            .or_else(|| probe_code::<StatusError>(node))
            .or_else(|| self.carriers.iter().find_map(|(_, probe)| probe(node)))
    }

    /// Returns the first value `f` extracts, outermost node first.
    fn locate<R, F>(&self, err: &(dyn Error + 'static), mut f: F) -> Option<R>
    where
        F: FnMut(&(dyn Error + 'static)) -> Option<R>,
    {
        let mut found = None;
        let mut matches = |node: &(dyn Error + 'static)| {
            found = f(node);
            found.is_some()
        };

        match self.max_depth {
            None => {
                chain::search(Some(err), &mut matches);
            },
            Some(max_depth) => {
                if let Err(too_deep) = chain::search_within(Some(err), max_depth, &mut matches) {
                    report_too_deep(err, too_deep);
                    return None;
                }
            },
        }

        #[cfg(feature = "tracing")]
        if found.is_none() {
            tracing::trace!(error = %err, "no status found in cause chain");
        }
        found
    }
}

#[cfg(feature = "tracing")]
fn report_too_deep(err: &(dyn Error + 'static), too_deep: ChainTooDeep) {
    tracing::warn!(
        error = %err,
        max_depth = too_deep.max_depth(),
        "cause chain exceeds depth limit, resolving as Unknown"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
fn report_too_deep(_err: &(dyn Error + 'static), _too_deep: ChainTooDeep) {}

/// Resolves the status of `err` with the default [`Resolver`].
///
/// ```
/// use status_rail::{from_error, Code};
/// use std::io;
///
/// let (status, matched) = from_error(None);
/// assert!(matched && status.is_ok());
///
/// let plain = io::Error::new(io::ErrorKind::Other, "unknown error");
/// let (status, matched) = from_error(Some(&plain));
/// assert!(!matched);
/// assert_eq!(status.code(), Code::UNKNOWN);
/// assert_eq!(status.message(), "unknown error");
/// ```
#[inline]
pub fn from_error(err: Option<&(dyn Error + 'static)>) -> (Status, bool) {
    Resolver::new().from_error(err)
}

/// Resolves the code of `err` with the default [`Resolver`].
#[inline]
pub fn code(err: Option<&(dyn Error + 'static)>) -> Code {
    Resolver::new().code(err)
}

/// Resolves the status of `err` with the default [`Resolver`], never failing.
#[inline]
pub fn convert(err: Option<&(dyn Error + 'static)>) -> Status {
    Resolver::new().convert(err)
}

/// Maps a single, unwrapped error onto a status without walking its causes.
///
/// `None` is OK, the [`ContextError`] signals map to their codes, and
/// anything else is [`Code::UNKNOWN`] with the error's message.
///
/// ```
/// use status_rail::{from_context_error, Code, DEADLINE_EXCEEDED};
///
/// let status = from_context_error(Some(&DEADLINE_EXCEEDED));
/// assert_eq!(status.code(), Code::DEADLINE_EXCEEDED);
/// assert_eq!(status.message(), "context deadline exceeded");
/// ```
pub fn from_context_error(err: Option<&(dyn Error + 'static)>) -> Status {
    let Some(err) = err else {
        return Status::new(Code::OK, String::new());
    };
    let code = match ContextError::recognize(err) {
        Some(signal) => signal.code(),
        None => Code::UNKNOWN,
    };
    Status::new(code, err.to_string())
}
