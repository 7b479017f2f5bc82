//! Cause-chain traversal.
//!
//! A cause chain is a linked list of nodes where each node may point at the
//! next one:
//!
//! ```text
//! e1 -> e2 -> e3 -> e4
//! ```
//!
//! The walker knows nothing about statuses. It only needs the [`Chained`]
//! capability, which every `dyn Error` has through [`Error::source`], and
//! which custom chain types can implement directly.
//!
//! Traversal relies on the chain being finite. A chain whose causes loop back
//! on themselves makes [`scan`], [`search`] and [`cause`] run forever; use
//! [`search_within`] when the chain comes from an untrusted source.
//!
//! # Examples
//!
//! ```
//! use status_rail::chain::{cause, chain, AsDynError};
//! use status_rail::{Code, WithStatus};
//! use std::io;
//!
//! let err = WithStatus::new(io::Error::new(io::ErrorKind::Other, "eof"), Code::DATA_LOSS, "truncated");
//! let start = Some(err.as_dyn_error());
//!
//! assert_eq!(chain(start).count(), 2);
//! assert_eq!(cause(start).map(|e| e.to_string()), Some("eof".to_string()));
//! ```

use core::error::Error;
use core::fmt;
use core::iter::FusedIterator;
use core::panic::UnwindSafe;

/// The cause capability: access to the next node of a chain.
pub trait Chained {
    /// Returns the node this one wraps, or `None` at the end of the chain.
    fn next_cause(&self) -> Option<&Self>;
}

impl Chained for dyn Error + 'static {
    #[inline]
    fn next_cause(&self) -> Option<&Self> {
        self.source()
    }
}

/// Views any error value as a chain node.
///
/// Implemented for every sized error type and for `dyn Error` with the usual
/// auto-trait combinations, so both concrete and boxed errors can enter the
/// walker.
pub trait AsDynError {
    fn as_dyn_error(&self) -> &(dyn Error + 'static);
}

impl<E: Error + 'static> AsDynError for E {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + Send + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + Send + Sync + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + Send + Sync + UnwindSafe + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

/// Iterator over a cause chain, outermost node first.
///
/// Created by [`chain`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chain<'a, T: ?Sized> {
    next: Option<&'a T>,
}

impl<T: ?Sized> Clone for Chain<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<'a, T: Chained + ?Sized> Iterator for Chain<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let current = self.next?;
        self.next = current.next_cause();
        Some(current)
    }
}

impl<T: Chained + ?Sized> FusedIterator for Chain<'_, T> {}

/// Returns an iterator over `start` and every cause below it.
#[inline]
pub fn chain<T: Chained + ?Sized>(start: Option<&T>) -> Chain<'_, T> {
    Chain { next: start }
}

/// Calls `visit` on every node of the chain, from `start` to the innermost.
///
/// Nothing is visited when `start` is `None`.
///
/// ```
/// use status_rail::chain::{scan, AsDynError};
/// use status_rail::{Code, WithStatus};
/// use std::io;
///
/// let err = WithStatus::new(io::Error::new(io::ErrorKind::Other, "eof"), Code::DATA_LOSS, "truncated");
/// let mut seen = Vec::new();
/// scan(Some(err.as_dyn_error()), |node| seen.push(node.to_string()));
/// assert_eq!(seen, ["eof", "eof"]);
/// ```
#[inline]
pub fn scan<T, F>(start: Option<&T>, visit: F)
where
    T: Chained + ?Sized,
    F: FnMut(&T),
{
    chain(start).for_each(visit);
}

/// Returns the first node, outermost first, for which `predicate` holds.
///
/// The predicate runs exactly once per visited node and traversal stops at
/// the first match.
#[inline]
pub fn search<'a, T, P>(start: Option<&'a T>, mut predicate: P) -> Option<&'a T>
where
    T: Chained + ?Sized,
    P: FnMut(&T) -> bool,
{
    chain(start).find(|node| predicate(node))
}

/// Returns the innermost node reachable from `start`.
///
/// A node without a cause is its own innermost node.
#[inline]
pub fn cause<T: Chained + ?Sized>(start: Option<&T>) -> Option<&T> {
    chain(start).last()
}

/// Like [`search`], but gives up after visiting `max_depth` nodes.
///
/// Returns `Err(ChainTooDeep)` when no match was found among the first
/// `max_depth` nodes and the chain continues past them.
pub fn search_within<'a, T, P>(
    start: Option<&'a T>,
    max_depth: usize,
    mut predicate: P,
) -> Result<Option<&'a T>, ChainTooDeep>
where
    T: Chained + ?Sized,
    P: FnMut(&T) -> bool,
{
    for (depth, node) in chain(start).enumerate() {
        if depth == max_depth {
            return Err(ChainTooDeep { max_depth });
        }
        if predicate(node) {
            return Ok(Some(node));
        }
    }
    Ok(None)
}

/// A cause chain was longer than the traversal limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainTooDeep {
    max_depth: usize,
}

impl ChainTooDeep {
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl fmt::Display for ChainTooDeep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cause chain is longer than {} nodes", self.max_depth)
    }
}

impl Error for ChainTooDeep {}
