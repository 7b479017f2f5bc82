use crate::types::{Code, Status};

/// The status capability. Carriers other than the crate's own are ignored
/// until registered with [`Resolver::carrier`](crate::resolve::Resolver::carrier).
///
/// An implementor is an error node that knows its own [`Status`], which
/// describes this node alone, independent of whatever it wraps.
///
/// # Recognition
///
/// [`WithStatus`](crate::WithStatus) and [`StatusError`](crate::StatusError)
/// are always recognized. Nodes are seen as `dyn Error`, and a trait
/// implemented outside this crate cannot be detected on one, so the free
/// functions [`from_error`](crate::from_error), [`code`](crate::code()) and
/// [`convert`](crate::convert) walk past any other implementor as if it
/// carried no status. Use a [`Resolver`](crate::resolve::Resolver) with the
/// type registered, or wrap the error in a `WithStatus`.
///
/// # Examples
///
/// ```
/// use status_rail::resolve::Resolver;
/// use status_rail::traits::StatusCarrier;
/// use status_rail::{Code, Status};
///
/// #[derive(Debug)]
/// struct QuotaError;
///
/// impl std::fmt::Display for QuotaError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("quota exhausted")
///     }
/// }
///
/// impl std::error::Error for QuotaError {}
///
/// impl StatusCarrier for QuotaError {
///     fn carried_status(&self) -> Status {
///         Status::new(Code::RESOURCE_EXHAUSTED, "slow down")
///     }
/// }
///
/// // Unregistered: the default resolution does not see the carrier.
/// assert_eq!(status_rail::code(Some(&QuotaError)), Code::UNKNOWN);
///
/// let resolver = Resolver::new().carrier::<QuotaError>();
/// assert_eq!(resolver.code(Some(&QuotaError)), Code::RESOURCE_EXHAUSTED);
/// ```
pub trait StatusCarrier: core::error::Error {
    /// Returns the status attached to this node.
    fn carried_status(&self) -> Status;

    /// Returns the code of [`carried_status`](Self::carried_status).
    ///
    /// Override when the code is available without building a status.
    #[inline]
    fn carried_code(&self) -> Code {
        self.carried_status().code()
    }
}
