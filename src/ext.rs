//! Public extension contracts for callers integrating the warden into a request path.
//!
//! The crate intentionally exposes the authentication seam as a trait without a concrete
//! session or token implementation: downstream services bring their own authentication and
//! hand the warden nothing but the verified identity string. The warden never authenticates.

/// Supplies the already-authenticated identity for the current request.
pub trait AuthenticationContext
where
	Self: Send + Sync,
{
	/// Returns the verified identity string, or `None` when the request carries no
	/// authenticated caller.
	fn identity(&self) -> Option<&str>;
}

/// Adapter for callers that resolved the request identity ahead of time.
#[derive(Clone, Debug)]
pub struct PreauthenticatedContext(Option<String>);
impl PreauthenticatedContext {
	/// Wraps a verified identity string.
	pub fn new(identity: impl Into<String>) -> Self {
		Self(Some(identity.into()))
	}

	/// Context for requests that carry no authenticated caller.
	pub fn anonymous() -> Self {
		Self(None)
	}
}
impl AuthenticationContext for PreauthenticatedContext {
	fn identity(&self) -> Option<&str> {
		self.0.as_deref()
	}
}
