//! Warden-level error types shared across entitlement, issuance, and directory seams.

// self
use crate::_prelude::*;

/// Warden-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical warden error exposed by public APIs.
///
/// Every deny path collapses into the field-less [`Error::Denied`] variant, so the error value
/// carries nothing a caller could use to tell an unknown tenant apart from an unentitled one.
#[derive(Debug, ThisError)]
pub enum Error {
	/// No principal could be resolved for the request identity.
	#[error("Request is not authenticated.")]
	Unauthenticated,
	/// Authenticated but not entitled to the requested tenant, or the tenant is unknown.
	#[error("Access to the requested tenant is denied.")]
	Denied,
	/// Directory-layer failure.
	#[error("{0}")]
	Store(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] crate::config::EmbedConfigError),
	/// Claim serialization or signing defect.
	#[error(transparent)]
	Encoding(#[from] EncodingError),
}
impl Error {
	/// Maps the error taxonomy onto an HTTP status code for transport layers.
	///
	/// `Denied` always maps to 403—never 404—so responses cannot leak whether a tenant exists.
	pub const fn http_status(&self) -> u16 {
		match self {
			Error::Unauthenticated => 401,
			Error::Denied => 403,
			Error::Store(_) | Error::Config(_) | Error::Encoding(_) => 500,
		}
	}
}

/// Claim-serialization or signing failure raised while minting credentials.
///
/// Well-typed claims always serialize, so hitting this signals a programming defect rather than
/// a caller mistake.
#[derive(Debug, ThisError)]
#[error("Failed to encode the embed claim set.")]
pub struct EncodingError(#[from] jsonwebtoken::errors::Error);

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::store::StoreError;

	#[test]
	fn http_status_covers_the_taxonomy() {
		assert_eq!(Error::Unauthenticated.http_status(), 401);
		assert_eq!(Error::Denied.http_status(), 403);
		assert_eq!(
			Error::Store(StoreError::Backend { message: "database unreachable".into() })
				.http_status(),
			500
		);
	}

	#[test]
	fn denied_reveals_nothing_about_the_tenant() {
		let rendered = Error::Denied.to_string();

		assert_eq!(rendered, "Access to the requested tenant is denied.");
		assert!(!rendered.contains("not found"));
	}

	#[test]
	fn store_error_converts_with_source() {
		let store_error = StoreError::Backend { message: "database unreachable".into() };
		let error: Error = store_error.clone().into();

		assert!(matches!(error, Error::Store(_)));
		assert!(error.to_string().contains("database unreachable"));

		let source = std::error::Error::source(&error)
			.expect("Warden error should expose the original store error as its source.");

		assert_eq!(source.to_string(), store_error.to_string());
	}
}
