//! Directory lookup contracts and the built-in in-memory backend.
//!
//! The warden never owns principal or tenant records; it resolves them per request through
//! these seams and treats everything behind them as an external collaborator.

pub mod memory;

pub use memory::MemoryDirectory;

// self
use crate::{
	_prelude::*,
	directory::{Principal, Tenant, TenantId},
};

/// Future type returned by directory lookup contracts.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Lookup contract resolving authenticated identities into principal records.
pub trait PrincipalStore
where
	Self: Send + Sync,
{
	/// Resolves the verified identity string into a principal record, if one exists.
	fn find_by_identity<'a>(&'a self, identity: &'a str) -> StoreFuture<'a, Option<Principal>>;
}

/// Lookup contract resolving tenant identifiers into tenant records.
pub trait TenantStore
where
	Self: Send + Sync,
{
	/// Fetches the tenant record for the provided identifier, if one exists.
	fn find_by_id<'a>(&'a self, tenant: &'a TenantId) -> StoreFuture<'a, Option<Tenant>>;
}

/// Error type produced by directory store implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the directory engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
