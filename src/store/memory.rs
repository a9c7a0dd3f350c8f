//! Thread-safe in-memory directory backend for local development and tests.

// self
use crate::{
	_prelude::*,
	directory::{Principal, Tenant, TenantId},
	store::{PrincipalStore, StoreFuture, TenantStore},
};

type PrincipalMap = Arc<RwLock<HashMap<String, Principal>>>;
type TenantMap = Arc<RwLock<HashMap<TenantId, Tenant>>>;

/// Thread-safe directory backend that keeps records in-process for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryDirectory {
	principals: PrincipalMap,
	tenants: TenantMap,
}
impl MemoryDirectory {
	/// Registers a principal under the identity string the authentication layer produces.
	pub fn insert_principal(&self, identity: impl Into<String>, principal: Principal) {
		self.principals.write().insert(identity.into(), principal);
	}

	/// Registers a tenant record keyed by its identifier.
	pub fn insert_tenant(&self, tenant: Tenant) {
		self.tenants.write().insert(tenant.id.clone(), tenant);
	}

	fn principal_now(map: PrincipalMap, identity: String) -> Option<Principal> {
		map.read().get(&identity).cloned()
	}

	fn tenant_now(map: TenantMap, tenant: TenantId) -> Option<Tenant> {
		map.read().get(&tenant).cloned()
	}
}
impl PrincipalStore for MemoryDirectory {
	fn find_by_identity<'a>(&'a self, identity: &'a str) -> StoreFuture<'a, Option<Principal>> {
		let map = self.principals.clone();
		let identity = identity.to_owned();

		Box::pin(async move { Ok(Self::principal_now(map, identity)) })
	}
}
impl TenantStore for MemoryDirectory {
	fn find_by_id<'a>(&'a self, tenant: &'a TenantId) -> StoreFuture<'a, Option<Tenant>> {
		let map = self.tenants.clone();
		let tenant = tenant.to_owned();

		Box::pin(async move { Ok(Self::tenant_now(map, tenant)) })
	}
}
