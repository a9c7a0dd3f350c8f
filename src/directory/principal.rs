//! Principal records resolved through the directory seam.

// self
use crate::{
	_prelude::*,
	directory::{PrincipalId, TenantId},
};

/// Role assigned to a principal. A flat set with no hierarchy; roles never widen entitlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrincipalRole {
	/// Administrative user of the tenant portal.
	Admin,
	/// Brand manager.
	Manager,
	/// Day-to-day operator.
	Operator,
	/// Read-only viewer.
	Viewer,
	/// Analytics-focused user.
	Analyst,
}
impl PrincipalRole {
	/// Returns the wire label used by the directory backend.
	pub const fn as_str(self) -> &'static str {
		match self {
			PrincipalRole::Admin => "ADMIN",
			PrincipalRole::Manager => "MANAGER",
			PrincipalRole::Operator => "OPERATOR",
			PrincipalRole::Viewer => "VIEWER",
			PrincipalRole::Analyst => "ANALYST",
		}
	}
}
impl Display for PrincipalRole {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Directory record describing an authenticated caller.
///
/// Onboarding guarantees an enabled principal holds at least one tenant membership; the warden
/// does not re-check that invariant, it only ever narrows access. A principal that is inactive
/// or deleted never receives a credential regardless of memberships.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
	/// Stable principal identifier.
	pub id: PrincipalId,
	/// Role assigned by the tenant portal.
	pub role: PrincipalRole,
	/// Tenants this principal belongs to.
	pub memberships: Vec<TenantId>,
	/// Whether the account is currently active.
	pub active: bool,
	/// Whether the account has been soft-deleted.
	pub deleted: bool,
}
impl Principal {
	/// Creates an active, non-deleted principal with no memberships.
	pub fn new(id: PrincipalId, role: PrincipalRole) -> Self {
		Self { id, role, memberships: Vec::new(), active: true, deleted: false }
	}

	/// Appends a tenant membership.
	pub fn with_membership(mut self, tenant: TenantId) -> Self {
		self.memberships.push(tenant);

		self
	}

	/// Overrides the active flag.
	pub fn with_active(mut self, active: bool) -> Self {
		self.active = active;

		self
	}

	/// Overrides the deleted flag.
	pub fn with_deleted(mut self, deleted: bool) -> Self {
		self.deleted = deleted;

		self
	}

	/// Returns `true` while the account is active and not deleted.
	pub fn is_enabled(&self) -> bool {
		self.active && !self.deleted
	}

	/// Returns `true` if the principal belongs to the provided tenant.
	pub fn is_member_of(&self, tenant: &TenantId) -> bool {
		self.memberships.contains(tenant)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn fixture() -> Principal {
		let id = PrincipalId::new("u1").expect("Principal fixture should be valid.");
		let tenant = TenantId::new("b1").expect("Tenant fixture should be valid.");

		Principal::new(id, PrincipalRole::Viewer).with_membership(tenant)
	}

	#[test]
	fn enablement_requires_active_and_not_deleted() {
		assert!(fixture().is_enabled());
		assert!(!fixture().with_active(false).is_enabled());
		assert!(!fixture().with_deleted(true).is_enabled());
		assert!(!fixture().with_active(false).with_deleted(true).is_enabled());
	}

	#[test]
	fn membership_checks_exact_tenant() {
		let principal = fixture();
		let member = TenantId::new("b1").expect("Member tenant fixture should be valid.");
		let other = TenantId::new("b2").expect("Other tenant fixture should be valid.");

		assert!(principal.is_member_of(&member));
		assert!(!principal.is_member_of(&other));
	}

	#[test]
	fn roles_use_directory_wire_labels() {
		let payload = serde_json::to_string(&PrincipalRole::Analyst)
			.expect("Role should serialize to JSON.");

		assert_eq!(payload, "\"ANALYST\"");

		let round_trip: PrincipalRole =
			serde_json::from_str("\"OPERATOR\"").expect("Role should deserialize from JSON.");

		assert_eq!(round_trip, PrincipalRole::Operator);
		assert_eq!(PrincipalRole::Admin.to_string(), "ADMIN");
	}
}
