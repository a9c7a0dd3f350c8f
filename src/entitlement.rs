//! Entitlement checks gating access to tenant-scoped embeds.
//!
//! The check is side-effect-free and idempotent: directory reads plus observability, nothing
//! else. Every deny path—disabled principal, missing membership, unknown tenant, non-approved
//! tenant—returns the identical [`Error::Denied`] value, so callers cannot probe which tenants
//! exist. The true cause is preserved in server-side audit events only.

// self
use crate::{
	_prelude::*,
	directory::{PrincipalId, TenantId},
	obs::{self, DecisionKind, DecisionOutcome, DecisionSpan},
	store::{PrincipalStore, TenantStore},
};

/// Proof that a principal passed the entitlement check for a tenant.
///
/// Only the checker can construct this value, and the issuer accepts nothing else: every
/// credential is scoped by a tenant identifier that went through the decision rule, never by
/// raw request input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entitlement {
	principal: PrincipalId,
	tenant: TenantId,
	decided_at: OffsetDateTime,
}
impl Entitlement {
	pub(crate) fn new(principal: PrincipalId, tenant: TenantId, decided_at: OffsetDateTime) -> Self {
		Self { principal, tenant, decided_at }
	}

	/// Returns the validated principal identifier.
	pub fn principal(&self) -> &PrincipalId {
		&self.principal
	}

	/// Returns the validated tenant identifier.
	pub fn tenant(&self) -> &TenantId {
		&self.tenant
	}

	/// Returns the instant the decision was made.
	pub fn decided_at(&self) -> OffsetDateTime {
		self.decided_at
	}
}

/// Deny causes recorded in server-side audit events only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DenyCause {
	Disabled,
	NotMember,
	UnknownTenant,
	NotApproved,
}
impl DenyCause {
	const fn as_str(self) -> &'static str {
		match self {
			DenyCause::Disabled => "denied_principal_disabled",
			DenyCause::NotMember => "denied_not_member",
			DenyCause::UnknownTenant => "denied_unknown_tenant",
			DenyCause::NotApproved => "denied_tenant_not_approved",
		}
	}
}

/// Decides whether a principal may access a tenant's embedded resource.
#[derive(Clone)]
pub struct EntitlementChecker {
	/// Directory seam resolving identities into principal records.
	pub principals: Arc<dyn PrincipalStore>,
	/// Directory seam resolving tenant identifiers into tenant records.
	pub tenants: Arc<dyn TenantStore>,
}
impl EntitlementChecker {
	/// Creates a checker over the provided directory seams.
	pub fn new(principals: Arc<dyn PrincipalStore>, tenants: Arc<dyn TenantStore>) -> Self {
		Self { principals, tenants }
	}

	/// Runs the decision rule for the authenticated identity and requested tenant.
	///
	/// Allowed iff the principal resolves, is active and not deleted, holds a membership for
	/// the tenant, and the tenant record exists with approved status. Membership is checked
	/// before the tenant lookup to skip a directory round-trip for non-members; the ordering is
	/// unobservable to callers because every deny returns the same error.
	pub async fn authorize(&self, identity: &str, tenant_id: &TenantId) -> Result<Entitlement> {
		const KIND: DecisionKind = DecisionKind::Entitlement;

		let span = DecisionSpan::new(KIND, "authorize");

		obs::record_decision_outcome(KIND, DecisionOutcome::Attempt);

		let result = span.instrument(self.decide(identity, tenant_id)).await;
		let outcome = match &result {
			Ok(_) => DecisionOutcome::Granted,
			Err(Error::Denied) => DecisionOutcome::Denied,
			Err(_) => DecisionOutcome::Failure,
		};

		obs::record_decision_outcome(KIND, outcome);

		result
	}

	async fn decide(&self, identity: &str, tenant_id: &TenantId) -> Result<Entitlement> {
		let Some(principal) = self.principals.find_by_identity(identity).await? else {
			return Err(Error::Unauthenticated);
		};

		if !principal.is_enabled() {
			return Err(deny(identity, tenant_id, DenyCause::Disabled));
		}
		if !principal.is_member_of(tenant_id) {
			return Err(deny(identity, tenant_id, DenyCause::NotMember));
		}

		let Some(tenant) = self.tenants.find_by_id(tenant_id).await? else {
			return Err(deny(identity, tenant_id, DenyCause::UnknownTenant));
		};

		if !tenant.is_embeddable() {
			return Err(deny(identity, tenant_id, DenyCause::NotApproved));
		}

		obs::audit_decision(identity, tenant_id.as_ref(), "allowed");

		Ok(Entitlement::new(principal.id, tenant.id, OffsetDateTime::now_utc()))
	}
}
impl Debug for EntitlementChecker {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("EntitlementChecker(..)")
	}
}

fn deny(identity: &str, tenant_id: &TenantId, cause: DenyCause) -> Error {
	obs::audit_decision(identity, tenant_id.as_ref(), cause.as_str());

	Error::Denied
}
