// std
use std::sync::Arc;
// self
use embed_warden::{
	directory::{
		Principal, PrincipalId, PrincipalRole, Tenant, TenantCategory, TenantId, TenantStatus,
	},
	entitlement::EntitlementChecker,
	error::Error,
	store::{MemoryDirectory, PrincipalStore, TenantStore},
};

fn tenant_id(value: &str) -> TenantId {
	TenantId::new(value).expect("Tenant fixture should be valid.")
}

fn principal_id(value: &str) -> PrincipalId {
	PrincipalId::new(value).expect("Principal fixture should be valid.")
}

fn seeded_directory() -> MemoryDirectory {
	let directory = MemoryDirectory::default();

	directory.insert_tenant(Tenant::new(
		tenant_id("b1"),
		"Brand One",
		TenantCategory::Retailer,
		TenantStatus::Approved,
	));
	directory.insert_tenant(Tenant::new(
		tenant_id("b2"),
		"Brand Two",
		TenantCategory::Manufacturer,
		TenantStatus::Approved,
	));
	directory.insert_tenant(Tenant::new(
		tenant_id("b3"),
		"Brand Three",
		TenantCategory::ECommerce,
		TenantStatus::Pending,
	));
	directory.insert_principal(
		"u1@example.test",
		Principal::new(principal_id("u1"), PrincipalRole::Viewer).with_membership(tenant_id("b1")),
	);
	directory.insert_principal(
		"inactive@example.test",
		Principal::new(principal_id("u2"), PrincipalRole::Manager)
			.with_membership(tenant_id("b1"))
			.with_active(false),
	);
	directory.insert_principal(
		"deleted@example.test",
		Principal::new(principal_id("u3"), PrincipalRole::Operator)
			.with_membership(tenant_id("b1"))
			.with_deleted(true),
	);
	directory.insert_principal(
		"pending-member@example.test",
		Principal::new(principal_id("u4"), PrincipalRole::Analyst)
			.with_membership(tenant_id("b3")),
	);

	directory
}

fn build_checker() -> EntitlementChecker {
	let directory = seeded_directory();
	let principals: Arc<dyn PrincipalStore> = Arc::new(directory.clone());
	let tenants: Arc<dyn TenantStore> = Arc::new(directory);

	EntitlementChecker::new(principals, tenants)
}

#[tokio::test]
async fn member_of_approved_tenant_is_allowed() {
	let checker = build_checker();
	let entitlement = checker
		.authorize("u1@example.test", &tenant_id("b1"))
		.await
		.expect("Member of an approved tenant should be entitled.");

	assert_eq!(entitlement.principal().as_ref(), "u1");
	assert_eq!(entitlement.tenant().as_ref(), "b1");
}

#[tokio::test]
async fn non_member_is_denied() {
	let checker = build_checker();
	let error = checker
		.authorize("u1@example.test", &tenant_id("b2"))
		.await
		.expect_err("Requesting a tenant outside the membership set must be denied.");

	assert!(matches!(error, Error::Denied));
	assert_eq!(error.http_status(), 403);
}

#[tokio::test]
async fn inactive_principal_is_denied_despite_membership() {
	let checker = build_checker();
	let error = checker
		.authorize("inactive@example.test", &tenant_id("b1"))
		.await
		.expect_err("An inactive principal must never be entitled.");

	assert!(matches!(error, Error::Denied));
}

#[tokio::test]
async fn deleted_principal_is_denied_despite_membership() {
	let checker = build_checker();
	let error = checker
		.authorize("deleted@example.test", &tenant_id("b1"))
		.await
		.expect_err("A deleted principal must never be entitled.");

	assert!(matches!(error, Error::Denied));
}

#[tokio::test]
async fn non_approved_tenant_is_denied_despite_membership() {
	let checker = build_checker();
	let error = checker
		.authorize("pending-member@example.test", &tenant_id("b3"))
		.await
		.expect_err("A pending tenant must not be embeddable.");

	assert!(matches!(error, Error::Denied));
}

#[tokio::test]
async fn unknown_tenant_is_indistinguishable_from_unentitled() {
	let checker = build_checker();
	let unknown = checker
		.authorize("u1@example.test", &tenant_id("no-such-tenant"))
		.await
		.expect_err("An unknown tenant must be denied.");
	let unentitled = checker
		.authorize("u1@example.test", &tenant_id("b2"))
		.await
		.expect_err("An unentitled tenant must be denied.");

	assert_eq!(unknown.to_string(), unentitled.to_string());
	assert_eq!(unknown.http_status(), unentitled.http_status());
	assert_eq!(unknown.http_status(), 403);
}

#[tokio::test]
async fn unresolvable_identity_is_unauthenticated() {
	let checker = build_checker();
	let error = checker
		.authorize("stranger@example.test", &tenant_id("b1"))
		.await
		.expect_err("An unknown identity must not resolve to a principal.");

	assert!(matches!(error, Error::Unauthenticated));
	assert_eq!(error.http_status(), 401);
}

#[tokio::test]
async fn authorize_is_idempotent() {
	let checker = build_checker();
	let first = checker
		.authorize("u1@example.test", &tenant_id("b1"))
		.await
		.expect("First check should be entitled.");
	let second = checker
		.authorize("u1@example.test", &tenant_id("b1"))
		.await
		.expect("Repeating the check must not consume anything.");

	assert_eq!(first.principal(), second.principal());
	assert_eq!(first.tenant(), second.tenant());
}
