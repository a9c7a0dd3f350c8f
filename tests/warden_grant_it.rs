// std
use std::sync::Arc;
// crates.io
use serde_json::Value;
// self
use embed_warden::{
	config::EmbedConfig,
	directory::{
		DashboardId, Principal, PrincipalId, PrincipalRole, Tenant, TenantCategory, TenantId,
		TenantStatus,
	},
	error::Error,
	ext::PreauthenticatedContext,
	store::{MemoryDirectory, PrincipalStore, TenantStore},
	warden::Warden,
};

fn tenant_id(value: &str) -> TenantId {
	TenantId::new(value).expect("Tenant fixture should be valid.")
}

fn build_warden() -> Warden {
	let dashboard = DashboardId::new("938de2fd-883a-4107-86a9-d5a030e1209f")
		.expect("Dashboard fixture should be valid.");
	let config = EmbedConfig::builder("test-signing-secret", dashboard)
		.build()
		.expect("Test embed configuration should build.");
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
		TenantCategory::Wholesaler,
		TenantStatus::Approved,
	));
	directory.insert_principal(
		"u1@example.test",
		Principal::new(
			PrincipalId::new("u1").expect("Principal fixture should be valid."),
			PrincipalRole::Viewer,
		)
		.with_membership(tenant_id("b1")),
	);

	let principals: Arc<dyn PrincipalStore> = Arc::new(directory.clone());
	let tenants: Arc<dyn TenantStore> = Arc::new(directory);

	Warden::new(principals, tenants, Arc::new(config))
}

#[tokio::test]
async fn grant_returns_the_wire_token_shape() {
	let warden = build_warden();
	let context = PreauthenticatedContext::new("u1@example.test");
	let response = warden
		.grant(&context, &tenant_id("b1"))
		.await
		.expect("Entitled request should receive a credential.");
	let value = serde_json::to_value(&response).expect("Response DTO should serialize.");
	let object = value.as_object().expect("Response DTO should be an object.");

	assert_eq!(object.len(), 1, "The response body carries the token and nothing else.");

	let token = object
		.get("token")
		.and_then(Value::as_str)
		.expect("Response DTO should expose a `token` string.");

	assert_eq!(token.split('.').count(), 3, "Credential should be a compact JWS.");
	assert_eq!(token, response.token.expose());
}

#[tokio::test]
async fn grant_denies_tenants_outside_the_membership_set() {
	let warden = build_warden();
	let context = PreauthenticatedContext::new("u1@example.test");
	let error = warden
		.grant(&context, &tenant_id("b2"))
		.await
		.expect_err("A tenant outside the membership set must be denied.");

	assert!(matches!(error, Error::Denied));
	assert_eq!(error.http_status(), 403);
}

#[tokio::test]
async fn grant_requires_an_authenticated_context() {
	let warden = build_warden();
	let error = warden
		.grant(&PreauthenticatedContext::anonymous(), &tenant_id("b1"))
		.await
		.expect_err("An anonymous request must not reach the entitlement check.");

	assert!(matches!(error, Error::Unauthenticated));
	assert_eq!(error.http_status(), 401);
}

#[tokio::test]
async fn response_debug_output_redacts_the_credential() {
	let warden = build_warden();
	let context = PreauthenticatedContext::new("u1@example.test");
	let response = warden
		.grant(&context, &tenant_id("b1"))
		.await
		.expect("Entitled request should receive a credential.");
	let rendered = format!("{response:?}");

	assert!(rendered.contains("<redacted>"));
	assert!(!rendered.contains(response.token.expose()));
}

#[tokio::test]
async fn issued_credential_verifies_against_the_same_configuration() {
	let warden = build_warden();
	let context = PreauthenticatedContext::new("u1@example.test");
	let response = warden
		.grant(&context, &tenant_id("b1"))
		.await
		.expect("Entitled request should receive a credential.");
	let claims =
		warden.issuer.verify(&response.token).expect("Fresh credential should verify.");

	assert_eq!(claims.rls_rules[0].clause, "brand_id = 'b1'");
	assert_eq!(claims.resources[0].id.as_ref(), "938de2fd-883a-4107-86a9-d5a030e1209f");
}
