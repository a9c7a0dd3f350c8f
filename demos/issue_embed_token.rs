//! Demonstrates minting a tenant-scoped embed credential against the in-memory directory and
//! assembling the portal embed URL.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
// self
use embed_warden::{
	config::EmbedConfig,
	directory::{
		DashboardId, Principal, PrincipalId, PrincipalRole, Tenant, TenantCategory, TenantId,
		TenantStatus,
	},
	ext::PreauthenticatedContext,
	store::{MemoryDirectory, PrincipalStore, TenantStore},
	url::Url,
	warden::Warden,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let config = Arc::new(
		EmbedConfig::builder(
			"demo-signing-secret",
			DashboardId::new("938de2fd-883a-4107-86a9-d5a030e1209f")?,
		)
		.portal_base_url(Url::parse("http://localhost:8088")?)
		.build()?,
	);
	let directory = MemoryDirectory::default();

	directory.insert_tenant(Tenant::new(
		TenantId::new("b1")?,
		"Acme Retail",
		TenantCategory::Retailer,
		TenantStatus::Approved,
	));
	directory.insert_principal(
		"analyst@acme.test",
		Principal::new(PrincipalId::new("u1")?, PrincipalRole::Analyst)
			.with_membership(TenantId::new("b1")?),
	);

	let principals: Arc<dyn PrincipalStore> = Arc::new(directory.clone());
	let tenants: Arc<dyn TenantStore> = Arc::new(directory);
	let warden = Warden::new(principals, tenants, config.clone());
	let context = PreauthenticatedContext::new("analyst@acme.test");
	let response = warden.grant(&context, &TenantId::new("b1")?).await?;

	println!("guest token: {}", response.token.expose());

	if let Some(url) = config.embed_url() {
		println!("embed url: {url}");
	}

	Ok(())
}
