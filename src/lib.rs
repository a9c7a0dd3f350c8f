//! Tenant-scoped embed credentials—entitlement checks, signed guest tokens, and
//! bring-your-own directory seams in one crate built for embedded analytics.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod directory;
pub mod entitlement;
pub mod error;
pub mod ext;
pub mod obs;
pub mod store;
pub mod token;
pub mod warden;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and fixtures for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		config::EmbedConfig,
		directory::{
			DashboardId, Principal, PrincipalId, PrincipalRole, Tenant, TenantCategory, TenantId,
			TenantStatus,
		},
		store::{MemoryDirectory, PrincipalStore, TenantStore},
		warden::Warden,
	};

	/// Signing secret shared by test fixtures.
	pub const TEST_SECRET: &str = "test-signing-secret";
	/// Dashboard identifier shared by test fixtures.
	pub const TEST_DASHBOARD: &str = "938de2fd-883a-4107-86a9-d5a030e1209f";

	/// Builds the embed configuration used across integration tests (defaults everywhere).
	pub fn test_config() -> Arc<EmbedConfig> {
		let dashboard =
			DashboardId::new(TEST_DASHBOARD).expect("Dashboard fixture should be valid.");
		let config = EmbedConfig::builder(TEST_SECRET, dashboard)
			.build()
			.expect("Test embed configuration should build.");

		Arc::new(config)
	}

	/// Parses a tenant identifier fixture.
	pub fn tenant_id(value: &str) -> TenantId {
		TenantId::new(value).expect("Tenant fixture should be valid.")
	}

	/// Parses a principal identifier fixture.
	pub fn principal_id(value: &str) -> PrincipalId {
		PrincipalId::new(value).expect("Principal fixture should be valid.")
	}

	/// Seeds a directory with one entitled principal plus records covering every deny path.
	pub fn seeded_directory() -> MemoryDirectory {
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
			TenantCategory::Distributor,
			TenantStatus::Pending,
		));
		directory.insert_principal(
			"u1@example.test",
			Principal::new(principal_id("u1"), PrincipalRole::Viewer)
				.with_membership(tenant_id("b1")),
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

	/// Constructs a [`Warden`] backed by the seeded in-memory directory.
	pub fn build_test_warden() -> (Warden, MemoryDirectory) {
		let directory = seeded_directory();
		let principals: Arc<dyn PrincipalStore> = Arc::new(directory.clone());
		let tenants: Arc<dyn TenantStore> = Arc::new(directory.clone());
		let warden = Warden::new(principals, tenants, test_config());

		(warden, directory)
	}
}

mod _prelude {
	pub use std::{
		collections::HashMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use jsonwebtoken;
pub use url;
#[cfg(test)] use {color_eyre as _, serde_json as _, tokio as _};
