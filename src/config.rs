//! Immutable embed configuration constructed once at process start.
//!
//! [`EmbedConfig::builder`] is the fail-fast point for every server-side setting: a missing or
//! empty secret, an out-of-range TTL, or a malformed tenant column is rejected here instead of
//! per request. The built value is shared by reference and never mutated afterwards.

// self
use crate::{_prelude::*, directory::DashboardId, token::SigningSecret};

/// Default credential lifetime in seconds; long enough for one embedding session.
pub const DEFAULT_TTL_SECS: i64 = 300;
/// Default audience naming the downstream analytics consumer.
pub const DEFAULT_AUDIENCE: &str = "superset";
/// Default tenant-scoping column referenced by row-level filters.
pub const DEFAULT_TENANT_COLUMN: &str = "brand_id";
/// Default downstream dataset identifier targeted by row-level filters.
pub const DEFAULT_DATASET: u32 = 1;

const MAX_TTL: Duration = Duration::hours(24);

/// Errors raised while constructing or validating the embed configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum EmbedConfigError {
	/// The signing secret was empty or whitespace-only.
	#[error("Signing secret must not be empty.")]
	EmptySigningSecret,
	/// The TTL was zero or negative.
	#[error("Credential TTL must be positive.")]
	NonPositiveTtl,
	/// The TTL exceeded the supported range.
	#[error("Credential TTL exceeds the supported range.")]
	TtlOutOfRange,
	/// The audience string was empty.
	#[error("Audience must not be empty.")]
	EmptyAudience,
	/// The tenant column contained characters outside `[A-Za-z0-9_]`.
	#[error("Tenant column `{column}` is not a valid column name.")]
	InvalidTenantColumn {
		/// Column name that failed validation.
		column: String,
	},
	/// The dataset identifier was zero.
	#[error("Dataset identifier must be non-zero.")]
	ZeroDataset,
	/// The portal base URL cannot carry path segments.
	#[error("Portal base URL `{url}` cannot be used as a base.")]
	InvalidPortalUrl {
		/// URL that failed validation.
		url: String,
	},
}

/// Immutable configuration for entitlement checks and credential issuance.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbedConfig {
	/// Server-held HMAC secret; redacted in all formatting.
	pub signing_secret: SigningSecret,
	/// Opaque identifier of the embedded dashboard; never supplied by callers.
	pub dashboard_id: DashboardId,
	/// Credential lifetime applied to every issued token.
	pub ttl: Duration,
	/// Audience claim naming the downstream consumer.
	pub audience: String,
	/// Tenant-scoping column referenced by row-level filters.
	pub tenant_column: String,
	/// Downstream dataset identifier targeted by row-level filters.
	pub dataset: u32,
	/// Optional analytics portal base URL for embed-URL assembly.
	pub portal_base_url: Option<Url>,
}
impl EmbedConfig {
	/// Returns a builder seeded with the two settings that have no sensible default.
	pub fn builder(
		signing_secret: impl Into<String>,
		dashboard_id: DashboardId,
	) -> EmbedConfigBuilder {
		EmbedConfigBuilder {
			signing_secret: signing_secret.into(),
			dashboard_id,
			ttl: Duration::seconds(DEFAULT_TTL_SECS),
			audience: DEFAULT_AUDIENCE.into(),
			tenant_column: DEFAULT_TENANT_COLUMN.into(),
			dataset: DEFAULT_DATASET,
			portal_base_url: None,
		}
	}

	/// Joins `embedded/<dashboard-id>` onto the portal base URL, when one is configured.
	pub fn embed_url(&self) -> Option<Url> {
		let mut url = self.portal_base_url.clone()?;

		if let Ok(mut segments) = url.path_segments_mut() {
			segments.pop_if_empty().extend(["embedded", self.dashboard_id.as_ref()]);
		}

		Some(url)
	}
}

/// Builder for [`EmbedConfig`] values.
#[derive(Debug)]
pub struct EmbedConfigBuilder {
	/// Server-held HMAC secret material.
	signing_secret: String,
	/// Opaque identifier of the embedded dashboard.
	pub dashboard_id: DashboardId,
	/// Credential lifetime; defaults to [`DEFAULT_TTL_SECS`].
	pub ttl: Duration,
	/// Audience claim; defaults to [`DEFAULT_AUDIENCE`].
	pub audience: String,
	/// Tenant-scoping column; defaults to [`DEFAULT_TENANT_COLUMN`].
	pub tenant_column: String,
	/// Downstream dataset identifier; defaults to [`DEFAULT_DATASET`].
	pub dataset: u32,
	/// Optional analytics portal base URL.
	pub portal_base_url: Option<Url>,
}
impl EmbedConfigBuilder {
	/// Overrides the credential TTL.
	pub fn ttl(mut self, ttl: Duration) -> Self {
		self.ttl = ttl;

		self
	}

	/// Overrides the audience claim.
	pub fn audience(mut self, audience: impl Into<String>) -> Self {
		self.audience = audience.into();

		self
	}

	/// Overrides the tenant-scoping column.
	pub fn tenant_column(mut self, column: impl Into<String>) -> Self {
		self.tenant_column = column.into();

		self
	}

	/// Overrides the downstream dataset identifier.
	pub fn dataset(mut self, dataset: u32) -> Self {
		self.dataset = dataset;

		self
	}

	/// Sets the analytics portal base URL used for embed-URL assembly.
	pub fn portal_base_url(mut self, url: Url) -> Self {
		self.portal_base_url = Some(url);

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<EmbedConfig, EmbedConfigError> {
		if self.signing_secret.trim().is_empty() {
			return Err(EmbedConfigError::EmptySigningSecret);
		}
		if !self.ttl.is_positive() {
			return Err(EmbedConfigError::NonPositiveTtl);
		}
		if self.ttl > MAX_TTL {
			return Err(EmbedConfigError::TtlOutOfRange);
		}
		if self.audience.trim().is_empty() {
			return Err(EmbedConfigError::EmptyAudience);
		}
		if self.tenant_column.is_empty()
			|| self.tenant_column.chars().any(|c| !c.is_ascii_alphanumeric() && c != '_')
		{
			return Err(EmbedConfigError::InvalidTenantColumn { column: self.tenant_column });
		}
		if self.dataset == 0 {
			return Err(EmbedConfigError::ZeroDataset);
		}
		if let Some(url) = self.portal_base_url.as_ref()
			&& url.cannot_be_a_base()
		{
			return Err(EmbedConfigError::InvalidPortalUrl { url: url.to_string() });
		}

		Ok(EmbedConfig {
			signing_secret: SigningSecret::new(self.signing_secret),
			dashboard_id: self.dashboard_id,
			ttl: self.ttl,
			audience: self.audience,
			tenant_column: self.tenant_column,
			dataset: self.dataset,
			portal_base_url: self.portal_base_url,
		})
	}
}
