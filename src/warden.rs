//! Warden facade wiring entitlement checks and credential issuance together.

// self
use crate::{
	_prelude::*,
	config::EmbedConfig,
	directory::TenantId,
	entitlement::EntitlementChecker,
	ext::AuthenticationContext,
	store::{PrincipalStore, TenantStore},
	token::{CredentialIssuer, SignedCredential},
};

/// Wire response handed back to the embedding client.
#[derive(Clone, Debug, Serialize)]
pub struct EmbedTokenResponse {
	/// Signed embed credential to forward to the embedding client.
	pub token: SignedCredential,
}

/// Coordinates the resolve → authorize → issue pipeline behind one constructor.
///
/// The warden owns the directory seams and the immutable configuration so the HTTP layer only
/// has to thread the authentication context and the requested tenant identifier through
/// [`Warden::grant`].
#[derive(Clone)]
pub struct Warden {
	/// Entitlement checker consulted before any credential is minted.
	pub checker: EntitlementChecker,
	/// Credential issuer producing signed guest tokens.
	pub issuer: CredentialIssuer,
	/// Immutable embed configuration shared across components.
	pub config: Arc<EmbedConfig>,
}
impl Warden {
	/// Creates a warden from the directory seams and startup configuration.
	pub fn new(
		principals: Arc<dyn PrincipalStore>,
		tenants: Arc<dyn TenantStore>,
		config: Arc<EmbedConfig>,
	) -> Self {
		Self {
			checker: EntitlementChecker::new(principals, tenants),
			issuer: CredentialIssuer::new(config.clone()),
			config,
		}
	}

	/// Runs the full pipeline for the current request.
	///
	/// The tenant identifier minted into the credential is the one carried by the approved
	/// entitlement—the raw request parameter is never read again after the check.
	pub async fn grant(
		&self,
		context: &dyn AuthenticationContext,
		tenant_id: &TenantId,
	) -> Result<EmbedTokenResponse> {
		let identity = context.identity().ok_or(Error::Unauthenticated)?;
		let entitlement = self.checker.authorize(identity, tenant_id).await?;
		let token = self.issuer.issue(&entitlement)?;

		Ok(EmbedTokenResponse { token })
	}
}
impl Debug for Warden {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Warden").field("config", &self.config).finish()
	}
}
