//! Credential issuance and verification over the embed claim set.

// crates.io
use jsonwebtoken::{
	Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
// self
use crate::{
	_prelude::*,
	config::EmbedConfig,
	entitlement::Entitlement,
	error::EncodingError,
	obs::{self, DecisionKind, DecisionOutcome, DecisionSpan},
	token::{
		claims::{EmbedClaims, GuestSubject, ResourceClaim, RowLevelFilter, TokenKind},
		secret::SignedCredential,
	},
};

/// Error kinds surfaced by [`CredentialIssuer::verify`].
#[derive(Debug, ThisError)]
pub enum VerificationError {
	/// The credential's expiry instant has passed.
	#[error("Credential has expired.")]
	Expired,
	/// The signature does not match the configured secret.
	#[error("Credential signature is invalid.")]
	Signature,
	/// The audience claim does not name this consumer.
	#[error("Credential audience does not match.")]
	Audience,
	/// The credential is structurally invalid or carries a foreign token type.
	#[error("Credential is malformed.")]
	Malformed {
		/// Underlying decoding failure.
		#[source]
		source: jsonwebtoken::errors::Error,
	},
}

/// Mints and verifies signed embed credentials for approved entitlements.
///
/// Pure computation on the request path: no network calls, no shared mutable state, no side
/// effects beyond observability. The issuer accepts only [`Entitlement`] proofs, so the tenant
/// scoped into each credential is always the one the checker validated—never raw request input.
#[derive(Clone, Debug)]
pub struct CredentialIssuer {
	/// Immutable configuration shared with the rest of the warden.
	pub config: Arc<EmbedConfig>,
}
impl CredentialIssuer {
	/// Creates an issuer over the provided configuration.
	pub fn new(config: Arc<EmbedConfig>) -> Self {
		Self { config }
	}

	/// Mints a credential for an approved entitlement using the current clock.
	pub fn issue(&self, entitlement: &Entitlement) -> Result<SignedCredential> {
		self.issue_at(entitlement, OffsetDateTime::now_utc())
	}

	/// Mints a credential with an explicit issued-at instant.
	pub fn issue_at(
		&self,
		entitlement: &Entitlement,
		issued_at: OffsetDateTime,
	) -> Result<SignedCredential> {
		const KIND: DecisionKind = DecisionKind::Issuance;

		let _guard = DecisionSpan::new(KIND, "issue").entered();

		obs::record_decision_outcome(KIND, DecisionOutcome::Attempt);

		let result = self.sign(entitlement, issued_at);

		match &result {
			Ok(_) => {
				obs::audit_decision(
					entitlement.principal().as_ref(),
					entitlement.tenant().as_ref(),
					"issued",
				);
				obs::record_decision_outcome(KIND, DecisionOutcome::Granted);
			},
			Err(_) => obs::record_decision_outcome(KIND, DecisionOutcome::Failure),
		}

		result
	}

	/// Verifies a credential the way the downstream consumer does: signature, audience,
	/// expiry with zero leeway, and token type.
	pub fn verify(&self, credential: &SignedCredential) -> Result<EmbedClaims, VerificationError> {
		let mut validation = Validation::new(Algorithm::HS256);

		// A default leeway would blur the exact expiry boundary the issuer promises.
		validation.leeway = 0;
		validation.set_audience(&[self.config.audience.as_str()]);
		validation.set_required_spec_claims(&["exp", "aud"]);

		let key = DecodingKey::from_secret(self.config.signing_secret.expose().as_bytes());

		decode::<EmbedClaims>(credential.expose(), &key, &validation)
			.map(|data| data.claims)
			.map_err(|e| match e.kind() {
				ErrorKind::ExpiredSignature => VerificationError::Expired,
				ErrorKind::InvalidSignature => VerificationError::Signature,
				ErrorKind::InvalidAudience => VerificationError::Audience,
				_ => VerificationError::Malformed { source: e },
			})
	}

	fn sign(
		&self,
		entitlement: &Entitlement,
		issued_at: OffsetDateTime,
	) -> Result<SignedCredential> {
		// Truncate to whole seconds so `exp - iat` equals the configured TTL exactly on the wire.
		let issued_at = issued_at - Duration::nanoseconds(i64::from(issued_at.nanosecond()));
		let claims = EmbedClaims {
			user: GuestSubject::for_principal(entitlement.principal()),
			resources: vec![ResourceClaim::dashboard(&self.config.dashboard_id)],
			rls_rules: vec![RowLevelFilter::for_tenant(
				&self.config.tenant_column,
				entitlement.tenant(),
				self.config.dataset,
			)],
			iat: issued_at,
			exp: issued_at + self.config.ttl,
			aud: self.config.audience.clone(),
			kind: TokenKind::Guest,
		};
		let key = EncodingKey::from_secret(self.config.signing_secret.expose().as_bytes());
		let token =
			encode(&Header::new(Algorithm::HS256), &claims, &key).map_err(EncodingError::from)?;

		Ok(SignedCredential::new(token))
	}
}
