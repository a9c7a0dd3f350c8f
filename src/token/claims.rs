//! Embed claim set structures and the pseudonymous guest subject.
//!
//! Claim content crosses a trust boundary: everything here is readable by the downstream
//! analytics consumer, so the subject carries a fingerprint of the principal identifier and
//! fixed display names—no email or profile material.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};
// self
use crate::{
	_prelude::*,
	directory::{DashboardId, PrincipalId, TenantId},
};

/// Fixed first name presented for every guest subject.
pub const GUEST_FIRST_NAME: &str = "Guest";
/// Fixed last name presented for every guest subject.
pub const GUEST_LAST_NAME: &str = "User";

const GUEST_USERNAME_PREFIX: &str = "guest-";

/// Token-type discriminator separating embed credentials from any other token class.
///
/// A credential minted for embedding deserializes only as `"guest"`; replaying it against an
/// endpoint expecting another token type fails verification outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
	/// Ephemeral guest credential consumed by the embedded dashboard.
	#[serde(rename = "guest")]
	Guest,
}

/// Resource classes addressable by an embed credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
	/// A downstream dashboard.
	Dashboard,
}
impl ResourceKind {
	/// Returns the wire label for the resource class.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResourceKind::Dashboard => "dashboard",
		}
	}
}
impl Display for ResourceKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Pseudonymous subject forwarded to the downstream consumer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSubject {
	/// Stable, non-guessable guest username derived from the principal identifier.
	pub username: String,
	/// Fixed display first name.
	pub first_name: String,
	/// Fixed display last name.
	pub last_name: String,
}
impl GuestSubject {
	/// Derives the guest subject for a principal.
	///
	/// The username is `guest-` plus a URL-safe base64 (no padding) SHA-256 fingerprint of the
	/// principal identifier. The same principal always maps to the same guest; the fingerprint
	/// reveals nothing about the underlying record.
	pub fn for_principal(principal: &PrincipalId) -> Self {
		Self {
			username: format!("{GUEST_USERNAME_PREFIX}{}", fingerprint(principal.as_ref())),
			first_name: GUEST_FIRST_NAME.into(),
			last_name: GUEST_LAST_NAME.into(),
		}
	}
}

/// Resource descriptor naming the embedded dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceClaim {
	/// Resource class.
	#[serde(rename = "type")]
	pub kind: ResourceKind,
	/// Opaque resource identifier; always configuration-supplied.
	pub id: DashboardId,
}
impl ResourceClaim {
	/// Builds the descriptor for the configured dashboard.
	pub fn dashboard(id: &DashboardId) -> Self {
		Self { kind: ResourceKind::Dashboard, id: id.clone() }
	}
}

/// Row-level filter clause binding downstream queries to one tenant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowLevelFilter {
	/// SQL-shaped clause evaluated by the downstream consumer.
	pub clause: String,
	/// Downstream dataset the clause applies to.
	pub dataset: u32,
}
impl RowLevelFilter {
	/// Binds `<column> = '<tenant>'` for the provided dataset.
	///
	/// The tenant identifier must come from an approved entitlement; identifier validation
	/// guarantees it cannot carry quoting characters into the clause.
	pub fn for_tenant(column: &str, tenant: &TenantId, dataset: u32) -> Self {
		Self { clause: format!("{column} = '{tenant}'"), dataset }
	}
}

/// Ephemeral claim set signed into an embed credential.
///
/// Constructed per request, serialized, signed, and discarded—never persisted and never looked
/// up again. Wire keys match what the downstream consumer expects: `user`, `resources`,
/// `rls_rules`, `iat`, `exp`, `aud`, `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedClaims {
	/// Pseudonymous guest subject.
	pub user: GuestSubject,
	/// Resources the guest may access; exactly one dashboard descriptor.
	pub resources: Vec<ResourceClaim>,
	/// Row-level filters; exactly one tenant-scoping clause.
	pub rls_rules: Vec<RowLevelFilter>,
	/// Issued-at instant in unix seconds.
	#[serde(with = "time::serde::timestamp")]
	pub iat: OffsetDateTime,
	/// Expiry instant in unix seconds; always `iat` plus the configured TTL.
	#[serde(with = "time::serde::timestamp")]
	pub exp: OffsetDateTime,
	/// Audience naming the downstream consumer.
	pub aud: String,
	/// Token-type discriminator.
	#[serde(rename = "type")]
	pub kind: TokenKind,
}

fn fingerprint(view: &str) -> String {
	let mut hasher = Sha256::new();

	hasher.update(view.as_bytes());

	URL_SAFE_NO_PAD.encode(hasher.finalize())
}
