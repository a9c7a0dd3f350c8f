//! Redaction wrappers keeping key material and issued credentials out of logs.

// self
use crate::_prelude::*;

/// Server-held HMAC key material used to sign embed credentials.
///
/// Deliberately not serializable: the secret is startup configuration and never round-trips
/// through serialization or formatting.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret(String);
impl SigningSecret {
	/// Wraps the secret string loaded from configuration.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner key material. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl Debug for SigningSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SigningSecret").field(&"<redacted>").finish()
	}
}
impl Display for SigningSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// An issued embed credential in compact JWS form (`header.payload.signature`).
///
/// Serializes as the raw token string so response DTOs can emit it directly; `Debug` and
/// `Display` stay redacted so credentials never land in logs verbatim.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignedCredential(String);
impl SignedCredential {
	/// Wraps a compact JWS string, either freshly minted or received for verification.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for SignedCredential {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for SignedCredential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SignedCredential").field(&"<redacted>").finish()
	}
}
impl Display for SignedCredential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let secret = SigningSecret::new("super-secret");

		assert_eq!(format!("{secret:?}"), "SigningSecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
	}

	#[test]
	fn credential_formatters_redact_but_serialization_does_not() {
		let credential = SignedCredential::new("aaa.bbb.ccc");

		assert_eq!(format!("{credential:?}"), "SignedCredential(\"<redacted>\")");
		assert_eq!(format!("{credential}"), "<redacted>");

		let payload =
			serde_json::to_string(&credential).expect("Credential should serialize to JSON.");

		assert_eq!(payload, "\"aaa.bbb.ccc\"");
	}
}
