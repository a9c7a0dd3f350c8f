//! Optional observability helpers for entitlement and issuance decisions.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `embed_warden.decision` with the `decision`
//!   (kind) and `stage` (call site) fields, plus audit events on the `embed_warden::audit`
//!   target carrying identity, tenant, and outcome for every decision.
//! - Enable `metrics` to increment the `embed_warden_decision_total` counter for every
//!   attempt/granted/denied/failure, labeled by `decision` + `outcome`.
//!
//! Neither feature ever records the signing secret or a credential body; the redaction wrappers
//! in [`crate::token`] keep those out of formatted output by default.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Decision kinds observed by the warden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecisionKind {
	/// Entitlement check gating access to a tenant.
	Entitlement,
	/// Credential issuance for an approved entitlement.
	Issuance,
}
impl DecisionKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			DecisionKind::Entitlement => "entitlement",
			DecisionKind::Issuance => "issuance",
		}
	}
}
impl Display for DecisionKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each decision.
///
/// Denials are a first-class outcome, not a failure: every denied request must remain
/// auditable without being an error in the operational sense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecisionOutcome {
	/// Entry to a warden helper.
	Attempt,
	/// Access approved or credential minted.
	Granted,
	/// Access denied to the caller.
	Denied,
	/// Internal failure propagated back to the caller.
	Failure,
}
impl DecisionOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			DecisionOutcome::Attempt => "attempt",
			DecisionOutcome::Granted => "granted",
			DecisionOutcome::Denied => "denied",
			DecisionOutcome::Failure => "failure",
		}
	}
}
impl Display for DecisionOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
