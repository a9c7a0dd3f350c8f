// self
use crate::obs::{DecisionKind, DecisionOutcome};

/// Records a decision outcome via the global metrics recorder (when enabled).
pub fn record_decision_outcome(kind: DecisionKind, outcome: DecisionOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"embed_warden_decision_total",
			"decision" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
