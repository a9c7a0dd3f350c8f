// self
use crate::{_prelude::*, obs::DecisionKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedDecision<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedDecision<F> = F;

/// A span builder used around entitlement and issuance decisions.
#[derive(Clone, Debug)]
pub struct DecisionSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl DecisionSpan {
	/// Creates a new span tagged with the provided decision kind + stage.
	pub fn new(kind: DecisionKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("embed_warden.decision", decision = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Enters the span for synchronous sections.
	pub fn entered(self) -> DecisionSpanGuard {
		#[cfg(feature = "tracing")]
		{
			DecisionSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			DecisionSpanGuard {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedDecision<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// RAII guard returned by [`DecisionSpan::entered`].
pub struct DecisionSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for DecisionSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("DecisionSpanGuard(..)")
	}
}

/// Emits a structured audit event for a decision (when tracing is enabled).
///
/// The outcome label carries the server-side deny cause; the error returned to the caller
/// never does.
pub fn audit_decision(identity: &str, tenant: &str, outcome: &'static str) {
	#[cfg(feature = "tracing")]
	{
		tracing::info!(target: "embed_warden::audit", identity, tenant, outcome, "embed decision");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (identity, tenant, outcome);
	}
}
