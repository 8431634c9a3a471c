// self
use crate::{_prelude::*, obs::Stage};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedStage<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedStage<F> = F;

/// A span builder used by bootstrap stages.
#[derive(Clone, Debug)]
pub struct StageSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl StageSpan {
	/// Creates a new span tagged with the provided stage + app name.
	pub fn new(stage: Stage, app: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("credential_bootstrap.stage", stage = stage.as_str(), app);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (stage, app);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedStage<Fut>
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

	/// Records a failure event inside the span.
	pub fn failed(&self, error: &Error) {
		#[cfg(feature = "tracing")]
		{
			self.span.in_scope(|| tracing::warn!(%error, "bootstrap stage failed"));
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = error;
		}
	}
}

/// Emits a debug event naming the configuration source about to be read.
pub fn record_source(app: &str, source: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(app, source, "loading credential document");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (app, source);
	}
}

/// Emits the startup event once a client handle exists.
pub fn record_initialized(app: &str, project_id: &str, client_email: &str, key_fingerprint: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::info!(app, project_id, client_email, key_fingerprint, "client handle initialized");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (app, project_id, client_email, key_fingerprint);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::TokenError;

	#[test]
	fn stage_span_reports_failures_without_panicking() {
		let span = StageSpan::new(Stage::Validate, "[DEFAULT]");

		span.failed(&Error::from(TokenError::MissingAccessToken));
	}

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = StageSpan::new(Stage::Load, "instrument_wraps_future");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
