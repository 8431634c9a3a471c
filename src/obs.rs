//! Optional observability helpers for the bootstrap sequence.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `credential_bootstrap.stage` with the `stage`
//!   and `app` fields, plus events for completed stages. Secret material is never recorded; the
//!   key fingerprint stands in for it.
//! - Enable `metrics` to increment the `credential_bootstrap_stage_total` counter for every
//!   attempt/success/failure, labeled by `stage` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Bootstrap stages observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
	/// Reading the document from the configuration provider.
	Load,
	/// Validating required credential fields.
	Validate,
	/// Handing the credential to the SDK's factory.
	Construct,
	/// Requesting an access token through the client handle.
	Token,
}
impl Stage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Stage::Load => "load",
			Stage::Validate => "validate",
			Stage::Construct => "construct",
			Stage::Token => "token",
		}
	}
}
impl Display for Stage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageOutcome {
	/// Entry to a stage.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl StageOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			StageOutcome::Attempt => "attempt",
			StageOutcome::Success => "success",
			StageOutcome::Failure => "failure",
		}
	}
}
impl Display for StageOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `fut` inside a stage span, recording attempt and outcome.
pub(crate) async fn observe<T, Fut>(stage: Stage, app: &str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = StageSpan::new(stage, app);

	record_stage_outcome(stage, StageOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(_) => record_stage_outcome(stage, StageOutcome::Success),
		Err(e) => {
			record_stage_outcome(stage, StageOutcome::Failure);
			span.failed(e);
		},
	}

	result
}
