// self
use crate::obs::{Stage, StageOutcome};

/// Records a stage outcome via the global metrics recorder (when enabled).
pub fn record_stage_outcome(stage: Stage, outcome: StageOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"credential_bootstrap_stage_total",
			"stage" => stage.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (stage, outcome);
	}
}
