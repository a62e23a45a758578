// self
use crate::obs::{ResolveOutcome, SourceKind};

/// Records a source-attempt outcome via the global metrics recorder (when enabled).
pub fn record_resolve_outcome(kind: SourceKind, outcome: ResolveOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_resolver_resolve_total",
			"source" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
