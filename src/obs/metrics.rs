// self
use crate::obs::ValidationOutcome;

/// Records a validation outcome via the global metrics recorder (when enabled).
pub fn record_validation_outcome(endpoint: &str, outcome: ValidationOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"api_registry_validation_total",
			"endpoint" => endpoint.to_owned(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (endpoint, outcome);
	}
}

/// Records a lookup of an unregistered name (when enabled).
pub fn record_lookup_miss() {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("api_registry_lookup_miss_total").increment(1);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recorders_noop_without_metrics() {
		record_validation_outcome("statuses/update", ValidationOutcome::Rejected);
		record_lookup_miss();
	}
}
