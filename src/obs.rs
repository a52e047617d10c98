//! Optional observability helpers for registry lookups and validation.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to emit spans named `api_registry.validate` with the `endpoint`
//!   field, plus debug events on registration and rejected validations.
//! - Enable `metrics` to increment the `api_registry_validation_total` counter for every
//!   validation, labeled by `endpoint` + `outcome`, and `api_registry_lookup_miss_total` for
//!   every unknown name.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationOutcome {
	/// Parameters satisfied every rule.
	Passed,
	/// At least one rule failed.
	Rejected,
}
impl ValidationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ValidationOutcome::Passed => "passed",
			ValidationOutcome::Rejected => "rejected",
		}
	}

	/// Derives the outcome from a validation result.
	pub fn of<T, E>(result: &Result<T, E>) -> Self {
		if result.is_ok() { ValidationOutcome::Passed } else { ValidationOutcome::Rejected }
	}
}
impl Display for ValidationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
