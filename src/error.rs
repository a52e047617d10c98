//! Registry-level error types shared across descriptors, lookups, and validation.

// self
use crate::{
	_prelude::*,
	endpoint::{EndpointDescriptorError, EndpointName, IdentifierError},
	validate::{ParamsError, ValidationError},
};

/// Registry-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical registry error exposed by public APIs.
///
/// None of the variants are transient; callers surface them verbatim instead of retrying.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem, fatal when raised while building the registry.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Caller parameters violate the descriptor's rule set.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Caller parameters could not be decoded.
	#[error(transparent)]
	Params(#[from] ParamsError),

	/// No descriptor is registered under the requested name.
	#[error("No endpoint is registered under `{name}`.")]
	NotFound {
		/// Name that was looked up.
		name: String,
	},
}
impl Error {
	/// Returns the validation failure carried by this error, if any.
	pub fn as_validation(&self) -> Option<&ValidationError> {
		match self {
			Self::Validation(e) => Some(e),
			_ => None,
		}
	}
}

/// Configuration failures raised while assembling descriptors or the registry.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ConfigError {
	/// Two descriptors share the same name.
	#[error("Endpoint `{name}` is registered more than once.")]
	DuplicateEndpoint {
		/// Name claimed by more than one descriptor.
		name: EndpointName,
	},
	/// A descriptor literal uses an invalid name.
	#[error("Endpoint name `{name}` is invalid.")]
	InvalidName {
		/// Rejected name.
		name: String,
		/// Identifier validation failure.
		#[source]
		source: IdentifierError,
	},
	/// A descriptor literal failed its invariant checks.
	#[error("Descriptor is invalid.")]
	InvalidDescriptor(#[from] EndpointDescriptorError),
}
