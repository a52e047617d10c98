//! Endpoint descriptor data structures and helpers shared by the registry and validator.
//!
//! A descriptor is immutable metadata about one remote operation: URL template, HTTP verb,
//! authentication requirement, accepted response formats, declared parameters, and the rule
//! set checked before dispatch.

/// Builder API for assembling endpoint descriptors.
pub mod builder;
/// Validated endpoint identifiers.
pub mod id;
/// Endpoint-specific metadata toggles.
pub mod quirks;
/// URL templates with unresolved placeholder tokens.
pub mod template;

pub use builder::*;
pub use id::*;
pub use quirks::*;
pub use template::*;

// self
use crate::{
	_prelude::*,
	validate::{self, Params, ValidationError, ValidationRule},
};

/// HTTP verbs used by registered endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
	#[default]
	/// Read-only retrieval.
	Get,
	/// State-changing submission.
	Post,
	/// Resource removal.
	Delete,
}
impl HttpMethod {
	/// Returns the canonical upper-case verb.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
			HttpMethod::Delete => "DELETE",
		}
	}

	/// Returns true for verbs that never change server state.
	pub const fn is_read(self) -> bool {
		matches!(self, HttpMethod::Get)
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for HttpMethod {
	type Err = UnknownTagError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"GET" => Ok(HttpMethod::Get),
			"POST" => Ok(HttpMethod::Post),
			"DELETE" => Ok(HttpMethod::Delete),
			_ => Err(UnknownTagError { kind: "HTTP method", tag: s.to_owned() }),
		}
	}
}

/// Response formats an endpoint can serve; substituted for the `format` placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
	/// XML document.
	Xml,
	/// JSON document.
	Json,
	/// RSS feed.
	Rss,
	/// Atom feed.
	Atom,
}
impl ResponseFormat {
	/// Returns the tag used in URLs and descriptor tables.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResponseFormat::Xml => "xml",
			ResponseFormat::Json => "json",
			ResponseFormat::Rss => "rss",
			ResponseFormat::Atom => "atom",
		}
	}
}
impl Display for ResponseFormat {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ResponseFormat {
	type Err = UnknownTagError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"xml" => Ok(ResponseFormat::Xml),
			"json" => Ok(ResponseFormat::Json),
			"rss" => Ok(ResponseFormat::Rss),
			"atom" => Ok(ResponseFormat::Atom),
			_ => Err(UnknownTagError { kind: "response format", tag: s.to_owned() }),
		}
	}
}

/// Error returned when parsing an unknown method or format tag.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown {kind} `{tag}`.")]
pub struct UnknownTagError {
	/// Which tag family failed to parse.
	pub kind: &'static str,
	/// The rejected input.
	pub tag: String,
}

/// Distinguishes data-bearing operations from OAuth handshake steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointKind {
	#[default]
	/// Regular API operation returning a formatted document.
	Rest,
	/// One step of the OAuth handshake; no format-bearing response.
	OauthFlow,
}

/// Immutable endpoint descriptor consumed by the transport layer.
///
/// Only descriptors produced by the builder, or accepted by
/// [`Registry::register`](crate::registry::Registry::register), are guaranteed to satisfy
/// [`check_invariants`](Self::check_invariants).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
	/// Unique operation name.
	pub name: EndpointName,
	/// Human-readable summary.
	pub description: String,
	/// URL with unresolved `format`/`id` tokens.
	pub url: UrlTemplate,
	/// HTTP verb used for dispatch.
	pub method: HttpMethod,
	/// Whether the transport must attach credentials.
	pub requires_auth: bool,
	/// Accepted response formats in preference order; empty for OAuth-flow endpoints.
	pub formats: Vec<ResponseFormat>,
	/// Declared request parameters, informational only.
	pub params: Vec<String>,
	/// Declared OAuth handshake parameters.
	pub oauth_params: Vec<String>,
	/// Operation category.
	pub kind: EndpointKind,
	/// Ordered rule set evaluated before dispatch.
	pub rules: Vec<ValidationRule>,
	/// Endpoint-specific metadata.
	pub quirks: EndpointQuirks,
}
impl EndpointDescriptor {
	/// Creates a new builder for the provided identifier.
	pub fn builder(name: EndpointName) -> EndpointDescriptorBuilder {
		EndpointDescriptorBuilder::new(name)
	}

	/// Returns true if the endpoint can respond in `format`.
	pub fn accepts(&self, format: ResponseFormat) -> bool {
		self.formats.contains(&format)
	}

	/// Returns true if this descriptor models an OAuth handshake step.
	pub fn is_oauth_flow(&self) -> bool {
		self.kind == EndpointKind::OauthFlow
	}

	/// Returns true if `param` is declared as a request parameter.
	pub fn declares(&self, param: &str) -> bool {
		self.params.iter().any(|p| p == param)
	}

	/// Checks caller parameters, stopping at the first violated rule.
	pub fn validate(&self, params: &Params, oauth_params: &Params) -> Result<(), ValidationError> {
		validate::first_violation(&self.rules, params, oauth_params).map_or(Ok(()), Err)
	}

	/// Checks caller parameters against every rule, in declaration order.
	pub fn violations(&self, params: &Params, oauth_params: &Params) -> Vec<ValidationError> {
		validate::all_violations(&self.rules, params, oauth_params)
	}
}
