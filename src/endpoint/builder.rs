// self
use crate::{
	_prelude::*,
	endpoint::{
		EndpointDescriptor, EndpointKind, EndpointName, EndpointQuirks, HttpMethod,
		ID_PLACEHOLDER, ResponseFormat, UrlTemplate,
	},
	validate::{ParamScope, ValidationRule},
};

/// Errors raised while constructing or validating descriptors.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum EndpointDescriptorError {
	/// Every descriptor needs a URL template.
	#[error("Missing URL template.")]
	MissingUrl,
	/// The URL template is not an absolute URL.
	#[error("URL template `{url}` is invalid: {reason}.")]
	InvalidUrl {
		/// Template that failed to parse.
		url: String,
		/// Parser failure message.
		reason: String,
	},
	/// REST endpoints must accept at least one response format.
	#[error("Endpoint `{name}` must accept at least one response format.")]
	MissingFormats {
		/// Offending descriptor.
		name: EndpointName,
	},
	/// OAuth-flow endpoints have no format-bearing response.
	#[error("OAuth-flow endpoint `{name}` cannot declare response formats.")]
	UnexpectedFormats {
		/// Offending descriptor.
		name: EndpointName,
	},
	/// Declared formats and the `format` placeholder disagree.
	#[error("Endpoint `{name}` declares formats but its URL has no `format` placeholder, or vice versa.")]
	FormatPlaceholderMismatch {
		/// Offending descriptor.
		name: EndpointName,
	},
	/// OAuth parameters only make sense on handshake steps.
	#[error("REST endpoint `{name}` cannot declare OAuth parameters.")]
	OauthParamsOnRestEndpoint {
		/// Offending descriptor.
		name: EndpointName,
	},
	/// A parameter name is declared twice.
	#[error("Parameter `{param}` is declared more than once.")]
	DuplicateParam {
		/// Repeated parameter name.
		param: String,
	},
	/// The URL carries an `id` placeholder that no parameter fills.
	#[error("Endpoint `{name}` has an `id` placeholder but does not declare an `id` parameter.")]
	UndeclaredIdParam {
		/// Offending descriptor.
		name: EndpointName,
	},
	/// A rule checks a parameter the descriptor never declares.
	#[error("Rule checks undeclared {scope} parameter `{field}`.")]
	UndeclaredRuleField {
		/// Parameter set the rule reads from.
		scope: ParamScope,
		/// Undeclared field name.
		field: String,
	},
}

/// Builder for [`EndpointDescriptor`] values.
#[derive(Debug)]
pub struct EndpointDescriptorBuilder {
	/// Identifier for the descriptor being constructed.
	pub name: EndpointName,
	/// Human-readable summary.
	pub description: String,
	/// Raw URL template, parsed on [`build`](Self::build).
	pub url: Option<String>,
	/// HTTP verb; defaults to `GET`.
	pub method: HttpMethod,
	/// Whether credentials are required.
	pub requires_auth: bool,
	/// Accepted response formats.
	pub formats: Vec<ResponseFormat>,
	/// Declared request parameters.
	pub params: Vec<String>,
	/// Declared OAuth handshake parameters.
	pub oauth_params: Vec<String>,
	/// Operation category.
	pub kind: EndpointKind,
	/// Ordered rule set.
	pub rules: Vec<ValidationRule>,
	/// Explicit quirks; derived from the method when unset.
	pub quirks: Option<EndpointQuirks>,
}
impl EndpointDescriptorBuilder {
	/// Creates a new builder seeded with the provided identifier.
	pub fn new(name: EndpointName) -> Self {
		Self {
			name,
			description: String::new(),
			url: None,
			method: HttpMethod::default(),
			requires_auth: false,
			formats: Vec::new(),
			params: Vec::new(),
			oauth_params: Vec::new(),
			kind: EndpointKind::default(),
			rules: Vec::new(),
			quirks: None,
		}
	}

	/// Sets the human-readable summary.
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();

		self
	}

	/// Sets the URL template.
	pub fn url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());

		self
	}

	/// Sets the HTTP verb.
	pub fn method(mut self, method: HttpMethod) -> Self {
		self.method = method;

		self
	}

	/// Marks whether credentials are required.
	pub fn requires_auth(mut self, requires_auth: bool) -> Self {
		self.requires_auth = requires_auth;

		self
	}

	/// Appends accepted response formats.
	pub fn formats<I>(mut self, formats: I) -> Self
	where
		I: IntoIterator<Item = ResponseFormat>,
	{
		for format in formats.into_iter() {
			if !self.formats.contains(&format) {
				self.formats.push(format);
			}
		}

		self
	}

	/// Appends declared request parameters.
	pub fn params<I, S>(mut self, params: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.params.extend(params.into_iter().map(Into::into));

		self
	}

	/// Appends declared OAuth handshake parameters.
	pub fn oauth_params<I, S>(mut self, params: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.oauth_params.extend(params.into_iter().map(Into::into));

		self
	}

	/// Marks the descriptor as an OAuth handshake step.
	pub fn oauth_flow(mut self) -> Self {
		self.kind = EndpointKind::OauthFlow;

		self
	}

	/// Appends a rule; rules are evaluated in the order they are added.
	pub fn rule(mut self, rule: ValidationRule) -> Self {
		self.rules.push(rule);

		self
	}

	/// Overrides the endpoint quirks.
	pub fn quirks(mut self, quirks: EndpointQuirks) -> Self {
		self.quirks = Some(quirks);

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<EndpointDescriptor, EndpointDescriptorError> {
		let raw = self.url.ok_or(EndpointDescriptorError::MissingUrl)?;
		let url = UrlTemplate::parse(raw.as_str()).map_err(|e| {
			EndpointDescriptorError::InvalidUrl { url: raw.clone(), reason: e.to_string() }
		})?;
		let descriptor = EndpointDescriptor {
			name: self.name,
			description: self.description,
			url,
			method: self.method,
			requires_auth: self.requires_auth,
			formats: self.formats,
			params: self.params,
			oauth_params: self.oauth_params,
			kind: self.kind,
			rules: self.rules,
			quirks: self.quirks.unwrap_or_else(|| EndpointQuirks::for_method(self.method)),
		};

		descriptor.check_invariants()?;

		Ok(descriptor)
	}
}

impl EndpointDescriptor {
	/// Validates invariants for the descriptor.
	///
	/// [`build`](EndpointDescriptorBuilder::build) runs this automatically; descriptors assembled
	/// as literals or deserialized are checked again on registration.
	pub fn check_invariants(&self) -> Result<(), EndpointDescriptorError> {
		match self.kind {
			EndpointKind::Rest => {
				if self.formats.is_empty() {
					return Err(EndpointDescriptorError::MissingFormats { name: self.name.clone() });
				}
				if !self.oauth_params.is_empty() {
					return Err(EndpointDescriptorError::OauthParamsOnRestEndpoint {
						name: self.name.clone(),
					});
				}
			},
			EndpointKind::OauthFlow =>
				if !self.formats.is_empty() {
					return Err(EndpointDescriptorError::UnexpectedFormats {
						name: self.name.clone(),
					});
				},
		}
		if self.formats.is_empty() == self.url.has_format_placeholder() {
			return Err(EndpointDescriptorError::FormatPlaceholderMismatch {
				name: self.name.clone(),
			});
		}

		validate_unique(&self.params)?;
		validate_unique(&self.oauth_params)?;

		if self.url.has_id_placeholder() && !self.declares(ID_PLACEHOLDER) {
			return Err(EndpointDescriptorError::UndeclaredIdParam { name: self.name.clone() });
		}

		for rule in &self.rules {
			let declared = match rule.scope() {
				ParamScope::Request => &self.params,
				ParamScope::Oauth => &self.oauth_params,
			};

			if !declared.iter().any(|p| p == rule.field()) {
				return Err(EndpointDescriptorError::UndeclaredRuleField {
					scope: rule.scope(),
					field: rule.field().to_owned(),
				});
			}
		}

		Ok(())
	}
}

fn validate_unique(params: &[String]) -> Result<(), EndpointDescriptorError> {
	let mut seen = HashSet::with_capacity(params.len());

	for param in params {
		if !seen.insert(param.as_str()) {
			return Err(EndpointDescriptorError::DuplicateParam { param: param.clone() });
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn builder(name: &str) -> EndpointDescriptorBuilder {
		EndpointDescriptor::builder(
			EndpointName::new(name).expect("Builder fixture name should be valid."),
		)
	}

	fn rest(name: &str) -> EndpointDescriptorBuilder {
		builder(name)
			.url(format!("http://api.example.com/{name}.format"))
			.formats([ResponseFormat::Json, ResponseFormat::Xml, ResponseFormat::Json])
	}

	#[test]
	fn build_collapses_duplicate_formats_and_derives_quirks() {
		let descriptor = rest("widgets/list").build().expect("Minimal REST descriptor should build.");

		assert_eq!(descriptor.formats, vec![ResponseFormat::Json, ResponseFormat::Xml]);
		assert!(descriptor.quirks.counts_against_rate_limit);
		assert!(descriptor.accepts(ResponseFormat::Xml));
		assert!(!descriptor.accepts(ResponseFormat::Atom));

		let post = rest("widgets/create")
			.method(HttpMethod::Post)
			.build()
			.expect("POST descriptor should build.");

		assert!(!post.quirks.counts_against_rate_limit);
	}

	#[test]
	fn build_requires_a_parseable_url() {
		assert_eq!(builder("widgets/list").build(), Err(EndpointDescriptorError::MissingUrl));

		let err = builder("widgets/list")
			.url("widgets/list.format")
			.formats([ResponseFormat::Json])
			.build()
			.expect_err("Relative templates must be rejected.");

		assert!(matches!(err, EndpointDescriptorError::InvalidUrl { .. }));
	}

	#[test]
	fn build_checks_format_invariants() {
		let err = builder("widgets/list")
			.url("http://api.example.com/widgets/list.format")
			.build()
			.expect_err("REST descriptors without formats must be rejected.");

		assert!(matches!(err, EndpointDescriptorError::MissingFormats { .. }));

		let err = builder("widgets/list")
			.url("http://api.example.com/widgets/list")
			.formats([ResponseFormat::Json])
			.build()
			.expect_err("Formats without a placeholder must be rejected.");

		assert!(matches!(err, EndpointDescriptorError::FormatPlaceholderMismatch { .. }));

		let err = builder("oauth/token")
			.url("http://api.example.com/oauth/token")
			.oauth_flow()
			.formats([ResponseFormat::Json])
			.build()
			.expect_err("OAuth-flow descriptors must not declare formats.");

		assert!(matches!(err, EndpointDescriptorError::UnexpectedFormats { .. }));

		let err = builder("oauth/token")
			.url("http://api.example.com/oauth/token.format")
			.oauth_flow()
			.build()
			.expect_err("OAuth-flow descriptors must not carry a format placeholder.");

		assert!(matches!(err, EndpointDescriptorError::FormatPlaceholderMismatch { .. }));
	}

	#[test]
	fn build_checks_parameter_invariants() {
		let err = rest("widgets/list")
			.params(["page", "page"])
			.build()
			.expect_err("Duplicate parameters must be rejected.");

		assert_eq!(err, EndpointDescriptorError::DuplicateParam { param: "page".into() });

		let err = rest("widgets/list")
			.oauth_params(["oauth_verifier"])
			.build()
			.expect_err("REST descriptors must not declare OAuth parameters.");

		assert!(matches!(err, EndpointDescriptorError::OauthParamsOnRestEndpoint { .. }));

		let err = builder("widgets/show")
			.url("http://api.example.com/widgets/show/id.format")
			.formats([ResponseFormat::Json])
			.build()
			.expect_err("An `id` placeholder needs a declared `id` parameter.");

		assert!(matches!(err, EndpointDescriptorError::UndeclaredIdParam { .. }));
	}

	#[test]
	fn build_rejects_rules_on_undeclared_fields() {
		let err = rest("widgets/list")
			.params(["count"])
			.rule(ValidationRule::numeric_ceiling("limit", 10))
			.build()
			.expect_err("Rules must reference declared parameters.");

		assert_eq!(
			err,
			EndpointDescriptorError::UndeclaredRuleField {
				scope: ParamScope::Request,
				field: "limit".into()
			}
		);

		let err = rest("widgets/list")
			.params(["oauth_verifier"])
			.rule(ValidationRule::required_oauth("oauth_verifier"))
			.build()
			.expect_err("OAuth rules must reference declared OAuth parameters.");

		assert!(matches!(
			err,
			EndpointDescriptorError::UndeclaredRuleField { scope: ParamScope::Oauth, .. }
		));
	}
}
