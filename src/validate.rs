//! Pre-dispatch parameter validation.
//!
//! Each descriptor carries an ordered list of [`ValidationRule`] variants interpreted by one
//! evaluator. Evaluation is pure: the outcome is returned to the caller and nothing is
//! cached on the descriptor, so concurrent validations never observe each other.
//!
//! Only the fields named by a rule are inspected. Declared parameters are informational and
//! never enforced here.

pub mod params;
pub mod weighted;

pub use params::*;
pub use weighted::*;

// crates.io
use serde::{Serializer, ser::SerializeMap};
// self
use crate::_prelude::*;

/// Parameter set a rule reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamScope {
	/// Regular request parameters.
	Request,
	/// OAuth handshake parameters.
	Oauth,
}
impl ParamScope {
	/// Returns a stable label suitable for messages and logs.
	pub const fn as_str(self) -> &'static str {
		match self {
			ParamScope::Request => "request",
			ParamScope::Oauth => "oauth",
		}
	}
}
impl Display for ParamScope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// A single constraint checked before dispatch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ValidationRule {
	/// The field must be present and non-empty.
	Required {
		/// Parameter set holding the field.
		scope: ParamScope,
		/// Checked field.
		field: String,
	},
	/// A numeric field, when present, must not exceed `limit`.
	NumericCeiling {
		/// Checked request field.
		field: String,
		/// Inclusive maximum.
		limit: u32,
	},
	/// A text field, when present, must not exceed `limit` weighted units.
	WeightedTextCeiling {
		/// Checked request field.
		field: String,
		/// Inclusive maximum weighted length.
		limit: u32,
	},
}
impl ValidationRule {
	/// Requires a non-empty request parameter.
	pub fn required(field: impl Into<String>) -> Self {
		Self::Required { scope: ParamScope::Request, field: field.into() }
	}

	/// Requires a non-empty OAuth parameter.
	pub fn required_oauth(field: impl Into<String>) -> Self {
		Self::Required { scope: ParamScope::Oauth, field: field.into() }
	}

	/// Caps a numeric request parameter.
	pub fn numeric_ceiling(field: impl Into<String>, limit: u32) -> Self {
		Self::NumericCeiling { field: field.into(), limit }
	}

	/// Caps the weighted length of a text request parameter.
	pub fn weighted_text_ceiling(field: impl Into<String>, limit: u32) -> Self {
		Self::WeightedTextCeiling { field: field.into(), limit }
	}

	/// Returns the checked field.
	pub fn field(&self) -> &str {
		match self {
			Self::Required { field, .. }
			| Self::NumericCeiling { field, .. }
			| Self::WeightedTextCeiling { field, .. } => field,
		}
	}

	/// Returns the parameter set the rule reads from.
	pub fn scope(&self) -> ParamScope {
		match self {
			Self::Required { scope, .. } => *scope,
			Self::NumericCeiling { .. } | Self::WeightedTextCeiling { .. } => ParamScope::Request,
		}
	}

	/// Evaluates the rule against the caller's parameters.
	pub fn check(&self, params: &Params, oauth_params: &Params) -> Result<(), ValidationError> {
		let source = match self.scope() {
			ParamScope::Request => params,
			ParamScope::Oauth => oauth_params,
		};

		match self {
			Self::Required { field, .. } =>
				if source.present(field).is_none() {
					return Err(ValidationError::Required { field: field.clone() });
				},
			Self::NumericCeiling { field, limit } =>
				if source.present(field).and_then(parse_number).is_some_and(|n| n > f64::from(*limit))
				{
					return Err(ValidationError::LimitOver { field: field.clone(), limit: *limit });
				},
			Self::WeightedTextCeiling { field, limit } =>
				if source.get(field).is_some_and(|text| exceeds_weighted_length(text, *limit as usize))
				{
					return Err(ValidationError::LimitOver { field: field.clone(), limit: *limit });
				},
		}

		Ok(())
	}
}

/// Closed set of failure kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationKind {
	/// A required field is missing or empty.
	Required,
	/// A field exceeds its ceiling.
	LimitOver,
}
impl ValidationKind {
	/// Returns the wire tag (`required`, `limit-over`).
	pub const fn as_str(self) -> &'static str {
		match self {
			ValidationKind::Required => "required",
			ValidationKind::LimitOver => "limit-over",
		}
	}
}
impl Display for ValidationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Structured validation failure naming exactly one field.
///
/// Serializes to `{"<field>": {"kind": "<kind>", "limit": N}}`, with `limit` omitted for
/// [`Required`](Self::Required).
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ValidationError {
	/// A required field is missing or empty.
	#[error("Parameter `{field}` is required.")]
	Required {
		/// Offending field.
		field: String,
	},
	/// A field exceeds its ceiling.
	#[error("Parameter `{field}` exceeds the limit of {limit}.")]
	LimitOver {
		/// Offending field.
		field: String,
		/// Ceiling that was exceeded.
		limit: u32,
	},
}
impl ValidationError {
	/// Returns the offending field.
	pub fn field(&self) -> &str {
		match self {
			Self::Required { field } | Self::LimitOver { field, .. } => field,
		}
	}

	/// Returns the failure kind.
	pub fn kind(&self) -> ValidationKind {
		match self {
			Self::Required { .. } => ValidationKind::Required,
			Self::LimitOver { .. } => ValidationKind::LimitOver,
		}
	}

	/// Returns the exceeded ceiling, if any.
	pub fn limit(&self) -> Option<u32> {
		match self {
			Self::Required { .. } => None,
			Self::LimitOver { limit, .. } => Some(*limit),
		}
	}
}
impl Serialize for ValidationError {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		#[derive(Serialize)]
		struct Detail {
			kind: ValidationKind,
			#[serde(skip_serializing_if = "Option::is_none")]
			limit: Option<u32>,
		}

		let mut map = serializer.serialize_map(Some(1))?;

		map.serialize_entry(self.field(), &Detail { kind: self.kind(), limit: self.limit() })?;

		map.end()
	}
}

/// Returns the first violated rule, in declaration order.
pub fn first_violation(
	rules: &[ValidationRule],
	params: &Params,
	oauth_params: &Params,
) -> Option<ValidationError> {
	rules.iter().find_map(|rule| rule.check(params, oauth_params).err())
}

/// Returns every violated rule, in declaration order.
pub fn all_violations(
	rules: &[ValidationRule],
	params: &Params,
	oauth_params: &Params,
) -> Vec<ValidationError> {
	rules.iter().filter_map(|rule| rule.check(params, oauth_params).err()).collect()
}

// Follows JavaScript `Number(..)` string conversion: unsigned `0x`/`0o`/`0b` integers and
// signed `Infinity` are numbers, every other alphabetic form is not. Non-numeric input yields
// `None` so the server gets to reject it.
fn parse_number(value: &str) -> Option<f64> {
	let value = value.trim();

	if let Some(n) = parse_prefixed_integer(value) {
		return Some(n);
	}

	let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);

	if unsigned == "Infinity" {
		return Some(if value.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY });
	}
	// Rust also accepts `inf`, `infinity` and `nan` in any case.
	if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) {
		return None;
	}

	value.parse::<f64>().ok().filter(|n| !n.is_nan())
}

fn parse_prefixed_integer(value: &str) -> Option<f64> {
	let radix = match value.get(..2)? {
		"0x" | "0X" => 16,
		"0o" | "0O" => 8,
		"0b" | "0B" => 2,
		_ => return None,
	};
	let digits = &value[2..];

	if digits.is_empty() {
		return None;
	}

	digits.chars().try_fold(0_f64, |acc, c| {
		c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
	})
}
