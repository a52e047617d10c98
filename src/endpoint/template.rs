// self
use crate::_prelude::*;

/// Literal token substituted with the response format (`xml`, `json`, ...).
pub const FORMAT_PLACEHOLDER: &str = "format";
/// Literal token substituted with a resource identifier.
pub const ID_PLACEHOLDER: &str = "id";

/// Placeholder tokens found inside a [`UrlTemplate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholders {
	/// The last path segment ends with `.format`.
	pub format: bool,
	/// A path segment (minus any `.format` suffix) is exactly `id`.
	pub id: bool,
}

/// Absolute endpoint URL whose `format`/`id` tokens are left for the transport to resolve.
///
/// Only the placeholders are identified here; substitution belongs to the transport layer.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UrlTemplate {
	raw: String,
	placeholders: Placeholders,
}
impl UrlTemplate {
	/// Parses a template, rejecting anything that is not an absolute URL.
	pub fn parse(raw: impl Into<String>) -> Result<Self, url::ParseError> {
		let raw = raw.into();
		let placeholders = scan(&Url::parse(&raw)?);

		Ok(Self { raw, placeholders })
	}

	/// Returns the unresolved template string.
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// Returns the placeholder tokens present in the template.
	pub fn placeholders(&self) -> Placeholders {
		self.placeholders
	}

	/// Returns true if the transport must substitute a response format.
	pub fn has_format_placeholder(&self) -> bool {
		self.placeholders.format
	}

	/// Returns true if the transport must substitute a resource identifier.
	pub fn has_id_placeholder(&self) -> bool {
		self.placeholders.id
	}
}
impl AsRef<str> for UrlTemplate {
	fn as_ref(&self) -> &str {
		&self.raw
	}
}
impl From<UrlTemplate> for String {
	fn from(value: UrlTemplate) -> Self {
		value.raw
	}
}
impl TryFrom<String> for UrlTemplate {
	type Error = url::ParseError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}
impl Debug for UrlTemplate {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("UrlTemplate").field(&self.raw).finish()
	}
}
impl Display for UrlTemplate {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.raw)
	}
}

fn scan(url: &Url) -> Placeholders {
	let Some(segments) = url.path_segments() else {
		return Placeholders::default();
	};
	let segments = segments.collect::<Vec<_>>();
	let mut placeholders = Placeholders::default();

	for (idx, segment) in segments.iter().enumerate() {
		// Only the final segment may carry the `.format` suffix.
		let stem = match segment
			.strip_suffix(FORMAT_PLACEHOLDER)
			.and_then(|rest| rest.strip_suffix('.'))
			.filter(|_| idx + 1 == segments.len())
		{
			Some(trimmed) => {
				placeholders.format = true;

				trimmed
			},
			None => *segment,
		};

		if stem == ID_PLACEHOLDER {
			placeholders.id = true;
		}
	}

	placeholders
}
