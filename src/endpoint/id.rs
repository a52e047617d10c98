//! Strongly typed endpoint identifiers.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

const IDENTIFIER_MAX_LEN: usize = 128;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("Endpoint name cannot be empty.")]
	Empty,
	/// The identifier contains whitespace characters.
	#[error("Endpoint name contains whitespace: {name}.")]
	ContainsWhitespace {
		/// The offending name.
		name: String,
	},
	/// The identifier exceeded the allowed character count.
	#[error("Endpoint name exceeds {max} characters.")]
	TooLong {
		/// Maximum permitted character count.
		max: usize,
	},
}

/// Unique operation name keying a descriptor inside the registry (e.g. `statuses/update`).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EndpointName(String);
impl EndpointName {
	/// Creates a new identifier after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}

	/// Returns the namespace before the first `/` (`statuses` for `statuses/update`).
	pub fn namespace(&self) -> &str {
		self.0.split_once('/').map_or(self.0.as_str(), |(namespace, _)| namespace)
	}
}
impl Deref for EndpointName {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for EndpointName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<EndpointName> for String {
	fn from(value: EndpointName) -> Self {
		value.0
	}
}
impl TryFrom<String> for EndpointName {
	type Error = IdentifierError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(value))
	}
}
impl Borrow<str> for EndpointName {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl Debug for EndpointName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Endpoint({})", self.0)
	}
}
impl Display for EndpointName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for EndpointName {
	type Err = IdentifierError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

fn validate_view(view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty);
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace { name: view.to_owned() });
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}
