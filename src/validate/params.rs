//! Candidate parameter sets supplied by callers.

// std
use std::collections::btree_map::Iter;
// crates.io
use serde::{Deserializer, de::Error as DeError};
// self
use crate::_prelude::*;

/// Errors emitted when decoding a parameter set.
#[derive(Debug, ThisError)]
pub enum ParamsError {
	/// Input is not a JSON object of scalar values.
	#[error("Parameters are malformed at `{path}`.")]
	Malformed {
		/// JSON path of the offending value.
		path: String,
		/// Structured decoding failure.
		#[source]
		source: serde_json::Error,
	},
}

/// Ordered mapping of parameter name to string value.
///
/// Values are kept as the strings the transport will send; decoding from JSON stringifies
/// numbers and booleans and drops `null` entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Params(BTreeMap<String, String>);
impl Params {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a parameter.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(name, value);

		self
	}

	/// Adds or replaces a parameter in place.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.0.insert(name.into(), value.into())
	}

	/// Returns the value for `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	/// Returns the value for `name` unless it is missing or empty.
	pub fn present(&self, name: &str) -> Option<&str> {
		self.get(name).filter(|value| !value.is_empty())
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no parameters are set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterator over `(name, value)` pairs in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Decodes a JSON object such as `{"status": "hi", "count": 20}`.
	pub fn from_json(payload: &str) -> Result<Self, ParamsError> {
		let mut de = serde_json::Deserializer::from_str(payload);
		let params = serde_path_to_error::deserialize(&mut de).map_err(|e| {
			ParamsError::Malformed { path: e.path().to_string(), source: e.into_inner() }
		})?;

		// Reject anything after the closing brace.
		de.end().map_err(|source| ParamsError::Malformed { path: ".".into(), source })?;

		Ok(params)
	}
}
impl<'a> IntoIterator for &'a Params {
	type IntoIter = Iter<'a, String, String>;
	type Item = (&'a String, &'a String);

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}
impl<'de> Deserialize<'de> for Params {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = <BTreeMap<String, Option<Scalar>>>::deserialize(deserializer)?;
		let mut params = Self::new();

		for (name, value) in raw {
			if name.is_empty() {
				return Err(DeError::custom("parameter names cannot be empty"));
			}
			if let Some(value) = value {
				params.insert(name, value.into_string());
			}
		}

		Ok(params)
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
	Text(String),
	Integer(i64),
	Unsigned(u64),
	Float(f64),
	Flag(bool),
}
impl Scalar {
	fn into_string(self) -> String {
		match self {
			Scalar::Text(s) => s,
			Scalar::Integer(n) => n.to_string(),
			Scalar::Unsigned(n) => n.to_string(),
			Scalar::Float(n) => n.to_string(),
			Scalar::Flag(b) => b.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn present_treats_empty_values_as_missing() {
		let params = Params::new().with("status", "").with("count", "20");

		assert_eq!(params.get("status"), Some(""));
		assert_eq!(params.present("status"), None);
		assert_eq!(params.present("count"), Some("20"));
		assert_eq!(params.present("page"), None);
		assert_eq!(params.len(), 2);
	}

	#[test]
	fn json_values_are_stringified() {
		let params = Params::from_json(r#"{"count": 201, "status": "hi", "trim_user": true, "page": null}"#)
			.expect("Scalar JSON object should decode.");

		assert_eq!(params.get("count"), Some("201"));
		assert_eq!(params.get("status"), Some("hi"));
		assert_eq!(params.get("trim_user"), Some("true"));
		assert_eq!(params.get("page"), None, "Null entries should be dropped.");
		assert_eq!(params.iter().map(|(k, _)| k).collect::<Vec<_>>(), vec![
			"count",
			"status",
			"trim_user"
		]);
	}

	#[test]
	fn nested_values_report_their_path() {
		let err = Params::from_json(r#"{"status": {"text": "hi"}}"#)
			.expect_err("Nested objects must be rejected.");

		assert!(err.to_string().contains("status"), "Error should name the offending key: {err}.");
		assert!(Params::from_json("[1, 2]").is_err());
	}

	#[test]
	fn trailing_input_is_rejected() {
		let err = Params::from_json(r#"{"status": "hi"} x"#)
			.expect_err("Input after the object must be rejected.");

		assert!(matches!(err, ParamsError::Malformed { ref path, .. } if path == "."));
		assert!(Params::from_json(r#"{"status": "hi"}{"count": 1}"#).is_err());
		assert!(Params::from_json("{\"status\": \"hi\"}\n  ").is_ok(), "Trailing whitespace is fine.");
	}

	#[test]
	fn collects_from_pairs() {
		let params = [("status", "hello"), ("lat", "35.0")].into_iter().collect::<Params>();

		assert_eq!(params.get("lat"), Some("35.0"));
		assert_eq!((&params).into_iter().count(), 2);
	}
}
