//! Name-keyed collection of endpoint descriptors.
//!
//! A [`Registry`] is built once during process initialization and then only read. Share it
//! by reference or behind an `Arc`; every read API takes `&self`, so concurrent lookups and
//! validations need no synchronization.

// std
use std::collections::btree_map::Values;
// self
use crate::{
	_prelude::*,
	catalog,
	endpoint::{EndpointDescriptor, EndpointName},
	error::ConfigError,
	obs::{self, ValidationOutcome, ValidationSpan},
	validate::{Params, ValidationError},
};

/// Read-only mapping from operation name to descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Registry {
	endpoints: BTreeMap<EndpointName, EndpointDescriptor>,
}
impl Registry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a registry holding the built-in catalog.
	pub fn builtin() -> Result<Self, ConfigError> {
		Self::from_descriptors(catalog::builtin_descriptors()?)
	}

	/// Builds a registry from the provided descriptors.
	pub fn from_descriptors<I>(descriptors: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = EndpointDescriptor>,
	{
		let mut registry = Self::new();

		registry.register(descriptors)?;

		Ok(registry)
	}

	/// Registers a batch of descriptors keyed by name.
	///
	/// The batch is applied atomically: if any descriptor breaks its invariants, or any name is
	/// already registered or appears twice in the batch, nothing is inserted.
	pub fn register<I>(&mut self, descriptors: I) -> Result<(), ConfigError>
	where
		I: IntoIterator<Item = EndpointDescriptor>,
	{
		let batch = descriptors.into_iter().collect::<Vec<_>>();
		let mut seen = HashSet::with_capacity(batch.len());

		for descriptor in &batch {
			descriptor.check_invariants()?;

			if self.endpoints.contains_key(&descriptor.name) || !seen.insert(&descriptor.name) {
				#[cfg(feature = "tracing")]
				tracing::warn!(endpoint = %descriptor.name, "duplicate endpoint registration");

				return Err(ConfigError::DuplicateEndpoint { name: descriptor.name.clone() });
			}
		}

		#[cfg(feature = "tracing")]
		tracing::debug!(count = batch.len(), "registering endpoints");

		self.endpoints.extend(batch.into_iter().map(|d| (d.name.clone(), d)));

		Ok(())
	}

	/// Returns the descriptor registered under `name`.
	pub fn lookup(&self, name: &str) -> Result<&EndpointDescriptor> {
		self.endpoints.get(name).ok_or_else(|| {
			obs::record_lookup_miss();

			Error::NotFound { name: name.to_owned() }
		})
	}

	/// Returns true if `name` is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.endpoints.contains_key(name)
	}

	/// Number of registered descriptors.
	pub fn len(&self) -> usize {
		self.endpoints.len()
	}

	/// Returns true if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.endpoints.is_empty()
	}

	/// Iterator over descriptors in name order.
	pub fn iter(&self) -> Values<'_, EndpointName, EndpointDescriptor> {
		self.endpoints.values()
	}

	/// Iterator over registered names in order.
	pub fn names(&self) -> impl Iterator<Item = &EndpointName> {
		self.endpoints.keys()
	}

	/// Looks up `name` and checks the parameters, stopping at the first violated rule.
	pub fn validate(&self, name: &str, params: &Params, oauth_params: &Params) -> Result<()> {
		let descriptor = self.lookup(name)?;
		let _guard = ValidationSpan::new(name).entered();
		let result = descriptor.validate(params, oauth_params);

		obs::record_validation_outcome(name, ValidationOutcome::of(&result));

		#[cfg(feature = "tracing")]
		if let Err(e) = &result {
			tracing::debug!(field = e.field(), kind = %e.kind(), "parameters rejected");
		}

		result.map_err(Error::from)
	}

	/// Looks up `name` and returns every violated rule, in declaration order.
	pub fn violations(
		&self,
		name: &str,
		params: &Params,
		oauth_params: &Params,
	) -> Result<Vec<ValidationError>> {
		let descriptor = self.lookup(name)?;
		let _guard = ValidationSpan::new(name).entered();
		let violations = descriptor.violations(params, oauth_params);
		let outcome =
			if violations.is_empty() { ValidationOutcome::Passed } else { ValidationOutcome::Rejected };

		obs::record_validation_outcome(name, outcome);

		Ok(violations)
	}
}
impl<'a> IntoIterator for &'a Registry {
	type IntoIter = Values<'a, EndpointName, EndpointDescriptor>;
	type Item = &'a EndpointDescriptor;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
