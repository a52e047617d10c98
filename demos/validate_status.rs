//! Validates a status update against the built-in catalog before it would be dispatched.
//!
//! Pass the status text as the first argument; the example prints the transport metadata
//! and either `valid` or the structured validation error.

// std
use std::env;
// crates.io
use color_eyre::Result;
// self
use api_registry::{error::Error, registry::Registry, validate::Params};

fn main() -> Result<()> {
	color_eyre::install()?;

	let status = env::args().nth(1).unwrap_or_else(|| "Hello from the registry!".into());
	let registry = Registry::builtin()?;
	let descriptor = registry.lookup("statuses/update")?;

	println!("{} {} (auth: {})", descriptor.method, descriptor.url, descriptor.requires_auth);

	match registry.validate("statuses/update", &Params::new().with("status", status), &Params::new()) {
		Ok(()) => println!("valid"),
		Err(Error::Validation(e)) => println!("rejected: {}", serde_json::to_string(&e)?),
		Err(e) => return Err(e.into()),
	}

	Ok(())
}
