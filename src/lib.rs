//! Declarative registry of Twitter API endpoint descriptors with pre-dispatch parameter
//! validation: URL templates, auth requirements, response formats, and typed rule sets in one
//! crate.
//!
//! Build a [`Registry`](registry::Registry) once at startup, share it by reference, and ask it to
//! validate caller parameters before handing the descriptor to a transport:
//!
//! ```
//! use api_registry::{registry::Registry, validate::Params};
//!
//! let registry = Registry::builtin().expect("Built-in catalog should be valid.");
//! let params = Params::new().with("status", "hello");
//!
//! registry
//! 	.validate("statuses/update", &params, &Params::new())
//! 	.expect("Short status updates should pass validation.");
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod catalog;
pub mod endpoint;
pub mod error;
pub mod obs;
pub mod registry;
pub mod validate;

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashSet},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use color_eyre as _;
