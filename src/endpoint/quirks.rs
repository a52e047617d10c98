// self
use crate::{_prelude::*, endpoint::HttpMethod};

/// Endpoint-specific metadata the transport may consult; nothing here is enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointQuirks {
	/// Authentication is only needed in some cases (protected timelines, per-account limits).
	pub conditional_auth: bool,
	/// Calls are charged against the hourly request budget.
	pub counts_against_rate_limit: bool,
}
impl EndpointQuirks {
	/// Default quirks for an endpoint using `method`: only reads are charged.
	pub fn for_method(method: HttpMethod) -> Self {
		Self { counts_against_rate_limit: method.is_read(), ..Self::default() }
	}
}
impl Default for EndpointQuirks {
	fn default() -> Self {
		Self { conditional_auth: false, counts_against_rate_limit: true }
	}
}
