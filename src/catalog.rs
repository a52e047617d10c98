//! Built-in Twitter API descriptor table.
//!
//! The table covers the OAuth 1.0a handshake plus the core status, timeline, and account
//! operations. [`Registry::builtin`](crate::registry::Registry::builtin) registers it.

// self
use crate::{
	_prelude::*,
	endpoint::{
		EndpointDescriptor, EndpointDescriptorBuilder, EndpointName, EndpointQuirks, HttpMethod,
		ResponseFormat::{self, Atom, Json, Rss, Xml},
	},
	error::ConfigError,
	validate::ValidationRule,
};

/// Weighted-length ceiling for a status update body.
pub const STATUS_TEXT_LIMIT: u32 = 140;
/// Maximum `count` accepted by paginated timelines.
pub const TIMELINE_COUNT_LIMIT: u32 = 200;

const ALL_FORMATS: [ResponseFormat; 4] = [Xml, Json, Rss, Atom];
const DOCUMENT_FORMATS: [ResponseFormat; 2] = [Xml, Json];
const PAGING_PARAMS: [&str; 4] = ["since_id", "max_id", "count", "page"];

/// Builds every built-in descriptor, in table order.
pub fn builtin_descriptors() -> Result<Vec<EndpointDescriptor>, ConfigError> {
	let table = [
		// OAuth handshake.
		endpoint("oauth/request_token")?
			.oauth_flow()
			.description("Allows a Consumer application to obtain an OAuth Request Token to request user authorization.")
			.url("http://twitter.com/oauth/request_token")
			.requires_auth(true),
		endpoint("oauth/authorize")?
			.oauth_flow()
			.description("Allows a Consumer application to use an OAuth Request Token to request user authorization.")
			.url("http://twitter.com/oauth/authorize")
			.requires_auth(true),
		endpoint("oauth/access_token")?
			.oauth_flow()
			.description("Allows a Consumer application to exchange the OAuth Request Token for an OAuth Access Token.")
			.url("http://twitter.com/oauth/access_token")
			.method(HttpMethod::Post)
			.requires_auth(true)
			.oauth_params(["oauth_verifier"])
			.rule(ValidationRule::required_oauth("oauth_verifier")),
		// Timelines.
		endpoint("statuses/public_timeline")?
			.description("Returns the 20 most recent statuses from non-protected users who have set a custom user icon.")
			.url("http://twitter.com/statuses/public_timeline.format")
			.formats(ALL_FORMATS),
		endpoint("statuses/home_timeline")?
			.description("Returns the 20 most recent statuses, including retweets, posted by the authenticating user and that user's friends.")
			.url("http://api.twitter.com/1/statuses/home_timeline.format")
			.formats([Xml, Json, Atom])
			.requires_auth(true)
			.params(PAGING_PARAMS)
			.rule(ValidationRule::numeric_ceiling("count", TIMELINE_COUNT_LIMIT)),
		endpoint("statuses/friends_timeline")?
			.description("Returns the 20 most recent statuses posted by the authenticating user and that user's friends.")
			.url("http://twitter.com/statuses/friends_timeline.format")
			.formats(ALL_FORMATS)
			.requires_auth(true)
			.params(PAGING_PARAMS)
			.rule(ValidationRule::numeric_ceiling("count", TIMELINE_COUNT_LIMIT)),
		// Only protected timelines need credentials.
		endpoint("statuses/user_timeline")?
			.description("Returns the 20 most recent statuses posted from the authenticating user. It's also possible to request another user's timeline via the id parameter.")
			.url("http://twitter.com/statuses/user_timeline.format")
			.formats(ALL_FORMATS)
			.requires_auth(true)
			.params(["user_id", "screen_name"])
			.params(PAGING_PARAMS)
			.quirks(EndpointQuirks { conditional_auth: true, ..EndpointQuirks::default() }),
		endpoint("statuses/mentions")?
			.description("Returns the 20 most recent mentions (status containing @username) for the authenticating user.")
			.url("http://twitter.com/statuses/mentions.format")
			.formats(ALL_FORMATS)
			.requires_auth(true)
			.params(PAGING_PARAMS),
		// Statuses.
		endpoint("statuses/show")?
			.description("Returns a single status, specified by the id parameter below.")
			.url("http://twitter.com/statuses/show/id.format")
			.formats(DOCUMENT_FORMATS)
			.requires_auth(true)
			.params(["id"])
			.rule(ValidationRule::required("id")),
		endpoint("statuses/update")?
			.description("Updates the authenticating user's status.")
			.url("http://twitter.com/statuses/update.format")
			.formats(DOCUMENT_FORMATS)
			.method(HttpMethod::Post)
			.requires_auth(true)
			.params(["status", "in_reply_to_status_id", "lat", "long"])
			.rule(ValidationRule::required("status"))
			.rule(ValidationRule::weighted_text_ceiling("status", STATUS_TEXT_LIMIT)),
		endpoint("statuses/destroy")?
			.description("Destroys the status specified by the required ID parameter.")
			.url("http://twitter.com/statuses/destroy/id.format")
			.formats(DOCUMENT_FORMATS)
			.method(HttpMethod::Delete)
			.requires_auth(true)
			.params(["id"])
			.rule(ValidationRule::required("id")),
		// Account.
		endpoint("account/verify_credentials")?
			.description("Returns an HTTP 200 OK response code and a representation of the requesting user if authentication was successful; returns a 401 status code and an error message if not.")
			.url("http://twitter.com/account/verify_credentials.format")
			.formats(DOCUMENT_FORMATS)
			.requires_auth(true),
		// Unauthenticated calls report the per-IP budget instead.
		endpoint("account/rate_limit_status")?
			.description("Returns the remaining number of API requests available to the requesting user before the API limit is reached for the current hour.")
			.url("http://twitter.com/account/rate_limit_status.format")
			.formats(DOCUMENT_FORMATS)
			.requires_auth(true)
			.quirks(EndpointQuirks { conditional_auth: true, counts_against_rate_limit: false }),
	];

	table.into_iter().map(|builder| builder.build().map_err(ConfigError::from)).collect()
}

fn endpoint(name: &str) -> Result<EndpointDescriptorBuilder, ConfigError> {
	let name = EndpointName::new(name)
		.map_err(|e| ConfigError::InvalidName { name: name.to_owned(), source: e })?;

	Ok(EndpointDescriptor::builder(name))
}
