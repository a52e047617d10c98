// self
use api_registry::{
	error::Error,
	registry::Registry,
	validate::{Params, ValidationError, ValidationKind, weighted_length},
};

fn builtin() -> Registry {
	Registry::builtin().expect("Built-in catalog should register without conflicts.")
}

fn rejection(registry: &Registry, name: &str, params: Params, oauth: Params) -> ValidationError {
	match registry.validate(name, &params, &oauth) {
		Err(Error::Validation(e)) => e,
		other => panic!("Expected a validation error for `{name}`, got {other:?}."),
	}
}

#[test]
fn weighted_length_counts_full_width_twice() {
	assert_eq!(weighted_length("abc"), 3);
	assert_eq!(weighted_length("a\u{3042}b"), 4);
}

#[test]
fn status_update_requires_a_body() {
	let registry = builtin();
	let err = rejection(&registry, "statuses/update", Params::new().with("status", ""), Params::new());

	assert_eq!(err.field(), "status");
	assert_eq!(err.kind(), ValidationKind::Required);
	assert_eq!(err.limit(), None);

	let err = rejection(&registry, "statuses/update", Params::new(), Params::new());

	assert_eq!(err, ValidationError::Required { field: "status".into() });
}

#[test]
fn status_update_enforces_the_weighted_ceiling() {
	let registry = builtin();
	let validate = |status: String| {
		registry.validate("statuses/update", &Params::new().with("status", status), &Params::new())
	};

	validate("x".repeat(140)).expect("140 ASCII characters should pass.");
	validate("\u{3042}".repeat(70)).expect("70 full-width characters should pass.");

	for status in ["x".repeat(141), "\u{3042}".repeat(71), format!("{}\u{3042}", "x".repeat(139))] {
		let err = validate(status).expect_err("Over-long statuses must be rejected.");

		assert_eq!(
			err.as_validation(),
			Some(&ValidationError::LimitOver { field: "status".into(), limit: 140 })
		);
	}
}

#[test]
fn timelines_cap_the_page_size() {
	let registry = builtin();

	for name in ["statuses/home_timeline", "statuses/friends_timeline"] {
		let err = rejection(&registry, name, Params::new().with("count", "201"), Params::new());

		assert_eq!(err, ValidationError::LimitOver { field: "count".into(), limit: 200 });

		registry
			.validate(name, &Params::new().with("count", "200"), &Params::new())
			.expect("A count of 200 should pass.");
		registry.validate(name, &Params::new(), &Params::new()).expect("Omitting count should pass.");
	}

	let json = Params::from_json(r#"{"count": 201}"#).expect("Numeric JSON params should decode.");

	assert_eq!(
		rejection(&registry, "statuses/home_timeline", json, Params::new()).limit(),
		Some(200)
	);
	registry
		.validate("statuses/mentions", &Params::new().with("count", "500"), &Params::new())
		.expect("Endpoints without a count rule must not enforce one.");
}

#[test]
fn access_token_requires_the_verifier() {
	let registry = builtin();
	let err = rejection(&registry, "oauth/access_token", Params::new(), Params::new());

	assert_eq!(err, ValidationError::Required { field: "oauth_verifier".into() });

	registry
		.validate(
			"oauth/access_token",
			&Params::new(),
			&Params::new().with("oauth_verifier", "8473061"),
		)
		.expect("A non-empty verifier should pass.");
}

#[test]
fn show_and_destroy_require_the_id() {
	let registry = builtin();

	for name in ["statuses/show", "statuses/destroy"] {
		let err = rejection(&registry, name, Params::new(), Params::new());

		assert_eq!(err, ValidationError::Required { field: "id".into() });

		let err = rejection(&registry, name, Params::new().with("status", "ignored"), Params::new());

		assert_eq!(err.field(), "id", "A status must not stand in for the id.");

		registry
			.validate(name, &Params::new().with("id", "1234567890"), &Params::new())
			.expect("A supplied id should pass.");
	}
}

#[test]
fn endpoints_without_rules_always_pass() {
	let registry = builtin();

	for name in ["statuses/public_timeline", "oauth/request_token", "account/verify_credentials"] {
		registry.validate(name, &Params::new(), &Params::new()).expect("Rule-less endpoints should pass.");
	}

	registry
		.validate(
			"statuses/public_timeline",
			&Params::new().with("undeclared", "x".repeat(1_000)),
			&Params::new(),
		)
		.expect("Undeclared parameters are never enforced.");
}

#[test]
fn violations_collect_every_failure() {
	let registry = builtin();
	let violations = registry
		.violations("statuses/update", &Params::new(), &Params::new())
		.expect("statuses/update should be registered.");

	assert_eq!(violations, vec![ValidationError::Required { field: "status".into() }]);

	let long = Params::new().with("status", "x".repeat(200));
	let violations = registry
		.violations("statuses/update", &long, &Params::new())
		.expect("statuses/update should be registered.");

	assert_eq!(violations.len(), 1);
	assert_eq!(violations[0].kind(), ValidationKind::LimitOver);
	assert!(matches!(
		registry.violations("statuses/retweet", &long, &Params::new()),
		Err(Error::NotFound { .. })
	));
}

#[test]
fn errors_render_for_end_users() {
	let registry = builtin();
	let err = registry
		.validate("statuses/update", &Params::new().with("status", "x".repeat(141)), &Params::new())
		.expect_err("Over-long statuses must be rejected.");

	assert_eq!(err.to_string(), "Parameter `status` exceeds the limit of 140.");

	let payload = serde_json::to_string(err.as_validation().expect("Error should carry a validation failure."))
		.expect("Validation errors should serialize.");

	assert_eq!(payload, r#"{"status":{"kind":"limit-over","limit":140}}"#);
}
