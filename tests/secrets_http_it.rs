// crates.io
use httpmock::prelude::*;
// self
use oauth2_resolver::{
	secrets::{ReqwestSecretsClient, SecretsClient},
	url::Url,
};

fn client(server: &MockServer) -> ReqwestSecretsClient {
	let base = Url::parse(&server.base_url())
		.expect("Mock server base URL should parse successfully.");

	ReqwestSecretsClient::new(base)
}

#[tokio::test]
async fn listing_decodes_computed_values() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/secrets")
				.query_param("project", "demo-project")
				.query_param("environment", "staging")
				.header("authorization", "Bearer svc-token");
			then.status(200).header("content-type", "application/json").body(
				r#"{"secrets":{"OAUTH_CLIENT_ID":{"computed":"id"},"API_BASE":{"computed":"https://api.example"}}}"#,
			);
		})
		.await;
	let secrets = client(&server)
		.list("svc-token", "demo-project", "staging")
		.await
		.expect("Well-formed listing should decode.");

	assert_eq!(secrets.len(), 2);
	assert_eq!(secrets["OAUTH_CLIENT_ID"].computed, "id");
	assert_eq!(secrets["API_BASE"].computed, "https://api.example");

	mock.assert_async().await;
}

#[tokio::test]
async fn error_statuses_fail_with_the_status_in_the_message() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/secrets");
			then.status(401).body("invalid token");
		})
		.await;

	let error = client(&server)
		.list("expired-token", "demo-project", "staging")
		.await
		.expect_err("Unauthorized listing should fail.");

	assert!(error.message.contains("HTTP 401"));
	assert!(error.message.contains("demo-project"));
}

#[tokio::test]
async fn malformed_bodies_fail_as_backend_errors() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/secrets");
			then.status(200).header("content-type", "application/json").body("{\"secrets\": [1, 2]}");
		})
		.await;

	let error = client(&server)
		.list("svc-token", "demo-project", "staging")
		.await
		.expect_err("Malformed listing should fail.");

	assert!(error.message.contains("malformed listing body"));
}
