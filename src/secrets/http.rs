//! Reqwest-backed [`SecretsClient`] binding for HTTP secrets services.

// self
use crate::{
	_prelude::*,
	secrets::{SecretValue, SecretsClient, SecretsError, SecretsFuture},
};

#[derive(Debug, Deserialize)]
struct SecretsListing {
	secrets: BTreeMap<String, SecretValue>,
}

/// Thin [`SecretsClient`] binding over a bearer-token HTTP listing endpoint.
///
/// Issues `GET {base}/v1/secrets?project=…&environment=…` with the caller's access token
/// and decodes a `{"secrets": {NAME: {"computed": …}}}` body. Configure timeouts on the
/// supplied [`ReqwestClient`]; the resolver treats an expired deadline like any other
/// unavailable-service failure.
#[derive(Clone, Debug)]
pub struct ReqwestSecretsClient {
	client: ReqwestClient,
	base_url: Url,
}
impl ReqwestSecretsClient {
	/// Creates a binding against the provided service base URL with a default client.
	pub fn new(base_url: Url) -> Self {
		Self::with_client(ReqwestClient::default(), base_url)
	}

	/// Creates a binding that reuses an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient, base_url: Url) -> Self {
		Self { client, base_url }
	}

	fn listing_url(&self, project: &str, environment: &str) -> Result<Url, SecretsError> {
		let mut url = self
			.base_url
			.join("v1/secrets")
			.map_err(|e| SecretsError::backend(format!("invalid listing URL: {e}")))?;

		url.query_pairs_mut().append_pair("project", project).append_pair("environment", environment);

		Ok(url)
	}
}
impl SecretsClient for ReqwestSecretsClient {
	fn list<'a>(
		&'a self,
		token: &'a str,
		project: &'a str,
		environment: &'a str,
	) -> SecretsFuture<'a, BTreeMap<String, SecretValue>> {
		Box::pin(async move {
			let url = self.listing_url(project, environment)?;
			let response = self
				.client
				.get(url)
				.bearer_auth(token)
				.send()
				.await
				.map_err(|e| SecretsError::backend(format!("request failed: {e}")))?;
			let status = response.status();

			if !status.is_success() {
				return Err(SecretsError::backend(format!(
					"listing returned HTTP {status} for project `{project}` environment `{environment}`"
				)));
			}

			let bytes = response
				.bytes()
				.await
				.map_err(|e| SecretsError::backend(format!("failed to read listing body: {e}")))?;
			let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
			let listing: SecretsListing = serde_path_to_error::deserialize(&mut deserializer)
				.map_err(|e| SecretsError::backend(format!("malformed listing body: {e}")))?;

			Ok(listing.secrets)
		})
	}
}
