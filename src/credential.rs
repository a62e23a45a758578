//! Credential data model: resolved records, projections, and the injected environment.

pub mod secret;

pub use secret::CredentialSecret;

// self
use crate::_prelude::*;

/// Redirect target applied when a flat-shaped key file omits `redirect_uris`.
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:3000/oauth2callback";

/// Fully resolved OAuth client credentials.
///
/// Constructed fresh on every resolution call; sources guarantee `redirect_uris` holds at
/// least one entry, while emptiness of `client_id`/`client_secret` is reported by the
/// validator so the offending field can be named.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// OAuth 2.0 client secret.
	pub client_secret: CredentialSecret,
	/// Registered redirect URIs, in preference order.
	pub redirect_uris: Vec<String>,
}
impl CredentialRecord {
	/// Returns the preferred redirect URI (the first registered entry).
	pub fn default_redirect_uri(&self) -> Option<&str> {
		self.redirect_uris.first().map(String::as_str)
	}
}

/// Lossy projection of [`CredentialRecord`] for callers that never touch redirect URIs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalCredential {
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// OAuth 2.0 client secret.
	pub client_secret: CredentialSecret,
}
impl From<CredentialRecord> for MinimalCredential {
	fn from(record: CredentialRecord) -> Self {
		Self { client_id: record.client_id, client_secret: record.client_secret }
	}
}

/// Names of the three logical credential values shared by the environment and remote
/// sources.
///
/// The environment source reads them as process variables; the remote source looks the
/// same names up in the secrets-service listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialKeys {
	/// Variable/secret name carrying the client identifier.
	pub client_id: String,
	/// Variable/secret name carrying the client secret.
	pub client_secret: String,
	/// Variable/secret name carrying the redirect URI.
	pub redirect_uri: String,
}
impl Default for CredentialKeys {
	fn default() -> Self {
		Self {
			client_id: "OAUTH_CLIENT_ID".into(),
			client_secret: "OAUTH_CLIENT_SECRET".into(),
			redirect_uri: "OAUTH_REDIRECT_URI".into(),
		}
	}
}
impl CredentialKeys {
	/// Returns the three names in extraction order (id, secret, redirect).
	pub fn names(&self) -> [&str; 3] {
		[&self.client_id, &self.client_secret, &self.redirect_uri]
	}
}

/// Read-only snapshot of environment variables injected into resolution.
///
/// Sources never touch the ambient process environment; callers capture it once with
/// [`EnvMap::from_process`] (or build a map directly in tests) and pass it into
/// [`Resolver::resolve`](crate::resolver::Resolver::resolve). This keeps resolution
/// re-entrant and deterministic under test.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvMap(BTreeMap<String, String>);
impl EnvMap {
	/// Snapshots the current process environment, skipping non-Unicode entries.
	pub fn from_process() -> Self {
		std::env::vars_os()
			.filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
			.collect()
	}

	/// Returns the raw value for `name`, if present.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	/// Returns the value for `name` only when present and non-empty after trimming.
	pub fn get_non_empty(&self, name: &str) -> Option<&str> {
		self.get(name).map(str::trim).filter(|value| !value.is_empty())
	}

	/// Inserts or replaces a variable.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.0.insert(name.into(), value.into());
	}
}
impl FromIterator<(String, String)> for EnvMap {
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (String, String)>,
	{
		Self(iter.into_iter().collect())
	}
}
