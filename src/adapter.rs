//! Validation and projections over resolved credential records.

// crates.io
use oauth2::{
	AuthUrl, ClientId, ClientSecret, EndpointNotSet, EndpointSet, RedirectUrl, TokenUrl,
	basic::BasicClient,
};
// self
use crate::{
	_prelude::*,
	credential::{CredentialRecord, MinimalCredential},
	error::{ConfigError, ValidationError},
};

/// Authorization-client handle produced by [`authorization_client`].
///
/// A `BasicClient` with authorization, token, and redirect endpoints set; the remaining
/// OAuth 2.0 protocol work (token exchange, refresh, PKCE) belongs to the `oauth2` crate
/// and the hosting process.
pub type AuthorizationClient =
	BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Provider endpoints required to construct an authorization client.
///
/// Collaborator data supplied by the caller; endpoints are not credentials and are never
/// resolved through the source chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthEndpoints {
	/// Authorization endpoint.
	pub authorization: Url,
	/// Token endpoint.
	pub token: Url,
}

/// Verifies structural completeness of a resolved record.
///
/// Both projection helpers call this first, so an empty `client_id` or `client_secret`
/// always fails with a reason naming the offending field(s).
pub fn validate(record: &CredentialRecord) -> Result<(), ValidationError> {
	let mut missing = Vec::new();

	if record.client_id.trim().is_empty() {
		missing.push("client_id");
	}
	if record.client_secret.expose().trim().is_empty() {
		missing.push("client_secret");
	}

	if missing.is_empty() { Ok(()) } else { Err(ValidationError::Incomplete { missing }) }
}

/// Projects a validated record to the minimal id/secret pair.
pub fn minimal(record: CredentialRecord) -> Result<MinimalCredential> {
	validate(&record)?;

	Ok(record.into())
}

/// Constructs an authorization client from a validated record.
///
/// Uses `redirect_uris[0]` as the default redirect target; a record with no redirect
/// entries or an unparsable first entry fails as an invalid redirect, wrapped in the
/// crate umbrella error like every other projection failure.
pub fn authorization_client(
	record: &CredentialRecord,
	endpoints: &AuthEndpoints,
) -> Result<AuthorizationClient> {
	validate(record)?;

	let redirect = record.default_redirect_uri().ok_or(ConfigError::InvalidRedirect {
		source: oauth2::url::ParseError::EmptyHost,
	})?;
	let redirect = RedirectUrl::new(redirect.to_owned())
		.map_err(|e| ConfigError::InvalidRedirect { source: e })?;
	let client = BasicClient::new(ClientId::new(record.client_id.clone()))
		.set_client_secret(ClientSecret::new(record.client_secret.expose().to_owned()))
		.set_auth_uri(AuthUrl::from_url(endpoints.authorization.clone()))
		.set_token_uri(TokenUrl::from_url(endpoints.token.clone()))
		.set_redirect_uri(redirect);

	Ok(client)
}
