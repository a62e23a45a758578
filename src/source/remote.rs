//! Remote secrets-service credential source.

// self
use crate::{
	_prelude::*,
	credential::{CredentialKeys, CredentialRecord, EnvMap},
	error::SourceError,
	obs::SourceKind,
	secrets::SecretsClient,
	source::{self, CredentialSource, SourceFuture},
};

/// Environment variable consulted for the secrets-service access token by default.
pub const DEFAULT_TOKEN_VARIABLE: &str = "SECRETS_SERVICE_TOKEN";

/// Credential source querying a remote secrets service.
///
/// The access token is itself taken from the injected environment; without it the source
/// fails fast with `MissingToken` and the service is never contacted. With a token, one
/// `list(project, environment)` call fetches the name/value mapping and the three
/// configured [`CredentialKeys`] names are extracted from the `computed` values. Every
/// SDK failure is re-wrapped as `SourceUnavailable` so the resolver sees a uniform
/// failure shape regardless of transport.
#[derive(Clone)]
pub struct RemoteSource<C> {
	client: Arc<C>,
	project: String,
	environment: String,
	token_variable: String,
	keys: CredentialKeys,
}
impl<C> RemoteSource<C>
where
	C: SecretsClient,
{
	/// Creates a source listing `project`/`environment` through `client`, with the
	/// default token variable and secret names.
	pub fn new(client: impl Into<Arc<C>>, project: impl Into<String>, environment: impl Into<String>) -> Self {
		Self {
			client: client.into(),
			project: project.into(),
			environment: environment.into(),
			token_variable: DEFAULT_TOKEN_VARIABLE.into(),
			keys: CredentialKeys::default(),
		}
	}

	/// Overrides the environment variable holding the access token.
	pub fn token_variable(mut self, variable: impl Into<String>) -> Self {
		self.token_variable = variable.into();

		self
	}

	/// Overrides the secret names looked up in the listing.
	pub fn with_keys(mut self, keys: CredentialKeys) -> Self {
		self.keys = keys;

		self
	}
}
impl<C> Debug for RemoteSource<C> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RemoteSource")
			.field("project", &self.project)
			.field("environment", &self.environment)
			.field("token_variable", &self.token_variable)
			.finish()
	}
}
impl<C> CredentialSource for RemoteSource<C>
where
	C: SecretsClient,
{
	fn name(&self) -> &'static str {
		"remote-secrets"
	}

	fn kind(&self) -> SourceKind {
		SourceKind::RemoteSecrets
	}

	fn attempt<'a>(&'a self, env: &'a EnvMap) -> SourceFuture<'a, CredentialRecord> {
		Box::pin(async move {
			let token = env.get_non_empty(&self.token_variable).ok_or_else(|| {
				SourceError::MissingToken { variable: self.token_variable.clone() }
			})?;
			let secrets = self
				.client
				.list(token, &self.project, &self.environment)
				.await
				.map_err(|e| SourceError::Unavailable { message: e.message })?;

			source::extract_credentials(&self.keys, |name| {
				secrets
					.get(name)
					.map(|value| value.computed.trim())
					.filter(|computed| !computed.is_empty())
			})
		})
	}
}
