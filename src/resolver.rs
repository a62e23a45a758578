//! Ordered-fallback resolution over configured credential sources.

// self
use crate::{
	_prelude::*,
	credential::{CredentialRecord, EnvMap},
	error::{ResolveError, SourceFailure},
	obs::{self, ResolveOutcome, ResolveSpan},
	source::CredentialSource,
};

/// Tries credential sources in a fixed priority order and returns the first success.
///
/// The chain is fallback, not redundancy: sources are attempted strictly one after
/// another, each exactly once per call, and the first record wins regardless of which
/// later sources might also have succeeded. The resolver holds no mutable state, so a
/// single value can serve concurrent callers and a call abandoned mid-attempt commits
/// nothing. Callers wanting retry-on-transient-failure re-invoke [`Resolver::resolve`].
#[derive(Clone, Default)]
pub struct Resolver {
	sources: Vec<Arc<dyn CredentialSource>>,
	quiet: bool,
}
impl Resolver {
	/// Creates a resolver with no sources configured.
	///
	/// Resolution against an empty chain always fails; add sources in priority order
	/// with [`Resolver::with_source`].
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a source to the end of the priority order.
	pub fn with_source(mut self, source: impl CredentialSource + 'static) -> Self {
		self.sources.push(Arc::new(source));

		self
	}

	/// Suppresses the non-fatal source-selected notice, keeping test output
	/// deterministic.
	pub fn quiet(mut self) -> Self {
		self.quiet = true;

		self
	}

	/// Resolves credentials by attempting every configured source in order.
	///
	/// Returns the first successful [`CredentialRecord`]. When every source fails, the
	/// returned [`ResolveError::NotFound`] aggregates each source's specific reason so
	/// operators can tell which layer to fix.
	///
	/// The non-fatal notice naming the winning source is emitted through the optional
	/// observability layer: enable the `tracing` crate feature to receive it (and
	/// [`Resolver::quiet`] to silence it again); default-features builds stay silent.
	pub async fn resolve(&self, env: &EnvMap) -> Result<CredentialRecord, ResolveError> {
		let mut attempts = Vec::with_capacity(self.sources.len());

		for source in &self.sources {
			let kind = source.kind();
			let span = ResolveSpan::new(kind, "resolve");

			obs::record_resolve_outcome(kind, ResolveOutcome::Attempt);

			match span.instrument(source.attempt(env)).await {
				Ok(record) => {
					obs::record_resolve_outcome(kind, ResolveOutcome::Success);

					if !self.quiet {
						obs::notice_source_selected(kind, source.name());
					}

					return Ok(record);
				},
				Err(reason) => {
					obs::record_resolve_outcome(kind, ResolveOutcome::Failure);
					attempts.push(SourceFailure { source: source.name(), reason });
				},
			}
		}

		Err(ResolveError::NotFound { attempts })
	}
}
impl Debug for Resolver {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Resolver")
			.field("sources", &self.sources.iter().map(|s| s.name()).collect::<Vec<_>>())
			.field("quiet", &self.quiet)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		_preludet::*,
		error::SourceError,
		source::{EnvSource, FileSource, RemoteSource},
	};

	fn full_env() -> EnvMap {
		env_map([
			("OAUTH_CLIENT_ID", "id1"),
			("OAUTH_CLIENT_SECRET", "secret1"),
			("OAUTH_REDIRECT_URI", "http://x/cb"),
		])
	}

	#[tokio::test]
	async fn first_successful_source_wins() {
		let remote = RemoteSource::new(
			StaticSecretsClient::with_secrets([
				("OAUTH_CLIENT_ID", "remote-id"),
				("OAUTH_CLIENT_SECRET", "remote-secret"),
				("OAUTH_REDIRECT_URI", "https://remote.example/cb"),
			]),
			"demo-project",
			"production",
		);
		let mut env = full_env();

		env.insert("SECRETS_SERVICE_TOKEN", "svc-token");

		let record = Resolver::new()
			.with_source(EnvSource::new())
			.with_source(remote)
			.quiet()
			.resolve(&env)
			.await
			.expect("Environment source should win over the remote source.");

		assert_eq!(record.client_id, "id1");
	}

	#[tokio::test]
	async fn chain_falls_through_to_later_sources() {
		let remote = RemoteSource::new(
			StaticSecretsClient::with_secrets([
				("OAUTH_CLIENT_ID", "remote-id"),
				("OAUTH_CLIENT_SECRET", "remote-secret"),
				("OAUTH_REDIRECT_URI", "https://remote.example/cb"),
			]),
			"demo-project",
			"production",
		);
		let env = env_map([("SECRETS_SERVICE_TOKEN", "svc-token")]);
		let record = Resolver::new()
			.with_source(EnvSource::new())
			.with_source(remote)
			.quiet()
			.resolve(&env)
			.await
			.expect("Remote source should back up the empty environment.");

		assert_eq!(record.client_id, "remote-id");
	}

	#[tokio::test]
	async fn total_failure_aggregates_every_reason() {
		let error = Resolver::new()
			.with_source(FileSource::new("/nonexistent/oauth2_resolver_keys.json"))
			.with_source(EnvSource::new())
			.with_source(RemoteSource::new(
				FailingSecretsClient("connection refused".into()),
				"demo-project",
				"production",
			))
			.quiet()
			.resolve(&env_map([("SECRETS_SERVICE_TOKEN", "svc-token")]))
			.await
			.expect_err("Every source failing should aggregate.");
		let attempts = error.attempts();

		assert_eq!(attempts.len(), 3);
		assert_eq!(attempts[0].source, "file");
		assert!(matches!(attempts[0].reason, SourceError::Io { .. }));
		assert_eq!(attempts[1].source, "environment");
		assert!(matches!(attempts[1].reason, SourceError::MissingConfig { .. }));
		assert_eq!(attempts[2].source, "remote-secrets");
		assert!(matches!(attempts[2].reason, SourceError::Unavailable { .. }));

		let message = error.to_string();

		assert!(message.contains("file: "));
		assert!(message.contains("environment: "));
		assert!(message.contains("remote-secrets: "));
		assert!(message.contains("connection refused"));
	}

	#[tokio::test]
	async fn resolution_is_idempotent_for_an_unchanged_environment() {
		let resolver = Resolver::new().with_source(EnvSource::new()).quiet();
		let env = full_env();
		let first = resolver.resolve(&env).await.expect("First resolution should succeed.");
		let second = resolver.resolve(&env).await.expect("Second resolution should succeed.");

		assert_eq!(first, second);
	}

	#[tokio::test]
	async fn empty_chain_fails_with_no_attempts() {
		let error = Resolver::new()
			.quiet()
			.resolve(&EnvMap::default())
			.await
			.expect_err("Empty chain should fail.");

		assert!(error.attempts().is_empty());
	}
}
