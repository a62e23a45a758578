//! Environment-variable credential source.

// self
use crate::{
	_prelude::*,
	credential::{CredentialKeys, CredentialRecord, EnvMap},
	obs::SourceKind,
	source::{self, CredentialSource, SourceFuture},
};

/// Credential source reading the three configured variables from the injected
/// environment snapshot.
///
/// Succeeds only when all three are present and non-empty; otherwise fails with a
/// `MissingConfig` reason naming every variable that was absent or blank.
#[derive(Clone, Debug, Default)]
pub struct EnvSource {
	keys: CredentialKeys,
}
impl EnvSource {
	/// Creates a source reading the default `OAUTH_*` variable names.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a source reading custom variable names.
	pub fn with_keys(keys: CredentialKeys) -> Self {
		Self { keys }
	}
}
impl CredentialSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn kind(&self) -> SourceKind {
		SourceKind::Environment
	}

	fn attempt<'a>(&'a self, env: &'a EnvMap) -> SourceFuture<'a, CredentialRecord> {
		Box::pin(async move { source::extract_credentials(&self.keys, |name| env.get_non_empty(name)) })
	}
}
