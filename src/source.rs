//! Credential source contract and the built-in file/environment/remote readers.
//!
//! Each reader stands alone: it either produces a normalized [`CredentialRecord`] or
//! fails with a [`SourceError`] describing exactly what was missing or malformed. The
//! resolver composes readers as an ordered fallback list behind the single
//! [`CredentialSource`] capability, so priority is configuration, not dispatch.

pub mod env;
pub mod file;
pub mod remote;

pub use env::EnvSource;
pub use file::FileSource;
pub use remote::RemoteSource;

// self
use crate::{
	_prelude::*,
	credential::{CredentialKeys, CredentialRecord, CredentialSecret, EnvMap},
	error::SourceError,
	obs::SourceKind,
};

/// Boxed future returned by [`CredentialSource::attempt`].
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SourceError>> + 'a + Send>>;

/// Capability implemented by every credential source.
///
/// An attempt is one-shot: it performs at most one read of its backing system and either
/// yields a complete record or a normalized failure. Sources commit no state, so an
/// abandoned attempt has no side effects and a fresh attempt observes the world anew.
pub trait CredentialSource
where
	Self: Send + Sync,
{
	/// Stable source name used in diagnostics and failure aggregation.
	fn name(&self) -> &'static str;

	/// Observability label for this source.
	fn kind(&self) -> SourceKind;

	/// Attempts to produce a credential record from this source.
	fn attempt<'a>(&'a self, env: &'a EnvMap) -> SourceFuture<'a, CredentialRecord>;
}

/// Collects the values for `keys` from `lookup`, or the names of those that are absent.
///
/// Shared by the environment and remote readers, which extract the same three logical
/// values from different backing maps.
pub(crate) fn extract_credentials<'a>(
	keys: &CredentialKeys,
	mut lookup: impl FnMut(&str) -> Option<&'a str>,
) -> Result<CredentialRecord, SourceError> {
	let mut missing = Vec::new();
	let mut value_of = |name: &str| {
		let value = lookup(name);

		if value.is_none() {
			missing.push(name.to_owned());
		}

		value.unwrap_or_default().to_owned()
	};
	let client_id = value_of(&keys.client_id);
	let client_secret = value_of(&keys.client_secret);
	let redirect_uri = value_of(&keys.redirect_uri);

	if !missing.is_empty() {
		return Err(SourceError::MissingConfig { missing });
	}

	Ok(CredentialRecord {
		client_id,
		client_secret: CredentialSecret::new(client_secret),
		redirect_uris: vec![redirect_uri],
	})
}
