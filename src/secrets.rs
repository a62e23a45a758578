//! Secrets-service SDK boundary: listing contract and built-in HTTP binding.

#[cfg(feature = "reqwest")] pub mod http;

#[cfg(feature = "reqwest")] pub use http::ReqwestSecretsClient;

// self
use crate::_prelude::*;

/// Boxed future returned by [`SecretsClient`] operations.
pub type SecretsFuture<'a, T> =
	Pin<Box<dyn Future<Output = Result<T, SecretsError>> + 'a + Send>>;

/// Remote secrets-service contract consumed by the remote credential source.
///
/// The service stores named key/value secrets per project and environment. The resolver
/// treats implementations as a black box: timeout policy, retries, and wire details all
/// live behind this trait, and every failure surfaces as an opaque [`SecretsError`].
pub trait SecretsClient
where
	Self: Send + Sync,
{
	/// Lists every secret for the project/environment pair, keyed by secret name.
	fn list<'a>(
		&'a self,
		token: &'a str,
		project: &'a str,
		environment: &'a str,
	) -> SecretsFuture<'a, BTreeMap<String, SecretValue>>;
}

/// One secret entry as returned by the service listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretValue {
	/// Fully computed secret value after service-side substitution.
	pub computed: String,
}
impl SecretValue {
	/// Wraps a computed value.
	pub fn new(computed: impl Into<String>) -> Self {
		Self { computed: computed.into() }
	}
}

/// Opaque failure produced by [`SecretsClient`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{message}")]
pub struct SecretsError {
	/// Human-readable transport/SDK failure payload.
	pub message: String,
}
impl SecretsError {
	/// Wraps a backend failure message.
	pub fn backend(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}
}
