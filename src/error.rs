//! Resolver-level error types shared across sources, resolution, and projections.

// std
use std::path::PathBuf;
// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical credential-load error exposed by public APIs.
///
/// Every projection and resolution entry point reports failures through this umbrella so
/// callers never handle source-library error shapes directly.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A single credential source failed.
	#[error(transparent)]
	Source(#[from] SourceError),
	/// Every configured credential source failed.
	#[error(transparent)]
	Resolve(#[from] ResolveError),
	/// A resolved record is structurally incomplete.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Local configuration problem while constructing the authorization client.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Failures raised by individual credential sources.
///
/// Sources normalize every underlying library failure into one of these variants at the
/// source boundary; nothing rawer crosses into the resolver.
#[derive(Debug, ThisError)]
pub enum SourceError {
	/// Key file is missing or unreadable.
	#[error("Failed to read the key file at {}.", .path.display())]
	Io {
		/// Path that failed to read.
		path: PathBuf,
		/// Underlying filesystem failure.
		#[source]
		source: std::io::Error,
	},
	/// Key file holds malformed JSON.
	#[error("Key file at {} is not valid JSON.", .path.display())]
	Parse {
		/// Path that failed to parse.
		path: PathBuf,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Key file JSON matches neither accepted document shape.
	#[error(
		"Key file at {} matches neither accepted shape: expected a nested `installed` object \
		or a flat object with top-level `client_id` and `client_secret`.",
		.path.display()
	)]
	InvalidFormat {
		/// Path whose document was unrecognized.
		path: PathBuf,
	},
	/// One or more required configuration values are absent or empty.
	#[error("Missing configuration value(s): {}.", .missing.join(", "))]
	MissingConfig {
		/// Names of every absent or empty variable/key.
		missing: Vec<String>,
	},
	/// Secrets-service access token variable is absent or empty.
	#[error("Missing secrets-service access token: the `{variable}` variable is not set.")]
	MissingToken {
		/// Environment variable expected to carry the token.
		variable: String,
	},
	/// Secrets service could not be reached or answered abnormally.
	#[error("Secrets service is unavailable: {message}.")]
	Unavailable {
		/// Human-readable transport/SDK failure payload.
		message: String,
	},
}

/// Terminal resolution failure aggregating every attempted source.
#[derive(Debug, ThisError)]
pub enum ResolveError {
	/// No configured source yielded a credential record.
	#[error("No credential source yielded OAuth client credentials: {}.", render_attempts(.attempts))]
	NotFound {
		/// Per-source failure reasons, in attempt order.
		attempts: Vec<SourceFailure>,
	},
}
impl ResolveError {
	/// Returns the per-source failures behind a total resolution failure.
	pub fn attempts(&self) -> &[SourceFailure] {
		match self {
			Self::NotFound { attempts } => attempts,
		}
	}
}

/// One attempted source and the reason it failed.
#[derive(Debug)]
pub struct SourceFailure {
	/// Stable source name (e.g. `file`, `environment`, `remote-secrets`).
	pub source: &'static str,
	/// Normalized failure produced by the source.
	pub reason: SourceError,
}
impl Display for SourceFailure {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}: {}", self.source, self.reason)
	}
}

/// Structural-completeness failures on a resolved record.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ValidationError {
	/// Resolved record lacks one or more mandatory fields.
	#[error("Resolved credentials are incomplete; missing field(s): {}.", .missing.join(", "))]
	Incomplete {
		/// Names of each empty mandatory field.
		missing: Vec<&'static str>,
	},
}

/// Configuration failures raised while constructing the authorization client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Redirect URI cannot be parsed.
	#[error("Redirect URI is invalid.")]
	InvalidRedirect {
		/// Underlying parsing failure.
		#[source]
		source: oauth2::url::ParseError,
	},
}

fn render_attempts(attempts: &[SourceFailure]) -> String {
	if attempts.is_empty() {
		return "no sources were configured".into();
	}

	attempts.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
