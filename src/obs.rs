//! Optional observability helpers for credential resolution.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth2_resolver.resolve` with the
//!   `source` and `stage` fields, plus the non-fatal notice naming the winning source.
//! - Enable `metrics` to increment the `oauth2_resolver_resolve_total` counter for every
//!   attempt/success/failure, labeled by `source` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Credential source kinds observed by the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
	/// Local JSON key file.
	File,
	/// Injected process environment.
	Environment,
	/// Remote secrets service.
	RemoteSecrets,
}
impl SourceKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SourceKind::File => "file",
			SourceKind::Environment => "environment",
			SourceKind::RemoteSecrets => "remote_secrets",
		}
	}
}
impl Display for SourceKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each source attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolveOutcome {
	/// Entry to a source attempt.
	Attempt,
	/// Attempt produced a credential record.
	Success,
	/// Attempt failed and the chain moved on.
	Failure,
}
impl ResolveOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResolveOutcome::Attempt => "attempt",
			ResolveOutcome::Success => "success",
			ResolveOutcome::Failure => "failure",
		}
	}
}
impl Display for ResolveOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
