//! Layered OAuth 2.0 client-credential resolution—file, environment, and remote secrets
//! sources behind one fallback chain with uniform diagnostics.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod adapter;
pub mod credential;
pub mod error;
pub mod obs;
pub mod resolver;
pub mod secrets;
pub mod source;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience fixtures for unit and integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		credential::EnvMap,
		secrets::{SecretValue, SecretsClient, SecretsError, SecretsFuture},
	};

	/// Builds an [`EnvMap`] from literal key/value pairs.
	pub fn env_map<const N: usize>(entries: [(&str, &str); N]) -> EnvMap {
		entries.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect()
	}

	/// [`SecretsClient`] backed by a fixed in-memory mapping.
	#[derive(Clone, Debug, Default)]
	pub struct StaticSecretsClient(pub BTreeMap<String, SecretValue>);
	impl StaticSecretsClient {
		/// Builds a client whose `list` call returns the provided name/value pairs.
		pub fn with_secrets<const N: usize>(entries: [(&str, &str); N]) -> Self {
			Self(
				entries
					.into_iter()
					.map(|(name, computed)| (name.to_owned(), SecretValue::new(computed)))
					.collect(),
			)
		}
	}
	impl SecretsClient for StaticSecretsClient {
		fn list<'a>(
			&'a self,
			_token: &'a str,
			_project: &'a str,
			_environment: &'a str,
		) -> SecretsFuture<'a, BTreeMap<String, SecretValue>> {
			Box::pin(async move { Ok(self.0.clone()) })
		}
	}

	/// [`SecretsClient`] whose `list` call always fails with the configured message.
	#[derive(Clone, Debug)]
	pub struct FailingSecretsClient(pub String);
	impl SecretsClient for FailingSecretsClient {
		fn list<'a>(
			&'a self,
			_token: &'a str,
			_project: &'a str,
			_environment: &'a str,
		) -> SecretsFuture<'a, BTreeMap<String, SecretValue>> {
			Box::pin(async move { Err(SecretsError::backend(self.0.clone())) })
		}
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {httpmock as _, tokio as _};
