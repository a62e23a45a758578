//! Key-file credential source reading OAuth-console JSON exports.

// std
use std::{
	fs,
	path::{Path, PathBuf},
};
// crates.io
use serde_json::{Map, Value};
// self
use crate::{
	_prelude::*,
	credential::{CredentialRecord, CredentialSecret, DEFAULT_REDIRECT_URI, EnvMap},
	error::SourceError,
	obs::SourceKind,
	source::{CredentialSource, SourceFuture},
};

#[derive(Debug, Deserialize)]
struct KeyFileSection {
	client_id: String,
	client_secret: String,
	redirect_uris: Option<Vec<String>>,
}

/// Credential source backed by a local JSON key file.
///
/// Two document shapes are accepted: the standard OAuth-console export with a nested
/// `installed` object, or a flat object carrying top-level `client_id`/`client_secret`
/// (with `redirect_uris` optional). The `installed` shape is taken verbatim; the flat
/// shape falls back to [`DEFAULT_REDIRECT_URI`] when no redirect is listed.
#[derive(Clone, Debug)]
pub struct FileSource {
	path: PathBuf,
}
impl FileSource {
	/// Creates a source reading the key file at `path`.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Returns the configured key file path.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read_record(&self) -> Result<CredentialRecord, SourceError> {
		let bytes = fs::read(&self.path)
			.map_err(|e| SourceError::Io { path: self.path.clone(), source: e })?;
		let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
		let document: Value = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|e| SourceError::Parse { path: self.path.clone(), source: e })?;
		let Value::Object(fields) = document else {
			return Err(self.invalid_format());
		};

		if let Some(installed) = fields.get("installed") {
			return self.classify_installed(installed);
		}

		self.classify_flat(&fields)
	}

	// Console exports wrap everything in `installed`; its fields are taken verbatim with
	// no redirect defaulting. An empty `redirect_uris` array counts as absent.
	fn classify_installed(&self, installed: &Value) -> Result<CredentialRecord, SourceError> {
		let section: KeyFileSection =
			serde_json::from_value(installed.clone()).map_err(|_| self.invalid_format())?;
		let redirect_uris = section
			.redirect_uris
			.filter(|uris| !uris.is_empty())
			.ok_or_else(|| self.invalid_format())?;

		Ok(CredentialRecord {
			client_id: section.client_id,
			client_secret: CredentialSecret::new(section.client_secret),
			redirect_uris,
		})
	}

	fn classify_flat(&self, fields: &Map<String, Value>) -> Result<CredentialRecord, SourceError> {
		if !fields.contains_key("client_id") || !fields.contains_key("client_secret") {
			return Err(self.invalid_format());
		}

		let section: KeyFileSection = serde_json::from_value(Value::Object(fields.clone()))
			.map_err(|_| self.invalid_format())?;
		let redirect_uris = section
			.redirect_uris
			.filter(|uris| !uris.is_empty())
			.unwrap_or_else(|| vec![DEFAULT_REDIRECT_URI.to_owned()]);

		Ok(CredentialRecord {
			client_id: section.client_id,
			client_secret: CredentialSecret::new(section.client_secret),
			redirect_uris,
		})
	}

	fn invalid_format(&self) -> SourceError {
		SourceError::InvalidFormat { path: self.path.clone() }
	}
}
impl CredentialSource for FileSource {
	fn name(&self) -> &'static str {
		"file"
	}

	fn kind(&self) -> SourceKind {
		SourceKind::File
	}

	fn attempt<'a>(&'a self, _env: &'a EnvMap) -> SourceFuture<'a, CredentialRecord> {
		Box::pin(async move { self.read_record() })
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::{
		env, process,
		time::{SystemTime, UNIX_EPOCH},
	};
	// self
	use super::*;

	fn temp_key_file(name: &str, contents: &str) -> PathBuf {
		let nanos = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.expect("System clock should be past the epoch.")
			.as_nanos();
		let path =
			env::temp_dir().join(format!("oauth2_resolver_{name}_{}_{nanos}.json", process::id()));

		fs::write(&path, contents).expect("Failed to write key file fixture.");

		path
	}

	async fn attempt(path: &Path) -> Result<CredentialRecord, SourceError> {
		FileSource::new(path).attempt(&EnvMap::default()).await
	}

	#[tokio::test]
	async fn installed_shape_is_extracted_verbatim() {
		let path = temp_key_file(
			"installed",
			r#"{"installed":{"client_id":"id-installed","client_secret":"secret-installed","redirect_uris":["https://app.example/cb","https://alt.example/cb"]}}"#,
		);
		let record = attempt(&path).await.expect("Installed-shaped key file should resolve.");

		assert_eq!(record.client_id, "id-installed");
		assert_eq!(record.client_secret.expose(), "secret-installed");
		assert_eq!(record.redirect_uris, ["https://app.example/cb", "https://alt.example/cb"]);

		fs::remove_file(&path).expect("Failed to remove key file fixture.");
	}

	#[tokio::test]
	async fn flat_shape_defaults_the_redirect_uri() {
		let path =
			temp_key_file("flat", r#"{"client_id":"id-flat","client_secret":"secret-flat"}"#);
		let record = attempt(&path).await.expect("Flat-shaped key file should resolve.");

		assert_eq!(record.client_id, "id-flat");
		assert_eq!(record.redirect_uris, [DEFAULT_REDIRECT_URI]);

		fs::remove_file(&path).expect("Failed to remove key file fixture.");
	}

	#[tokio::test]
	async fn flat_shape_keeps_explicit_redirect_uris() {
		let path = temp_key_file(
			"flat_redirect",
			r#"{"client_id":"id-flat","client_secret":"secret-flat","redirect_uris":["https://flat.example/cb"]}"#,
		);
		let record = attempt(&path).await.expect("Flat-shaped key file should resolve.");

		assert_eq!(record.redirect_uris, ["https://flat.example/cb"]);

		fs::remove_file(&path).expect("Failed to remove key file fixture.");
	}

	#[tokio::test]
	async fn installed_shape_with_an_empty_redirect_array_is_rejected() {
		let path = temp_key_file(
			"installed_empty_redirects",
			r#"{"installed":{"client_id":"id","client_secret":"secret","redirect_uris":[]}}"#,
		);
		let error = attempt(&path).await.expect_err("Empty redirect array should be rejected.");

		assert!(matches!(error, SourceError::InvalidFormat { .. }));

		fs::remove_file(&path).expect("Failed to remove key file fixture.");
	}

	#[tokio::test]
	async fn flat_shape_with_an_empty_redirect_array_falls_back_to_the_default() {
		let path = temp_key_file(
			"flat_empty_redirects",
			r#"{"client_id":"id-flat","client_secret":"secret-flat","redirect_uris":[]}"#,
		);
		let record = attempt(&path).await.expect("Flat-shaped key file should resolve.");

		assert_eq!(record.redirect_uris, [DEFAULT_REDIRECT_URI]);

		fs::remove_file(&path).expect("Failed to remove key file fixture.");
	}

	#[tokio::test]
	async fn unrecognized_shape_names_both_accepted_shapes() {
		let path = temp_key_file("unrecognized", r#"{"web":{"client_id":"id"}}"#);
		let error = attempt(&path).await.expect_err("Unrecognized shape should fail.");

		assert!(matches!(error, SourceError::InvalidFormat { .. }));

		let message = error.to_string();

		assert!(message.contains("`installed`"));
		assert!(message.contains("`client_id` and `client_secret`"));

		fs::remove_file(&path).expect("Failed to remove key file fixture.");
	}

	#[tokio::test]
	async fn malformed_json_reports_a_parse_failure() {
		let path = temp_key_file("malformed", "{\"client_id\": ");
		let error = attempt(&path).await.expect_err("Malformed JSON should fail.");

		assert!(matches!(error, SourceError::Parse { .. }));

		fs::remove_file(&path).expect("Failed to remove key file fixture.");
	}

	#[tokio::test]
	async fn missing_file_reports_an_io_failure() {
		let path = env::temp_dir().join("oauth2_resolver_definitely_missing.json");
		let error = attempt(&path).await.expect_err("Missing key file should fail.");

		assert!(matches!(error, SourceError::Io { .. }));
	}
}
