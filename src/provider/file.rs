//! File-backed [`ConfigProvider`] for credentials mounted on disk.

// std
use std::{
	fs,
	io::ErrorKind,
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	credential::CredentialConfig,
	error::ConfigError,
	provider::{self, ConfigProvider, ProviderFuture},
};

/// Reads a service-account JSON document from a fixed path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileProvider {
	path: PathBuf,
}
impl FileProvider {
	/// Creates a provider for the provided path. Nothing is read until [`ConfigProvider::load`].
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Path this provider reads from.
	pub fn path(&self) -> &Path {
		&self.path
	}

	pub(crate) fn load_now(path: &Path) -> Result<CredentialConfig> {
		let bytes = fs::read(path).map_err(|e| match e.kind() {
			ErrorKind::NotFound => ConfigError::Missing { path: path.to_owned() },
			_ => ConfigError::Unreadable { path: path.to_owned(), source: e },
		})?;

		provider::parse_document(&path.display().to_string(), &bytes)
	}
}
impl ConfigProvider for FileProvider {
	fn load(&self) -> ProviderFuture<'_, CredentialConfig> {
		Box::pin(async move { Self::load_now(&self.path) })
	}

	fn describe(&self) -> String {
		format!("file:{}", self.path.display())
	}
}
