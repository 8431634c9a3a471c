//! Environment-variable [`ConfigProvider`] following the Application Default Credentials
//! convention.

// std
use std::{env, env::VarError, path::Path};
// self
use crate::{
	_prelude::*,
	credential::CredentialConfig,
	error::ConfigError,
	provider::{self, ConfigProvider, FileProvider, ProviderFuture},
};

/// Variable consulted by [`EnvProvider::default`].
pub const DEFAULT_CREDENTIALS_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Reads the credential named by an environment variable.
///
/// A value starting with `{` is treated as the inline JSON document; anything else is a path
/// that is read like [`FileProvider`]. The variable is looked up on every load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvProvider {
	var: String,
}
impl EnvProvider {
	/// Creates a provider that consults `var`.
	pub fn new(var: impl Into<String>) -> Self {
		Self { var: var.into() }
	}

	/// Variable this provider consults.
	pub fn var(&self) -> &str {
		&self.var
	}

	fn load_now(&self) -> Result<CredentialConfig> {
		let value = env::var(&self.var).map_err(|e| match e {
			VarError::NotPresent => ConfigError::EnvVarUnset { name: self.var.clone() },
			VarError::NotUnicode(_) => ConfigError::EnvVarNotUnicode { name: self.var.clone() },
		})?;

		Self::resolve(&self.var, &value)
	}

	fn resolve(var: &str, value: &str) -> Result<CredentialConfig> {
		let trimmed = value.trim();

		if trimmed.is_empty() {
			return Err(ConfigError::EnvVarUnset { name: var.to_owned() }.into());
		}
		if trimmed.starts_with('{') {
			return provider::parse_document(&format!("env:{var}"), trimmed.as_bytes());
		}

		FileProvider::load_now(Path::new(trimmed))
	}
}
impl Default for EnvProvider {
	fn default() -> Self {
		Self::new(DEFAULT_CREDENTIALS_VAR)
	}
}
impl ConfigProvider for EnvProvider {
	fn load(&self) -> ProviderFuture<'_, CredentialConfig> {
		Box::pin(async move { self.load_now() })
	}

	fn describe(&self) -> String {
		format!("env:{}", self.var)
	}
}
