//! Configuration-source contract and the built-in credential providers.
//!
//! The crate never decides where a service-account secret lives. Startup code injects a
//! [`ConfigProvider`] (a file, an environment variable, or a document the application already
//! fetched from its secret store) and [`initialize`](crate::initialize) only sees the resulting
//! [`CredentialConfig`].

pub mod env;
pub mod file;
pub mod memory;

pub use env::EnvProvider;
pub use file::FileProvider;
pub use memory::MemoryProvider;

// self
use crate::{_prelude::*, credential::CredentialConfig, error::ConfigError};

/// Future returned by [`ConfigProvider::load`].
pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// Source of the service-account document.
///
/// Implementations return [`Error::Config`] when the source is missing or unreadable and
/// [`Error::Credential`] when its contents cannot be parsed. Remote secret stores may retry
/// transient fetch failures internally before giving up.
pub trait ConfigProvider
where
	Self: Send + Sync,
{
	/// Loads the credential document.
	fn load(&self) -> ProviderFuture<'_, CredentialConfig>;

	/// Short label identifying the source in logs and errors; never includes secret material.
	fn describe(&self) -> String;
}

/// Parses raw bytes from `source_name`, rejecting empty payloads as a configuration error.
pub(crate) fn parse_document(source_name: &str, bytes: &[u8]) -> Result<CredentialConfig> {
	if bytes.iter().all(u8::is_ascii_whitespace) {
		return Err(ConfigError::Empty { source_name: source_name.to_owned() }.into());
	}

	Ok(CredentialConfig::from_slice(bytes)?)
}
