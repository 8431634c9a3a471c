//! In-memory [`ConfigProvider`] for tests and documents fetched by the application itself.

// self
use crate::{
	_prelude::*,
	credential::CredentialConfig,
	provider::{self, ConfigProvider, ProviderFuture},
};

#[derive(Clone, PartialEq, Eq)]
enum Document {
	Raw(Arc<str>),
	Parsed(CredentialConfig),
}

/// Serves a credential document held in memory.
#[derive(Clone, PartialEq, Eq)]
pub struct MemoryProvider(Document);
impl MemoryProvider {
	/// Serves a raw JSON document; parsing happens on load.
	pub fn from_json(json: impl Into<Arc<str>>) -> Self {
		Self(Document::Raw(json.into()))
	}

	/// Serves an already parsed document.
	pub fn from_config(config: CredentialConfig) -> Self {
		Self(Document::Parsed(config))
	}

	fn load_now(&self) -> Result<CredentialConfig> {
		match &self.0 {
			Document::Raw(json) => provider::parse_document("memory", json.as_bytes()),
			Document::Parsed(config) => Ok(config.clone()),
		}
	}
}
impl From<CredentialConfig> for MemoryProvider {
	fn from(config: CredentialConfig) -> Self {
		Self::from_config(config)
	}
}
impl Debug for MemoryProvider {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("MemoryProvider(..)")
	}
}
impl ConfigProvider for MemoryProvider {
	fn load(&self) -> ProviderFuture<'_, CredentialConfig> {
		Box::pin(async move { self.load_now() })
	}

	fn describe(&self) -> String {
		"memory".into()
	}
}
