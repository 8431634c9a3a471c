//! Raw service-account document exactly as the backend provider distributes it.

// self
use crate::{_prelude::*, credential::Secret, error::CredentialError};

/// Service-account document before validation.
///
/// Every field is optional at this stage so a missing field surfaces as
/// [`CredentialError::MissingField`] instead of an opaque parse failure. Unknown fields are
/// ignored; the schema is owned by the backend provider. The identity fields also accept the
/// camelCase spelling (`projectId`, `clientEmail`, `privateKey`, ...) used by JavaScript SDK
/// service-account objects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialConfig {
	/// Credential kind, `service_account` for this crate.
	#[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
	pub credential_type: Option<String>,
	/// Cloud project owning the service account.
	#[serde(alias = "projectId", default, skip_serializing_if = "Option::is_none")]
	pub project_id: Option<String>,
	/// Identifier of the private key.
	#[serde(alias = "privateKeyId", default, skip_serializing_if = "Option::is_none")]
	pub private_key_id: Option<String>,
	/// PEM-encoded private key.
	#[serde(alias = "privateKey", default, skip_serializing_if = "Option::is_none")]
	pub private_key: Option<Secret>,
	/// Service-account email (issuer identity).
	#[serde(alias = "clientEmail", default, skip_serializing_if = "Option::is_none")]
	pub client_email: Option<String>,
	/// Numeric OAuth client identifier.
	#[serde(alias = "clientId", default, skip_serializing_if = "Option::is_none")]
	pub client_id: Option<String>,
	/// Authorization endpoint advertised by the provider.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub auth_uri: Option<String>,
	/// Token endpoint the SDK exchanges signed assertions at.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token_uri: Option<String>,
	/// Provider certificate listing.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub auth_provider_x509_cert_url: Option<String>,
	/// Public certificate URL for this service account.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub client_x509_cert_url: Option<String>,
	/// API universe the credential belongs to.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub universe_domain: Option<String>,
}
impl CredentialConfig {
	/// Parses a JSON document, reporting the offending path on type mismatches.
	pub fn from_slice(bytes: &[u8]) -> Result<Self, CredentialError> {
		let mut deserializer = serde_json::Deserializer::from_slice(bytes);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| CredentialError::Parse { source })
	}
}
impl FromStr for CredentialConfig {
	type Err = CredentialError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_slice(s.as_bytes())
	}
}
