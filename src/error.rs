//! Bootstrap error types shared across providers, credential validation, and the client handle.

// std
use std::{io, path::PathBuf};
// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Canonical bootstrap error exposed by public APIs.
///
/// Every variant raised by [`initialize`](crate::initialize) is fatal for process startup.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The configuration source is missing or unreadable.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The credential document is missing fields or is malformed.
	#[error(transparent)]
	Credential(#[from] CredentialError),
	/// The cloud SDK rejected the credential or the client could not be constructed.
	#[error(transparent)]
	Initialization(#[from] InitializationError),
	/// The cloud SDK failed to produce an access token after initialization.
	#[error(transparent)]
	Token(#[from] TokenError),
}

/// Failures raised while locating or reading the configuration source.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// The credential file does not exist.
	#[error("Credential file {} does not exist.", .path.display())]
	Missing {
		/// Path that was probed.
		path: PathBuf,
	},
	/// The credential file exists but could not be read.
	#[error("Credential file {} could not be read.", .path.display())]
	Unreadable {
		/// Path that failed to load.
		path: PathBuf,
		/// Underlying IO failure.
		#[source]
		source: io::Error,
	},
	/// The configuration source yielded no bytes.
	#[error("Configuration source `{source_name}` is empty.")]
	Empty {
		/// Label of the provider that returned nothing.
		source_name: String,
	},
	/// The environment variable pointing at the credential is unset or blank.
	#[error("Environment variable `{name}` is not set.")]
	EnvVarUnset {
		/// Variable name.
		name: String,
	},
	/// The environment variable holds bytes that are not valid unicode.
	#[error("Environment variable `{name}` is not valid unicode.")]
	EnvVarNotUnicode {
		/// Variable name.
		name: String,
	},
}

/// Validation failures for the credential document.
#[derive(Debug, ThisError)]
pub enum CredentialError {
	/// The document is not valid JSON or a field has the wrong JSON type.
	#[error("Credential document is malformed.")]
	Parse {
		/// Structured parsing failure including the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// A required field is absent or empty.
	#[error("Credential is missing the required `{field}` field.")]
	MissingField {
		/// Field name as spelled in the credential schema.
		field: &'static str,
	},
	/// A field is present but fails validation.
	#[error("Credential field `{field}` is invalid: {reason}.")]
	InvalidField {
		/// Field name as spelled in the credential schema.
		field: &'static str,
		/// Human-readable validation failure.
		reason: String,
	},
	/// The document describes a different credential kind.
	#[error("Credential type `{found}` is not supported; expected `service_account`.")]
	UnsupportedType {
		/// Value of the `type` field.
		found: String,
	},
}
impl CredentialError {
	pub(crate) fn invalid(field: &'static str, reason: impl Display) -> Self {
		Self::InvalidField { field, reason: reason.to_string() }
	}
}

/// Failures raised by the cloud SDK while constructing the credential object or client.
#[derive(Debug, ThisError)]
pub enum InitializationError {
	/// The SDK's credential factory rejected the credential (e.g. invalid key format).
	#[error("Cloud SDK rejected the service account credential.")]
	CredentialRejected {
		/// SDK-specific failure.
		#[source]
		source: BoxError,
	},
	/// The HTTP client used for authenticated calls could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl InitializationError {
	/// Wraps an SDK factory failure inside [`InitializationError`].
	pub fn credential_rejected(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::CredentialRejected { source: Box::new(src) }
	}

	/// Wraps a transport's builder failure inside [`InitializationError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for InitializationError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Failures surfaced when the SDK is asked for an access token.
#[derive(Debug, ThisError)]
pub enum TokenError {
	/// The SDK could not obtain a token (network, token endpoint, signing).
	#[error("Cloud SDK failed to obtain an access token.")]
	Sdk {
		/// SDK-specific failure.
		#[source]
		source: BoxError,
	},
	/// The token endpoint answered without an access token.
	#[error("Token endpoint response did not contain an access token.")]
	MissingAccessToken,
}
impl TokenError {
	/// Wraps an SDK token failure inside [`TokenError`].
	pub fn sdk(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Sdk { source: Box::new(src) }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn config_error_converts_into_bootstrap_error_with_source() {
		let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
		let error: Error =
			ConfigError::Unreadable { path: PathBuf::from("/secrets/sa.json"), source: io_error }
				.into();

		assert!(matches!(error, Error::Config(ConfigError::Unreadable { .. })));
		assert_eq!(error.to_string(), "Credential file /secrets/sa.json could not be read.");

		let source = StdError::source(&error)
			.expect("Transparent config error should expose the IO failure as its source.");

		assert_eq!(source.to_string(), "denied");
	}

	#[test]
	fn credential_error_messages_name_the_field() {
		let missing: Error = CredentialError::MissingField { field: "private_key" }.into();
		let invalid: Error = CredentialError::invalid("client_email", "missing `@`").into();

		assert_eq!(missing.to_string(), "Credential is missing the required `private_key` field.");
		assert_eq!(invalid.to_string(), "Credential field `client_email` is invalid: missing `@`.");
	}

	#[test]
	fn initialization_error_keeps_sdk_source() {
		let sdk = io::Error::new(io::ErrorKind::InvalidInput, "Not enough private keys in PEM");
		let error: Error = InitializationError::credential_rejected(sdk).into();
		let source = StdError::source(&error).expect("SDK failure should be exposed as source.");

		assert!(matches!(error, Error::Initialization(_)));
		assert_eq!(source.to_string(), "Not enough private keys in PEM");
	}
}
