mod common;

// self
use credential_bootstrap::{
	credential::{CredentialConfig, ServiceAccountCredential},
	error::{ConfigError, Error},
	provider::{ConfigProvider, EnvProvider, FileProvider, MemoryProvider},
};

#[tokio::test]
async fn file_and_memory_providers_agree_on_the_fixture() {
	let from_file = FileProvider::new(common::fixture_path())
		.load()
		.await
		.expect("Fixture file should load.");
	let from_memory = MemoryProvider::from_json(common::fixture_json())
		.load()
		.await
		.expect("Fixture JSON should load.");

	assert_eq!(from_file, from_memory);
	assert_eq!(from_file.project_id.as_deref(), Some("mushroom-test"));

	let credential =
		ServiceAccountCredential::try_from(from_file).expect("Fixture should validate.");

	assert_eq!(credential.token_uri.as_str(), "https://oauth2.googleapis.com/token");
	assert_eq!(
		credential.private_key_id.as_deref(),
		Some("5f1c0e6d9a8b7c6d5e4f3a2b1c0d9e8f7a6b5c4d")
	);
	assert!(credential.private_key.expose().ends_with("-----END PRIVATE KEY-----\n"));
}

#[tokio::test]
async fn unset_variable_is_a_configuration_error() {
	let provider = EnvProvider::new("CREDENTIAL_BOOTSTRAP_IT_NEVER_SET");
	let err = provider.load().await.expect_err("Unset variable must be rejected.");

	match err {
		Error::Config(ConfigError::EnvVarUnset { name }) =>
			assert_eq!(name, "CREDENTIAL_BOOTSTRAP_IT_NEVER_SET"),
		other => panic!("Unexpected error: {other:?}"),
	}
}

#[test]
fn providers_describe_themselves_without_secrets() {
	let memory = MemoryProvider::from_json(common::fixture_json());

	assert_eq!(EnvProvider::default().describe(), "env:GOOGLE_APPLICATION_CREDENTIALS");
	assert_eq!(memory.describe(), "memory");
	assert_eq!(format!("{memory:?}"), "MemoryProvider(..)");
	assert_eq!(MemoryProvider::from(CredentialConfig::default()).describe(), "memory");
}
