//! Validated service-account credential ready to hand to the cloud SDK.

// std
use std::net::IpAddr;
// crates.io
use base64::{
	Engine as _,
	engine::general_purpose::{STANDARD, STANDARD_NO_PAD},
};
use sha2::{Digest, Sha256};
use url::Host;
// self
use crate::{
	_prelude::*,
	credential::{
		ClientId, CredentialConfig, IdentifierError, PrivateKeyId, ProjectId, Secret,
		ServiceAccountEmail,
	},
	error::CredentialError,
};

/// Token endpoint used when the document omits `token_uri`.
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

const SERVICE_ACCOUNT_TYPE: &str = "service_account";
const PEM_BEGIN: &str = "-----BEGIN ";
const PEM_END: &str = "-----END ";
const PEM_TAIL: &str = "-----";

/// Service-account credential whose required fields are present and well formed.
///
/// Built from a [`CredentialConfig`] via [`TryFrom`]; the raw document is consumed in the
/// process. Construction is offline: the key armor and encoding are checked here while the
/// key algorithm itself is left to the SDK.
#[derive(Clone, Debug)]
pub struct ServiceAccountCredential {
	/// Cloud project owning the service account.
	pub project_id: ProjectId,
	/// Issuer identity.
	pub client_email: ServiceAccountEmail,
	/// PEM private key with escaped newlines normalized.
	pub private_key: Secret,
	/// Optional key identifier.
	pub private_key_id: Option<PrivateKeyId>,
	/// Optional OAuth client identifier.
	pub client_id: Option<ClientId>,
	/// Optional authorization endpoint.
	pub auth_uri: Option<Url>,
	/// Token endpoint (defaults to [`DEFAULT_TOKEN_URI`]).
	pub token_uri: Url,
	/// Provider certificate listing, carried through untouched.
	pub auth_provider_x509_cert_url: Option<String>,
	/// Service-account certificate URL, carried through untouched.
	pub client_x509_cert_url: Option<String>,
	/// API universe, carried through untouched.
	pub universe_domain: Option<String>,
	key_fingerprint: String,
}
impl ServiceAccountCredential {
	/// Base64 (no padding) SHA-256 digest of the decoded key material. Safe to log.
	pub fn key_fingerprint(&self) -> &str {
		&self.key_fingerprint
	}
}
impl TryFrom<CredentialConfig> for ServiceAccountCredential {
	type Error = CredentialError;

	fn try_from(config: CredentialConfig) -> Result<Self, Self::Error> {
		if let Some(kind) = non_blank(config.credential_type.as_deref())
			.filter(|kind| *kind != SERVICE_ACCOUNT_TYPE)
		{
			return Err(CredentialError::UnsupportedType { found: kind.to_owned() });
		}

		let project_id = required(config.project_id.as_deref(), "project_id")?;
		let project_id = ProjectId::new(project_id).map_err(|e| invalid_id("project_id", e))?;
		let client_email = required(config.client_email.as_deref(), "client_email")?;
		let client_email =
			ServiceAccountEmail::new(client_email).map_err(|e| invalid_id("client_email", e))?;
		let private_key =
			required(config.private_key.as_ref().map(Secret::expose), "private_key")?;
		let (private_key, key_fingerprint) = normalize_private_key(private_key)?;
		let private_key_id = non_blank(config.private_key_id.as_deref())
			.map(PrivateKeyId::new)
			.transpose()
			.map_err(|e| invalid_id("private_key_id", e))?;
		let client_id = non_blank(config.client_id.as_deref())
			.map(ClientId::new)
			.transpose()
			.map_err(|e| invalid_id("client_id", e))?;
		let auth_uri = non_blank(config.auth_uri.as_deref())
			.map(|raw| parse_endpoint("auth_uri", raw))
			.transpose()?;
		let token_uri = parse_endpoint(
			"token_uri",
			non_blank(config.token_uri.as_deref()).unwrap_or(DEFAULT_TOKEN_URI),
		)?;

		Ok(Self {
			project_id,
			client_email,
			private_key,
			private_key_id,
			client_id,
			auth_uri,
			token_uri,
			auth_provider_x509_cert_url: config.auth_provider_x509_cert_url,
			client_x509_cert_url: config.client_x509_cert_url,
			universe_domain: config.universe_domain,
			key_fingerprint,
		})
	}
}

fn non_blank(value: Option<&str>) -> Option<&str> {
	value.filter(|v| !v.trim().is_empty())
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, CredentialError> {
	non_blank(value).ok_or(CredentialError::MissingField { field })
}

fn invalid_id(field: &'static str, err: IdentifierError) -> CredentialError {
	CredentialError::invalid(field, err)
}

/// Checks the PEM armor, verifies the body is valid base64, and fingerprints the key material.
fn normalize_private_key(raw: &str) -> Result<(Secret, String), CredentialError> {
	const FIELD: &str = "private_key";

	// Keys pasted into env vars or secret stores often carry literal `\n` sequences.
	let pem = raw.replace("\\n", "\n");
	let pem = pem.trim();
	let mut lines = pem.lines().map(str::trim).filter(|line| !line.is_empty());
	let begin = lines.next().ok_or(CredentialError::MissingField { field: FIELD })?;
	let label = begin
		.strip_prefix(PEM_BEGIN)
		.and_then(|rest| rest.strip_suffix(PEM_TAIL))
		.filter(|label| !label.is_empty())
		.ok_or_else(|| CredentialError::invalid(FIELD, "missing PEM `-----BEGIN` line"))?;
	let body: Vec<&str> = lines.collect();
	let (end, body) =
		body.split_last().ok_or_else(|| CredentialError::invalid(FIELD, "missing PEM body"))?;
	let end_label = end
		.strip_prefix(PEM_END)
		.and_then(|rest| rest.strip_suffix(PEM_TAIL))
		.ok_or_else(|| CredentialError::invalid(FIELD, "missing PEM `-----END` line"))?;

	if end_label != label {
		return Err(CredentialError::invalid(
			FIELD,
			format!("PEM armor mismatch between `{label}` and `{end_label}`"),
		));
	}
	if body.is_empty() {
		return Err(CredentialError::invalid(FIELD, "missing PEM body"));
	}

	let der = STANDARD
		.decode(body.concat())
		.map_err(|e| CredentialError::invalid(FIELD, format!("PEM body is not base64: {e}")))?;
	let fingerprint = STANDARD_NO_PAD.encode(Sha256::digest(&der));

	Ok((Secret::new(format!("{pem}\n")), fingerprint))
}

fn parse_endpoint(field: &'static str, raw: &str) -> Result<Url, CredentialError> {
	let url = Url::parse(raw.trim()).map_err(|e| CredentialError::invalid(field, e))?;

	match url.scheme() {
		"https" => Ok(url),
		"http" if is_loopback(&url) => Ok(url),
		_ => Err(CredentialError::invalid(field, format!("endpoint must use HTTPS: {url}"))),
	}
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
		Some(Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
		None => false,
	}
}
