//! Startup routine: read the service account named by `GOOGLE_APPLICATION_CREDENTIALS` (a path or
//! inline JSON), initialize the shared client handle, and exit non-zero if any stage fails.
//!
//! Pass `--token` to also request an access token from the credential's token endpoint.

// std
use std::env;
// crates.io
use color_eyre::Result;
// self
use credential_bootstrap::{AppOptions, provider::EnvProvider};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let provider = EnvProvider::default();
	let app = credential_bootstrap::initialize(&provider, AppOptions::default()).await?;

	println!(
		"Initialized `{}` for project `{}` as `{}` (key {}).",
		app.name(),
		app.project_id(),
		app.service_account_email(),
		app.key_fingerprint(),
	);

	if env::args().any(|arg| arg == "--token") {
		let token = app.access_token().await?;

		match token.expires_at {
			Some(expires_at) => println!("Access token acquired; expires at {expires_at}."),
			None => println!("Access token acquired."),
		}
	}

	Ok(())
}
