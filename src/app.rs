//! Startup routine and the shared client handle it produces.
//!
//! [`initialize`] runs three stages in order: load the document from the injected
//! [`ConfigProvider`], validate it into a [`ServiceAccountCredential`], and hand that credential to
//! a [`CredentialFactory`]. Any failure aborts before a handle exists. Nothing is registered
//! globally; the returned [`App`] is owned by the caller and shared by clone.

pub mod options;

pub use options::*;

// self
use crate::{
	_prelude::*,
	credential::{ProjectId, ServiceAccountCredential, ServiceAccountEmail},
	obs::{self, Stage},
	provider::ConfigProvider,
	scope::ScopeSet,
	sdk::{AccessToken, CredentialFactory, ServiceAccountFactory, TokenSource},
};
#[cfg(feature = "reqwest")] use crate::error::InitializationError;

/// Initializes a client handle using the default `yup-oauth2` service-account factory.
///
/// Performs no network I/O; the first token request happens on [`App::access_token`].
pub async fn initialize<P>(provider: &P, options: AppOptions) -> Result<App>
where
	P: ?Sized + ConfigProvider,
{
	initialize_with(provider, &ServiceAccountFactory, options).await
}

/// Initializes a client handle with an injected credential factory.
pub async fn initialize_with<P, F>(provider: &P, factory: &F, options: AppOptions) -> Result<App>
where
	P: ?Sized + ConfigProvider,
	F: ?Sized + CredentialFactory,
{
	let AppOptions {
		name,
		project_id,
		scopes,
		#[cfg(feature = "reqwest")]
		http_client,
	} = options;

	obs::record_source(&name, &provider.describe());

	let config = obs::observe(Stage::Load, &name, provider.load()).await?;
	let credential = obs::observe(Stage::Validate, &name, async move {
		ServiceAccountCredential::try_from(config).map_err(Error::from)
	})
	.await?;
	let token_source = obs::observe(Stage::Construct, &name, factory.build(&credential)).await?;
	#[cfg(feature = "reqwest")]
	let http_client = match http_client {
		Some(client) => client,
		None => ReqwestClient::builder().build().map_err(InitializationError::from)?,
	};
	let key_fingerprint = credential.key_fingerprint().to_owned();
	let ServiceAccountCredential { project_id: credential_project, client_email, .. } = credential;
	let app = App {
		inner: Arc::new(AppInner {
			project_id: project_id.unwrap_or(credential_project),
			client_email,
			key_fingerprint,
			scopes,
			token_source,
			#[cfg(feature = "reqwest")]
			http_client,
			name,
		}),
	};

	obs::record_initialized(
		app.name(),
		app.project_id(),
		app.service_account_email(),
		app.key_fingerprint(),
	);

	Ok(app)
}

/// Initialized client handle for authenticated calls against the backend.
///
/// Cloning is cheap and every clone shares the same SDK credential object, so token caching
/// spans all clones.
#[derive(Clone)]
pub struct App {
	inner: Arc<AppInner>,
}
impl App {
	/// Handle name (`[DEFAULT]` unless overridden).
	pub fn name(&self) -> &str {
		&self.inner.name
	}

	/// Project the handle operates on.
	pub fn project_id(&self) -> &ProjectId {
		&self.inner.project_id
	}

	/// Identity the SDK authenticates as.
	pub fn service_account_email(&self) -> &ServiceAccountEmail {
		&self.inner.client_email
	}

	/// Fingerprint of the private key; safe to log.
	pub fn key_fingerprint(&self) -> &str {
		&self.inner.key_fingerprint
	}

	/// Scopes requested for every access token.
	pub fn scopes(&self) -> &ScopeSet {
		&self.inner.scopes
	}

	/// Returns an access token for the configured scopes.
	///
	/// The SDK reuses cached tokens until they near expiry.
	pub async fn access_token(&self) -> Result<AccessToken> {
		obs::observe(Stage::Token, self.name(), self.inner.token_source.token(&self.inner.scopes))
			.await
	}

	/// Shared HTTP client for calls against the backend.
	#[cfg(feature = "reqwest")]
	pub fn http_client(&self) -> &ReqwestClient {
		&self.inner.http_client
	}

	/// Attaches `Authorization: Bearer <token>` to `request`.
	#[cfg(feature = "reqwest")]
	pub async fn authorize(
		&self,
		request: reqwest::RequestBuilder,
	) -> Result<reqwest::RequestBuilder> {
		let token = self.access_token().await?;

		Ok(request.bearer_auth(token.expose()))
	}
}
impl Debug for App {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("App")
			.field("name", &self.inner.name)
			.field("project_id", &self.inner.project_id)
			.field("service_account_email", &self.inner.client_email)
			.field("key_fingerprint", &self.inner.key_fingerprint)
			.field("scopes", &self.inner.scopes.normalized())
			.finish()
	}
}

struct AppInner {
	name: String,
	project_id: ProjectId,
	client_email: ServiceAccountEmail,
	key_fingerprint: String,
	scopes: ScopeSet,
	token_source: Arc<dyn TokenSource>,
	#[cfg(feature = "reqwest")]
	http_client: ReqwestClient,
}
