//! Seam between the bootstrapper and the external cloud SDK.
//!
//! The SDK owns credential construction, token minting, caching, and refresh. This module only
//! defines the two contracts the rest of the crate talks to ([`CredentialFactory`] and
//! [`TokenSource`]) plus the default binding to `yup-oauth2` in [`service_account`].

pub mod service_account;

pub use service_account::ServiceAccountFactory;

// self
use crate::{
	_prelude::*,
	credential::{Secret, ServiceAccountCredential},
	scope::ScopeSet,
};

/// Future returned by [`CredentialFactory::build`].
pub type FactoryFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;
/// Future returned by [`TokenSource::token`].
pub type TokenFuture<'a> = Pin<Box<dyn Future<Output = Result<AccessToken>> + 'a + Send>>;

/// Builds the SDK's credential object from a validated service-account credential.
///
/// Implementations must stay offline: any network traffic is deferred until the first
/// [`TokenSource::token`] call. Rejections map to
/// [`InitializationError`](crate::error::InitializationError).
pub trait CredentialFactory
where
	Self: Send + Sync,
{
	/// Constructs the credential object backing a client handle.
	fn build<'a>(
		&'a self,
		credential: &'a ServiceAccountCredential,
	) -> FactoryFuture<'a, Arc<dyn TokenSource>>;
}

/// SDK credential object able to mint access tokens.
///
/// Caching and refresh are the implementation's concern; callers ask for a token before every
/// authenticated call.
pub trait TokenSource
where
	Self: Send + Sync,
{
	/// Returns a valid token for `scopes`, reusing a cached one when possible.
	fn token<'a>(&'a self, scopes: &'a ScopeSet) -> TokenFuture<'a>;
}

/// Bearer token handed out by a [`TokenSource`].
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
	/// Bearer secret; callers must avoid logging it.
	pub token: Secret,
	/// Expiry instant, when the token endpoint reported one.
	pub expires_at: Option<OffsetDateTime>,
}
impl AccessToken {
	/// Wraps a token value and its optional expiry.
	pub fn new(token: impl Into<String>, expires_at: Option<OffsetDateTime>) -> Self {
		Self { token: Secret::new(token), expires_at }
	}

	/// Returns the bearer value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		self.token.expose()
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AccessToken")
			.field("token", &"<redacted>")
			.field("expires_at", &self.expires_at)
			.finish()
	}
}
