//! Builder-style options applied while initializing an [`App`](crate::App).

// self
use crate::{_prelude::*, credential::ProjectId, scope::ScopeSet};

/// Name given to the handle when the caller does not pick one.
pub const DEFAULT_APP_NAME: &str = "[DEFAULT]";

/// Options applied while initializing an [`App`](crate::App).
#[derive(Clone)]
pub struct AppOptions {
	pub(crate) name: String,
	pub(crate) project_id: Option<ProjectId>,
	pub(crate) scopes: ScopeSet,
	#[cfg(feature = "reqwest")]
	pub(crate) http_client: Option<ReqwestClient>,
}
impl AppOptions {
	/// Names the handle; used as the `app` field in logs.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();

		self
	}

	/// Overrides the project reported by the credential document.
	pub fn with_project_id(mut self, project_id: ProjectId) -> Self {
		self.project_id = Some(project_id);

		self
	}

	/// Replaces the scopes requested for every access token.
	pub fn with_scopes(mut self, scopes: ScopeSet) -> Self {
		self.scopes = scopes;

		self
	}

	/// Reuses a caller-configured HTTP client for authenticated calls.
	#[cfg(feature = "reqwest")]
	pub fn with_http_client(mut self, client: ReqwestClient) -> Self {
		self.http_client = Some(client);

		self
	}

	/// Handle name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Scopes requested for access tokens.
	pub fn scopes(&self) -> &ScopeSet {
		&self.scopes
	}
}
impl Default for AppOptions {
	fn default() -> Self {
		Self {
			name: DEFAULT_APP_NAME.into(),
			project_id: None,
			scopes: ScopeSet::firebase_defaults(),
			#[cfg(feature = "reqwest")]
			http_client: None,
		}
	}
}
impl Debug for AppOptions {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let mut s = f.debug_struct("AppOptions");

		s.field("name", &self.name)
			.field("project_id", &self.project_id)
			.field("scopes", &self.scopes.normalized());
		#[cfg(feature = "reqwest")]
		s.field("http_client_set", &self.http_client.is_some());

		s.finish()
	}
}
