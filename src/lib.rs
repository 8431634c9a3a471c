//! Load a service-account credential from an injected source, hand it to the cloud SDK's
//! credential factory, and get back one shared, authenticated client handle.
//!
//! ```no_run
//! use credential_bootstrap::{app::AppOptions, provider::EnvProvider};
//!
//! # async fn startup() -> credential_bootstrap::error::Result<()> {
//! let app = credential_bootstrap::initialize(&EnvProvider::default(), AppOptions::default()).await?;
//! let token = app.access_token().await?;
//! # let _ = token;
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod app;
pub mod credential;
pub mod error;
pub mod obs;
pub mod provider;
pub mod scope;
pub mod sdk;

pub use app::{App, AppOptions, initialize, initialize_with};

mod _prelude {
	pub use std::{
		collections::BTreeSet,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
pub use yup_oauth2;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
