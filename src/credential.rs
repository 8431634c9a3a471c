//! Credential-domain models: the raw service-account document, its validated form, and the
//! identifier and secret wrappers they are built from.

pub mod account;
pub mod config;
pub mod id;
pub mod secret;

pub use account::*;
pub use config::*;
pub use id::*;
pub use secret::*;
