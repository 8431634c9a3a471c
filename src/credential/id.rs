//! Strongly typed identifiers carried by a service-account credential.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal, $check:ident) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				$check($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				$check($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 128;
// RFC 5321 path limit.
const EMAIL_MAX_LEN: usize = 254;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (project, client, key, service account).
		kind: &'static str,
	},
	/// The identifier contains whitespace characters.
	#[error("{kind} identifier contains whitespace.")]
	ContainsWhitespace {
		/// Kind of identifier (project, client, key, service account).
		kind: &'static str,
	},
	/// The identifier exceeded the allowed character count.
	#[error("{kind} identifier exceeds {max} characters.")]
	TooLong {
		/// Kind of identifier (project, client, key, service account).
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
	/// The service-account email is not shaped like `name@domain`.
	#[error("{kind} identifier must look like `name@domain`.")]
	NotAnEmail {
		/// Kind of identifier.
		kind: &'static str,
	},
}

def_id! { ProjectId, "Cloud project that owns the service account.", "Project", validate_view }
def_id! { ClientId, "Numeric OAuth client identifier of the service account.", "Client", validate_view }
def_id! { PrivateKeyId, "Identifier of the service account's active private key.", "PrivateKey", validate_view }
def_id! {
	ServiceAccountEmail,
	"Email identity the credential authenticates as; used as the JWT issuer.",
	"ServiceAccount",
	validate_email
}

fn validate_view(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	validate_bounded(kind, view, IDENTIFIER_MAX_LEN)
}

fn validate_email(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	validate_bounded(kind, view, EMAIL_MAX_LEN)?;

	match view.split_once('@') {
		Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
			Ok(()),
		_ => Err(IdentifierError::NotAnEmail { kind }),
	}
}

fn validate_bounded(kind: &'static str, view: &str, max: usize) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace { kind });
	}
	if view.len() > max {
		return Err(IdentifierError::TooLong { kind, max });
	}

	Ok(())
}
