//! OAuth scope sets requested from the cloud SDK on behalf of the client handle.

// self
use crate::_prelude::*;

/// Scopes requested by the Firebase Admin SDKs for service-account credentials.
pub const DEFAULT_SCOPES: [&str; 5] = [
	"https://www.googleapis.com/auth/cloud-platform",
	"https://www.googleapis.com/auth/firebase.database",
	"https://www.googleapis.com/auth/firebase.messaging",
	"https://www.googleapis.com/auth/identitytoolkit",
	"https://www.googleapis.com/auth/userinfo.email",
];

/// Errors emitted when validating scopes.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ScopeValidationError {
	/// Empty scope entries are not allowed.
	#[error("Scope entries cannot be empty.")]
	Empty,
	/// Scopes cannot contain embedded whitespace characters.
	#[error("Scope contains whitespace: {scope}.")]
	ContainsWhitespace {
		/// The offending scope string.
		scope: String,
	},
}

/// Normalized set of OAuth scopes.
///
/// Scopes are deduplicated and sorted so equality and the space-delimited form stay stable no
/// matter how callers order them.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ScopeSet {
	scopes: Arc<[String]>,
}
impl ScopeSet {
	/// Creates a normalized scope set from any iterator.
	pub fn new<I, S>(scopes: I) -> Result<Self, ScopeValidationError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Ok(Self { scopes: normalize(scopes)? })
	}

	/// Scope set requested when [`AppOptions`](crate::AppOptions) does not override it.
	pub fn firebase_defaults() -> Self {
		Self { scopes: Arc::from(DEFAULT_SCOPES.map(String::from).to_vec()) }
	}

	/// Number of distinct scopes.
	pub fn len(&self) -> usize {
		self.scopes.len()
	}

	/// Returns true if no scopes are defined.
	pub fn is_empty(&self) -> bool {
		self.scopes.is_empty()
	}

	/// Returns true if the normalized set contains the provided scope.
	pub fn contains(&self, scope: &str) -> bool {
		self.scopes.binary_search_by(|candidate| candidate.as_str().cmp(scope)).is_ok()
	}

	/// Iterator over normalized scopes.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.scopes.iter().map(|s| s.as_str())
	}

	/// Returns the normalized string representation (space-delimited).
	pub fn normalized(&self) -> String {
		self.scopes.join(" ")
	}

	/// Returns the underlying slice of scope strings.
	pub fn as_slice(&self) -> &[String] {
		&self.scopes
	}
}
impl Debug for ScopeSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ScopeSet").field(&self.scopes).finish()
	}
}
impl Display for ScopeSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.normalized())
	}
}

fn normalize<I, S>(scopes: I) -> Result<Arc<[String]>, ScopeValidationError>
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	let mut set = BTreeSet::new();

	for scope in scopes {
		let owned: String = scope.into();

		if owned.is_empty() {
			return Err(ScopeValidationError::Empty);
		}
		if owned.chars().any(char::is_whitespace) {
			return Err(ScopeValidationError::ContainsWhitespace { scope: owned });
		}

		set.insert(owned);
	}

	Ok(Arc::from(set.into_iter().collect::<Vec<_>>()))
}
