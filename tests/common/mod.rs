#![allow(dead_code)]

// std
use std::{
	path::PathBuf,
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
};
// crates.io
use serde_json::Value;
// self
use credential_bootstrap::{
	credential::ServiceAccountCredential,
	scope::ScopeSet,
	sdk::{AccessToken, CredentialFactory, FactoryFuture, TokenFuture, TokenSource},
};

pub fn fixture_path() -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/service_account.json")
}

pub fn fixture_json() -> String {
	std::fs::read_to_string(fixture_path()).expect("Service account fixture should be readable.")
}

/// Returns the fixture with `field` replaced (or removed when `value` is `None`).
pub fn fixture_with(field: &str, value: Option<&str>) -> String {
	let mut doc: Value =
		serde_json::from_str(&fixture_json()).expect("Service account fixture should be JSON.");
	let object = doc.as_object_mut().expect("Service account fixture should be an object.");

	match value {
		Some(value) => object.insert(field.into(), Value::String(value.into())),
		None => object.remove(field),
	};

	doc.to_string()
}

/// Returns the fixture with each `(from, to)` key renamed.
pub fn fixture_renamed(renames: &[(&str, &str)]) -> String {
	let mut doc: Value =
		serde_json::from_str(&fixture_json()).expect("Service account fixture should be JSON.");
	let object = doc.as_object_mut().expect("Service account fixture should be an object.");

	for (from, to) in renames {
		let value = object.remove(*from).expect("Renamed field should exist in the fixture.");

		object.insert((*to).into(), value);
	}

	doc.to_string()
}

/// Factory that counts builds and hands out [`StaticTokenSource`]s sharing one mint counter.
#[derive(Default)]
pub struct CountingFactory {
	pub builds: AtomicUsize,
	pub mints: Arc<AtomicUsize>,
	pub seen_emails: std::sync::Mutex<Vec<String>>,
}
impl CountingFactory {
	pub fn builds(&self) -> usize {
		self.builds.load(Ordering::SeqCst)
	}

	pub fn mints(&self) -> usize {
		self.mints.load(Ordering::SeqCst)
	}
}
impl CredentialFactory for CountingFactory {
	fn build<'a>(
		&'a self,
		credential: &'a ServiceAccountCredential,
	) -> FactoryFuture<'a, Arc<dyn TokenSource>> {
		self.builds.fetch_add(1, Ordering::SeqCst);
		self.seen_emails
			.lock()
			.expect("Email log mutex should not be poisoned.")
			.push(credential.client_email.to_string());

		let source: Arc<dyn TokenSource> =
			Arc::new(StaticTokenSource { value: "static-token".into(), mints: self.mints.clone() });

		Box::pin(async move { Ok(source) })
	}
}

/// Token source returning a fixed value and counting requests.
pub struct StaticTokenSource {
	pub value: String,
	pub mints: Arc<AtomicUsize>,
}
impl TokenSource for StaticTokenSource {
	fn token<'a>(&'a self, _scopes: &'a ScopeSet) -> TokenFuture<'a> {
		Box::pin(async move {
			self.mints.fetch_add(1, Ordering::SeqCst);

			Ok(AccessToken::new(self.value.clone(), None))
		})
	}
}
