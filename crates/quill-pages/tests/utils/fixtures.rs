//! Shared test fixtures
//!
//! `form_page` builds a [`MemoryDocument`] laid out like the stock templates:
//! every field `{id}` comes with `{id}-label` and a hidden `error-{id}`.

use quill_pages::MemoryDocument;
use rstest::fixture;
use std::path::PathBuf;

/// Base path for fixtures
fn fixtures_dir() -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Loads a fixture file as a string
///
/// # Panics
///
/// Panics if the file cannot be read
pub fn load_fixture(path: &str) -> String {
	let full_path = fixtures_dir().join(path);
	std::fs::read_to_string(&full_path)
		.unwrap_or_else(|e| panic!("Failed to load fixture at {:?}: {}", full_path.display(), e))
}

/// Adds a field with its label and hidden message element.
pub fn with_labelled_field(
	dom: MemoryDocument,
	id: &str,
	value: &str,
	constraints_satisfied: bool,
) -> MemoryDocument {
	dom.with_field(id, value, constraints_satisfied)
		.with_element(format!("{}-label", id))
		.with_element_classes(format!("error-{}", id), &["d-none"])
}

/// Builds a page from `(id, value, constraints_satisfied)` triples.
pub fn form_page(fields: &[(&str, &str, bool)]) -> MemoryDocument {
	fields
		.iter()
		.fold(MemoryDocument::new(), |dom, (id, value, valid)| {
			with_labelled_field(dom, id, value, *valid)
		})
}

/// Registration form with the two password fields.
pub fn registration_page(password: &str, repeat: &str) -> MemoryDocument {
	form_page(&[
		("email", "reader@example.com", true),
		("password", password, true),
		("repeat-password", repeat, true),
	])
}

#[fixture]
pub fn invalid_email_page() -> MemoryDocument {
	form_page(&[("email", "not-an-email", false)])
}

#[fixture]
pub fn valid_email_page() -> MemoryDocument {
	form_page(&[("email", "reader@example.com", true)])
}
