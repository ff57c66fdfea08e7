//! Facade re-export tests
//!
//! The page bundle is built from this crate, so everything templates and
//! Rust callers rely on must be reachable through `quill::pages`.

#![cfg(feature = "pages")]

use quill::pages::config::PASSWORD_MISMATCH_MESSAGE;
use quill::prelude::*;
use rstest::rstest;
use std::collections::HashMap;

#[rstest]
fn test_prelude_covers_both_components() {
	let config = PagesConfig::default();
	let dom = MemoryDocument::new()
		.with_meta("csrf-token", "tok123")
		.with_field("password", "abc", true)
		.with_field("repeat-password", "abd", true)
		.with_element("repeat-password-label")
		.with_element_classes("error-repeat-password", &["d-none"]);

	let mut headers: HashMap<String, String> = HashMap::new();
	CsrfHeaderInjector::from_document(&dom, &config.csrf)
		.unwrap()
		.inject(&mut headers);
	FieldRenderer::new(&dom, &config.forms)
		.check_repeat_password()
		.unwrap();

	assert_eq!(headers["X-CSRF-Token"], "tok123");
	assert_eq!(
		dom.text("error-repeat-password").as_deref(),
		Some(PASSWORD_MISMATCH_MESSAGE)
	);
}
