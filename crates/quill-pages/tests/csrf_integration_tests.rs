//! CSRF Header Injector Integration Tests
//!
//! The browser listener itself is covered by `tests/wasm/dom_wasm_test.rs`;
//! these tests cover token lookup and header injection.

use quill_pages::config::PagesConfig;
use quill_pages::{CsrfConfig, CsrfHeaderInjector, HeaderSink, MemoryDocument};
use rstest::rstest;
use std::collections::HashMap;

/// Header sink that records every write, to observe repeated injections.
#[derive(Default)]
struct RecordingHeaders {
	writes: Vec<(String, String)>,
}

impl HeaderSink for RecordingHeaders {
	fn set_header(&mut self, name: &str, value: &str) {
		self.writes.push((name.to_string(), value.to_string()));
	}
}

#[rstest]
fn test_meta_token_lands_in_header_map() {
	let dom = MemoryDocument::new().with_meta("csrf-token", "tok123");
	let injector = CsrfHeaderInjector::from_document(&dom, &CsrfConfig::default())
		.expect("meta tag present");

	let mut headers: HashMap<String, String> = HashMap::new();
	headers.insert("HX-Request".to_string(), "true".to_string());
	injector.inject(&mut headers);

	assert_eq!(headers.len(), 2);
	assert_eq!(headers["X-CSRF-Token"], "tok123");
}

#[rstest]
fn test_no_meta_leaves_header_map_untouched() {
	let dom = MemoryDocument::new();
	let mut headers: HashMap<String, String> = HashMap::new();
	headers.insert("HX-Request".to_string(), "true".to_string());
	let before = headers.clone();

	if let Some(injector) = CsrfHeaderInjector::from_document(&dom, &CsrfConfig::default()) {
		injector.inject(&mut headers);
	}

	assert_eq!(headers, before);
}

#[rstest]
fn test_token_is_read_once() {
	let dom = MemoryDocument::new().with_meta("csrf-token", "first");
	let injector = CsrfHeaderInjector::from_document(&dom, &CsrfConfig::default()).unwrap();
	drop(dom);

	let mut headers = RecordingHeaders::default();
	for _ in 0..3 {
		injector.inject(&mut headers);
	}

	assert_eq!(
		headers.writes,
		vec![("X-CSRF-Token".to_string(), "first".to_string()); 3]
	);
}

#[rstest]
fn test_empty_meta_content_is_still_injected() {
	let dom = MemoryDocument::new().with_meta("csrf-token", "");
	let injector = CsrfHeaderInjector::from_document(&dom, &CsrfConfig::default()).unwrap();

	let mut headers: HashMap<String, String> = HashMap::new();
	injector.inject(&mut headers);

	assert_eq!(headers.get("X-CSRF-Token").map(String::as_str), Some(""));
}

#[rstest]
fn test_injector_from_json_config() {
	let config = PagesConfig::from_json(
		r#"{"csrf": {"meta_name": "xsrf-token", "header_name": "X-XSRF-TOKEN"}}"#,
	)
	.unwrap();
	let dom = MemoryDocument::new()
		.with_meta("csrf-token", "ignored")
		.with_meta("xsrf-token", "used");

	let injector = CsrfHeaderInjector::from_document(&dom, &config.csrf).unwrap();
	let mut headers: HashMap<String, String> = HashMap::new();
	injector.inject(&mut headers);

	assert_eq!(headers.get("X-XSRF-TOKEN").map(String::as_str), Some("used"));
	assert!(!headers.contains_key("X-CSRF-Token"));
}
