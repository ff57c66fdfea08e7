//! Browser tests for `WebDocument` and the htmx CSRF listener
//!
//! Run with:
//!   wasm-pack test --chrome --headless crates/quill-pages

#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use quill_pages::csrf::{install, is_loading};
use quill_pages::{CsrfConfig, DomError, FieldRenderer, FormDom, FormUiConfig, WebDocument};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{CustomEvent, CustomEventInit, Element, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
	web_sys::window().unwrap().document().unwrap()
}

fn append(tag: &str, id: &str) -> Element {
	let element = document().create_element(tag).unwrap();
	element.set_id(id);
	document().body().unwrap().append_child(&element).unwrap();
	element
}

/// Appends `{id}`, `{id}-label` and a hidden `error-{id}` to the body.
fn labelled_input(id: &str, value: &str, required: bool) -> HtmlInputElement {
	append("label", &format!("{}-label", id));
	let input: HtmlInputElement = append("input", id).dyn_into().unwrap();
	input.set_value(value);
	input.set_required(required);
	append("span", &format!("error-{}", id))
		.class_list()
		.add_1("d-none")
		.unwrap();
	input
}

fn has_class(id: &str, class: &str) -> bool {
	document()
		.get_element_by_id(id)
		.map(|element| element.class_list().contains(class))
		.unwrap_or(false)
}

fn dispatch_config_request(event_name: &str) -> Object {
	let headers = Object::new();
	let detail = Object::new();
	Reflect::set(&detail, &JsValue::from_str("headers"), &headers).unwrap();
	let init = CustomEventInit::new();
	init.set_detail(&detail);
	let event = CustomEvent::new_with_event_init_dict(event_name, &init).unwrap();
	document().body().unwrap().dispatch_event(&event).unwrap();
	headers
}

#[wasm_bindgen_test]
fn test_web_document_required_field_roundtrip() {
	let input = labelled_input("wasm-title", "", true);
	let dom = WebDocument::current().unwrap();
	let config = FormUiConfig::default();
	let renderer = FieldRenderer::new(&dom, &config);

	renderer.validate_and_label("wasm-title", None).unwrap();
	assert!(has_class("wasm-title", "input-error"));
	assert!(has_class("wasm-title-label", "error"));
	assert!(has_class("error-wasm-title", "d-block"));
	assert_eq!(input.validation_message().unwrap(), "Невалидни данни");

	input.set_value("Hello");
	renderer.check_validity("wasm-title").unwrap();
	renderer.validate_and_label("wasm-title", None).unwrap();
	assert!(!has_class("wasm-title", "input-error"));
	assert!(has_class("error-wasm-title", "d-none"));
	assert!(input.check_validity());
}

#[wasm_bindgen_test]
fn test_web_document_repeat_password() {
	labelled_input("password", "abc", false);
	labelled_input("repeat-password", "abd", false);
	let dom = WebDocument::current().unwrap();
	let config = FormUiConfig::default();

	FieldRenderer::new(&dom, &config)
		.check_repeat_password()
		.unwrap();

	assert!(has_class("repeat-password", "input-error"));
	let message = document()
		.get_element_by_id("error-repeat-password")
		.unwrap()
		.text_content()
		.unwrap();
	assert_eq!(message, "Паролите не съвпадат");
	assert!(!dom.validity("repeat-password").unwrap().valid());
}

#[wasm_bindgen_test]
fn test_web_document_missing_and_wrong_elements() {
	append("div", "wasm-plain");
	let dom = WebDocument::current().unwrap();

	assert!(dom.contains("wasm-plain"));
	assert!(!dom.contains("wasm-nowhere"));
	assert_eq!(
		dom.value("wasm-nowhere"),
		Err(DomError::ElementNotFound {
			id: "wasm-nowhere".to_string()
		})
	);
	assert_eq!(
		dom.validity("wasm-plain"),
		Err(DomError::NotAFormControl {
			id: "wasm-plain".to_string()
		})
	);
}

#[wasm_bindgen_test]
fn test_csrf_listener_sets_header() {
	let meta = document().create_element("meta").unwrap();
	meta.set_attribute("name", "wasm-csrf-token").unwrap();
	meta.set_attribute("content", "tok123").unwrap();
	document().head().unwrap().append_child(&meta).unwrap();

	let config = CsrfConfig {
		meta_name: "wasm-csrf-token".to_string(),
		event_name: "test:configRequest".to_string(),
		..CsrfConfig::default()
	};
	// The test page has finished parsing, so the listener attaches immediately.
	assert!(!is_loading(&document()));
	install(&config).unwrap();

	let headers = dispatch_config_request("test:configRequest");
	let token = Reflect::get(&headers, &JsValue::from_str("X-CSRF-Token")).unwrap();
	assert_eq!(token.as_string().as_deref(), Some("tok123"));
}

#[wasm_bindgen_test]
fn test_csrf_without_meta_leaves_headers_alone() {
	let config = CsrfConfig {
		meta_name: "wasm-absent-token".to_string(),
		event_name: "test:noMetaRequest".to_string(),
		..CsrfConfig::default()
	};
	install(&config).unwrap();

	let headers = dispatch_config_request("test:noMetaRequest");
	assert_eq!(Object::keys(&headers).length(), 0);
}
