//! JavaScript entry points
//!
//! Templates call these from inline handlers, so the exported names match the
//! global functions the markup already uses:
//!
//! ```html
//! <input id="email" type="email" required
//!        onblur="addErrorToElement('email')"
//!        oninput="checkElementValidity('email')">
//! <input id="repeat-password" type="password" oninput="checkRepeatPassword()">
//! ```
//!
//! Every export resolves the live document on each call and throws a
//! `JsError` when a referenced element is missing.

use crate::config::{self, PagesConfig};
use crate::csrf;
use crate::dom::{DomError, WebDocument};
use crate::form::{FailedValidationResponse, ServerErrorRenderer};
use crate::validation::FieldRenderer;
use wasm_bindgen::prelude::*;

fn to_js_error(err: DomError) -> JsError {
	crate::error_log!("{}", err);
	JsError::new(&err.to_string())
}

fn with_renderer<T>(
	f: impl FnOnce(&FieldRenderer<'_, &WebDocument>) -> Result<T, DomError>,
) -> Result<T, JsError> {
	let config = config::active_config();
	let dom = WebDocument::current().map_err(to_js_error)?;
	let renderer = FieldRenderer::new(&dom, &config.forms);
	f(&renderer).map_err(to_js_error)
}

/// Installs the CSRF header injector with the default configuration.
#[wasm_bindgen]
pub fn init() -> Result<(), JsError> {
	start(PagesConfig::default())
}

/// Installs the CSRF header injector with a JSON configuration.
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(json: &str) -> Result<(), JsError> {
	let config = PagesConfig::from_json(json).map_err(|err| JsError::new(&err.to_string()))?;
	start(config)
}

fn start(config: PagesConfig) -> Result<(), JsError> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let csrf_config = config.csrf.clone();
	config::set_active_config(config);
	csrf::install(&csrf_config).map_err(to_js_error)
}

#[wasm_bindgen(js_name = addErrorToElement)]
pub fn add_error_to_element(element_id: &str, error: Option<String>) -> Result<(), JsError> {
	with_renderer(|renderer| renderer.validate_and_label(element_id, error.as_deref()))
}

#[wasm_bindgen(js_name = checkElementValidity)]
pub fn check_element_validity(element_id: &str) -> Result<(), JsError> {
	with_renderer(|renderer| renderer.check_validity(element_id))
}

#[wasm_bindgen(js_name = showError)]
pub fn show_error(element_id: &str, error: &str) -> Result<(), JsError> {
	with_renderer(|renderer| renderer.show_error(element_id, error))
}

#[wasm_bindgen(js_name = removeError)]
pub fn remove_error(element_id: &str) -> Result<(), JsError> {
	with_renderer(|renderer| renderer.remove_error(element_id))
}

#[wasm_bindgen(js_name = checkRepeatPassword)]
pub fn check_repeat_password() -> Result<(), JsError> {
	with_renderer(|renderer| renderer.check_repeat_password())
}

/// Renders a `422` validation body. Returns the number of fields marked.
#[wasm_bindgen(js_name = renderServerErrors)]
pub fn render_server_errors(json: &str) -> Result<usize, JsError> {
	let response =
		FailedValidationResponse::from_json(json).map_err(|err| JsError::new(&err.to_string()))?;
	let config = config::active_config();
	let dom = WebDocument::current().map_err(to_js_error)?;
	ServerErrorRenderer::new(&dom, &config.forms)
		.render(&response)
		.map_err(to_js_error)
}
