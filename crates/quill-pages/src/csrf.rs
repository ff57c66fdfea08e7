//! CSRF header injection for htmx requests
//!
//! The server renders the token into the page head:
//!
//! ```html
//! <meta name="csrf-token" content="...">
//! ```
//!
//! [`install`] reads it once when the document is ready and registers a
//! listener for `htmx:configRequest` on `document.body`. Every request htmx
//! issues afterwards carries the token in the `X-CSRF-Token` header.
//!
//! A page without the meta tag is a valid state: nothing is registered and
//! no header is ever added.
//!
//! ## Usage
//!
//! ```ignore
//! use quill_pages::config::CsrfConfig;
//! use quill_pages::csrf::{CsrfHeaderInjector, install};
//!
//! // In the browser
//! install(&CsrfConfig::default())?;
//!
//! // Anywhere a header map is being assembled
//! if let Some(injector) = CsrfHeaderInjector::from_document(&dom, &CsrfConfig::default()) {
//!     injector.inject(&mut headers);
//! }
//! ```

use crate::config::CsrfConfig;
use crate::dom::FormDom;
use std::collections::{BTreeMap, HashMap};

/// A mutable collection of request headers.
pub trait HeaderSink {
	/// Sets `name` to `value`, replacing any previous value.
	fn set_header(&mut self, name: &str, value: &str);
}

impl HeaderSink for HashMap<String, String> {
	fn set_header(&mut self, name: &str, value: &str) {
		self.insert(name.to_string(), value.to_string());
	}
}

impl HeaderSink for BTreeMap<String, String> {
	fn set_header(&mut self, name: &str, value: &str) {
		self.insert(name.to_string(), value.to_string());
	}
}

/// Writes a token read once from the page into outgoing request headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfHeaderInjector {
	token: String,
	header_name: String,
}

impl CsrfHeaderInjector {
	pub fn new(token: impl Into<String>, header_name: impl Into<String>) -> Self {
		Self {
			token: token.into(),
			header_name: header_name.into(),
		}
	}

	/// Reads the token from the configured meta tag.
	///
	/// Returns `None` when the page has no such meta tag.
	pub fn from_document<D: FormDom + ?Sized>(dom: &D, config: &CsrfConfig) -> Option<Self> {
		let token = dom.meta_content(&config.meta_name)?;
		Some(Self::new(token, config.header_name.clone()))
	}

	pub fn token(&self) -> &str {
		&self.token
	}

	pub fn header_name(&self) -> &str {
		&self.header_name
	}

	/// Sets the CSRF header on `headers`.
	pub fn inject<H: HeaderSink + ?Sized>(&self, headers: &mut H) {
		headers.set_header(&self.header_name, &self.token);
	}

	/// Sets the CSRF header on the `detail.headers` object of an htmx event.
	#[cfg(target_arch = "wasm32")]
	pub fn inject_into_event(&self, event: &web_sys::Event) -> crate::dom::DomResult<()> {
		use crate::dom::{DomError, js_error};
		use js_sys::Reflect;
		use wasm_bindgen::{JsCast, JsValue};

		let event = event
			.dyn_ref::<web_sys::CustomEvent>()
			.ok_or_else(|| DomError::Js(format!("{} is not a CustomEvent", event.type_())))?;
		let headers =
			Reflect::get(&event.detail(), &JsValue::from_str("headers")).map_err(js_error)?;
		if !headers.is_object() {
			return Err(DomError::Js("event detail has no headers object".to_string()));
		}
		Reflect::set(
			&headers,
			&JsValue::from_str(&self.header_name),
			&JsValue::from_str(&self.token),
		)
		.map_err(js_error)?;
		Ok(())
	}
}

/// Installs the htmx listener once the document is ready.
///
/// If the document is still loading, attachment is deferred to
/// `DOMContentLoaded`; otherwise it happens immediately.
#[cfg(target_arch = "wasm32")]
pub fn install(config: &CsrfConfig) -> crate::dom::DomResult<()> {
	use crate::dom::{WebDocument, js_error};
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;

	let dom = WebDocument::current()?;
	if !is_loading(dom.document()) {
		attach(&dom, config)?;
		return Ok(());
	}

	let config = config.clone();
	let on_ready = Closure::once_into_js(move |_event: web_sys::Event| {
		let result = WebDocument::current().and_then(|dom| attach(&dom, &config));
		if let Err(err) = result {
			crate::error_log!("CSRF header injector not installed: {}", err);
		}
	});
	dom.document()
		.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
		.map_err(js_error)?;
	Ok(())
}

/// `document.readyState` is `"loading"` until the parser finishes.
#[cfg(target_arch = "wasm32")]
pub fn is_loading(document: &web_sys::Document) -> bool {
	document.ready_state() == "loading"
}

/// Installs the htmx listener (non-WASM stub).
#[cfg(not(target_arch = "wasm32"))]
pub fn install(_config: &CsrfConfig) -> crate::dom::DomResult<()> {
	Ok(())
}

/// Registers the body listener if the page carries a token.
///
/// Returns whether a listener was registered.
#[cfg(target_arch = "wasm32")]
fn attach(dom: &crate::dom::WebDocument, config: &CsrfConfig) -> crate::dom::DomResult<bool> {
	use crate::dom::{DomError, js_error};
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;

	let Some(injector) = CsrfHeaderInjector::from_document(dom, config) else {
		crate::debug_log!("No <meta name=\"{}\"> on page, skipping", config.meta_name);
		return Ok(false);
	};
	let body = dom.document().body().ok_or(DomError::NoBody)?;

	let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
		if let Err(err) = injector.inject_into_event(&event) {
			crate::error_log!("Failed to set CSRF header: {}", err);
		}
	}) as Box<dyn FnMut(_)>);

	body.add_event_listener_with_callback(&config.event_name, closure.as_ref().unchecked_ref())
		.map_err(js_error)?;

	// The listener lives as long as the page.
	closure.forget();
	crate::info_log!("CSRF header injector attached to {}", config.event_name);
	Ok(true)
}
