//! Browser document backed by `web-sys`

use super::{DomError, DomResult, FormDom, ValidityState};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// [`FormDom`] over the live browser document.
#[derive(Debug, Clone)]
pub struct WebDocument {
	document: Document,
}

impl WebDocument {
	pub fn new(document: Document) -> Self {
		Self { document }
	}

	/// Wraps `window.document`.
	pub fn current() -> DomResult<Self> {
		let window = web_sys::window().ok_or(DomError::NoWindow)?;
		let document = window.document().ok_or(DomError::NoDocument)?;
		Ok(Self::new(document))
	}

	pub fn document(&self) -> &Document {
		&self.document
	}

	fn element(&self, id: &str) -> DomResult<Element> {
		self.document
			.get_element_by_id(id)
			.ok_or_else(|| DomError::not_found(id))
	}

	fn control(&self, id: &str) -> DomResult<FormControl> {
		FormControl::from_element(id, self.element(id)?)
	}
}

/// The element kinds that carry a `validity` and `setCustomValidity`.
enum FormControl {
	Input(HtmlInputElement),
	TextArea(HtmlTextAreaElement),
	Select(HtmlSelectElement),
}

impl FormControl {
	fn from_element(id: &str, element: Element) -> DomResult<Self> {
		let element = match element.dyn_into::<HtmlInputElement>() {
			Ok(input) => return Ok(Self::Input(input)),
			Err(element) => element,
		};
		let element = match element.dyn_into::<HtmlTextAreaElement>() {
			Ok(textarea) => return Ok(Self::TextArea(textarea)),
			Err(element) => element,
		};
		match element.dyn_into::<HtmlSelectElement>() {
			Ok(select) => Ok(Self::Select(select)),
			Err(_) => Err(DomError::NotAFormControl { id: id.to_string() }),
		}
	}

	fn validity(&self) -> web_sys::ValidityState {
		match self {
			Self::Input(el) => el.validity(),
			Self::TextArea(el) => el.validity(),
			Self::Select(el) => el.validity(),
		}
	}

	fn set_custom_validity(&self, message: &str) {
		match self {
			Self::Input(el) => el.set_custom_validity(message),
			Self::TextArea(el) => el.set_custom_validity(message),
			Self::Select(el) => el.set_custom_validity(message),
		}
	}

	fn value(&self) -> String {
		match self {
			Self::Input(el) => el.value(),
			Self::TextArea(el) => el.value(),
			Self::Select(el) => el.value(),
		}
	}
}

pub(crate) fn js_error(value: JsValue) -> DomError {
	DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

impl FormDom for WebDocument {
	fn contains(&self, id: &str) -> bool {
		self.document.get_element_by_id(id).is_some()
	}

	fn add_class(&self, id: &str, class: &str) -> DomResult<()> {
		self.element(id)?.class_list().add_1(class).map_err(js_error)
	}

	fn remove_class(&self, id: &str, class: &str) -> DomResult<()> {
		self.element(id)?.class_list().remove_1(class).map_err(js_error)
	}

	fn set_text(&self, id: &str, text: &str) -> DomResult<()> {
		self.element(id)?.set_text_content(Some(text));
		Ok(())
	}

	fn validity(&self, id: &str) -> DomResult<ValidityState> {
		let validity = self.control(id)?.validity();
		// `valid` folds in `customError`, so the constraint result is rebuilt
		// from the individual flags.
		Ok(ValidityState::new(
			constraints_satisfied(&validity),
			validity.custom_error(),
		))
	}

	fn set_custom_validity(&self, id: &str, message: &str) -> DomResult<()> {
		self.control(id)?.set_custom_validity(message);
		Ok(())
	}

	fn value(&self, id: &str) -> DomResult<String> {
		Ok(self.control(id)?.value())
	}

	fn meta_content(&self, name: &str) -> Option<String> {
		let selector = format!("meta[name=\"{}\"]", name);
		let meta = self.document.query_selector(&selector).ok()??;
		// A meta tag without `content` still counts as present.
		Some(meta.get_attribute("content").unwrap_or_default())
	}
}

/// True when no flag other than `customError` is raised.
fn constraints_satisfied(validity: &web_sys::ValidityState) -> bool {
	!(validity.value_missing()
		|| validity.type_mismatch()
		|| validity.pattern_mismatch()
		|| validity.too_long()
		|| validity.too_short()
		|| validity.range_underflow()
		|| validity.range_overflow()
		|| validity.step_mismatch()
		|| validity.bad_input())
}
