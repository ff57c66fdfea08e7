//! Form validation-state rendering
//!
//! Synchronizes a field's native validity with the error UI around it. For a
//! field `email` the stock templates provide:
//!
//! ```html
//! <label id="email-label" for="email">Email</label>
//! <input id="email" type="email" required>
//! <span id="error-email" class="d-none"></span>
//! ```
//!
//! All operations read the DOM, write the DOM and keep no state of their own,
//! so repeating a call on an unchanged document is a no-op.
//!
//! ## Example
//!
//! ```ignore
//! use quill_pages::config::FormUiConfig;
//! use quill_pages::dom::WebDocument;
//! use quill_pages::validation::FieldRenderer;
//!
//! let dom = WebDocument::current()?;
//! let config = FormUiConfig::default();
//! let renderer = FieldRenderer::new(&dom, &config);
//! renderer.validate_and_label("email", None)?;
//! renderer.check_repeat_password()?;
//! ```

use crate::config::FormUiConfig;
use crate::dom::{DomResult, FormDom};

/// Renders validation state for fields of a [`FormDom`].
#[derive(Debug)]
pub struct FieldRenderer<'a, D: FormDom> {
	dom: D,
	config: &'a FormUiConfig,
}

impl<'a, D: FormDom> FieldRenderer<'a, D> {
	pub fn new(dom: D, config: &'a FormUiConfig) -> Self {
		Self { dom, config }
	}

	pub fn config(&self) -> &FormUiConfig {
		self.config
	}

	pub(crate) fn dom(&self) -> &D {
		&self.dom
	}

	/// Marks the field valid or invalid according to its native validity.
	///
	/// Invalid fields get the error classes, a visible message (`message` or
	/// the configured default) and a matching custom-validity override so
	/// native submission is blocked. Valid fields are fully cleared.
	pub fn validate_and_label(&self, field_id: &str, message: Option<&str>) -> DomResult<()> {
		if self.dom.validity(field_id)?.valid() {
			self.clear_field_markers(field_id)?;
			return self.dom.set_custom_validity(field_id, "");
		}

		let message = message.unwrap_or(self.config.default_message.as_str());
		self.mark_invalid(field_id, message)
	}

	/// Clears the error UI of a valid field, then always clears the
	/// custom-validity override.
	///
	/// On an invalid field the visible markers stay but the override is still
	/// removed, so native submission is no longer blocked by it.
	pub fn check_validity(&self, field_id: &str) -> DomResult<()> {
		if self.dom.validity(field_id)?.valid() {
			self.clear_field_markers(field_id)?;
		}

		self.dom.set_custom_validity(field_id, "")
	}

	/// Shows `message` in the element with the given ID.
	pub fn show_error(&self, element_id: &str, message: &str) -> DomResult<()> {
		self.dom.add_class(element_id, &self.config.error_class)?;
		self.dom.set_text(element_id, message)?;
		self.dom.add_class(element_id, &self.config.visible_class)?;
		self.dom.remove_class(element_id, &self.config.hidden_class)
	}

	/// Hides the element with the given ID. Its text is left untouched.
	pub fn remove_error(&self, element_id: &str) -> DomResult<()> {
		self.dom.remove_class(element_id, &self.config.visible_class)?;
		self.dom.add_class(element_id, &self.config.hidden_class)
	}

	/// Checks that the repeat-password field matches the password field.
	pub fn check_repeat_password(&self) -> DomResult<()> {
		let password_id = &self.config.password_field;
		let repeat_id = &self.config.repeat_password_field;

		if self.dom.value(repeat_id)? == self.dom.value(password_id)? {
			self.dom.set_custom_validity(repeat_id, "")?;
			return self.clear_field_markers(repeat_id);
		}

		self.mark_invalid(repeat_id, &self.config.password_mismatch_message)
	}

	/// Applies the invalid state to a field regardless of its native validity.
	pub(crate) fn mark_invalid(&self, field_id: &str, message: &str) -> DomResult<()> {
		self.dom.add_class(field_id, &self.config.field_error_class)?;
		self.dom
			.add_class(&self.config.label_id(field_id), &self.config.error_class)?;
		self.show_error(&self.config.error_id(field_id), message)?;
		self.dom.set_custom_validity(field_id, message)
	}

	/// Removes the field class, hides the message and unmarks the label.
	pub(crate) fn clear_field_markers(&self, field_id: &str) -> DomResult<()> {
		self.dom
			.remove_class(field_id, &self.config.field_error_class)?;
		self.remove_error(&self.config.error_id(field_id))?;
		self.dom
			.remove_class(&self.config.label_id(field_id), &self.config.error_class)
	}
}
