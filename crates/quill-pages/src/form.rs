//! Server-side validation errors
//!
//! When a submitted payload fails validation the server answers with
//! `422 Unprocessable Entity` and a body of the form:
//!
//! ```json
//! {
//!   "success": false,
//!   "errors": [
//!     {"field": "email", "error": "field must be a valid email", "value": "nope"}
//!   ]
//! }
//! ```
//!
//! [`ServerErrorRenderer`] puts those messages on the page using the same
//! markers as client-side validation, so the two look identical.

use crate::config::FormUiConfig;
use crate::dom::{DomResult, FormDom};
use crate::validation::FieldRenderer;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ServerErrorsError {
	#[error("Malformed validation response: {0}")]
	Malformed(#[from] serde_json::Error),
	#[error("Response reports success, no validation errors to render")]
	NotAFailure,
}

/// A single field failure reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
	pub field: String,
	pub error: String,
	/// Submitted value, blank for password fields.
	#[serde(default)]
	pub value: String,
}

/// Body of a failed-validation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedValidationResponse {
	pub success: bool,
	#[serde(default)]
	pub errors: Vec<FieldError>,
}

impl FailedValidationResponse {
	pub fn from_json(json: &str) -> Result<Self, ServerErrorsError> {
		let response: Self = serde_json::from_str(json)?;
		if response.success {
			return Err(ServerErrorsError::NotAFailure);
		}
		Ok(response)
	}
}

/// Renders server-reported field errors.
#[derive(Debug)]
pub struct ServerErrorRenderer<'a, D: FormDom> {
	fields: FieldRenderer<'a, D>,
}

impl<'a, D: FormDom> ServerErrorRenderer<'a, D> {
	pub fn new(dom: D, config: &'a FormUiConfig) -> Self {
		Self {
			fields: FieldRenderer::new(dom, config),
		}
	}

	/// Marks every reported field invalid with the server's message.
	///
	/// A blank message is replaced by the configured default, so the field
	/// still blocks submission. Errors whose field, label or message element
	/// is missing are logged and skipped without touching the page; any other
	/// DOM failure aborts. Returns the number of fields marked.
	pub fn render(&self, response: &FailedValidationResponse) -> DomResult<usize> {
		let config = self.fields.config();
		let mut marked = 0;
		for error in &response.errors {
			let field = error.field.as_str();
			if let Some(missing) = self.missing_element(field) {
				crate::warn_log!(
					"Validation error for `{}` not shown, #{} is missing",
					field,
					missing
				);
				continue;
			}

			let message = if error.error.trim().is_empty() {
				config.default_message.as_str()
			} else {
				error.error.as_str()
			};
			self.fields.mark_invalid(field, message)?;
			marked += 1;
		}
		Ok(marked)
	}

	/// Clears the markers and custom validity of the given fields.
	pub fn clear<'f>(&self, fields: impl IntoIterator<Item = &'f str>) -> DomResult<()> {
		for field in fields {
			self.fields.clear_field_markers(field)?;
			self.fields.dom().set_custom_validity(field, "")?;
		}
		Ok(())
	}

	/// First of the field, its label and its message element absent from the page.
	fn missing_element(&self, field: &str) -> Option<String> {
		let config = self.fields.config();
		[field.to_string(), config.label_id(field), config.error_id(field)]
			.into_iter()
			.find(|id| !self.fields.dom().contains(id))
	}
}
