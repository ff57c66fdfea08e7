//! DOM abstraction layer
//!
//! The validation renderer and the CSRF injector never talk to `web-sys`
//! directly. They address elements by ID through [`FormDom`], which has two
//! implementations:
//!
//! - [`WebDocument`]: the live browser document (WASM only)
//! - [`MemoryDocument`]: an in-memory element table used natively and in tests
//!
//! Every ID lookup returns a [`DomResult`]. A missing element is reported as
//! [`DomError::ElementNotFound`] instead of faulting on a null reference.
//!
//! ## Example
//!
//! ```ignore
//! use quill_pages::dom::{FormDom, MemoryDocument};
//!
//! let dom = MemoryDocument::new().with_field("email", "", false);
//! assert!(!dom.validity("email")?.valid());
//! dom.add_class("email", "input-error")?;
//! ```

mod memory;
#[cfg(target_arch = "wasm32")]
mod web;

pub use memory::{FormControlState, MemoryDocument, MemoryElement};
#[cfg(target_arch = "wasm32")]
pub use web::WebDocument;
#[cfg(target_arch = "wasm32")]
pub(crate) use web::js_error;

/// Errors raised while reading or mutating the document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
	#[error("No global window available")]
	NoWindow,
	#[error("Window has no document")]
	NoDocument,
	#[error("Document has no body")]
	NoBody,
	#[error("Element not found: #{id}")]
	ElementNotFound { id: String },
	#[error("Element #{id} is not a form control")]
	NotAFormControl { id: String },
	#[error("JavaScript error: {0}")]
	Js(String),
}

impl DomError {
	pub(crate) fn not_found(id: &str) -> Self {
		Self::ElementNotFound { id: id.to_string() }
	}
}

pub type DomResult<T> = Result<T, DomError>;

/// Snapshot of a form control's constraint-validation flags.
///
/// Only the two inputs that decide `validity.valid` are tracked: whether the
/// declared constraints (required, pattern, type, ...) hold, and whether a
/// custom-validity message is currently set. As in browsers, a field with a
/// custom message is invalid even when its constraints hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityState {
	pub constraints_satisfied: bool,
	pub custom_error: bool,
}

impl ValidityState {
	pub fn new(constraints_satisfied: bool, custom_error: bool) -> Self {
		Self {
			constraints_satisfied,
			custom_error,
		}
	}

	/// Equivalent of `element.validity.valid`.
	pub fn valid(&self) -> bool {
		self.constraints_satisfied && !self.custom_error
	}
}

/// ID-addressed access to the parts of a document the form glue touches.
///
/// Methods take `&self`: the browser document is mutated through shared
/// handles, so implementations use interior mutability where needed.
pub trait FormDom {
	/// Whether an element with the given ID exists.
	fn contains(&self, id: &str) -> bool;

	/// Adds a CSS class to the element with the given ID.
	fn add_class(&self, id: &str, class: &str) -> DomResult<()>;

	/// Removes a CSS class from the element with the given ID.
	fn remove_class(&self, id: &str, class: &str) -> DomResult<()>;

	/// Replaces the text content of the element with the given ID.
	fn set_text(&self, id: &str, text: &str) -> DomResult<()>;

	/// Reads the native validity of a form control.
	fn validity(&self, id: &str) -> DomResult<ValidityState>;

	/// Sets (or clears, with `""`) the custom-validity message of a form control.
	fn set_custom_validity(&self, id: &str, message: &str) -> DomResult<()>;

	/// Reads the current value of a form control.
	fn value(&self, id: &str) -> DomResult<String>;

	/// Reads the `content` attribute of `<meta name="{name}">`.
	///
	/// Returns `None` only when no such meta tag exists; a tag without a
	/// `content` attribute yields an empty string.
	fn meta_content(&self, name: &str) -> Option<String>;
}

impl<D: FormDom + ?Sized> FormDom for &D {
	fn contains(&self, id: &str) -> bool {
		(**self).contains(id)
	}

	fn add_class(&self, id: &str, class: &str) -> DomResult<()> {
		(**self).add_class(id, class)
	}

	fn remove_class(&self, id: &str, class: &str) -> DomResult<()> {
		(**self).remove_class(id, class)
	}

	fn set_text(&self, id: &str, text: &str) -> DomResult<()> {
		(**self).set_text(id, text)
	}

	fn validity(&self, id: &str) -> DomResult<ValidityState> {
		(**self).validity(id)
	}

	fn set_custom_validity(&self, id: &str, message: &str) -> DomResult<()> {
		(**self).set_custom_validity(id, message)
	}

	fn value(&self, id: &str) -> DomResult<String> {
		(**self).value(id)
	}

	fn meta_content(&self, name: &str) -> Option<String> {
		(**self).meta_content(name)
	}
}
