//! In-memory document
//!
//! A flat table of elements keyed by ID. It does not parse HTML or evaluate
//! constraints: each form control carries its constraint result as a plain
//! flag that callers set directly, mirroring whatever the browser would have
//! decided.

use super::{DomError, DomResult, FormDom, ValidityState};
use std::cell::RefCell;
use std::collections::HashMap;

/// State specific to form controls (`input`, `textarea`, `select`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormControlState {
	pub value: String,
	pub constraints_satisfied: bool,
	pub custom_validity: String,
}

/// A single element of a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
	/// Class list in insertion order, without duplicates (like `DOMTokenList`).
	pub classes: Vec<String>,
	pub text: String,
	pub control: Option<FormControlState>,
}

impl MemoryElement {
	pub fn has_class(&self, class: &str) -> bool {
		self.classes.iter().any(|c| c == class)
	}

	fn add_class(&mut self, class: &str) {
		if !self.has_class(class) {
			self.classes.push(class.to_string());
		}
	}

	fn remove_class(&mut self, class: &str) {
		self.classes.retain(|c| c != class);
	}
}

/// In-memory [`FormDom`] implementation.
#[derive(Debug, Default)]
pub struct MemoryDocument {
	elements: RefCell<HashMap<String, MemoryElement>>,
	meta: HashMap<String, String>,
}

impl MemoryDocument {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a plain (non form control) element, e.g. a label or a message span.
	pub fn with_element(self, id: impl Into<String>) -> Self {
		self.with_element_classes(id, &[])
	}

	/// Adds a plain element with an initial class list.
	pub fn with_element_classes(self, id: impl Into<String>, classes: &[&str]) -> Self {
		let mut element = MemoryElement::default();
		for class in classes {
			element.add_class(class);
		}
		self.elements.borrow_mut().insert(id.into(), element);
		self
	}

	/// Adds a form control with a value and its constraint-validation result.
	pub fn with_field(
		self,
		id: impl Into<String>,
		value: impl Into<String>,
		constraints_satisfied: bool,
	) -> Self {
		let element = MemoryElement {
			control: Some(FormControlState {
				value: value.into(),
				constraints_satisfied,
				custom_validity: String::new(),
			}),
			..MemoryElement::default()
		};
		self.elements.borrow_mut().insert(id.into(), element);
		self
	}

	/// Adds `<meta name="{name}" content="{content}">`.
	pub fn with_meta(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
		self.meta.insert(name.into(), content.into());
		self
	}

	/// Returns a snapshot of the element with the given ID.
	pub fn element(&self, id: &str) -> Option<MemoryElement> {
		self.elements.borrow().get(id).cloned()
	}

	pub fn has_class(&self, id: &str, class: &str) -> bool {
		self.elements
			.borrow()
			.get(id)
			.is_some_and(|element| element.has_class(class))
	}

	pub fn text(&self, id: &str) -> Option<String> {
		self.elements.borrow().get(id).map(|e| e.text.clone())
	}

	pub fn custom_validity(&self, id: &str) -> Option<String> {
		self.elements
			.borrow()
			.get(id)
			.and_then(|e| e.control.as_ref())
			.map(|c| c.custom_validity.clone())
	}

	/// Simulates the user editing a field.
	pub fn set_value(&self, id: &str, value: impl Into<String>) -> DomResult<()> {
		self.with_control(id, |control| control.value = value.into())
	}

	/// Simulates the browser re-evaluating a field's declared constraints.
	pub fn set_constraints_satisfied(&self, id: &str, satisfied: bool) -> DomResult<()> {
		self.with_control(id, |control| control.constraints_satisfied = satisfied)
	}

	fn with_element_mut<T>(
		&self,
		id: &str,
		f: impl FnOnce(&mut MemoryElement) -> T,
	) -> DomResult<T> {
		let mut elements = self.elements.borrow_mut();
		let element = elements.get_mut(id).ok_or_else(|| DomError::not_found(id))?;
		Ok(f(element))
	}

	fn with_control<T>(
		&self,
		id: &str,
		f: impl FnOnce(&mut FormControlState) -> T,
	) -> DomResult<T> {
		let mut elements = self.elements.borrow_mut();
		let element = elements.get_mut(id).ok_or_else(|| DomError::not_found(id))?;
		let control = element
			.control
			.as_mut()
			.ok_or_else(|| DomError::NotAFormControl { id: id.to_string() })?;
		Ok(f(control))
	}
}

impl FormDom for MemoryDocument {
	fn contains(&self, id: &str) -> bool {
		self.elements.borrow().contains_key(id)
	}

	fn add_class(&self, id: &str, class: &str) -> DomResult<()> {
		self.with_element_mut(id, |element| element.add_class(class))
	}

	fn remove_class(&self, id: &str, class: &str) -> DomResult<()> {
		self.with_element_mut(id, |element| element.remove_class(class))
	}

	fn set_text(&self, id: &str, text: &str) -> DomResult<()> {
		self.with_element_mut(id, |element| element.text = text.to_string())
	}

	fn validity(&self, id: &str) -> DomResult<ValidityState> {
		self.with_control(id, |control| {
			ValidityState::new(
				control.constraints_satisfied,
				!control.custom_validity.is_empty(),
			)
		})
	}

	fn set_custom_validity(&self, id: &str, message: &str) -> DomResult<()> {
		self.with_control(id, |control| control.custom_validity = message.to_string())
	}

	fn value(&self, id: &str) -> DomResult<String> {
		self.with_control(id, |control| control.value.clone())
	}

	fn meta_content(&self, name: &str) -> Option<String> {
		self.meta.get(name).cloned()
	}
}
