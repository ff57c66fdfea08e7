//! Quill Pages - browser-side form glue
//!
//! WASM helpers loaded by the Quill blog templates. The page is rendered on
//! the server and driven by htmx; this crate only adds the two pieces of
//! behavior the markup cannot express on its own.
//!
//! ## Features
//!
//! - **CSRF headers**: the token from `<meta name="csrf-token">` is attached to
//!   every htmx request as `X-CSRF-Token`
//! - **Validation rendering**: error classes, messages and custom-validity
//!   overrides kept in sync with each field's native validity
//! - **Password confirmation**: `repeat-password` must equal `password`
//! - **Server errors**: `422` validation bodies rendered with the same markers
//!
//! ## Architecture
//!
//! - [`dom`]: ID-addressed DOM abstraction (`web-sys` document or in-memory)
//! - [`csrf`]: CSRF header injection for htmx
//! - [`validation`]: field validation-state rendering
//! - [`form`](mod@form): server-reported validation errors
//! - [`config`]: class names, ID conventions, messages
//! - `bindings`: `wasm-bindgen` exports called from templates (WASM only)
//!
//! ## Example
//!
//! ```ignore
//! use quill_pages::config::PagesConfig;
//! use quill_pages::dom::MemoryDocument;
//! use quill_pages::validation::FieldRenderer;
//!
//! let config = PagesConfig::default();
//! let dom = MemoryDocument::new()
//!     .with_field("password", "abc", true)
//!     .with_field("repeat-password", "abd", true)
//!     .with_element("repeat-password-label")
//!     .with_element_classes("error-repeat-password", &["d-none"]);
//!
//! FieldRenderer::new(&dom, &config.forms).check_repeat_password()?;
//! assert_eq!(dom.text("error-repeat-password").as_deref(), Some("Паролите не съвпадат"));
//! ```

// Declared first so the logging macros are in scope for every other module.
pub mod logging;

pub mod config;
pub mod csrf;
pub mod dom;
pub mod form;
pub mod validation;

#[cfg(target_arch = "wasm32")]
pub mod bindings;

pub use config::{CsrfConfig, FormUiConfig, PagesConfig};
pub use csrf::{CsrfHeaderInjector, HeaderSink};
pub use dom::{DomError, DomResult, FormDom, MemoryDocument, ValidityState};
#[cfg(target_arch = "wasm32")]
pub use dom::WebDocument;
pub use form::{FailedValidationResponse, FieldError, ServerErrorRenderer};
pub use validation::FieldRenderer;
