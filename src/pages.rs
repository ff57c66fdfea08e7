//! Form glue for server-rendered, htmx-driven pages
//!
//! This module provides access to quill-pages.
//!
//! ## Architecture
//!
//! - **CSRF**: token from the page meta tag attached to every htmx request
//! - **Validation**: field error classes and messages driven by native validity
//! - **Server errors**: `422` validation bodies rendered like client-side errors
//!
//! ## Example
//!
//! ```rust,ignore
//! use quill::pages::{FieldRenderer, FormUiConfig, WebDocument};
//!
//! let dom = WebDocument::current()?;
//! let config = FormUiConfig::default();
//! FieldRenderer::new(&dom, &config).validate_and_label("email", None)?;
//! ```

// Re-export all quill-pages functionality
pub use quill_pages::*;
