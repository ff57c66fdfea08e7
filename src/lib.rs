//! # Quill
//!
//! Browser-side glue for the Quill blog, compiled to WebAssembly and loaded by
//! the server-rendered templates.
//!
//! ## Feature Flags
//!
//! - `pages` (default) - CSRF headers for htmx and form validation rendering
//! - `console_error_panic_hook` - readable panic messages in the browser console
//! - `debug-hooks` - enables `debug_log!` output in debug builds
//!
//! ## Loading the bundle
//!
//! ```html
//! <meta name="csrf-token" content="{{ .CSRFToken }}">
//! <script type="module">
//!   import loadQuill, * as quill from "/static/pkg/quill.js";
//!   await loadQuill();
//!   quill.init();
//!   Object.assign(window, quill);
//! </script>
//! ```

#[cfg(feature = "pages")]
pub mod pages;

pub mod prelude {
	#[cfg(feature = "pages")]
	pub use crate::pages::{
		CsrfConfig, CsrfHeaderInjector, DomError, DomResult, FieldRenderer, FormDom, FormUiConfig,
		HeaderSink, MemoryDocument, PagesConfig, ServerErrorRenderer,
	};
}
