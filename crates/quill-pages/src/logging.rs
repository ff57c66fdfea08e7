//! Console logging
//!
//! The four macros format their arguments and hand them to [`emit`], which
//! writes to the browser console on WASM and to stderr elsewhere. Nothing is
//! logged without `debug_assertions`; `debug_log!` also needs the
//! `debug-hooks` feature.
//!
//! | Macro | Level | WASM | Native |
//! |-------|-------|------|--------|
//! | `debug_log!` | [`Level::Debug`] | `console.debug` | `[DEBUG] ...` |
//! | `info_log!` | [`Level::Info`] | `console.info` | `[INFO] ...` |
//! | `warn_log!` | [`Level::Warn`] | `console.warn` | `[WARN] ...` |
//! | `error_log!` | [`Level::Error`] | `console.error` | `[ERROR] ...` |
//!
//! ## Example
//!
//! ```ignore
//! use quill_pages::{debug_log, warn_log};
//!
//! debug_log!("No <meta name=\"{}\"> on page", meta_name);
//! warn_log!("Validation error for `{}` not shown", field);
//! ```

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	Debug,
	Info,
	Warn,
	Error,
}

impl Level {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Debug => "DEBUG",
			Self::Info => "INFO",
			Self::Warn => "WARN",
			Self::Error => "ERROR",
		}
	}
}

/// Writes one formatted line at `level`. Called by the logging macros.
#[doc(hidden)]
pub fn emit(level: Level, message: String) {
	#[cfg(test)]
	capture::record(level, &message);

	#[cfg(target_arch = "wasm32")]
	{
		let message = wasm_bindgen::JsValue::from_str(&message);
		match level {
			Level::Debug => web_sys::console::debug_1(&message),
			Level::Info => web_sys::console::info_1(&message),
			Level::Warn => web_sys::console::warn_1(&message),
			Level::Error => web_sys::console::error_1(&message),
		}
	}

	#[cfg(not(target_arch = "wasm32"))]
	eprintln!("[{}] {}", level.as_str(), message);
}


#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks"))]
macro_rules! debug_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Debug, format!($($arg)*))
	};
}

#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-hooks")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! info_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Info, format!($($arg)*))
	};
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! warn_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Warn, format!($($arg)*))
	};
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! error_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Error, format!($($arg)*))
	};
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}
