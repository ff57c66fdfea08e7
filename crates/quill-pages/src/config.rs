//! Page-level configuration
//!
//! Class names, element-ID conventions, UI messages and CSRF wiring are all
//! configurable. Every field has a default matching the stock templates, so
//! `PagesConfig::default()` works without any JSON at all.
//!
//! ## Example
//!
//! ```ignore
//! use quill_pages::config::PagesConfig;
//!
//! let config = PagesConfig::from_json(r#"{"forms": {"default_message": "Invalid data"}}"#)?;
//! assert_eq!(config.forms.error_id("email"), "error-email");
//! ```

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Default message for an invalid field.
pub const DEFAULT_INVALID_MESSAGE: &str = "Невалидни данни";

/// Message shown when the two password fields differ.
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Паролите не съвпадат";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Failed to parse configuration: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("Invalid configuration value for `{key}`: {reason}")]
	Invalid { key: &'static str, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
	pub forms: FormUiConfig,
	pub csrf: CsrfConfig,
}

impl PagesConfig {
	/// Parses and validates a JSON document. Missing keys take their defaults.
	pub fn from_json(json: &str) -> ConfigResult<Self> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	/// Rejects empty class names, IDs, header names and messages.
	pub fn validate(&self) -> ConfigResult<()> {
		let forms = &self.forms;
		let csrf = &self.csrf;
		let required = [
			("forms.field_error_class", &forms.field_error_class),
			("forms.error_class", &forms.error_class),
			("forms.visible_class", &forms.visible_class),
			("forms.hidden_class", &forms.hidden_class),
			("forms.default_message", &forms.default_message),
			("forms.password_mismatch_message", &forms.password_mismatch_message),
			("forms.password_field", &forms.password_field),
			("forms.repeat_password_field", &forms.repeat_password_field),
			("csrf.meta_name", &csrf.meta_name),
			("csrf.header_name", &csrf.header_name),
			("csrf.event_name", &csrf.event_name),
		];
		for (key, value) in required {
			if value.trim().is_empty() {
				return Err(ConfigError::Invalid {
					key,
					reason: "must not be empty".to_string(),
				});
			}
		}
		if forms.label_suffix.is_empty() && forms.error_prefix.is_empty() {
			return Err(ConfigError::Invalid {
				key: "forms.label_suffix",
				reason: "label and error element IDs would collide with the field ID".to_string(),
			});
		}
		Ok(())
	}
}

/// Class names, ID conventions and messages used by the validation renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormUiConfig {
	/// Class toggled on the field itself.
	pub field_error_class: String,
	/// Class toggled on the label and on the message element.
	pub error_class: String,
	/// Display class that shows the message element.
	pub visible_class: String,
	/// Display class that hides the message element.
	pub hidden_class: String,
	/// `{field}{label_suffix}` is the label ID.
	pub label_suffix: String,
	/// `{error_prefix}{field}` is the message element ID.
	pub error_prefix: String,
	pub default_message: String,
	pub password_mismatch_message: String,
	pub password_field: String,
	pub repeat_password_field: String,
}

impl Default for FormUiConfig {
	fn default() -> Self {
		Self {
			field_error_class: "input-error".to_string(),
			error_class: "error".to_string(),
			visible_class: "d-block".to_string(),
			hidden_class: "d-none".to_string(),
			label_suffix: "-label".to_string(),
			error_prefix: "error-".to_string(),
			default_message: DEFAULT_INVALID_MESSAGE.to_string(),
			password_mismatch_message: PASSWORD_MISMATCH_MESSAGE.to_string(),
			password_field: "password".to_string(),
			repeat_password_field: "repeat-password".to_string(),
		}
	}
}

impl FormUiConfig {
	pub fn label_id(&self, field_id: &str) -> String {
		format!("{}{}", field_id, self.label_suffix)
	}

	pub fn error_id(&self, field_id: &str) -> String {
		format!("{}{}", self.error_prefix, field_id)
	}
}

/// Where the CSRF token comes from and where it goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsrfConfig {
	/// `<meta name="...">` holding the token.
	pub meta_name: String,
	/// Request header the token is written to.
	pub header_name: String,
	/// htmx event fired on `document.body` before each request.
	pub event_name: String,
}

impl Default for CsrfConfig {
	fn default() -> Self {
		Self {
			meta_name: "csrf-token".to_string(),
			header_name: "X-CSRF-Token".to_string(),
			event_name: "htmx:configRequest".to_string(),
		}
	}
}

thread_local! {
	static ACTIVE_CONFIG: RefCell<PagesConfig> = RefCell::new(PagesConfig::default());
}

/// Replaces the page-wide configuration used by the JS bindings.
pub fn set_active_config(config: PagesConfig) {
	ACTIVE_CONFIG.with(|active| *active.borrow_mut() = config);
}

/// Returns a copy of the page-wide configuration.
pub fn active_config() -> PagesConfig {
	ACTIVE_CONFIG.with(|active| active.borrow().clone())
}
