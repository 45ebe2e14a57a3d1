//! Page configuration: element ids, selectors and preference key.
//!
//! Hosts may pass a JSON options object to override any default. Keys use
//! camelCase to match the JS calling convention; omitted keys keep their
//! default, so `{}` is a valid configuration.
//!
//! ```json
//! { "theme": { "preferenceKey": "site-theme" }, "logLevel": "debug" }
//! ```

use std::fmt;

use serde::Deserialize;

use crate::signup::Field;

/// Errors produced while reading host options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Options were not valid JSON or had the wrong shape.
    Parse(String),
    /// A required identifier was configured as an empty string.
    EmptyValue(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid page options: {msg}"),
            Self::EmptyValue(key) => write!(f, "page option `{key}` must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Theme toggle wiring.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeConfig {
    pub toggle_id: String,
    /// Class set on the root element while dark mode is active.
    pub dark_class: String,
    /// Storage key for the persisted mode.
    pub preference_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "themeToggle".into(),
            dark_class: "dark".into(),
            preference_key: "theme".into(),
        }
    }
}

/// Counter widget wiring.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CounterConfig {
    pub display_id: String,
    pub increment_id: String,
    pub decrement_id: String,
    pub reset_id: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            display_id: "count".into(),
            increment_id: "increment".into(),
            decrement_id: "decrement".into(),
            reset_id: "reset".into(),
        }
    }
}

/// Accordion discovery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AccordionConfig {
    /// CSS selector matching every trigger element.
    pub trigger_selector: String,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            trigger_selector: ".accordion-trigger".into(),
        }
    }
}

/// Signup form wiring: one input and one error slot per field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SignupConfig {
    pub form_id: String,
    pub status_id: String,
    pub name_id: String,
    pub email_id: String,
    pub password_id: String,
    pub confirm_id: String,
    pub terms_id: String,
    pub name_error_id: String,
    pub email_error_id: String,
    pub password_error_id: String,
    pub confirm_error_id: String,
    pub terms_error_id: String,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            form_id: "signupForm".into(),
            status_id: "formStatus".into(),
            name_id: "name".into(),
            email_id: "email".into(),
            password_id: "password".into(),
            confirm_id: "confirm".into(),
            terms_id: "terms".into(),
            name_error_id: "nameError".into(),
            email_error_id: "emailError".into(),
            password_error_id: "passwordError".into(),
            confirm_error_id: "confirmError".into(),
            terms_error_id: "termsError".into(),
        }
    }
}

impl SignupConfig {
    /// Id of the input element for `field`.
    #[must_use]
    pub fn input_id(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name_id,
            Field::Email => &self.email_id,
            Field::Password => &self.password_id,
            Field::Confirm => &self.confirm_id,
            Field::Terms => &self.terms_id,
        }
    }

    /// Id of the error-message slot for `field`.
    #[must_use]
    pub fn error_id(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name_error_id,
            Field::Email => &self.email_error_id,
            Field::Password => &self.password_error_id,
            Field::Confirm => &self.confirm_error_id,
            Field::Terms => &self.terms_error_id,
        }
    }
}

/// Full page configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PageConfig {
    pub theme: ThemeConfig,
    pub counter: CounterConfig,
    pub accordion: AccordionConfig,
    pub signup: SignupConfig,
    /// `tracing` filter directive, e.g. `"info"` or `"pagewire_core=debug"`.
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            counter: CounterConfig::default(),
            accordion: AccordionConfig::default(),
            signup: SignupConfig::default(),
            log_level: "info".into(),
        }
    }
}

impl PageConfig {
    /// Parse host options and reject empty identifiers.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every identifier is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let signup = &self.signup;
        let required: [(&'static str, &str); 20] = [
            ("theme.toggleId", &self.theme.toggle_id),
            ("theme.darkClass", &self.theme.dark_class),
            ("theme.preferenceKey", &self.theme.preference_key),
            ("counter.displayId", &self.counter.display_id),
            ("counter.incrementId", &self.counter.increment_id),
            ("counter.decrementId", &self.counter.decrement_id),
            ("counter.resetId", &self.counter.reset_id),
            ("accordion.triggerSelector", &self.accordion.trigger_selector),
            ("signup.formId", &signup.form_id),
            ("signup.statusId", &signup.status_id),
            ("signup.nameId", &signup.name_id),
            ("signup.emailId", &signup.email_id),
            ("signup.passwordId", &signup.password_id),
            ("signup.confirmId", &signup.confirm_id),
            ("signup.termsId", &signup.terms_id),
            ("signup.nameErrorId", &signup.name_error_id),
            ("signup.emailErrorId", &signup.email_error_id),
            ("signup.passwordErrorId", &signup.password_error_id),
            ("signup.confirmErrorId", &signup.confirm_error_id),
            ("signup.termsErrorId", &signup.terms_error_id),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyValue(key));
            }
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::EmptyValue("logLevel"));
        }
        Ok(())
    }
}
