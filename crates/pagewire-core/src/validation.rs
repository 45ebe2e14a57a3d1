#![forbid(unsafe_code)]

//! Field validators for the signup form.
//!
//! Each validator maps a value to a [`ValidationResult`] carrying a fixed,
//! human-readable message on failure. Messages can be replaced with
//! `with_message` on every built-in.
//!
//! # Example
//!
//! ```rust
//! use pagewire_core::validation::{Email, Validator};
//!
//! assert!(Email::new().validate("a@b.co").is_valid());
//! assert!(!Email::new().validate("a@b").is_valid());
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Error Codes
// ---------------------------------------------------------------------------

/// Trimmed value shorter than the minimum.
pub const ERROR_CODE_MIN_LENGTH: &str = "too_short";
/// Value is not an email address.
pub const ERROR_CODE_EMAIL: &str = "email";
/// Password misses a length or character-class requirement.
pub const ERROR_CODE_WEAK_PASSWORD: &str = "weak_password";
/// Confirmation is empty or differs from the password.
pub const ERROR_CODE_MISMATCH: &str = "mismatch";
/// Required checkbox is unchecked.
pub const ERROR_CODE_UNCHECKED: &str = "unchecked";

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const NAME_MESSAGE: &str = "Please enter your full name (min 2 characters).";
pub const EMAIL_MESSAGE: &str = "Enter a valid email address.";
pub const PASSWORD_MESSAGE: &str =
    "Min 8 chars, include upper, lower, number, and special character.";
pub const CONFIRM_MESSAGE: &str = "Passwords do not match.";
pub const TERMS_MESSAGE: &str = "You must accept the terms.";

// Whitespace classes include U+FEFF, which browsers treat as whitespace.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]{2,}$")
        .expect("valid email regex")
});
static LOWER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("[a-z]").expect("valid regex"));
static UPPER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("[A-Z]").expect("valid regex"));
static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("[0-9]").expect("valid regex"));
// ASCII word characters only; any other non-space character counts as a symbol.
static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s\x{FEFF}]").expect("valid symbol regex"));

/// Whitespace as the browser trims it: Unicode `White_Space` plus U+FEFF.
fn is_page_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn trim_page(value: &str) -> &str {
    value.trim_matches(is_page_whitespace)
}

/// Length in UTF-16 code units, the unit input lengths are measured in.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

// ---------------------------------------------------------------------------
// ValidationError / ValidationResult
// ---------------------------------------------------------------------------

/// A validation failure: stable code plus display message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable error code for programmatic handling.
    pub code: &'static str,
    /// Human-readable message shown next to the field.
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The result of a validation operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid(ValidationError),
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }

    fn check(ok: bool, code: &'static str, message: &str) -> Self {
        if ok {
            Self::Valid
        } else {
            Self::Invalid(ValidationError::new(code, message))
        }
    }
}

// ---------------------------------------------------------------------------
// Validator Trait
// ---------------------------------------------------------------------------

/// A trait for validating values of type `T`.
pub trait Validator<T: ?Sized> {
    /// Validate the given value.
    fn validate(&self, value: &T) -> ValidationResult;

    /// The message reported on failure.
    fn error_message(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Built-in Validators
// ---------------------------------------------------------------------------

/// At least `min` UTF-16 code units after trimming surrounding whitespace.
#[derive(Debug, Clone)]
pub struct MinTrimmedLength {
    pub min: usize,
    pub message: String,
}

impl MinTrimmedLength {
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self {
            min,
            message: format!("Must be at least {min} characters"),
        }
    }

    /// The name rule: two characters, page message.
    #[must_use]
    pub fn full_name() -> Self {
        Self::new(2).with_message(NAME_MESSAGE)
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Validator<str> for MinTrimmedLength {
    fn validate(&self, value: &str) -> ValidationResult {
        let len = utf16_len(trim_page(value));
        ValidationResult::check(len >= self.min, ERROR_CODE_MIN_LENGTH, &self.message)
    }

    fn error_message(&self) -> &str {
        &self.message
    }
}

/// `local@domain.tld` after trimming, case-insensitive.
///
/// Neither side of the `@` may contain whitespace or another `@`, and the
/// segment after the last `.` needs at least two characters.
#[derive(Debug, Clone)]
pub struct Email {
    pub message: String,
}

impl Default for Email {
    fn default() -> Self {
        Self {
            message: EMAIL_MESSAGE.to_string(),
        }
    }
}

impl Email {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Validator<str> for Email {
    fn validate(&self, value: &str) -> ValidationResult {
        ValidationResult::check(
            EMAIL_RE.is_match(trim_page(value)),
            ERROR_CODE_EMAIL,
            &self.message,
        )
    }

    fn error_message(&self) -> &str {
        &self.message
    }
}

/// Length and character-class password rule.
///
/// Requires at least `min_len` UTF-16 code units with no line breaks, and at least
/// one lowercase ASCII letter, one uppercase ASCII letter, one ASCII digit,
/// and one character that is neither an ASCII word character nor whitespace.
#[derive(Debug, Clone)]
pub struct StrongPassword {
    pub min_len: usize,
    pub message: String,
}

impl Default for StrongPassword {
    fn default() -> Self {
        Self {
            min_len: 8,
            message: PASSWORD_MESSAGE.to_string(),
        }
    }
}

impl StrongPassword {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Validator<str> for StrongPassword {
    fn validate(&self, value: &str) -> ValidationResult {
        let single_line = !value.contains(['\n', '\r', '\u{2028}', '\u{2029}']);
        let ok = single_line
            && utf16_len(value) >= self.min_len
            && LOWER_RE.is_match(value)
            && UPPER_RE.is_match(value)
            && DIGIT_RE.is_match(value)
            && SYMBOL_RE.is_match(value);
        ValidationResult::check(ok, ERROR_CODE_WEAK_PASSWORD, &self.message)
    }

    fn error_message(&self) -> &str {
        &self.message
    }
}

/// Password plus its confirmation, as seen by [`Matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation<'a> {
    pub password: &'a str,
    pub confirm: &'a str,
}

/// Confirmation must be non-empty and exactly equal to the password.
#[derive(Debug, Clone)]
pub struct Matches {
    pub message: String,
}

impl Default for Matches {
    fn default() -> Self {
        Self {
            message: CONFIRM_MESSAGE.to_string(),
        }
    }
}

impl Matches {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Validator<Confirmation<'_>> for Matches {
    fn validate(&self, value: &Confirmation<'_>) -> ValidationResult {
        let ok = !value.confirm.is_empty() && value.confirm == value.password;
        ValidationResult::check(ok, ERROR_CODE_MISMATCH, &self.message)
    }

    fn error_message(&self) -> &str {
        &self.message
    }
}

/// Checkbox must be checked.
#[derive(Debug, Clone)]
pub struct Checked {
    pub message: String,
}

impl Default for Checked {
    fn default() -> Self {
        Self {
            message: TERMS_MESSAGE.to_string(),
        }
    }
}

impl Checked {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Validator<bool> for Checked {
    fn validate(&self, value: &bool) -> ValidationResult {
        ValidationResult::check(*value, ERROR_CODE_UNCHECKED, &self.message)
    }

    fn error_message(&self) -> &str {
        &self.message
    }
}
