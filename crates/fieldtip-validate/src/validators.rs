#![forbid(unsafe_code)]

//! Built-in form-control validators.
//!
//! Each validator checks one rule against a [`FieldValue`] and reports at
//! most one [`ErrorEntry`] under its own error kind; kinds are unique
//! across validators so a field's error set never aliases. Validators
//! other than the required ones skip empty values, emptiness is the
//! `required` validator's job.
//!
//! Every validator comes in two flavors sharing one catalog entry: the
//! plain constructor bakes in the German default text, the `i18n`
//! constructor carries the full tri-language bundle. A custom message
//! (plain or localized) can replace the default via `with_message`.

use std::sync::LazyLock;

use regex::Regex;

use fieldtip_core::{ErrorEntry, ErrorPayload, TriLangText};

use crate::messages;

// ---------------------------------------------------------------------------
// Error kinds
// ---------------------------------------------------------------------------

/// Error kind reported by [`Required`].
pub const KIND_REQUIRED: &str = "required";
/// Error kind reported by [`TrueRequired`].
pub const KIND_TRUE_REQUIRED: &str = "trueRequired";
/// Error kind reported by [`MinLength`].
pub const KIND_MIN_LENGTH: &str = "minLength";
/// Error kind reported by [`MaxLength`].
pub const KIND_MAX_LENGTH: &str = "maxLength";
/// Error kind reported by [`MinValue`].
pub const KIND_MIN_VALUE: &str = "minValue";
/// Error kind reported by [`MaxValue`].
pub const KIND_MAX_VALUE: &str = "maxValue";
/// Error kind reported by [`SmallerThan`].
pub const KIND_SMALLER_THAN: &str = "smallerThan";
/// Error kind reported by [`GreaterThan`].
pub const KIND_GREATER_THAN: &str = "greaterThan";
/// Error kind reported by [`LettersOnly`].
pub const KIND_LETTERS_ONLY: &str = "lettersOnly";
/// Error kind reported by [`Email`].
pub const KIND_INVALID_EMAIL: &str = "invalidEmail";
/// Error kind reported by [`RegexPattern`].
pub const KIND_REGEX_PATTERN: &str = "regexPattern";
/// Error kind reported by [`PasswordRules`].
pub const KIND_PASSWORD_ERRORS: &str = "passwordErrors";

static LETTERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ ]*$").expect("letters pattern"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern")
});

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

/// The current value of a form control.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// No value entered.
    #[default]
    Empty,
    /// Free-text input.
    Text(String),
    /// Numeric input.
    Number(f64),
    /// Checkbox state.
    Bool(bool),
    /// Multi-select input.
    List(Vec<String>),
}

impl FieldValue {
    /// Convenience constructor for text values.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Whether the value counts as "nothing entered".
    #[must_use]
    pub fn is_empty_value(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Number(_) | Self::Bool(_) => false,
        }
    }

    /// Numeric interpretation, if any. Non-numeric text is `None`.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) if !s.is_empty() => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Element or character count of a non-empty value.
    #[must_use]
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::Text(s) if !s.is_empty() => Some(s.chars().count()),
            Self::List(items) if !items.is_empty() => Some(items.len()),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// FieldValidator trait
// ---------------------------------------------------------------------------

/// One validation rule against a field value.
pub trait FieldValidator {
    /// The stable error kind this validator reports under.
    fn kind(&self) -> &'static str;

    /// Check `value`, returning the error entry when the rule is violated.
    fn validate(&self, value: &FieldValue) -> Option<ErrorEntry>;
}

fn plain_de(bundle: TriLangText) -> ErrorPayload {
    ErrorPayload::Plain(bundle.de)
}

fn single(message: &ErrorPayload) -> Option<ErrorEntry> {
    Some(ErrorEntry::Single(message.clone()))
}

// ---------------------------------------------------------------------------
// Required / TrueRequired
// ---------------------------------------------------------------------------

/// Rejects empty values (empty text, empty list, nothing entered).
#[derive(Debug, Clone)]
pub struct Required {
    message: ErrorPayload,
}

impl Required {
    /// German default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: plain_de(messages::required()),
        }
    }

    /// Tri-language default message.
    #[must_use]
    pub fn i18n() -> Self {
        Self {
            message: messages::required().into(),
        }
    }

    /// Replace the default message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<ErrorPayload>) -> Self {
        self.message = message.into();
        self
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldValidator for Required {
    fn kind(&self) -> &'static str {
        KIND_REQUIRED
    }

    fn validate(&self, value: &FieldValue) -> Option<ErrorEntry> {
        if value.is_empty_value() {
            single(&self.message)
        } else {
            None
        }
    }
}

/// Rejects everything except a checked checkbox.
#[derive(Debug, Clone)]
pub struct TrueRequired {
    message: ErrorPayload,
}

impl TrueRequired {
    /// German default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: plain_de(messages::true_required()),
        }
    }

    /// Tri-language default message.
    #[must_use]
    pub fn i18n() -> Self {
        Self {
            message: messages::true_required().into(),
        }
    }

    /// Replace the default message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<ErrorPayload>) -> Self {
        self.message = message.into();
        self
    }
}

impl Default for TrueRequired {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldValidator for TrueRequired {
    fn kind(&self) -> &'static str {
        KIND_TRUE_REQUIRED
    }

    fn validate(&self, value: &FieldValue) -> Option<ErrorEntry> {
        if matches!(value, FieldValue::Bool(true)) {
            None
        } else {
            single(&self.message)
        }
    }
}

// ---------------------------------------------------------------------------
// Length validators
// ---------------------------------------------------------------------------

/// Rejects values shorter than a minimum length. Empty values pass.
#[derive(Debug, Clone)]
pub struct MinLength {
    min: usize,
    message: ErrorPayload,
}

impl MinLength {
    /// German default message.
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self {
            min,
            message: plain_de(messages::min_length(min)),
        }
    }

    /// Tri-language default message.
    #[must_use]
    pub fn i18n(min: usize) -> Self {
        Self {
            min,
            message: messages::min_length(min).into(),
        }
    }

    /// Replace the default message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<ErrorPayload>) -> Self {
        self.message = message.into();
        self
    }
}

impl FieldValidator for MinLength {
    fn kind(&self) -> &'static str {
        KIND_MIN_LENGTH
    }

    fn validate(&self, value: &FieldValue) -> Option<ErrorEntry> {
        match value.length() {
            Some(len) if len < self.min => single(&self.message),
            _ => None,
        }
    }
}

/// Rejects values longer than a maximum length. Empty values pass.
#[derive(Debug, Clone)]
pub struct MaxLength {
    max: usize,
    message: ErrorPayload,
}

impl MaxLength {
    /// German default message.
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self {
            max,
            message: plain_de(messages::max_length(max)),
        }
    }

    /// Tri-language default message.
    #[must_use]
    pub fn i18n(max: usize) -> Self {
        Self {
            max,
            message: messages::max_length(max).into(),
        }
    }

    /// Replace the default message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<ErrorPayload>) -> Self {
        self.message = message.into();
        self
    }
}

impl FieldValidator for MaxLength {
    fn kind(&self) -> &'static str {
        KIND_MAX_LENGTH
    }

    fn validate(&self, value: &FieldValue) -> Option<ErrorEntry> {
        match value.length() {
            Some(len) if len > self.max => single(&self.message),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Numeric comparison validators
// ---------------------------------------------------------------------------

/// Rejects numbers below a minimum. Non-numeric values pass.
#[derive(Debug, Clone)]
pub struct MinValue {
    reference: f64,
    message: ErrorPayload,
}

impl MinValue {
    /// German default message with the raw reference number.
    #[must_use]
    pub fn new(reference: f64) -> Self {
        Self {
            reference,
            message: plain_de(messages::min_value(reference)),
        }
    }

    /// German default message with Swiss thousands grouping.
    #[must_use]
    pub fn formatted(reference: f64) -> Self {
        Self {
            reference,
            message: plain_de(messages::formatted_min_value(reference)),
        }
    }

    /// Tri-language default message.
    #[must_use]
    pub fn i18n(reference: f64) -> Self {
        Self {
            reference,
            message: messages::min_value(reference).into(),
        }
    }

    /// Tri-language message with Swiss thousands grouping.
    #[must_use]
    pub fn formatted_i18n(reference: f64) -> Self {
        Self {
            reference,
            message: messages::formatted_min_value(reference).into(),
        }
    }

    /// Replace the default message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<ErrorPayload>) -> Self {
        self.message = message.into();
        self
    }
}

impl FieldValidator for MinValue {
    fn kind(&self) -> &'static str {
        KIND_MIN_VALUE
    }

    fn validate(&self, value: &FieldValue) -> Option<ErrorEntry> {
        match value.as_number() {
            Some(n) if n < self.reference => single(&self.message),
            _ => None,
        }
    }
}

/// Rejects numbers above a maximum. Non-numeric values pass.
#[derive(Debug, Clone)]
pub struct MaxValue {
    reference: f64,
    message: ErrorPayload,
}

impl MaxValue {
    /// German default message with the raw reference number.
    #[must_use]
    pub fn new(reference: f64) -> Self {
        Self {
            reference,
            message: plain_de(messages::max_value(reference)),
        }
    }

    /// German default message with Swiss thousands grouping.
    #[must_use]
    pub fn formatted(reference: f64) -> Self {
        Self {
            reference,
            message: plain_de(messages::formatted_max_value(reference)),
        }
    }

    /// Tri-language default message.
    #[must_use]
    pub fn i18n(reference: f64) -> Self {
        Self {
            reference,
            message: messages::max_value(reference).into(),
        }
    }

    /// Tri-language message with Swiss thousands grouping.
    #[must_use]
    pub fn formatted_i18n(reference: f64) -> Self {
        Self {
            reference,
            message: messages::formatted_max_value(reference).into(),
        }
    }

    /// Replace the default message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<ErrorPayload>) -> Self {
        self.message = message.into();
        self
    }
}

impl FieldValidator for MaxValue {
    fn kind(&self) -> &'static str {
        KIND_MAX_VALUE
    }

    fn validate(&self, value: &FieldValue) -> Option<ErrorEntry> {
        match value.as_number() {
            Some(n) if n > self.reference => single(&self.message),
            _ => None,
        }
    }
}

/// Rejects numbers at or above a reference (strictly-smaller rule).
#[derive(Debug, Clone)]
pub struct SmallerThan {
    reference: f64,
    message: ErrorPayload,
}

impl SmallerThan {
    /// German default message with the raw reference number.
    #[must_use]
    pub fn new(reference: f64) -> Self {
        Self {
            reference,
            message: plain_de(messages::smaller_than(reference)),
        }
    }

    /// German default message with Swiss thousands grouping.
    #[must_use]
    pub fn formatted(reference: f64) -> Self {
        Self {
            reference,
            message: plain_de(messages::formatted_smaller_than(reference)),
        }
    }

    /// Tri-language default message.
    #[must_use]
    pub fn i18n(reference: f64) -> Self {
        Self {
            reference,
            message: messages::smaller_than(reference).into(),
        }
    }

    /// Tri-language message with Swiss thousands grouping.
    #[must_use]
    pub fn formatted_i18n(reference: f64) -> Self {
        Self {
            reference,
            message: messages::formatted_smaller_than(reference).into(),
        }
    }

    /// Replace the default message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<ErrorPayload>) -> Self {
        self.message = message.into();
        self
    }
}

impl FieldValidator for SmallerThan {
    fn kind(&self) -> &'static str {
        KIND_SMALLER_THAN
    }

    fn validate(&self, value: &FieldValue) -> Option<ErrorEntry> {
        match value.as_number() {
            Some(n) if n >= self.reference => single(&self.message),
            _ => None,
        }
    }
}

/// Rejects numbers at or below a reference (strictly-greater rule).
#[derive(Debug, Clone)]
pub struct GreaterThan {
    reference: f64,
    message: ErrorPayload,
}

impl GreaterThan {
    /// German default message with the raw reference number.
    #[must_use]
    pub fn new(reference: f64) -> Self {
        Self {
            reference,
            message: plain_de(messages::greater_than(reference)),
        }
    }

    /// German default message with Swiss thousands grouping.
    #[must_use]
    pub fn formatted(reference: f64) -> Self {
        Self {
            reference,
            message: plain_de(messages::formatted_greater_than(reference)),
        }
    }

    /// Tri-language default message.
    #[must_use]
    pub fn i18n(reference: f64) -> Self {
        Self {
            reference,
            message: messages::greater_than(reference).into(),
        }
    }

    /// Tri-language message with Swiss thousands grouping.
    #[must_use]
    pub fn formatted_i18n(reference: f64) -> Self {
        Self {
            reference,
            message: messages::formatted_greater_than(reference).into(),
        }
    }

    /// Replace the default message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<ErrorPayload>) -> Self {
        self.message = message.into();
        self
    }
}

impl FieldValidator for GreaterThan {
    fn kind(&self) -> &'static str {
        KIND_GREATER_THAN
    }

    fn validate(&self, value: &FieldValue) -> Option<ErrorEntry> {
        match value.as_number() {
            Some(n) if n <= self.reference => single(&self.message),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Text shape validators
// ---------------------------------------------------------------------------

/// Rejects text containing anything but letters (incl. Latin-1 accents)
/// and spaces.
#[derive(Debug, Clone)]
pub struct LettersOnly {
    message: ErrorPayload,
}

impl LettersOnly {
    /// German default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: plain_de(messages::letters_only()),
        }
    }

    /// Tri-language default message.
    #[must_use]
    pub fn i18n() -> Self {
        Self {
            message: messages::letters_only().into(),
        }
    }

    /// Replace the default message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<ErrorPayload>) -> Self {
        self.message = message.into();
        self
    }
}

impl Default for LettersOnly {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldValidator for LettersOnly {
    fn kind(&self) -> &'static str {
        KIND_LETTERS_ONLY
    }

    fn validate(&self, value: &FieldValue) -> Option<ErrorEntry> {
        match value {
            FieldValue::Text(s) if !LETTERS_RE.is_match(s) => single(&self.message),
            _ => None,
        }
    }
}

/// Rejects text that does not look like an email address. Empty passes.
#[derive(Debug, Clone)]
pub struct Email {
    message: ErrorPayload,
}

impl Email {
    /// German default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: plain_de(messages::invalid_email()),
        }
    }

    /// Tri-language default message.
    #[must_use]
    pub fn i18n() -> Self {
        Self {
            message: messages::invalid_email().into(),
        }
    }

    /// Replace the default message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<ErrorPayload>) -> Self {
        self.message = message.into();
        self
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldValidator for Email {
    fn kind(&self) -> &'static str {
        KIND_INVALID_EMAIL
    }

    fn validate(&self, value: &FieldValue) -> Option<ErrorEntry> {
        match value {
            FieldValue::Text(s) if !s.is_empty() && !EMAIL_RE.is_match(s) => {
                single(&self.message)
            }
            _ => None,
        }
    }
}

/// Rejects text not matching an application-supplied pattern. The message
/// is mandatory: the catalog cannot word an app-specific rule.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    pattern: Regex,
    message: ErrorPayload,
}

impl RegexPattern {
    /// Create a pattern validator with its message.
    #[must_use]
    pub fn new(pattern: Regex, message: impl Into<ErrorPayload>) -> Self {
        Self {
            pattern,
            message: message.into(),
        }
    }
}

impl FieldValidator for RegexPattern {
    fn kind(&self) -> &'static str {
        KIND_REGEX_PATTERN
    }

    fn validate(&self, value: &FieldValue) -> Option<ErrorEntry> {
        match value {
            FieldValue::Text(s) if !s.is_empty() && !self.pattern.is_match(s) => {
                single(&self.message)
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Password rules (multi-message)
// ---------------------------------------------------------------------------

/// Checks a password against length, digit, and capital-letter rules and
/// reports every violated rule at once, in rule order.
#[derive(Debug, Clone)]
pub struct PasswordRules {
    min_length: usize,
    min_digits: usize,
    min_capital_letters: usize,
    localized: bool,
}

impl PasswordRules {
    /// German default messages.
    #[must_use]
    pub fn new(min_length: usize, min_digits: usize, min_capital_letters: usize) -> Self {
        Self {
            min_length,
            min_digits,
            min_capital_letters,
            localized: false,
        }
    }

    /// Tri-language messages.
    #[must_use]
    pub fn i18n(min_length: usize, min_digits: usize, min_capital_letters: usize) -> Self {
        Self {
            min_length,
            min_digits,
            min_capital_letters,
            localized: true,
        }
    }

    fn message(&self, bundle: TriLangText) -> ErrorPayload {
        if self.localized {
            bundle.into()
        } else {
            plain_de(bundle)
        }
    }
}

impl FieldValidator for PasswordRules {
    fn kind(&self) -> &'static str {
        KIND_PASSWORD_ERRORS
    }

    fn validate(&self, value: &FieldValue) -> Option<ErrorEntry> {
        let text = match value {
            FieldValue::Text(s) => s.as_str(),
            FieldValue::Empty => "",
            _ => return None,
        };

        let is_empty = text.is_empty();
        let length = text.chars().count();
        let digits = text.chars().filter(char::is_ascii_digit).count();
        let capitals = text
            .chars()
            .filter(|c| c.is_alphabetic() && c.is_uppercase())
            .count();

        let mut violations = Vec::new();
        if is_empty || length < self.min_length {
            violations.push(self.message(messages::min_length(self.min_length)));
        }
        if is_empty || digits < self.min_digits {
            violations.push(self.message(messages::min_number_of_digits(self.min_digits)));
        }
        if is_empty || capitals < self.min_capital_letters {
            violations.push(self.message(messages::min_number_of_capital_letters(
                self.min_capital_letters,
            )));
        }

        if violations.is_empty() {
            None
        } else {
            Some(ErrorEntry::Many(violations))
        }
    }
}
