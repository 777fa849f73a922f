#![forbid(unsafe_code)]

//! Fields and forms: attaching validators to values.
//!
//! A [`Field`] runs its validators in registration order and collects the
//! violations into a [`FieldErrors`] set, which is exactly what the
//! tooltip controller's normalizer consumes. A [`Form`] groups named
//! fields and answers the submit-time question "does anything have
//! errors".

use fieldtip_core::FieldErrors;

use crate::validators::{FieldValidator, FieldValue};

/// A named form control with its value and validation rules.
pub struct Field {
    name: String,
    value: FieldValue,
    validators: Vec<Box<dyn FieldValidator>>,
}

impl Field {
    /// Create a field with no validators and no value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Empty,
            validators: Vec::new(),
        }
    }

    /// Append a validation rule. Rules run in registration order.
    #[must_use]
    pub fn validator(mut self, validator: impl FieldValidator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Set the initial value.
    #[must_use]
    pub fn value(mut self, value: FieldValue) -> Self {
        self.value = value;
        self
    }

    /// The field's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current value.
    #[must_use]
    pub fn current_value(&self) -> &FieldValue {
        &self.value
    }

    /// Replace the current value.
    pub fn set_value(&mut self, value: FieldValue) {
        self.value = value;
    }

    /// Run every validator against the current value.
    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for validator in &self.validators {
            if let Some(entry) = validator.validate(&self.value) {
                errors.insert(validator.kind(), entry);
            }
        }
        errors
    }

    /// Whether the current value passes every rule.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validators
            .iter()
            .all(|v| v.validate(&self.value).is_none())
    }
}

/// A group of named fields validated together on submit.
#[derive(Default)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Mutable lookup, for updating values as the user types.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Iterate fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Validate every field, in form order.
    #[must_use]
    pub fn validate(&self) -> Vec<(&str, FieldErrors)> {
        self.fields
            .iter()
            .map(|f| (f.name(), f.errors()))
            .collect()
    }

    /// Whether any field currently has errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| !f.is_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{Email, MinLength, PasswordRules, Required};
    use fieldtip_core::{Lang, normalize};

    fn email_field() -> Field {
        Field::new("email")
            .validator(Required::i18n())
            .validator(Email::i18n())
    }

    #[test]
    fn validators_run_in_registration_order() {
        let field = Field::new("name")
            .validator(Required::new())
            .validator(MinLength::new(3))
            .value(FieldValue::text("ab"));

        let errors = field.errors();
        let kinds: Vec<_> = errors.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, ["minLength"]); // required passes, order preserved
    }

    #[test]
    fn empty_required_field_reports_required_only() {
        let field = email_field();
        let errors = field.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors.get("required").is_some());
        assert!(!field.is_valid());
    }

    #[test]
    fn valid_field_has_no_errors() {
        let mut field = email_field();
        field.set_value(FieldValue::text("jean@example.ch"));
        assert!(field.is_valid());
        assert!(field.errors().is_empty());
    }

    #[test]
    fn field_errors_feed_the_normalizer() {
        let field = Field::new("password")
            .validator(PasswordRules::i18n(8, 2, 1))
            .value(FieldValue::text("abc"));

        let payloads = normalize(&field.errors(), false);
        assert_eq!(payloads.len(), 3);
        assert_eq!(payloads[0].resolve(Lang::En), Some("Min. length: 8 characters"));

        let first_only = normalize(&field.errors(), true);
        assert_eq!(first_only.len(), 1);
    }

    #[test]
    fn form_reports_errors_across_fields() {
        let mut form = Form::new()
            .field(email_field())
            .field(Field::new("name").validator(Required::new()));

        assert!(form.has_errors());

        form.get_mut("email")
            .unwrap()
            .set_value(FieldValue::text("a@b.ch"));
        form.get_mut("name")
            .unwrap()
            .set_value(FieldValue::text("Jean"));
        assert!(!form.has_errors());
    }

    #[test]
    fn form_validate_keeps_field_order() {
        let form = Form::new()
            .field(Field::new("first").validator(Required::new()))
            .field(Field::new("second").validator(Required::new()));

        let results = form.validate();
        assert_eq!(results[0].0, "first");
        assert_eq!(results[1].0, "second");
        assert!(!results[0].1.is_empty());
    }
}
