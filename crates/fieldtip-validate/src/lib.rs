#![forbid(unsafe_code)]

//! Form-control validation for fieldtip: built-in validators, the
//! DE/FR/EN message catalog, and the field/form glue that turns values
//! plus rules into the error sets the tooltip engine displays.
//!
//! Validators report under stable, mutually unique error kinds; a field's
//! error set therefore maps one validator to at most one entry, and the
//! password validator's multiple messages stay grouped under its single
//! `passwordErrors` kind.

pub mod field;
pub mod messages;
pub mod validators;

pub use field::{Field, Form};
pub use validators::{
    Email, FieldValidator, FieldValue, GreaterThan, LettersOnly, MaxLength, MaxValue, MinLength,
    MinValue, PasswordRules, RegexPattern, Required, SmallerThan, TrueRequired,
};
