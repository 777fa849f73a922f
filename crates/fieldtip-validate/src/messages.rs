#![forbid(unsafe_code)]

//! The central error message catalog (DE/FR/EN).
//!
//! Every built-in validator pulls its default texts from here, so each
//! error kind is worded identically wherever it appears. Numeric hints use
//! Swiss thousands grouping regardless of UI language.

use fieldtip_core::TriLangText;

/// Format a number without decimal places, Swiss style (`1'234'567`).
#[must_use]
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let mut digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    while digits.len() > 3 {
        let rest = digits.split_off(digits.len() - 3);
        grouped = if grouped.is_empty() {
            rest
        } else {
            format!("{rest}'{grouped}")
        };
    }
    grouped = if grouped.is_empty() {
        digits
    } else {
        format!("{digits}'{grouped}")
    };

    if negative && grouped != "0" {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Render a number the way a template interpolation would: integers
/// without a decimal point, everything else as-is.
#[must_use]
pub fn display_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{value}")
    }
}

#[must_use]
pub fn required() -> TriLangText {
    TriLangText::new("Eingabe erforderlich", "Saisie requise", "Input required")
}

#[must_use]
pub fn true_required() -> TriLangText {
    TriLangText::new("Bitte bestätigen.", "Veuillez confirmer.", "Please confirm.")
}

#[must_use]
pub fn min_length(min: usize) -> TriLangText {
    let n = format_number(min as f64);
    TriLangText::new(
        format!("Min. Länge: {n} Zeichen"),
        format!("Longueur min. : {n} caractères"),
        format!("Min. length: {n} characters"),
    )
}

#[must_use]
pub fn max_length(max: usize) -> TriLangText {
    let n = format_number(max as f64);
    TriLangText::new(
        format!("Max. Länge: {n} Zeichen"),
        format!("Longueur max. : {n} caractères"),
        format!("Max. length: {n} characters"),
    )
}

#[must_use]
pub fn min_value(min: f64) -> TriLangText {
    let n = display_number(min);
    TriLangText::new(
        format!("Muss mindestens {n} betragen"),
        format!("Doit être au moins {n}"),
        format!("Must be at least {n}"),
    )
}

#[must_use]
pub fn formatted_min_value(min: f64) -> TriLangText {
    let n = format_number(min);
    TriLangText::new(
        format!("Muss mindestens {n} betragen"),
        format!("Doit être au moins {n}"),
        format!("Must be at least {n}"),
    )
}

#[must_use]
pub fn max_value(max: f64) -> TriLangText {
    let n = display_number(max);
    TriLangText::new(
        format!("Darf maximal {n} betragen"),
        format!("Ne doit pas dépasser {n}"),
        format!("Must not exceed {n}"),
    )
}

#[must_use]
pub fn formatted_max_value(max: f64) -> TriLangText {
    let n = format_number(max);
    TriLangText::new(
        format!("Darf maximal {n} betragen"),
        format!("Ne doit pas dépasser {n}"),
        format!("Must not exceed {n}"),
    )
}

#[must_use]
pub fn smaller_than(reference: f64) -> TriLangText {
    let n = display_number(reference);
    TriLangText::new(
        format!("Muss kleiner sein als {n}"),
        format!("Doit être inférieur à {n}"),
        format!("Must be less than {n}"),
    )
}

#[must_use]
pub fn formatted_smaller_than(reference: f64) -> TriLangText {
    let n = format_number(reference);
    TriLangText::new(
        format!("Muss kleiner sein als {n}"),
        format!("Doit être inférieur à {n}"),
        format!("Must be less than {n}"),
    )
}

#[must_use]
pub fn greater_than(reference: f64) -> TriLangText {
    let n = display_number(reference);
    TriLangText::new(
        format!("Muss grösser sein als {n}"),
        format!("Doit être supérieur à {n}"),
        format!("Must be greater than {n}"),
    )
}

#[must_use]
pub fn formatted_greater_than(reference: f64) -> TriLangText {
    let n = format_number(reference);
    TriLangText::new(
        format!("Muss grösser sein als {n}"),
        format!("Doit être supérieur à {n}"),
        format!("Must be greater than {n}"),
    )
}

#[must_use]
pub fn letters_only() -> TriLangText {
    TriLangText::new(
        "Nur Buchstaben sind erlaubt",
        "Seules les lettres sont autorisées",
        "Only letters are allowed",
    )
}

#[must_use]
pub fn min_number_of_digits(min: usize) -> TriLangText {
    let n = format_number(min as f64);
    TriLangText::new(
        format!("Muss mindestens {n} Nummern enthalten"),
        format!("Doit contenir au moins {n} chiffres"),
        format!("Must contain at least {n} digits"),
    )
}

#[must_use]
pub fn min_number_of_capital_letters(min: usize) -> TriLangText {
    let n = format_number(min as f64);
    TriLangText::new(
        format!("Muss mindestens {n} Grossbuchstaben enthalten"),
        format!("Doit contenir au moins {n} majuscules"),
        format!("Must contain at least {n} capital letters"),
    )
}

#[must_use]
pub fn invalid_email() -> TriLangText {
    TriLangText::new(
        "Ungültige E-Mail-Adresse",
        "Adresse e-mail invalide",
        "Invalid email address",
    )
}
