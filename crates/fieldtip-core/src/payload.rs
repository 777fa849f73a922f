#![forbid(unsafe_code)]

//! Displayable error payloads and the payload normalizer.
//!
//! A field's raw validation errors arrive as an insertion-ordered set of
//! `(kind, message-or-messages)` entries. The normalizer flattens that set
//! into the ordered list of payloads the overlay renders, honoring the
//! "first error only" policy. A payload is either a plain string or a
//! tri-language bundle; resolution to a display string takes the current
//! language as an explicit argument — there is no ambient language state.

use smallvec::SmallVec;

/// A language code of the closed tri-language set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    /// German.
    #[default]
    De,
    /// French.
    Fr,
    /// English.
    En,
}

/// A message carried in all three supported languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriLangText {
    pub de: String,
    pub fr: String,
    pub en: String,
}

impl TriLangText {
    /// Create a bundle from the three translations.
    #[must_use]
    pub fn new(de: impl Into<String>, fr: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            de: de.into(),
            fr: fr.into(),
            en: en.into(),
        }
    }

    /// The translation for `lang`, or `None` when that slot is empty.
    ///
    /// Empty slots are filtered out rather than rendered as blank lines.
    #[must_use]
    pub fn get(&self, lang: Lang) -> Option<&str> {
        let text = match lang {
            Lang::De => &self.de,
            Lang::Fr => &self.fr,
            Lang::En => &self.en,
        };
        if text.is_empty() { None } else { Some(text) }
    }
}

/// One displayable error: a plain string or a localized bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorPayload {
    /// A ready-to-display message.
    Plain(String),
    /// A per-language bundle resolved at render time.
    Localized(TriLangText),
}

impl ErrorPayload {
    /// Resolve to a display string for `lang`.
    ///
    /// Plain payloads ignore the language. Localized payloads missing the
    /// requested language resolve to `None` and are skipped by renderers.
    #[must_use]
    pub fn resolve(&self, lang: Lang) -> Option<&str> {
        match self {
            Self::Plain(text) => {
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
            Self::Localized(bundle) => bundle.get(lang),
        }
    }
}

impl From<&str> for ErrorPayload {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<String> for ErrorPayload {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<TriLangText> for ErrorPayload {
    fn from(bundle: TriLangText) -> Self {
        Self::Localized(bundle)
    }
}

/// The value side of one raw error entry: most validators report a single
/// message, but some (password rules) report several at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorEntry {
    /// One message.
    Single(ErrorPayload),
    /// Several messages from one validator, in rule order.
    Many(Vec<ErrorPayload>),
}

impl From<ErrorPayload> for ErrorEntry {
    fn from(payload: ErrorPayload) -> Self {
        Self::Single(payload)
    }
}

/// A field's raw validation-error set: error kind → message(s).
///
/// Iteration order is insertion order — the order validators were
/// evaluated. Inserting an existing kind replaces its entry in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    entries: Vec<(&'static str, ErrorEntry)>,
}

impl FieldErrors {
    /// Create an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `kind`, preserving its position if
    /// the kind already exists.
    pub fn insert(&mut self, kind: &'static str, entry: impl Into<ErrorEntry>) {
        let entry = entry.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == kind) {
            slot.1 = entry;
        } else {
            self.entries.push((kind, entry));
        }
    }

    /// Look up the entry for `kind`.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&ErrorEntry> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, e)| e)
    }

    /// Whether the set contains no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of error kinds present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ErrorEntry)> {
        self.entries.iter().map(|(k, e)| (*k, e))
    }
}

/// Normalized payload list; almost always one or two entries.
pub type Payloads = SmallVec<[ErrorPayload; 2]>;

/// Collapse a raw error set into the ordered list of displayable payloads.
///
/// Flattens multi-message entries, preserves the set's insertion order, and
/// applies the first-error-only policy. The input is never mutated; the
/// result is a fresh sequence.
#[must_use]
pub fn normalize(errors: &FieldErrors, show_first_error_only: bool) -> Payloads {
    let mut payloads = Payloads::new();
    for (_, entry) in errors.iter() {
        match entry {
            ErrorEntry::Single(p) => payloads.push(p.clone()),
            ErrorEntry::Many(ps) => payloads.extend(ps.iter().cloned()),
        }
        if show_first_error_only && !payloads.is_empty() {
            payloads.truncate(1);
            break;
        }
    }
    payloads
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> ErrorPayload {
        ErrorPayload::Plain(s.to_string())
    }

    // ── Resolution ────────────────────────────────────────────────────

    #[test]
    fn plain_payload_resolves_for_any_language() {
        let p = plain("Eingabe erforderlich");
        assert_eq!(p.resolve(Lang::De), Some("Eingabe erforderlich"));
        assert_eq!(p.resolve(Lang::En), Some("Eingabe erforderlich"));
    }

    #[test]
    fn localized_payload_resolves_per_language() {
        let p = ErrorPayload::Localized(TriLangText::new(
            "Eingabe erforderlich",
            "Saisie requise",
            "Input required",
        ));
        assert_eq!(p.resolve(Lang::Fr), Some("Saisie requise"));
        assert_eq!(p.resolve(Lang::En), Some("Input required"));
    }

    #[test]
    fn missing_language_is_filtered_out() {
        let p = ErrorPayload::Localized(TriLangText::new("Pflichtfeld", "", "Required"));
        assert_eq!(p.resolve(Lang::Fr), None);
        assert_eq!(p.resolve(Lang::De), Some("Pflichtfeld"));
    }

    #[test]
    fn empty_plain_payload_resolves_to_none() {
        assert_eq!(plain("").resolve(Lang::De), None);
    }

    // ── FieldErrors ───────────────────────────────────────────────────

    #[test]
    fn insertion_order_is_preserved() {
        let mut errors = FieldErrors::new();
        errors.insert("required", plain("E1"));
        errors.insert("minLength", plain("E2"));
        errors.insert("pattern", plain("E3"));

        let kinds: Vec<_> = errors.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, ["required", "minLength", "pattern"]);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut errors = FieldErrors::new();
        errors.insert("required", plain("old"));
        errors.insert("minLength", plain("E2"));
        errors.insert("required", plain("new"));

        let kinds: Vec<_> = errors.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, ["required", "minLength"]);
        assert_eq!(
            errors.get("required"),
            Some(&ErrorEntry::Single(plain("new")))
        );
    }

    // ── Normalizer ────────────────────────────────────────────────────

    #[test]
    fn normalize_preserves_order() {
        let mut errors = FieldErrors::new();
        errors.insert("a", plain("E1"));
        errors.insert("b", plain("E2"));

        let out = normalize(&errors, false);
        assert_eq!(out.as_slice(), [plain("E1"), plain("E2")]);
    }

    #[test]
    fn normalize_first_error_only() {
        let mut errors = FieldErrors::new();
        errors.insert("a", plain("E1"));
        errors.insert("b", plain("E2"));

        let out = normalize(&errors, true);
        assert_eq!(out.as_slice(), [plain("E1")]);
    }

    #[test]
    fn normalize_flattens_multi_message_entries() {
        let mut errors = FieldErrors::new();
        errors.insert(
            "passwordErrors",
            ErrorEntry::Many(vec![plain("too short"), plain("needs digits")]),
        );
        errors.insert("required", plain("E3"));

        let out = normalize(&errors, false);
        assert_eq!(
            out.as_slice(),
            [plain("too short"), plain("needs digits"), plain("E3")]
        );
    }

    #[test]
    fn normalize_first_error_only_takes_first_of_flattened() {
        let mut errors = FieldErrors::new();
        errors.insert(
            "passwordErrors",
            ErrorEntry::Many(vec![plain("too short"), plain("needs digits")]),
        );

        let out = normalize(&errors, true);
        assert_eq!(out.as_slice(), [plain("too short")]);
    }

    #[test]
    fn normalize_empty_set_is_empty() {
        assert!(normalize(&FieldErrors::new(), false).is_empty());
        assert!(normalize(&FieldErrors::new(), true).is_empty());
    }

    #[test]
    fn normalize_does_not_mutate_input() {
        let mut errors = FieldErrors::new();
        errors.insert("a", plain("E1"));
        errors.insert("b", plain("E2"));
        let before = errors.clone();

        let _ = normalize(&errors, true);
        assert_eq!(errors, before);
    }
}
