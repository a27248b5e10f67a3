use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::CharFilter;
use crate::language::script::Script;

/// Supported Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationForm {
    NFC,
    NFD,
    NFKC,
    NFKD,
}

/// A char filter that performs Unicode normalization.
pub struct UnicodeNormalizationCharFilter {
    form: NormalizationForm,
}

impl UnicodeNormalizationCharFilter {
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }
}

impl CharFilter for UnicodeNormalizationCharFilter {
    fn filter(&self, input: &str) -> String {
        match self.form {
            NormalizationForm::NFC => input.nfc().collect(),
            NormalizationForm::NFD => input.nfd().collect(),
            NormalizationForm::NFKC => input.nfkc().collect(),
            NormalizationForm::NFKD => input.nfkd().collect(),
        }
    }

    fn name(&self) -> &'static str {
        "unicode_normalization"
    }
}

/// A char filter that removes combining marks and recomposes what is left.
///
/// Only diacritics sitting on a Latin letter are removed, so Cyrillic `й`
/// and the vowel signs of Devanagari or Thai are left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccentStripCharFilter;

impl AccentStripCharFilter {
    pub fn new() -> Self {
        AccentStripCharFilter
    }
}

impl CharFilter for AccentStripCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut base = Script::Common;
        let mut output = String::with_capacity(input.len());
        for c in input.nfd() {
            if is_combining_mark(c) {
                if base == Script::Latin && ('\u{0300}'..='\u{036F}').contains(&c) {
                    continue;
                }
            } else {
                base = Script::of(c);
            }
            output.push(c);
        }
        output.nfc().collect()
    }

    fn name(&self) -> &'static str {
        "accent_strip"
    }
}
