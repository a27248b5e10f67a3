//! String normalization into ordered variant sets.
//!
//! Every stage maps each current variant to one or more outputs, keeping the
//! least destructive form first. Stages run in a fixed order:
//!
//! 1. encoding check, punctuation unification, whitespace trimming, NFC/NFKC
//! 2. transliteration of non-Latin scripts (appended after the original)
//! 3. accent folding
//! 4. lowercasing
//! 5. word and numeric hyphens
//! 6. splitting digits from letters (`6th` → `6 th`, `7eleven` → `7-eleven`)
//! 7. acronym and final periods
//! 8. apostrophes and English possessives
//! 9. number words and ordinal suffixes (`six` → `6`, `6th` → `6`)
//! 10. Roman numerals (`iv` → `4`)
//!
//! ```
//! use neardupe::normalizer::Normalizer;
//! use neardupe::options::NormalizeOptions;
//! use neardupe::resources::Resources;
//!
//! let resources = Resources::builtin().unwrap();
//! let normalizer = Normalizer::new().unwrap();
//! let en = vec!["en".to_string()];
//! let variants = normalizer
//!     .normalize(&resources, "Coca-Cola", &NormalizeOptions::default(), &en)
//!     .unwrap();
//! assert_eq!(variants.as_slice(), ["coca cola", "cocacola"]);
//! ```

pub mod numex;

use log::debug;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::fold::LatinFoldCharFilter;
use crate::analysis::char_filter::mapping::{MappingCharFilter, PUNCTUATION_MAPPING};
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::unicode_normalize::{
    AccentStripCharFilter, NormalizationForm, UnicodeNormalizationCharFilter,
};
use crate::analysis::token::{Token, TokenType};
use crate::analysis::token_filter::lowercase::to_lowercase;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::{NearDupeError, Result};
use crate::normalizer::numex::{NumberWords, roman_value, strip_ordinal_suffix};
use crate::options::NormalizeOptions;
use crate::resources::Resources;
use crate::variant::{MAX_FIELD_VARIANTS, VariantSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HyphenMode {
    Space,
    Delete,
    Keep,
}

fn hyphen_modes(replace: bool, delete: bool) -> &'static [HyphenMode] {
    match (replace, delete) {
        (true, true) => &[HyphenMode::Space, HyphenMode::Delete],
        (true, false) => &[HyphenMode::Space],
        (false, true) => &[HyphenMode::Delete],
        (false, false) => &[HyphenMode::Keep],
    }
}

/// Compiled char filters shared by every normalization.
pub struct Normalizer {
    punctuation: MappingCharFilter,
    whitespace: PatternReplaceCharFilter,
    acronym: PatternReplaceCharFilter,
    nfc: UnicodeNormalizationCharFilter,
    nfkc: UnicodeNormalizationCharFilter,
    latin_fold: LatinFoldCharFilter,
    german_fold: LatinFoldCharFilter,
    accents: AccentStripCharFilter,
    tokenizer: WhitespaceTokenizer,
}

impl Normalizer {
    pub fn new() -> Result<Self> {
        Ok(Normalizer {
            punctuation: MappingCharFilter::from_static(PUNCTUATION_MAPPING)?,
            whitespace: PatternReplaceCharFilter::new(r"\s+", " ")?,
            acronym: PatternReplaceCharFilter::new(r"^(?:\p{L}\.){2,}\p{L}?$", "")?,
            nfc: UnicodeNormalizationCharFilter::new(NormalizationForm::NFC),
            nfkc: UnicodeNormalizationCharFilter::new(NormalizationForm::NFKC),
            latin_fold: LatinFoldCharFilter::new()?,
            german_fold: LatinFoldCharFilter::german()?,
            accents: AccentStripCharFilter::new(),
            tokenizer: WhitespaceTokenizer::new(),
        })
    }

    /// Normalize `text` for the working `languages`.
    ///
    /// Blank input gives an empty set.
    ///
    /// # Errors
    ///
    /// [`NearDupeError::InvalidEncoding`] when the text carries NUL or
    /// U+FFFD replacement characters.
    pub fn normalize(
        &self,
        resources: &Resources,
        text: &str,
        options: &NormalizeOptions,
        languages: &[String],
    ) -> Result<VariantSet> {
        validate(text)?;
        if text.trim().is_empty() {
            return Ok(VariantSet::new());
        }

        let mut text = self.punctuation.filter(text);
        if options.trim {
            text = self.whitespace.filter(&text).trim().to_string();
        }
        let text = if options.decompose {
            self.nfkc.filter(&text)
        } else {
            self.nfc.filter(&text)
        };

        let mut variants = VariantSet::with_limit(MAX_FIELD_VARIANTS);
        variants.push(&text);

        if options.transliterate {
            let transliterator = resources.transliterator();
            variants = flat_map(&variants, |v| {
                let mut forms = vec![v.to_string()];
                forms.extend(transliterator.transliterate(v));
                forms
            });
        }

        let german = languages.iter().any(|l| l == "de");
        variants = flat_map(&variants, |v| self.fold_forms(v, options, german));

        if options.lowercase {
            variants = flat_map(&variants, |v| vec![to_lowercase(v)]);
        }

        variants = flat_map(&variants, |v| hyphen_forms(v, options));

        let suffixes = resources.ordinal_suffixes(languages);
        if options.split_alpha_from_numeric {
            variants = flat_map(&variants, |v| self.split_forms(v, options, &suffixes));
        }

        if options.delete_acronym_periods || options.delete_final_periods {
            variants = flat_map(&variants, |v| vec![self.delete_periods(v, options)]);
        }

        let english = languages.iter().any(|l| l == "en");
        variants = flat_map(&variants, |v| self.apostrophe_forms(v, options, english));

        if options.expand_numex {
            let numbers = NumberWords::new(resources, languages);
            variants = flat_map(&variants, |v| {
                let replaced = numbers.replace(v).unwrap_or_else(|| v.to_string());
                let mut forms = vec![replaced];
                if let Some(stripped) = self.strip_ordinals(&forms[0], &suffixes) {
                    forms.push(stripped);
                }
                forms
            });
        }

        if options.roman_numerals {
            variants = flat_map(&variants, |v| {
                let mut forms = vec![v.to_string()];
                forms.extend(self.roman_form(v));
                forms
            });
        }

        debug!("normalized {:?} into {} variants", text, variants.len());
        Ok(variants)
    }

    fn fold_forms(&self, text: &str, options: &NormalizeOptions, german: bool) -> Vec<String> {
        if options.latin_ascii {
            if german {
                vec![self.german_fold.filter(text), self.latin_fold.filter(text)]
            } else {
                vec![self.latin_fold.filter(text)]
            }
        } else if options.strip_accents {
            vec![self.accents.filter(text)]
        } else {
            vec![text.to_string(), self.latin_fold.filter(text)]
        }
    }

    /// Separate digits from letters inside mixed tokens.
    ///
    /// A number followed by an ordinal suffix is split with a space; any
    /// other boundary gets a hyphen, which then follows the numeric hyphen
    /// policy.
    fn split_forms(
        &self,
        text: &str,
        options: &NormalizeOptions,
        suffixes: &[String],
    ) -> Vec<String> {
        let mut changed = false;
        let split = self.map_tokens(text, |token| {
            if token.token_type != TokenType::Alphanumeric {
                return token.text.clone();
            }
            if let Some(digits) = strip_ordinal_suffix(&token.text, suffixes) {
                changed = true;
                return format!("{} {}", digits, &token.text[digits.len()..]);
            }
            match hyphenate_boundaries(&token.text) {
                Some(hyphenated) => {
                    changed = true;
                    hyphenated
                }
                None => token.text.clone(),
            }
        });

        let mut forms = vec![text.to_string()];
        if changed {
            for &mode in hyphen_modes(options.replace_numeric_hyphens, options.delete_numeric_hyphens)
            {
                forms.push(rewrite_hyphens(&split, HyphenMode::Keep, mode));
            }
        }
        forms
    }

    fn delete_periods(&self, text: &str, options: &NormalizeOptions) -> String {
        self.map_tokens(text, |token| {
            if options.delete_acronym_periods && self.acronym.is_match(&token.text) {
                token.text.replace('.', "")
            } else if options.delete_final_periods {
                token.text.trim_end_matches('.').to_string()
            } else {
                token.text.clone()
            }
        })
    }

    fn apostrophe_forms(&self, text: &str, options: &NormalizeOptions, english: bool) -> Vec<String> {
        let finish = |s: &str| {
            if options.delete_apostrophes {
                s.replace('\'', "")
            } else {
                s.to_string()
            }
        };

        let mut forms = vec![finish(text)];
        if options.drop_english_possessives && english {
            let dropped = self.map_tokens(text, |token| drop_possessive(&token.text).to_string());
            if dropped != text {
                forms.push(finish(&dropped));
            }
        }
        forms
    }

    fn strip_ordinals(&self, text: &str, suffixes: &[String]) -> Option<String> {
        let mut changed = false;
        let stripped = self.map_tokens(text, |token| {
            match strip_ordinal_suffix(&token.text, suffixes) {
                Some(digits) => {
                    changed = true;
                    digits.to_string()
                }
                None => token.text.clone(),
            }
        });
        changed.then_some(stripped)
    }

    fn roman_form(&self, text: &str) -> Option<String> {
        let mut changed = false;
        let arabic = self.map_tokens(text, |token| match roman_value(&token.text) {
            Some(value) => {
                changed = true;
                value.to_string()
            }
            None => token.text.clone(),
        });
        changed.then_some(arabic)
    }

    /// Rewrite each whitespace-delimited token, keeping the whitespace between them.
    fn map_tokens<F>(&self, text: &str, mut f: F) -> String
    where
        F: FnMut(&Token) -> String,
    {
        let mut output = String::with_capacity(text.len());
        let mut last = 0;
        for token in self.tokenizer.tokens(text) {
            output.push_str(&text[last..token.start_offset]);
            output.push_str(&f(&token));
            last = token.end_offset;
        }
        output.push_str(&text[last..]);
        output
    }
}

fn validate(text: &str) -> Result<()> {
    if text.contains('\0') {
        return Err(NearDupeError::invalid_encoding("embedded NUL character"));
    }
    if text.contains('\u{FFFD}') {
        return Err(NearDupeError::invalid_encoding(
            "replacement character in input",
        ));
    }
    Ok(())
}

/// Apply `f` to every variant, collecting the outputs in order.
fn flat_map<F>(variants: &VariantSet, mut f: F) -> VariantSet
where
    F: FnMut(&str) -> Vec<String>,
{
    let mut output = VariantSet::with_limit(MAX_FIELD_VARIANTS);
    for variant in variants.iter() {
        output.extend(f(variant));
    }
    output
}

fn hyphen_forms(text: &str, options: &NormalizeOptions) -> Vec<String> {
    if !text.contains('-') {
        return vec![text.to_string()];
    }
    let mut forms = Vec::new();
    for &word in hyphen_modes(options.replace_word_hyphens, options.delete_word_hyphens) {
        for &numeric in
            hyphen_modes(options.replace_numeric_hyphens, options.delete_numeric_hyphens)
        {
            forms.push(rewrite_hyphens(text, word, numeric));
        }
    }
    forms
}

/// A hyphen touching a digit is numeric; one between two letters is a word hyphen.
fn rewrite_hyphens(text: &str, word: HyphenMode, numeric: HyphenMode) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut output = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '-' {
            output.push(c);
            continue;
        }
        let prev = i.checked_sub(1).map(|j| chars[j]);
        let next = chars.get(i + 1).copied();
        let mode = if prev.is_some_and(char::is_numeric) || next.is_some_and(char::is_numeric) {
            numeric
        } else if prev.is_some_and(char::is_alphabetic) && next.is_some_and(char::is_alphabetic) {
            word
        } else {
            HyphenMode::Keep
        };
        match mode {
            HyphenMode::Space => output.push(' '),
            HyphenMode::Delete => {}
            HyphenMode::Keep => output.push('-'),
        }
    }
    output
}

/// `7eleven` → `7-eleven`, `b12` → `b-12`; `None` when there is no bare boundary.
fn hyphenate_boundaries(token: &str) -> Option<String> {
    let mut output = String::with_capacity(token.len() + 2);
    let mut prev: Option<char> = None;
    let mut changed = false;
    for c in token.chars() {
        if let Some(p) = prev {
            let boundary = (p.is_ascii_digit() && c.is_alphabetic())
                || (p.is_alphabetic() && c.is_ascii_digit());
            if boundary {
                output.push('-');
                changed = true;
            }
        }
        output.push(c);
        prev = Some(c);
    }
    changed.then_some(output)
}

fn drop_possessive(token: &str) -> &str {
    let lower = token.to_lowercase();
    if token.chars().count() > 2 && lower.ends_with("'s") {
        &token[..token.len() - 2]
    } else if token.chars().count() > 2 && lower.ends_with("s'") {
        &token[..token.len() - 1]
    } else {
        token
    }
}
