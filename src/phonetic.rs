//! Phonetic and character n-gram keys for venue names.
//!
//! A name contributes, per normalized variant:
//!
//! - the Double Metaphone codes of each significant word, split into 4-grams
//!   when longer than four characters
//! - the 4-grams of each significant word's text
//! - the codes of all significant words run together (`newyork`)
//! - the codes of the initials (`central park` → `cp`)
//!
//! Stop words and generic descriptors such as `park` are not significant,
//! unless a name has nothing else.
//!
//! ```
//! use neardupe::phonetic::PhoneticEncoder;
//!
//! let encoder = PhoneticEncoder::new();
//! assert_eq!(encoder.encode("atlantic").as_slice(), ["ATLN", "TLNT", "LNTK"]);
//! assert_eq!(encoder.encode("new").as_slice(), ["N", "NF"]);
//! ```

use std::panic::{self, AssertUnwindSafe};

use log::{trace, warn};
use rphonetic::DoubleMetaphone;

use crate::analysis::token::{Token, TokenType};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::ngram::NgramTokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;
use crate::resources::Resources;
use crate::resources::dictionary::EntryKind;
use crate::variant::{MAX_FIELD_VARIANTS, VariantSet};

/// Longest code kept before windowing; names rarely come close.
const MAX_CODE_LENGTH: usize = 32;

/// Stop filter marking the stop words and descriptors of `languages`.
pub fn name_stop_filter(resources: &Resources, languages: &[String]) -> StopFilter {
    let mut words = resources.words_of_kind(languages, EntryKind::Stopword);
    words.extend(resources.words_of_kind(languages, EntryKind::Descriptor));
    StopFilter::from_words(words)
        .remove_stopped(false)
        .ignore_case(true)
}

/// Builds phonetic and n-gram keys from name variants.
pub struct PhoneticEncoder {
    metaphone: DoubleMetaphone,
    tokenizer: WhitespaceTokenizer,
    grams: NgramTokenizer,
}

impl PhoneticEncoder {
    pub fn new() -> Self {
        PhoneticEncoder {
            metaphone: DoubleMetaphone::new(MAX_CODE_LENGTH),
            tokenizer: WhitespaceTokenizer::new(),
            grams: NgramTokenizer::quadgram(),
        }
    }

    /// Primary and, when different, alternate Double Metaphone code of `word`.
    pub fn codes(&self, word: &str) -> Vec<String> {
        let metaphone = &self.metaphone;
        let result = match panic::catch_unwind(AssertUnwindSafe(|| metaphone.double_metaphone(word))) {
            Ok(result) => result,
            Err(_) => {
                warn!("no phonetic code for {:?}: encoder panicked", word);
                return Vec::new();
            }
        };
        let primary = result.primary().to_string();
        let alternate = result.alternate().to_string();

        let mut codes = Vec::with_capacity(2);
        if !primary.is_empty() {
            codes.push(primary.clone());
        }
        if !alternate.is_empty() && alternate != primary {
            codes.push(alternate);
        }
        codes
    }

    /// The codes of `word`, each cut into 4-character windows.
    pub fn encode(&self, word: &str) -> VariantSet {
        let mut keys = VariantSet::new();
        for code in self.codes(word) {
            keys.extend(self.grams.grams(&code));
        }
        keys
    }

    /// Keys for every variant of a name, in variant order, at most
    /// [`MAX_FIELD_VARIANTS`] of them.
    pub fn name_keys(&self, variants: &VariantSet, stop_filter: &StopFilter) -> Result<VariantSet> {
        let mut keys = VariantSet::with_limit(MAX_FIELD_VARIANTS);
        for variant in variants.iter() {
            if keys.is_full() {
                break;
            }
            self.variant_keys(variant, stop_filter, &mut keys)?;
        }
        trace!("{} name keys from {} variants", keys.len(), variants.len());
        Ok(keys)
    }

    fn variant_keys(&self, text: &str, stop_filter: &StopFilter, keys: &mut VariantSet) -> Result<()> {
        let tokens: Vec<Token> = self
            .tokenizer
            .tokens(text)
            .into_iter()
            .filter(|t| t.token_type != TokenType::Punctuation)
            .collect();
        if tokens.is_empty() {
            return Ok(());
        }
        let tokens: Vec<Token> = stop_filter.filter(Box::new(tokens.into_iter()))?.collect();

        let mut significant: Vec<&Token> = tokens.iter().filter(|t| !t.is_stopped()).collect();
        if significant.is_empty() {
            significant = tokens.iter().collect();
        }

        for token in &significant {
            if token.token_type.is_phonetic() {
                keys.extend(self.encode(&token.text).into_vec());
            }
            keys.extend(self.grams.grams(&token.text));
        }

        if significant.len() >= 2 {
            let joined: String = significant.iter().map(|t| t.text.as_str()).collect();
            keys.extend(self.encode(&joined).into_vec());
        }

        if tokens.len() >= 2 {
            let initials: String = tokens
                .iter()
                .filter(|t| t.token_type == TokenType::Word)
                .filter_map(|t| t.text.chars().next())
                .collect();
            if !initials.is_empty() {
                keys.extend(self.encode(&initials).into_vec());
            }
        }
        Ok(())
    }
}

impl Default for PhoneticEncoder {
    fn default() -> Self {
        Self::new()
    }
}
