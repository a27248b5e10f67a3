//! N-gram tokenizer implementation.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{NearDupeError, Result};

/// A tokenizer that generates grapheme n-grams.
///
/// Windows are taken over extended grapheme clusters so a base letter and
/// its combining marks never get split across two grams.
///
/// With [`NgramTokenizer::whole_if_shorter`] enabled, text that is not
/// longer than `max_gram` comes back as a single token instead of nothing,
/// which is how short words still produce a key.
///
/// # Examples
///
/// ```
/// use neardupe::analysis::tokenizer::ngram::NgramTokenizer;
/// use neardupe::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = NgramTokenizer::quadgram();
/// let grams: Vec<_> = tokenizer.tokenize("atlantic").unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(grams, vec!["atla", "tlan", "lant", "anti", "ntic"]);
///
/// let grams: Vec<_> = tokenizer.tokenize("new").unwrap().map(|t| t.text).collect();
/// assert_eq!(grams, vec!["new"]);
/// ```
#[derive(Clone, Debug)]
pub struct NgramTokenizer {
    /// Minimum n-gram size
    min_gram: usize,
    /// Maximum n-gram size
    max_gram: usize,
    /// Emit the whole text when it has no more than `max_gram` graphemes
    whole_if_shorter: bool,
}

impl NgramTokenizer {
    /// Create a new n-gram tokenizer.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_gram` is 0 or `max_gram` is less than `min_gram`.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        if min_gram == 0 {
            return Err(NearDupeError::analysis("min_gram must be at least 1"));
        }
        if max_gram < min_gram {
            return Err(NearDupeError::analysis(format!(
                "max_gram ({}) must be >= min_gram ({})",
                max_gram, min_gram
            )));
        }
        Ok(Self {
            min_gram,
            max_gram,
            whole_if_shorter: false,
        })
    }

    /// Fixed 4-grams, falling back to the whole text for short input.
    pub fn quadgram() -> Self {
        Self {
            min_gram: 4,
            max_gram: 4,
            whole_if_shorter: true,
        }
    }

    pub fn whole_if_shorter(mut self, enabled: bool) -> Self {
        self.whole_if_shorter = enabled;
        self
    }

    /// The grams of `text` as plain strings.
    pub fn grams(&self, text: &str) -> Vec<String> {
        self.tokens(text).into_iter().map(|t| t.text).collect()
    }

    fn tokens(&self, text: &str) -> Vec<Token> {
        let graphemes: Vec<(usize, &str)> = text.grapheme_indices(true).collect();
        if graphemes.is_empty() {
            return Vec::new();
        }
        if self.whole_if_shorter && graphemes.len() <= self.max_gram {
            return vec![Token::with_offsets(text, 0, 0, text.len())];
        }

        let mut tokens = Vec::new();
        for start in 0..graphemes.len() {
            for gram_size in self.min_gram..=self.max_gram {
                let end = start + gram_size;
                if end > graphemes.len() {
                    break;
                }

                let start_offset = graphemes[start].0;
                let end_offset = graphemes
                    .get(end)
                    .map(|(offset, _)| *offset)
                    .unwrap_or(text.len());

                tokens.push(Token::with_offsets(
                    &text[start_offset..end_offset],
                    tokens.len(),
                    start_offset,
                    end_offset,
                ));
            }
        }
        tokens
    }
}

impl Tokenizer for NgramTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.tokens(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}
