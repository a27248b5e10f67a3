//! Stop filter implementation.
//!
//! Place names are short, so the near-dupe pipeline rarely removes stop
//! words outright. Instead it marks them as stopped, which lets the name
//! hasher skip them when computing phonetic codes while still falling back
//! to them when a name consists of nothing else.
//!
//! # Examples
//!
//! ```
//! use neardupe::analysis::token_filter::Filter;
//! use neardupe::analysis::token_filter::stop::StopFilter;
//! use neardupe::analysis::token::Token;
//!
//! let filter = StopFilter::new().remove_stopped(false);
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("old", 1),
//!     Token::new("mill", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 3);
//! assert!(result[0].is_stopped());
//! assert!(!result[2].is_stopped());
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lowercase::to_lowercase;
use crate::error::Result;

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "at", "by", "for", "in", "of", "on", "or", "the", "to", "with",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes or marks stop words in the token stream.
///
/// ## Custom Stop Words
///
/// ```
/// use neardupe::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["de", "la", "le"]);
/// assert_eq!(filter.len(), 3);
/// assert!(filter.is_stop_word("la"));
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words
    stop_words: Arc<HashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
    /// Compare lowercased token text against the (lowercase) stop words
    ignore_case: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            remove_stopped: true,
            ignore_case: false,
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Match tokens regardless of case, for text that was not lowercased upstream.
    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        if self.ignore_case {
            self.stop_words.contains(&to_lowercase(word))
        } else {
            self.stop_words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None
                    } else {
                        Some(token.stop())
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_filter_removes() {
        let filter = StopFilter::from_words(vec!["rue", "de", "la"]);
        let tokens = vec![
            Token::new("rue", 0),
            Token::new("de", 1),
            Token::new("la", 2),
            Token::new("paix", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "paix");
        assert_eq!(result[0].position, 3);
    }

    #[test]
    fn test_stop_filter_marks() {
        let filter = StopFilter::new().remove_stopped(false);
        let tokens = vec![Token::new("the", 0), Token::new("atlantic", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert!(result[0].is_stopped());
        assert!(!result[1].is_stopped());
    }

    #[test]
    fn test_ignore_case() {
        let filter = StopFilter::from_words(vec!["park"]).ignore_case(true);
        assert!(filter.is_stop_word("Park"));
        assert!(!StopFilter::from_words(vec!["park"]).is_stop_word("Park"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
