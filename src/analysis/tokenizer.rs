//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split a normalized string into [`Token`]s. Two strategies are
//! used by the pipeline:
//!
//! - [`whitespace::WhitespaceTokenizer`] - splits a normalized value into words,
//!   keeping inner punctuation such as apostrophes and hyphens attached
//! - [`ngram::NgramTokenizer`] - fixed-width grapheme windows used for
//!   partial-token matching keys
//!
//! # Examples
//!
//! ```
//! use neardupe::analysis::tokenizer::Tokenizer;
//! use neardupe::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("rue de la paix").unwrap().collect();
//! assert_eq!(tokens.len(), 4);
//! ```
//!
//! [`Token`]: crate::analysis::token::Token

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so tokenizers can live inside the shared
/// resource bundle.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod ngram;
pub mod whitespace;
