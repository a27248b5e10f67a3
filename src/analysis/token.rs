//! Token types for the analysis pipeline.
//!
//! A [`Token`] is one whitespace-delimited unit of a normalized string,
//! classified by [`TokenType`] so later stages can treat numbers, words and
//! ideographs differently (phonetic codes are only computed for words).
//!
//! ```
//! use neardupe::analysis::token::{Token, TokenType};
//!
//! let token = Token::new("main", 0);
//! assert_eq!(token.text, "main");
//! assert_eq!(token.token_type, TokenType::Word);
//! assert_eq!(Token::new("42", 1).token_type, TokenType::Numeric);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::language::script::Script;

/// A single token of analyzed text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the analyzed text
    pub start_offset: usize,

    /// The byte offset where this token ends in the analyzed text
    pub end_offset: usize,

    /// Content classification, derived from the text
    pub token_type: TokenType,

    /// Whether this token has been marked as stopped by a filter
    pub stopped: bool,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Letters only (any alphabetic script), possibly with inner apostrophes or hyphens
    Word,
    /// Digits only
    Numeric,
    /// Digits and letters mixed (`6th`, `7-eleven`, `12a`)
    Alphanumeric,
    /// Han ideographs
    Ideographic,
    /// Hiragana or katakana
    Kana,
    /// Hangul syllables or jamo
    Hangul,
    /// Punctuation only
    Punctuation,
    Other,
}

impl TokenType {
    /// Classify a whitespace-free piece of text.
    pub fn classify(text: &str) -> TokenType {
        if text.is_empty() {
            return TokenType::Other;
        }

        let mut digits = 0;
        let mut letters = 0;
        let mut ideographs = 0;
        let mut kana = 0;
        let mut hangul = 0;
        for c in text.chars() {
            match Script::of(c) {
                Script::Han => ideographs += 1,
                Script::Hiragana | Script::Katakana => kana += 1,
                Script::Hangul => hangul += 1,
                _ if c.is_numeric() => digits += 1,
                _ if c.is_alphabetic() => letters += 1,
                _ => {}
            }
        }

        if ideographs > 0 {
            TokenType::Ideographic
        } else if kana > 0 {
            TokenType::Kana
        } else if hangul > 0 {
            TokenType::Hangul
        } else if digits > 0 && letters > 0 {
            TokenType::Alphanumeric
        } else if digits > 0 {
            TokenType::Numeric
        } else if letters > 0 {
            TokenType::Word
        } else if text.chars().all(|c| c.is_ascii_punctuation() || !c.is_alphanumeric()) {
            TokenType::Punctuation
        } else {
            TokenType::Other
        }
    }

    /// Whether phonetic codes are meaningful for this type.
    pub fn is_phonetic(self) -> bool {
        matches!(self, TokenType::Word | TokenType::Alphanumeric)
    }
}

impl Token {
    /// Create a new token, classifying its text.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        Token {
            token_type: TokenType::classify(&text),
            end_offset: text.len(),
            text,
            position,
            start_offset: 0,
            stopped: false,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        let mut token = Token::new(text, position);
        token.start_offset = start_offset;
        token.end_offset = end_offset;
        token
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Clone this token with updated text, reclassifying it.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token.token_type = TokenType::classify(&token.text);
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 5);
        assert!(!token.stopped);
    }

    #[test]
    fn test_classification() {
        assert_eq!(TokenType::classify("avenue"), TokenType::Word);
        assert_eq!(TokenType::classify("mcdonald's"), TokenType::Word);
        assert_eq!(TokenType::classify("café"), TokenType::Word);
        assert_eq!(TokenType::classify("тверская"), TokenType::Word);
        assert_eq!(TokenType::classify("350"), TokenType::Numeric);
        assert_eq!(TokenType::classify("6th"), TokenType::Alphanumeric);
        assert_eq!(TokenType::classify("7-eleven"), TokenType::Alphanumeric);
        assert_eq!(TokenType::classify("東京"), TokenType::Ideographic);
        assert_eq!(TokenType::classify("しぶや"), TokenType::Kana);
        assert_eq!(TokenType::classify("서울"), TokenType::Hangul);
        assert_eq!(TokenType::classify("#"), TokenType::Punctuation);
        assert_eq!(TokenType::classify(""), TokenType::Other);
    }

    #[test]
    fn test_with_text_reclassifies() {
        let token = Token::new("6th", 3).with_text("6");
        assert_eq!(token.token_type, TokenType::Numeric);
        assert_eq!(token.position, 3);
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("hello", 0), Token::new("world", 1)];

        let collected: Vec<_> = tokens.into_token_stream().collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text, "hello");
        assert_eq!(collected[1].text, "world");
    }
}
