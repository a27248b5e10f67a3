//! Text analysis building blocks.
//!
//! The normalizer and the name hasher are assembled from the same small
//! pieces: char filters rewrite whole strings, tokenizers split them, and
//! token filters rewrite or mark the resulting tokens.
//!
//! ```text
//! Char Filters → Tokenizer → Token Filters
//! ```

pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
