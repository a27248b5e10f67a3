//! Token filter implementations for token transformation.
//!
//! Filters receive a token stream and produce a new one. The near-dupe
//! pipeline uses them to mark (rather than drop) stopwords and descriptors
//! so that later stages can decide whether a token is significant.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Marks or removes stop words
//!
//! [`lowercase::to_lowercase`] is the case folding shared by the filters.
//!
//! # Examples
//!
//! ```
//! use neardupe::analysis::token_filter::Filter;
//! use neardupe::analysis::token_filter::stop::StopFilter;
//! use neardupe::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(["the"]).remove_stopped(false).ignore_case(true);
//! let tokens = vec![Token::new("The", 0), Token::new("Mill", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert!(filtered[0].is_stopped());
//! assert!(!filtered[1].is_stopped());
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so filters can live inside the shared
/// resource bundle.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod stop;
