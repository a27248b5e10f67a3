//! Char filter implementations for text normalization.
//!
//! Char filters rewrite a whole string before it is tokenized: Unicode
//! normalization, accent stripping, literal mappings (Latin-ASCII folding,
//! punctuation unification) and regex replacement (periods, whitespace).
//!
//! # Available Filters
//!
//! - [`unicode_normalize::UnicodeNormalizationCharFilter`] - Unicode normalization (NFC, NFKC, ...)
//! - [`unicode_normalize::AccentStripCharFilter`] - removes combining marks
//! - [`mapping::MappingCharFilter`] - literal substring mapping
//! - [`fold::LatinFoldCharFilter`] - Latin to ASCII folding
//! - [`pattern_replace::PatternReplaceCharFilter`] - regex-based replacement
//!
//! # Examples
//!
//! ```
//! use neardupe::analysis::char_filter::CharFilter;
//! use neardupe::analysis::char_filter::unicode_normalize::AccentStripCharFilter;
//!
//! let filter = AccentStripCharFilter::new();
//! assert_eq!(filter.filter("Café"), "Cafe");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod fold;
pub mod mapping;
pub mod pattern_replace;
pub mod unicode_normalize;
