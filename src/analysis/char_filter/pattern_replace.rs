use regex::Regex;

use super::CharFilter;
use crate::error::{NearDupeError, Result};

/// A char filter that replaces characters matching a regex pattern.
///
/// The replacement string may reference capture groups (`$1`, `${name}`).
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| NearDupeError::Anyhow(anyhow::Error::from(e)))?,
            replacement: replacement.to_string(),
        })
    }

    /// Whether the pattern matches anywhere in `input`.
    pub fn is_match(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplaceCharFilter::new(r"\s+", " ").unwrap();
        assert_eq!(filter.filter("main \t  street"), "main street");
    }

    #[test]
    fn test_capture_groups() {
        let filter = PatternReplaceCharFilter::new(r"(\w)\.$", "$1").unwrap();
        assert_eq!(filter.filter("st."), "st");
        assert!(filter.is_match("ave."));
        assert!(!filter.is_match("ave"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternReplaceCharFilter::new("(unclosed", "").is_err());
    }
}
