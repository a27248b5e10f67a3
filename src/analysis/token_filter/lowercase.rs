//! Lowercasing shared by the normalizer, the stop filter and language detection.

/// Lowercase a string, taking the ASCII fast path when possible.
///
/// ```
/// use neardupe::analysis::token_filter::lowercase::to_lowercase;
///
/// assert_eq!(to_lowercase("Straße"), "straße");
/// assert_eq!(to_lowercase("МОСКВА"), "москва");
/// ```
pub fn to_lowercase(text: &str) -> String {
    if text.is_ascii() {
        text.to_ascii_lowercase()
    } else {
        text.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_lowercase() {
        assert_eq!(to_lowercase("McDonald's"), "mcdonald's");
        assert_eq!(to_lowercase("ÉTOILE"), "étoile");
        assert_eq!(to_lowercase(""), "");
    }
}
