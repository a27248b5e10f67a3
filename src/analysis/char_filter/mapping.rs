use aho_corasick::{AhoCorasick, MatchKind};

use super::CharFilter;
use crate::error::{NearDupeError, Result};

/// Letters that do not decompose into an ASCII base plus marks.
pub const LATIN_ASCII_MAPPING: &[(&str, &str)] = &[
    ("ß", "ss"),
    ("ẞ", "SS"),
    ("æ", "ae"),
    ("Æ", "AE"),
    ("œ", "oe"),
    ("Œ", "OE"),
    ("ø", "o"),
    ("Ø", "O"),
    ("đ", "d"),
    ("Đ", "D"),
    ("ð", "d"),
    ("Ð", "D"),
    ("ł", "l"),
    ("Ł", "L"),
    ("þ", "th"),
    ("Þ", "Th"),
    ("ı", "i"),
    ("ŋ", "ng"),
    ("Ŋ", "Ng"),
    ("ħ", "h"),
    ("Ħ", "H"),
];

/// German umlauts spelled out as digraphs.
pub const GERMAN_UMLAUT_MAPPING: &[(&str, &str)] = &[
    ("ä", "ae"),
    ("ö", "oe"),
    ("ü", "ue"),
    ("Ä", "Ae"),
    ("Ö", "Oe"),
    ("Ü", "Ue"),
    ("a\u{308}", "ae"),
    ("o\u{308}", "oe"),
    ("u\u{308}", "ue"),
];

/// Typographic apostrophes, hyphens and spaces folded to their ASCII forms.
pub const PUNCTUATION_MAPPING: &[(&str, &str)] = &[
    ("\u{2019}", "'"),
    ("\u{2018}", "'"),
    ("\u{02BC}", "'"),
    ("\u{00B4}", "'"),
    ("`", "'"),
    ("\u{2010}", "-"),
    ("\u{2011}", "-"),
    ("\u{2012}", "-"),
    ("\u{2013}", "-"),
    ("\u{00A0}", " "),
    ("\u{3000}", " "),
];

/// A char filter that replaces literal substrings, longest match first.
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    /// Build from `(from, to)` pairs. Pair order only matters for equal-length overlaps.
    pub fn new<I, K, V>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut keys = Vec::new();
        let mut replacements = Vec::new();

        for (k, v) in mapping {
            keys.push(k.into());
            replacements.push(v.into());
        }

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| NearDupeError::Anyhow(anyhow::Error::from(e)))?;

        Ok(Self { ac, replacements })
    }

    pub fn from_static(mapping: &[(&str, &str)]) -> Result<Self> {
        Self::new(mapping.iter().copied())
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);
        output
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_char_filter() {
        let filter = MappingCharFilter::new(vec![("ph", "f"), ("qu", "k")]).unwrap();
        assert_eq!(filter.filter("phone queue"), "fone keue");
    }

    #[test]
    fn test_mapping_expansion_and_deletion() {
        let filter = MappingCharFilter::new(vec![("a", "aaa"), ("foo", "")]).unwrap();
        assert_eq!(filter.filter("bab"), "baaab");
        assert_eq!(filter.filter("afoob"), "aaab");
    }

    #[test]
    fn test_mapping_overlap() {
        let filter = MappingCharFilter::new(vec![("ab", "1"), ("abc", "2")]).unwrap();
        // longest match wins
        assert_eq!(filter.filter("abc"), "2");
    }

    #[test]
    fn test_latin_ascii() {
        let filter = MappingCharFilter::from_static(LATIN_ASCII_MAPPING).unwrap();
        assert_eq!(filter.filter("Straße"), "Strasse");
        assert_eq!(filter.filter("Søndre Æblegade"), "Sondre AEblegade");
        assert_eq!(filter.filter("Łódź"), "Lódź");
    }

    #[test]
    fn test_german_umlauts() {
        let filter = MappingCharFilter::from_static(GERMAN_UMLAUT_MAPPING).unwrap();
        assert_eq!(filter.filter("München"), "Muenchen");
        assert_eq!(filter.filter("Mu\u{308}nchen"), "Muenchen");
    }

    #[test]
    fn test_punctuation() {
        let filter = MappingCharFilter::from_static(PUNCTUATION_MAPPING).unwrap();
        assert_eq!(filter.filter("McDonald\u{2019}s"), "McDonald's");
        assert_eq!(filter.filter("Coca\u{2013}Cola"), "Coca-Cola");
    }
}
