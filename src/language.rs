//! Language classification of labeled address components.
//!
//! Non-Latin text is classified by its dominant script, with the country
//! name breaking ambiguities (Han is Chinese or Japanese). Latin text is
//! classified by the languages of the named country, narrowed down by the
//! words that appear in the other components.
//!
//! ```
//! use neardupe::component::LabeledComponent;
//! use neardupe::language::LanguageDetector;
//! use neardupe::resources::Resources;
//!
//! let resources = Resources::builtin().unwrap();
//! let detector = LanguageDetector::new(&resources);
//! let components = vec![
//!     LabeledComponent::new("road", "Rue de la Loi"),
//!     LabeledComponent::new("city", "Bruxelles"),
//!     LabeledComponent::new("country", "Belgium"),
//! ];
//! assert_eq!(detector.detect(&components), vec!["fr"]);
//! ```

pub mod script;

use log::debug;

use crate::analysis::token_filter::lowercase::to_lowercase;
use crate::component::{ComponentLabel, LabeledComponent, find_value};
use crate::language::script::{Script, ScriptCounts};
use crate::resources::Resources;

/// Language reported when nothing points anywhere else.
pub const DEFAULT_LANGUAGE: &str = "en";

const UKRAINIAN_LETTERS: &[char] = &['і', 'ї', 'є', 'ґ', 'І', 'Ї', 'Є', 'Ґ'];

/// Classifies components into ISO 639-1 language codes.
pub struct LanguageDetector<'a> {
    resources: &'a Resources,
}

impl<'a> LanguageDetector<'a> {
    pub fn new(resources: &'a Resources) -> Self {
        LanguageDetector { resources }
    }

    /// Languages of a free-standing piece of text, such as a venue name.
    pub fn detect_text(&self, text: &str) -> Vec<String> {
        self.detect(&[LabeledComponent::new(ComponentLabel::House.as_str(), text)])
    }

    /// Languages of a set of components, most likely first. Never empty.
    pub fn detect(&self, components: &[LabeledComponent]) -> Vec<String> {
        let mut counts = ScriptCounts::new();
        for component in components {
            counts.add(&component.value);
        }

        let candidates: Vec<String> = find_value(components, ComponentLabel::Country)
            .and_then(|country| self.resources.country_languages(country))
            .map(<[String]>::to_vec)
            .unwrap_or_default();

        let languages = if counts.is_non_latin_dominant() {
            self.detect_non_latin(&counts, components, &candidates)
        } else {
            self.detect_latin(components, &candidates)
        };
        debug!(
            "detected {:?} (country candidates {:?}, {} letters)",
            languages,
            candidates,
            counts.total()
        );
        languages
    }

    fn detect_non_latin(
        &self,
        counts: &ScriptCounts,
        components: &[LabeledComponent],
        candidates: &[String],
    ) -> Vec<String> {
        let Some(script) = counts.dominant_non_latin() else {
            return vec![DEFAULT_LANGUAGE.to_string()];
        };

        let possible: &[&str] = match script {
            Script::Han | Script::Hiragana | Script::Katakana => &["ja", "zh"],
            Script::Hangul => &["ko"],
            Script::Cyrillic => &["ru", "uk", "bg", "sr"],
            Script::Greek => &["el"],
            Script::Arabic => &["ar", "fa"],
            Script::Hebrew => &["he"],
            Script::Thai => &["th"],
            Script::Devanagari => &["hi", "mr", "ne"],
            Script::Georgian => &["ka"],
            Script::Armenian => &["hy"],
            Script::Latin | Script::Common | Script::Other => &[],
        };
        let from_country: Vec<String> = candidates
            .iter()
            .filter(|c| possible.contains(&c.as_str()))
            .cloned()
            .collect();
        if !from_country.is_empty() {
            return from_country;
        }

        let language = match script {
            Script::Han | Script::Hiragana | Script::Katakana => {
                if counts.get(Script::Hiragana) + counts.get(Script::Katakana) > 0 {
                    "ja"
                } else {
                    "zh"
                }
            }
            Script::Cyrillic => {
                let ukrainian = components
                    .iter()
                    .any(|c| c.value.contains(UKRAINIAN_LETTERS));
                if ukrainian { "uk" } else { "ru" }
            }
            _ => possible.first().copied().unwrap_or(DEFAULT_LANGUAGE),
        };
        vec![language.to_string()]
    }

    fn detect_latin(&self, components: &[LabeledComponent], candidates: &[String]) -> Vec<String> {
        let candidates: Vec<String> = candidates
            .iter()
            .filter(|c| self.resources.has_dictionary(c))
            .cloned()
            .collect();
        if candidates.len() == 1 {
            return candidates;
        }

        let words = lexicon_words(components);
        let scored: Vec<(String, usize)> = if candidates.is_empty() {
            self.resources
                .languages()
                .iter()
                .map(|l| (l.clone(), self.score(l, &words)))
                .collect()
        } else {
            candidates
                .iter()
                .map(|l| (l.clone(), self.score(l, &words)))
                .collect()
        };
        let top = scored.iter().map(|(_, s)| *s).max().unwrap_or(0);

        if !candidates.is_empty() {
            if top == 0 {
                return candidates;
            }
            return scored
                .into_iter()
                .filter(|(_, s)| *s == top)
                .map(|(l, _)| l)
                .collect();
        }

        let mut winners = scored.into_iter().filter(|(_, s)| top > 0 && *s == top);
        match (winners.next(), winners.next()) {
            (Some((language, _)), None) => vec![language],
            _ => vec![DEFAULT_LANGUAGE.to_string()],
        }
    }

    /// Number of `words` that belong to `language`.
    fn score(&self, language: &str, words: &[String]) -> usize {
        let suffixes = self.resources.ordinal_suffixes(&[language.to_string()]);
        words
            .iter()
            .filter(|word| {
                self.resources.lexicon_contains(language, word)
                    || is_numbered_ordinal(word, &suffixes)
            })
            .count()
    }
}

/// Lowercased words and adjacent word pairs of every non-country component.
fn lexicon_words(components: &[LabeledComponent]) -> Vec<String> {
    let mut words = Vec::new();
    for component in components {
        if component.kind() == Some(ComponentLabel::Country) {
            continue;
        }
        let tokens: Vec<String> = to_lowercase(&component.value)
            .split_whitespace()
            .map(|t| t.trim_end_matches(['.', ',']).to_string())
            .filter(|t| !t.is_empty())
            .collect();
        for pair in tokens.windows(2) {
            words.push(format!("{} {}", pair[0], pair[1]));
        }
        words.extend(tokens);
    }
    words
}

/// `5th`, `2e`, `1er`: digits followed by one of `suffixes`.
pub(crate) fn is_numbered_ordinal(word: &str, suffixes: &[String]) -> bool {
    let digits_end = word
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(word.len());
    digits_end > 0
        && digits_end < word.len()
        && suffixes.iter().any(|s| &word[digits_end..] == s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(pairs: &[(&str, &str)]) -> Vec<String> {
        let resources = Resources::builtin().unwrap();
        let components: Vec<_> = pairs
            .iter()
            .map(|(l, v)| LabeledComponent::new(*l, *v))
            .collect();
        LanguageDetector::new(&resources).detect(&components)
    }

    #[test]
    fn test_country_decides_latin() {
        assert_eq!(
            detect(&[("road", "Main St"), ("city", "New York"), ("country", "USA")]),
            vec!["en"]
        );
        assert_eq!(
            detect(&[("road", "Unter den Linden"), ("country", "Germany")]),
            vec!["de"]
        );
    }

    #[test]
    fn test_multilingual_country_narrowed_by_words() {
        assert_eq!(
            detect(&[("road", "Rue de la Loi"), ("city", "Bruxelles"), ("country", "Belgium")]),
            vec!["fr"]
        );
        assert_eq!(
            detect(&[("road", "Wetstraat"), ("country", "Belgium")]),
            vec!["nl", "fr", "de"]
        );
    }

    #[test]
    fn test_without_country() {
        assert_eq!(detect(&[("road", "Rue de la Paix"), ("city", "Paris")]), vec!["fr"]);
        assert_eq!(detect(&[("road", "5th Ave")]), vec!["en"]);
        assert_eq!(detect(&[("city", "Tokyo"), ("country", "Japan")]), vec!["en"]);
        assert_eq!(detect(&[("house", "Zyxw")]), vec!["en"]);
    }

    #[test]
    fn test_non_latin_scripts() {
        assert_eq!(detect(&[("city", "東京都"), ("country", "日本")]), vec!["ja"]);
        assert_eq!(detect(&[("city", "北京市"), ("country", "中国")]), vec!["zh"]);
        assert_eq!(detect(&[("city", "北京市")]), vec!["zh"]);
        assert_eq!(detect(&[("suburb", "しぶや"), ("city", "東京")]), vec!["ja"]);
        assert_eq!(detect(&[("city", "서울")]), vec!["ko"]);
        assert_eq!(detect(&[("city", "Москва"), ("country", "Россия")]), vec!["ru"]);
        assert_eq!(detect(&[("city", "Київ")]), vec!["uk"]);
        assert_eq!(detect(&[("city", "Αθήνα")]), vec!["el"]);
    }

    #[test]
    fn test_numbered_ordinal() {
        let suffixes = vec!["st".to_string(), "th".to_string()];
        assert!(is_numbered_ordinal("5th", &suffixes));
        assert!(is_numbered_ordinal("21st", &suffixes));
        assert!(!is_numbered_ordinal("5", &suffixes));
        assert!(!is_numbered_ordinal("th", &suffixes));
        assert!(!is_numbered_ordinal("5ab", &suffixes));
    }
}
