//! Linguistic resources: per-language dictionaries, the country table, the
//! detection lexicon and the transliteration table.
//!
//! Everything is compiled in, so [`Resources::builtin`] always works. A data
//! directory can override parts of it:
//!
//! ```text
//! <dir>/dictionaries/<lang>.json   array of dictionary entries, replaces <lang>
//! <dir>/countries.json             [{"names": [...], "languages": [...]}]
//! <dir>/lexicon.json               {"<lang>": ["word", ...]}, added to <lang>
//! <dir>/transliteration.json       {"<char>": "<latin>"}
//! ```
//!
//! ```
//! use neardupe::resources::Resources;
//!
//! let resources = Resources::builtin().unwrap();
//! assert!(resources.dictionary("en").is_some());
//! assert_eq!(resources.country_languages("France"), Some(&["fr".to_string()][..]));
//! ```

pub mod builtin;
pub mod dictionary;
pub mod transliterate;

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use log::{debug, info};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::fold::LatinFoldCharFilter;
use crate::error::{NearDupeError, Result};
use crate::resources::builtin::{COUNTRIES, LANGUAGES, LanguageTables};
use crate::resources::dictionary::{DictionaryEntry, EntryKind, ExpansionDictionary};
use crate::resources::transliterate::Transliterator;

/// Environment variable naming a resource directory.
pub const DATA_DIR_ENV: &str = "NEARDUPE_DATA_DIR";

#[derive(Debug, Deserialize)]
struct CountryRecord {
    names: Vec<String>,
    languages: Vec<String>,
}

/// Immutable resource bundle shared by every operation.
#[derive(Clone, Debug)]
pub struct Resources {
    dictionaries: AHashMap<String, ExpansionDictionary>,
    /// Languages with a dictionary, in precedence order
    language_order: Vec<String>,
    countries: AHashMap<String, Vec<String>>,
    lexicon: AHashMap<String, AHashSet<String>>,
    transliterator: Transliterator,
}

impl Resources {
    /// The compiled-in resources.
    pub fn builtin() -> Result<Self> {
        let mut resources = Resources {
            dictionaries: AHashMap::new(),
            language_order: Vec::new(),
            countries: AHashMap::new(),
            lexicon: AHashMap::new(),
            transliterator: Transliterator::builtin(),
        };

        for tables in LANGUAGES {
            let dictionary =
                ExpansionDictionary::from_entries(with_folded(tables.language, tables.entries())?)?;
            resources.set_dictionary(tables.language, dictionary);
        }
        for row in COUNTRIES {
            let languages: Vec<String> = row.languages.iter().map(|l| l.to_string()).collect();
            for name in row.names {
                resources.countries.insert(name.to_string(), languages.clone());
            }
        }

        debug!(
            "built-in resources: {} languages, {} country names",
            resources.language_order.len(),
            resources.countries.len()
        );
        Ok(resources)
    }

    /// The built-in resources with the files found in `dir` layered on top.
    ///
    /// # Errors
    ///
    /// [`NearDupeError::ResourceLoad`] when `dir` is not a directory or a
    /// file in it cannot be read or parsed.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(NearDupeError::resource_load(format!(
                "resource directory '{}' does not exist",
                dir.display()
            )));
        }

        let mut resources = Self::builtin()?;

        let dictionaries_dir = dir.join("dictionaries");
        if dictionaries_dir.is_dir() {
            let mut paths: Vec<_> = fs::read_dir(&dictionaries_dir)
                .map_err(|e| {
                    NearDupeError::resource_load(format!(
                        "Failed to list '{}': {}",
                        dictionaries_dir.display(),
                        e
                    ))
                })?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
                .collect();
            paths.sort();

            for path in paths {
                let Some(language) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let dictionary = ExpansionDictionary::load_from_file(&path)?;
                info!(
                    "loaded {} phrases for '{}' from {}",
                    dictionary.len(),
                    language,
                    path.display()
                );
                resources.set_dictionary(&language.to_lowercase(), dictionary);
            }
        }

        let countries_path = dir.join("countries.json");
        if countries_path.is_file() {
            let records: Vec<CountryRecord> = read_json(&countries_path)?;
            for record in records {
                let languages: Vec<String> =
                    record.languages.iter().map(|l| l.trim().to_lowercase()).collect();
                for name in record.names {
                    resources
                        .countries
                        .insert(name.trim().to_lowercase(), languages.clone());
                }
            }
        }

        let lexicon_path = dir.join("lexicon.json");
        if lexicon_path.is_file() {
            let words: HashMap<String, Vec<String>> = read_json(&lexicon_path)?;
            for (language, words) in words {
                resources
                    .lexicon
                    .entry(language.to_lowercase())
                    .or_default()
                    .extend(words.into_iter().map(|w| w.trim().to_lowercase()));
            }
        }

        let transliteration_path = dir.join("transliteration.json");
        if transliteration_path.is_file() {
            let table: HashMap<String, String> = read_json(&transliteration_path)?;
            let mut overrides = Vec::with_capacity(table.len());
            for (key, latin) in table {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => overrides.push((c, latin)),
                    _ => {
                        return Err(NearDupeError::resource_load(format!(
                            "transliteration key '{}' in {} is not a single character",
                            key,
                            transliteration_path.display()
                        )));
                    }
                }
            }
            resources.transliterator = resources.transliterator.with_overrides(overrides);
        }

        info!("loaded resources from {}", dir.display());
        Ok(resources)
    }

    /// Resources from `NEARDUPE_DATA_DIR` when set, the built-ins otherwise.
    pub fn from_env() -> Result<Self> {
        match env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::load_from_dir(dir),
            _ => Self::builtin(),
        }
    }

    fn set_dictionary(&mut self, language: &str, dictionary: ExpansionDictionary) {
        let mut words: AHashSet<String> = [
            EntryKind::StreetType,
            EntryKind::Directional,
            EntryKind::Title,
            EntryKind::UnitDesignator,
            EntryKind::Descriptor,
            EntryKind::Toponym,
            EntryKind::Stopword,
        ]
        .into_iter()
        .flat_map(|kind| dictionary.phrases_of_kind(kind))
        .collect();
        if let Some(tables) = builtin_tables(language) {
            words.extend(tables.lexicon.iter().map(|w| w.to_string()));
        }
        self.lexicon.insert(language.to_string(), words);

        if !self.language_order.iter().any(|l| l == language) {
            self.language_order.push(language.to_string());
        }
        self.dictionaries.insert(language.to_string(), dictionary);
    }

    pub fn dictionary(&self, language: &str) -> Option<&ExpansionDictionary> {
        self.dictionaries.get(language)
    }

    /// Languages that have a dictionary, in precedence order.
    pub fn languages(&self) -> &[String] {
        &self.language_order
    }

    pub fn has_dictionary(&self, language: &str) -> bool {
        self.dictionaries.contains_key(language)
    }

    /// Languages spoken in the named country, most common first.
    pub fn country_languages(&self, name: &str) -> Option<&[String]> {
        self.countries
            .get(&name.trim().to_lowercase())
            .map(Vec::as_slice)
    }

    /// Whether `word` is a known word of `language`.
    pub fn lexicon_contains(&self, language: &str, word: &str) -> bool {
        self.lexicon
            .get(language)
            .is_some_and(|words| words.contains(word))
    }

    pub fn transliterator(&self) -> &Transliterator {
        &self.transliterator
    }

    /// Dictionaries of `languages` that exist, in the given order.
    pub fn dictionaries_for<'a, 'l>(
        &'a self,
        languages: &'l [String],
    ) -> impl Iterator<Item = &'a ExpansionDictionary> + use<'a, 'l> {
        languages.iter().filter_map(|l| self.dictionaries.get(l))
    }

    /// Union of every phrase of `kind` across `languages`.
    pub fn words_of_kind(&self, languages: &[String], kind: EntryKind) -> AHashSet<String> {
        self.dictionaries_for(languages)
            .flat_map(|dictionary| dictionary.phrases_of_kind(kind))
            .collect()
    }

    /// Ordinal suffixes of `languages`, longest first.
    pub fn ordinal_suffixes(&self, languages: &[String]) -> Vec<String> {
        let mut suffixes: Vec<String> = self
            .words_of_kind(languages, EntryKind::OrdinalSuffix)
            .into_iter()
            .collect();
        suffixes.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        suffixes
    }

    /// Numeric form of a spelled-out number or ordinal, first language wins.
    pub fn number<'a>(&'a self, languages: &[String], word: &str) -> Option<&'a str> {
        self.dictionaries_for(languages).find_map(|dictionary| {
            dictionary.get(word)?.iter().find_map(|e| {
                matches!(e.kind, EntryKind::Number | EntryKind::Ordinal)
                    .then_some(e.canonical.as_str())
            })
        })
    }

    /// Whether `word` is a cardinal number word in one of `languages`.
    pub fn is_cardinal(&self, languages: &[String], word: &str) -> bool {
        self.dictionaries_for(languages)
            .any(|dictionary| dictionary.has_kind(word, EntryKind::Number))
    }
}

fn builtin_tables(language: &str) -> Option<&'static LanguageTables> {
    LANGUAGES.iter().find(|t| t.language == language)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        NearDupeError::resource_load(format!("Failed to read '{}': {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        NearDupeError::resource_load(format!("Failed to parse '{}': {}", path.display(), e))
    })
}

/// Add ASCII-folded spellings of accented phrases.
///
/// German also gets the umlaut digraph spelling (`süd` reads as `sud` and `sued`).
fn with_folded(language: &str, entries: Vec<DictionaryEntry>) -> Result<Vec<DictionaryEntry>> {
    let mut folds = vec![LatinFoldCharFilter::new()?];
    if language == "de" {
        folds.push(LatinFoldCharFilter::german()?);
    }

    let mut extra = Vec::new();
    for entry in &entries {
        for fold in &folds {
            let phrase = fold.filter(&entry.phrase);
            if phrase != entry.phrase {
                extra.push(DictionaryEntry::new(
                    phrase,
                    fold.filter(&entry.canonical),
                    entry.kind,
                    entry.components,
                ));
            }
        }
    }

    let mut entries = entries;
    entries.extend(extra);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn langs(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_builtin_languages() {
        let resources = Resources::builtin().unwrap();
        assert_eq!(resources.languages()[0], "en");
        for code in ["en", "fr", "de", "es", "it", "nl", "pt"] {
            assert!(resources.has_dictionary(code), "missing {code}");
        }
        assert!(!resources.has_dictionary("ja"));
    }

    #[test]
    fn test_folded_phrases() {
        let resources = Resources::builtin().unwrap();
        let de = resources.dictionary("de").unwrap();
        assert!(de.contains("straße"));
        assert!(de.contains("sud"));
        assert!(de.contains("sued"));
        let fr = resources.dictionary("fr").unwrap();
        let readings = fr.get("allee").unwrap();
        assert_eq!(readings[0].canonical, "allee");
    }

    #[test]
    fn test_lexicon() {
        let resources = Resources::builtin().unwrap();
        assert!(resources.lexicon_contains("fr", "rue"));
        assert!(resources.lexicon_contains("fr", "bruxelles"));
        assert!(resources.lexicon_contains("en", "st"));
        assert!(!resources.lexicon_contains("en", "six"));
        assert!(!resources.lexicon_contains("xx", "rue"));
    }

    #[test]
    fn test_countries() {
        let resources = Resources::builtin().unwrap();
        assert_eq!(resources.country_languages(" USA "), Some(&langs(&["en"])[..]));
        assert_eq!(
            resources.country_languages("Belgium"),
            Some(&langs(&["nl", "fr", "de"])[..])
        );
        assert_eq!(resources.country_languages("日本"), Some(&langs(&["ja"])[..]));
        assert_eq!(resources.country_languages("Atlantis"), None);
    }

    #[test]
    fn test_numbers_and_suffixes() {
        let resources = Resources::builtin().unwrap();
        let en = langs(&["en"]);
        assert_eq!(resources.number(&en, "six"), Some("6"));
        assert_eq!(resources.number(&en, "sixth"), Some("6th"));
        assert_eq!(resources.number(&en, "street"), None);
        assert!(resources.is_cardinal(&en, "twenty"));
        assert!(!resources.is_cardinal(&en, "first"));

        let suffixes = resources.ordinal_suffixes(&langs(&["fr"]));
        assert_eq!(suffixes[0], "eme");
        assert!(suffixes.contains(&"er".to_string()));
    }

    #[test]
    fn test_number_outlives_language_list() {
        let resources = Resources::builtin().unwrap();
        let number = {
            let languages = langs(&["fr", "en"]);
            resources.number(&languages, "six")
        };
        assert_eq!(number, Some("6"));

        let dictionaries: Vec<&ExpansionDictionary> = {
            let languages = langs(&["de", "xx"]);
            resources.dictionaries_for(&languages).collect()
        };
        assert_eq!(dictionaries.len(), 1);
    }

    #[test]
    fn test_load_from_dir_overrides() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("dictionaries")).unwrap();
        fs::write(
            dir.path().join("dictionaries").join("en.json"),
            r#"[{"phrase": "st", "canonical": "street", "kind": "street_type", "components": 8}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("countries.json"),
            r#"[{"names": ["Atlantis"], "languages": ["en"]}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("lexicon.json"), r#"{"fr": ["croissant"]}"#).unwrap();
        fs::write(dir.path().join("transliteration.json"), r#"{"東": "higashi"}"#).unwrap();

        let resources = Resources::load_from_dir(dir.path()).unwrap();
        let en = resources.dictionary("en").unwrap();
        assert_eq!(en.get("st").unwrap().len(), 1);
        assert!(!en.contains("avenue"));
        assert!(resources.dictionary("fr").unwrap().contains("rue"));
        assert_eq!(
            resources.country_languages("atlantis"),
            Some(&langs(&["en"])[..])
        );
        assert!(resources.lexicon_contains("fr", "croissant"));
        assert_eq!(
            resources.transliterator().transliterate("東").as_deref(),
            Some("higashi")
        );
    }

    #[test]
    fn test_load_from_dir_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            Resources::load_from_dir(&missing),
            Err(NearDupeError::ResourceLoad(_))
        ));

        fs::write(dir.path().join("countries.json"), "{not json").unwrap();
        assert!(matches!(
            Resources::load_from_dir(dir.path()),
            Err(NearDupeError::ResourceLoad(_))
        ));

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("transliteration.json"), r#"{"ab": "x"}"#).unwrap();
        assert!(matches!(
            Resources::load_from_dir(dir.path()),
            Err(NearDupeError::ResourceLoad(_))
        ));
    }
}
