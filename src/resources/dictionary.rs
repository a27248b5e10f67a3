//! Expansion dictionary mapping phrases to their canonical forms.
//!
//! Uses FST (Finite State Transducer) for compact storage and fast lookup.
//! Every canonical form is also a key of its own, so a fully spelled-out
//! word like `street` is recognised just as `st` is.

use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;
use fst::{Map, MapBuilder, Streamer};
use serde::{Deserialize, Serialize};

use crate::error::{NearDupeError, Result};
use crate::options::AddressComponents;

/// What a dictionary phrase is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// `street`, `avenue`, `rue`, `strasse`
    StreetType,
    /// `north`, `sw`
    Directional,
    /// `saint`, `doctor`
    Title,
    /// `apartment`, `suite`, `floor`
    UnitDesignator,
    /// Generic place words such as `park`, `restaurant`, `hotel`
    Descriptor,
    /// Abbreviated or alternative place names
    Toponym,
    Stopword,
    /// `th`, `e`, `ème`
    OrdinalSuffix,
    /// Spelled-out cardinals, canonical form is the digits
    Number,
    /// Spelled-out ordinals, canonical form is digits plus suffix
    Ordinal,
}

impl EntryKind {
    /// Generic words dropped when reducing a street name to its root.
    pub fn is_generic(self) -> bool {
        matches!(self, EntryKind::StreetType | EntryKind::Directional)
    }

    /// Kinds that take part in whole-phrase substitution.
    pub fn is_expandable(self) -> bool {
        !matches!(
            self,
            EntryKind::Stopword | EntryKind::OrdinalSuffix | EntryKind::Number | EntryKind::Ordinal
        )
    }
}

/// One line of a dictionary source: `phrase` means `canonical`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub phrase: String,
    pub canonical: String,
    pub kind: EntryKind,
    #[serde(default = "any_component")]
    pub components: AddressComponents,
}

fn any_component() -> AddressComponents {
    AddressComponents::ANY
}

impl DictionaryEntry {
    pub fn new<P: Into<String>, C: Into<String>>(
        phrase: P,
        canonical: C,
        kind: EntryKind,
        components: AddressComponents,
    ) -> Self {
        DictionaryEntry {
            phrase: phrase.into(),
            canonical: canonical.into(),
            kind,
            components,
        }
    }
}

/// A canonical reading of a phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expansion {
    pub canonical: String,
    pub kind: EntryKind,
    pub components: AddressComponents,
}

impl Expansion {
    /// Whether this reading may be used inside a field with `mask`.
    ///
    /// Entries tagged `ANY` apply everywhere.
    pub fn applies_to(&self, mask: AddressComponents) -> bool {
        self.components.intersects(mask) || self.components.contains(AddressComponents::ANY)
    }
}

/// Per-language phrase dictionary.
#[derive(Debug, Clone)]
pub struct ExpansionDictionary {
    /// FST map: phrase -> index into expansion_lists
    fst_map: Arc<Map<Vec<u8>>>,
    /// Readings of each phrase, sorted by canonical form
    expansion_lists: Arc<Vec<Vec<Expansion>>>,
    /// Longest phrase in tokens
    max_phrase_length: usize,
}

impl Default for ExpansionDictionary {
    fn default() -> Self {
        ExpansionDictionary {
            fst_map: Arc::new(Map::default()),
            expansion_lists: Arc::new(Vec::new()),
            max_phrase_length: 1,
        }
    }
}

impl ExpansionDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dictionary from a JSON file holding an array of entries.
    ///
    /// Example format:
    /// ```json
    /// [
    ///   {"phrase": "st", "canonical": "street", "kind": "street_type", "components": 8},
    ///   {"phrase": "st", "canonical": "saint", "kind": "title", "components": 8200}
    /// ]
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            NearDupeError::resource_load(format!(
                "Failed to read dictionary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let entries: Vec<DictionaryEntry> = serde_json::from_str(&content).map_err(|e| {
            NearDupeError::resource_load(format!(
                "Failed to parse dictionary JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_entries(entries)
    }

    /// Build a dictionary from entries.
    ///
    /// Phrases and canonicals are matched case-sensitively, so sources are
    /// expected to be lowercase.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        let mut phrase_to_expansions: AHashMap<String, Vec<Expansion>> = AHashMap::new();
        let mut max_phrase_length = 1;

        for entry in entries {
            let phrase = entry.phrase.trim().to_string();
            let canonical = entry.canonical.trim().to_string();
            if phrase.is_empty() || canonical.is_empty() {
                continue;
            }
            max_phrase_length = max_phrase_length
                .max(phrase.split_whitespace().count())
                .max(canonical.split_whitespace().count());

            let expansion = Expansion {
                canonical: canonical.clone(),
                kind: entry.kind,
                components: entry.components,
            };
            // canonical forms read as themselves
            if phrase != canonical {
                insert_expansion(&mut phrase_to_expansions, &canonical, expansion.clone());
            }
            insert_expansion(&mut phrase_to_expansions, &phrase, expansion);
        }

        let mut sorted_phrases: Vec<_> = phrase_to_expansions.keys().cloned().collect();
        sorted_phrases.sort();

        let mut expansion_lists = Vec::with_capacity(sorted_phrases.len());
        let mut builder = MapBuilder::memory();
        for phrase in sorted_phrases {
            let Some(mut expansions) = phrase_to_expansions.remove(&phrase) else {
                continue;
            };
            expansions.sort_by(|a, b| a.canonical.cmp(&b.canonical));
            let index = expansion_lists.len() as u64;
            expansion_lists.push(expansions);
            builder
                .insert(phrase.as_bytes(), index)
                .map_err(|e| NearDupeError::resource_load(format!("FST build error: {}", e)))?;
        }

        let fst_bytes = builder
            .into_inner()
            .map_err(|e| NearDupeError::resource_load(format!("FST finalize error: {}", e)))?;
        let fst_map = Map::new(fst_bytes)
            .map_err(|e| NearDupeError::resource_load(format!("FST creation error: {}", e)))?;

        Ok(Self {
            fst_map: Arc::new(fst_map),
            expansion_lists: Arc::new(expansion_lists),
            max_phrase_length,
        })
    }

    /// All readings of `phrase`, sorted by canonical form.
    pub fn get(&self, phrase: &str) -> Option<&[Expansion]> {
        let index = self.fst_map.get(phrase.as_bytes())? as usize;
        self.expansion_lists.get(index).map(Vec::as_slice)
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.fst_map.contains_key(phrase.as_bytes())
    }

    /// Whether `phrase` has a reading of the given kind.
    pub fn has_kind(&self, phrase: &str, kind: EntryKind) -> bool {
        self.get(phrase)
            .is_some_and(|expansions| expansions.iter().any(|e| e.kind == kind))
    }

    /// Every phrase with a reading of the given kind.
    pub fn phrases_of_kind(&self, kind: EntryKind) -> Vec<String> {
        let mut phrases = Vec::new();
        let mut stream = self.fst_map.stream();
        while let Some((key, index)) = stream.next() {
            let matches = self
                .expansion_lists
                .get(index as usize)
                .is_some_and(|list| list.iter().any(|e| e.kind == kind));
            if matches {
                phrases.push(String::from_utf8_lossy(key).into_owned());
            }
        }
        phrases
    }

    /// Get the maximum phrase length in tokens.
    pub fn max_phrase_length(&self) -> usize {
        self.max_phrase_length
    }

    /// Number of distinct phrases.
    pub fn len(&self) -> usize {
        self.fst_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fst_map.is_empty()
    }
}

fn insert_expansion(
    map: &mut AHashMap<String, Vec<Expansion>>,
    phrase: &str,
    expansion: Expansion,
) {
    let list = map.entry(phrase.to_string()).or_default();
    match list.iter_mut().find(|e| e.canonical == expansion.canonical) {
        // same reading listed twice: widen its component mask
        Some(existing) if existing.kind == expansion.kind => {
            existing.components |= expansion.components;
        }
        Some(_) => {}
        None => list.push(expansion),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn street_dictionary() -> ExpansionDictionary {
        ExpansionDictionary::from_entries(vec![
            DictionaryEntry::new("st", "street", EntryKind::StreetType, AddressComponents::STREET),
            DictionaryEntry::new(
                "st",
                "saint",
                EntryKind::Title,
                AddressComponents::STREET | AddressComponents::TOPONYM,
            ),
            DictionaryEntry::new("ave", "avenue", EntryKind::StreetType, AddressComponents::STREET),
            DictionaryEntry::new("the", "the", EntryKind::Stopword, AddressComponents::ANY),
            DictionaryEntry::new(
                "nyc",
                "new york city",
                EntryKind::Toponym,
                AddressComponents::TOPONYM,
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_expansions_sorted_by_canonical() {
        let dict = street_dictionary();
        let canonicals: Vec<_> = dict
            .get("st")
            .unwrap()
            .iter()
            .map(|e| e.canonical.as_str())
            .collect();
        assert_eq!(canonicals, vec!["saint", "street"]);
    }

    #[test]
    fn test_canonical_is_its_own_key() {
        let dict = street_dictionary();
        let expansions = dict.get("avenue").unwrap();
        assert_eq!(expansions.len(), 1);
        assert_eq!(expansions[0].canonical, "avenue");
        assert!(dict.has_kind("avenue", EntryKind::StreetType));
        assert!(!dict.contains("boulevard"));
    }

    #[test]
    fn test_component_filter() {
        let dict = street_dictionary();
        let for_city: Vec<_> = dict
            .get("st")
            .unwrap()
            .iter()
            .filter(|e| e.applies_to(AddressComponents::TOPONYM))
            .map(|e| e.canonical.as_str())
            .collect();
        assert_eq!(for_city, vec!["saint"]);
        assert!(dict.get("the").unwrap()[0].applies_to(AddressComponents::UNIT));
    }

    #[test]
    fn test_max_phrase_length() {
        let dict = street_dictionary();
        assert_eq!(dict.max_phrase_length(), 3);
        assert_eq!(dict.phrases_of_kind(EntryKind::Stopword), vec!["the"]);
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = ExpansionDictionary::new();
        assert!(dict.is_empty());
        assert!(dict.get("st").is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en.json");
        std::fs::write(
            &path,
            r#"[{"phrase": "blvd", "canonical": "boulevard", "kind": "street_type", "components": 8}]"#,
        )
        .unwrap();

        let dict = ExpansionDictionary::load_from_file(&path).unwrap();
        assert_eq!(dict.get("blvd").unwrap()[0].canonical, "boulevard");

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            ExpansionDictionary::load_from_file(&path).unwrap_err(),
            NearDupeError::ResourceLoad(_)
        ));
    }
}
