//! Per-field expansion of component values into comparable variants.
//!
//! Street names are segmented into the longest dictionary phrases, each
//! phrase is replaced by its canonical readings and every combination is
//! emitted, followed by the street's root: the value without leading and
//! trailing street types, directionals and stop words. `main st` gives
//! `main saint`, `main street` and `main`.

use log::trace;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::fold::LatinFoldCharFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::component::ComponentLabel;
use crate::error::Result;
use crate::normalizer::Normalizer;
use crate::normalizer::numex::strip_ordinal_suffix;
use crate::options::{AddressComponents, NormalizeOptions};
use crate::phonetic::{PhoneticEncoder, name_stop_filter};
use crate::resources::Resources;
use crate::resources::dictionary::EntryKind;
use crate::variant::{MAX_FIELD_VARIANTS, VariantSet};

/// How a component takes part in a hash key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldRole {
    Name,
    Street,
    HouseNumber,
    Unit,
    /// City, or a locality standing in for one
    Locality,
    PostalCode,
}

impl FieldRole {
    /// The role of a component label, if it is used in keys at all.
    pub fn of(label: ComponentLabel) -> Option<FieldRole> {
        match label {
            ComponentLabel::House => Some(FieldRole::Name),
            ComponentLabel::Road => Some(FieldRole::Street),
            ComponentLabel::HouseNumber => Some(FieldRole::HouseNumber),
            ComponentLabel::Unit => Some(FieldRole::Unit),
            ComponentLabel::Postcode => Some(FieldRole::PostalCode),
            ComponentLabel::City
            | ComponentLabel::CityDistrict
            | ComponentLabel::Suburb
            | ComponentLabel::Island
            | ComponentLabel::StateDistrict => Some(FieldRole::Locality),
            _ => None,
        }
    }

    pub fn components(self) -> AddressComponents {
        match self {
            FieldRole::Name => AddressComponents::NAME,
            FieldRole::Street => AddressComponents::STREET,
            FieldRole::HouseNumber => AddressComponents::HOUSE_NUMBER,
            FieldRole::Unit => AddressComponents::UNIT,
            FieldRole::Locality => AddressComponents::TOPONYM,
            FieldRole::PostalCode => AddressComponents::POSTAL_CODE,
        }
    }
}

/// Normalization used for every address field.
///
/// Digits stay attached to letters so `5th` and `12b` survive as units.
pub fn address_options(components: AddressComponents) -> NormalizeOptions {
    NormalizeOptions {
        split_alpha_from_numeric: false,
        address_components: components,
        ..NormalizeOptions::default()
    }
}

/// One canonical reading of a segment.
#[derive(Clone, Debug, PartialEq)]
struct Reading {
    text: String,
    kind: Option<EntryKind>,
}

/// A run of tokens matched as one phrase.
#[derive(Clone, Debug)]
struct Segment {
    readings: Vec<Reading>,
    stopword: bool,
}

impl Segment {
    fn literal(text: &str, stopword: bool) -> Self {
        Segment {
            readings: vec![Reading {
                text: text.to_string(),
                kind: None,
            }],
            stopword,
        }
    }

    /// Whether the reading can be dropped from either end of a street root.
    fn is_trimmable(&self, reading: &Reading) -> bool {
        self.stopword || reading.kind.is_some_and(EntryKind::is_generic)
    }
}

/// Turns raw component values into variant sets for key composition.
pub struct VariantExpander {
    normalizer: Normalizer,
    encoder: PhoneticEncoder,
    fold: LatinFoldCharFilter,
    tokenizer: WhitespaceTokenizer,
}

impl VariantExpander {
    pub fn new() -> Result<Self> {
        Ok(VariantExpander {
            normalizer: Normalizer::new()?,
            encoder: PhoneticEncoder::new(),
            fold: LatinFoldCharFilter::new()?,
            tokenizer: WhitespaceTokenizer::new(),
        })
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Phonetic and n-gram keys of a name normalized with `options`.
    pub fn name_keys(
        &self,
        resources: &Resources,
        name: &str,
        options: &NormalizeOptions,
        languages: &[String],
    ) -> Result<VariantSet> {
        let variants = self
            .normalizer
            .normalize(resources, name, options, languages)?;
        let stop_filter = name_stop_filter(resources, languages);
        self.encoder.name_keys(&variants, &stop_filter)
    }

    /// Variants of `value` in the given role, most specific first.
    pub fn expand(
        &self,
        resources: &Resources,
        role: FieldRole,
        value: &str,
        languages: &[String],
    ) -> Result<VariantSet> {
        if role == FieldRole::Name {
            let options = NormalizeOptions::default().with_languages(languages.iter().cloned());
            return self.name_keys(resources, value, &options, languages);
        }

        let options = address_options(role.components());
        let normalized = self
            .normalizer
            .normalize(resources, value, &options, languages)?;
        if matches!(role, FieldRole::HouseNumber | FieldRole::PostalCode) {
            return Ok(normalized);
        }

        let fold_canonicals = options.latin_ascii || options.strip_accents;
        let mut output = VariantSet::with_limit(MAX_FIELD_VARIANTS);
        for variant in normalized.iter() {
            let segments = self.segment(resources, variant, role.components(), languages, fold_canonicals);
            let products = products(&segments, MAX_FIELD_VARIANTS);
            match role {
                FieldRole::Street => {
                    for choice in &products {
                        output.push(join(&segments, choice, 0, segments.len()));
                    }
                    for choice in &products {
                        if let Some(root) = street_root(&segments, choice) {
                            output.push(root);
                        }
                    }
                }
                FieldRole::Unit => {
                    for choice in &products {
                        output.push(unit_root(&segments, choice));
                    }
                }
                _ => {
                    for choice in &products {
                        output.push(join(&segments, choice, 0, segments.len()));
                    }
                }
            }
        }
        trace!("expanded {:?} as {:?} into {:?}", value, role, output.as_slice());
        Ok(output)
    }

    /// Greedy longest-match segmentation against the dictionaries of `languages`.
    fn segment(
        &self,
        resources: &Resources,
        text: &str,
        mask: AddressComponents,
        languages: &[String],
        fold_canonicals: bool,
    ) -> Vec<Segment> {
        let tokens: Vec<String> = self
            .tokenizer
            .tokens(text)
            .into_iter()
            .map(|t| t.text)
            .collect();
        let stopwords = resources.words_of_kind(languages, EntryKind::Stopword);
        let suffixes = resources.ordinal_suffixes(languages);
        let max_phrase = resources
            .dictionaries_for(languages)
            .map(|d| d.max_phrase_length())
            .max()
            .unwrap_or(1)
            .max(1);

        let mut segments = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            let longest = max_phrase.min(tokens.len() - i);
            let mut matched = None;
            for len in (1..=longest).rev() {
                let phrase = tokens[i..i + len].join(" ");
                let readings = self.readings(resources, &phrase, mask, languages, fold_canonicals);
                if !readings.is_empty() {
                    matched = Some((len, phrase, readings));
                    break;
                }
            }

            match matched {
                Some((len, phrase, readings)) => {
                    segments.push(Segment {
                        readings,
                        stopword: stopwords.contains(&phrase),
                    });
                    i += len;
                }
                None => {
                    let token = &tokens[i];
                    let mut segment = Segment::literal(token, stopwords.contains(token));
                    if let Some(digits) = strip_ordinal_suffix(token, &suffixes) {
                        segment.readings.push(Reading {
                            text: digits.to_string(),
                            kind: None,
                        });
                    }
                    segments.push(segment);
                    i += 1;
                }
            }
        }
        segments
    }

    /// Applicable canonical readings of `phrase`, in language order.
    fn readings(
        &self,
        resources: &Resources,
        phrase: &str,
        mask: AddressComponents,
        languages: &[String],
        fold_canonicals: bool,
    ) -> Vec<Reading> {
        let mut readings: Vec<Reading> = Vec::new();
        for dictionary in resources.dictionaries_for(languages) {
            let Some(expansions) = dictionary.get(phrase) else {
                continue;
            };
            for expansion in expansions {
                if !expansion.kind.is_expandable() || !expansion.applies_to(mask) {
                    continue;
                }
                let text = if fold_canonicals {
                    self.fold.filter(&expansion.canonical)
                } else {
                    expansion.canonical.clone()
                };
                if !readings.iter().any(|r| r.text == text) {
                    readings.push(Reading {
                        text,
                        kind: Some(expansion.kind),
                    });
                }
            }
        }
        readings
    }
}

/// Reading indices of every combination, first segment varying slowest.
fn products(segments: &[Segment], limit: usize) -> Vec<Vec<usize>> {
    if segments.is_empty() {
        return Vec::new();
    }
    let mut choice = vec![0; segments.len()];
    let mut all = Vec::new();
    loop {
        all.push(choice.clone());
        if all.len() >= limit {
            return all;
        }
        let mut position = segments.len();
        loop {
            if position == 0 {
                return all;
            }
            position -= 1;
            choice[position] += 1;
            if choice[position] < segments[position].readings.len() {
                break;
            }
            choice[position] = 0;
        }
    }
}

fn join(segments: &[Segment], choice: &[usize], start: usize, end: usize) -> String {
    segments[start..end]
        .iter()
        .zip(&choice[start..end])
        .map(|(segment, &i)| segment.readings[i].text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The combination without leading and trailing generic words.
fn street_root(segments: &[Segment], choice: &[usize]) -> Option<String> {
    let keep = |index: usize| {
        let segment = &segments[index];
        !segment.is_trimmable(&segment.readings[choice[index]])
    };
    let start = (0..segments.len()).find(|&i| keep(i))?;
    let end = (0..segments.len()).rev().find(|&i| keep(i))?;
    Some(join(segments, choice, start, end + 1))
}

/// The combination without unit designators and a leading `#`.
fn unit_root(segments: &[Segment], choice: &[usize]) -> String {
    let words: Vec<&str> = segments
        .iter()
        .zip(choice)
        .map(|(segment, &i)| &segment.readings[i])
        .filter(|reading| reading.kind != Some(EntryKind::UnitDesignator))
        .map(|reading| reading.text.as_str())
        .collect();
    let root = words.join(" ");
    let root = root.trim_start_matches('#').trim();
    if root.is_empty() {
        join(segments, choice, 0, segments.len())
    } else {
        root.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(role: FieldRole, value: &str, languages: &[&str]) -> Vec<String> {
        let resources = Resources::builtin().unwrap();
        let expander = VariantExpander::new().unwrap();
        let languages: Vec<String> = languages.iter().map(|l| l.to_string()).collect();
        expander
            .expand(&resources, role, value, &languages)
            .unwrap()
            .into_vec()
    }

    #[test]
    fn test_street_abbreviation_readings() {
        assert_eq!(
            expand(FieldRole::Street, "Main St", &["en"]),
            vec!["main saint", "main street", "main"]
        );
    }

    #[test]
    fn test_descriptor_kept_in_street() {
        assert_eq!(
            expand(FieldRole::Street, "Park Ave", &["en"]),
            vec!["park avenue", "park"]
        );
    }

    #[test]
    fn test_ordinal_street() {
        assert_eq!(
            expand(FieldRole::Street, "5th Ave", &["en"]),
            vec!["5th avenue", "5 avenue", "5th", "5"]
        );
    }

    #[test]
    fn test_root_drops_stopwords() {
        assert_eq!(
            expand(FieldRole::Street, "Rue de la Paix", &["fr"]),
            vec!["rue de la paix", "paix"]
        );
    }

    #[test]
    fn test_street_without_dictionary() {
        assert_eq!(expand(FieldRole::Street, "丁目", &["ja"]), vec!["丁目", "dingmu"]);
    }

    #[test]
    fn test_unit_root() {
        assert_eq!(expand(FieldRole::Unit, "Apt 3", &["en"]), vec!["3"]);
        assert_eq!(expand(FieldRole::Unit, "#12", &["en"]), vec!["12"]);
        assert_eq!(expand(FieldRole::Unit, "Suite", &["en"]), vec!["suite"]);
    }

    #[test]
    fn test_locality_uses_toponyms() {
        assert_eq!(expand(FieldRole::Locality, "New York", &["en"]), vec!["new york"]);
        assert_eq!(expand(FieldRole::Locality, "NYC", &["en"]), vec!["new york"]);
        assert_eq!(expand(FieldRole::Locality, "東京", &["ja"]), vec!["東京", "dongjing"]);
    }

    #[test]
    fn test_codes_are_normalized_only() {
        assert_eq!(expand(FieldRole::PostalCode, "150-0042", &["ja"]), vec!["150-0042"]);
        assert_eq!(expand(FieldRole::HouseNumber, " 23 ", &["en"]), vec!["23"]);
    }

    #[test]
    fn test_name_role_gives_keys() {
        assert_eq!(
            expand(FieldRole::Name, "IV", &["en"]),
            vec!["AF", "iv", "4"]
        );
    }

    #[test]
    fn test_products_order() {
        let segment = |texts: &[&str]| Segment {
            readings: texts
                .iter()
                .map(|t| Reading {
                    text: t.to_string(),
                    kind: None,
                })
                .collect(),
            stopword: false,
        };
        let segments = vec![segment(&["a", "b"]), segment(&["x", "y"])];
        assert_eq!(
            products(&segments, 10),
            vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
        );
        assert_eq!(products(&segments, 3).len(), 3);
    }

    #[test]
    fn test_roles() {
        assert_eq!(FieldRole::of(ComponentLabel::Suburb), Some(FieldRole::Locality));
        assert_eq!(FieldRole::of(ComponentLabel::Country), None);
        assert_eq!(FieldRole::Street.components(), AddressComponents::STREET);
    }
}
