//! The near-dupe engine: language detection, field expansion and key
//! composition over one resource bundle.
//!
//! [`NearDupe`] owns no global state and can be shared across threads. The
//! crate-level functions wrap a process-wide instance (see
//! [`crate::runtime`]).
//!
//! ```
//! use neardupe::component::LabeledComponent;
//! use neardupe::near_dupe::NearDupe;
//! use neardupe::options::NearDupeHashOptions;
//!
//! let engine = NearDupe::builtin().unwrap();
//! let components = vec![
//!     LabeledComponent::new("house_number", "42"),
//!     LabeledComponent::new("road", "Main St"),
//!     LabeledComponent::new("postcode", "97201"),
//! ];
//! let mut options = NearDupeHashOptions::none();
//! options.with_address = true;
//! options.with_postal_code = true;
//! options.address_only_keys = true;
//!
//! let keys = engine.hashes(&components, &options, None).unwrap();
//! assert_eq!(keys[0], "apc|main saint|42|97201");
//! ```

use std::sync::Arc;

use log::{debug, warn};

use crate::component::{ComponentLabel, LabeledComponent, find_value};
use crate::error::{NearDupeError, Result};
use crate::expander::{FieldRole, VariantExpander};
use crate::geohash;
use crate::hashkey::{FieldVariants, HashKeyComposer, KeySlot};
use crate::language::LanguageDetector;
use crate::options::{NearDupeHashOptions, NormalizeOptions};
use crate::resources::Resources;
use crate::variant::{MAX_FIELD_VARIANTS, VariantSet};

/// Labels whose values stand in for the city, in order of preference.
const CITY_EQUIVALENTS: [ComponentLabel; 4] = [
    ComponentLabel::City,
    ComponentLabel::CityDistrict,
    ComponentLabel::Suburb,
    ComponentLabel::Island,
];

const CONTAINING_BOUNDARIES: [ComponentLabel; 1] = [ComponentLabel::StateDistrict];

pub struct NearDupe {
    resources: Arc<Resources>,
    expander: VariantExpander,
}

impl NearDupe {
    pub fn new(resources: Arc<Resources>) -> Result<Self> {
        Ok(NearDupe {
            resources,
            expander: VariantExpander::new()?,
        })
    }

    /// An engine over the compiled-in resources.
    pub fn builtin() -> Result<Self> {
        Self::new(Arc::new(Resources::builtin()?))
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Languages of `components`, most likely first.
    pub fn detect_languages(&self, components: &[LabeledComponent]) -> Result<Vec<String>> {
        if components.is_empty() {
            return Err(NearDupeError::EmptyInput);
        }
        Ok(LanguageDetector::new(&self.resources).detect(components))
    }

    /// Phonetic and n-gram keys of a venue name.
    ///
    /// The name's languages are `options.languages`, or detected from the
    /// text when that is empty.
    pub fn name_hashes(&self, name: &str, options: &NormalizeOptions) -> Result<Vec<String>> {
        let languages = if options.languages.is_empty() {
            LanguageDetector::new(&self.resources).detect_text(name)
        } else {
            options.languages.clone()
        };
        let keys = self
            .expander
            .name_keys(&self.resources, name, options, &languages)?;
        Ok(keys.into_vec())
    }

    /// Near-dupe keys of a labeled place.
    ///
    /// `languages` overrides detection when given and non-empty. Fields
    /// that fail to expand, and an out-of-range lat/lon, only remove the
    /// keys that need them.
    pub fn hashes(
        &self,
        components: &[LabeledComponent],
        options: &NearDupeHashOptions,
        languages: Option<&[String]>,
    ) -> Result<Vec<String>> {
        if components.is_empty() {
            return Err(NearDupeError::EmptyInput);
        }
        let languages: Vec<String> = match languages {
            Some(languages) if !languages.is_empty() => languages.to_vec(),
            _ => LanguageDetector::new(&self.resources).detect(components),
        };

        let fields = self.field_variants(components, options, &languages)?;
        let keys = HashKeyComposer::new(options.clone()).keys(&fields);
        debug!("{} keys for languages {:?}", keys.len(), languages);
        Ok(keys)
    }

    fn field_variants(
        &self,
        components: &[LabeledComponent],
        options: &NearDupeHashOptions,
        languages: &[String],
    ) -> Result<FieldVariants> {
        let mut fields = FieldVariants::new();
        let single = |label: ComponentLabel, role: FieldRole| -> Result<VariantSet> {
            match find_value(components, label) {
                Some(value) => self.expand_field(role, value, languages),
                None => Ok(VariantSet::new()),
            }
        };

        if options.with_name {
            fields.insert(KeySlot::Name, single(ComponentLabel::House, FieldRole::Name)?);
        }
        if options.with_address {
            fields.insert(KeySlot::Street, single(ComponentLabel::Road, FieldRole::Street)?);
            fields.insert(
                KeySlot::HouseNumber,
                single(ComponentLabel::HouseNumber, FieldRole::HouseNumber)?,
            );
        }
        if options.with_unit {
            fields.insert(KeySlot::Unit, single(ComponentLabel::Unit, FieldRole::Unit)?);
        }
        if options.with_latlon {
            match geohash::cells(options.latitude, options.longitude, options.geohash_precision) {
                Ok(cells) => fields.insert(KeySlot::Geohash, cells),
                Err(e) => warn!("skipping geohash keys: {}", e),
            }
        }
        if options.with_city_or_equivalent {
            fields.insert(
                KeySlot::City,
                self.union(components, &CITY_EQUIVALENTS, languages)?,
            );
        }
        if options.with_small_containing_boundaries {
            fields.insert(
                KeySlot::ContainingBoundary,
                self.union(components, &CONTAINING_BOUNDARIES, languages)?,
            );
        }
        if options.with_postal_code {
            fields.insert(
                KeySlot::PostalCode,
                single(ComponentLabel::Postcode, FieldRole::PostalCode)?,
            );
        }
        Ok(fields)
    }

    /// Locality variants of every label in `labels`, in label order.
    fn union(
        &self,
        components: &[LabeledComponent],
        labels: &[ComponentLabel],
        languages: &[String],
    ) -> Result<VariantSet> {
        let mut variants = VariantSet::with_limit(MAX_FIELD_VARIANTS);
        for &label in labels {
            if let Some(value) = find_value(components, label) {
                variants.extend(self.expand_field(FieldRole::Locality, value, languages)?);
            }
        }
        Ok(variants)
    }

    /// Expand one field, turning malformed input into an empty set.
    fn expand_field(&self, role: FieldRole, value: &str, languages: &[String]) -> Result<VariantSet> {
        match self.expander.expand(&self.resources, role, value, languages) {
            Ok(variants) => Ok(variants),
            Err(e) if e.is_input_error() => {
                warn!("dropping {:?} field: {}", role, e);
                Ok(VariantSet::new())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(pairs: &[(&str, &str)]) -> Vec<LabeledComponent> {
        pairs
            .iter()
            .map(|(l, v)| LabeledComponent::new(*l, *v))
            .collect()
    }

    fn address_options() -> NearDupeHashOptions {
        let mut options = NearDupeHashOptions::none();
        options.with_address = true;
        options.with_city_or_equivalent = true;
        options.address_only_keys = true;
        options
    }

    #[test]
    fn test_empty_input() {
        let engine = NearDupe::builtin().unwrap();
        assert!(matches!(
            engine.hashes(&[], &NearDupeHashOptions::default(), None),
            Err(NearDupeError::EmptyInput)
        ));
        assert!(matches!(
            engine.detect_languages(&[]),
            Err(NearDupeError::EmptyInput)
        ));
    }

    #[test]
    fn test_city_equivalents_are_unioned() {
        let engine = NearDupe::builtin().unwrap();
        let place = components(&[
            ("house_number", "9"),
            ("road", "Oak Rd"),
            ("suburb", "Hillcrest"),
            ("city", "Springfield"),
        ]);
        let keys = engine.hashes(&place, &address_options(), None).unwrap();
        assert_eq!(
            keys,
            vec![
                "act|oak road|9|springfield",
                "act|oak road|9|hillcrest",
                "act|oak|9|springfield",
                "act|oak|9|hillcrest",
            ]
        );
    }

    #[test]
    fn test_containing_boundary() {
        let engine = NearDupe::builtin().unwrap();
        let place = components(&[
            ("house_number", "9"),
            ("road", "Oak"),
            ("state_district", "Kent"),
        ]);
        let mut options = NearDupeHashOptions::none();
        options.with_address = true;
        options.with_small_containing_boundaries = true;
        options.address_only_keys = true;
        let keys = engine.hashes(&place, &options, None).unwrap();
        assert_eq!(keys, vec!["acb|oak|9|kent"]);
    }

    #[test]
    fn test_bad_field_only_drops_its_keys() {
        let engine = NearDupe::builtin().unwrap();
        let place = components(&[
            ("house_number", "9"),
            ("road", "Oak"),
            ("city", "Spring\u{FFFD}field"),
            ("postcode", "12345"),
        ]);
        let mut options = address_options();
        options.with_postal_code = true;
        let keys = engine.hashes(&place, &options, None).unwrap();
        assert_eq!(keys, vec!["apc|oak|9|12345"]);
    }

    #[test]
    fn test_invalid_latlon_keeps_other_shapes() {
        let engine = NearDupe::builtin().unwrap();
        let place = components(&[("house_number", "9"), ("road", "Oak"), ("city", "Kent")]);
        let options = address_options().with_latlon(95.0, 0.0, 6);
        let keys = engine.hashes(&place, &options, None).unwrap();
        assert_eq!(keys, vec!["act|oak|9|kent"]);
    }

    #[test]
    fn test_explicit_languages_win() {
        let engine = NearDupe::builtin().unwrap();
        let place = components(&[("house_number", "15"), ("road", "Rue de la Paix"), ("city", "Paris")]);
        let fr = vec!["fr".to_string()];
        let keys = engine.hashes(&place, &address_options(), Some(&fr)).unwrap();
        assert_eq!(keys, vec!["act|rue de la paix|15|paris", "act|paix|15|paris"]);
    }

    #[test]
    fn test_long_name_keys_are_capped() {
        let engine = NearDupe::builtin().unwrap();
        let place = components(&[
            (
                "house",
                "Bartholomew Fitzgerald Worthington Kensington Rutherford Montgomery",
            ),
            ("postcode", "12345"),
        ]);
        let mut options = NearDupeHashOptions::none();
        options.with_name = true;
        options.with_postal_code = true;
        options.name_only_keys = true;
        let keys = engine.hashes(&place, &options, None).unwrap();
        assert_eq!(keys.len(), MAX_FIELD_VARIANTS);
        assert!(keys.iter().all(|k| k.starts_with("npc|") && k.ends_with("|12345")));
    }

    #[test]
    fn test_name_hashes_detect_language() {
        let engine = NearDupe::builtin().unwrap();
        let keys = engine
            .name_hashes("Central Park", &NormalizeOptions::default())
            .unwrap();
        assert_eq!(keys, vec!["SNTR", "NTRL", "cent", "entr", "ntra", "tral", "KP"]);
    }

    #[test]
    fn test_name_hashes_invalid_encoding() {
        let engine = NearDupe::builtin().unwrap();
        assert!(matches!(
            engine.name_hashes("a\0b", &NormalizeOptions::default()),
            Err(NearDupeError::InvalidEncoding(_))
        ));
    }
}
