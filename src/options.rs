//! Configuration bundles for normalization and near-dupe hashing.
//!
//! Both structs are plain values with `Default` impls carrying the stock
//! configuration; they deserialize from JSON with missing fields filled from
//! those defaults.
//!
//! ```
//! use neardupe::options::{NearDupeHashOptions, NormalizeOptions};
//!
//! let options: NearDupeHashOptions =
//!     serde_json::from_str(r#"{"with_unit": true, "address_only_keys": true}"#).unwrap();
//! assert!(options.with_unit);
//! assert!(options.with_address);
//! assert_eq!(options.geohash_precision, 6);
//!
//! assert!(NormalizeOptions::default().lowercase);
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Geohash precision used when none is configured.
pub const DEFAULT_GEOHASH_PRECISION: u32 = 6;

/// Bitmask of address component kinds a dictionary entry or field belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressComponents(pub u16);

impl AddressComponents {
    pub const NONE: Self = Self(0);
    pub const ANY: Self = Self(1 << 0);
    pub const NAME: Self = Self(1 << 1);
    pub const HOUSE_NUMBER: Self = Self(1 << 2);
    pub const STREET: Self = Self(1 << 3);
    pub const UNIT: Self = Self(1 << 4);
    pub const LEVEL: Self = Self(1 << 5);
    pub const STAIRCASE: Self = Self(1 << 6);
    pub const ENTRANCE: Self = Self(1 << 7);
    pub const CATEGORY: Self = Self(1 << 8);
    pub const NEAR: Self = Self(1 << 9);
    pub const TOPONYM: Self = Self(1 << 13);
    pub const POSTAL_CODE: Self = Self(1 << 14);
    pub const PO_BOX: Self = Self(1 << 15);
    pub const ALL: Self = Self(u16::MAX);

    /// Whether any bit is shared with `other`.
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether every bit of `other` is set.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for AddressComponents {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for AddressComponents {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for AddressComponents {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for AddressComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressComponents({:#06x})", self.0)
    }
}

/// Options controlling the normalizer and the variant expander.
///
/// Every flag is independent:
///
/// | option | effect |
/// |---|---|
/// | `languages` | working languages; empty means detect |
/// | `address_components` | which dictionary entries may be substituted |
/// | `latin_ascii` | fold Latin letters to ASCII (`ß→ss`, `ø→o`, accents) |
/// | `transliterate` | append a Latin transliteration for non-Latin scripts |
/// | `strip_accents` | remove combining marks |
/// | `decompose` | compatibility-normalize (NFKC) instead of NFC |
/// | `lowercase` | lowercase the text |
/// | `trim` | trim and collapse whitespace |
/// | `replace_word_hyphens` | `coca-cola` → `coca cola` |
/// | `delete_word_hyphens` | `coca-cola` → `cocacola` |
/// | `replace_numeric_hyphens` | `150-0042` → `150 0042` |
/// | `delete_numeric_hyphens` | `150-0042` → `1500042` |
/// | `split_alpha_from_numeric` | `6th` → `6 th`, `7eleven` → `7-eleven` |
/// | `delete_final_periods` | `st.` → `st` |
/// | `delete_acronym_periods` | `u.s.a.` → `usa` |
/// | `drop_english_possessives` | also emit `mcdonald` for `mcdonald's` |
/// | `delete_apostrophes` | `mcdonald's` → `mcdonalds` |
/// | `expand_numex` | `six` → `6`, `6th` → `6` |
/// | `roman_numerals` | also emit `4` for `iv` |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    pub languages: Vec<String>,
    pub address_components: AddressComponents,
    pub latin_ascii: bool,
    pub transliterate: bool,
    pub strip_accents: bool,
    pub decompose: bool,
    pub lowercase: bool,
    pub trim: bool,
    pub replace_word_hyphens: bool,
    pub delete_word_hyphens: bool,
    pub replace_numeric_hyphens: bool,
    pub delete_numeric_hyphens: bool,
    pub split_alpha_from_numeric: bool,
    pub delete_final_periods: bool,
    pub delete_acronym_periods: bool,
    pub drop_english_possessives: bool,
    pub delete_apostrophes: bool,
    pub expand_numex: bool,
    pub roman_numerals: bool,
}

impl NormalizeOptions {
    /// Options with every flag off and no component restriction.
    ///
    /// Useful as a base for callers that only want one or two transforms.
    pub fn none() -> Self {
        NormalizeOptions {
            languages: Vec::new(),
            address_components: AddressComponents::NONE,
            latin_ascii: false,
            transliterate: false,
            strip_accents: false,
            decompose: false,
            lowercase: false,
            trim: false,
            replace_word_hyphens: false,
            delete_word_hyphens: false,
            replace_numeric_hyphens: false,
            delete_numeric_hyphens: false,
            split_alpha_from_numeric: false,
            delete_final_periods: false,
            delete_acronym_periods: false,
            drop_english_possessives: false,
            delete_apostrophes: false,
            expand_numex: false,
            roman_numerals: false,
        }
    }

    /// Set the working languages.
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict dictionary substitution to the given components.
    pub fn with_components(mut self, components: AddressComponents) -> Self {
        self.address_components = components;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            languages: Vec::new(),
            address_components: AddressComponents::NAME
                | AddressComponents::HOUSE_NUMBER
                | AddressComponents::STREET
                | AddressComponents::PO_BOX
                | AddressComponents::UNIT
                | AddressComponents::LEVEL
                | AddressComponents::ENTRANCE
                | AddressComponents::STAIRCASE
                | AddressComponents::POSTAL_CODE,
            latin_ascii: true,
            transliterate: true,
            strip_accents: true,
            decompose: true,
            lowercase: true,
            trim: true,
            replace_word_hyphens: true,
            delete_word_hyphens: true,
            replace_numeric_hyphens: false,
            delete_numeric_hyphens: false,
            split_alpha_from_numeric: true,
            delete_final_periods: true,
            delete_acronym_periods: true,
            drop_english_possessives: true,
            delete_apostrophes: true,
            expand_numex: true,
            roman_numerals: true,
        }
    }
}

/// Options selecting which key shapes the near-dupe hasher emits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NearDupeHashOptions {
    /// Include the venue/building name (`house` label).
    pub with_name: bool,
    /// Include road + house number.
    pub with_address: bool,
    /// Include the unit.
    pub with_unit: bool,
    /// Emit keys against the city or an equivalent locality.
    pub with_city_or_equivalent: bool,
    /// Emit keys against small containing boundaries.
    pub with_small_containing_boundaries: bool,
    /// Emit keys against the postal code.
    pub with_postal_code: bool,
    /// Emit keys against the geohash cell of (`latitude`, `longitude`) and its neighbors.
    pub with_latlon: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub geohash_precision: u32,
    /// Emit keys combining name and address.
    pub name_and_address_keys: bool,
    /// Emit keys using the name without the address.
    pub name_only_keys: bool,
    /// Emit keys using the address without the name.
    pub address_only_keys: bool,
}

impl NearDupeHashOptions {
    /// Options with every axis off; build up from here.
    pub fn none() -> Self {
        NearDupeHashOptions {
            with_name: false,
            with_address: false,
            with_unit: false,
            with_city_or_equivalent: false,
            with_small_containing_boundaries: false,
            with_postal_code: false,
            with_latlon: false,
            latitude: 0.0,
            longitude: 0.0,
            geohash_precision: DEFAULT_GEOHASH_PRECISION,
            name_and_address_keys: false,
            name_only_keys: false,
            address_only_keys: false,
        }
    }

    /// Enable the lat/lon axis at the given point.
    pub fn with_latlon(mut self, latitude: f64, longitude: f64, precision: u32) -> Self {
        self.with_latlon = true;
        self.latitude = latitude;
        self.longitude = longitude;
        self.geohash_precision = precision;
        self
    }
}

impl Default for NearDupeHashOptions {
    fn default() -> Self {
        NearDupeHashOptions {
            with_name: true,
            with_address: true,
            with_unit: false,
            with_city_or_equivalent: true,
            with_small_containing_boundaries: true,
            with_postal_code: true,
            with_latlon: false,
            latitude: 0.0,
            longitude: 0.0,
            geohash_precision: DEFAULT_GEOHASH_PRECISION,
            name_and_address_keys: true,
            name_only_keys: false,
            address_only_keys: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_normalize_options() {
        let options = NormalizeOptions::default();
        assert!(options.languages.is_empty());
        assert!(options.latin_ascii);
        assert!(options.delete_word_hyphens);
        assert!(!options.replace_numeric_hyphens);
        assert!(!options.delete_numeric_hyphens);
        assert!(options.address_components.contains(AddressComponents::STREET));
        assert!(!options.address_components.intersects(AddressComponents::TOPONYM));
    }

    #[test]
    fn test_default_hash_options() {
        let options = NearDupeHashOptions::default();
        assert!(options.with_name && options.with_address);
        assert!(!options.with_unit && !options.with_latlon);
        assert!(options.name_and_address_keys);
        assert!(!options.name_only_keys && !options.address_only_keys);
        assert_eq!(options.geohash_precision, DEFAULT_GEOHASH_PRECISION);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: NormalizeOptions =
            serde_json::from_str(r#"{"lowercase": false, "languages": ["fr"]}"#).unwrap();
        assert!(!options.lowercase);
        assert_eq!(options.languages, vec!["fr".to_string()]);
        assert!(options.strip_accents);
    }

    #[test]
    fn test_component_mask_ops() {
        let mask = AddressComponents::STREET | AddressComponents::NAME;
        assert!(mask.intersects(AddressComponents::NAME));
        assert!(!mask.intersects(AddressComponents::UNIT));
        assert!(AddressComponents::ALL.contains(mask));
        assert!((mask & AddressComponents::UNIT).is_empty());
    }
}
