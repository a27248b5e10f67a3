//! # neardupe
//!
//! Near-duplicate hash keys for place names and addresses.
//!
//! Two records describing the same place, written differently
//! (`123 Main St` and `123 Main Street`), are very likely to share at least
//! one key, so deduplication can bucket records by key instead of comparing
//! every pair.
//!
//! ## Features
//!
//! - Normalization with abbreviation, ordinal, number word and Roman numeral variants
//! - Street, unit and locality expansion from per-language dictionaries
//! - Double Metaphone and 4-gram keys for venue names
//! - Script and lexicon based language detection
//! - Geohash cells with neighbors
//!
//! ```
//! let keys = neardupe::near_dupe_hashes(
//!     &["house_number", "road", "city", "postcode"],
//!     &["42", "Main St", "Portland", "97201"],
//!     &neardupe::NearDupeHashOptions {
//!         with_name: false,
//!         name_and_address_keys: false,
//!         address_only_keys: true,
//!         ..Default::default()
//!     },
//! )
//! .unwrap();
//! assert!(keys.contains(&"act|main street|42|portland".to_string()));
//! ```

pub mod analysis;
pub mod component;
pub mod error;
pub mod expander;
pub mod geohash;
pub mod hashkey;
pub mod language;
pub mod near_dupe;
pub mod normalizer;
pub mod options;
pub mod phonetic;
pub mod resources;
pub mod runtime;
pub mod variant;

use std::path::Path;

use log::warn;

pub use crate::component::{ComponentLabel, LabeledComponent};
pub use crate::error::{NearDupeError, Result};
pub use crate::near_dupe::NearDupe;
pub use crate::options::{AddressComponents, NearDupeHashOptions, NormalizeOptions};
pub use crate::runtime::{is_initialized, shutdown};

use crate::runtime::{contain, with_engine};

pub mod prelude {
    pub use crate::component::{ComponentLabel, LabeledComponent};
    pub use crate::error::{NearDupeError, Result};
    pub use crate::near_dupe::NearDupe;
    pub use crate::options::{AddressComponents, NearDupeHashOptions, NormalizeOptions};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load the linguistic resources. See [`runtime::initialize`].
pub fn initialize() -> bool {
    runtime::initialize()
}

/// Load the linguistic resources from a data directory.
pub fn initialize_from<P: AsRef<Path>>(dir: P) -> Result<()> {
    runtime::initialize_from(dir)
}

pub fn default_normalize_options() -> NormalizeOptions {
    NormalizeOptions::default()
}

pub fn default_near_dupe_hash_options() -> NearDupeHashOptions {
    NearDupeHashOptions::default()
}

/// Phonetic and n-gram keys of a venue name.
///
/// Malformed text gives an empty list.
pub fn normalize_name(text: &str, options: &NormalizeOptions) -> Result<Vec<String>> {
    with_engine(|engine| contain(engine.name_hashes(text, options)))
}

pub fn normalize_name_default(text: &str) -> Result<Vec<String>> {
    normalize_name(text, &NormalizeOptions::default())
}

/// [`normalize_name`] for raw bytes; invalid UTF-8 gives an empty list.
pub fn normalize_name_bytes(bytes: &[u8], options: &NormalizeOptions) -> Result<Vec<String>> {
    match std::str::from_utf8(bytes) {
        Ok(text) => normalize_name(text, options),
        Err(e) => with_engine(|_| {
            warn!("returning no results: invalid UTF-8: {}", e);
            Ok(Vec::new())
        }),
    }
}

/// Near-dupe keys for parallel label and value slices.
///
/// Mismatched lengths or no components give an empty list.
pub fn near_dupe_hashes<L, V>(
    labels: &[L],
    values: &[V],
    options: &NearDupeHashOptions,
) -> Result<Vec<String>>
where
    L: AsRef<str>,
    V: AsRef<str>,
{
    with_engine(|engine| {
        contain(
            LabeledComponent::from_pairs(labels, values)
                .and_then(|components| engine.hashes(&components, options, None)),
        )
    })
}

pub fn near_dupe_hashes_default<L, V>(labels: &[L], values: &[V]) -> Result<Vec<String>>
where
    L: AsRef<str>,
    V: AsRef<str>,
{
    near_dupe_hashes(labels, values, &NearDupeHashOptions::default())
}

/// [`near_dupe_hashes`] with the working languages given instead of detected.
pub fn near_dupe_hashes_languages<L, V, S>(
    labels: &[L],
    values: &[V],
    options: &NearDupeHashOptions,
    languages: &[S],
) -> Result<Vec<String>>
where
    L: AsRef<str>,
    V: AsRef<str>,
    S: AsRef<str>,
{
    let languages: Vec<String> = languages.iter().map(|l| l.as_ref().to_string()).collect();
    with_engine(|engine| {
        contain(
            LabeledComponent::from_pairs(labels, values)
                .and_then(|components| engine.hashes(&components, options, Some(&languages))),
        )
    })
}

/// Near-dupe keys for components, with optional working languages.
pub fn near_dupe_hashes_for(
    components: &[LabeledComponent],
    options: &NearDupeHashOptions,
    languages: Option<&[String]>,
) -> Result<Vec<String>> {
    with_engine(|engine| contain(engine.hashes(components, options, languages)))
}

/// Languages of parallel label and value slices, most likely first.
pub fn place_languages<L, V>(labels: &[L], values: &[V]) -> Result<Vec<String>>
where
    L: AsRef<str>,
    V: AsRef<str>,
{
    with_engine(|engine| {
        contain(
            LabeledComponent::from_pairs(labels, values)
                .and_then(|components| engine.detect_languages(&components)),
        )
    })
}

pub fn detect_languages(components: &[LabeledComponent]) -> Result<Vec<String>> {
    with_engine(|engine| contain(engine.detect_languages(components)))
}
