//! Latin-to-ASCII folding.

use super::CharFilter;
use super::mapping::{GERMAN_UMLAUT_MAPPING, LATIN_ASCII_MAPPING, MappingCharFilter};
use super::unicode_normalize::AccentStripCharFilter;
use crate::error::Result;

/// Folds Latin letters to ASCII: special letters are mapped, then accents stripped.
///
/// The German flavour spells umlauts out first, so `München` becomes
/// `Muenchen` instead of `Munchen`.
///
/// ```
/// use neardupe::analysis::char_filter::CharFilter;
/// use neardupe::analysis::char_filter::fold::LatinFoldCharFilter;
///
/// let fold = LatinFoldCharFilter::new().unwrap();
/// assert_eq!(fold.filter("Straße Ørsted"), "Strasse Orsted");
///
/// let german = LatinFoldCharFilter::german().unwrap();
/// assert_eq!(german.filter("München"), "Muenchen");
/// ```
pub struct LatinFoldCharFilter {
    umlauts: Option<MappingCharFilter>,
    letters: MappingCharFilter,
    accents: AccentStripCharFilter,
}

impl LatinFoldCharFilter {
    pub fn new() -> Result<Self> {
        Ok(LatinFoldCharFilter {
            umlauts: None,
            letters: MappingCharFilter::from_static(LATIN_ASCII_MAPPING)?,
            accents: AccentStripCharFilter::new(),
        })
    }

    pub fn german() -> Result<Self> {
        let mut fold = Self::new()?;
        fold.umlauts = Some(MappingCharFilter::from_static(GERMAN_UMLAUT_MAPPING)?);
        Ok(fold)
    }
}

impl CharFilter for LatinFoldCharFilter {
    fn filter(&self, input: &str) -> String {
        let text = match &self.umlauts {
            Some(umlauts) => umlauts.filter(input),
            None => input.to_string(),
        };
        self.accents.filter(&self.letters.filter(&text))
    }

    fn name(&self) -> &'static str {
        if self.umlauts.is_some() {
            "latin_fold_de"
        } else {
            "latin_fold"
        }
    }
}
