//! Labeled address components as produced by an address parser.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NearDupeError, Result};
use crate::options::AddressComponents;

/// The fixed label vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentLabel {
    House,
    Category,
    Near,
    HouseNumber,
    Road,
    Unit,
    Level,
    Staircase,
    Entrance,
    PoBox,
    Postcode,
    Suburb,
    CityDistrict,
    City,
    Island,
    StateDistrict,
    State,
    CountryRegion,
    Country,
    WorldRegion,
}

impl ComponentLabel {
    pub const ALL: [ComponentLabel; 20] = [
        ComponentLabel::House,
        ComponentLabel::Category,
        ComponentLabel::Near,
        ComponentLabel::HouseNumber,
        ComponentLabel::Road,
        ComponentLabel::Unit,
        ComponentLabel::Level,
        ComponentLabel::Staircase,
        ComponentLabel::Entrance,
        ComponentLabel::PoBox,
        ComponentLabel::Postcode,
        ComponentLabel::Suburb,
        ComponentLabel::CityDistrict,
        ComponentLabel::City,
        ComponentLabel::Island,
        ComponentLabel::StateDistrict,
        ComponentLabel::State,
        ComponentLabel::CountryRegion,
        ComponentLabel::Country,
        ComponentLabel::WorldRegion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentLabel::House => "house",
            ComponentLabel::Category => "category",
            ComponentLabel::Near => "near",
            ComponentLabel::HouseNumber => "house_number",
            ComponentLabel::Road => "road",
            ComponentLabel::Unit => "unit",
            ComponentLabel::Level => "level",
            ComponentLabel::Staircase => "staircase",
            ComponentLabel::Entrance => "entrance",
            ComponentLabel::PoBox => "po_box",
            ComponentLabel::Postcode => "postcode",
            ComponentLabel::Suburb => "suburb",
            ComponentLabel::CityDistrict => "city_district",
            ComponentLabel::City => "city",
            ComponentLabel::Island => "island",
            ComponentLabel::StateDistrict => "state_district",
            ComponentLabel::State => "state",
            ComponentLabel::CountryRegion => "country_region",
            ComponentLabel::Country => "country",
            ComponentLabel::WorldRegion => "world_region",
        }
    }

    /// Dictionary components that may be substituted inside a value with this label.
    pub fn address_components(self) -> AddressComponents {
        match self {
            ComponentLabel::House => AddressComponents::NAME,
            ComponentLabel::Category => AddressComponents::CATEGORY,
            ComponentLabel::Near => AddressComponents::NEAR,
            ComponentLabel::HouseNumber => AddressComponents::HOUSE_NUMBER,
            ComponentLabel::Road => AddressComponents::STREET,
            ComponentLabel::Unit => AddressComponents::UNIT,
            ComponentLabel::Level => AddressComponents::LEVEL,
            ComponentLabel::Staircase => AddressComponents::STAIRCASE,
            ComponentLabel::Entrance => AddressComponents::ENTRANCE,
            ComponentLabel::PoBox => AddressComponents::PO_BOX,
            ComponentLabel::Postcode => AddressComponents::POSTAL_CODE,
            ComponentLabel::Suburb
            | ComponentLabel::CityDistrict
            | ComponentLabel::City
            | ComponentLabel::Island
            | ComponentLabel::StateDistrict
            | ComponentLabel::State
            | ComponentLabel::CountryRegion
            | ComponentLabel::Country
            | ComponentLabel::WorldRegion => AddressComponents::TOPONYM,
        }
    }
}

impl fmt::Display for ComponentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentLabel {
    type Err = NearDupeError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        ComponentLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == normalized)
            .ok_or_else(|| NearDupeError::analysis(format!("unknown component label '{s}'")))
    }
}

/// A `{label, value}` pair. Values are raw text in any script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledComponent {
    pub label: String,
    pub value: String,
}

impl LabeledComponent {
    pub fn new<L: Into<String>, V: Into<String>>(label: L, value: V) -> Self {
        LabeledComponent {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The parsed label, or `None` for labels outside the vocabulary.
    pub fn kind(&self) -> Option<ComponentLabel> {
        self.label.parse().ok()
    }

    /// Zip parallel label/value slices into components.
    ///
    /// Fails on length mismatch or when there is nothing to zip.
    pub fn from_pairs<L, V>(labels: &[L], values: &[V]) -> Result<Vec<LabeledComponent>>
    where
        L: AsRef<str>,
        V: AsRef<str>,
    {
        if labels.len() != values.len() {
            return Err(NearDupeError::ArityMismatch {
                labels: labels.len(),
                values: values.len(),
            });
        }
        if labels.is_empty() {
            return Err(NearDupeError::EmptyInput);
        }
        Ok(labels
            .iter()
            .zip(values)
            .map(|(label, value)| LabeledComponent::new(label.as_ref(), value.as_ref()))
            .collect())
    }
}

/// First value for `label` among `components`, skipping blank values.
pub fn find_value(components: &[LabeledComponent], label: ComponentLabel) -> Option<&str> {
    components
        .iter()
        .filter(|c| c.kind() == Some(label))
        .map(|c| c.value.trim())
        .find(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for label in ComponentLabel::ALL {
            assert_eq!(label.as_str().parse::<ComponentLabel>().unwrap(), label);
        }
        assert_eq!(
            " House_Number ".parse::<ComponentLabel>().unwrap(),
            ComponentLabel::HouseNumber
        );
        assert!("planet".parse::<ComponentLabel>().is_err());
    }

    #[test]
    fn test_from_pairs_arity() {
        let err = LabeledComponent::from_pairs(&["road", "city"], &["Main St"]).unwrap_err();
        assert!(matches!(
            err,
            NearDupeError::ArityMismatch {
                labels: 2,
                values: 1
            }
        ));

        let empty: [&str; 0] = [];
        assert!(matches!(
            LabeledComponent::from_pairs(&empty, &empty).unwrap_err(),
            NearDupeError::EmptyInput
        ));
    }

    #[test]
    fn test_find_value_skips_blank_and_unknown() {
        let components = vec![
            LabeledComponent::new("city", "  "),
            LabeledComponent::new("galaxy", "Andromeda"),
            LabeledComponent::new("city", "Portland"),
        ];
        assert_eq!(find_value(&components, ComponentLabel::City), Some("Portland"));
        assert_eq!(find_value(&components, ComponentLabel::Road), None);
    }

    #[test]
    fn test_label_component_mask() {
        assert_eq!(
            ComponentLabel::Road.address_components(),
            AddressComponents::STREET
        );
        assert_eq!(
            ComponentLabel::Suburb.address_components(),
            AddressComponents::TOPONYM
        );
    }
}
