//! Hash key shapes and their composition.
//!
//! A key is a type code followed by one value per field, joined with `|`:
//! `act|main street|42|portland`. The type code spells out which fields the
//! key combines: `n` for name, `a` for address (road + house number), `u`
//! for unit, then the area (`gh`, `ct`, `cb`, `pc`).

use std::fmt;

use ahash::AHashMap;
use log::debug;

use crate::options::NearDupeHashOptions;
use crate::variant::VariantSet;

/// Separator between the type code and fields of a key.
pub const SEPARATOR: char = '|';

/// Where a field value goes in a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeySlot {
    Name,
    Street,
    HouseNumber,
    Unit,
    Geohash,
    City,
    ContainingBoundary,
    PostalCode,
}

/// The area a key is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Area {
    Geohash,
    City,
    ContainingBoundary,
    PostalCode,
}

impl Area {
    /// Emission order.
    pub const ALL: [Area; 4] = [
        Area::Geohash,
        Area::City,
        Area::ContainingBoundary,
        Area::PostalCode,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Area::Geohash => "gh",
            Area::City => "ct",
            Area::ContainingBoundary => "cb",
            Area::PostalCode => "pc",
        }
    }

    pub fn slot(self) -> KeySlot {
        match self {
            Area::Geohash => KeySlot::Geohash,
            Area::City => KeySlot::City,
            Area::ContainingBoundary => KeySlot::ContainingBoundary,
            Area::PostalCode => KeySlot::PostalCode,
        }
    }

    fn enabled(self, options: &NearDupeHashOptions) -> bool {
        match self {
            Area::Geohash => options.with_latlon,
            Area::City => options.with_city_or_equivalent,
            Area::ContainingBoundary => options.with_small_containing_boundaries,
            Area::PostalCode => options.with_postal_code,
        }
    }
}

/// Which fields one family of keys combines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyShape {
    pub name: bool,
    pub address: bool,
    pub unit: bool,
    pub area: Area,
}

impl KeyShape {
    /// ```
    /// use neardupe::hashkey::{Area, KeyShape};
    ///
    /// let shape = KeyShape { name: false, address: true, unit: true, area: Area::City };
    /// assert_eq!(shape.type_code(), "auct");
    /// ```
    pub fn type_code(&self) -> String {
        let mut code = String::with_capacity(5);
        if self.name {
            code.push('n');
        }
        if self.address {
            code.push('a');
        }
        if self.unit {
            code.push('u');
        }
        code.push_str(self.area.code());
        code
    }

    /// Slots in key order.
    pub fn slots(&self) -> Vec<KeySlot> {
        let mut slots = Vec::with_capacity(5);
        if self.name {
            slots.push(KeySlot::Name);
        }
        if self.address {
            slots.push(KeySlot::Street);
            slots.push(KeySlot::HouseNumber);
        }
        if self.unit {
            slots.push(KeySlot::Unit);
        }
        slots.push(self.area.slot());
        slots
    }
}

/// A single near-dupe key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HashKey {
    pub type_code: String,
    pub fields: Vec<String>,
}

impl fmt::Display for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_code)?;
        for field in &self.fields {
            write!(f, "{SEPARATOR}{field}")?;
        }
        Ok(())
    }
}

/// Variant sets per slot, with the separator removed from every value.
#[derive(Clone, Debug, Default)]
pub struct FieldVariants {
    slots: AHashMap<KeySlot, VariantSet>,
}

impl FieldVariants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variants of `slot`; an empty set leaves the slot absent.
    pub fn insert(&mut self, slot: KeySlot, variants: VariantSet) {
        let cleaned: VariantSet = variants
            .iter()
            .map(|v| v.replace(SEPARATOR, ""))
            .collect();
        if cleaned.is_empty() {
            self.slots.remove(&slot);
        } else {
            self.slots.insert(slot, cleaned);
        }
    }

    pub fn get(&self, slot: KeySlot) -> Option<&VariantSet> {
        self.slots.get(&slot)
    }

    pub fn has(&self, slot: KeySlot) -> bool {
        self.slots.contains_key(&slot)
    }

    pub fn has_address(&self) -> bool {
        self.has(KeySlot::Street) && self.has(KeySlot::HouseNumber)
    }
}

/// Selects key shapes from options and expands them into keys.
#[derive(Clone, Debug)]
pub struct HashKeyComposer {
    options: NearDupeHashOptions,
}

impl HashKeyComposer {
    pub fn new(options: NearDupeHashOptions) -> Self {
        HashKeyComposer { options }
    }

    /// Shapes to emit for the available fields: name+address keys, then
    /// name-only keys, then address-only keys, each across the enabled areas.
    pub fn shapes(&self, fields: &FieldVariants) -> Vec<KeyShape> {
        let options = &self.options;
        let has_name = options.with_name && fields.has(KeySlot::Name);
        let has_address = options.with_address && fields.has_address();
        let unit = options.with_unit && fields.has(KeySlot::Unit);

        let mut families = Vec::with_capacity(3);
        if options.name_and_address_keys && has_name && has_address {
            families.push((true, true, unit));
        }
        if options.name_only_keys && has_name {
            families.push((true, false, false));
        }
        if options.address_only_keys && has_address {
            families.push((false, true, unit));
        }

        let mut shapes = Vec::new();
        for (name, address, unit) in families {
            for area in Area::ALL {
                if area.enabled(options) && fields.has(area.slot()) {
                    shapes.push(KeyShape {
                        name,
                        address,
                        unit,
                        area,
                    });
                }
            }
        }
        shapes
    }

    /// Every key of every shape, first slot varying slowest.
    pub fn compose(&self, fields: &FieldVariants, shapes: &[KeyShape]) -> Vec<HashKey> {
        let mut keys = Vec::new();
        for shape in shapes {
            let type_code = shape.type_code();
            let sets: Option<Vec<&VariantSet>> =
                shape.slots().into_iter().map(|slot| fields.get(slot)).collect();
            let Some(sets) = sets else {
                continue;
            };

            let before = keys.len();
            let mut choice = vec![0usize; sets.len()];
            'product: loop {
                keys.push(HashKey {
                    type_code: type_code.clone(),
                    fields: sets
                        .iter()
                        .zip(&choice)
                        .map(|(set, &i)| set[i].to_string())
                        .collect(),
                });
                let mut position = sets.len();
                loop {
                    if position == 0 {
                        break 'product;
                    }
                    position -= 1;
                    choice[position] += 1;
                    if choice[position] < sets[position].len() {
                        break;
                    }
                    choice[position] = 0;
                }
            }
            debug!("{} keys of shape {}", keys.len() - before, type_code);
        }
        keys
    }

    /// Shapes and keys in one go, rendered as strings.
    pub fn keys(&self, fields: &FieldVariants) -> Vec<String> {
        let shapes = self.shapes(fields);
        self.compose(fields, &shapes)
            .iter()
            .map(HashKey::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> VariantSet {
        values.iter().copied().collect()
    }

    fn address_fields() -> FieldVariants {
        let mut fields = FieldVariants::new();
        fields.insert(KeySlot::Street, set(&["main street", "main"]));
        fields.insert(KeySlot::HouseNumber, set(&["42"]));
        fields.insert(KeySlot::City, set(&["portland"]));
        fields.insert(KeySlot::PostalCode, set(&["97201"]));
        fields
    }

    #[test]
    fn test_address_keys() {
        let mut options = NearDupeHashOptions::none();
        options.with_address = true;
        options.with_city_or_equivalent = true;
        options.with_postal_code = true;
        options.address_only_keys = true;

        let keys = HashKeyComposer::new(options).keys(&address_fields());
        assert_eq!(
            keys,
            vec![
                "act|main street|42|portland",
                "act|main|42|portland",
                "apc|main street|42|97201",
                "apc|main|42|97201",
            ]
        );
    }

    #[test]
    fn test_family_order() {
        let mut fields = address_fields();
        fields.insert(KeySlot::Name, set(&["KF"]));
        let mut options = NearDupeHashOptions::none();
        options.with_name = true;
        options.with_address = true;
        options.with_postal_code = true;
        options.name_and_address_keys = true;
        options.name_only_keys = true;
        options.address_only_keys = true;

        let keys = HashKeyComposer::new(options).keys(&fields);
        assert_eq!(
            keys,
            vec![
                "napc|KF|main street|42|97201",
                "napc|KF|main|42|97201",
                "npc|KF|97201",
                "apc|main street|42|97201",
                "apc|main|42|97201",
            ]
        );
    }

    #[test]
    fn test_address_needs_house_number() {
        let mut fields = address_fields();
        fields.insert(KeySlot::HouseNumber, VariantSet::new());
        let mut options = NearDupeHashOptions::none();
        options.with_address = true;
        options.with_city_or_equivalent = true;
        options.address_only_keys = true;

        assert!(HashKeyComposer::new(options).keys(&fields).is_empty());
    }

    #[test]
    fn test_unit_only_when_present() {
        let mut options = NearDupeHashOptions::none();
        options.with_address = true;
        options.with_unit = true;
        options.with_city_or_equivalent = true;
        options.address_only_keys = true;
        let composer = HashKeyComposer::new(options);

        let mut fields = address_fields();
        assert_eq!(composer.shapes(&fields)[0].type_code(), "act");
        fields.insert(KeySlot::Unit, set(&["3"]));
        assert_eq!(composer.shapes(&fields)[0].type_code(), "auct");
        assert_eq!(composer.keys(&fields)[0], "auct|main street|42|3|portland");
    }

    #[test]
    fn test_separator_removed() {
        let mut fields = FieldVariants::new();
        fields.insert(KeySlot::City, set(&["a|b", "ab"]));
        assert_eq!(fields.get(KeySlot::City).unwrap().as_slice(), ["ab"]);
        fields.insert(KeySlot::PostalCode, set(&["|"]));
        assert!(!fields.has(KeySlot::PostalCode));
    }

    #[test]
    fn test_key_display() {
        let key = HashKey {
            type_code: "agh".to_string(),
            fields: vec!["5th avenue".to_string(), "350".to_string(), "dr5ru6".to_string()],
        };
        assert_eq!(key.to_string(), "agh|5th avenue|350|dr5ru6");
    }
}
