//! Ordered sets of distinct string variants.

use std::ops::Index;

use ahash::AHashSet;

/// Upper bound on the number of variants kept for one field.
///
/// Key composition takes the Cartesian product of per-field variant sets,
/// so every set is capped here before it reaches the composer.
pub const MAX_FIELD_VARIANTS: usize = 32;

/// An ordered sequence of unique, non-empty strings.
///
/// Insertion order is expansion priority and is preserved all the way into
/// key composition.
///
/// ```
/// use neardupe::variant::VariantSet;
///
/// let mut set = VariantSet::new();
/// assert!(set.push("main street"));
/// assert!(set.push("main"));
/// assert!(!set.push("main street"));
/// assert!(!set.push("   "));
/// assert_eq!(set.as_slice(), ["main street", "main"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VariantSet {
    items: Vec<String>,
    seen: AHashSet<String>,
    limit: Option<usize>,
}

impl VariantSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set that silently ignores pushes once `limit` entries are held.
    pub fn with_limit(limit: usize) -> Self {
        VariantSet {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Insert `value` (trimmed) unless it is empty, already present, or the set is full.
    ///
    /// Returns whether the value was added.
    pub fn push<S: AsRef<str>>(&mut self, value: S) -> bool {
        let value = value.as_ref().trim();
        if value.is_empty() || self.is_full() || self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_string());
        self.items.push(value.to_string());
        true
    }

    /// Push every item of `values` in order.
    pub fn extend<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for value in values {
            self.push(value);
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.items.len() >= limit)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Keep at most `len` entries.
    pub fn truncate(&mut self, len: usize) {
        for dropped in self.items.drain(len.min(self.items.len())..) {
            self.seen.remove(&dropped);
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl Index<usize> for VariantSet {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.items[index]
    }
}

impl PartialEq for VariantSet {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<S: AsRef<str>> FromIterator<S> for VariantSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = VariantSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for VariantSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
