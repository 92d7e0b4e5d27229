//! The two-level maps backing the forward and reverse indices of a [`Graph`](crate::Graph).
use indexmap::IndexMap;
use trove_term::Term;

/// The values of each property of one key, in first-insertion order.
pub type PropertyMap = IndexMap<Box<str>, Vec<Term>>;

/// key → property → ordered values, with duplicate values suppressed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Index {
    map: IndexMap<Box<str>, PropertyMap>,
    len: usize,
}

impl Index {
    /// All the properties of `key`.
    pub fn properties(&self, key: &str) -> Option<&PropertyMap> {
        self.map.get(key)
    }

    /// The values of `property` for `key`; empty if there is none.
    pub fn values(&self, key: &str, property: &str) -> &[Term] {
        self.map
            .get(key)
            .and_then(|props| props.get(property))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `key` has at least one value for `property`.
    pub fn contains(&self, key: &str, property: &str) -> bool {
        !self.values(key, property).is_empty()
    }

    /// Append `value`, unless an equal value is already there.
    ///
    /// Return whether the index has changed.
    pub fn insert(&mut self, key: &str, property: &str, value: Term) -> bool {
        let values = self
            .map
            .entry(key.into())
            .or_default()
            .entry(property.into())
            .or_default();
        if values.contains(&value) {
            return false;
        }
        values.push(value);
        self.len += 1;
        true
    }

    /// Remove every value of `property` for `key` satisfying `pred`,
    /// dropping the property and the key if they become empty.
    ///
    /// Return the removed values, in their original order.
    pub fn remove<F>(&mut self, key: &str, property: &str, mut pred: F) -> Vec<Term>
    where
        F: FnMut(&Term) -> bool,
    {
        let Some(props) = self.map.get_mut(key) else {
            return vec![];
        };
        let Some(values) = props.get_mut(property) else {
            return vec![];
        };
        let mut removed = vec![];
        values.retain(|v| {
            if pred(v) {
                removed.push(v.clone());
                false
            } else {
                true
            }
        });
        if values.is_empty() {
            props.shift_remove(property);
        }
        if props.is_empty() {
            self.map.shift_remove(key);
        }
        self.len -= removed.len();
        removed
    }

    /// Iterate over keys and their properties, in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyMap)> {
        self.map.iter().map(|(k, props)| (&k[..], props))
    }

    /// Iterate over the keys, in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(|k| &k[..])
    }

    /// The total number of values stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no value is stored.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
