//! Keyed map type for object identifiers.
//!
//! [`ObjectMap`] wraps an [`IndexMap`] so that formatting follows insertion order
//! and is deterministic, while equality ignores order: two maps with the same
//! key/value pairs are equal however they were built.
//!
//! ## Examples
//!
//! ```rust
//! use thing_id::{ObjectMap, Scalar};
//!
//! let mut map = ObjectMap::new();
//! map.insert("location".to_string(), Scalar::from("London"));
//! map.insert("location".to_string(), Scalar::from("Paris"));
//!
//! assert_eq!(map.len(), 1);
//! assert_eq!(map.get("location").and_then(|v| v.as_str()), Some("Paris"));
//! ```

use crate::Scalar;
use indexmap::IndexMap;
use std::collections::HashMap;

/// A map of string keys to [`Scalar`] values. The last insert for a key wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectMap(IndexMap<String, Scalar>);

impl ObjectMap {
    /// Creates an empty `ObjectMap`.
    #[must_use]
    pub fn new() -> Self {
        ObjectMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ObjectMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced in place and
    /// the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thing_id::{ObjectMap, Scalar};
    ///
    /// let mut map = ObjectMap::new();
    /// assert!(map.insert("key".to_string(), Scalar::from("a")).is_none());
    /// assert!(map.insert("key".to_string(), Scalar::from("b")).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Scalar) -> Option<Scalar> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Scalar> {
        self.0.keys()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Scalar> {
        self.0.iter()
    }
}

impl From<HashMap<String, Scalar>> for ObjectMap {
    fn from(map: HashMap<String, Scalar>) -> Self {
        ObjectMap(map.into_iter().collect())
    }
}

impl From<ObjectMap> for HashMap<String, Scalar> {
    fn from(map: ObjectMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for ObjectMap {
    type Item = (String, Scalar);
    type IntoIter = indexmap::map::IntoIter<String, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ObjectMap {
    type Item = (&'a String, &'a Scalar);
    type IntoIter = indexmap::map::Iter<'a, String, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Scalar)> for ObjectMap {
    fn from_iter<T: IntoIterator<Item = (String, Scalar)>>(iter: T) -> Self {
        ObjectMap(IndexMap::from_iter(iter))
    }
}
