//! Insertion-ordered key/value bag attached to every [`StructuredError`].
//!
//! Inserting a key that already exists overwrites the value in place, so the
//! entry keeps the position of its first insertion. Equality compares content
//! only: two maps holding the same entries are equal regardless of the order
//! in which they were filled.
//!
//! [`StructuredError`]: crate::StructuredError
use alloc::string::String;
use core::fmt::{self, Display};

use crate::types::{ContextValue, ErrorVec};

/// Ordered mapping from context key to [`ContextValue`].
///
/// Storage is a [`SmallVec`](smallvec::SmallVec) with linear lookups: error
/// contexts hold a handful of entries, and keeping them in a flat vector
/// preserves the order in which they were attached.
///
/// # Examples
///
/// ```
/// use fuzzy_search_error::ContextMap;
///
/// let mut ctx = ContextMap::new();
/// ctx.insert("retry", 1);
/// ctx.insert("table", "users");
/// ctx.insert("retry", 2);
///
/// assert_eq!(ctx.len(), 2);
/// assert_eq!(ctx.get("retry").and_then(|v| v.as_i64()), Some(2));
/// assert_eq!(ctx.keys().collect::<Vec<_>>(), ["retry", "table"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContextMap {
    entries: ErrorVec<(String, ContextValue)>,
}

impl ContextMap {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self { entries: ErrorVec::new() }
    }

    /// Creates an empty map with room for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: ErrorVec::with_capacity(capacity) }
    }

    /// Inserts or overwrites `key`, returning the previous value if any.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<ContextValue>
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(idx) => Some(core::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((key, value));
                None
            },
        }
    }

    /// Returns the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.position(key).map(|idx| &self.entries[idx].1)
    }

    /// Returns a mutable reference to the value stored under `key`.
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut ContextValue> {
        self.position(key).map(move |idx| &mut self.entries[idx].1)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Removes `key`, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<ContextValue> {
        self.position(key).map(|idx| self.entries.remove(idx).1)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates entries in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.entries.iter() }
    }

    /// Iterates keys in insertion order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates values in insertion order.
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &ContextValue> + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Inserts every entry of `other`, overwriting keys already present.
    pub fn merge(&mut self, other: ContextMap) {
        for (key, value) in other {
            self.insert(key, value);
        }
    }

    #[inline]
    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl PartialEq for ContextMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Display for ContextMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}

/// Borrowing iterator over `(key, value)` pairs in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: core::slice::Iter<'a, (String, ContextValue)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a ContextValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k.as_str(), v))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ContextMap {
    type Item = (&'a str, &'a ContextValue);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ContextMap {
    type Item = (String, ContextValue);
    type IntoIter = smallvec::IntoIter<[(String, ContextValue); 1]>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> Extend<(K, V)> for ContextMap
where
    K: Into<String>,
    V: Into<ContextValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ContextMap
where
    K: Into<String>,
    V: Into<ContextValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ContextMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ContextMap
where
    K: Into<String>,
    V: Into<ContextValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::ContextMap;
    use crate::types::ContextValue;
    use alloc::string::String;
    use core::fmt;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for ContextMap {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }

    struct ContextMapVisitor;

    impl<'de> Visitor<'de> for ContextMapVisitor {
        type Value = ContextMap;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of context entries")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut map = ContextMap::with_capacity(access.size_hint().unwrap_or(0).min(16));
            while let Some((key, value)) = access.next_entry::<String, ContextValue>()? {
                map.insert(key, value);
            }
            Ok(map)
        }
    }

    impl<'de> Deserialize<'de> for ContextMap {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(ContextMapVisitor)
        }
    }
}
