//! The plain map behaviour of [`SliceMap`], forwarded to the wrapped
//! [`IndexMap`].
use super::SliceMap;
use crate::internal::*;
use indexmap::map::{IntoIter, IntoValues, Iter, IterMut, Keys, Values as ValueIter, ValuesMut};
use std::fmt;
use std::ops::Index;

impl<K, V> SliceMap<K, V> {
    #[must_use]
    pub fn new() -> SliceMap<K, V> {
        SliceMap {
            entries: IndexMap::new(),
            hook: None,
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> SliceMap<K, V> {
        SliceMap {
            entries: IndexMap::with_capacity(capacity),
            hook: None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        self.entries.keys()
    }

    pub fn values(&self) -> ValueIter<'_, K, V> {
        self.entries.values()
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        self.entries.values_mut()
    }

    pub fn into_values(self) -> IntoValues<K, V> {
        self.entries.into_values()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.entries.iter_mut()
    }
}

impl<K: MapKey, V> SliceMap<K, V> {
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn value(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn value_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Insert a single entry, through the entry hook if any. An existing
    /// key keeps its position, and its old value is returned.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, Error> {
        let (key, value) = match self.hook {
            Some(hook) => hook.apply(key, value)?,
            None => (key, value),
        };
        Ok(self.entries.insert(key, value))
    }

    /// Remove a single entry, keeping the order of the rest
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.shift_remove(key)
    }

    /// Insert all `pairs`, or none of them if the entry hook refuses one
    pub fn try_extend<I>(&mut self, pairs: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs = self.screen(pairs)?;
        self.entries.extend(pairs);
        Ok(())
    }
}

impl<K, V> Default for SliceMap<K, V> {
    fn default() -> Self {
        SliceMap::new()
    }
}

// Like any other map, equality ignores order
impl<K: MapKey, V: PartialEq> PartialEq for SliceMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: MapKey, V: Eq> Eq for SliceMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SliceMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: MapKey, V> Index<&K> for SliceMap<K, V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not present
    fn index(&self, key: &K) -> &V {
        &self.entries[key]
    }
}

impl<K: MapKey, V> FromIterator<(K, V)> for SliceMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        SliceMap {
            entries: iter.into_iter().collect(),
            hook: None,
        }
    }
}

impl<K: MapKey, V, const N: usize> From<[(K, V); N]> for SliceMap<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> IntoIterator for SliceMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a SliceMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut SliceMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}

// ----- T E S T S ------------------------------------------------------------------
