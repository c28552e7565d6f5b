use crate::internal::*;
use crate::strategy::resolve;
use crate::subscript::classify;

mod passthrough;

// ----- T H E   S L I C E   M A P ----------------------------------------------------

/// An insertion ordered map, which in addition to plain keys may be
/// subscripted by lists of keys, by slices over its iteration order, and by
/// boolean masks.
///
/// All the ordinary map functionality (iteration, length, membership,
/// single key insertion and removal, equality) is forwarded unchanged to
/// the wrapped [`IndexMap`]. The extended subscripting is implemented by
/// [`get`](SliceMap::get), [`set`](SliceMap::set) and
/// [`delete`](SliceMap::delete).
#[derive(Clone)]
pub struct SliceMap<K, V> {
    pub(crate) entries: IndexMap<K, V>,
    pub(crate) hook: Option<EntryHook<K, V>>,
}

/// The result of [`SliceMap::get`]: the stored value itself for a plain
/// key, a new map for every other kind of subscript.
#[derive(Debug)]
pub enum Selection<'a, K, V> {
    Value(&'a V),
    Map(SliceMap<K, V>),
}

impl<'a, K, V> Selection<'a, K, V> {
    pub fn value(&self) -> Option<&'a V> {
        match self {
            Selection::Value(value) => Some(*value),
            Selection::Map(_) => None,
        }
    }

    pub fn into_map(self) -> Option<SliceMap<K, V>> {
        match self {
            Selection::Value(_) => None,
            Selection::Map(map) => Some(map),
        }
    }
}

impl<'a, K: MapKey, V: PartialEq> PartialEq for Selection<'a, K, V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Selection::Value(a), Selection::Value(b)) => a == b,
            (Selection::Map(a), Selection::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl<K, V> SliceMap<K, V> {
    /// An empty map, passing every write through `hook`
    #[must_use]
    pub fn with_hook(hook: EntryHook<K, V>) -> SliceMap<K, V> {
        SliceMap {
            entries: IndexMap::new(),
            hook: Some(hook),
        }
    }

    pub fn hook(&self) -> Option<EntryHook<K, V>> {
        self.hook
    }

    /// Install or remove the entry hook. Entries already present are not
    /// revisited.
    pub fn set_hook(&mut self, hook: Option<EntryHook<K, V>>) {
        self.hook = hook;
    }
}

impl<K: MapKey, V> SliceMap<K, V> {
    /// The value stored under `key`. The plain key case of
    /// [`get`](SliceMap::get), without the [`Selection`] wrapping.
    pub fn item(&self, key: &K) -> Result<&V, Error> {
        self.entries.get(key).ok_or_else(|| Error::missing([key]))
    }

    /// Store `values` under the keys `subscript` resolves to.
    ///
    /// Keys and values are paired positionally, and must match in number. A
    /// single value ([`Values::One`]) may be given when exactly one key is
    /// resolved. A key list may name new keys, which are appended in list
    /// order, while keys already present keep their position. Slices and
    /// masks only address keys already present, and never grow the map:
    /// if the entry hook rewrites such a key into an absent one, the write
    /// fails with [`Error::MissingKeys`].
    ///
    /// Nothing is written unless the whole assignment is valid.
    pub fn set(
        &mut self,
        subscript: impl Into<Subscript<K>>,
        values: impl Into<Values<V>>,
    ) -> Result<(), Error> {
        let selector = classify(subscript.into(), self.len())?;
        let positional = matches!(
            selector,
            Selector::RangeSlice(_) | Selector::BooleanMask(_)
        );
        let keys = resolve(selector, &self.entries)?;
        let values = values.into().for_keys(keys.len())?;
        let pairs = self.screen(keys.into_iter().zip(values))?;

        if positional {
            let absent: IndexSet<&K> = pairs
                .iter()
                .map(|(key, _)| key)
                .filter(|key| !self.entries.contains_key(*key))
                .collect();
            if !absent.is_empty() {
                return Err(Error::missing(absent));
            }
        }

        if pairs.len() > 1 {
            debug!("Writing {} entries", pairs.len());
        }
        self.entries.extend(pairs);
        Ok(())
    }

    /// Remove every key `subscript` resolves to. Absent keys are an error,
    /// and then nothing is removed.
    pub fn delete(&mut self, subscript: impl Into<Subscript<K>>) -> Result<(), Error> {
        let selector = classify(subscript.into(), self.len())?;
        let keys = resolve(selector, &self.entries)?;
        keys.ensure_present(&self.entries)?;

        let doomed = keys.distinct();
        if doomed.len() > 1 {
            debug!("Deleting {} entries", doomed.len());
        }
        self.entries.retain(|key, _| !doomed.contains(key));
        Ok(())
    }

    /// Replace all keys, position by position, keeping the values. As when
    /// building a map from pairs, a repeated key keeps its first position
    /// and its last value.
    pub fn rekey<I: IntoIterator<Item = K>>(&mut self, keys: I) -> Result<(), Error> {
        let keys: Vec<K> = keys.into_iter().collect();
        if keys.len() != self.len() {
            return Err(Error::LengthMismatch {
                keys: keys.len(),
                values: self.len(),
            });
        }
        let values = std::mem::take(&mut self.entries).into_values();
        self.entries = keys.into_iter().zip(values).collect();
        Ok(())
    }

    // Run the hook over all pairs, before any of them are written
    pub(crate) fn screen<I>(&self, pairs: I) -> Result<Vec<(K, V)>, Error>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let Some(hook) = self.hook else {
            return Ok(pairs.into_iter().collect());
        };
        pairs
            .into_iter()
            .map(|(key, value)| hook.apply(key, value))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                warn!("Write refused by entry hook: {err}");
                err
            })
    }
}

impl<K: MapKey, V: Clone> SliceMap<K, V> {
    /// Look up `subscript`.
    ///
    /// A plain key gives the value stored under it. Key lists, slices and
    /// boolean masks give a new map holding the selected entries, in
    /// selection order, and sharing the entry hook of `self`. Repeated keys
    /// in a key list are selected once, at their first position. Absent
    /// keys are an error, reporting all of them at once.
    pub fn get(&self, subscript: impl Into<Subscript<K>>) -> Result<Selection<'_, K, V>, Error> {
        match classify(subscript.into(), self.len())? {
            Selector::PlainKey(key) => Ok(Selection::Value(self.item(&key)?)),
            selector => self.pick(selector).map(Selection::Map),
        }
    }

    /// Like [`get`](SliceMap::get), but always giving a map: a plain key
    /// selects a map of one entry.
    pub fn select(&self, subscript: impl Into<Subscript<K>>) -> Result<SliceMap<K, V>, Error> {
        let selector = classify(subscript.into(), self.len())?;
        self.pick(selector)
    }

    fn pick(&self, selector: Selector<K>) -> Result<SliceMap<K, V>, Error> {
        let keys = resolve(selector, &self.entries)?;
        keys.ensure_present(&self.entries)?;

        let entries = keys
            .iter()
            .filter_map(|key| self.entries.get_key_value(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Ok(SliceMap {
            entries,
            hook: self.hook,
        })
    }
}

// ----- T E S T S ------------------------------------------------------------------
