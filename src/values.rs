use crate::Error;
use crate::SliceMap;

/// The right hand side of [`SliceMap::set`].
///
/// A single value goes with a single resolved key. Everything else is
/// paired positionally with the resolved keys, and must match them in
/// number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Values<V> {
    One(V),
    Many(Vec<V>),
}

impl<V> Values<V> {
    pub fn one(value: V) -> Values<V> {
        Values::One(value)
    }

    pub fn len(&self) -> usize {
        match self {
            Values::One(_) => 1,
            Values::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Line the values up for `keys` resolved keys.
    pub(crate) fn for_keys(self, keys: usize) -> Result<Vec<V>, Error> {
        match self {
            Values::One(value) if keys == 1 => Ok(vec![value]),
            Values::One(_) => Err(Error::ScalarValue { keys }),
            Values::Many(values) if values.len() == keys => Ok(values),
            Values::Many(values) => Err(Error::LengthMismatch {
                keys,
                values: values.len(),
            }),
        }
    }
}

impl<V> From<V> for Values<V> {
    fn from(value: V) -> Self {
        Values::One(value)
    }
}

impl<V> From<Vec<V>> for Values<V> {
    fn from(values: Vec<V>) -> Self {
        Values::Many(values)
    }
}

impl<V, const N: usize> From<[V; N]> for Values<V> {
    fn from(values: [V; N]) -> Self {
        Values::Many(Vec::from(values))
    }
}

/// A map contributes its values in its own order. Its keys are ignored.
impl<K, V> From<SliceMap<K, V>> for Values<V> {
    fn from(map: SliceMap<K, V>) -> Self {
        Values::Many(map.into_values().collect())
    }
}

impl<V> FromIterator<V> for Values<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Values::Many(iter.into_iter().collect())
    }
}

// ----- T E S T S ------------------------------------------------------------------
