//! Resolution of a classified subscript into the ordered list of keys it
//! addresses. One strategy per [`Selector`] variant.
use crate::internal::*;

mod key_list;
mod mask;
mod plain;
mod range;

/// The keys a subscript resolved to, in resolution order.
///
/// Resolution alone never checks membership: a key list may name keys
/// which are yet to be inserted. Readers and deleters call
/// [`ResolvedKeys::ensure_present`] before touching anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKeys<K>(Vec<K>);

impl<K: MapKey> ResolvedKeys<K> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.0.iter()
    }

    /// Fail with all absent keys, de-duplicated and in request order
    pub fn ensure_present<V>(&self, entries: &IndexMap<K, V>) -> Result<(), Error> {
        let missing: IndexSet<&K> = self
            .0
            .iter()
            .filter(|key| !entries.contains_key(*key))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        Err(Error::missing(missing))
    }

    /// The distinct keys, in order of first appearance
    pub fn distinct(&self) -> IndexSet<&K> {
        self.0.iter().collect()
    }

    pub fn into_vec(self) -> Vec<K> {
        self.0
    }
}

impl<K> IntoIterator for ResolvedKeys<K> {
    type Item = K;
    type IntoIter = std::vec::IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Turn `selector` into the keys it addresses in `entries`
pub(crate) fn resolve<K: MapKey, V>(
    selector: Selector<K>,
    entries: &IndexMap<K, V>,
) -> Result<ResolvedKeys<K>, Error> {
    let keys = match selector {
        Selector::PlainKey(key) => plain::resolve(key),
        Selector::KeyList(keys) => key_list::resolve(keys),
        Selector::RangeSlice(slice) => range::resolve(&slice, entries)?,
        Selector::BooleanMask(flags) => mask::resolve(&flags, entries)?,
    };
    Ok(ResolvedKeys(keys))
}

// ----- T E S T S ------------------------------------------------------------------
