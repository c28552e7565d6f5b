use crate::Error;
use std::fmt;

/// A function called for every single key write into a
/// [`SliceMap`](crate::SliceMap), after list-, slice- and mask-subscripts
/// have been expanded into single keys.
///
/// The hook may hand back a modified key and value, e.g. to normalize
/// them, or refuse the write with an error (conventionally
/// [`Error::Rejected`]). For multi-key writes, the hook is run for every
/// pair before the first one is stored, so a refusal leaves the map
/// untouched.
pub struct EntryHook<K, V>(pub fn(K, V) -> Result<(K, V), Error>);

impl<K, V> EntryHook<K, V> {
    pub(crate) fn apply(&self, key: K, value: V) -> Result<(K, V), Error> {
        self.0(key, value)
    }
}

impl<K, V> Clone for EntryHook<K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for EntryHook<K, V> {}

impl<K, V> fmt::Debug for EntryHook<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryHook({:p})", self.0 as *const ())
    }
}

// ----- T E S T S ------------------------------------------------------------------
