use crate::internal::*;

/// The keys at the positions selected by `slice`, in slice order. The key
/// order is read from `entries` at call time.
pub(super) fn resolve<K: MapKey, V>(
    slice: &RangeSlice,
    entries: &IndexMap<K, V>,
) -> Result<Vec<K>, Error> {
    let keys = slice
        .indices(entries.len())?
        .into_iter()
        .filter_map(|i| entries.get_index(i))
        .map(|(key, _)| key.clone())
        .collect();
    Ok(keys)
}

// ----- T E S T S ------------------------------------------------------------------
