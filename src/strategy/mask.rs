use crate::internal::*;

/// The keys at every position where `flags` is set, in map order.
pub(super) fn resolve<K: MapKey, V>(
    flags: &[bool],
    entries: &IndexMap<K, V>,
) -> Result<Vec<K>, Error> {
    if flags.len() != entries.len() {
        return Err(Error::Unclassifiable(format!(
            "boolean mask of length {} for {} entries",
            flags.len(),
            entries.len()
        )));
    }

    let keys = entries
        .keys()
        .zip(flags)
        .filter(|(_, flag)| **flag)
        .map(|(key, _)| key.clone())
        .collect();
    Ok(keys)
}

// ----- T E S T S ------------------------------------------------------------------
