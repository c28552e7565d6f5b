use crate::internal::*;

mod slice;

pub use slice::RangeSlice;

/// The argument of [`SliceMap::get`](crate::SliceMap::get),
/// [`set`](crate::SliceMap::set) and [`delete`](crate::SliceMap::delete),
/// as handed over by the caller. What it actually means is decided by
/// [`classify`], which may reinterpret a sequence of keys as a boolean mask,
/// or a sequence of flags as a list of keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subscript<K> {
    Key(K),
    Keys(Vec<K>),
    Flags(Vec<bool>),
    Slice(RangeSlice),
}

impl<K> Subscript<K> {
    pub fn key(key: K) -> Subscript<K> {
        Subscript::Key(key)
    }

    pub fn keys<I: IntoIterator<Item = K>>(keys: I) -> Subscript<K> {
        Subscript::Keys(keys.into_iter().collect())
    }

    pub fn mask<I: IntoIterator<Item = bool>>(flags: I) -> Subscript<K> {
        Subscript::Flags(flags.into_iter().collect())
    }

    pub fn slice(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Subscript<K> {
        Subscript::Slice(RangeSlice::new(start, stop, step))
    }
}

impl<K> From<RangeSlice> for Subscript<K> {
    fn from(slice: RangeSlice) -> Self {
        Subscript::Slice(slice)
    }
}

macro_rules! slice_subscripts {
    ($($t:ty),*) => {
        $(impl<K> From<$t> for Subscript<K> {
            fn from(range: $t) -> Self {
                Subscript::Slice(RangeSlice::from(range))
            }
        })*
    };
}

slice_subscripts!(
    std::ops::Range<isize>,
    std::ops::RangeFrom<isize>,
    std::ops::RangeTo<isize>,
    std::ops::RangeInclusive<isize>,
    std::ops::RangeToInclusive<isize>,
    std::ops::RangeFull
);

/// A classified subscript. Each variant is handled by exactly one
/// resolution strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<K> {
    PlainKey(K),
    KeyList(Vec<K>),
    RangeSlice(RangeSlice),
    BooleanMask(Vec<bool>),
}

/// Decide what `subscript` means for a map currently holding `len` entries.
///
/// The rules are checked in order:
/// 1. a slice is a [`Selector::RangeSlice`],
/// 2. a sequence consisting entirely of flags, and of length `len`, is a
///    [`Selector::BooleanMask`]. This holds for a `Keys` sequence as well,
///    when the key type is `bool`,
/// 3. any other sequence is a [`Selector::KeyList`]. A sequence of flags
///    of the wrong length becomes a list of `bool` keys, if the key type
///    can represent them, and an [`Error::MissingKeys`] otherwise,
/// 4. everything else, including composite (tuple) keys, is a
///    [`Selector::PlainKey`].
///
/// A slice with step zero cannot be classified.
pub fn classify<K: MapKey>(subscript: Subscript<K>, len: usize) -> Result<Selector<K>, Error> {
    let selector = match subscript {
        Subscript::Slice(slice) => {
            if slice.step == Some(0) {
                return Err(Error::Unclassifiable(format!(
                    "slice {slice} has step zero"
                )));
            }
            Selector::RangeSlice(slice)
        }

        Subscript::Flags(flags) if flags.len() == len => Selector::BooleanMask(flags),

        Subscript::Flags(flags) => {
            warn!(
                "Boolean mask of length {} used on a map of length {len}: taken as a list of keys",
                flags.len()
            );
            let keys: Option<Vec<K>> = flags.iter().map(|&flag| K::from_flag(flag)).collect();
            match keys {
                Some(keys) => Selector::KeyList(keys),
                None => {
                    let mut seen = IndexSet::new();
                    seen.extend(flags);
                    return Err(Error::missing(&seen));
                }
            }
        }

        Subscript::Keys(keys) if keys.len() == len => {
            let flags: Option<Vec<bool>> = keys.iter().map(K::as_flag).collect();
            match flags {
                Some(flags) => Selector::BooleanMask(flags),
                None => Selector::KeyList(keys),
            }
        }

        Subscript::Keys(keys) => Selector::KeyList(keys),

        Subscript::Key(key) => Selector::PlainKey(key),
    };

    trace!("Subscript classified as {}", selector.kind());
    Ok(selector)
}

impl<K> Selector<K> {
    /// The name of the variant, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Selector::PlainKey(_) => "plain key",
            Selector::KeyList(_) => "key list",
            Selector::RangeSlice(_) => "range slice",
            Selector::BooleanMask(_) => "boolean mask",
        }
    }
}

// ----- T E S T S ------------------------------------------------------------------
