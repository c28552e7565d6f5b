use std::fmt::Debug;
use std::hash::Hash;

/// The requirements for a key of a [`SliceMap`](crate::SliceMap).
///
/// Apart from the usual map key bounds, a key type can tell whether it *is*
/// a boolean ([`as_flag`](MapKey::as_flag)) and whether it can *represent*
/// one ([`from_flag`](MapKey::from_flag)). The dispatcher needs both to
/// decide between a boolean mask and a list of keys:
///
/// - a list of keys which are all flags, and which is as long as the map,
///   is a boolean mask,
/// - a list of flags of any other length is a list of keys, which only
///   makes sense if the key type can represent flags.
///
/// Both methods default to `None`, so for most user defined key types an
/// empty `impl MapKey for MyKey {}` suffices.
pub trait MapKey: Hash + Eq + Clone + Debug {
    fn as_flag(&self) -> Option<bool> {
        None
    }

    fn from_flag(_flag: bool) -> Option<Self> {
        None
    }
}

impl MapKey for bool {
    fn as_flag(&self) -> Option<bool> {
        Some(*self)
    }

    fn from_flag(flag: bool) -> Option<Self> {
        Some(flag)
    }
}

macro_rules! opaque_keys {
    ($($t:ty),*) => {
        $(impl MapKey for $t {})*
    };
}

opaque_keys!(
    (), char, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl MapKey for &str {}

// Composite keys are single keys, never lists of keys
impl<A: MapKey, B: MapKey> MapKey for (A, B) {}
impl<A: MapKey, B: MapKey, C: MapKey> MapKey for (A, B, C) {}
impl<A: MapKey, B: MapKey, C: MapKey, D: MapKey> MapKey for (A, B, C, D) {}

// ----- T E S T S ------------------------------------------------------------------
