//! *An insertion ordered map that can be subscripted by more than single keys*.
//!
//! A [`SliceMap`] behaves like any other ordered key-to-value map for the
//! ordinary single key operations, but its three subscript entry points,
//! [`get`](SliceMap::get), [`set`](SliceMap::set) and
//! [`delete`](SliceMap::delete), also accept
//!
//! - a list of keys, selecting or assigning several entries at once,
//! - a Python style `start:stop:step` slice over the iteration order, and
//! - a boolean mask of the same length as the map.
//!
//! ```
//! use slicemap::prelude::*;
//!
//! fn main() -> Result<(), Error> {
//!     let mut m = SliceMap::from([("a", 0), ("b", 1), ("c", 2), ("d", 3)]);
//!
//!     let inner = m.select(1..-1)?;
//!     assert_eq!(inner.keys().copied().collect::<Vec<_>>(), ["b", "c"]);
//!
//!     let every_other = m.select(Subscript::mask([true, false, true, false]))?;
//!     assert_eq!(every_other, SliceMap::from([("a", 0), ("c", 2)]));
//!
//!     m.set(Subscript::keys(["a", "e"]), vec![10, 40])?;
//!     assert_eq!(m.item(&"e")?, &40);
//!     Ok(())
//! }
//! ```
//!
//! Every subscript is first classified into exactly one [`Selector`] by
//! [`classify`], then resolved into an ordered list of keys, and only then
//! is anything read or written. A failing call leaves the map untouched.

mod hook;
mod key;
mod map;
mod strategy;
mod subscript;
mod values;

pub use hook::EntryHook;
pub use key::MapKey;
pub use map::{Selection, SliceMap};
pub use strategy::ResolvedKeys;
pub use subscript::{classify, RangeSlice, Selector, Subscript};
pub use values::Values;

use thiserror::Error;

/// Preamble for users of the crate
pub mod prelude {
    pub use crate::EntryHook;
    pub use crate::Error;
    pub use crate::MapKey;
    pub use crate::RangeSlice;
    pub use crate::Selection;
    pub use crate::SliceMap;
    pub use crate::Subscript;
    pub use crate::Values;
}

/// Preamble for crate-internal modules
pub(crate) mod internal {
    pub use indexmap::IndexMap;
    pub use indexmap::IndexSet;

    pub use log::debug;
    pub use log::trace;
    pub use log::warn;

    pub use crate::EntryHook;
    pub use crate::Error;
    pub use crate::MapKey;
    pub use crate::RangeSlice;
    pub use crate::Selector;
    pub use crate::Subscript;
    pub use crate::Values;
}

/// The ways a subscripted access may fail. A failed call never leaves a
/// partially written map behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// One or more requested keys are absent. All of them are reported,
    /// in request order.
    #[error("keys [{}] do not exist", .0.join(", "))]
    MissingKeys(Vec<String>),

    #[error("length mismatch: got {keys} keys, but {values} values")]
    LengthMismatch { keys: usize, values: usize },

    #[error("a single value cannot be assigned to {keys} keys")]
    ScalarValue { keys: usize },

    #[error("cannot classify subscript: {0}")]
    Unclassifiable(String),

    #[error("entry rejected: {0}")]
    Rejected(String),
}

impl Error {
    /// Render a set of keys for a [`Error::MissingKeys`] report
    pub(crate) fn missing<'a, K, I>(keys: I) -> Error
    where
        K: std::fmt::Debug + 'a,
        I: IntoIterator<Item = &'a K>,
    {
        Error::MissingKeys(keys.into_iter().map(|k| format!("{k:?}")).collect())
    }
}

// ----- T E S T S ------------------------------------------------------------------
