use crate::Error;
use std::fmt;
use std::ops;

/// A `start:stop:step` slice over the iteration order of a map.
///
/// Any part may be left out. Negative `start` and `stop` count from the
/// end, a negative `step` walks the map backwards, and out of range bounds
/// are clamped rather than rejected: exactly the rules of Python's
/// sequence slicing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeSlice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl RangeSlice {
    #[must_use]
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> RangeSlice {
        RangeSlice { start, stop, step }
    }

    /// The slice `::`, covering everything in iteration order
    #[must_use]
    pub fn full() -> RangeSlice {
        RangeSlice::default()
    }

    /// The slice `::-1`, covering everything in reverse iteration order
    #[must_use]
    pub fn reversed() -> RangeSlice {
        RangeSlice::full().with_step(-1)
    }

    #[must_use]
    pub fn with_step(self, step: isize) -> RangeSlice {
        RangeSlice {
            step: Some(step),
            ..self
        }
    }

    /// Resolve the slice against a sequence of length `len`, returning the
    /// selected positions in selection order.
    pub fn indices(&self, len: usize) -> Result<Vec<usize>, Error> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(Error::Unclassifiable(format!(
                "slice {self} has step zero"
            )));
        }

        let len = len as isize;
        let backwards = step < 0;

        // For a backwards walk, -1 is the sentinel meaning "before the first
        // item", not the Python-style index of the last item
        let clamp = |bound: isize| -> isize {
            let bound = if bound < 0 { bound + len } else { bound };
            if bound < 0 {
                return if backwards { -1 } else { 0 };
            }
            if bound >= len {
                return if backwards { len - 1 } else { len };
            }
            bound
        };

        let start = match self.start {
            Some(start) => clamp(start),
            None if backwards => len - 1,
            None => 0,
        };
        let stop = match self.stop {
            Some(stop) => clamp(stop),
            None if backwards => -1,
            None => len,
        };

        let mut positions = Vec::new();
        let mut i = start;
        while (!backwards && i < stop) || (backwards && i > stop) {
            positions.push(i as usize);
            // A step past the end of the isize range also ends the walk
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
        Ok(positions)
    }
}

impl fmt::Display for RangeSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = |p: Option<isize>| p.map(|p| p.to_string()).unwrap_or_default();
        write!(f, "{}:{}", part(self.start), part(self.stop))?;
        if let Some(step) = self.step {
            write!(f, ":{step}")?;
        }
        Ok(())
    }
}

impl From<ops::Range<isize>> for RangeSlice {
    fn from(r: ops::Range<isize>) -> Self {
        RangeSlice::new(Some(r.start), Some(r.end), None)
    }
}

impl From<ops::RangeFrom<isize>> for RangeSlice {
    fn from(r: ops::RangeFrom<isize>) -> Self {
        RangeSlice::new(Some(r.start), None, None)
    }
}

impl From<ops::RangeTo<isize>> for RangeSlice {
    fn from(r: ops::RangeTo<isize>) -> Self {
        RangeSlice::new(None, Some(r.end), None)
    }
}

// An inclusive end of -1 is the last item, so the exclusive stop is "open".
// So is an end of isize::MAX, which lies beyond any map.
fn inclusive_stop(end: isize) -> Option<isize> {
    match end {
        -1 => None,
        end => end.checked_add(1),
    }
}

impl From<ops::RangeInclusive<isize>> for RangeSlice {
    fn from(r: ops::RangeInclusive<isize>) -> Self {
        RangeSlice::new(Some(*r.start()), inclusive_stop(*r.end()), None)
    }
}

impl From<ops::RangeToInclusive<isize>> for RangeSlice {
    fn from(r: ops::RangeToInclusive<isize>) -> Self {
        RangeSlice::new(None, inclusive_stop(r.end), None)
    }
}

impl From<ops::RangeFull> for RangeSlice {
    fn from(_: ops::RangeFull) -> Self {
        RangeSlice::full()
    }
}

// ----- T E S T S ------------------------------------------------------------------
