use crate::errors::Error;
use crate::iter::RangeIter;

/// Largest magnitude at which every integer is exactly representable as
/// an f64.  Queries beyond it cannot be trusted.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Which constrained form a range was built as:
///    a..b     Bounded
///    a..      From
///    ..b      To
///    ..       Full
///    a..=b    Inclusive
///    ..=b     ToInclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    Bounded,
    From,
    To,
    Full,
    Inclusive,
    ToInclusive,
}

/// An integer range in the style of range literals:
///    [start, end)    when exclusive
///    [start, end]    when inclusive
/// Either side may be unbounded (an infinity).  Immutable once built.
///
/// The upper bound is always stored in exclusive form (an inclusive
/// construction stores `end + 1`); the `inclusive` flag remembers how
/// the caller asked for it, so that display and membership keep the
/// original semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    start: f64,
    end: f64,
    inclusive: bool,
    kind: RangeKind,
}

impl Range {
    fn build(
        start: f64,
        end: f64,
        inclusive: bool,
        kind: RangeKind,
    ) -> Result<Self, Error> {
        if start.is_nan() || end.is_nan() {
            return Err(Error::InvalidBound);
        }
        let start = if start.is_finite() {
            start.round()
        } else {
            start
        };
        let end = if end.is_finite() {
            if inclusive {
                end.round() + 1.0
            } else {
                end.round()
            }
        } else {
            end
        };
        Ok(Range {
            start,
            end,
            inclusive,
            kind,
        })
    }

    /// Half-open range [start, end)
    pub fn new(start: f64, end: f64) -> Result<Self, Error> {
        Self::build(start, end, false, RangeKind::Bounded)
    }

    /// Closed range [start, end]
    pub fn new_inclusive(start: f64, end: f64) -> Result<Self, Error> {
        Self::build(start, end, true, RangeKind::Inclusive)
    }

    /// Range unbounded on the right, [start, +infinity)
    pub fn from_start(start: f64) -> Result<Self, Error> {
        Self::build(start, f64::INFINITY, false, RangeKind::From)
    }

    /// Range unbounded on the left, (-infinity, end)
    pub fn to_end(end: f64) -> Result<Self, Error> {
        Self::build(f64::NEG_INFINITY, end, false, RangeKind::To)
    }

    /// Range unbounded on the left, (-infinity, end]
    pub fn to_inclusive(end: f64) -> Result<Self, Error> {
        Self::build(f64::NEG_INFINITY, end, true, RangeKind::ToInclusive)
    }

    /// The range containing every integer
    pub fn full() -> Self {
        Range {
            start: f64::NEG_INFINITY,
            end: f64::INFINITY,
            inclusive: false,
            kind: RangeKind::Full,
        }
    }

    pub(crate) fn with_kind(
        start: f64,
        end: f64,
        inclusive: bool,
        kind: RangeKind,
    ) -> Result<Self, Error> {
        Self::build(start, end, inclusive, kind)
    }

    /// The (start, exclusive_end) pair, directly usable as a half-open
    /// slicing window.  Never mutates the range.
    pub fn bounds(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    /// The lower bound (-infinity when unbounded)
    pub fn start(&self) -> f64 {
        self.start
    }

    /// The upper bound in exclusive form (+infinity when unbounded)
    pub fn end_exclusive(&self) -> f64 {
        self.end
    }

    /// Whether the range was built with an inclusive upper bound
    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    pub fn kind(&self) -> RangeKind {
        self.kind
    }

    /// True if the range contains no integer
    pub fn is_empty(&self) -> bool {
        !(self.start < self.end)
    }

    /// True if both bounds are finite
    pub fn is_exhaustive(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Whether the value is contained in the range.  A query that is not
    /// a safe representable integer is reported as absent rather than an
    /// error (NaN silently, anything else with a diagnostic).
    pub fn contains(&self, item: f64) -> bool {
        if item.is_nan() {
            return false;
        }
        if !item.is_finite()
            || item.fract() != 0.0
            || item.abs() > MAX_SAFE_INTEGER
        {
            log::warn!(
                "membership query for {item} which is not a safe integer"
            );
            return false;
        }
        if self.inclusive && self.end.is_finite() {
            //  Compare against the end the caller gave, not the stored
            //  exclusive form, so the end point itself stays a member.
            self.start <= item && item <= self.end - 1.0
        } else {
            self.start <= item && item < self.end
        }
    }

    /// The integers of the range, smallest first.  Each call starts a
    /// fresh cursor.  Only the bounded forms can be iterated; every
    /// other kind reports `Error::UnboundedIteration`.
    pub fn iter(&self) -> Result<RangeIter, Error> {
        match self.kind {
            RangeKind::From
            | RangeKind::To
            | RangeKind::Full
            | RangeKind::ToInclusive => Err(Error::UnboundedIteration),
            RangeKind::Bounded | RangeKind::Inclusive => {
                if !self.is_exhaustive() {
                    return Err(Error::UnboundedIteration);
                }
                Ok(RangeIter::new(self.start as i64, self.end as i64))
            }
        }
    }

    /// The window of the slice selected by the range, with both bounds
    /// clamped into the slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len() as f64;
        let lo = self.start.clamp(0.0, len) as usize;
        let hi = self.end.clamp(lo as f64, len) as usize;
        items.get(lo..hi).unwrap_or(&[])
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start.is_finite() {
            write!(f, "{}", self.start as i64)?;
        }
        f.write_str("..")?;
        if self.inclusive {
            f.write_str("=")?;
        }
        let shown = if self.inclusive && self.end.is_finite() {
            self.end - 1.0
        } else {
            self.end
        };
        if shown.is_finite() {
            write!(f, "{}", shown as i64)?;
        }
        Ok(())
    }
}
