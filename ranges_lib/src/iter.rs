/// A cursor over the integers of a bounded range, from the start
/// (included) to the exclusive end.  Captures both bounds by value, so
/// it stays valid on its own and dropping it early has no effect on the
/// range it came from.
#[derive(Debug, Clone)]
pub struct RangeIter {
    cursor: i64,
    end: i64,
}

impl RangeIter {
    pub(crate) fn new(start: i64, end: i64) -> Self {
        RangeIter { cursor: start, end }
    }
}

impl Iterator for RangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.cursor < self.end {
            let value = self.cursor;
            self.cursor += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.cursor < self.end {
            (self.end - self.cursor) as usize
        } else {
            0
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RangeIter {}
