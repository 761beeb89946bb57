use tracing::trace;

use crate::errors::SequenceError;

/// Bounds of a half-open integer range.
///
/// `stop` is never part of the output. A positive `step` walks upward while
/// the current value is below `stop`, a negative one walks downward while it
/// is above. The step is checked when the range is materialized, so a zero
/// step is rejected however it got there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    pub start: i64,
    pub stop: i64,
    pub step: i64,
}

impl RangeSpec {
    /// `0, 1, ..., stop - 1`
    pub fn to(stop: i64) -> Self {
        Self { start: 0, stop, step: 1 }
    }

    /// `start, start + 1, ..., stop - 1`
    pub fn between(start: i64, stop: i64) -> Self {
        Self { start, stop, step: 1 }
    }

    pub fn stepped(start: i64, stop: i64, step: i64) -> Self {
        Self { start, stop, step }
    }

    /// Lazily walk the range.
    pub fn iter(&self) -> Result<RangeIter, SequenceError> {
        if self.step == 0 {
            return Err(SequenceError::zero_step());
        }
        trace!(start = self.start, stop = self.stop, step = self.step, "building range");
        Ok(RangeIter { next: Some(self.start), stop: self.stop, step: self.step })
    }

    pub fn to_vec(&self) -> Result<Vec<i64>, SequenceError> {
        Ok(self.iter()?.collect())
    }
}

/// Materialize `spec` into a vector.
pub fn range(spec: RangeSpec) -> Result<Vec<i64>, SequenceError> {
    spec.to_vec()
}

/// Iterator over a validated [`RangeSpec`].
#[derive(Debug, Clone)]
pub struct RangeIter {
    next: Option<i64>,
    stop: i64,
    step: i64,
}

impl Iterator for RangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let cur = self.next?;
        let in_bounds = if self.step > 0 { cur < self.stop } else { cur > self.stop };
        if !in_bounds {
            self.next = None;
            return None;
        }
        // running off the end of i64 also ends the range
        self.next = cur.checked_add(self.step);
        Some(cur)
    }
}
