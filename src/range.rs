//! Inclusive code point ranges, the unit producers hand to the catalog.

use std::fmt;

use crate::error::{PropertyError, Result};

/// The highest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// One past [`MAX_CODE_POINT`]; the largest boundary an inversion list may hold.
pub const CODE_POINT_LIMIT: u32 = MAX_CODE_POINT + 1;

/// A pair of code points representing an inclusive range [lo, hi].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodePointRange {
    pub lo: u32,
    pub hi: u32,
}

impl CodePointRange {
    pub const fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    pub const fn single(cp: u32) -> Self {
        Self { lo: cp, hi: cp }
    }

    #[inline]
    pub fn contains(&self, cp: u32) -> bool {
        self.lo <= cp && cp <= self.hi
    }

    /// Number of code points covered.
    pub fn len(&self) -> u32 {
        self.hi - self.lo + 1
    }

    /// Check that the range is ordered and inside the code point domain.
    pub fn check(&self) -> Result<()> {
        if self.lo > self.hi {
            return Err(PropertyError::malformed(format!(
                "range {} starts after it ends",
                self
            )));
        }
        if self.hi > MAX_CODE_POINT {
            return Err(PropertyError::malformed(format!(
                "range {} extends past U+10FFFF",
                self
            )));
        }
        Ok(())
    }
}

impl fmt::Display for CodePointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}..U+{:04X}", self.lo, self.hi)
    }
}

impl From<std::ops::RangeInclusive<char>> for CodePointRange {
    fn from(r: std::ops::RangeInclusive<char>) -> Self {
        Self::new(*r.start() as u32, *r.end() as u32)
    }
}

/// Sort ranges and merge the ones that overlap or touch.
///
/// The input must already satisfy [`CodePointRange::check`].
pub fn simplify_ranges(mut ranges: Vec<CodePointRange>) -> Vec<CodePointRange> {
    if ranges.is_empty() {
        return ranges;
    }

    ranges.sort_unstable_by_key(|r| r.lo);

    let mut out = Vec::with_capacity(ranges.len());
    let mut current = ranges[0];

    for &next in &ranges[1..] {
        // hi + 1 cannot overflow: hi <= MAX_CODE_POINT
        if next.lo > current.hi + 1 {
            out.push(current);
            current = next;
            continue;
        }
        if next.hi > current.hi {
            current.hi = next.hi;
        }
    }
    out.push(current);
    out
}
