//! The inversion list itself: construction, validation and lookup.

use std::fmt;

use smallvec::SmallVec;

use crate::error::{PropertyError, Result};
use crate::range::{simplify_ranges, CodePointRange, CODE_POINT_LIMIT, MAX_CODE_POINT};

/// Inline capacity for boundaries. Most POSIX-style properties flip a handful
/// of times, so their lists never touch the heap.
pub(crate) type Boundaries = SmallVec<[u32; 8]>;

/// A boolean step function over the code point domain.
///
/// `boundaries` holds the code points at which membership flips, strictly
/// increasing. Whether code point 0 is a member is kept in `initial_state`
/// rather than as a stored boundary of 0, so the first boundary is always
/// greater than 0. A boundary at U+10FFFF + 1 flips nothing inside the domain
/// and is never stored, so each set has exactly one representation.
///
/// Example: uppercase ASCII letters plus the Latin-1 uppercase block
/// ```text
/// ranges:        [0x41-0x5A] [0xC0-0xD6] [0xD8-0xDE]
/// initial_state: false
/// boundaries:    [0x41, 0x5B, 0xC0, 0xD7, 0xD8, 0xDF]
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct InversionList {
    boundaries: Boundaries,
    initial_state: bool,
}

impl InversionList {
    /// A list with no members.
    pub fn new() -> Self {
        Self::default()
    }

    /// A list containing every code point.
    pub fn full() -> Self {
        Self {
            boundaries: SmallVec::new(),
            initial_state: true,
        }
    }

    /// Build a list from inclusive ranges known to hold the property.
    ///
    /// Ranges may arrive in any order and may overlap or touch; they are merged
    /// into the minimal boundary form.
    pub fn from_ranges(ranges: &[CodePointRange]) -> Result<Self> {
        for range in ranges {
            range.check()?;
        }
        let list = Self::from_simplified(&simplify_ranges(ranges.to_vec()));
        assert!(
            is_strictly_increasing(&list.boundaries),
            "inversion list builder produced non-monotonic boundaries"
        );
        Ok(list)
    }

    /// Build a list from raw boundaries, validating them first.
    pub fn from_boundaries(
        initial_state: bool,
        boundaries: impl IntoIterator<Item = u32>,
    ) -> Result<Self> {
        let mut boundaries: Boundaries = boundaries.into_iter().collect();
        validate(initial_state, &boundaries)?;
        if boundaries.last() == Some(&CODE_POINT_LIMIT) {
            boundaries.pop();
        }
        Ok(Self {
            boundaries,
            initial_state,
        })
    }

    /// Build from ranges that are already sorted, disjoint and non-adjacent.
    pub(crate) fn from_simplified(ranges: &[CodePointRange]) -> Self {
        let mut entries = Vec::with_capacity(ranges.len() * 2);
        for range in ranges {
            entries.push(range.lo);
            entries.push(range.hi + 1);
        }
        Self::from_full_form(&entries)
    }

    /// Build from the full form, where a leading 0 marks code point 0 as a
    /// member and even indices start member ranges.
    pub(crate) fn from_full_form(entries: &[u32]) -> Self {
        debug_assert!(is_strictly_increasing(entries));
        let entries = match entries.split_last() {
            Some((&CODE_POINT_LIMIT, rest)) => rest,
            _ => entries,
        };
        match entries.split_first() {
            Some((&0, rest)) => Self {
                boundaries: SmallVec::from_slice(rest),
                initial_state: true,
            },
            _ => Self {
                boundaries: SmallVec::from_slice(entries),
                initial_state: false,
            },
        }
    }

    /// The list with an explicit leading 0 when code point 0 is a member.
    pub(crate) fn full_form(&self) -> Vec<u32> {
        let mut entries = Vec::with_capacity(self.full_len());
        if self.initial_state {
            entries.push(0);
        }
        entries.extend_from_slice(&self.boundaries);
        entries
    }

    #[inline]
    pub(crate) fn full_len(&self) -> usize {
        self.boundaries.len() + self.initial_state as usize
    }

    /// Entry `i` of the full form.
    #[inline]
    fn full_entry(&self, i: usize) -> u32 {
        match (self.initial_state, i) {
            (true, 0) => 0,
            (true, i) => self.boundaries[i - 1],
            (false, i) => self.boundaries[i],
        }
    }

    /// Membership test by binary search over the boundaries.
    ///
    /// Code points above U+10FFFF are never members.
    #[inline]
    pub fn contains(&self, cp: u32) -> bool {
        if cp > MAX_CODE_POINT {
            return false;
        }
        let flips = self.boundaries.partition_point(|&b| b <= cp);
        self.initial_state ^ (flips & 1 == 1)
    }

    /// Whether code point 0 is a member.
    pub fn initial_state(&self) -> bool {
        self.initial_state
    }

    /// Membership of every code point at or after the last boundary.
    pub fn final_state(&self) -> bool {
        self.initial_state ^ (self.boundaries.len() & 1 == 1)
    }

    pub fn boundaries(&self) -> &[u32] {
        &self.boundaries
    }

    /// Number of stored boundaries.
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// True when the list stores no boundary (constant membership).
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// True when at least one code point is a member.
    pub fn has_members(&self) -> bool {
        self.ranges().next().is_some()
    }

    /// Total number of member code points.
    pub fn member_count(&self) -> u64 {
        self.ranges().map(|r| r.len() as u64).sum()
    }

    /// Iterate over member ranges in ascending order.
    pub fn ranges(&self) -> Ranges<'_> {
        Ranges {
            list: self,
            cursor: 0,
        }
    }

    /// Iterate starting with the member range that contains `cp`, or the first
    /// one after it.
    pub fn ranges_from(&self, cp: u32) -> Ranges<'_> {
        if cp > MAX_CODE_POINT {
            return Ranges {
                list: self,
                cursor: self.full_len(),
            };
        }
        // number of full-form entries <= cp
        let seen = self.boundaries.partition_point(|&b| b <= cp) + self.initial_state as usize;
        let cursor = match seen & 1 == 1 {
            true => seen - 1,
            false => seen,
        };
        Ranges { list: self, cursor }
    }
}

impl fmt::Debug for InversionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.ranges().map(|r| format!("{:04X}-{:04X}", r.lo, r.hi)))
            .finish()
    }
}

/// Check the structural invariants of a boundary sequence.
///
/// Fails with `MalformedList` when boundaries are not strictly increasing, when
/// one lies past U+10FFFF + 1, or when a boundary of 0 appears (membership at
/// code point 0 belongs in `initial_state`).
pub fn validate(initial_state: bool, boundaries: &[u32]) -> Result<()> {
    if boundaries.first() == Some(&0) {
        return Err(PropertyError::malformed(format!(
            "leading boundary 0 with initial state {}; code point 0 must be folded into the flag",
            initial_state
        )));
    }
    if let Some(pair) = boundaries.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(PropertyError::malformed(format!(
            "boundaries are not strictly increasing: {:#X} followed by {:#X}",
            pair[0], pair[1]
        )));
    }
    if let Some(&last) = boundaries.last() {
        if last > CODE_POINT_LIMIT {
            return Err(PropertyError::malformed(format!(
                "boundary {:#X} lies outside the code point domain",
                last
            )));
        }
    }
    Ok(())
}

pub(crate) fn is_strictly_increasing(values: &[u32]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

/// Iterator over the member ranges of an [`InversionList`].
///
/// Each iterator owns its position, so any number of iterations may run over
/// the same list at once.
#[derive(Clone, Debug)]
pub struct Ranges<'a> {
    list: &'a InversionList,
    /// Full-form index of the next member range start.
    cursor: usize,
}

impl Ranges<'_> {
    /// Current position, in full-form entries.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Iterator for Ranges<'_> {
    type Item = CodePointRange;

    fn next(&mut self) -> Option<CodePointRange> {
        let full_len = self.list.full_len();
        if self.cursor >= full_len {
            return None;
        }
        let lo = self.list.full_entry(self.cursor);
        if lo > MAX_CODE_POINT {
            self.cursor = full_len;
            return None;
        }
        let hi = match self.cursor + 1 < full_len {
            true => self.list.full_entry(self.cursor + 1) - 1,
            false => MAX_CODE_POINT,
        };
        self.cursor += 2;
        Some(CodePointRange::new(lo, hi))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.list.full_len().saturating_sub(self.cursor);
        (0, Some(left.div_ceil(2)))
    }
}
