//! Set algebra over inversion lists: merging, complement and slicing.

use crate::range::{simplify_ranges, CodePointRange, MAX_CODE_POINT};

use super::list::InversionList;

impl InversionList {
    /// Code points that are members of either list.
    pub fn union(&self, other: &InversionList) -> InversionList {
        let mut ranges: Vec<CodePointRange> = self.ranges().collect();
        ranges.extend(other.ranges());
        InversionList::from_simplified(&simplify_ranges(ranges))
    }

    /// Code points that are members of both lists.
    pub fn intersection(&self, other: &InversionList) -> InversionList {
        self.invert().union(&other.invert()).invert()
    }

    /// Members of `self` that are not members of `other`.
    pub fn difference(&self, other: &InversionList) -> InversionList {
        self.intersection(&other.invert())
    }

    /// Complement over [0, U+10FFFF].
    pub fn invert(&self) -> InversionList {
        let mut entries = self.full_form();
        // flipping the state at 0 flips every range after it
        match entries.first() {
            Some(&0) => {
                entries.remove(0);
            }
            _ => entries.insert(0, 0),
        }
        InversionList::from_full_form(&entries)
    }

    /// Restriction to the inclusive range [lo, hi]; everything outside it
    /// becomes a non-member.
    pub fn slice(&self, lo: u32, hi: u32) -> InversionList {
        let hi = hi.min(MAX_CODE_POINT);
        if lo > hi {
            return InversionList::new();
        }
        let sliced: Vec<CodePointRange> = self
            .ranges_from(lo)
            .take_while(|r| r.lo <= hi)
            .map(|r| CodePointRange::new(r.lo.max(lo), r.hi.min(hi)))
            .collect();
        InversionList::from_simplified(&sliced)
    }
}
