//! Derivation of the restricted forms of a property from its canonical list.
//!
//! Derivation works on the full form of the canonical list, where an entry at
//! an even index starts a member range and an entry at an odd index starts a
//! non-member range.
//!
//! Latin-1 example, ranges [0xF8-0x2C1]:
//! ```text
//! canonical full form:  [0xF8, 0x2C2]
//! first entry > 0xFF:   0x2C2 at index 1 (odd, ends a member range)
//! Latin-1 variant:      [0xF8, 0x2C2]   (range kept through its real end)
//! ```

use log::trace;

use crate::error::{PropertyError, Result, VariantKind};
use crate::invlist::InversionList;

/// Last code point of ASCII.
pub const MAX_ASCII: u32 = 0x7F;

/// Last code point of Latin-1.
pub const MAX_LATIN1: u32 = 0xFF;

/// Membership of [0, 127] as a bit mask, bit `n` set when code point `n` is a
/// member.
pub fn ascii_mask(canonical: &InversionList) -> u128 {
    let mut mask = 0u128;
    for range in canonical.ranges().take_while(|r| r.lo <= MAX_ASCII) {
        for cp in range.lo..=range.hi.min(MAX_ASCII) {
            mask |= 1 << cp;
        }
    }
    mask
}

/// Restrict the canonical list to Latin-1.
///
/// Boundaries after the first one above 255 are dropped. When that first
/// boundary closes a member range (odd full-form index) it is kept, so a range
/// straddling 255/256 keeps its real end; otherwise it is dropped and no
/// boundary is synthesized at 256.
pub fn latin1_variant(canonical: &InversionList) -> InversionList {
    let mut entries = canonical.full_form();
    if let Some(i) = entries.iter().position(|&b| b > MAX_LATIN1) {
        let keep = match i & 1 == 1 {
            true => i + 1,
            false => i,
        };
        trace!(
            "latin-1 variant: first boundary past 0xFF is {:#X} at index {}, keeping {} of {} entries",
            entries[i],
            i,
            keep,
            entries.len()
        );
        entries.truncate(keep);
    }
    InversionList::from_full_form(&entries)
}

/// Restrict the canonical list to [256, U+10FFFF].
///
/// Fails with `EmptyVariant` when no member code point lies at or above 256.
pub fn non_latin1_variant(canonical: &InversionList) -> Result<InversionList> {
    let entries = canonical.full_form();
    let empty = PropertyError::EmptyVariant {
        variant: VariantKind::NonLatin1,
    };

    let i = match entries.iter().position(|&b| b > MAX_LATIN1) {
        Some(i) => i,
        None if entries.len() & 1 == 1 => {
            // the last member range never closes, so it covers all of [256, U+10FFFF]
            return Ok(InversionList::from_full_form(&[MAX_LATIN1 + 1]));
        }
        None => return Err(empty),
    };

    let mut restricted = Vec::with_capacity(entries.len() - i + 1);
    if i & 1 == 1 {
        // entries[i] closes a member range that began below 256
        if entries[i] == MAX_LATIN1 + 1 {
            // which ended at 255: nothing of it survives
            restricted.extend_from_slice(&entries[i + 1..]);
        } else {
            restricted.push(MAX_LATIN1 + 1);
            restricted.extend_from_slice(&entries[i..]);
        }
    } else {
        restricted.extend_from_slice(&entries[i..]);
    }

    let list = InversionList::from_full_form(&restricted);
    if !list.has_members() {
        return Err(empty);
    }
    trace!(
        "non-latin-1 variant: {} of {} entries kept",
        list.len(),
        entries.len()
    );
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{CodePointRange, MAX_CODE_POINT};

    fn list(ranges: &[(u32, u32)]) -> InversionList {
        let ranges: Vec<_> = ranges
            .iter()
            .map(|&(lo, hi)| CodePointRange::new(lo, hi))
            .collect();
        InversionList::from_ranges(&ranges).unwrap()
    }

    #[test]
    fn test_ascii_mask() {
        let mask = ascii_mask(&list(&[(0x41, 0x5A), (0xC0, 0xD6)]));
        for cp in 0..128u32 {
            assert_eq!(mask >> cp & 1 == 1, (0x41..=0x5A).contains(&cp));
        }
        assert_eq!(ascii_mask(&list(&[(0, MAX_CODE_POINT)])), u128::MAX);
        assert_eq!(ascii_mask(&list(&[(0x80, 0xFF)])), 0);
    }

    #[test]
    fn test_latin1_keeps_crossing_range() {
        let canonical = list(&[(0xF8, 0x2C1)]);
        let l1 = latin1_variant(&canonical);
        assert_eq!(l1.boundaries(), &[0xF8, 0x2C2]);
        assert!(l1.contains(0xFF));
        assert!(l1.contains(0x2C1));
        assert!(!l1.contains(0x2C2));
    }

    #[test]
    fn test_latin1_truncates_before_non_member_range() {
        let canonical = list(&[(0x41, 0x5A), (0x100, 0x17F)]);
        let l1 = latin1_variant(&canonical);
        assert_eq!(l1.boundaries(), &[0x41, 0x5B]);
        assert!(!l1.contains(0x100));
    }

    #[test]
    fn test_latin1_drops_later_ranges() {
        let canonical = list(&[(0x20, 0x20), (0xF0, 0x101), (0x200, 0x2FF)]);
        let l1 = latin1_variant(&canonical);
        assert_eq!(l1.boundaries(), &[0x20, 0x21, 0xF0, 0x102]);
    }

    #[test]
    fn test_latin1_without_high_boundaries_is_unchanged() {
        let canonical = list(&[(0x41, 0x5A), (0xC0, 0xD6), (0xD8, 0xDE)]);
        assert_eq!(latin1_variant(&canonical), canonical);
    }

    #[test]
    fn test_latin1_agrees_with_canonical() {
        let canonical = list(&[(0, 8), (0x30, 0x39), (0xAA, 0xAA), (0xF8, 0x2C1), (0x370, 0x3FF)]);
        let l1 = latin1_variant(&canonical);
        for cp in 0..=MAX_LATIN1 {
            assert_eq!(l1.contains(cp), canonical.contains(cp), "cp {:#X}", cp);
        }
    }

    #[test]
    fn test_non_latin1_inserts_256_inside_member_range() {
        let canonical = list(&[(0xF8, 0x2C1), (0x370, 0x3FF)]);
        let high = non_latin1_variant(&canonical).unwrap();
        assert_eq!(high.boundaries(), &[0x100, 0x2C2, 0x370, 0x400]);
        assert!(!high.contains(0xFF));
        assert!(high.contains(0x100));
    }

    #[test]
    fn test_non_latin1_member_range_ending_at_255() {
        let canonical = list(&[(0xC0, 0xFF), (0x370, 0x3FF)]);
        let high = non_latin1_variant(&canonical).unwrap();
        assert_eq!(high.boundaries(), &[0x370, 0x400]);
    }

    #[test]
    fn test_non_latin1_starts_at_first_high_range() {
        let canonical = list(&[(0x41, 0x5A), (0x100, 0x17F)]);
        let high = non_latin1_variant(&canonical).unwrap();
        assert_eq!(high.boundaries(), &[0x100, 0x180]);
    }

    #[test]
    fn test_non_latin1_empty() {
        let canonical = list(&[(0x41, 0x5A), (0xC0, 0xD6), (0xD8, 0xDE)]);
        let err = non_latin1_variant(&canonical).unwrap_err();
        assert_eq!(
            err,
            PropertyError::EmptyVariant {
                variant: VariantKind::NonLatin1
            }
        );

        let ends_at_255 = list(&[(0xC0, 0xFF)]);
        assert!(non_latin1_variant(&ends_at_255).is_err());
    }

    #[test]
    fn test_non_latin1_open_ended_range_starts_at_256() {
        // no boundary at or above 256, but the last member range never closes
        let canonical = InversionList::from_boundaries(false, [0x80]).unwrap();
        let high = non_latin1_variant(&canonical).unwrap();
        assert!(!high.initial_state());
        assert_eq!(high.boundaries(), &[0x100]);
        assert!(high.contains(0x100));
        assert!(high.contains(MAX_CODE_POINT));
        assert!(!high.contains(0xFF));

        let to_end = list(&[(0x41, 0x5A), (0xC0, MAX_CODE_POINT)]);
        assert_eq!(non_latin1_variant(&to_end).unwrap(), high);
    }

    #[test]
    fn test_non_latin1_closed_low_ranges_are_empty() {
        // even full-form length with nothing past 0xFF
        let canonical = InversionList::from_boundaries(true, [0x20, 0x7F, 0xA0]).unwrap();
        assert!(matches!(
            non_latin1_variant(&canonical),
            Err(PropertyError::EmptyVariant { .. })
        ));
    }

    #[test]
    fn test_non_latin1_agrees_with_canonical() {
        let canonical = list(&[(0x30, 0x39), (0xF8, 0x2C1), (0x370, 0x3FF), (0x10000, 0x1FFFF)]);
        let high = non_latin1_variant(&canonical).unwrap();
        for cp in (0x100..0x500).chain(0xFFF0..0x20010) {
            assert_eq!(high.contains(cp), canonical.contains(cp), "cp {:#X}", cp);
        }
    }
}
