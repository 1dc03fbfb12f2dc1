//! Width-aware membership queries.
//!
//! A caller that knows its input is narrow says so with a [`Width`], and the
//! lookup uses the smallest table able to answer:
//!
//! ```text
//! AsciiOnly  cp < 0x80    one bit of the ASCII mask
//! Latin1     cp < 0x100   Latin-1 variant, or the canonical list
//! Full       any          canonical list
//! ```
//!
//! A code point outside the declared width is never a member.

use crate::catalog::PropertyTables;
use crate::range::MAX_CODE_POINT;
use crate::variant::{MAX_ASCII, MAX_LATIN1};

/// The range of code points a caller promises to query with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Width {
    AsciiOnly,
    Latin1,
    #[default]
    Full,
}

impl Width {
    /// The narrowest width that admits `cp`.
    pub fn of(cp: u32) -> Width {
        if cp <= MAX_ASCII {
            Width::AsciiOnly
        } else if cp <= MAX_LATIN1 {
            Width::Latin1
        } else {
            Width::Full
        }
    }

    /// Whether `cp` lies inside this width.
    pub fn admits(self, cp: u32) -> bool {
        match self {
            Width::AsciiOnly => cp <= MAX_ASCII,
            Width::Latin1 => cp <= MAX_LATIN1,
            Width::Full => cp <= MAX_CODE_POINT,
        }
    }
}

impl PropertyTables {
    /// Does `cp` have this property, answering from the table for `width`?
    #[inline]
    pub fn classify(&self, cp: u32, width: Width) -> bool {
        if !width.admits(cp) {
            return false;
        }
        match width {
            Width::AsciiOnly => self.ascii_mask() >> cp & 1 == 1,
            Width::Latin1 => self.latin1().unwrap_or(self.canonical()).contains(cp),
            Width::Full => self.canonical().contains(cp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuildOptions, Catalog, CatalogBuilder};
    use crate::error::PropertyError;
    use crate::invlist::InversionList;
    use crate::range::CodePointRange;

    fn r(lo: u32, hi: u32) -> CodePointRange {
        CodePointRange::new(lo, hi)
    }

    fn posix_upper() -> Catalog {
        let mut builder = CatalogBuilder::new();
        builder
            .add("PosixUpper", &[r(0x41, 0x5A), r(0xC0, 0xD6), r(0xD8, 0xDE)])
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_width_of() {
        assert_eq!(Width::of(0), Width::AsciiOnly);
        assert_eq!(Width::of(0x7F), Width::AsciiOnly);
        assert_eq!(Width::of(0x80), Width::Latin1);
        assert_eq!(Width::of(0xFF), Width::Latin1);
        assert_eq!(Width::of(0x100), Width::Full);
        assert!(Width::of(0x41).admits(0x41));
        assert!(!Width::Full.admits(0x110000));
    }

    #[test]
    fn test_posix_upper_scenario() {
        let catalog = posix_upper();
        let classify = |cp, width| catalog.classify("PosixUpper", cp, width).unwrap();

        assert!(classify(0x5A, Width::AsciiOnly));
        assert!(!classify(0x5B, Width::AsciiOnly));
        assert!(!classify(0xC0, Width::AsciiOnly));
        assert!(classify(0xC0, Width::Latin1));
        assert!(!classify(0xD7, Width::Latin1));
        assert!(classify(0xDE, Width::Full));
        assert!(!classify(0xDF, Width::Full));
        assert!(!classify(0x100, Width::Full));
        assert!(!classify(0x110000, Width::Full));
    }

    #[test]
    fn test_latin1_width_uses_variant_only_below_256() {
        let mut builder = CatalogBuilder::new();
        builder.add("Cross", &[r(0xF8, 0x2C1)]).unwrap();
        let catalog = builder.build().unwrap();
        let tables = catalog.tables("Cross").unwrap();
        assert!(tables.latin1().is_some());

        assert!(tables.classify(0xFF, Width::Latin1));
        assert!(!tables.classify(0x100, Width::Latin1));
        assert!(tables.classify(0x100, Width::Full));
        assert!(tables.classify(0x2C1, Width::Full));
    }

    #[test]
    fn test_latin1_width_without_stored_variant() {
        let mut builder = CatalogBuilder::new().options(BuildOptions {
            latin1_variants: false,
            ..BuildOptions::default()
        });
        builder.add("Cross", &[r(0xF8, 0x2C1)]).unwrap();
        let catalog = builder.build().unwrap();
        let tables = catalog.tables("Cross").unwrap();
        assert!(tables.latin1().is_none());
        assert!(tables.classify(0xF8, Width::Latin1));
        assert!(!tables.classify(0xF7, Width::Latin1));
    }

    #[test]
    fn test_widths_agree_inside_their_domain() {
        let mut builder = CatalogBuilder::new();
        builder
            .add_list("Odd", InversionList::from_boundaries(true, [0x9, 0x41, 0x5B, 0xF8, 0x2C2]).unwrap())
            .unwrap();
        let catalog = builder.build().unwrap();
        let tables = catalog.tables("Odd").unwrap();
        for cp in 0..=0xFF {
            let full = tables.classify(cp, Width::Full);
            assert_eq!(tables.classify(cp, Width::Latin1), full, "cp {:#X}", cp);
            if cp <= 0x7F {
                assert_eq!(tables.classify(cp, Width::AsciiOnly), full, "cp {:#X}", cp);
            } else {
                assert!(!tables.classify(cp, Width::AsciiOnly));
            }
        }
    }

    #[test]
    fn test_unknown_property() {
        let catalog = posix_upper();
        let err = catalog.classify("NotAProperty", 0x41, Width::Full).unwrap_err();
        assert_eq!(err, PropertyError::UnknownProperty("NotAProperty".into()));
    }

    #[test]
    fn test_out_of_domain_never_errors() {
        let catalog = posix_upper();
        for width in [Width::AsciiOnly, Width::Latin1, Width::Full] {
            assert_eq!(catalog.classify("PosixUpper", u32::MAX, width), Ok(false));
        }
    }
}
