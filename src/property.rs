//! The builtin property identifiers and their definitions.
//!
//! The POSIX family covers ASCII only; the XPosix family extends each class to
//! all of Unicode following the compatibility properties of UTS #18 Annex C,
//! composed from the general category tables.

use std::fmt;
use std::str::FromStr;

use crate::error::{PropertyError, Result};
use crate::general_category as gc;
use crate::invlist::InversionList;
use crate::range::CodePointRange;

const fn r(lo: u32, hi: u32) -> CodePointRange {
    CodePointRange::new(lo, hi)
}

/// A property the crate knows how to build without outside data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(clippy::upper_case_acronyms)]
pub enum Property {
    Any,
    ASCII,
    Latin1,
    UpperLatin1,
    /// `[0-9A-Za-z]`
    PosixAlnum,
    /// `[A-Za-z]`
    PosixAlpha,
    /// `[ \t]`
    PosixBlank,
    /// `[\x00-\x1F\x7F]`
    PosixCntrl,
    /// `[0-9]`
    PosixDigit,
    /// `[!-~]`
    PosixGraph,
    /// `[a-z]`
    PosixLower,
    /// `[ -~]`
    PosixPrint,
    /// `[!-/:-@\[-`{-~]`
    PosixPunct,
    /// `[\t\n\v\f\r ]`
    PosixSpace,
    /// `[A-Z]`
    PosixUpper,
    /// `[0-9A-Za-z_]`
    PosixWord,
    /// `[0-9A-Fa-f]`
    PosixXDigit,
    XPosixAlnum,
    XPosixAlpha,
    XPosixBlank,
    XPosixCntrl,
    XPosixDigit,
    XPosixGraph,
    XPosixLower,
    XPosixPrint,
    XPosixPunct,
    XPosixSpace,
    XPosixUpper,
    XPosixWord,
    XPosixXDigit,
    VertSpace,
    Cased,
}

impl Property {
    /// Every builtin property, in declaration order.
    pub const ALL: &'static [Property] = &[
        Property::Any,
        Property::ASCII,
        Property::Latin1,
        Property::UpperLatin1,
        Property::PosixAlnum,
        Property::PosixAlpha,
        Property::PosixBlank,
        Property::PosixCntrl,
        Property::PosixDigit,
        Property::PosixGraph,
        Property::PosixLower,
        Property::PosixPrint,
        Property::PosixPunct,
        Property::PosixSpace,
        Property::PosixUpper,
        Property::PosixWord,
        Property::PosixXDigit,
        Property::XPosixAlnum,
        Property::XPosixAlpha,
        Property::XPosixBlank,
        Property::XPosixCntrl,
        Property::XPosixDigit,
        Property::XPosixGraph,
        Property::XPosixLower,
        Property::XPosixPrint,
        Property::XPosixPunct,
        Property::XPosixSpace,
        Property::XPosixUpper,
        Property::XPosixWord,
        Property::XPosixXDigit,
        Property::VertSpace,
        Property::Cased,
    ];

    pub const COUNT: usize = Property::ALL.len();

    /// Position in [`Property::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The display name used for lookup by name.
    pub fn name(self) -> &'static str {
        match self {
            Property::Any => "Any",
            Property::ASCII => "ASCII",
            Property::Latin1 => "Latin1",
            Property::UpperLatin1 => "UpperLatin1",
            Property::PosixAlnum => "PosixAlnum",
            Property::PosixAlpha => "PosixAlpha",
            Property::PosixBlank => "PosixBlank",
            Property::PosixCntrl => "PosixCntrl",
            Property::PosixDigit => "PosixDigit",
            Property::PosixGraph => "PosixGraph",
            Property::PosixLower => "PosixLower",
            Property::PosixPrint => "PosixPrint",
            Property::PosixPunct => "PosixPunct",
            Property::PosixSpace => "PosixSpace",
            Property::PosixUpper => "PosixUpper",
            Property::PosixWord => "PosixWord",
            Property::PosixXDigit => "PosixXDigit",
            Property::XPosixAlnum => "XPosixAlnum",
            Property::XPosixAlpha => "XPosixAlpha",
            Property::XPosixBlank => "XPosixBlank",
            Property::XPosixCntrl => "XPosixCntrl",
            Property::XPosixDigit => "XPosixDigit",
            Property::XPosixGraph => "XPosixGraph",
            Property::XPosixLower => "XPosixLower",
            Property::XPosixPrint => "XPosixPrint",
            Property::XPosixPunct => "XPosixPunct",
            Property::XPosixSpace => "XPosixSpace",
            Property::XPosixUpper => "XPosixUpper",
            Property::XPosixWord => "XPosixWord",
            Property::XPosixXDigit => "XPosixXDigit",
            Property::VertSpace => "VertSpace",
            Property::Cased => "Cased",
        }
    }

    /// Return the property with the given display name, if any.
    pub fn from_name(name: &str) -> Option<Property> {
        Property::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// Build the canonical full-range list for this property.
    pub fn definition(self) -> Result<InversionList> {
        match self {
            Property::Any => Ok(InversionList::full()),
            Property::ASCII => ranges(&[r(0x00, 0x7F)]),
            Property::Latin1 => ranges(&[r(0x00, 0xFF)]),
            Property::UpperLatin1 => ranges(&[r(0x80, 0xFF)]),

            Property::PosixAlnum => ranges(&[r(0x30, 0x39), r(0x41, 0x5A), r(0x61, 0x7A)]),
            Property::PosixAlpha => ranges(&[r(0x41, 0x5A), r(0x61, 0x7A)]),
            Property::PosixBlank => ranges(&[r(0x09, 0x09), r(0x20, 0x20)]),
            Property::PosixCntrl => ranges(&[r(0x00, 0x1F), r(0x7F, 0x7F)]),
            Property::PosixDigit => ranges(&[r(0x30, 0x39)]),
            Property::PosixGraph => ranges(&[r(0x21, 0x7E)]),
            Property::PosixLower => ranges(&[r(0x61, 0x7A)]),
            Property::PosixPrint => ranges(&[r(0x20, 0x7E)]),
            Property::PosixPunct => {
                ranges(&[r(0x21, 0x2F), r(0x3A, 0x40), r(0x5B, 0x60), r(0x7B, 0x7E)])
            }
            Property::PosixSpace => ranges(&[r(0x09, 0x0D), r(0x20, 0x20)]),
            Property::PosixUpper => ranges(&[r(0x41, 0x5A)]),
            Property::PosixWord => {
                ranges(&[r(0x30, 0x39), r(0x41, 0x5A), r(0x5F, 0x5F), r(0x61, 0x7A)])
            }
            Property::PosixXDigit => ranges(&[r(0x30, 0x39), r(0x41, 0x46), r(0x61, 0x66)]),

            Property::XPosixAlpha => alphabetic(),
            Property::XPosixAlnum => Ok(alphabetic()?.union(&tables(&[gc::ND])?)),
            Property::XPosixBlank => {
                Ok(tables(&[gc::ZS])?.union(&ranges(&[r(0x09, 0x09)])?))
            }
            Property::XPosixCntrl => tables(&[gc::CC]),
            Property::XPosixDigit => tables(&[gc::ND]),
            Property::XPosixGraph => graph(),
            Property::XPosixLower => lowercase(),
            Property::XPosixPrint => {
                let blank = Property::XPosixBlank.definition()?;
                let cntrl = tables(&[gc::CC])?;
                Ok(graph()?.union(&blank).difference(&cntrl))
            }
            Property::XPosixPunct => {
                let ascii_symbols = tables(&[gc::SM, gc::SC, gc::SK, gc::SO])?.slice(0, 0x7F);
                Ok(tables(&[gc::PC, gc::PD, gc::PS, gc::PE, gc::PI, gc::PF, gc::PO])?
                    .union(&ascii_symbols))
            }
            Property::XPosixSpace => white_space(),
            Property::XPosixUpper => uppercase(),
            Property::XPosixWord => {
                let marks = tables(&[gc::MN, gc::MC, gc::ME])?;
                let rest = tables(&[gc::ND, gc::PC])?;
                // Join_Control
                let joiners = ranges(&[r(0x200C, 0x200D)])?;
                Ok(alphabetic()?.union(&marks).union(&rest).union(&joiners))
            }
            Property::XPosixXDigit => ranges(&[
                r(0x30, 0x39),
                r(0x41, 0x46),
                r(0x61, 0x66),
                r(0xFF10, 0xFF19),
                r(0xFF21, 0xFF26),
                r(0xFF41, 0xFF46),
            ]),
            Property::VertSpace => ranges(&[r(0x0A, 0x0D), r(0x85, 0x85), r(0x2028, 0x2029)]),
            Property::Cased => {
                Ok(uppercase()?.union(&lowercase()?).union(&tables(&[gc::LT])?))
            }
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self> {
        Property::from_name(s).ok_or_else(|| PropertyError::UnknownProperty(s.to_owned()))
    }
}

fn ranges(ranges: &[CodePointRange]) -> Result<InversionList> {
    InversionList::from_ranges(ranges)
}

fn tables(tables: &[&[CodePointRange]]) -> Result<InversionList> {
    InversionList::from_ranges(&tables.concat())
}

/// Alphabetic, approximated as L | Nl (Other_Alphabetic is not tabulated).
fn alphabetic() -> Result<InversionList> {
    tables(&[gc::LU, gc::LL, gc::LT, gc::LM, gc::LO, gc::NL])
}

/// Ll plus the Other_Lowercase ordinal indicators.
fn lowercase() -> Result<InversionList> {
    Ok(tables(&[gc::LL])?.union(&ranges(&[r(0xAA, 0xAA), r(0xBA, 0xBA)])?))
}

/// Lu plus the Other_Uppercase roman numerals and circled letters.
fn uppercase() -> Result<InversionList> {
    Ok(tables(&[gc::LU])?.union(&ranges(&[r(0x2160, 0x216F), r(0x24B6, 0x24CF)])?))
}

/// White_Space: the ASCII controls \t..\r, NEL, and the separators.
fn white_space() -> Result<InversionList> {
    let controls = ranges(&[r(0x09, 0x0D), r(0x85, 0x85)])?;
    Ok(tables(&[gc::ZS, gc::ZL, gc::ZP])?.union(&controls))
}

/// Assigned code points that are neither white space nor controls.
fn graph() -> Result<InversionList> {
    let assigned = tables(&[
        gc::LU, gc::LL, gc::LT, gc::LM, gc::LO,
        gc::MN, gc::MC, gc::ME,
        gc::ND, gc::NL, gc::NO,
        gc::PC, gc::PD, gc::PS, gc::PE, gc::PI, gc::PF, gc::PO,
        gc::SM, gc::SC, gc::SK, gc::SO,
        gc::CF, gc::CO,
    ])?;
    Ok(assigned.difference(&white_space()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for &property in Property::ALL {
            assert_eq!(Property::from_name(property.name()), Some(property));
            assert_eq!(property.to_string().parse::<Property>().unwrap(), property);
        }
        assert_eq!(Property::from_name("posixupper"), None);
        assert!(matches!(
            "NoSuchThing".parse::<Property>(),
            Err(PropertyError::UnknownProperty(_))
        ));
    }

    #[test]
    fn test_index_matches_table_order() {
        for (i, &property) in Property::ALL.iter().enumerate() {
            assert_eq!(property.index(), i);
        }
        assert_eq!(Property::COUNT, 32);
    }

    #[test]
    fn test_every_definition_builds() {
        for &property in Property::ALL {
            let list = property.definition().unwrap();
            assert!(list.has_members(), "{} has no members", property);
        }
    }

    #[test]
    fn test_posix_family_stays_in_ascii() {
        for &property in Property::ALL {
            if property.name().starts_with("Posix") {
                let list = property.definition().unwrap();
                assert!(
                    list.ranges().all(|r| r.hi <= 0x7F),
                    "{} leaves ASCII",
                    property
                );
            }
        }
    }

    #[test]
    fn test_xposix_agrees_with_posix_on_ascii() {
        let pairs = [
            (Property::PosixAlpha, Property::XPosixAlpha),
            (Property::PosixAlnum, Property::XPosixAlnum),
            (Property::PosixBlank, Property::XPosixBlank),
            (Property::PosixCntrl, Property::XPosixCntrl),
            (Property::PosixDigit, Property::XPosixDigit),
            (Property::PosixGraph, Property::XPosixGraph),
            (Property::PosixLower, Property::XPosixLower),
            (Property::PosixPrint, Property::XPosixPrint),
            (Property::PosixPunct, Property::XPosixPunct),
            (Property::PosixSpace, Property::XPosixSpace),
            (Property::PosixUpper, Property::XPosixUpper),
            (Property::PosixWord, Property::XPosixWord),
            (Property::PosixXDigit, Property::XPosixXDigit),
        ];
        for (posix, xposix) in pairs {
            let narrow = posix.definition().unwrap();
            let wide = xposix.definition().unwrap();
            for cp in 0..0x80 {
                assert_eq!(
                    narrow.contains(cp),
                    wide.contains(cp),
                    "{} and {} disagree at {:#X}",
                    posix,
                    xposix,
                    cp
                );
            }
        }
    }

    #[test]
    fn test_graph_is_assigned_minus_white_space() {
        let graph = Property::XPosixGraph.definition().unwrap();
        let space = Property::XPosixSpace.definition().unwrap();
        assert!(!graph.intersection(&space).has_members());
        assert!(!graph.final_state());
        assert!(graph.contains(0xF0000));
        assert!(!graph.contains(0x0378));
    }

    #[test]
    fn test_xposix_samples() {
        let upper = Property::XPosixUpper.definition().unwrap();
        assert!(upper.contains(0xC0));
        assert!(!upper.contains(0xDF));
        assert!(upper.contains(0x2160));

        let space = Property::XPosixSpace.definition().unwrap();
        for cp in [0x09, 0x20, 0x85, 0xA0, 0x1680, 0x2028, 0x3000] {
            assert!(space.contains(cp), "{:#X} should be space", cp);
        }
        assert!(!space.contains(0x200B));

        let graph = Property::XPosixGraph.definition().unwrap();
        assert!(graph.contains('A' as u32));
        assert!(!graph.contains(0x20));
        assert!(!graph.contains(0x3000));

        let word = Property::XPosixWord.definition().unwrap();
        assert!(word.contains('_' as u32));
        assert!(word.contains(0x200D));
        assert!(word.contains(0x0301));
    }
}
