//! charprop: Unicode character-property classification over inversion lists
//!
//! Each property is a canonical inversion list over the code point domain
//! [0, U+10FFFF]. From it a catalog derives narrower forms (an ASCII bit mask,
//! a Latin-1 list and a list for code points at or above 256) so callers that
//! know their input is narrow can query a smaller table.
//!
//! ```
//! use charprop::{Catalog, Width};
//!
//! let catalog = Catalog::builtin().unwrap();
//! assert!(catalog.classify("PosixUpper", 'Z' as u32, Width::AsciiOnly).unwrap());
//! assert!(catalog.classify("XPosixUpper", 'Ä' as u32, Width::Latin1).unwrap());
//! assert!(!catalog.classify("XPosixUpper", 'ä' as u32, Width::Full).unwrap());
//! ```
//!
//! The process-wide registry answers the same queries by name:
//!
//! ```
//! assert!(charprop::classify("XPosixDigit", 0x0663, charprop::Width::Full).unwrap());
//! ```
//!
//! # Module Organization
//!
//! - `range`: inclusive code point ranges and their normalization
//! - `invlist`: the inversion list, its validation, iteration and set algebra
//! - `variant`: derivation of the ASCII, Latin-1 and non-Latin-1 forms
//! - `general_category`: Unicode general category range tables
//! - `property`: the builtin POSIX-style properties
//! - `catalog`: per-property tables and the catalog built from them
//! - `classify`: width-aware lookup
//! - `artifact`: the compiled, versioned word layout
//! - `registry`: the swappable process-wide catalog

pub mod artifact;
pub mod catalog;
pub mod classify;
pub mod error;
mod general_category;
pub mod invlist;
pub mod property;
pub mod range;
pub mod registry;
pub mod variant;

pub use catalog::{BuildOptions, Catalog, CatalogBuilder, PropertyId, PropertyTables};
pub use classify::Width;
pub use error::{PropertyError, Result, VariantKind};
pub use invlist::{validate, InversionList, Ranges};
pub use property::Property;
pub use range::{CodePointRange, MAX_CODE_POINT};
pub use registry::Registry;

/// Classify `cp` against the named property of the global registry.
///
/// Code points above U+10FFFF are never members. An unknown name is the only
/// error.
pub fn classify(name: &str, cp: u32, width: Width) -> Result<bool> {
    registry::global().classify(name, cp, width)
}
