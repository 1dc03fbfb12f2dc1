//! The property catalog: named canonical lists with their derived variants.
//!
//! - `PropertyTables`: one property, canonical list plus ASCII mask and
//!   optional Latin-1 / non-Latin-1 variants
//! - `Catalog`: immutable set of properties, looked up by name or id
//! - `CatalogBuilder`: the producer-facing construction API
//! - `BuildOptions`: which variants the builder derives

use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::classify::Width;
use crate::error::{PropertyError, Result};
use crate::invlist::InversionList;
use crate::property::Property;
use crate::range::{CodePointRange, MAX_CODE_POINT};
use crate::variant::{ascii_mask, latin1_variant, non_latin1_variant, MAX_LATIN1};

/// Dense index of a property within one [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId(u32);

impl PropertyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Controls which restricted variants a [`CatalogBuilder`] derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Derive Latin-1 variants.
    pub latin1_variants: bool,
    /// Derive non-Latin-1 variants.
    pub non_latin1_variants: bool,
    /// Store a Latin-1 variant even when it equals the canonical list.
    pub keep_redundant_latin1: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            latin1_variants: true,
            non_latin1_variants: true,
            keep_redundant_latin1: false,
        }
    }
}

/// One property: its canonical list and everything derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyTables {
    name: String,
    canonical: InversionList,
    /// Bit `n` set when code point `n` (< 128) is a member
    ascii: u128,
    latin1: Option<InversionList>,
    non_latin1: Option<InversionList>,
}

impl PropertyTables {
    /// Derive the variants of `canonical` as directed by `options`.
    ///
    /// A missing non-Latin-1 representation is not an error here: the property
    /// simply carries no such variant.
    pub fn derive(
        name: impl Into<String>,
        canonical: InversionList,
        options: &BuildOptions,
    ) -> Result<Self> {
        let name = name.into();

        let latin1 = match options.latin1_variants {
            true => {
                let l1 = latin1_variant(&canonical);
                (options.keep_redundant_latin1 || l1 != canonical).then_some(l1)
            }
            false => None,
        };

        let non_latin1 = match options.non_latin1_variants {
            true => match non_latin1_variant(&canonical) {
                Ok(high) => Some(high),
                Err(PropertyError::EmptyVariant { variant }) => {
                    debug!("property {}: no {} variant", name, variant);
                    None
                }
                Err(e) => return Err(e),
            },
            false => None,
        };

        trace!(
            "property {}: {} boundaries, latin-1 {:?}, non-latin-1 {:?}",
            name,
            canonical.len(),
            latin1.as_ref().map(|l| l.len()),
            non_latin1.as_ref().map(|l| l.len())
        );

        Ok(Self {
            ascii: ascii_mask(&canonical),
            name,
            canonical,
            latin1,
            non_latin1,
        })
    }

    /// Reassemble tables whose variants were derived elsewhere, checking that
    /// they agree with the canonical list inside their sub-domains.
    pub(crate) fn from_parts(
        name: String,
        canonical: InversionList,
        latin1: Option<InversionList>,
        non_latin1: Option<InversionList>,
    ) -> Result<Self> {
        if let Some(l1) = &latin1 {
            if let Some(cp) = (0..=MAX_LATIN1).find(|&cp| l1.contains(cp) != canonical.contains(cp)) {
                return Err(PropertyError::malformed(format!(
                    "property {}: Latin-1 variant disagrees with canonical list at {:#X}",
                    name, cp
                )));
            }
        }
        if let Some(high) = &non_latin1 {
            // both sides are in canonical form, so set equality is list equality
            if *high != canonical.slice(MAX_LATIN1 + 1, MAX_CODE_POINT) {
                return Err(PropertyError::malformed(format!(
                    "property {}: non-Latin-1 variant disagrees with canonical list",
                    name
                )));
            }
        }
        Ok(Self {
            ascii: ascii_mask(&canonical),
            name,
            canonical,
            latin1,
            non_latin1,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn canonical(&self) -> &InversionList {
        &self.canonical
    }

    /// The stored Latin-1 variant. `None` when it would equal the canonical
    /// list or was not derived.
    pub fn latin1(&self) -> Option<&InversionList> {
        self.latin1.as_ref()
    }

    pub fn non_latin1(&self) -> Option<&InversionList> {
        self.non_latin1.as_ref()
    }

    pub fn ascii_mask(&self) -> u128 {
        self.ascii
    }
}

/// An immutable set of properties.
///
/// Catalog is `Send + Sync`; share it behind an `Arc` for concurrent lookups.
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<PropertyTables>,
    by_name: FxHashMap<String, PropertyId>,
    /// Builtin properties resolved once, indexed by `Property::index`
    builtin: [Option<PropertyId>; Property::COUNT],
}

impl Catalog {
    /// A catalog with no properties.
    pub fn empty() -> Self {
        Self {
            properties: Vec::new(),
            by_name: FxHashMap::default(),
            builtin: [None; Property::COUNT],
        }
    }

    /// A catalog holding every builtin [`Property`] with default options.
    pub fn builtin() -> Result<Self> {
        CatalogBuilder::with_builtins()?.build()
    }

    /// Assemble a catalog from finished tables. Names must be unique.
    pub fn from_tables(tables: Vec<PropertyTables>) -> Result<Self> {
        let mut catalog = Self::empty();
        catalog.by_name.reserve(tables.len());
        for (i, table) in tables.iter().enumerate() {
            let id = PropertyId(i as u32);
            if catalog.by_name.insert(table.name.clone(), id).is_some() {
                return Err(PropertyError::DuplicateProperty(table.name.clone()));
            }
            if let Some(property) = Property::from_name(&table.name) {
                catalog.builtin[property.index()] = Some(id);
            }
        }
        catalog.properties = tables;
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Resolve a property name to its id.
    pub fn id(&self, name: &str) -> Result<PropertyId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| PropertyError::UnknownProperty(name.to_owned()))
    }

    /// Resolve a builtin property, if this catalog holds it.
    #[inline]
    pub fn builtin_id(&self, property: Property) -> Option<PropertyId> {
        self.builtin[property.index()]
    }

    pub fn get(&self, id: PropertyId) -> Option<&PropertyTables> {
        self.properties.get(id.index())
    }

    /// Look up tables by name.
    pub fn tables(&self, name: &str) -> Result<&PropertyTables> {
        Ok(&self.properties[self.id(name)?.index()])
    }

    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &PropertyTables)> {
        self.properties
            .iter()
            .enumerate()
            .map(|(i, t)| (PropertyId(i as u32), t))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|t| t.name())
    }

    /// Does `cp` have the named property?
    ///
    /// Code points above U+10FFFF are never members; only an unknown name is
    /// an error.
    pub fn classify(&self, name: &str, cp: u32, width: Width) -> Result<bool> {
        Ok(self.classify_id(self.id(name)?, cp, width))
    }

    /// Classification by id. An id that does not belong to this catalog
    /// classifies nothing.
    #[inline]
    pub fn classify_id(&self, id: PropertyId, cp: u32, width: Width) -> bool {
        self.get(id).is_some_and(|t| t.classify(cp, width))
    }

    pub fn classify_property(&self, property: Property, cp: u32, width: Width) -> Result<bool> {
        let id = self
            .builtin_id(property)
            .ok_or_else(|| PropertyError::UnknownProperty(property.name().to_owned()))?;
        Ok(self.classify_id(id, cp, width))
    }

    /// Encode as a compiled artifact.
    pub fn to_artifact(&self) -> Vec<u32> {
        crate::artifact::write_catalog(self)
    }

    /// Decode and validate a compiled artifact.
    pub fn from_artifact(words: &[u32]) -> Result<Self> {
        crate::artifact::read_catalog(words)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

/// Collects property definitions and derives their tables in one pass.
///
/// ```
/// # use charprop::{CatalogBuilder, CodePointRange, Width};
/// let mut builder = CatalogBuilder::new();
/// builder.add("PosixUpper", &[
///     CodePointRange::new(0x41, 0x5A),
///     CodePointRange::new(0xC0, 0xD6),
///     CodePointRange::new(0xD8, 0xDE),
/// ]).unwrap();
/// let catalog = builder.build().unwrap();
/// assert!(catalog.classify("PosixUpper", 0x5A, Width::Full).unwrap());
/// assert!(!catalog.classify("PosixUpper", 0xDF, Width::Full).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    options: BuildOptions,
    pending: Vec<(String, InversionList)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder preloaded with every builtin property.
    pub fn with_builtins() -> Result<Self> {
        let mut builder = Self::new();
        for &property in Property::ALL {
            builder.add_builtin(property)?;
        }
        Ok(builder)
    }

    /// A builder preloaded with the canonical lists of an existing catalog.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            options: BuildOptions::default(),
            pending: catalog
                .properties
                .iter()
                .map(|t| (t.name.clone(), t.canonical.clone()))
                .collect(),
        }
    }

    pub fn options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Add a property from the inclusive ranges that hold it.
    pub fn add(&mut self, name: impl Into<String>, ranges: &[CodePointRange]) -> Result<&mut Self> {
        let list = InversionList::from_ranges(ranges)?;
        self.add_list(name, list)
    }

    /// Add a property from an already built canonical list.
    pub fn add_list(&mut self, name: impl Into<String>, list: InversionList) -> Result<&mut Self> {
        let name = name.into();
        if self.pending.iter().any(|(existing, _)| *existing == name) {
            return Err(PropertyError::DuplicateProperty(name));
        }
        self.pending.push((name, list));
        Ok(self)
    }

    pub fn add_builtin(&mut self, property: Property) -> Result<&mut Self> {
        let list = property.definition()?;
        self.add_list(property.name(), list)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Derive every variant and freeze the catalog. Any derivation error
    /// aborts the build.
    pub fn build(self) -> Result<Catalog> {
        let options = self.options;
        let tables = self
            .pending
            .into_iter()
            .map(|(name, list)| PropertyTables::derive(name, list, &options))
            .collect::<Result<Vec<_>>>()?;
        debug!("built catalog with {} properties", tables.len());
        Catalog::from_tables(tables)
    }
}
