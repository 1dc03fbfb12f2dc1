//! The process-wide registry of the active catalog.
//!
//! Readers load the current catalog without locking; writers build a new
//! catalog off to the side and swap it in whole. Writers are serialized so a
//! registration cannot lose a concurrent replacement.

use std::sync::Arc;

use arc_swap::ArcSwap;
use log::info;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::catalog::{BuildOptions, Catalog, PropertyTables};
use crate::classify::Width;
use crate::error::Result;
use crate::invlist::InversionList;
use crate::range::CodePointRange;

static GLOBAL: Lazy<Registry> = Lazy::new(|| {
    let catalog = Catalog::builtin().expect("builtin property tables are well formed");
    info!("initialised global registry with {} builtin properties", catalog.len());
    Registry::new(catalog)
});

/// The registry shared by the whole process, holding the builtin catalog
/// until something else is installed.
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// A swappable catalog.
pub struct Registry {
    current: ArcSwap<Catalog>,
    /// Held by writers for the whole read-modify-swap
    update_lock: Mutex<()>,
}

impl Registry {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: ArcSwap::from_pointee(catalog),
            update_lock: Mutex::new(()),
        }
    }

    /// A snapshot of the active catalog. It stays valid after later swaps.
    pub fn catalog(&self) -> Arc<Catalog> {
        self.current.load_full()
    }

    pub fn classify(&self, name: &str, cp: u32, width: Width) -> Result<bool> {
        self.current.load().classify(name, cp, width)
    }

    /// Install `catalog`, returning the one it replaces.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let _guard = self.update_lock.lock();
        info!("installing catalog with {} properties", catalog.len());
        self.current.swap(Arc::new(catalog))
    }

    /// Decode and install a compiled artifact. On any error the active
    /// catalog is left untouched.
    pub fn load_artifact(&self, words: &[u32]) -> Result<()> {
        let catalog = Catalog::from_artifact(words)?;
        self.replace(catalog);
        Ok(())
    }

    /// Add one property to the active catalog.
    pub fn register(&self, name: impl Into<String>, ranges: &[CodePointRange]) -> Result<()> {
        let name = name.into();
        let list = InversionList::from_ranges(ranges)?;
        let added = PropertyTables::derive(name.clone(), list, &BuildOptions::default())?;

        let _guard = self.update_lock.lock();
        let current = self.current.load();
        let mut tables: Vec<PropertyTables> = current.iter().map(|(_, t)| t.clone()).collect();
        tables.push(added);
        let catalog = Catalog::from_tables(tables)?;
        info!(
            "registered property {}; catalog now holds {}",
            name,
            catalog.len()
        );
        self.current.store(Arc::new(catalog));
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Catalog::empty())
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("properties", &self.current.load().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogBuilder;
    use crate::error::PropertyError;
    use crate::property::Property;

    fn r(lo: u32, hi: u32) -> CodePointRange {
        CodePointRange::new(lo, hi)
    }

    fn digits() -> Catalog {
        let mut builder = CatalogBuilder::new();
        builder.add("Digits", &[r(0x30, 0x39)]).unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_global_has_builtins() {
        let registry = global();
        assert!(registry.classify("PosixUpper", 0x41, Width::AsciiOnly).unwrap());
        assert!(registry.catalog().builtin_id(Property::XPosixSpace).is_some());
    }

    #[test]
    fn test_replace_swaps_whole_catalog() {
        let registry = Registry::default();
        assert!(registry.classify("Digits", 0x30, Width::Full).is_err());

        let old = registry.replace(digits());
        assert!(old.is_empty());
        assert!(registry.classify("Digits", 0x30, Width::Full).unwrap());
    }

    #[test]
    fn test_snapshot_survives_swap() {
        let registry = Registry::new(digits());
        let snapshot = registry.catalog();
        registry.replace(Catalog::empty());
        assert!(snapshot.classify("Digits", 0x35, Width::Full).unwrap());
        assert!(registry.classify("Digits", 0x35, Width::Full).is_err());
    }

    #[test]
    fn test_failed_load_keeps_previous_catalog() {
        let registry = Registry::new(digits());
        let mut words = digits().to_artifact();
        words[0] = words[0].wrapping_add(1);
        assert!(matches!(
            registry.load_artifact(&words),
            Err(PropertyError::VersionMismatch { .. })
        ));
        assert!(registry.load_artifact(&[]).is_err());
        assert!(registry.classify("Digits", 0x39, Width::Latin1).unwrap());
    }

    #[test]
    fn test_load_artifact_installs() {
        let registry = Registry::default();
        registry.load_artifact(&digits().to_artifact()).unwrap();
        assert_eq!(registry.catalog().len(), 1);
    }

    #[test]
    fn test_register() {
        let registry = Registry::new(digits());
        registry.register("Hex", &[r(0x41, 0x46), r(0x61, 0x66)]).unwrap();
        assert!(registry.classify("Hex", 0x62, Width::AsciiOnly).unwrap());
        assert!(registry.classify("Digits", 0x31, Width::AsciiOnly).unwrap());

        assert_eq!(
            registry.register("Hex", &[r(0x30, 0x39)]).unwrap_err(),
            PropertyError::DuplicateProperty("Hex".into())
        );
        assert_eq!(registry.catalog().len(), 2);
    }

    #[test]
    fn test_concurrent_register_and_classify() {
        let registry = Arc::new(Registry::new(digits()));
        let handles: Vec<_> = (0..8u32)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    let cp = 0x1000 + i * 0x10;
                    registry.register(format!("Block{}", i), &[r(cp, cp + 0xF)]).unwrap();
                    assert!(registry.classify("Digits", 0x30, Width::Full).unwrap());
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let catalog = registry.catalog();
        assert_eq!(catalog.len(), 9);
        for i in 0..8u32 {
            let name = format!("Block{}", i);
            assert!(catalog.classify(&name, 0x1000 + i * 0x10, Width::Full).unwrap());
        }
    }
}
