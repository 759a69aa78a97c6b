//! Benchmark profiles for the fieldptr registry.
//!
//! - [`reference_profile`]: a catalog with the base and atmospheric
//!   fields plus a handful of species, mapped into a default registry
//! - [`stress_profile`]: the same with several hundred species and a
//!   much larger catalog, so name lookups pay for it

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fieldptr_catalog::FieldCatalog;
use fieldptr_core::{FieldDef, FieldId, FieldLocation, FieldLookup};
use fieldptr_registry::mapping::{ATMOSPHERIC_FIELDS, BASE_FIELDS, BOUNDARY_FIELDS};
use fieldptr_registry::{
    map_atmospheric, map_base, map_boundary, FieldPointerRegistry, MappingReport,
};

/// A populated catalog and a registry mapped from it.
pub struct Profile {
    /// Owns every field.
    pub catalog: FieldCatalog,
    /// Points at the catalog's well-known fields.
    pub registry: FieldPointerRegistry,
    /// Species field ids, in chemistry sub-index order.
    pub species: Vec<FieldId>,
    /// Combined outcome of the mapping helpers.
    pub report: MappingReport,
}

/// Build a catalog of `n_cells` cells with every standard field,
/// `n_species` species and `n_extra` unrelated padding fields.
///
/// # Panics
///
/// Panics if two generated field names collide.
pub fn build_catalog(
    n_cells: usize,
    n_species: usize,
    n_extra: usize,
) -> (FieldCatalog, Vec<FieldId>) {
    let mut catalog = FieldCatalog::new();
    // Padding goes first so the standard names sit deep in the index.
    for i in 0..n_extra {
        catalog
            .create(FieldDef::scalar(format!("user_scalar_{i}")), n_cells)
            .expect("bench names are unique");
    }
    // The atmospheric table reuses "temperature" from the base table.
    for (_, name) in BASE_FIELDS.into_iter().chain(ATMOSPHERIC_FIELDS) {
        if catalog.field_by_name(name).is_none() {
            catalog
                .create(FieldDef::scalar(name), n_cells)
                .expect("bench names are unique");
        }
    }
    for (_, name) in BOUNDARY_FIELDS {
        catalog
            .create(
                FieldDef::scalar(name).at(FieldLocation::BoundaryFaces),
                n_cells / 10,
            )
            .expect("bench names are unique");
    }
    let species = (0..n_species)
        .map(|i| {
            catalog
                .create(FieldDef::scalar(format!("species_{i}")), n_cells)
                .expect("bench names are unique")
                .id()
        })
        .collect();
    (catalog, species)
}

/// Map every standard helper into a fresh default registry.
pub fn map_all(
    catalog: &FieldCatalog,
    species: &[FieldId],
) -> (FieldPointerRegistry, MappingReport) {
    let mut registry = FieldPointerRegistry::default();
    let mut report = map_base(&mut registry, catalog);
    report.merge(map_boundary(&mut registry, catalog));
    report.merge(map_atmospheric(&mut registry, catalog, species));
    (registry, report)
}

fn profile(n_cells: usize, n_species: usize, n_extra: usize) -> Profile {
    let (catalog, species) = build_catalog(n_cells, n_species, n_extra);
    let (registry, report) = map_all(&catalog, &species);
    Profile {
        catalog,
        registry,
        species,
        report,
    }
}

/// 1K cells, 8 species, 32 padding fields.
pub fn reference_profile() -> Profile {
    profile(1_000, 8, 32)
}

/// 1K cells, 512 species, 4096 padding fields.
pub fn stress_profile() -> Profile {
    profile(1_000, 512, 4_096)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldptr_core::FieldPointerId;

    #[test]
    fn reference_profile_maps_completely() {
        let p = reference_profile();
        assert!(p.report.is_complete());
        assert_eq!(p.registry.sublist_size(FieldPointerId::Chemistry), 8);
        assert_eq!(
            p.registry.get(FieldPointerId::Porosity),
            p.catalog.field_by_name("porosity")
        );
    }

    #[test]
    fn catalog_holds_every_mapped_name_once() {
        let (catalog, species) = build_catalog(10, 2, 3);
        for (_, name) in BASE_FIELDS
            .into_iter()
            .chain(ATMOSPHERIC_FIELDS)
            .chain(BOUNDARY_FIELDS)
        {
            assert!(catalog.field_by_name(name).is_some(), "{name} missing");
        }
        assert_eq!(catalog.len(), 3 + 13 + 2);
        assert_eq!(species.len(), 2);
    }

    #[test]
    fn stress_profile_sizes() {
        let p = stress_profile();
        assert_eq!(p.species.len(), 512);
        assert_eq!(p.catalog.len(), 4_096 + 13 + 512);
        assert_eq!(p.registry.sublist_size(FieldPointerId::Chemistry), 512);
    }
}
