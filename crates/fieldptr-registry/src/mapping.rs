//! Standard mappings from well-known field names to enumerators.
//!
//! These helpers run once during setup, after the field catalog has been
//! populated. Each resolves a fixed list of names through a
//! [`FieldLookup`] and maps the results, so that solver loops can use
//! `registry.get(FieldPointerId::Temperature)` instead of a name lookup.
//!
//! A name that does not resolve is still mapped, as a null handle: the
//! slot then reports width 1 and `get` returns `None`, which is how
//! optional physics (porosity, ALE, ...) signals "not active".

use fieldptr_core::{FieldId, FieldLookup, FieldPointerId};
use smallvec::SmallVec;

use crate::registry::FieldPointerRegistry;

/// Base fields shared by every physical model.
pub const BASE_FIELDS: [(FieldPointerId, &str); 10] = [
    (FieldPointerId::Dt, "dt"),
    (FieldPointerId::HybridBlend, "hybrid_blend"),
    (FieldPointerId::Enthalpy, "enthalpy"),
    (FieldPointerId::Temperature, "temperature"),
    (FieldPointerId::SpecificHeat, "specific_heat"),
    (FieldPointerId::Lambda, "thermal_conductivity"),
    (FieldPointerId::ThermalDiffusivity, "thermal_diffusivity"),
    (FieldPointerId::MeshViscosity, "mesh_viscosity"),
    (FieldPointerId::Porosity, "porosity"),
    (FieldPointerId::TensorialPorosity, "tensorial_porosity"),
];

/// Boundary fields.
pub const BOUNDARY_FIELDS: [(FieldPointerId, &str); 1] =
    [(FieldPointerId::BoundaryTemperature, "boundary_temperature")];

/// Atmospheric model fields, excluding chemical species.
///
/// The atmospheric model solves for potential temperature but stores it
/// under the generic `"temperature"` name.
pub const ATMOSPHERIC_FIELDS: [(FieldPointerId, &str); 3] = [
    (FieldPointerId::PotentialTemperature, "temperature"),
    (FieldPointerId::TotalWaterMassFraction, "ym_water"),
    (FieldPointerId::DropletNumber, "number_of_droplets"),
];

/// Outcome of a mapping helper.
///
/// Unresolved entries were still mapped as null handles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MappingReport {
    /// Number of `(enumerator, index)` pairs written.
    pub mapped: usize,
    /// Well-known names that resolved to no field.
    pub unresolved: SmallVec<[&'static str; 4]>,
    /// Species field ids that resolved to no field.
    pub unresolved_species: SmallVec<[FieldId; 4]>,
}

impl MappingReport {
    /// Whether every name and id resolved.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty() && self.unresolved_species.is_empty()
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: MappingReport) {
        self.mapped += other.mapped;
        self.unresolved.extend(other.unresolved);
        self.unresolved_species.extend(other.unresolved_species);
    }
}

fn map_names<L: FieldLookup + ?Sized>(
    registry: &mut FieldPointerRegistry,
    lookup: &L,
    table: &[(FieldPointerId, &'static str)],
) -> MappingReport {
    let mut report = MappingReport::default();
    for &(key, name) in table {
        let handle = lookup.field_by_name(name);
        if handle.is_none() {
            report.unresolved.push(name);
        }
        registry.map(key, handle);
        report.mapped += 1;
    }
    report
}

/// Map the base fields ([`BASE_FIELDS`]).
pub fn map_base<L: FieldLookup + ?Sized>(
    registry: &mut FieldPointerRegistry,
    lookup: &L,
) -> MappingReport {
    let report = map_names(registry, lookup, &BASE_FIELDS);
    tracing::debug!(
        mapped = report.mapped,
        unresolved = report.unresolved.len(),
        "base field pointers mapped"
    );
    report
}

/// Map the boundary fields ([`BOUNDARY_FIELDS`]).
pub fn map_boundary<L: FieldLookup + ?Sized>(
    registry: &mut FieldPointerRegistry,
    lookup: &L,
) -> MappingReport {
    let report = map_names(registry, lookup, &BOUNDARY_FIELDS);
    tracing::debug!(
        mapped = report.mapped,
        unresolved = report.unresolved.len(),
        "boundary field pointers mapped"
    );
    report
}

/// Map the atmospheric fields and one chemistry sub-index per species.
///
/// Species `i` is resolved by id (`species_ids[i]`) and mapped at
/// `(FieldPointerId::Chemistry, i)`, so the chemistry slot ends up
/// `species_ids.len()` wide. An unresolvable species id is mapped as a
/// null handle and reported.
pub fn map_atmospheric<L: FieldLookup + ?Sized>(
    registry: &mut FieldPointerRegistry,
    lookup: &L,
    species_ids: &[FieldId],
) -> MappingReport {
    let mut report = map_names(registry, lookup, &ATMOSPHERIC_FIELDS);
    for (i, &id) in species_ids.iter().enumerate() {
        let handle = lookup.field_by_id(id);
        if handle.is_none() {
            tracing::warn!(species = i, field_id = %id, "chemical species field not found");
            report.unresolved_species.push(id);
        }
        registry.map_indexed(FieldPointerId::Chemistry, i, handle);
        report.mapped += 1;
    }
    tracing::debug!(
        mapped = report.mapped,
        n_chem_species = species_ids.len(),
        unresolved = report.unresolved.len() + report.unresolved_species.len(),
        "atmospheric field pointers mapped"
    );
    report
}
