//! Reusable catalog and expression fixtures.
//!
//! - [`base_catalog`]: every base and boundary field the standard
//!   mapping helpers look for, except the optional porosity pair.
//! - [`atmospheric_catalog`]: atmospheric fields plus N species.
//! - [`RegistryMeg`]: an expression evaluator that reads its inputs via
//!   a pointer registry, the way generated formulas do.

use fieldptr_catalog::{Field, FieldCatalog};
use fieldptr_core::meg::field_names;
use fieldptr_core::{
    CutCellFn, FieldDef, FieldId, FieldLocation, FieldPointerId, MegError, MegFunctions,
    ZoneSelection,
};
use fieldptr_registry::FieldPointerRegistry;

/// Build a catalog with the base and boundary fields on `n_cells` cells
/// and `n_b_faces` boundary faces.
///
/// `porosity` and `tensorial_porosity` are deliberately absent.
pub fn base_catalog(n_cells: usize, n_b_faces: usize) -> FieldCatalog {
    let mut catalog = FieldCatalog::new();
    for name in [
        "dt",
        "hybrid_blend",
        "enthalpy",
        "temperature",
        "specific_heat",
        "thermal_conductivity",
        "thermal_diffusivity",
        "mesh_viscosity",
    ] {
        catalog
            .create(FieldDef::scalar(name), n_cells)
            .expect("fixture names are unique");
    }
    catalog
        .create(
            FieldDef::scalar("boundary_temperature").at(FieldLocation::BoundaryFaces),
            n_b_faces,
        )
        .expect("fixture names are unique");
    catalog
}

/// Build a catalog with the atmospheric fields and `n_species` species
/// named `species_0..`, returning the species ids in order.
pub fn atmospheric_catalog(n_cells: usize, n_species: usize) -> (FieldCatalog, Vec<FieldId>) {
    let mut catalog = FieldCatalog::new();
    for name in ["temperature", "ym_water", "number_of_droplets"] {
        catalog
            .create(FieldDef::scalar(name), n_cells)
            .expect("fixture names are unique");
    }
    let species = (0..n_species)
        .map(|i| {
            catalog
                .create(FieldDef::scalar(format!("species_{i}")), n_cells)
                .expect("fixture names are unique")
                .id()
        })
        .collect();
    (catalog, species)
}

/// Expression fixture reading its inputs through a pointer registry.
///
/// Formulas:
/// - initialization `temperature`: `300 - 0.0065 z` (standard lapse rate).
/// - boundary `temperature` / `dirichlet`: current `t_b` values.
/// - volume `density`: ideal gas at 101325 Pa from `t`; `porosity`: 1.
/// - source `species_<i>` / `decay`: `-0.1 c` from `chemistry[i]`.
/// - post `temperature_celsius`: `t - 273.15`.
/// - fsi `displacement`: force over a stiffness of 1000.
/// - ibm `sphere`: unit-sphere indicator.
pub struct RegistryMeg<'a> {
    pub registry: &'a FieldPointerRegistry,
    pub catalog: &'a FieldCatalog,
}

const R_AIR: f64 = 287.058;
const P_REF: f64 = 101_325.0;

impl<'a> RegistryMeg<'a> {
    pub fn new(registry: &'a FieldPointerRegistry, catalog: &'a FieldCatalog) -> Self {
        Self { registry, catalog }
    }

    fn field(&self, key: FieldPointerId) -> Result<&'a Field, MegError> {
        self.registry
            .get(key)
            .and_then(|h| self.catalog.resolve(h))
            .ok_or_else(|| MegError::MissingField {
                name: key.short_name().to_string(),
            })
    }

    /// Locate a chemistry sub-index by species name.
    fn species(&self, name: &str) -> Option<&'a Field> {
        self.registry
            .sublist(FieldPointerId::Chemistry)
            .iter()
            .flatten()
            .filter_map(|&h| self.catalog.resolve(h))
            .find(|f| f.name() == name)
    }
}

/// First component of mesh element `id`, checked against the field size.
fn element(field: &Field, id: usize) -> Result<f64, MegError> {
    if id >= field.n_elts() {
        return Err(MegError::LengthMismatch {
            what: "field values",
            expected: id + 1,
            actual: field.n_elts(),
        });
    }
    Ok(field.values()[id * field.dim()])
}

fn sphere(_c_id: usize, xyz: [f64; 3], _t: f64, _num_object: usize) -> f64 {
    let r2 = xyz.iter().map(|x| x * x).sum::<f64>();
    if r2 <= 1.0 {
        1.0
    } else {
        0.0
    }
}

impl MegFunctions for RegistryMeg<'_> {
    fn boundary_function(
        &self,
        zone: &ZoneSelection<'_>,
        field_name: &str,
        condition: &str,
        retvals: &mut [f64],
    ) -> Result<(), MegError> {
        if field_name != "temperature" || condition != "dirichlet" {
            return Err(MegError::UnknownTarget {
                name: format!("{field_name}::{condition}"),
            });
        }
        zone.check_output("retvals", retvals, 1)?;
        let t_b = self.field(FieldPointerId::BoundaryTemperature)?;
        for (e, (id, _)) in zone.elements().enumerate() {
            retvals[e] = element(t_b, id)?;
        }
        Ok(())
    }

    fn volume_function(
        &self,
        zone: &ZoneSelection<'_>,
        names: &str,
        fvals: &mut [&mut [f64]],
    ) -> Result<(), MegError> {
        let names = field_names(names);
        if names.len() != fvals.len() {
            return Err(MegError::LengthMismatch {
                what: "fvals",
                expected: names.len(),
                actual: fvals.len(),
            });
        }
        for (name, out) in names.iter().zip(fvals.iter_mut()) {
            zone.check_output("fvals", out, 1)?;
            match *name {
                "density" => {
                    let t = self.field(FieldPointerId::Temperature)?;
                    for (e, (id, _)) in zone.elements().enumerate() {
                        out[e] = P_REF / (R_AIR * element(t, id)?);
                    }
                }
                "porosity" => out.fill(1.0),
                other => {
                    return Err(MegError::UnknownTarget {
                        name: other.to_string(),
                    })
                }
            }
        }
        Ok(())
    }

    fn initialization(
        &self,
        zone: &ZoneSelection<'_>,
        field_name: &str,
        retvals: &mut [f64],
    ) -> Result<(), MegError> {
        if field_name != "temperature" {
            return Err(MegError::UnknownTarget {
                name: field_name.to_string(),
            });
        }
        zone.check_output("retvals", retvals, 1)?;
        for (e, (_, xyz)) in zone.elements().enumerate() {
            retvals[e] = 300.0 - 0.0065 * xyz[2];
        }
        Ok(())
    }

    fn source_terms(
        &self,
        zone: &ZoneSelection<'_>,
        name: &str,
        source_type: &str,
        retvals: &mut [f64],
    ) -> Result<(), MegError> {
        if source_type != "decay" {
            return Err(MegError::UnknownTarget {
                name: format!("{name}::{source_type}"),
            });
        }
        zone.check_output("retvals", retvals, 1)?;
        let c = self.species(name).ok_or_else(|| MegError::MissingField {
            name: name.to_string(),
        })?;
        for (e, (id, _)) in zone.elements().enumerate() {
            retvals[e] = -0.1 * element(c, id)?;
        }
        Ok(())
    }

    fn fsi_struct(
        &self,
        object_type: &str,
        name: &str,
        fluid_f: &[f64],
        val: &mut [f64],
    ) -> Result<(), MegError> {
        if object_type != "displacement" {
            return Err(MegError::UnknownTarget {
                name: format!("{object_type}::{name}"),
            });
        }
        if fluid_f.len() != val.len() {
            return Err(MegError::LengthMismatch {
                what: "val",
                expected: fluid_f.len(),
                actual: val.len(),
            });
        }
        for (v, f) in val.iter_mut().zip(fluid_f) {
            *v = f / 1000.0;
        }
        Ok(())
    }

    fn post_profiles(&self, name: &str, coords: &mut [[f64; 3]]) -> Result<(), MegError> {
        if name != "centerline" {
            return Err(MegError::UnknownTarget {
                name: name.to_string(),
            });
        }
        let n = coords.len();
        for (i, c) in coords.iter_mut().enumerate() {
            let s = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
            *c = [s, 0.0, 0.0];
        }
        Ok(())
    }

    fn post_calculator(
        &self,
        name: &str,
        zone: &ZoneSelection<'_>,
        retvals: &mut [f64],
    ) -> Result<(), MegError> {
        if name != "temperature_celsius" {
            return Err(MegError::UnknownTarget {
                name: name.to_string(),
            });
        }
        zone.check_output("retvals", retvals, 1)?;
        let t = self.field(FieldPointerId::Temperature)?;
        for (e, (id, _)) in zone.elements().enumerate() {
            retvals[e] = element(t, id)? - 273.15;
        }
        Ok(())
    }

    fn ibm_func_by_name(&self, object_name: &str) -> Option<CutCellFn> {
        match object_name {
            "sphere" => Some(sphere),
            _ => None,
        }
    }
}
