//! Boundary of the generated expression (MEG) functions.
//!
//! Formula-driven boundary conditions, initial values, source terms and
//! post-processing quantities are produced by generated code outside
//! this workspace. Only their calling convention lives here: a zone
//! selection plus caller-provided output buffers. Implementations may
//! read other fields through a pointer registry; how they evaluate
//! expressions is their own business.

use smallvec::SmallVec;

use crate::error::MegError;

/// Cut-cell indicator for an immersed object: `(cell_id, xyz, t, object) -> value`.
pub type CutCellFn = fn(usize, [f64; 3], f64, usize) -> f64;

/// Volume quantity of an immersed object, written into the output slice.
pub type IbmVolumeFn = fn(usize, [f64; 3], f64, &mut [f64]);

/// Fluid-structure interaction quantity of an immersed object.
pub type IbmFsiFn = fn(&mut [f64]);

/// Elements of a named zone, with their coordinates.
///
/// `xyz` holds coordinates for the whole mesh location. When `elt_ids`
/// is `None` the zone covers the first `n_elts` entries of `xyz`
/// directly; otherwise element `e` of the zone is `xyz[elt_ids[e]]`.
#[derive(Clone, Copy, Debug)]
pub struct ZoneSelection<'a> {
    name: &'a str,
    n_elts: usize,
    elt_ids: Option<&'a [usize]>,
    xyz: &'a [[f64; 3]],
}

impl<'a> ZoneSelection<'a> {
    /// Build a selection, checking that every element has a coordinate.
    pub fn new(
        name: &'a str,
        n_elts: usize,
        elt_ids: Option<&'a [usize]>,
        xyz: &'a [[f64; 3]],
    ) -> Result<Self, MegError> {
        match elt_ids {
            Some(ids) => {
                if ids.len() != n_elts {
                    return Err(MegError::LengthMismatch {
                        what: "elt_ids",
                        expected: n_elts,
                        actual: ids.len(),
                    });
                }
                if let Some(&max) = ids.iter().max() {
                    if max >= xyz.len() {
                        return Err(MegError::LengthMismatch {
                            what: "xyz",
                            expected: max + 1,
                            actual: xyz.len(),
                        });
                    }
                }
            }
            None => {
                if xyz.len() < n_elts {
                    return Err(MegError::LengthMismatch {
                        what: "xyz",
                        expected: n_elts,
                        actual: xyz.len(),
                    });
                }
            }
        }
        Ok(Self {
            name,
            n_elts,
            elt_ids,
            xyz,
        })
    }

    /// Zone name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Number of elements in the zone.
    pub fn len(&self) -> usize {
        self.n_elts
    }

    /// Whether the zone is empty.
    pub fn is_empty(&self) -> bool {
        self.n_elts == 0
    }

    /// Mesh element id of the zone's `e`-th element.
    #[inline]
    pub fn elt_id(&self, e: usize) -> usize {
        match self.elt_ids {
            Some(ids) => ids[e],
            None => e,
        }
    }

    /// Iterate `(mesh element id, coordinates)` over the zone.
    pub fn elements(&self) -> impl Iterator<Item = (usize, [f64; 3])> + '_ {
        (0..self.n_elts).map(move |e| {
            let id = self.elt_id(e);
            (id, self.xyz[id])
        })
    }

    /// Check that an output buffer holds `stride` values per element.
    pub fn check_output(
        &self,
        what: &'static str,
        buf: &[f64],
        stride: usize,
    ) -> Result<(), MegError> {
        let expected = self.n_elts * stride;
        if buf.len() != expected {
            return Err(MegError::LengthMismatch {
                what,
                expected,
                actual: buf.len(),
            });
        }
        Ok(())
    }
}

/// Split a whitespace-separated field name list.
///
/// Volume functions receive several field names in one string and one
/// output buffer per name, in the same order.
pub fn field_names(list: &str) -> SmallVec<[&str; 4]> {
    list.split_whitespace().collect()
}

/// Generated expression functions, consumed through this trait.
///
/// Every evaluator writes into caller-provided buffers and returns
/// [`MegError::UnknownTarget`] when it has no formula for the request.
pub trait MegFunctions {
    /// Evaluate a boundary condition formula over a boundary zone.
    fn boundary_function(
        &self,
        zone: &ZoneSelection<'_>,
        field_name: &str,
        condition: &str,
        retvals: &mut [f64],
    ) -> Result<(), MegError>;

    /// Evaluate volume formulas for several fields at once.
    ///
    /// `fvals[i]` receives the values of the `i`-th name in `field_names`.
    fn volume_function(
        &self,
        zone: &ZoneSelection<'_>,
        field_names: &str,
        fvals: &mut [&mut [f64]],
    ) -> Result<(), MegError>;

    /// Evaluate the initial value formula of a field.
    fn initialization(
        &self,
        zone: &ZoneSelection<'_>,
        field_name: &str,
        retvals: &mut [f64],
    ) -> Result<(), MegError>;

    /// Evaluate a source term formula.
    fn source_terms(
        &self,
        zone: &ZoneSelection<'_>,
        name: &str,
        source_type: &str,
        retvals: &mut [f64],
    ) -> Result<(), MegError>;

    /// Evaluate a fluid-structure coupling formula from fluid forces.
    fn fsi_struct(
        &self,
        object_type: &str,
        name: &str,
        fluid_f: &[f64],
        val: &mut [f64],
    ) -> Result<(), MegError>;

    /// Activate formula-defined post-processing outputs.
    fn post_activate(&self) {}

    /// Fill the sampling coordinates of a named profile.
    fn post_profiles(&self, name: &str, coords: &mut [[f64; 3]]) -> Result<(), MegError>;

    /// Evaluate a formula-defined post-processing quantity.
    fn post_calculator(
        &self,
        name: &str,
        zone: &ZoneSelection<'_>,
        retvals: &mut [f64],
    ) -> Result<(), MegError>;

    /// Cut-cell function of an immersed object.
    fn ibm_func_by_name(&self, _object_name: &str) -> Option<CutCellFn> {
        None
    }

    /// Volume function of an immersed object for a GUI variable.
    fn ibm_volume_func_by_name(
        &self,
        _object_name: &str,
        _gui_var_name: &str,
    ) -> Option<IbmVolumeFn> {
        None
    }

    /// FSI function of an immersed object for a GUI variable.
    fn ibm_fsi_func_by_name(&self, _object_name: &str, _gui_var_name: &str) -> Option<IbmFsiFn> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XYZ: [[f64; 3]; 4] = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [2.0, 0.0, 0.0],
        [3.0, 0.0, 0.0],
    ];

    #[test]
    fn implicit_ids_cover_leading_elements() {
        let zone = ZoneSelection::new("all_cells", 3, None, &XYZ).unwrap();
        let ids: Vec<_> = zone.elements().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn explicit_ids_select_coordinates() {
        let ids = [3, 1];
        let zone = ZoneSelection::new("inlet", 2, Some(&ids), &XYZ).unwrap();
        let xs: Vec<_> = zone.elements().map(|(_, x)| x[0]).collect();
        assert_eq!(xs, vec![3.0, 1.0]);
        assert_eq!(zone.elt_id(0), 3);
    }

    #[test]
    fn rejects_ids_past_coordinates() {
        let ids = [0, 4];
        let err = ZoneSelection::new("bad", 2, Some(&ids), &XYZ).unwrap_err();
        assert_eq!(
            err,
            MegError::LengthMismatch {
                what: "xyz",
                expected: 5,
                actual: 4
            }
        );
    }

    #[test]
    fn rejects_id_count_mismatch() {
        let ids = [0];
        assert!(ZoneSelection::new("bad", 2, Some(&ids), &XYZ).is_err());
        assert!(ZoneSelection::new("bad", 5, None, &XYZ).is_err());
    }

    #[test]
    fn check_output_uses_stride() {
        let zone = ZoneSelection::new("wall", 2, None, &XYZ).unwrap();
        assert!(zone.check_output("retvals", &[0.0; 6], 3).is_ok());
        assert!(zone.check_output("retvals", &[0.0; 2], 3).is_err());
    }

    #[test]
    fn field_names_split_on_whitespace() {
        let names = field_names("temperature  ym_water\tnumber_of_droplets");
        assert_eq!(
            names.as_slice(),
            &["temperature", "ym_water", "number_of_droplets"]
        );
        assert!(field_names("   ").is_empty());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn selection_valid_iff_ids_in_bounds(
                n_xyz in 0usize..16,
                ids in prop::collection::vec(0usize..20, 0..8),
            ) {
                let xyz = vec![[0.0; 3]; n_xyz];
                let result = ZoneSelection::new("z", ids.len(), Some(ids.as_slice()), &xyz);
                prop_assert_eq!(result.is_ok(), ids.iter().all(|&id| id < n_xyz));
                if let Ok(zone) = result {
                    let seen: Vec<_> = zone.elements().map(|(id, _)| id).collect();
                    prop_assert_eq!(seen, ids.clone());
                }
            }
        }
    }
}
