//! The closed enumerator space addressing registry slots.
//!
//! Every logical field role known at build time gets one
//! [`FieldPointerId`]. The registry allocates exactly one slot per
//! variant, so adding a variant here grows every default registry.

use std::fmt;

/// Logical role of a field, used as an O(1) registry key.
///
/// Discriminants are dense and start at zero; `id as usize` is the slot
/// index. Field sets whose size is only known at runtime (one field per
/// chemical species, for instance) share a single enumerator and are
/// addressed by a sub-index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum FieldPointerId {
    /// Local time step.
    Dt = 0,
    /// Pressure.
    Pressure,
    /// Velocity.
    Velocity,
    /// Turbulent kinetic energy.
    TurbulentKineticEnergy,
    /// Turbulent dissipation.
    TurbulentDissipation,
    /// Reynolds stress tensor.
    ReynoldsStress,
    /// Blending factor for hybrid convection schemes.
    HybridBlend,
    /// Mesh velocity (ALE).
    MeshVelocity,
    /// Void fraction for cavitating flows.
    VoidFraction,
    /// Enthalpy.
    Enthalpy,
    /// Temperature.
    Temperature,
    /// Total energy.
    TotalEnergy,
    /// Density at cells.
    Density,
    /// Density at boundary faces.
    BoundaryDensity,
    /// Isobaric specific heat.
    SpecificHeat,
    /// Molecular viscosity.
    MolecularViscosity,
    /// Turbulent dynamic viscosity.
    TurbulentViscosity,
    /// Thermal conductivity.
    Lambda,
    /// Thermal diffusivity.
    ThermalDiffusivity,
    /// Mesh viscosity (ALE).
    MeshViscosity,
    /// Porosity.
    Porosity,
    /// Tensorial porosity.
    TensorialPorosity,
    /// Temperature at boundary faces.
    BoundaryTemperature,
    /// Potential temperature (atmospheric flows).
    PotentialTemperature,
    /// Total water mass fraction (atmospheric flows).
    TotalWaterMassFraction,
    /// Number of droplets per unit mass (atmospheric flows).
    DropletNumber,
    /// Chemical species; one sub-index per species.
    Chemistry,
}

impl FieldPointerId {
    /// Number of known enumerators, and the default registry capacity.
    pub const COUNT: usize = Self::ALL.len();

    /// Every enumerator, in discriminant order.
    pub const ALL: [FieldPointerId; 27] = [
        Self::Dt,
        Self::Pressure,
        Self::Velocity,
        Self::TurbulentKineticEnergy,
        Self::TurbulentDissipation,
        Self::ReynoldsStress,
        Self::HybridBlend,
        Self::MeshVelocity,
        Self::VoidFraction,
        Self::Enthalpy,
        Self::Temperature,
        Self::TotalEnergy,
        Self::Density,
        Self::BoundaryDensity,
        Self::SpecificHeat,
        Self::MolecularViscosity,
        Self::TurbulentViscosity,
        Self::Lambda,
        Self::ThermalDiffusivity,
        Self::MeshViscosity,
        Self::Porosity,
        Self::TensorialPorosity,
        Self::BoundaryTemperature,
        Self::PotentialTemperature,
        Self::TotalWaterMassFraction,
        Self::DropletNumber,
        Self::Chemistry,
    ];

    /// Slot index of this enumerator.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Enumerator for a slot index, if one exists.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short solver-style mnemonic (`dt`, `vel`, `t_b`, ...).
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Dt => "dt",
            Self::Pressure => "p",
            Self::Velocity => "vel",
            Self::TurbulentKineticEnergy => "k",
            Self::TurbulentDissipation => "eps",
            Self::ReynoldsStress => "rij",
            Self::HybridBlend => "hybrid_blend",
            Self::MeshVelocity => "mesh_u",
            Self::VoidFraction => "void_f",
            Self::Enthalpy => "h",
            Self::Temperature => "t",
            Self::TotalEnergy => "e_tot",
            Self::Density => "rho",
            Self::BoundaryDensity => "rho_b",
            Self::SpecificHeat => "cp",
            Self::MolecularViscosity => "mu",
            Self::TurbulentViscosity => "mu_t",
            Self::Lambda => "lambda",
            Self::ThermalDiffusivity => "th_diff",
            Self::MeshViscosity => "vism",
            Self::Porosity => "poro",
            Self::TensorialPorosity => "t_poro",
            Self::BoundaryTemperature => "t_b",
            Self::PotentialTemperature => "pot_t",
            Self::TotalWaterMassFraction => "ym_w",
            Self::DropletNumber => "ntdrp",
            Self::Chemistry => "chemistry",
        }
    }
}

impl fmt::Display for FieldPointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Anything that can address a registry slot.
///
/// Implemented for [`FieldPointerId`] and for raw `usize` indices, so
/// registries sized differently from the built-in enumeration (and
/// callers holding untrusted integers) share one API. The registry
/// checks the index against its capacity on every access.
pub trait PointerKey: Copy + fmt::Debug {
    /// Slot index addressed by this key.
    fn slot_index(self) -> usize;
}

impl PointerKey for FieldPointerId {
    #[inline]
    fn slot_index(self) -> usize {
        self.index()
    }
}

impl PointerKey for usize {
    #[inline]
    fn slot_index(self) -> usize {
        self
    }
}
