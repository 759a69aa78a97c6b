//! Field definitions and types.

/// Classification of a field's data layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// A single floating-point value per element.
    Scalar,
    /// A fixed-size vector of floating-point values per element.
    Vector {
        /// Number of components in the vector (e.g., 3 for velocity).
        dims: u32,
    },
    /// A symmetric 3x3 tensor stored as 6 components per element.
    SymmetricTensor,
}

impl FieldType {
    /// Returns the number of f64 storage slots this field type requires per element.
    pub fn components(&self) -> u32 {
        match self {
            Self::Scalar => 1,
            Self::Vector { dims } => *dims,
            Self::SymmetricTensor => 6,
        }
    }
}

/// Mesh location the field's values are attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldLocation {
    /// One value per cell.
    Cells,
    /// One value per interior face.
    InteriorFaces,
    /// One value per boundary face.
    BoundaryFaces,
    /// One value per vertex.
    Vertices,
    /// A single global value (e.g. a uniform time step).
    Global,
}

/// Definition of a field created in a field catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDef {
    /// Unique name used by name-based lookups (e.g. `"temperature"`).
    pub name: String,
    /// Data type and dimensionality.
    pub field_type: FieldType,
    /// Where on the mesh the values live.
    pub location: FieldLocation,
    /// Optional unit annotation (e.g., `"K"`).
    pub units: Option<String>,
}

impl FieldDef {
    /// Convenience constructor for a unitless scalar cell field.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::Scalar,
            location: FieldLocation::Cells,
            units: None,
        }
    }

    /// Builder-style location override.
    pub fn at(mut self, location: FieldLocation) -> Self {
        self.location = location;
        self
    }

    /// Builder-style unit annotation.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Check structural invariants.
    ///
    /// Names must be non-empty and free of whitespace, since expression
    /// functions pass whitespace-separated name lists. Vectors need at
    /// least one component.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("field name is empty".to_string());
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(format!("field name '{}' contains whitespace", self.name));
        }
        if self.field_type.components() == 0 {
            return Err(format!("field '{}' has zero components", self.name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_per_type() {
        assert_eq!(FieldType::Scalar.components(), 1);
        assert_eq!(FieldType::Vector { dims: 3 }.components(), 3);
        assert_eq!(FieldType::SymmetricTensor.components(), 6);
    }

    #[test]
    fn scalar_builder() {
        let def = FieldDef::scalar("boundary_temperature")
            .at(FieldLocation::BoundaryFaces)
            .with_units("K");
        assert_eq!(def.location, FieldLocation::BoundaryFaces);
        assert_eq!(def.units.as_deref(), Some("K"));
        assert!(def.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_definitions() {
        assert!(FieldDef::scalar("").validate().is_err());
        assert!(FieldDef::scalar("ym water").validate().is_err());
        let zero = FieldDef {
            field_type: FieldType::Vector { dims: 0 },
            ..FieldDef::scalar("velocity")
        };
        assert!(zero.validate().is_err());
    }
}
