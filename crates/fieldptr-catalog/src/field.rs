//! Field objects owned by the catalog.

use fieldptr_core::FieldDef;

/// A field: its definition and an interleaved value buffer.
///
/// Values are stored element-major: component `c` of element `e` is
/// `values[e * dim + c]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    def: FieldDef,
    n_elts: usize,
    values: Vec<f64>,
}

impl Field {
    pub(crate) fn new(def: FieldDef, n_elts: usize) -> Self {
        let len = n_elts * def.field_type.components() as usize;
        Self {
            def,
            n_elts,
            values: vec![0.0; len],
        }
    }

    /// The field's definition.
    pub fn def(&self) -> &FieldDef {
        &self.def
    }

    /// The field's unique name.
    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// Number of mesh elements the field is defined on.
    pub fn n_elts(&self) -> usize {
        self.n_elts
    }

    /// Components per element.
    pub fn dim(&self) -> usize {
        self.def.field_type.components() as usize
    }

    /// Value buffer, `n_elts * dim` long.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mutable value buffer.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldptr_core::FieldType;

    #[test]
    fn buffer_sized_by_components() {
        let def = FieldDef {
            field_type: FieldType::Vector { dims: 3 },
            ..FieldDef::scalar("velocity")
        };
        let field = Field::new(def, 10);
        assert_eq!(field.dim(), 3);
        assert_eq!(field.values().len(), 30);
        assert!(field.values().iter().all(|&v| v == 0.0));
    }
}
