//! Strongly-typed identifiers for fields owned by the field catalog.

use std::fmt;

/// Identifies a field within a field catalog.
///
/// Fields are assigned sequential IDs at creation. An ID may be reused
/// after its field is removed; [`FieldHandle`] pairs it with a generation
/// to tell the two occupants apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FieldId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Opaque, non-owning reference to a field held by an external catalog.
///
/// A handle is only meaningful to the catalog that issued it. Holding a
/// handle keeps nothing alive: once the field is removed, the catalog
/// bumps the slot generation and every outstanding handle to the old
/// occupant resolves to nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldHandle {
    id: FieldId,
    generation: u32,
}

impl FieldHandle {
    /// Create a handle for the given field slot and generation.
    pub fn new(id: FieldId, generation: u32) -> Self {
        Self { id, generation }
    }

    /// The catalog slot this handle points into.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Catalog generation of the slot when the handle was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for FieldHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field#{}@g{}", self.id, self.generation)
    }
}
