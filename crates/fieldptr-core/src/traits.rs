//! Boundary traits consumed by the registry's mapping helpers.

use crate::id::{FieldHandle, FieldId};

/// Name- and id-based field resolution, supplied by the field-management
/// subsystem.
///
/// The pointer registry never implements this; its mapping helpers call
/// it once per well-known name during setup so that the hot path can use
/// enumerators instead.
pub trait FieldLookup {
    /// Resolve a field by name.
    ///
    /// Returns `None` if no live field carries this name.
    fn field_by_name(&self, name: &str) -> Option<FieldHandle>;

    /// Resolve a field by catalog id.
    ///
    /// Returns `None` if the id is unknown or its field was removed.
    fn field_by_id(&self, id: FieldId) -> Option<FieldHandle>;
}

impl<T: FieldLookup + ?Sized> FieldLookup for &T {
    fn field_by_name(&self, name: &str) -> Option<FieldHandle> {
        (**self).field_by_name(name)
    }

    fn field_by_id(&self, id: FieldId) -> Option<FieldHandle> {
        (**self).field_by_id(id)
    }
}
