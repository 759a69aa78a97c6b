//! Catalog configuration parameters.

/// Configuration for a [`FieldCatalog`](crate::FieldCatalog).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Slots reserved up front. Default: 64.
    pub initial_capacity: usize,
    /// Maximum number of field slots (live plus retired). Default: `u32::MAX`.
    ///
    /// Slot indices become [`FieldId`](fieldptr_core::FieldId)s, which
    /// are `u32`.
    pub max_fields: u32,
}

impl CatalogConfig {
    /// Default number of slots reserved up front.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 64;
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            max_fields: u32::MAX,
        }
    }
}
