//! fieldptr: O(1) access to well-known solver fields by enumerator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the fieldptr sub-crates. For most users, adding `fieldptr` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fieldptr::prelude::*;
//!
//! // Populate a catalog during setup.
//! let mut catalog = FieldCatalog::new();
//! let t = catalog.create(FieldDef::scalar("temperature"), 100).unwrap();
//! let o3 = catalog.create(FieldDef::scalar("o3"), 100).unwrap();
//! let no2 = catalog.create(FieldDef::scalar("no2"), 100).unwrap();
//!
//! // Map the standard fields, then the species list.
//! let mut registry = FieldPointerRegistry::default();
//! let report = map_base(&mut registry, &catalog);
//! assert!(report.unresolved.contains(&"porosity"));
//! map_atmospheric(&mut registry, &catalog, &[o3.id(), no2.id()]);
//!
//! // Solver loops address fields by enumerator.
//! assert_eq!(registry.get(FieldPointerId::Temperature), Some(t));
//! assert_eq!(registry.get(FieldPointerId::Porosity), None);
//! assert_eq!(registry.sublist_size(FieldPointerId::Chemistry), 2);
//! let c1 = registry.get_indexed(FieldPointerId::Chemistry, 1).unwrap();
//! assert_eq!(catalog.resolve(c1).unwrap().name(), "no2");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fieldptr-core` | IDs, handles, enumerators, errors, expression boundary |
//! | [`registry`] | `fieldptr-registry` | The pointer registry and standard mappings |
//! | [`catalog`] | `fieldptr-catalog` | Generational field storage |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`fieldptr-core`).
///
/// Contains [`types::FieldPointerId`], [`types::FieldHandle`], the error
/// enums, and the [`types::MegFunctions`] boundary.
pub use fieldptr_core as types;

/// The field pointer registry (`fieldptr-registry`).
pub use fieldptr_registry as registry;

/// Field storage resolving handles, names and ids (`fieldptr-catalog`).
pub use fieldptr_catalog as catalog;

/// Common imports for typical fieldptr usage.
///
/// ```rust
/// use fieldptr::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use fieldptr_core::{
        FieldDef, FieldHandle, FieldId, FieldLocation, FieldLookup, FieldPointerId, FieldType,
        PointerKey,
    };

    // Errors
    pub use fieldptr_core::{CatalogError, MegError, RegistryError};

    // Registry
    pub use fieldptr_registry::{
        map_atmospheric, map_base, map_boundary, FieldPointerRegistry, MappingReport,
        RegistryConfig, Slot,
    };

    // Catalog
    pub use fieldptr_catalog::{CatalogConfig, Field, FieldCatalog};
}
