//! Core types and traits for the fieldptr workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the registry, the field catalog and the
//! expression boundary: identifiers, the closed enumerator space,
//! field descriptors, error types, and the name-lookup trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod id;
pub mod meg;
pub mod pointer;
pub mod traits;

pub use error::{CatalogError, MegError, RegistryError};
pub use field::{FieldDef, FieldLocation, FieldType};
pub use id::{FieldHandle, FieldId};
pub use meg::{CutCellFn, IbmFsiFn, IbmVolumeFn, MegFunctions, ZoneSelection};
pub use pointer::{FieldPointerId, PointerKey};
pub use traits::FieldLookup;
