//! Generational field store for fieldptr.
//!
//! [`FieldCatalog`] owns field objects (definition plus value buffer)
//! and hands out [`FieldHandle`](fieldptr_core::FieldHandle)s that do not
//! keep anything alive. It implements
//! [`FieldLookup`](fieldptr_core::FieldLookup), which is all the pointer
//! registry's mapping helpers need.
//!
//! # Handle validity
//!
//! ```text
//! create("temperature") -> field#0@g0   resolve() -> Some
//! remove(field#0@g0)                    slot 0 generation -> 1
//! resolve(field#0@g0)                   None (stale)
//! create("porosity")    -> field#0@g1   slot reused, old handle still stale
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod field;

pub use catalog::FieldCatalog;
pub use config::CatalogConfig;
pub use field::Field;
