//! Enumerated field pointer registry.
//!
//! Solver code addresses well-known fields (temperature, porosity, one
//! field per chemical species, ...) through a small closed enumeration
//! instead of looking them up by name on every access. The registry maps
//! each [`FieldPointerId`](fieldptr_core::FieldPointerId) to a
//! [`FieldHandle`](fieldptr_core::FieldHandle), or to a growable list of
//! handles when the set's size is only known at runtime.
//!
//! # Lifecycle
//!
//! ```text
//! FieldPointerRegistry::new(config)     slots not yet allocated
//!   ├── ensure_init() / first map*()    capacity unset slots
//!   ├── map*() during setup             &mut self, single writer
//!   ├── get*() during the run           &self, any number of readers
//!   └── destroy_all() / Drop            releases slot storage only
//! ```
//!
//! Handles are never owned: the registry neither creates nor frees the
//! fields they point to.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod mapping;
pub mod registry;
pub mod slot;

pub use config::{ConfigError, RegistryConfig};
pub use mapping::{map_atmospheric, map_base, map_boundary, MappingReport};
pub use registry::FieldPointerRegistry;
pub use slot::Slot;
