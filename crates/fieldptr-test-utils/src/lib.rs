//! Test utilities and mock types for fieldptr development.
//!
//! Provides a mock [`FieldLookup`] backed by a `HashMap`, catalog
//! fixtures matching the standard mapping helpers, and an expression
//! fixture that reads fields through a pointer registry.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;
use std::sync::Once;

use fieldptr_core::{FieldHandle, FieldId, FieldLookup};

pub mod fixtures;

pub use fixtures::{atmospheric_catalog, base_catalog, RegistryMeg};

/// Mock implementation of [`FieldLookup`].
///
/// Names are assigned sequential ids on [`add`](MockFieldLookup::add).
/// [`remove`](MockFieldLookup::remove) makes a name unresolvable without
/// reusing its id.
pub struct MockFieldLookup {
    by_name: HashMap<String, FieldHandle>,
    by_id: HashMap<FieldId, FieldHandle>,
    next_id: u32,
}

impl MockFieldLookup {
    pub fn new() -> Self {
        Self {
            by_name: HashMap::new(),
            by_id: HashMap::new(),
            next_id: 0,
        }
    }

    /// Register a name and return its handle.
    pub fn add(&mut self, name: &str) -> FieldHandle {
        let handle = FieldHandle::new(FieldId(self.next_id), 0);
        self.next_id += 1;
        self.by_name.insert(name.to_string(), handle);
        self.by_id.insert(handle.id(), handle);
        handle
    }

    /// Forget a name, returning its former handle.
    pub fn remove(&mut self, name: &str) -> Option<FieldHandle> {
        let handle = self.by_name.remove(name)?;
        self.by_id.remove(&handle.id());
        Some(handle)
    }
}

impl Default for MockFieldLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldLookup for MockFieldLookup {
    fn field_by_name(&self, name: &str) -> Option<FieldHandle> {
        self.by_name.get(name).copied()
    }

    fn field_by_id(&self, id: FieldId) -> Option<FieldHandle> {
        self.by_id.get(&id).copied()
    }
}

/// Install a `tracing` subscriber honouring `RUST_LOG`, once per process.
///
/// Output goes through the test writer so it is captured per test.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
