//! The field catalog: generational slots plus a name index.

use indexmap::IndexMap;

use fieldptr_core::{CatalogError, FieldDef, FieldHandle, FieldId, FieldLookup};

use crate::config::CatalogConfig;
use crate::field::Field;

/// One catalog slot. `field` is `None` once removed.
#[derive(Debug)]
struct Entry {
    generation: u32,
    field: Option<Field>,
}

/// Owns fields and resolves them by handle, name or id.
///
/// Removing a field bumps its slot generation, so every handle issued for
/// it (including copies held by a pointer registry) stops resolving. The
/// slot index is then reused by the next `create`.
#[derive(Debug)]
pub struct FieldCatalog {
    config: CatalogConfig,
    entries: Vec<Entry>,
    /// Indices of removed slots, available for reuse.
    free_list: Vec<usize>,
    /// Live fields by name, in creation order.
    by_name: IndexMap<String, FieldId>,
}

impl FieldCatalog {
    /// Create an empty catalog with default configuration.
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    /// Create an empty catalog.
    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            entries: Vec::with_capacity(config.initial_capacity),
            free_list: Vec::new(),
            by_name: IndexMap::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Create a field with `n_elts` zero-initialised elements.
    pub fn create(&mut self, def: FieldDef, n_elts: usize) -> Result<FieldHandle, CatalogError> {
        def.validate()
            .map_err(|reason| CatalogError::InvalidField { reason })?;
        if self.by_name.contains_key(&def.name) {
            return Err(CatalogError::DuplicateName { name: def.name });
        }

        let index = match self.free_list.pop() {
            Some(index) => index,
            None => {
                if self.entries.len() >= self.config.max_fields as usize {
                    return Err(CatalogError::CapacityExceeded {
                        slots: self.entries.len(),
                    });
                }
                self.entries.push(Entry {
                    generation: 0,
                    field: None,
                });
                self.entries.len() - 1
            }
        };
        let id = FieldId(index as u32);

        self.by_name.insert(def.name.clone(), id);
        let entry = &mut self.entries[index];
        entry.field = Some(Field::new(def, n_elts));
        let handle = FieldHandle::new(id, entry.generation);
        tracing::trace!(%handle, n_elts, "field created");
        Ok(handle)
    }

    /// Remove a field, invalidating every handle to it.
    pub fn remove(&mut self, handle: FieldHandle) -> Result<Field, CatalogError> {
        self.get(handle)?;
        let index = handle.id().0 as usize;
        let entry = &mut self.entries[index];
        let field = entry.field.take().ok_or(CatalogError::StaleHandle { handle })?;
        entry.generation = entry.generation.wrapping_add(1);
        self.by_name.shift_remove(field.name());
        self.free_list.push(index);
        tracing::trace!(%handle, "field removed");
        Ok(field)
    }

    /// Borrow the field behind a handle.
    pub fn get(&self, handle: FieldHandle) -> Result<&Field, CatalogError> {
        let entry = self
            .entries
            .get(handle.id().0 as usize)
            .ok_or(CatalogError::UnknownField { id: handle.id() })?;
        match &entry.field {
            Some(field) if entry.generation == handle.generation() => Ok(field),
            _ => Err(CatalogError::StaleHandle { handle }),
        }
    }

    /// Mutably borrow the field behind a handle.
    pub fn get_mut(&mut self, handle: FieldHandle) -> Result<&mut Field, CatalogError> {
        let entry = self
            .entries
            .get_mut(handle.id().0 as usize)
            .ok_or(CatalogError::UnknownField { id: handle.id() })?;
        let generation = entry.generation;
        match &mut entry.field {
            Some(field) if generation == handle.generation() => Ok(field),
            _ => Err(CatalogError::StaleHandle { handle }),
        }
    }

    /// Like [`get`](Self::get), discarding the reason.
    ///
    /// Stale handles are logged: a registry still pointing at a removed
    /// field usually means setup and teardown ran out of order.
    pub fn resolve(&self, handle: FieldHandle) -> Option<&Field> {
        match self.get(handle) {
            Ok(field) => Some(field),
            Err(err) => {
                tracing::warn!(%err, "field handle did not resolve");
                None
            }
        }
    }

    /// Current handle for a slot id, if the slot holds a live field.
    pub fn handle_of(&self, id: FieldId) -> Option<FieldHandle> {
        let entry = self.entries.get(id.0 as usize)?;
        entry
            .field
            .as_ref()
            .map(|_| FieldHandle::new(id, entry.generation))
    }

    /// Number of live fields.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the catalog holds no live fields.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterate live fields in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldHandle, &Field)> + '_ {
        self.by_name.values().filter_map(move |&id| {
            let entry = &self.entries[id.0 as usize];
            entry
                .field
                .as_ref()
                .map(|field| (FieldHandle::new(id, entry.generation), field))
        })
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldLookup for FieldCatalog {
    fn field_by_name(&self, name: &str) -> Option<FieldHandle> {
        let &id = self.by_name.get(name)?;
        self.handle_of(id)
    }

    fn field_by_id(&self, id: FieldId) -> Option<FieldHandle> {
        self.handle_of(id)
    }
}
