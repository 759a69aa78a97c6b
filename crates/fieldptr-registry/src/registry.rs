//! The field pointer registry.
//!
//! [`FieldPointerRegistry`] is a fixed array of [`Slot`]s indexed by
//! enumerator. Mapping takes `&mut self` and reading takes `&self`, so
//! the single-writer setup phase and the many-reader compute phase are
//! enforced by the borrow checker rather than by locks.

use std::fmt;

use fieldptr_core::{FieldHandle, PointerKey, RegistryError};

use crate::config::{ConfigError, RegistryConfig};
use crate::slot::Slot;

/// O(1) map from enumerator (and optional sub-index) to field handle.
///
/// Slot storage is allocated lazily by [`ensure_init`](Self::ensure_init)
/// or the first mapping call, and released by
/// [`destroy_all`](Self::destroy_all) or on drop. The registry never owns
/// the fields behind its handles.
///
/// Keys outside `0..capacity` are contract violations: the plain methods
/// log and panic, the `try_*` methods return [`RegistryError`].
#[derive(Debug)]
pub struct FieldPointerRegistry {
    config: RegistryConfig,
    /// `None` until initialized, and again after teardown.
    slots: Option<Box<[Slot]>>,
}

impl FieldPointerRegistry {
    /// Create an uninitialized registry.
    pub fn new(config: RegistryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            slots: None,
        })
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// The configuration this registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Whether slot storage is currently allocated.
    pub fn is_initialized(&self) -> bool {
        self.slots.is_some()
    }

    /// Allocate slot storage if it is not allocated yet.
    ///
    /// Every slot starts unset. Calling this on an initialized registry
    /// does nothing and loses no mappings.
    pub fn ensure_init(&mut self) {
        self.slots_mut();
    }

    /// Release all slot storage, including expanded sub-lists.
    ///
    /// Referenced fields are untouched. Afterwards every lookup returns
    /// `None` until the registry is initialized again, at which point all
    /// slots are unset.
    pub fn destroy_all(&mut self) {
        if let Some(slots) = self.slots.take() {
            let expanded = slots.iter().filter(|s| s.is_expanded()).count();
            tracing::debug!(
                capacity = slots.len(),
                expanded,
                "field pointer registry destroyed"
            );
        }
    }

    // ── mapping ──────────────────────────────────────────────────

    /// Map `key` to a single handle; same as `map_indexed(key, 0, handle)`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is out of range.
    #[track_caller]
    pub fn map<K: PointerKey>(&mut self, key: K, handle: impl Into<Option<FieldHandle>>) {
        self.map_indexed(key, 0, handle);
    }

    /// Map `(key, index)` to a handle, growing the slot's sub-list if needed.
    ///
    /// Index 0 on a slot that was never expanded is stored inline without
    /// allocating. Any other index switches the slot to a list of width
    /// `index + 1` (keeping the inline handle at position 0 and filling
    /// gaps with `None`), or overwrites in place when already wide enough.
    ///
    /// # Panics
    ///
    /// Panics if `key` is out of range or `index` reaches
    /// [`RegistryConfig::max_sublist_len`].
    #[track_caller]
    pub fn map_indexed<K: PointerKey>(
        &mut self,
        key: K,
        index: usize,
        handle: impl Into<Option<FieldHandle>>,
    ) {
        if let Err(err) = self.try_map_indexed(key, index, handle) {
            contract_violation(err);
        }
    }

    /// Checked form of [`map`](Self::map).
    pub fn try_map<K: PointerKey>(
        &mut self,
        key: K,
        handle: impl Into<Option<FieldHandle>>,
    ) -> Result<(), RegistryError> {
        self.try_map_indexed(key, 0, handle)
    }

    /// Checked form of [`map_indexed`](Self::map_indexed).
    pub fn try_map_indexed<K: PointerKey>(
        &mut self,
        key: K,
        index: usize,
        handle: impl Into<Option<FieldHandle>>,
    ) -> Result<(), RegistryError> {
        let slot_index = self.check(key)?;
        if index >= self.config.max_sublist_len {
            return Err(RegistryError::SublistTooLong {
                key: slot_index,
                index,
                max: self.config.max_sublist_len,
            });
        }
        let handle = handle.into();
        let slot = &mut self.slots_mut()[slot_index];
        if let Some(old_width) = slot.set(index, handle) {
            tracing::trace!(
                key = ?key,
                old_width,
                new_width = slot.width(),
                "field pointer sub-list grown"
            );
        }
        Ok(())
    }

    // ── lookup ───────────────────────────────────────────────────

    /// Handle mapped at `key` (sub-index 0).
    ///
    /// # Panics
    ///
    /// Panics if `key` is out of range.
    #[inline]
    #[track_caller]
    pub fn get<K: PointerKey>(&self, key: K) -> Option<FieldHandle> {
        self.get_indexed(key, 0)
    }

    /// Handle mapped at `(key, index)`.
    ///
    /// Returns `None` for unmapped slots, null entries, indices past the
    /// slot's width, and an uninitialized registry.
    ///
    /// # Panics
    ///
    /// Panics if `key` is out of range.
    #[inline]
    #[track_caller]
    pub fn get_indexed<K: PointerKey>(&self, key: K, index: usize) -> Option<FieldHandle> {
        match self.try_get_indexed(key, index) {
            Ok(handle) => handle,
            Err(err) => contract_violation(err),
        }
    }

    /// Checked form of [`get`](Self::get).
    pub fn try_get<K: PointerKey>(&self, key: K) -> Result<Option<FieldHandle>, RegistryError> {
        self.try_get_indexed(key, 0)
    }

    /// Checked form of [`get_indexed`](Self::get_indexed).
    #[inline]
    pub fn try_get_indexed<K: PointerKey>(
        &self,
        key: K,
        index: usize,
    ) -> Result<Option<FieldHandle>, RegistryError> {
        let slot_index = self.check(key)?;
        Ok(self
            .slots
            .as_deref()
            .and_then(|slots| slots[slot_index].get(index)))
    }

    /// Current width of `key`'s slot: 0 unset, 1 direct, >1 expanded.
    ///
    /// # Panics
    ///
    /// Panics if `key` is out of range.
    #[track_caller]
    pub fn sublist_size<K: PointerKey>(&self, key: K) -> usize {
        self.sublist(key).len()
    }

    /// Every position of `key`'s slot, in sub-index order.
    ///
    /// # Panics
    ///
    /// Panics if `key` is out of range.
    #[track_caller]
    pub fn sublist<K: PointerKey>(&self, key: K) -> &[Option<FieldHandle>] {
        let slot_index = match self.check(key) {
            Ok(i) => i,
            Err(err) => contract_violation(err),
        };
        match self.slots.as_deref() {
            Some(slots) => slots[slot_index].as_slice(),
            None => &[],
        }
    }

    /// Number of slots mapped at least once since initialization.
    pub fn mapped_count(&self) -> usize {
        self.iter().filter(|(_, slot)| slot.width() > 0).count()
    }

    /// Iterate `(slot index, slot)` pairs; empty when uninitialized.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Slot)> {
        self.slots.as_deref().unwrap_or(&[]).iter().enumerate()
    }

    // ── internals ────────────────────────────────────────────────

    #[inline]
    fn check<K: PointerKey>(&self, key: K) -> Result<usize, RegistryError> {
        let index = key.slot_index();
        if index < self.config.capacity {
            Ok(index)
        } else {
            Err(RegistryError::OutOfRange {
                key: index,
                capacity: self.config.capacity,
            })
        }
    }

    fn slots_mut(&mut self) -> &mut [Slot] {
        let capacity = self.config.capacity;
        self.slots.get_or_insert_with(|| {
            tracing::debug!(capacity, "field pointer registry initialized");
            vec![Slot::Unset; capacity].into_boxed_slice()
        })
    }
}

impl Default for FieldPointerRegistry {
    fn default() -> Self {
        Self {
            config: RegistryConfig::default(),
            slots: None,
        }
    }
}

impl Drop for FieldPointerRegistry {
    fn drop(&mut self) {
        self.destroy_all();
    }
}

impl fmt::Display for FieldPointerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_initialized() {
            return write!(
                f,
                "field pointer registry ({} slots, uninitialized)",
                self.capacity()
            );
        }
        let expanded = self.iter().filter(|(_, s)| s.is_expanded()).count();
        write!(
            f,
            "field pointer registry ({} slots, {} mapped, {} expanded)",
            self.capacity(),
            self.mapped_count(),
            expanded
        )
    }
}

#[cold]
#[track_caller]
fn contract_violation(err: RegistryError) -> ! {
    tracing::error!(%err, "field pointer registry contract violation");
    panic!("{err}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldptr_core::{FieldId, FieldPointerId};

    fn h(n: u32) -> FieldHandle {
        FieldHandle::new(FieldId(n), 0)
    }

    fn registry() -> FieldPointerRegistry {
        FieldPointerRegistry::default()
    }

    #[test]
    fn new_registry_is_lazy() {
        let reg = registry();
        assert!(!reg.is_initialized());
        assert_eq!(reg.get(FieldPointerId::Temperature), None);
        assert_eq!(reg.sublist_size(FieldPointerId::Temperature), 0);
        assert_eq!(reg.iter().count(), 0);
    }

    #[test]
    fn map_initializes_on_demand() {
        let mut reg = registry();
        reg.map(FieldPointerId::Dt, h(0));
        assert!(reg.is_initialized());
        assert_eq!(reg.get(FieldPointerId::Dt), Some(h(0)));
        assert_eq!(reg.iter().count(), FieldPointerId::COUNT);
    }

    #[test]
    fn ensure_init_is_idempotent() {
        let mut reg = registry();
        reg.ensure_init();
        reg.map(FieldPointerId::Porosity, h(3));
        reg.ensure_init();
        assert_eq!(reg.get(FieldPointerId::Porosity), Some(h(3)));
        assert_eq!(reg.mapped_count(), 1);
    }

    #[test]
    fn map_null_marks_slot_direct() {
        let mut reg = registry();
        reg.map(FieldPointerId::HybridBlend, None);
        assert_eq!(reg.get(FieldPointerId::HybridBlend), None);
        assert_eq!(reg.sublist_size(FieldPointerId::HybridBlend), 1);
    }

    #[test]
    fn index_zero_never_expands() {
        let mut reg = registry();
        for n in 0..16 {
            reg.map_indexed(FieldPointerId::Temperature, 0, h(n));
            assert_eq!(reg.sublist_size(FieldPointerId::Temperature), 1);
        }
        assert_eq!(reg.get(FieldPointerId::Temperature), Some(h(15)));
    }

    #[test]
    fn expansion_preserves_direct_value() {
        let mut reg = registry();
        reg.map(FieldPointerId::Chemistry, h(10));
        reg.map_indexed(FieldPointerId::Chemistry, 2, h(12));
        assert_eq!(reg.get_indexed(FieldPointerId::Chemistry, 0), Some(h(10)));
        assert_eq!(reg.get_indexed(FieldPointerId::Chemistry, 1), None);
        assert_eq!(reg.get_indexed(FieldPointerId::Chemistry, 2), Some(h(12)));
        assert_eq!(reg.sublist_size(FieldPointerId::Chemistry), 3);
    }

    #[test]
    fn expansion_with_unset_head_stores_null() {
        let mut reg = registry();
        reg.map_indexed(FieldPointerId::Chemistry, 1, h(11));
        assert_eq!(
            reg.sublist(FieldPointerId::Chemistry),
            &[None, Some(h(11))]
        );
        reg.map_indexed(FieldPointerId::Chemistry, 0, h(10));
        assert_eq!(reg.get(FieldPointerId::Chemistry), Some(h(10)));
        assert_eq!(reg.sublist_size(FieldPointerId::Chemistry), 2);
    }

    #[test]
    fn regrowth_keeps_rewritten_head() {
        let mut reg = registry();
        reg.map(FieldPointerId::Chemistry, h(1));
        reg.map_indexed(FieldPointerId::Chemistry, 1, h(2));
        reg.map_indexed(FieldPointerId::Chemistry, 0, h(100));
        reg.map_indexed(FieldPointerId::Chemistry, 5, h(6));
        assert_eq!(reg.get(FieldPointerId::Chemistry), Some(h(100)));
        assert_eq!(reg.get_indexed(FieldPointerId::Chemistry, 1), Some(h(2)));
        assert_eq!(reg.sublist_size(FieldPointerId::Chemistry), 6);
    }

    #[test]
    fn raw_keys_address_the_same_slots() {
        let mut reg = registry();
        reg.map(FieldPointerId::Temperature.index(), h(7));
        assert_eq!(reg.get(FieldPointerId::Temperature), Some(h(7)));
    }

    #[test]
    fn try_map_rejects_out_of_range() {
        let mut reg = registry();
        let err = reg.try_map(FieldPointerId::COUNT, h(0)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::OutOfRange {
                key: FieldPointerId::COUNT,
                capacity: FieldPointerId::COUNT,
            }
        );
        assert!(!reg.is_initialized());
    }

    #[test]
    fn try_get_rejects_out_of_range() {
        let reg = registry();
        assert!(reg.try_get(usize::MAX).is_err());
        assert_eq!(reg.try_get(FieldPointerId::Dt), Ok(None));
    }

    #[test]
    fn large_index_grows_on_default_registry() {
        let mut reg = registry();
        reg.map_indexed(FieldPointerId::Chemistry, 5000, h(7));
        assert_eq!(reg.sublist_size(FieldPointerId::Chemistry), 5001);
        assert_eq!(reg.get_indexed(FieldPointerId::Chemistry, 5000), Some(h(7)));
        assert_eq!(reg.get_indexed(FieldPointerId::Chemistry, 4999), None);

        let last = RegistryConfig::DEFAULT_MAX_SUBLIST_LEN - 1;
        assert!(reg.try_map_indexed(FieldPointerId::Chemistry, last, h(8)).is_ok());
        assert_eq!(reg.sublist_size(FieldPointerId::Chemistry), last + 1);
    }

    #[test]
    fn try_map_rejects_oversized_index() {
        let cfg = RegistryConfig {
            max_sublist_len: 8,
            ..RegistryConfig::default()
        };
        let mut reg = FieldPointerRegistry::new(cfg).unwrap();
        assert!(reg.try_map_indexed(FieldPointerId::Chemistry, 7, h(0)).is_ok());
        assert_eq!(
            reg.try_map_indexed(FieldPointerId::Chemistry, 8, h(0)),
            Err(RegistryError::SublistTooLong {
                key: FieldPointerId::Chemistry.index(),
                index: 8,
                max: 8,
            })
        );
        assert_eq!(reg.sublist_size(FieldPointerId::Chemistry), 8);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn map_out_of_range_panics() {
        let mut reg = FieldPointerRegistry::new(RegistryConfig::with_capacity(4)).unwrap();
        reg.map(4usize, h(0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_out_of_range_panics() {
        let reg = FieldPointerRegistry::new(RegistryConfig::with_capacity(4)).unwrap();
        let _ = reg.get(FieldPointerId::Chemistry);
    }

    #[test]
    fn destroy_all_resets_every_slot() {
        let mut reg = registry();
        reg.map(FieldPointerId::Temperature, h(1));
        reg.map_indexed(FieldPointerId::Chemistry, 3, h(2));
        reg.destroy_all();
        assert!(!reg.is_initialized());
        assert_eq!(reg.get(FieldPointerId::Temperature), None);

        reg.ensure_init();
        assert!(reg.iter().all(|(_, slot)| *slot == Slot::Unset));
        assert_eq!(reg.sublist_size(FieldPointerId::Chemistry), 0);
    }

    #[test]
    fn destroy_all_twice_is_harmless() {
        let mut reg = registry();
        reg.ensure_init();
        reg.destroy_all();
        reg.destroy_all();
        assert!(!reg.is_initialized());
    }

    #[test]
    fn new_rejects_invalid_config() {
        assert_eq!(
            FieldPointerRegistry::new(RegistryConfig::with_capacity(0)).unwrap_err(),
            ConfigError::ZeroCapacity
        );
    }

    #[test]
    fn display_summarizes_state() {
        let mut reg = FieldPointerRegistry::new(RegistryConfig::with_capacity(10)).unwrap();
        assert_eq!(
            reg.to_string(),
            "field pointer registry (10 slots, uninitialized)"
        );
        reg.map(0usize, h(0));
        reg.map_indexed(9usize, 2, h(1));
        assert_eq!(
            reg.to_string(),
            "field pointer registry (10 slots, 2 mapped, 1 expanded)"
        );
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldPointerRegistry>();
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_key() -> impl Strategy<Value = FieldPointerId> {
            (0..FieldPointerId::COUNT).prop_map(|i| FieldPointerId::ALL[i])
        }

        proptest! {
            #[test]
            fn map_then_get_returns_handle(key in arb_key(), n in any::<u32>()) {
                let mut reg = registry();
                reg.map(key, h(n));
                prop_assert_eq!(reg.get(key), Some(h(n)));
                prop_assert_eq!(reg.sublist_size(key), 1);
            }

            #[test]
            fn out_of_order_indices_are_independent(
                key in arb_key(),
                i1 in 0usize..64,
                gap in 1usize..64,
            ) {
                let i2 = i1 + gap;
                let mut reg = registry();
                reg.map_indexed(key, i2, h(2));
                reg.map_indexed(key, i1, h(1));
                prop_assert_eq!(reg.get_indexed(key, i1), Some(h(1)));
                prop_assert_eq!(reg.get_indexed(key, i2), Some(h(2)));
                prop_assert_eq!(reg.sublist_size(key), i2 + 1);
            }

            #[test]
            fn width_is_monotonic(
                key in arb_key(),
                indices in prop::collection::vec(0usize..128, 1..32),
            ) {
                let mut reg = registry();
                let mut prev = 0;
                for (n, &i) in indices.iter().enumerate() {
                    reg.map_indexed(key, i, h(n as u32));
                    let width = reg.sublist_size(key);
                    prop_assert!(width >= prev);
                    prop_assert!(width > i);
                    prev = width;
                }
                let max = indices.iter().copied().max().unwrap_or(0);
                prop_assert_eq!(prev, (max + 1).max(1));
            }

            #[test]
            fn last_write_wins_per_position(
                writes in prop::collection::vec((0usize..16, any::<u32>()), 1..48),
            ) {
                let key = FieldPointerId::Chemistry;
                let mut reg = registry();
                let mut model = std::collections::HashMap::new();
                for &(i, n) in &writes {
                    reg.map_indexed(key, i, h(n));
                    model.insert(i, n);
                }
                for i in 0..reg.sublist_size(key) {
                    prop_assert_eq!(reg.get_indexed(key, i), model.get(&i).map(|&n| h(n)));
                }
            }

            #[test]
            fn other_slots_untouched(key in arb_key(), index in 0usize..32) {
                let mut reg = registry();
                reg.map_indexed(key, index, h(1));
                for other in FieldPointerId::ALL {
                    if other != key {
                        prop_assert_eq!(reg.sublist_size(other), 0);
                    }
                }
            }
        }
    }
}
