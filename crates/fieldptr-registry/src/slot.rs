//! Per-enumerator storage.

use fieldptr_core::FieldHandle;

/// Storage unit behind one enumerator.
///
/// A slot starts `Unset`, becomes `Direct` on its first index-0 mapping,
/// and turns `Expanded` the first time a sub-index above 0 is mapped.
/// `Expanded` never reverts to `Direct`, and its width never shrinks.
/// `None` entries are null handles: mapped positions whose field was
/// absent, or gaps left by out-of-order growth.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Slot {
    /// Never mapped.
    #[default]
    Unset,
    /// A single handle, stored inline.
    Direct(Option<FieldHandle>),
    /// A runtime-sized list of handles, width at least 2.
    Expanded(Vec<Option<FieldHandle>>),
}

impl Slot {
    /// Addressable width: 0 unset, 1 direct, >1 expanded.
    #[inline]
    pub fn width(&self) -> usize {
        match self {
            Self::Unset => 0,
            Self::Direct(_) => 1,
            Self::Expanded(list) => list.len(),
        }
    }

    /// Whether the slot has switched to its list representation.
    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Expanded(_))
    }

    /// Handle at `index`, or `None` if unmapped, null, or past the width.
    #[inline]
    pub fn get(&self, index: usize) -> Option<FieldHandle> {
        match self {
            Self::Unset => None,
            Self::Direct(h) => {
                if index == 0 {
                    *h
                } else {
                    None
                }
            }
            Self::Expanded(list) => list.get(index).copied().flatten(),
        }
    }

    /// All positions of the slot, in sub-index order.
    pub fn as_slice(&self) -> &[Option<FieldHandle>] {
        match self {
            Self::Unset => &[],
            Self::Direct(h) => std::slice::from_ref(h),
            Self::Expanded(list) => list,
        }
    }

    /// Store `handle` at `index`, growing the slot if needed.
    ///
    /// Returns the previous width when the slot grew past one element
    /// (an expansion or a list resize), `None` otherwise.
    pub(crate) fn set(&mut self, index: usize, handle: Option<FieldHandle>) -> Option<usize> {
        match self {
            Self::Expanded(list) => {
                let old = list.len();
                let grew = index >= old;
                if grew {
                    list.resize(index + 1, None);
                }
                list[index] = handle;
                grew.then_some(old)
            }
            _ if index == 0 => {
                *self = Self::Direct(handle);
                None
            }
            _ => {
                let old = self.width();
                let head = match self {
                    Self::Direct(h) => *h,
                    _ => None,
                };
                let mut list = Vec::with_capacity(index + 1);
                list.push(head);
                list.resize(index + 1, None);
                list[index] = handle;
                *self = Self::Expanded(list);
                Some(old)
            }
        }
    }
}
