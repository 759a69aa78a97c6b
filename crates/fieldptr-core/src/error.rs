//! Error types for the fieldptr workspace.
//!
//! Organized by subsystem: the pointer registry, the field catalog, and
//! the expression (MEG) boundary.

use std::error::Error;
use std::fmt;

use crate::id::{FieldHandle, FieldId};

/// Contract violations detected by the field pointer registry.
///
/// The infallible registry operations panic with this error's message;
/// the `try_*` variants return it instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// The enumerator does not address a slot of this registry.
    OutOfRange {
        /// Slot index requested.
        key: usize,
        /// Number of slots in the registry.
        capacity: usize,
    },
    /// A sub-index would grow a slot past the configured maximum width.
    SublistTooLong {
        /// Slot index requested.
        key: usize,
        /// Sub-index requested.
        index: usize,
        /// Configured maximum sub-list width.
        max: usize,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { key, capacity } => {
                write!(
                    f,
                    "field pointer {key} out of range (registry capacity {capacity})"
                )
            }
            Self::SublistTooLong { key, index, max } => {
                write!(
                    f,
                    "sub-index {index} for field pointer {key} exceeds maximum sub-list width {max}"
                )
            }
        }
    }
}

impl Error for RegistryError {}

/// Errors from the field catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// A field with this name already exists.
    DuplicateName {
        /// The conflicting name.
        name: String,
    },
    /// The handle refers to a field that has since been removed.
    StaleHandle {
        /// The outdated handle.
        handle: FieldHandle,
    },
    /// No field slot with this ID has ever been created.
    UnknownField {
        /// The unrecognised ID.
        id: FieldId,
    },
    /// A field definition failed validation.
    InvalidField {
        /// Description of the validation failure.
        reason: String,
    },
    /// The catalog cannot issue more field IDs.
    CapacityExceeded {
        /// Number of live and retired slots.
        slots: usize,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => write!(f, "field '{name}' already exists"),
            Self::StaleHandle { handle } => write!(f, "stale field handle {handle}"),
            Self::UnknownField { id } => write!(f, "unknown field id {id}"),
            Self::InvalidField { reason } => write!(f, "invalid field: {reason}"),
            Self::CapacityExceeded { slots } => {
                write!(f, "field catalog full ({slots} slots)")
            }
        }
    }
}

impl Error for CatalogError {}

/// Errors reported across the expression (MEG) function boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MegError {
    /// A caller-provided buffer does not match the element count.
    LengthMismatch {
        /// Which argument was mis-sized.
        what: &'static str,
        /// Required length.
        expected: usize,
        /// Provided length.
        actual: usize,
    },
    /// No formula is defined for this zone.
    UnknownZone {
        /// The zone name.
        zone: String,
    },
    /// No formula is defined for this field, condition or object.
    UnknownTarget {
        /// The field, condition or object name.
        name: String,
    },
    /// A field the formula reads is not available.
    MissingField {
        /// Name of the unavailable field.
        name: String,
    },
}

impl fmt::Display for MegError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                what,
                expected,
                actual,
            } => write!(f, "{what}: expected {expected} values, got {actual}"),
            Self::UnknownZone { zone } => write!(f, "no formula for zone '{zone}'"),
            Self::UnknownTarget { name } => write!(f, "no formula for '{name}'"),
            Self::MissingField { name } => write!(f, "field '{name}' is not available"),
        }
    }
}

impl Error for MegError {}
