//! Primitive operation set for slot containers.
//!
//! Everything a slot container must support is defined here; the derived
//! layer in [`crate::ops`] composes these primitives and nothing else.

use satchel_common::{Item, ItemError};
use thiserror::Error;

/// Inventory error types.
///
/// These are contract violations: deterministic failures of the caller, not
/// transient conditions. Expected negative outcomes (a scan miss, a rejected
/// transfer) are ordinary return values instead.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Slot index outside the container
    #[error("slot {slot} out of range: container has {size} slots")]
    SlotOutOfRange {
        /// Requested slot index
        slot: usize,
        /// Number of slots in the container
        size: usize,
    },

    /// Occupied destination slot holds a different item
    #[error("slot {slot} holds {existing:?}, cannot accept {incoming:?}")]
    NameMismatch {
        /// Destination slot index
        slot: usize,
        /// Name of the resident item
        existing: String,
        /// Name of the incoming item
        incoming: String,
    },

    /// Item lacks a tag required by the restriction set
    #[error("item {name:?} does not satisfy the restriction set")]
    Restricted {
        /// Name of the rejected item
        name: String,
    },

    /// No slot holds an item with the requested name
    #[error("no item named {name:?}")]
    ItemNotFound {
        /// Name that was searched for
        name: String,
    },

    /// Split larger than the source stack
    #[error("cannot split {requested} units from a stack of {available}")]
    SplitTooLarge {
        /// Units requested
        requested: u32,
        /// Units available in the source slot
        available: u32,
    },

    /// A container must have at least one slot
    #[error("a container must have at least one slot")]
    ZeroSlots,

    /// Tag error from an item operation
    #[error(transparent)]
    Item(#[from] ItemError),
}

/// Result type for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Primitive operation set ("kernel") for a slot container.
///
/// A container is a fixed-length ordered sequence of slots, each owning
/// exactly one [`Item`] (the empty item when unoccupied), plus a restriction
/// set of tag names every non-empty resident must carry. Implementations
/// provide only these primitives; [`crate::ops::Inventory`] supplies the
/// derived layer on top.
pub trait InventoryKernel {
    /// Places `item` at `slot`, stacking if a matching item is resident.
    ///
    /// An empty slot takes ownership of the item. A slot holding an item of
    /// the same name stacks: the counts are summed and every other incoming
    /// tag is merged in, overwriting on collision; tags only the resident
    /// item carries are preserved.
    ///
    /// # Errors
    ///
    /// [`InventoryError::SlotOutOfRange`] for a bad index,
    /// [`InventoryError::NameMismatch`] if the slot holds a different item,
    /// [`InventoryError::Restricted`] if the item fails [`Self::is_allowed`].
    fn add(&mut self, slot: usize, item: Item) -> InventoryResult<()>;

    /// Removes and returns the item at `slot`, leaving the slot empty.
    ///
    /// Removing from an empty slot returns an empty item; it is not an error.
    ///
    /// # Errors
    ///
    /// [`InventoryError::SlotOutOfRange`] for a bad index.
    fn remove(&mut self, slot: usize) -> InventoryResult<Item>;

    /// Requires future residents to carry `tag`, evicting current ones that
    /// do not.
    ///
    /// Inserting an already-required tag is a no-op for the restriction set,
    /// but the eviction scan still runs. Evicted items are returned in
    /// slot-ascending order; empty slots are never evicted.
    fn restrict(&mut self, tag: &str) -> Vec<Item>;

    /// Clears the restriction set. Nothing is evicted.
    fn free_restrictions(&mut self);

    /// Returns whether `item` passes the restriction set.
    ///
    /// The empty item is always allowed.
    #[must_use]
    fn is_allowed(&self, item: &Item) -> bool;

    /// Returns the first slot index in `[from, size)` holding an item named
    /// `name`, or `None`.
    ///
    /// The scan does not wrap around: a match strictly before `from` is not
    /// reported. A `from` at or past the last slot scans nothing.
    #[must_use]
    fn next_index_of(&self, name: &str, from: usize) -> Option<usize>;

    /// Returns the number of slots.
    #[must_use]
    fn size(&self) -> usize;

    /// Resets the container to a single empty slot with no restrictions.
    fn clear(&mut self);
}
