//! Fixed-slot concrete container.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use satchel_common::Item;

use crate::kernel::{InventoryError, InventoryKernel, InventoryResult};

/// A fixed-size slot container with a tag restriction set.
///
/// Every slot always owns exactly one [`Item`]; an unoccupied slot holds the
/// empty item, never an undefined state. The slot count is fixed at
/// construction and only [`InventoryKernel::clear`] changes it (back to one).
/// Add and remove are O(1); name scans are O(n).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlottedInventory {
    slots: Vec<Item>,
    restrictions: HashSet<String>,
}

impl SlottedInventory {
    /// Creates a container with `slots` empty slots.
    ///
    /// # Errors
    ///
    /// [`InventoryError::ZeroSlots`] if `slots` is zero.
    pub fn new(slots: usize) -> InventoryResult<Self> {
        if slots == 0 {
            return Err(InventoryError::ZeroSlots);
        }
        Ok(Self {
            slots: vec![Item::empty(); slots],
            restrictions: HashSet::new(),
        })
    }

    /// Lazy, restartable, slot-ordered view of the container's items.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.slots.iter()
    }

    fn check_slot(&self, slot: usize) -> InventoryResult<()> {
        if slot >= self.slots.len() {
            return Err(InventoryError::SlotOutOfRange {
                slot,
                size: self.slots.len(),
            });
        }
        Ok(())
    }
}

impl Default for SlottedInventory {
    /// The smallest valid container: a single empty slot.
    fn default() -> Self {
        Self {
            slots: vec![Item::empty()],
            restrictions: HashSet::new(),
        }
    }
}

impl InventoryKernel for SlottedInventory {
    fn add(&mut self, slot: usize, item: Item) -> InventoryResult<()> {
        self.check_slot(slot)?;
        if !self.is_allowed(&item) {
            return Err(InventoryError::Restricted {
                name: item.name().to_owned(),
            });
        }

        let dest = &mut self.slots[slot];
        if dest.is_empty() {
            *dest = item;
        } else if dest.matches(&item) {
            // Stack: counts sum, incoming tags win collisions.
            let total = dest.count().saturating_add(item.count());
            for (tag, value) in item.tags() {
                dest.put_tag(tag, value);
            }
            dest.put_tag(Item::COUNT, total);
        } else {
            return Err(InventoryError::NameMismatch {
                slot,
                existing: dest.name().to_owned(),
                incoming: item.name().to_owned(),
            });
        }

        Ok(())
    }

    fn remove(&mut self, slot: usize) -> InventoryResult<Item> {
        self.check_slot(slot)?;
        Ok(std::mem::take(&mut self.slots[slot]))
    }

    fn restrict(&mut self, tag: &str) -> Vec<Item> {
        self.restrictions.insert(tag.to_owned());

        let mut evicted = Vec::new();
        for slot in &mut self.slots {
            if !slot.is_empty() && !slot.has_tag(tag) {
                evicted.push(std::mem::take(slot));
            }
        }

        if !evicted.is_empty() {
            debug!("restriction {:?} evicted {} item(s)", tag, evicted.len());
        }
        evicted
    }

    fn free_restrictions(&mut self) {
        self.restrictions.clear();
    }

    fn is_allowed(&self, item: &Item) -> bool {
        item.is_empty() || self.restrictions.iter().all(|tag| item.has_tag(tag))
    }

    fn next_index_of(&self, name: &str, from: usize) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, item)| item.name() == name)
            .map(|(slot, _)| slot)
    }

    fn size(&self) -> usize {
        self.slots.len()
    }

    fn clear(&mut self) {
        self.slots = vec![Item::empty()];
        self.restrictions.clear();
        debug!("container cleared");
    }
}

/// Structural equality: slot-for-slot item equality, tags and counts
/// included. The restriction set is not part of the abstract value.
impl PartialEq for SlottedInventory {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl Eq for SlottedInventory {}

impl<'a> IntoIterator for &'a SlottedInventory {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
