//! Derived operations composed from the kernel set.
//!
//! Nothing here touches slot storage directly: every method is expressed
//! through [`InventoryKernel`] calls, so the whole layer comes for free with
//! any kernel implementation via the blanket impl at the bottom.

use satchel_common::Item;
use tracing::debug;

use crate::kernel::{InventoryError, InventoryKernel, InventoryResult};

/// Derived operation layer for slot containers.
///
/// All methods are provided; implement [`InventoryKernel`] and this trait
/// follows. Cross-container methods take two exclusive borrows, so no
/// partial application can be observed by anyone else mid-operation.
pub trait Inventory: InventoryKernel {
    /// Returns a copy of the item at `slot` without changing the container.
    ///
    /// Composed as remove-then-add-back; a pure read at the abstraction
    /// level.
    ///
    /// # Errors
    ///
    /// [`InventoryError::SlotOutOfRange`] for a bad index.
    fn get(&mut self, slot: usize) -> InventoryResult<Item> {
        let removed = self.remove(slot)?;
        self.add(slot, removed.clone())?;
        Ok(removed)
    }

    /// Returns whether the item at `slot` is named `name`.
    ///
    /// The empty name matches an empty slot.
    ///
    /// # Errors
    ///
    /// [`InventoryError::SlotOutOfRange`] for a bad index.
    fn is_at(&mut self, slot: usize, name: &str) -> InventoryResult<bool> {
        Ok(self.get(slot)?.name() == name)
    }

    /// Consumes one unit of the stack at `slot` and returns the item's name.
    ///
    /// The count is decremented by one, floored at zero; a stack used down
    /// to zero leaves the slot empty. Using an empty slot is a no-op that
    /// returns the empty name.
    ///
    /// # Errors
    ///
    /// [`InventoryError::SlotOutOfRange`] for a bad index.
    fn use_item(&mut self, slot: usize) -> InventoryResult<String> {
        let mut item = self.remove(slot)?;
        let name = item.name().to_owned();

        item.put_tag(Item::COUNT, item.count().saturating_sub(1));
        if item.count() > 0 {
            self.add(slot, item)?;
        }

        Ok(name)
    }

    /// Duplicates the first item named `name` in `src` into `dest_slot` here.
    ///
    /// The duplicate is a brand-new value carrying the original's count and
    /// every tag; `src` is only read.
    ///
    /// # Errors
    ///
    /// [`InventoryError::ItemNotFound`] if `src` holds no such item, plus
    /// any [`Self::add`] contract violation at the destination.
    fn copy_from<S>(&mut self, src: &mut S, name: &str, dest_slot: usize) -> InventoryResult<()>
    where
        S: Inventory + ?Sized,
    {
        let found = src
            .next_index_of(name, 0)
            .ok_or_else(|| InventoryError::ItemNotFound {
                name: name.to_owned(),
            })?;
        let copy = src.get(found)?;
        self.add(dest_slot, copy)
    }

    /// Exchanges the items in two slots of this container.
    ///
    /// Swapping a slot with itself is a no-op. Both items already satisfy
    /// this container's restrictions, so the exchange always succeeds once
    /// the indices check out.
    ///
    /// # Errors
    ///
    /// [`InventoryError::SlotOutOfRange`] for a bad index; neither slot is
    /// changed in that case.
    fn swap_items(&mut self, slot1: usize, slot2: usize) -> InventoryResult<()> {
        self.get(slot1)?;
        self.get(slot2)?;

        let first = self.remove(slot1)?;
        let second = self.remove(slot2)?;
        self.add(slot1, second)?;
        self.add(slot2, first)
    }

    /// Exchanges the item at `this_slot` with the one at `other_slot` in
    /// `other`.
    ///
    /// Returns `Ok(false)` without touching either container when either
    /// side's restriction set rejects the item it would receive.
    ///
    /// # Errors
    ///
    /// [`InventoryError::SlotOutOfRange`] for a bad index on either side.
    fn swap_with<S>(
        &mut self,
        other: &mut S,
        other_slot: usize,
        this_slot: usize,
    ) -> InventoryResult<bool>
    where
        S: Inventory + ?Sized,
    {
        let incoming = other.get(other_slot)?;
        let outgoing = self.get(this_slot)?;

        if !self.is_allowed(&incoming) || !other.is_allowed(&outgoing) {
            debug!(
                "swap of {:?} and {:?} rejected by restrictions",
                incoming.name(),
                outgoing.name()
            );
            return Ok(false);
        }

        let theirs = other.remove(other_slot)?;
        let ours = self.remove(this_slot)?;
        self.add(this_slot, theirs)?;
        other.add(other_slot, ours)?;

        Ok(true)
    }

    /// Moves the item at `src_slot` in `src` into `dest_slot` here.
    ///
    /// Returns `Ok(false)` without touching either container when the
    /// destination slot neither is empty nor holds a matching stack, or when
    /// the item fails this container's restrictions. No item is ever lost.
    ///
    /// # Errors
    ///
    /// [`InventoryError::SlotOutOfRange`] for a bad index on either side.
    fn transfer_from<S>(
        &mut self,
        src: &mut S,
        src_slot: usize,
        dest_slot: usize,
    ) -> InventoryResult<bool>
    where
        S: Inventory + ?Sized,
    {
        let incoming = src.get(src_slot)?;
        let dest = self.get(dest_slot)?;

        if !self.is_allowed(&incoming) || !(dest.is_empty() || dest.matches(&incoming)) {
            debug!(
                "transfer of {:?} into slot {} rejected",
                incoming.name(),
                dest_slot
            );
            return Ok(false);
        }

        let moved = src.remove(src_slot)?;
        self.add(dest_slot, moved)?;

        Ok(true)
    }

    /// Moves exactly `count` units from `src_slot` to `dest_slot` within
    /// this container.
    ///
    /// Tags ride along unchanged on both halves. Moving every unit leaves
    /// the source slot empty; `count == 0` is a no-op.
    ///
    /// # Errors
    ///
    /// [`InventoryError::SplitTooLarge`] if `count` exceeds the source
    /// stack, [`InventoryError::NameMismatch`] if the destination holds a
    /// different item, [`InventoryError::SlotOutOfRange`] for a bad index.
    fn split_items(&mut self, src_slot: usize, dest_slot: usize, count: u32) -> InventoryResult<()> {
        let stack = self.get(src_slot)?;
        let dest = self.get(dest_slot)?;
        if count > stack.count() {
            return Err(InventoryError::SplitTooLarge {
                requested: count,
                available: stack.count(),
            });
        }
        if count == 0 {
            return Ok(());
        }
        if !(dest.is_empty() || dest.matches(&stack)) {
            return Err(InventoryError::NameMismatch {
                slot: dest_slot,
                existing: dest.name().to_owned(),
                incoming: stack.name().to_owned(),
            });
        }

        let mut moved = self.remove(src_slot)?;
        if count < stack.count() {
            let mut kept = moved.clone();
            kept.put_tag(Item::COUNT, stack.count() - count);
            self.add(src_slot, kept)?;
        }
        moved.put_tag(Item::COUNT, count);
        self.add(dest_slot, moved)
    }

    /// Moves exactly `count` units from `src_slot` in `src` to `dest_slot`
    /// here; the cross-container form of [`Self::split_items`].
    ///
    /// # Errors
    ///
    /// As [`Self::split_items`], plus [`InventoryError::Restricted`] when
    /// the stack fails this container's restrictions.
    fn split_from<S>(
        &mut self,
        src: &mut S,
        src_slot: usize,
        dest_slot: usize,
        count: u32,
    ) -> InventoryResult<()>
    where
        S: Inventory + ?Sized,
    {
        let stack = src.get(src_slot)?;
        let dest = self.get(dest_slot)?;
        if count > stack.count() {
            return Err(InventoryError::SplitTooLarge {
                requested: count,
                available: stack.count(),
            });
        }
        if count == 0 {
            return Ok(());
        }
        if !(dest.is_empty() || dest.matches(&stack)) {
            return Err(InventoryError::NameMismatch {
                slot: dest_slot,
                existing: dest.name().to_owned(),
                incoming: stack.name().to_owned(),
            });
        }
        if !self.is_allowed(&stack) {
            return Err(InventoryError::Restricted {
                name: stack.name().to_owned(),
            });
        }

        let mut moved = src.remove(src_slot)?;
        if count < stack.count() {
            let mut kept = moved.clone();
            kept.put_tag(Item::COUNT, stack.count() - count);
            src.add(src_slot, kept)?;
        }
        moved.put_tag(Item::COUNT, count);
        self.add(dest_slot, moved)
    }

    /// Finds the best slot to place `item`: the lowest-index matching stack
    /// with room, else the first empty slot, else `None`.
    ///
    /// A stack has room when the post-add count would not exceed
    /// `max_stack`; full stacks are skipped and the scan continues.
    /// `max_stack: None` disables the cap.
    ///
    /// # Errors
    ///
    /// None in practice; the signature carries the kernel's error type
    /// because the scan reads slots through [`Self::get`].
    fn next_placement(
        &mut self,
        item: &Item,
        max_stack: Option<u32>,
    ) -> InventoryResult<Option<usize>> {
        let mut check_at = 0;

        while let Some(pos) = self.next_index_of(item.name(), check_at) {
            let resident = self.get(pos)?.tag_value(Item::COUNT)?;
            let fits = match max_stack {
                None => true,
                Some(cap) => resident.saturating_add(item.count()) <= cap,
            };
            if fits {
                return Ok(Some(pos));
            }
            check_at = pos + 1;
        }

        Ok(self.next_index_of(Item::EMPTY_NAME, 0))
    }
}

impl<T: InventoryKernel + ?Sized> Inventory for T {}
