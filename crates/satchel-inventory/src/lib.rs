//! # Satchel Inventory
//!
//! Slot container component for game-style item management.
//!
//! The component is layered bottom-up:
//! - [`kernel::InventoryKernel`]: the primitive operation set a slot
//!   container must support (add, remove, restriction management, scan)
//! - [`ops::Inventory`]: derived operations (get, copy, swap, transfer,
//!   split, best-fit placement, decrement-on-use) composed purely from the
//!   kernel, supplied to every kernel implementation by a blanket impl
//! - [`slotted::SlottedInventory`]: the concrete fixed-slot container
//!
//! Front ends (menus, panels) are external collaborators that call this API;
//! no formatting, parsing, or rendering lives here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod kernel;
pub mod ops;
pub mod slotted;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::kernel::*;
    pub use crate::ops::*;
    pub use crate::slotted::*;
}

pub use prelude::*;
