//! # OFICINA Core
//!
//! The synchronization heart of the workshop game: the gift item type and
//! the bounded workshop table the whole session coordinates around.
//!
//! ## Design Principles
//!
//! 1. **The main loop never blocks** - slot reservation is a non-blocking
//!    permit acquisition; a full table is reported as `false`, not an error
//! 2. **Single-writer discipline** - producers never touch the table; all
//!    structural mutation goes through the owning facade on the main loop
//! 3. **Leak-proof permits** - every reserved slot is held by an RAII guard,
//!    so no exit path between reservation and append can shrink the table
//!
//! ## Thread Safety
//!
//! [`WorkshopTable`] is `Send + Sync` and safe to share behind an `Arc`;
//! structural changes happen under a [`parking_lot::Mutex`] while free slots
//! are tracked by an atomic permit pool.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod gift;
pub mod table;

pub use gift::{ConveyorId, Gift, GiftId, GiftStyle};
pub use table::{TableStatus, WorkshopTable};
