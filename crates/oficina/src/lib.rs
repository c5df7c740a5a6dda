//! # OFICINA - Workshop Game Mechanics
//!
//! The coordination core of the workshop game: conveyor producers, the
//! shared table, the difficulty scheduler and the facade the presentation
//! layer talks to.
//!
//! ## Architecture
//!
//! ```text
//!  Conveyor 1 ──┐
//!  Conveyor 2 ──┼──> [ GiftChannel (bounded, non-blocking) ]
//!  Conveyor 3 ──┘                    │
//!                          drain() once per frame
//!                                    │
//!                             GameMechanics
//!                  ┌─────────────────┼─────────────────┐
//!                  ▼                 ▼                 ▼
//!           WorkshopTable   DifficultyScheduler   GiftCarrier
//! ```
//!
//! Producers never touch the table. All table mutation happens on the main
//! loop through [`GameMechanics`], and [`GameMechanics::stop`] joins every
//! worker thread before it returns, so play sessions can never overlap.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod carrier;
pub mod handoff;
pub mod intents;
pub mod mechanics;
pub mod producer;
pub mod scheduler;

pub use carrier::GiftCarrier;
pub use handoff::{GiftChannel, GiftReceiver, GiftSender};
pub use intents::{IntentOutcome, PlayerIntent};
pub use mechanics::{GameMechanics, GameStats};
pub use producer::ConveyorProducer;
pub use scheduler::DifficultyScheduler;

pub use oficina_core::{ConveyorId, Gift, GiftId, GiftStyle, TableStatus, WorkshopTable};
pub use oficina_shared::config::GameplayConfig;
