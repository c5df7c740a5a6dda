//! # Player Intents
//!
//! Abstract input vocabulary between the presentation layer and the
//! mechanics facade. The presentation layer resolves raw input (which key,
//! which falling gift was caught) into one of these before calling
//! [`crate::mechanics::GameMechanics::apply_intent`].

use oficina_core::Gift;

/// An action the player asked for.
#[derive(Clone, Copy, Debug)]
pub enum PlayerIntent {
    /// Pick up a gift caught at a conveyor.
    PickUpGift(Gift),
    /// Deliver the oldest carried gift to the table.
    DeliverGift,
    /// Process (collect) the oldest gift on the table.
    ProcessGift,
}

/// What an intent actually did, for presentation feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentOutcome {
    /// Gift picked up into the carrier.
    PickedUp,
    /// Carrier full; the gift was not picked up.
    HandsFull,
    /// Gift placed on the table.
    Delivered,
    /// Table full; the penalty applied and the gift stays in hand.
    TableFull,
    /// Nothing carried, nothing to deliver.
    NothingCarried,
    /// Gift collected from the table and scored.
    Collected,
    /// Table empty, nothing to process.
    TableEmpty,
}
