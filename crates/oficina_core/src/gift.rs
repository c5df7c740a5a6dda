//! # Gift Items
//!
//! The unit of work flowing through the workshop: produced by a conveyor,
//! hauled by the player, consumed once when collected from the table.

use std::fmt;
use std::time::{Duration, Instant};

/// Identifier of the conveyor that produced a gift.
pub type ConveyorId = u8;

/// Unique identifier for a gift within a session.
///
/// Combines the producing conveyor with that conveyor's own production
/// sequence, so ids stay unique without any cross-thread coordination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GiftId {
    /// Conveyor that produced the gift.
    pub conveyor: ConveyorId,
    /// Production sequence number on that conveyor, starting at 0.
    pub sequence: u64,
}

impl fmt::Display for GiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gift_{}_{}", self.conveyor, self.sequence)
    }
}

/// Cosmetic wrapping style, chosen by the producing conveyor.
///
/// Purely visual; the presentation layer maps each style to a sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GiftStyle {
    /// Plain wrap.
    Classic,
    /// Striped wrap.
    Striped,
    /// Dotted wrap.
    Dotted,
    /// Wrap with a ribbon bow.
    Ribbon,
}

impl GiftStyle {
    /// All styles, in sprite-sheet order.
    pub const ALL: [Self; 4] = [Self::Classic, Self::Striped, Self::Dotted, Self::Ribbon];
}

/// A gift produced by a conveyor and consumed once by the player.
///
/// No lifecycle beyond creation and a single removal; everything here is
/// plain data the presentation layer is free to copy around.
#[derive(Clone, Copy, Debug)]
pub struct Gift {
    /// Unique id within the session.
    pub id: GiftId,
    /// Origin conveyor.
    pub conveyor: ConveyorId,
    /// Creation time, for latency inspection in debug overlays.
    pub created_at: Instant,
    /// Cosmetic wrapping style.
    pub style: GiftStyle,
}

impl Gift {
    /// Creates a gift stamped with the current time.
    #[must_use]
    pub fn new(conveyor: ConveyorId, sequence: u64, style: GiftStyle) -> Self {
        Self {
            id: GiftId { conveyor, sequence },
            conveyor,
            created_at: Instant::now(),
            style,
        }
    }

    /// Time elapsed since the gift was produced.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_format() {
        let gift = Gift::new(2, 7, GiftStyle::Striped);
        assert_eq!(gift.id.to_string(), "gift_2_7");
    }

    #[test]
    fn test_ids_distinct_across_conveyors() {
        let a = Gift::new(1, 0, GiftStyle::Classic);
        let b = Gift::new(2, 0, GiftStyle::Classic);
        assert_ne!(a.id, b.id);
    }
}
