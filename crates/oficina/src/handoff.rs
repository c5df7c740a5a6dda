//! # Gift Hand-Off Channel
//!
//! Bounded, non-blocking channel from the conveyor producers to the game
//! loop. Producers publish here instead of touching the table, which keeps
//! their cadence fully decoupled from player behavior.
//!
//! A full channel drops the gift at the sender. That only affects cosmetic
//! spawn smoothness, never correctness, so it is logged and forgotten rather
//! than retried.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use oficina_core::Gift;

/// Factory for paired hand-off handles.
pub struct GiftChannel;

impl GiftChannel {
    /// Creates a connected sender/receiver pair.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum gifts in flight before sends start dropping.
    #[must_use]
    pub fn create_pair(capacity: usize) -> (GiftSender, GiftReceiver) {
        let (sender, receiver) = bounded(capacity);
        (GiftSender { sender }, GiftReceiver { receiver })
    }
}

/// Handle for publishing gifts (one clone per producer).
#[derive(Clone)]
pub struct GiftSender {
    sender: Sender<Gift>,
}

impl GiftSender {
    /// Sends a gift without blocking.
    ///
    /// Returns `false` if the gift was dropped; the caller logs it and moves
    /// on, it is never retried.
    #[inline]
    pub fn send(&self, gift: Gift) -> bool {
        match self.sender.try_send(gift) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                // Channel full - drop the gift to preserve the producer cadence
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                // Receiver dropped - the session is tearing down
                false
            }
        }
    }
}

/// Handle for draining gifts on the game loop.
#[derive(Clone)]
pub struct GiftReceiver {
    receiver: Receiver<Gift>,
}

impl GiftReceiver {
    /// Receives all pending gifts (non-blocking).
    ///
    /// Call once per frame; returns an empty vector when nothing is waiting.
    #[inline]
    #[must_use]
    pub fn drain(&self) -> Vec<Gift> {
        let mut gifts = Vec::with_capacity(8);
        while let Ok(gift) = self.receiver.try_recv() {
            gifts.push(gift);
        }
        gifts
    }

    /// Receives one gift (non-blocking).
    #[inline]
    pub fn try_recv(&self) -> Option<Gift> {
        self.receiver.try_recv().ok()
    }

    /// Number of gifts waiting in the channel.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Whether any gift is waiting.
    #[inline]
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.receiver.is_empty()
    }
}
