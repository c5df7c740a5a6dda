//! # Conveyor Producers
//!
//! One background worker thread per conveyor, building gifts at its own
//! cadence and publishing them to the hand-off channel. Producers never
//! touch the workshop table, so their only shared state is the channel and
//! the handful of atomics below.
//!
//! `stop()` interrupts the cadence wait and joins the worker before
//! returning. No worker survives a `stop()` call, which is what lets a new
//! session start without inheriting background activity from the last one.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::{Condvar, Mutex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use oficina_core::{ConveyorId, Gift, GiftStyle};

use crate::handoff::GiftSender;

/// State shared between a producer handle and its worker thread.
struct ProducerShared {
    /// Worker keeps producing while set.
    running: AtomicBool,
    /// Current production interval, in milliseconds.
    interval_ms: AtomicU64,
    /// Gifts built since construction; doubles as the id sequence.
    produced: AtomicU64,
    /// Pairs with `wake_cv` to cut the cadence wait short on `stop()`.
    wake_mutex: Mutex<()>,
    wake_cv: Condvar,
}

/// A background gift producer bound to one conveyor.
///
/// State machine is {Stopped, Running}: constructed Stopped, `start()`
/// spawns the worker, `stop()` joins it. Both transitions are idempotent.
pub struct ConveyorProducer {
    conveyor: ConveyorId,
    min_interval_ms: u64,
    shared: Arc<ProducerShared>,
    sender: GiftSender,
    handle: Option<JoinHandle<()>>,
}

impl ConveyorProducer {
    /// Creates a stopped producer.
    ///
    /// # Arguments
    ///
    /// * `conveyor` - Which conveyor this producer feeds.
    /// * `base_interval` - Starting production cadence.
    /// * `min_interval` - Floor the cadence saturates at under acceleration.
    /// * `sender` - Hand-off channel the gifts are published to.
    #[must_use]
    pub fn new(
        conveyor: ConveyorId,
        base_interval: Duration,
        min_interval: Duration,
        sender: GiftSender,
    ) -> Self {
        Self {
            conveyor,
            min_interval_ms: min_interval.as_millis() as u64,
            shared: Arc::new(ProducerShared {
                running: AtomicBool::new(false),
                interval_ms: AtomicU64::new(base_interval.as_millis() as u64),
                produced: AtomicU64::new(0),
                wake_mutex: Mutex::new(()),
                wake_cv: Condvar::new(),
            }),
            sender,
            handle: None,
        }
    }

    /// Spawns the worker thread. Calling `start()` on a running producer has
    /// no additional effect.
    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }
        self.shared.running.store(true, Ordering::Release);

        let shared = Arc::clone(&self.shared);
        let sender = self.sender.clone();
        let conveyor = self.conveyor;
        self.handle = Some(thread::spawn(move || {
            Self::worker_loop(conveyor, &shared, &sender);
        }));
        debug!("conveyor {} started", self.conveyor);
    }

    /// Worker thread main loop.
    fn worker_loop(conveyor: ConveyorId, shared: &ProducerShared, sender: &GiftSender) {
        // Seeded per conveyor so cosmetic styles are reproducible across runs.
        let mut rng = StdRng::seed_from_u64(u64::from(conveyor));

        loop {
            let interval = Duration::from_millis(shared.interval_ms.load(Ordering::Acquire));
            {
                // The running re-check happens under the wake mutex, so a
                // concurrent stop() either sees us before the wait and is
                // ignored here, or finds us inside it and wakes us.
                let mut guard = shared.wake_mutex.lock();
                if !shared.running.load(Ordering::Acquire) {
                    break;
                }
                shared.wake_cv.wait_for(&mut guard, interval);
            }
            if !shared.running.load(Ordering::Acquire) {
                break;
            }

            let sequence = shared.produced.fetch_add(1, Ordering::AcqRel);
            let style = GiftStyle::ALL[rng.gen_range(0..GiftStyle::ALL.len())];
            let gift = Gift::new(conveyor, sequence, style);
            if sender.send(gift) {
                debug!("conveyor {conveyor} produced gift #{sequence}");
            } else {
                // Cosmetic loss only; the gift is dropped, never retried.
                warn!("conveyor {conveyor}: hand-off channel full, gift #{sequence} dropped");
            }
        }
    }

    /// Shortens the production interval by `factor`, floored at the
    /// configured minimum so acceleration saturates instead of diverging.
    pub fn accelerate(&self, factor: f64) {
        let min = self.min_interval_ms;
        let _ = self
            .shared
            .interval_ms
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                let next = (current as f64 * factor).round() as u64;
                Some(next.max(min))
            });
        debug!(
            "conveyor {} production interval now {}ms",
            self.conveyor,
            self.shared.interval_ms.load(Ordering::Acquire)
        );
    }

    /// Stops the worker and joins it before returning.
    ///
    /// Safe to call on an already-stopped producer. After `stop()` returns,
    /// the worker thread has fully exited.
    pub fn stop(&mut self) {
        {
            // Flip the flag under the wake mutex so a worker between its
            // running check and its wait cannot miss the notification.
            let guard = self.shared.wake_mutex.lock();
            self.shared.running.store(false, Ordering::Release);
            self.shared.wake_cv.notify_all();
            drop(guard);
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            debug!("conveyor {} stopped", self.conveyor);
        }
    }

    /// Whether the worker thread is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some() && self.shared.running.load(Ordering::Acquire)
    }

    /// Gifts built since construction (including any dropped at the
    /// hand-off channel).
    #[must_use]
    pub fn produced_count(&self) -> u64 {
        self.shared.produced.load(Ordering::Acquire)
    }

    /// Current production interval.
    #[must_use]
    pub fn current_interval(&self) -> Duration {
        Duration::from_millis(self.shared.interval_ms.load(Ordering::Acquire))
    }

    /// The conveyor this producer is bound to.
    #[must_use]
    pub fn conveyor_id(&self) -> ConveyorId {
        self.conveyor
    }
}

impl Drop for ConveyorProducer {
    fn drop(&mut self) {
        self.stop();
    }
}
