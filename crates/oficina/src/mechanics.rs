//! # Game Mechanics Facade
//!
//! Single entry point for the presentation layer. Composes the workshop
//! table, the conveyor producers, the difficulty scheduler and the player
//! carrier; translates player intents into table operations, score changes
//! and win/loss evaluation.
//!
//! One instance per play session. [`GameMechanics::stop`] joins every
//! producer before returning, so a new session never inherits background
//! activity from the previous one.

use std::time::Duration;

use tracing::{info, warn};

use oficina_core::{ConveyorId, Gift, TableStatus, WorkshopTable};
use oficina_shared::config::GameplayConfig;

use crate::carrier::GiftCarrier;
use crate::handoff::{GiftChannel, GiftReceiver};
use crate::intents::{IntentOutcome, PlayerIntent};
use crate::producer::ConveyorProducer;
use crate::scheduler::DifficultyScheduler;

/// Snapshot of session statistics for HUD and debug overlays.
#[derive(Clone, Copy, Debug)]
pub struct GameStats {
    /// Current score.
    pub score: u32,
    /// Gifts lost to a full table.
    pub lost_gifts: u32,
    /// Current difficulty level.
    pub level: u32,
    /// Table occupancy snapshot.
    pub table: TableStatus,
    /// Producers with a live worker thread.
    pub active_producers: usize,
    /// Gifts currently carried by the player.
    pub carried: usize,
}

/// The per-session mechanics facade.
pub struct GameMechanics {
    config: GameplayConfig,
    table: WorkshopTable,
    producers: Vec<ConveyorProducer>,
    scheduler: DifficultyScheduler,
    receiver: GiftReceiver,
    carrier: GiftCarrier,
    score: u32,
    lost_gifts: u32,
    next_level_score: u32,
    started: bool,
}

impl GameMechanics {
    /// Builds a fresh session from the given configuration.
    ///
    /// One producer is created per configured conveyor interval; nothing
    /// runs until [`GameMechanics::start`].
    #[must_use]
    pub fn new(config: &GameplayConfig) -> Self {
        let (sender, receiver) = GiftChannel::create_pair(config.handoff_capacity);
        let min_interval = Duration::from_millis(config.min_production_interval_ms);

        let producers = config
            .conveyor_intervals_ms
            .iter()
            .enumerate()
            .map(|(index, &interval_ms)| {
                // Conveyors are numbered from 1, matching the HUD labels.
                ConveyorProducer::new(
                    index as ConveyorId + 1,
                    Duration::from_millis(interval_ms),
                    min_interval,
                    sender.clone(),
                )
            })
            .collect();

        Self {
            table: WorkshopTable::new(config.table_capacity),
            producers,
            scheduler: DifficultyScheduler::new(config),
            receiver,
            carrier: GiftCarrier::new(config.base_carry_capacity),
            score: 0,
            lost_gifts: 0,
            next_level_score: config.first_level_up_score,
            started: false,
            config: config.clone(),
        }
    }

    /// Starts every conveyor producer. Calling `start()` twice has no
    /// additional effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        info!("starting workshop mechanics ({} conveyors)", self.producers.len());
        for producer in &mut self.producers {
            producer.start();
        }
        self.started = true;
    }

    /// Stops every producer and joins their worker threads. Idempotent.
    ///
    /// Returns only after all workers have exited.
    pub fn stop(&mut self) {
        if !self.started {
            return;
        }
        info!("stopping workshop mechanics");
        for producer in &mut self.producers {
            producer.stop();
        }
        self.started = false;
    }

    /// Places a gift on the table on the player's behalf.
    ///
    /// Returns `false` when the table is full: the gift is lost and the
    /// penalty counter advances. This is gameplay feedback, not a fault.
    pub fn deliver_gift(&mut self, gift: Gift) -> bool {
        if self.table.try_add(gift) {
            true
        } else {
            self.lost_gifts += 1;
            warn!("table full, gift lost ({} lost so far)", self.lost_gifts);
            false
        }
    }

    /// Collects the oldest gift from the table and scores it.
    ///
    /// Returns `false` when the table is empty; no penalty attaches.
    pub fn collect_gift(&mut self) -> bool {
        if self.table.remove_oldest().is_none() {
            return false;
        }
        self.score += self.config.score_per_gift;
        self.check_level_up();
        true
    }

    /// Applies a level-up once the score crosses the current threshold, then
    /// advances the threshold.
    fn check_level_up(&mut self) {
        if self.score >= self.next_level_score {
            self.scheduler.level_up(&self.producers);
            self.carrier.increase_capacity(self.config.carry_capacity_step);
            self.next_level_score += self.config.level_up_score_step;
        }
    }

    /// Applies a player intent and reports what happened.
    pub fn apply_intent(&mut self, intent: PlayerIntent) -> IntentOutcome {
        match intent {
            PlayerIntent::PickUpGift(gift) => {
                if self.carrier.pick_up(gift) {
                    IntentOutcome::PickedUp
                } else {
                    IntentOutcome::HandsFull
                }
            }
            PlayerIntent::DeliverGift => match self.carrier.take_one() {
                Some(gift) => {
                    if self.deliver_gift(gift) {
                        IntentOutcome::Delivered
                    } else {
                        // Penalty already applied; the gift stays in hand.
                        self.carrier.put_back(gift);
                        IntentOutcome::TableFull
                    }
                }
                None => IntentOutcome::NothingCarried,
            },
            PlayerIntent::ProcessGift => {
                if self.collect_gift() {
                    IntentOutcome::Collected
                } else {
                    IntentOutcome::TableEmpty
                }
            }
        }
    }

    /// Drains gifts published by the producers since the last frame.
    ///
    /// Non-blocking; call once per render frame.
    #[must_use]
    pub fn drain_pending_gifts(&self) -> Vec<Gift> {
        self.receiver.drain()
    }

    /// Whether the session is won (score target reached).
    #[must_use]
    pub fn evaluate_win(&self) -> bool {
        self.score >= self.config.win_score
    }

    /// Whether the session is lost.
    ///
    /// The accumulated penalty must reach the configured multiple of the
    /// score, and only once the score is positive, so a loss can never fire
    /// at session start when both counters are zero.
    #[must_use]
    pub fn evaluate_loss(&self) -> bool {
        if self.score == 0 {
            return false;
        }
        let penalty = self.lost_gifts * self.config.penalty_per_lost_gift;
        penalty >= self.score * self.config.loss_penalty_multiplier
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Gifts lost to a full table.
    #[must_use]
    pub fn lost_gifts(&self) -> u32 {
        self.lost_gifts
    }

    /// Current difficulty level.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.scheduler.level()
    }

    /// Fall speed for newly spawned gifts.
    #[must_use]
    pub fn fall_speed(&self) -> f32 {
        self.scheduler.fall_speed()
    }

    /// Current visual spawn interval.
    #[must_use]
    pub fn spawn_interval(&self) -> Duration {
        self.scheduler.spawn_interval()
    }

    /// Table occupancy snapshot.
    #[must_use]
    pub fn status(&self) -> TableStatus {
        self.table.status()
    }

    /// Whether the producers are running.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Number of producers with a live worker thread.
    #[must_use]
    pub fn active_producers(&self) -> usize {
        self.producers.iter().filter(|p| p.is_running()).count()
    }

    /// The player's carrier.
    #[must_use]
    pub fn carrier(&self) -> &GiftCarrier {
        &self.carrier
    }

    /// Full statistics snapshot for HUD and debug overlays.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        GameStats {
            score: self.score,
            lost_gifts: self.lost_gifts,
            level: self.scheduler.level(),
            table: self.table.status(),
            active_producers: self.active_producers(),
            carried: self.carrier.carried(),
        }
    }
}
