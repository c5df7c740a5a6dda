//! # Gameplay Constants
//!
//! Baseline tuning for the workshop coordination core.
//!
//! **CRITICAL:** These values are baked into the binary. Per-session
//! overrides go through [`crate::config::GameplayConfig`], which defaults to
//! everything below.

// =============================================================================
// WORKSHOP TABLE
// =============================================================================

/// Number of slots on the shared workshop table.
pub const TABLE_CAPACITY: usize = 3;

/// Capacity of the producer-to-game hand-off channel.
pub const HANDOFF_CAPACITY: usize = 50;

// =============================================================================
// CONVEYOR PRODUCERS
// =============================================================================

/// Base production interval of each conveyor, in milliseconds.
///
/// One entry per conveyor; the fastest conveyor sits closest to the table.
pub const CONVEYOR_BASE_INTERVALS_MS: [u64; 3] = [4_000, 3_500, 3_000];

/// Multiplier applied to every running producer's interval on level-up.
pub const PRODUCTION_ACCEL_FACTOR: f64 = 0.9;

/// Hard floor for the production interval, in milliseconds.
///
/// Acceleration saturates here so producers can never overwhelm the
/// presentation layer.
pub const MIN_PRODUCTION_INTERVAL_MS: u64 = 500;

// =============================================================================
// SCORING
// =============================================================================

/// Points awarded per gift collected from the table.
pub const SCORE_PER_GIFT: u32 = 10;

/// Penalty weight of one lost gift in the defeat rule.
pub const PENALTY_PER_LOST_GIFT: u32 = 10;

/// Score at which the session is won.
pub const WIN_SCORE: u32 = 300;

/// First score threshold that triggers a level-up.
pub const FIRST_LEVEL_UP_SCORE: u32 = 100;

/// Amount the level-up threshold advances after each level-up.
pub const LEVEL_UP_SCORE_STEP: u32 = 100;

/// The defeat rule fires when the total penalty reaches this multiple of the
/// current score (and the score is positive).
pub const LOSS_PENALTY_MULTIPLIER: u32 = 2;

// =============================================================================
// DIFFICULTY ESCALATION
// =============================================================================

/// Fall speed of spawned gifts at level 1, in pixels per frame.
pub const BASE_FALL_SPEED: f32 = 2.0;

/// Fall speed gained per level.
pub const FALL_SPEED_INCREMENT: f32 = 0.2;

/// Visual spawn interval at level 1, in milliseconds.
pub const BASE_SPAWN_INTERVAL_MS: f64 = 2_000.0;

/// Multiplier applied to the spawn interval on each level-up.
pub const SPAWN_INTERVAL_FACTOR: f64 = 0.95;

/// Hard floor for the spawn interval, in milliseconds.
pub const MIN_SPAWN_INTERVAL_MS: f64 = 500.0;

// =============================================================================
// PLAYER CARRIER
// =============================================================================

/// Gifts the player can carry at session start.
pub const BASE_CARRY_CAPACITY: usize = 10;

/// Carry capacity gained per level-up.
pub const CARRY_CAPACITY_STEP: usize = 10;
