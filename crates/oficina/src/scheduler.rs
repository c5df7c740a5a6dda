//! # Difficulty Scheduler
//!
//! Raises the challenge every time the score crosses a threshold: every
//! running conveyor speeds up, gifts fall faster, and the visual spawn
//! cadence tightens. Both visual parameters saturate at fixed floors so
//! escalation levels off instead of diverging.

use std::time::Duration;

use tracing::info;

use oficina_shared::config::GameplayConfig;

use crate::producer::ConveyorProducer;

/// Escalates session difficulty as the player scores.
///
/// Mutated only by [`DifficultyScheduler::level_up`]; the presentation layer
/// reads the current parameters when spawning falling gifts.
#[derive(Debug)]
pub struct DifficultyScheduler {
    level: u32,
    fall_speed: f32,
    spawn_interval_ms: f64,
    accel_factor: f64,
    fall_speed_increment: f32,
    spawn_interval_factor: f64,
    min_spawn_interval_ms: f64,
}

impl DifficultyScheduler {
    /// Creates a scheduler at level 1 with the configured baselines.
    #[must_use]
    pub fn new(config: &GameplayConfig) -> Self {
        Self {
            level: 1,
            fall_speed: config.base_fall_speed,
            spawn_interval_ms: config.base_spawn_interval_ms,
            accel_factor: config.production_accel_factor,
            fall_speed_increment: config.fall_speed_increment,
            spawn_interval_factor: config.spawn_interval_factor,
            min_spawn_interval_ms: config.min_spawn_interval_ms,
        }
    }

    /// Raises the difficulty one level.
    ///
    /// Every currently-running producer gets accelerated; stopped producers
    /// are left alone. Fall speed grows by a fixed increment and the spawn
    /// interval shrinks by a fixed factor down to its floor.
    pub fn level_up(&mut self, producers: &[ConveyorProducer]) {
        self.level += 1;

        for producer in producers.iter().filter(|p| p.is_running()) {
            producer.accelerate(self.accel_factor);
        }

        self.fall_speed += self.fall_speed_increment;
        self.spawn_interval_ms =
            (self.spawn_interval_ms * self.spawn_interval_factor).max(self.min_spawn_interval_ms);

        info!(
            "level {} reached: fall speed {:.1}, spawn interval {:.0}ms",
            self.level, self.fall_speed, self.spawn_interval_ms
        );
    }

    /// Current difficulty level (starts at 1).
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Fall speed for newly spawned gifts, in pixels per frame.
    #[must_use]
    pub fn fall_speed(&self) -> f32 {
        self.fall_speed
    }

    /// Current visual spawn interval, rounded to whole milliseconds.
    #[must_use]
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms.round() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handoff::GiftChannel;

    #[test]
    fn test_starts_at_level_one() {
        let scheduler = DifficultyScheduler::new(&GameplayConfig::default());
        assert_eq!(scheduler.level(), 1);
        assert!((scheduler.fall_speed() - 2.0).abs() < f32::EPSILON);
        assert_eq!(scheduler.spawn_interval(), Duration::from_millis(2_000));
    }

    #[test]
    fn test_level_up_tightens_parameters() {
        let mut scheduler = DifficultyScheduler::new(&GameplayConfig::default());
        scheduler.level_up(&[]);

        assert_eq!(scheduler.level(), 2);
        assert!((scheduler.fall_speed() - 2.2).abs() < 1e-5);
        assert_eq!(scheduler.spawn_interval(), Duration::from_millis(1_900));
    }

    #[test]
    fn test_spawn_interval_saturates_at_floor() {
        let mut scheduler = DifficultyScheduler::new(&GameplayConfig::default());
        for _ in 0..200 {
            scheduler.level_up(&[]);
        }

        assert_eq!(scheduler.spawn_interval(), Duration::from_millis(500));
        // Fall speed keeps growing; only the spawn cadence saturates.
        assert!(scheduler.fall_speed() > 40.0);
    }

    #[test]
    fn test_level_up_accelerates_only_running_producers() {
        let (sender, _receiver) = GiftChannel::create_pair(10);
        let base = Duration::from_millis(4_000);
        let floor = Duration::from_millis(500);

        let mut running = ConveyorProducer::new(1, base, floor, sender.clone());
        let stopped = ConveyorProducer::new(2, base, floor, sender);
        running.start();

        let mut scheduler = DifficultyScheduler::new(&GameplayConfig::default());
        scheduler.level_up(std::slice::from_ref(&running));
        scheduler.level_up(std::slice::from_ref(&stopped));

        assert_eq!(running.current_interval(), Duration::from_millis(3_600));
        assert_eq!(stopped.current_interval(), base);
        running.stop();
    }
}
