//! End-to-end session lifecycle tests.
//!
//! These drive the mechanics facade the way the game loop does: start the
//! producers, drain the hand-off channel per frame, move gifts through the
//! carrier and the table, and tear the session down. Producer cadences are
//! shortened so the whole suite stays fast.

use std::thread;
use std::time::{Duration, Instant};

use oficina::{GameMechanics, GameplayConfig, IntentOutcome, PlayerIntent};

fn fast_config() -> GameplayConfig {
    GameplayConfig {
        conveyor_intervals_ms: vec![20, 20, 20],
        min_production_interval_ms: 10,
        ..GameplayConfig::default()
    }
}

/// Drains repeatedly until at least `count` gifts arrive or the deadline
/// passes.
fn drain_at_least(game: &GameMechanics, count: usize, deadline: Duration) -> Vec<oficina::Gift> {
    let start = Instant::now();
    let mut gifts = Vec::new();
    while gifts.len() < count && start.elapsed() < deadline {
        gifts.extend(game.drain_pending_gifts());
        thread::sleep(Duration::from_millis(5));
    }
    gifts
}

#[test]
fn producers_feed_the_handoff_channel() {
    let mut game = GameMechanics::new(&fast_config());
    game.start();

    let gifts = drain_at_least(&game, 4, Duration::from_secs(5));
    assert!(gifts.len() >= 4, "expected production within five seconds");

    // Gifts come from the configured conveyors, numbered from 1.
    assert!(gifts.iter().all(|g| (1..=3).contains(&g.conveyor)));

    game.stop();
}

#[test]
fn full_session_flow_scores_and_penalizes() {
    let mut game = GameMechanics::new(&fast_config());
    game.start();

    let gifts = drain_at_least(&game, 5, Duration::from_secs(5));
    assert!(gifts.len() >= 5);

    for gift in gifts {
        game.apply_intent(PlayerIntent::PickUpGift(gift));
    }

    // The table holds exactly three; the fourth delivery is a penalty.
    for _ in 0..3 {
        assert_eq!(
            game.apply_intent(PlayerIntent::DeliverGift),
            IntentOutcome::Delivered
        );
    }
    assert_eq!(
        game.apply_intent(PlayerIntent::DeliverGift),
        IntentOutcome::TableFull
    );
    assert_eq!(game.lost_gifts(), 1);
    assert_eq!(game.status().occupied, 3);

    // Collect everything back out, in order, scoring 10 apiece.
    for _ in 0..3 {
        assert_eq!(
            game.apply_intent(PlayerIntent::ProcessGift),
            IntentOutcome::Collected
        );
    }
    assert_eq!(
        game.apply_intent(PlayerIntent::ProcessGift),
        IntentOutcome::TableEmpty
    );
    assert_eq!(game.score(), 30);
    assert_eq!(game.status().total_collected, 3);

    game.stop();
}

#[test]
fn stop_joins_all_producers_and_silences_the_channel() {
    let mut game = GameMechanics::new(&fast_config());
    game.start();
    assert_eq!(game.active_producers(), 3);

    let _ = drain_at_least(&game, 1, Duration::from_secs(5));
    game.stop();
    assert_eq!(game.active_producers(), 0);

    // After the join, nothing new can arrive.
    let _ = game.drain_pending_gifts();
    thread::sleep(Duration::from_millis(100));
    assert!(game.drain_pending_gifts().is_empty());

    // Stopping again is a no-op.
    game.stop();
    assert_eq!(game.active_producers(), 0);
}

#[test]
fn fresh_sessions_start_clean() {
    let mut first = GameMechanics::new(&fast_config());
    first.start();
    let _ = drain_at_least(&first, 1, Duration::from_secs(5));
    first.stop();

    // A new session shares nothing with the previous one.
    let second = GameMechanics::new(&fast_config());
    assert_eq!(second.score(), 0);
    assert_eq!(second.lost_gifts(), 0);
    assert_eq!(second.level(), 1);
    assert!(second.status().occupied == 0);
    assert!(second.drain_pending_gifts().is_empty());
}

#[test]
fn difficulty_escalates_while_producers_run() {
    let mut game = GameMechanics::new(&fast_config());
    game.start();

    // Score 100 via direct deliver/collect cycles to cross the threshold.
    for sequence in 0..10 {
        let gift = oficina::Gift::new(1, sequence, oficina::GiftStyle::Classic);
        assert!(game.deliver_gift(gift));
        assert!(game.collect_gift());
    }

    assert_eq!(game.level(), 2);
    assert!(game.spawn_interval() < Duration::from_millis(2_000));
    assert!(game.fall_speed() > 2.0);

    game.stop();
}
