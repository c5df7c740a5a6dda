//! Headless auto-played session.
//!
//! Exercises the full mechanics loop without a renderer: producers run at an
//! accelerated cadence while a scripted player picks up, delivers and
//! processes gifts every frame until the session is decided.
//!
//! Run with: cargo run --package oficina --bin headless_session

use std::thread;
use std::time::Duration;

use oficina::{GameMechanics, GameplayConfig, IntentOutcome, PlayerIntent};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = GameplayConfig {
        conveyor_intervals_ms: vec![400, 350, 300],
        min_production_interval_ms: 100,
        ..GameplayConfig::default()
    };

    let mut game = GameMechanics::new(&config);
    game.start();

    let mut delivered = 0u32;
    let frame = Duration::from_millis(50);

    for _ in 0..2_000 {
        thread::sleep(frame);

        for gift in game.drain_pending_gifts() {
            game.apply_intent(PlayerIntent::PickUpGift(gift));
        }
        if game.apply_intent(PlayerIntent::DeliverGift) == IntentOutcome::Delivered {
            delivered += 1;
        }
        game.apply_intent(PlayerIntent::ProcessGift);

        if game.evaluate_win() {
            tracing::info!("session won at {} points", game.score());
            break;
        }
        if game.evaluate_loss() {
            tracing::info!(
                "session lost: {} gifts gone for {} points",
                game.lost_gifts(),
                game.score()
            );
            break;
        }
    }

    let stats = game.stats();
    tracing::info!(
        "final: score {} | lost {} | level {} | table {}/{} | collected {} | delivered {}",
        stats.score,
        stats.lost_gifts,
        stats.level,
        stats.table.occupied,
        stats.table.capacity,
        stats.table.total_collected,
        delivered
    );

    game.stop();
}
