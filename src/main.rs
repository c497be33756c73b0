//! Peakshot entry point
//!
//! Headless demo driver: builds a full-size world, runs a scripted few
//! seconds of simulation at the fixed timestep, and dumps the final snapshot
//! as JSON. The real presentation layer owns this loop in production; this
//! binary exists so the core can be exercised (and profiled) without one.

use std::time::{SystemTime, UNIX_EPOCH};

use peakshot::consts::*;
use peakshot::sim::{GameEvent, MoveIntent, Simulation, TickInput, WeaponId};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("peakshot demo starting (seed {seed})");

    let mut sim = Simulation::new(seed);

    let mut destroyed = 0usize;
    let mut damage_taken = 0i32;
    let mut deaths = 0usize;

    // Ten simulated seconds: run at the player, firing in bursts, swapping
    // to the sniper halfway through
    let total_ticks = (10.0 / SIM_DT) as u64;
    for t in 0..total_ticks {
        if t == 30 {
            sim.start_fire();
        }
        if t == 240 {
            sim.stop_fire();
        }
        if t == 300 {
            sim.select_weapon(WeaponId::Sniper);
            sim.start_fire();
        }

        let input = TickInput {
            movement: MoveIntent {
                forward: if t % 120 < 90 { 1 } else { 0 },
                strafe: 0,
            },
            yaw: (t as f32 * 0.002).sin(),
            pitch: 0.0,
            jump: t % 180 == 0,
        };
        sim.tick(&input, SIM_DT);

        for event in sim.drain_events() {
            match event {
                GameEvent::AgentDestroyed { .. } => destroyed += 1,
                GameEvent::PlayerDamaged { amount, .. } => damage_taken += amount,
                GameEvent::PlayerDied => {
                    deaths += 1;
                    log::info!("player down at tick {t}; respawning");
                    sim.respawn();
                }
                _ => {}
            }
        }
    }

    log::info!(
        "demo done: {} ticks, {} agents destroyed, {} damage taken, {} deaths, {} agents live",
        total_ticks,
        destroyed,
        damage_taken,
        deaths,
        sim.agents.len(),
    );

    match serde_json::to_string_pretty(&sim.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("snapshot serialization failed: {e}"),
    }
}
