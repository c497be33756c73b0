//! Per-tick orchestration
//!
//! One simulation tick runs to completion in a fixed order: player movement,
//! auto-fire, agent updates, contact damage, projectile advancement, hit
//! resolution. Tests may rely on that order when constructing simultaneous
//! interactions.

use crate::aim_direction;
use super::state::Simulation;

/// Movement intent on the two horizontal axes, each in {-1, 0, 1}.
///
/// Latched by the input layer: key-down sets an axis, key-up clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: i8,
    pub strafe: i8,
}

/// Abstracted input for a single tick.
///
/// Movement and view angles are latched values; `jump` is an edge the caller
/// clears after the tick consumes it. Fire and weapon selection are separate
/// commands ([`Simulation::start_fire`], [`Simulation::stop_fire`],
/// [`Simulation::select_weapon`]) since they arrive as discrete events, not
/// per-tick state.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub movement: MoveIntent,
    /// View yaw in radians (0 faces +Z)
    pub yaw: f32,
    /// View pitch in radians (positive looks up)
    pub pitch: f32,
    /// Edge-triggered; only effective while the player can jump
    pub jump: bool,
}

impl Simulation {
    /// Advance the simulation by one tick.
    ///
    /// `dt` is the real time covered by this tick in seconds; it drives the
    /// monotonic clock behind the invulnerability window and the auto-fire
    /// cadence. Movement itself is per-tick stepping.
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        self.time_ticks += 1;
        self.clock_ms += f64::from(dt) * 1000.0;
        self.aim = aim_direction(input.yaw, input.pitch);

        // 1) Player movement
        if !self.player.dead {
            if input.jump {
                self.player.jump();
            }
            self.player
                .apply_move(input.movement, input.yaw, &self.world.obstacles);
        }

        // 2) Auto-fire while the fire command is held
        if self.firing && !self.player.dead {
            self.fire_accumulator_ms += f64::from(dt) * 1000.0;
            let interval = f64::from(self.active_weapon.spec().fire_interval_ms);
            while self.fire_accumulator_ms >= interval {
                self.fire_accumulator_ms -= interval;
                self.fire_projectile();
            }
        }

        // 3) Agent AI
        let player_position = self.player.position;
        for agent in &mut self.agents {
            agent.update(player_position);
        }

        // 4) Contact damage
        self.resolve_player_contact();

        // 5) Projectiles: advance/expire, then resolve hits
        self.advance_projectiles();
        self.resolve_projectile_hits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::consts::*;
    use crate::sim::agent::{Agent, AiState};
    use crate::sim::state::GameEvent;
    use crate::sim::weapons::{EnemyArchetype, WeaponId};
    use glam::Vec3;
    use proptest::prelude::*;

    fn empty_sim(seed: u64) -> Simulation {
        let mut sim = Simulation::with_config(WorldConfig::small(), seed);
        sim.agents.clear();
        // Scripted scenarios want an unobstructed arena
        sim.world.obstacles.clear();
        sim.drain_events();
        sim
    }

    #[test]
    fn test_player_moves_before_agents_see_them() {
        let mut sim = empty_sim(1);
        // Just beyond detection range; only the post-move position is inside
        sim.agents
            .push(Agent::new(1, Vec3::new(0.0, 0.0, 15.5), EnemyArchetype::Scout));
        let input = TickInput {
            movement: MoveIntent { forward: 1, strafe: 0 },
            ..Default::default()
        };
        sim.tick(&input, SIM_DT);
        assert_eq!(sim.agents[0].state, AiState::Chase);
    }

    #[test]
    fn test_autofire_cadence_pistol() {
        let mut sim = empty_sim(2);
        sim.start_fire();
        assert_eq!(sim.projectiles.len(), 1);

        let input = TickInput::default();
        // 50 ms per tick against the pistol's 100 ms interval
        sim.tick(&input, 0.05);
        assert_eq!(sim.projectiles.len(), 1);
        sim.tick(&input, 0.05);
        assert_eq!(sim.projectiles.len(), 2);
        sim.tick(&input, 0.05);
        assert_eq!(sim.projectiles.len(), 2);
        sim.tick(&input, 0.05);
        assert_eq!(sim.projectiles.len(), 3);

        sim.stop_fire();
        for _ in 0..10 {
            sim.tick(&input, 0.05);
        }
        assert_eq!(sim.projectiles.len(), 3);
    }

    #[test]
    fn test_autofire_respects_weapon_interval() {
        let mut sim = empty_sim(3);
        sim.select_weapon(WeaponId::Sniper);
        sim.start_fire();
        let input = TickInput::default();
        // 900 ms: still inside the sniper's 1000 ms interval
        for _ in 0..9 {
            sim.tick(&input, 0.1);
        }
        assert_eq!(sim.projectiles.len(), 1);
        sim.tick(&input, 0.1);
        assert_eq!(sim.projectiles.len(), 2);
    }

    #[test]
    fn test_contact_window_suppresses_repeat_damage() {
        let mut sim = empty_sim(4);
        sim.agents
            .push(Agent::new(1, Vec3::ZERO, EnemyArchetype::Tank));
        let input = TickInput::default();
        // 100 ms ticks against the 500 ms window: damage on tick 1, then
        // again once the deadline passes on tick 6
        for _ in 0..6 {
            sim.tick(&input, 0.1);
        }
        let damaged = sim
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::PlayerDamaged { .. }))
            .count();
        assert_eq!(damaged, 2);
        assert_eq!(sim.player.health, 80);
    }

    #[test]
    fn test_projectile_expires_exactly_at_zero() {
        let mut sim = empty_sim(5);
        // Fire straight up so nothing is ever hit
        sim.aim = Vec3::Y;
        sim.start_fire();
        sim.stop_fire();
        let input = TickInput { pitch: std::f32::consts::FRAC_PI_2, ..Default::default() };
        for _ in 0..(PROJECTILE_LIFETIME - 1) {
            sim.tick(&input, SIM_DT);
        }
        assert_eq!(sim.projectiles.len(), 1);
        assert_eq!(sim.projectiles[0].remaining_life, 1);
        sim.tick(&input, SIM_DT);
        assert!(sim.projectiles.is_empty());
    }

    #[test]
    fn test_dead_player_neither_moves_nor_fires() {
        let mut sim = empty_sim(6);
        sim.player.health = 10;
        sim.agents
            .push(Agent::new(1, Vec3::ZERO, EnemyArchetype::Rusher));
        let input = TickInput {
            movement: MoveIntent { forward: 1, strafe: 0 },
            ..Default::default()
        };
        sim.tick(&input, SIM_DT);
        assert!(sim.player.dead);

        let position = sim.player.position;
        sim.start_fire();
        sim.tick(&input, SIM_DT);
        assert_eq!(sim.player.position, position);
        assert!(sim.projectiles.is_empty());
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            TickInput { movement: MoveIntent { forward: 1, strafe: 0 }, ..Default::default() },
            TickInput { movement: MoveIntent { forward: 1, strafe: -1 }, yaw: 0.7, ..Default::default() },
            TickInput { jump: true, ..Default::default() },
            TickInput::default(),
        ];

        let mut a = Simulation::with_config(WorldConfig::small(), 99999);
        let mut b = Simulation::with_config(WorldConfig::small(), 99999);
        a.start_fire();
        b.start_fire();
        for _ in 0..30 {
            for input in &inputs {
                a.tick(input, SIM_DT);
                b.tick(input, SIM_DT);
            }
        }
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.snapshot(), b.snapshot());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]
        #[test]
        fn prop_health_stays_in_bounds(
            seed in any::<u64>(),
            moves in proptest::collection::vec((-1i8..=1, -1i8..=1, any::<bool>()), 1..60),
        ) {
            let mut sim = Simulation::with_config(WorldConfig::small(), seed);
            for (forward, strafe, jump) in moves {
                let input = TickInput {
                    movement: MoveIntent { forward, strafe },
                    jump,
                    ..Default::default()
                };
                sim.tick(&input, SIM_DT);
                prop_assert!((0..=PLAYER_MAX_HEALTH).contains(&sim.player.health));
                for agent in &sim.agents {
                    prop_assert!((0..=agent.max_health).contains(&agent.health));
                }
            }
        }
    }
}
