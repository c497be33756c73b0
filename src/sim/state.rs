//! Simulation state and output types
//!
//! [`Simulation`] owns every entity collection and is driven by an
//! externally-owned loop calling [`Simulation::tick`]. All timing-dependent
//! behavior (invulnerability, auto-fire) is expressed against the internal
//! monotonic clock, so the whole simulation is deterministic under a fake
//! clock.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::agent::{Agent, AiState};
use super::player::Player;
use super::projectile::Projectile;
use super::weapons::{EnemyArchetype, WeaponId};
use crate::config::WorldConfig;
use crate::consts::MUZZLE_OFFSET;
use crate::world::World;

/// Discrete simulation events for the presentation/UI layer, drained once
/// per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    AgentSpawned { id: u32, archetype: EnemyArchetype },
    AgentDestroyed { id: u32 },
    ProjectileSpawned { id: u32, weapon: WeaponId },
    ProjectileDestroyed { id: u32 },
    PlayerDamaged { amount: i32, health: i32 },
    PlayerDied,
    PlayerRespawned,
}

/// The complete simulation: world, player, agents, projectiles, and the
/// weapon/fire state machine.
#[derive(Debug)]
pub struct Simulation {
    pub config: WorldConfig,
    pub world: World,
    pub player: Player,
    /// Live agents, ids ascending
    pub agents: Vec<Agent>,
    /// Live projectiles, ids ascending
    pub projectiles: Vec<Projectile>,
    pub active_weapon: WeaponId,
    /// Simulation clock in ms, advanced by dt every tick
    pub clock_ms: f64,
    pub time_ticks: u64,
    pub(crate) firing: bool,
    pub(crate) fire_accumulator_ms: f64,
    /// Aim direction from the latest tick's input
    pub(crate) aim: Vec3,
    pub(crate) rng: Pcg32,
    next_agent_id: u32,
    next_projectile_id: u32,
    events: Vec<GameEvent>,
}

impl Simulation {
    /// Create a full-size simulation from a seed.
    pub fn new(seed: u64) -> Self {
        Self::with_config(WorldConfig::default(), seed)
    }

    /// Create a simulation with explicit world parameters.
    pub fn with_config(config: WorldConfig, seed: u64) -> Self {
        let world = World::generate(&config, seed);
        let mut sim = Self {
            world,
            player: Player::default(),
            agents: Vec::with_capacity(config.enemy_count),
            projectiles: Vec::new(),
            active_weapon: WeaponId::Pistol,
            clock_ms: 0.0,
            time_ticks: 0,
            firing: false,
            fire_accumulator_ms: 0.0,
            aim: Vec3::Z,
            rng: Pcg32::seed_from_u64(seed.wrapping_add(0xa076_1d64_78bd_642f)),
            next_agent_id: 1,
            next_projectile_id: 1,
            events: Vec::new(),
            config,
        };
        sim.spawn_agents();
        sim
    }

    pub(crate) fn alloc_agent_id(&mut self) -> u32 {
        let id = self.next_agent_id;
        self.next_agent_id += 1;
        id
    }

    pub(crate) fn alloc_projectile_id(&mut self) -> u32 {
        let id = self.next_projectile_id;
        self.next_projectile_id += 1;
        id
    }

    /// Spawn the configured agent population at random positions with random
    /// archetypes.
    pub(crate) fn spawn_agents(&mut self) {
        let extent = self.config.enemy_spawn_extent;
        for _ in 0..self.config.enemy_count {
            let position = Vec3::new(
                self.rng.random_range(-extent..extent),
                0.0,
                self.rng.random_range(-extent..extent),
            );
            let archetype = EnemyArchetype::ALL[self.rng.random_range(0..EnemyArchetype::ALL.len())];
            let id = self.alloc_agent_id();
            self.agents.push(Agent::new(id, position, archetype));
            self.events.push(GameEvent::AgentSpawned { id, archetype });
        }
        log::info!("sim: spawned {} agents", self.config.enemy_count);
    }

    /// Begin auto-fire: one shot immediately, then one per fire interval
    /// while held. No-op if already firing or dead.
    pub fn start_fire(&mut self) {
        if self.firing || self.player.dead {
            return;
        }
        self.firing = true;
        self.fire_accumulator_ms = 0.0;
        self.fire_projectile();
    }

    /// Release the fire command. Idempotent; safe to call at any time.
    pub fn stop_fire(&mut self) {
        self.firing = false;
        self.fire_accumulator_ms = 0.0;
    }

    /// Select a weapon; re-selecting the active weapon is a no-op.
    pub fn select_weapon(&mut self, weapon: WeaponId) {
        if self.active_weapon == weapon {
            return;
        }
        self.active_weapon = weapon;
        log::debug!("sim: weapon -> {}", weapon.as_str());
    }

    /// Spawn one projectile from the muzzle along the current aim.
    pub(crate) fn fire_projectile(&mut self) -> u32 {
        let origin = self.player.position + self.aim * MUZZLE_OFFSET;
        let weapon = self.active_weapon;
        let id = self.alloc_projectile_id();
        self.projectiles
            .push(Projectile::new(id, origin, self.aim, weapon));
        self.events
            .push(GameEvent::ProjectileSpawned { id, weapon });
        id
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take this tick's accumulated events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Per-tick output for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            player: PlayerRep {
                position: self.player.position.to_array(),
                health: self.player.health,
                dead: self.player.dead,
            },
            agents: self
                .agents
                .iter()
                .map(|a| AgentRep {
                    id: a.id,
                    position: a.position.to_array(),
                    facing: a.facing,
                    health: a.health,
                    max_health: a.max_health,
                    state: a.state,
                    archetype: a.archetype,
                    swing_angle: a.swing_angle(),
                })
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .map(|p| ProjectileRep {
                    id: p.id,
                    position: p.position.to_array(),
                    weapon: p.weapon,
                })
                .collect(),
        }
    }
}

/// Player state as exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRep {
    pub position: [f32; 3],
    pub health: i32,
    pub dead: bool,
}

/// Agent state as exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRep {
    pub id: u32,
    pub position: [f32; 3],
    pub facing: f32,
    pub health: i32,
    pub max_health: i32,
    pub state: AiState,
    pub archetype: EnemyArchetype,
    pub swing_angle: f32,
}

/// Projectile state as exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileRep {
    pub id: u32,
    pub position: [f32; 3],
    pub weapon: WeaponId,
}

/// One tick's worth of simulation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub player: PlayerRep,
    pub agents: Vec<AgentRep>,
    pub projectiles: Vec<ProjectileRep>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_sim(seed: u64) -> Simulation {
        Simulation::with_config(WorldConfig::small(), seed)
    }

    #[test]
    fn test_initial_population() {
        let mut sim = test_sim(42);
        assert_eq!(sim.agents.len(), sim.config.enemy_count);
        let events = sim.drain_events();
        let spawned = events
            .iter()
            .filter(|e| matches!(e, GameEvent::AgentSpawned { .. }))
            .count();
        assert_eq!(spawned, sim.config.enemy_count);
        // Drain empties the queue
        assert!(sim.drain_events().is_empty());
    }

    #[test]
    fn test_agent_ids_ascending_and_unique() {
        let sim = test_sim(42);
        for pair in sim.agents.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    #[test]
    fn test_start_fire_spawns_immediately() {
        let mut sim = test_sim(1);
        sim.drain_events();
        sim.start_fire();
        assert_eq!(sim.projectiles.len(), 1);
        // Idempotent while held
        sim.start_fire();
        assert_eq!(sim.projectiles.len(), 1);
        sim.stop_fire();
        sim.stop_fire();
        assert!(!sim.firing);
    }

    #[test]
    fn test_reselecting_weapon_is_noop() {
        let mut sim = test_sim(1);
        assert_eq!(sim.active_weapon, WeaponId::Pistol);
        sim.select_weapon(WeaponId::Pistol);
        assert_eq!(sim.active_weapon, WeaponId::Pistol);
        sim.select_weapon(WeaponId::Sniper);
        assert_eq!(sim.active_weapon, WeaponId::Sniper);
    }

    #[test]
    fn test_snapshot_shape() {
        let sim = test_sim(3);
        let snap = sim.snapshot();
        assert_eq!(snap.tick, 0);
        assert_eq!(snap.agents.len(), sim.agents.len());
        assert_eq!(snap.player.health, 100);
        assert!(!snap.player.dead);
    }
}
