//! Peakshot - simulation core for a first-person arena shooter
//!
//! Core modules:
//! - `world`: Procedural world generation (noise heightfield, obstacles)
//! - `sim`: Deterministic simulation (player, agents, projectiles, combat)
//! - `config`: World/spawn parameters
//!
//! Rendering, UI, and raw input live outside this crate: the simulation
//! consumes abstracted input ([`sim::TickInput`] plus fire/weapon commands)
//! and emits abstracted state ([`sim::Snapshot`] and [`sim::GameEvent`]s).

pub mod config;
pub mod sim;
pub mod world;

pub use config::WorldConfig;
pub use sim::{GameEvent, Simulation, Snapshot, TickInput};

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (display-synchronized, 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 1000.0;
    pub const WORLD_DEPTH: f32 = 1000.0;
    /// Heightfield grid cells per side (samples = segments + 1)
    pub const TERRAIN_SEGMENTS: usize = 250;
    /// Obstacles placed at world generation
    pub const OBSTACLE_COUNT: usize = 50;
    /// Decorative tree placements
    pub const TREE_COUNT: usize = 200;
    /// Obstacles land within the interior 80% of the world bounds
    pub const OBSTACLE_MARGIN: f32 = 0.8;

    /// Player movement per tick
    pub const PLAYER_MOVE_SPEED: f32 = 0.6;
    /// Vertical velocity set by a jump
    pub const PLAYER_JUMP_IMPULSE: f32 = 6.0;
    /// Gravity applied to vertical velocity every tick
    pub const PLAYER_GRAVITY: f32 = 0.2;
    /// Minimum player Y (eye height above the ground plane)
    pub const PLAYER_EYE_HEIGHT: f32 = 2.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    /// Extra padding added to an obstacle's clearance radius
    pub const OBSTACLE_PADDING: f32 = 2.0;

    /// Agents spawned at world start and on respawn
    pub const ENEMY_COUNT: usize = 150;
    /// Enemies spawn within this half-extent on X/Z
    pub const ENEMY_SPAWN_EXTENT: f32 = 400.0;
    /// Distance at which an agent switches to Chase
    pub const DETECTION_RANGE: f32 = 15.0;
    /// Patrol creep per tick
    pub const PATROL_SPEED: f32 = 0.03;
    /// Horizontal distance treated as "reached" a patrol waypoint
    pub const PATROL_TOLERANCE: f32 = 0.1;
    /// Chase speed per tick
    pub const CHASE_SPEED: f32 = 0.05;
    /// Bounded facing rotation per tick (radians)
    pub const AGENT_TURN_STEP: f32 = 0.1;
    /// Agent Y is pinned here every tick
    pub const AGENT_GROUND_Y: f32 = 1.0;
    /// Arm-swing phase advance per tick
    pub const ARM_SWING_RATE: f32 = 0.05;

    /// Contact damage per overlap tick
    pub const CONTACT_DAMAGE: i32 = 10;
    /// Invulnerability window after contact damage (wall-clock ms)
    pub const INVULNERABILITY_MS: f64 = 500.0;

    /// Projectile lifetime in ticks, regardless of weapon
    pub const PROJECTILE_LIFETIME: u32 = 100;
    /// Per-tick projectile advance is speed * this scale
    pub const PROJECTILE_TIME_SCALE: f32 = 0.1;
    /// Straight-line distance at which a projectile hits an agent
    pub const PROJECTILE_HIT_RADIUS: f32 = 1.0;
    /// Projectiles spawn this far ahead of the muzzle along the aim
    pub const MUZZLE_OFFSET: f32 = 1.0;
}

/// Horizontal forward direction for a yaw angle (yaw 0 faces +Z)
#[inline]
pub fn yaw_direction(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}

/// Unit aim direction from yaw and pitch (pitch > 0 looks up)
#[inline]
pub fn aim_direction(yaw: f32, pitch: f32) -> Vec3 {
    let (sp, cp) = (pitch.sin(), pitch.cos());
    Vec3::new(yaw.sin() * cp, sp, yaw.cos() * cp)
}

/// Distance between two points on the ground plane (Y ignored)
#[inline]
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}
