//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick stepping, driven by an externally-owned loop
//! - Seeded RNG only
//! - Single-threaded; all state is owned by [`Simulation`]
//! - No rendering or platform dependencies

pub mod agent;
pub mod collision;
pub mod combat;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod weapons;

pub use agent::{Agent, AiState};
pub use collision::Aabb;
pub use player::Player;
pub use projectile::Projectile;
pub use state::{AgentRep, GameEvent, PlayerRep, ProjectileRep, Simulation, Snapshot};
pub use tick::{MoveIntent, TickInput};
pub use weapons::{ArchetypeSpec, EnemyArchetype, WeaponId, WeaponSpec};
