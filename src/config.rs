//! World and spawn parameters
//!
//! Structural parameters only; gameplay balance is fixed constants in
//! [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Parameters for world generation and agent spawning.
///
/// The defaults describe the full-size arena; tests build smaller worlds to
/// keep generation cheap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// World extent along X
    pub width: f32,
    /// World extent along Z
    pub depth: f32,
    /// Heightfield grid cells per side (samples = segments + 1)
    pub segments: usize,
    /// Number of obstacles to place
    pub obstacle_count: usize,
    /// Number of decorative trees to place
    pub tree_count: usize,
    /// Agent population at world start and after respawn
    pub enemy_count: usize,
    /// Half-extent of the enemy spawn square on X/Z
    pub enemy_spawn_extent: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            depth: WORLD_DEPTH,
            segments: TERRAIN_SEGMENTS,
            obstacle_count: OBSTACLE_COUNT,
            tree_count: TREE_COUNT,
            enemy_count: ENEMY_COUNT,
            enemy_spawn_extent: ENEMY_SPAWN_EXTENT,
        }
    }
}

impl WorldConfig {
    /// A small, cheap world for unit tests.
    pub fn small() -> Self {
        Self {
            width: 200.0,
            depth: 200.0,
            segments: 32,
            obstacle_count: 8,
            tree_count: 10,
            enemy_count: 10,
            enemy_spawn_extent: 80.0,
        }
    }
}
