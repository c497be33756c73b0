//! Collision primitives for combat and movement
//!
//! Everything here is a brute-force scan: at the current scale (<= 50
//! obstacles, <= 150 agents) an O(n) pass per tick is cheap. A spatial grid
//! would be a drop-in replacement if entity counts grow.

use glam::Vec3;

use crate::consts::OBSTACLE_PADDING;
use crate::world::Obstacle;

/// Player hit-volume half extents (contact damage)
pub const PLAYER_HALF_EXTENTS: Vec3 = Vec3::new(0.5, 1.0, 0.5);
/// Agent hit-volume half extents (contact damage)
pub const AGENT_HALF_EXTENTS: Vec3 = Vec3::new(0.5, 1.0, 0.5);

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// 3-D overlap test (inclusive of touching faces)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// True if `candidate` falls inside any obstacle's circular exclusion zone.
///
/// Coarse check on the ground plane: horizontal distance to the obstacle
/// center against `clearance + padding`, for every obstacle, every call.
pub fn blocked_by_obstacle(candidate: Vec3, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| {
        crate::horizontal_distance(candidate, o.position) < o.clearance + OBSTACLE_PADDING
    })
}
