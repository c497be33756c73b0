//! Player movement controller
//!
//! Gravity, jumping, and horizontal movement with coarse obstacle exclusion.
//! Mutates [`Player`] in place; health changes are the combat resolver's job.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::blocked_by_obstacle;
use super::tick::MoveIntent;
use crate::consts::*;
use crate::world::Obstacle;
use crate::yaw_direction;

/// Player simulation state. Reset wholesale on respawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec3,
    pub vertical_velocity: f32,
    pub can_jump: bool,
    /// Clamped to [0, PLAYER_MAX_HEALTH]
    pub health: i32,
    pub dead: bool,
    /// Contact damage is suppressed while the simulation clock is before
    /// this deadline (ms)
    pub invulnerable_until: Option<f64>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, PLAYER_EYE_HEIGHT, 0.0),
            vertical_velocity: 0.0,
            can_jump: true,
            health: PLAYER_MAX_HEALTH,
            dead: false,
            invulnerable_until: None,
        }
    }
}

impl Player {
    /// Advance one tick of movement.
    ///
    /// Applies gravity, rotates the intent into facing space, rejects the
    /// entire horizontal step if the candidate position falls inside any
    /// obstacle's exclusion zone, then integrates vertical motion and clamps
    /// to the ground plane.
    pub fn apply_move(&mut self, intent: MoveIntent, yaw: f32, obstacles: &[Obstacle]) {
        self.vertical_velocity -= PLAYER_GRAVITY;

        let forward = yaw_direction(yaw);
        let right = Vec3::new(forward.z, 0.0, -forward.x);
        let direction = (forward * intent.forward as f32 + right * intent.strafe as f32)
            .normalize_or_zero();
        let step = direction * PLAYER_MOVE_SPEED;

        // All-or-nothing: a blocked candidate cancels the whole horizontal
        // move, no sliding along the obstacle
        let candidate = self.position + step;
        if !blocked_by_obstacle(candidate, obstacles) {
            self.position += step;
        }

        self.position.y += self.vertical_velocity;
        if self.position.y < PLAYER_EYE_HEIGHT {
            self.position.y = PLAYER_EYE_HEIGHT;
            self.vertical_velocity = 0.0;
            self.can_jump = true;
        }
    }

    /// Launch upward if grounded; further jumps are disabled until the
    /// ground clamp re-enables them.
    pub fn jump(&mut self) {
        if self.can_jump {
            self.vertical_velocity = PLAYER_JUMP_IMPULSE;
            self.can_jump = false;
        }
    }

    /// True while an invulnerability deadline is still in the future.
    pub fn is_invulnerable(&self, now_ms: f64) -> bool {
        self.invulnerable_until.is_some_and(|until| now_ms < until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::ObstacleKind;

    const NO_OBSTACLES: &[Obstacle] = &[];

    #[test]
    fn test_idle_stays_grounded() {
        let mut p = Player::default();
        for _ in 0..10 {
            p.apply_move(MoveIntent::default(), 0.0, NO_OBSTACLES);
        }
        assert_eq!(p.position.y, PLAYER_EYE_HEIGHT);
        assert_eq!(p.vertical_velocity, 0.0);
        assert!(p.can_jump);
    }

    #[test]
    fn test_forward_moves_along_facing() {
        let mut p = Player::default();
        let intent = MoveIntent { forward: 1, strafe: 0 };
        p.apply_move(intent, 0.0, NO_OBSTACLES);
        assert!((p.position.z - PLAYER_MOVE_SPEED).abs() < 1e-5);
        assert!(p.position.x.abs() < 1e-5);
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let mut p = Player::default();
        let intent = MoveIntent { forward: 1, strafe: 1 };
        p.apply_move(intent, 0.0, NO_OBSTACLES);
        let travelled = crate::horizontal_distance(p.position, Vec3::new(0.0, 2.0, 0.0));
        assert!((travelled - PLAYER_MOVE_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_jump_and_land() {
        let mut p = Player::default();
        p.jump();
        assert!(!p.can_jump);
        assert_eq!(p.vertical_velocity, PLAYER_JUMP_IMPULSE);

        // Jump is ignored while airborne
        p.apply_move(MoveIntent::default(), 0.0, NO_OBSTACLES);
        let airborne_vel = p.vertical_velocity;
        p.jump();
        assert_eq!(p.vertical_velocity, airborne_vel);

        // Gravity eventually brings the player back to the ground clamp
        for _ in 0..200 {
            p.apply_move(MoveIntent::default(), 0.0, NO_OBSTACLES);
        }
        assert_eq!(p.position.y, PLAYER_EYE_HEIGHT);
        assert!(p.can_jump);
    }

    #[test]
    fn test_obstacle_rejects_whole_move() {
        let obstacles = [Obstacle {
            position: Vec3::new(0.0, 50.0, 3.0),
            base_radius: 5.0,
            height: 100.0,
            clearance: 5.0,
            kind: ObstacleKind::Stone,
        }];
        let mut p = Player::default();
        let intent = MoveIntent { forward: 1, strafe: 0 };
        p.apply_move(intent, 0.0, &obstacles);
        // Candidate lands well inside clearance + padding; no movement at all
        assert_eq!(p.position.x, 0.0);
        assert_eq!(p.position.z, 0.0);
    }

    #[test]
    fn test_invulnerability_deadline() {
        let mut p = Player::default();
        assert!(!p.is_invulnerable(0.0));
        p.invulnerable_until = Some(500.0);
        assert!(p.is_invulnerable(499.0));
        assert!(!p.is_invulnerable(500.0));
    }
}
