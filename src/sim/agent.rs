//! Enemy agent controller
//!
//! Per-agent finite-state machine with two states, re-evaluated fresh every
//! tick (no hysteresis at the detection boundary; that oscillation is part of
//! the contract):
//!
//! - **Patrol**: creep around a four-point loop anchored at the spawn point.
//! - **Chase**: entered whenever the player is inside detection range; move
//!   straight at the player and turn toward them with a bounded step.

use std::f32::consts::FRAC_PI_4;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::weapons::EnemyArchetype;
use crate::consts::*;
use crate::horizontal_distance;

/// AI state, re-evaluated every tick from distance to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AiState {
    #[default]
    Patrol,
    Chase,
}

/// An AI-controlled hostile entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: u32,
    pub position: Vec3,
    /// Yaw in radians (0 faces +Z)
    pub facing: f32,
    /// Clamped to [0, max_health]; the agent is removed the tick this hits 0
    pub health: i32,
    pub max_health: i32,
    pub state: AiState,
    pub archetype: EnemyArchetype,
    /// Four-point loop anchored at spawn
    pub patrol_route: [Vec3; 4],
    pub patrol_index: usize,
    /// Cosmetic arm-swing phase; presentation reads [`Agent::swing_angle`]
    pub swing_phase: f32,
}

impl Agent {
    pub fn new(id: u32, spawn: Vec3, archetype: EnemyArchetype) -> Self {
        let spawn = Vec3::new(spawn.x, AGENT_GROUND_Y, spawn.z);
        Self {
            id,
            position: spawn,
            facing: 0.0,
            health: archetype.spec().max_health,
            max_health: archetype.spec().max_health,
            state: AiState::Patrol,
            archetype,
            patrol_route: [
                spawn,
                spawn + Vec3::new(5.0, 0.0, 0.0),
                spawn + Vec3::new(5.0, 0.0, 5.0),
                spawn + Vec3::new(0.0, 0.0, 5.0),
            ],
            patrol_index: 0,
            swing_phase: 0.0,
        }
    }

    /// Advance one tick of AI. Pure state mutation, no failure modes.
    pub fn update(&mut self, player_position: Vec3) {
        if self.position.distance(player_position) < DETECTION_RANGE {
            self.state = AiState::Chase;
            self.chase(player_position);
        } else {
            self.state = AiState::Patrol;
            self.patrol();
        }

        self.swing_phase += ARM_SWING_RATE;
        self.position.y = AGENT_GROUND_Y;
    }

    fn chase(&mut self, player_position: Vec3) {
        let mut direction = player_position - self.position;
        direction.y = 0.0;
        let direction = direction.normalize_or_zero();
        self.position += direction * CHASE_SPEED;

        // Turn toward the bearing with a bounded per-tick step; the raw
        // angular difference is used as-is, without wrap-around
        let target = direction.x.atan2(direction.z);
        let difference = target - self.facing;
        self.facing += difference.signum() * difference.abs().min(AGENT_TURN_STEP);
    }

    fn patrol(&mut self) {
        let target = self.patrol_route[self.patrol_index];
        if horizontal_distance(self.position, target) < PATROL_TOLERANCE {
            self.patrol_index = (self.patrol_index + 1) % self.patrol_route.len();
        }
        // Keep heading for the waypoint captured above; a just-advanced
        // index takes effect next tick
        let mut direction = target - self.position;
        direction.y = 0.0;
        self.position += direction.normalize_or_zero() * PATROL_SPEED;
    }

    /// Current arm-swing angle in radians, for the presentation layer.
    pub fn swing_angle(&self) -> f32 {
        self.swing_phase.sin() * FRAC_PI_4
    }
}
