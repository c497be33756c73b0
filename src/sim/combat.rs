//! Combat resolution
//!
//! Two independent passes per tick, run in a fixed order for determinism:
//! player contact damage first, then projectile hits. Also owns death and
//! respawn handling.

use super::collision::{Aabb, AGENT_HALF_EXTENTS, PLAYER_HALF_EXTENTS};
use super::player::Player;
use super::state::{GameEvent, Simulation};
use crate::consts::{CONTACT_DAMAGE, INVULNERABILITY_MS, PROJECTILE_HIT_RADIUS};

impl Simulation {
    /// Contact damage: a single aggregate hit-volume overlap test against all
    /// live agents. Overlapping five agents in one tick costs the same as
    /// overlapping one.
    pub(crate) fn resolve_player_contact(&mut self) {
        if self.player.dead {
            return;
        }
        let player_volume = Aabb::from_center(self.player.position, PLAYER_HALF_EXTENTS);
        let overlapping = self
            .agents
            .iter()
            .any(|a| player_volume.intersects(&Aabb::from_center(a.position, AGENT_HALF_EXTENTS)));
        if !overlapping || self.player.is_invulnerable(self.clock_ms) {
            return;
        }

        self.player.health = (self.player.health - CONTACT_DAMAGE).max(0);
        self.player.invulnerable_until = Some(self.clock_ms + INVULNERABILITY_MS);
        self.push_event(GameEvent::PlayerDamaged {
            amount: CONTACT_DAMAGE,
            health: self.player.health,
        });

        if self.player.health == 0 {
            self.player.dead = true;
            self.firing = false;
            self.push_event(GameEvent::PlayerDied);
            log::info!("sim: player died at tick {}", self.time_ticks);
        }
    }

    /// Advance every projectile and remove the ones whose lifetime ran out.
    /// Expiry is independent of hits.
    pub(crate) fn advance_projectiles(&mut self) {
        let mut expired = Vec::new();
        self.projectiles.retain_mut(|p| {
            p.advance();
            if p.remaining_life == 0 {
                expired.push(p.id);
                false
            } else {
                true
            }
        });
        for id in expired {
            self.push_event(GameEvent::ProjectileDestroyed { id });
        }
    }

    /// Projectile hits: each live projectile strikes the first agent within
    /// the hit radius and is removed immediately; no penetration. Agents are
    /// removed the moment their health reaches 0.
    pub(crate) fn resolve_projectile_hits(&mut self) {
        let mut pi = 0;
        while pi < self.projectiles.len() {
            let position = self.projectiles[pi].position;
            let hit = self
                .agents
                .iter()
                .position(|a| a.position.distance(position) < PROJECTILE_HIT_RADIUS);
            let Some(ai) = hit else {
                pi += 1;
                continue;
            };

            let damage = self.projectiles[pi].damage;
            let projectile_id = self.projectiles[pi].id;
            self.projectiles.remove(pi);
            self.push_event(GameEvent::ProjectileDestroyed { id: projectile_id });

            let agent = &mut self.agents[ai];
            agent.health = (agent.health - damage).max(0);
            if agent.health == 0 {
                let agent_id = agent.id;
                self.agents.remove(ai);
                self.push_event(GameEvent::AgentDestroyed { id: agent_id });
            }
        }
    }

    /// Reset the player wholesale and regenerate the full agent population
    /// from scratch. Clearing the invulnerability deadline doubles as timer
    /// cancellation; a deadline that already "fired" is simply gone.
    pub fn respawn(&mut self) {
        self.player = Player::default();
        self.firing = false;
        self.fire_accumulator_ms = 0.0;
        // In-flight projectiles survive the respawn
        self.agents.clear();
        self.spawn_agents();
        self.push_event(GameEvent::PlayerRespawned);
        log::info!("sim: player respawned, {} agents live", self.agents.len());
    }
}
