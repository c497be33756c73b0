//! Projectile entities
//!
//! Straight-line movers with a fixed tick lifetime. A projectile is removed
//! on expiry or on its first hit, whichever comes first; hit resolution lives
//! in the combat module.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::weapons::WeaponId;
use crate::consts::{PROJECTILE_LIFETIME, PROJECTILE_TIME_SCALE};

/// A live projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub position: Vec3,
    /// Unit direction of travel
    pub direction: Vec3,
    pub speed: f32,
    /// Decreases by one every tick; the projectile is removed exactly at 0
    pub remaining_life: u32,
    pub damage: i32,
    pub weapon: WeaponId,
}

impl Projectile {
    /// Spawn from an origin along a direction; speed and damage come from
    /// the weapon catalog, lifetime is the same fixed constant for every
    /// weapon.
    pub fn new(id: u32, origin: Vec3, direction: Vec3, weapon: WeaponId) -> Self {
        let spec = weapon.spec();
        Self {
            id,
            position: origin,
            direction: direction.normalize_or_zero(),
            speed: spec.projectile_speed,
            remaining_life: PROJECTILE_LIFETIME,
            damage: spec.damage,
            weapon,
        }
    }

    /// Advance one tick: move along the direction and burn one tick of life.
    pub fn advance(&mut self) {
        self.position += self.direction * self.speed * PROJECTILE_TIME_SCALE;
        self.remaining_life = self.remaining_life.saturating_sub(1);
    }
}
