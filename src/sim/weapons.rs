//! Weapon and enemy catalogs
//!
//! Closed enumerations mapped to immutable static tables. The catalogs are
//! fixed: exactly two weapons, four enemy archetypes. Selecting a weapon that
//! does not exist is unrepresentable.

use serde::{Deserialize, Serialize};

/// Static weapon configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponSpec {
    pub name: &'static str,
    pub damage: i32,
    /// Milliseconds between auto-fire shots
    pub fire_interval_ms: u32,
    /// Projectile speed (units advanced per tick are speed * time scale)
    pub projectile_speed: f32,
}

static PISTOL: WeaponSpec = WeaponSpec {
    name: "Pistol",
    damage: 34,
    fire_interval_ms: 100,
    projectile_speed: 10.0,
};

static SNIPER: WeaponSpec = WeaponSpec {
    name: "Sniper",
    damage: 100,
    fire_interval_ms: 1000,
    projectile_speed: 25.0,
};

/// One of the two fixed weapons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WeaponId {
    #[default]
    Pistol,
    Sniper,
}

impl WeaponId {
    pub fn spec(self) -> &'static WeaponSpec {
        match self {
            WeaponId::Pistol => &PISTOL,
            WeaponId::Sniper => &SNIPER,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeaponId::Pistol => "pistol",
            WeaponId::Sniper => "sniper",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pistol" => Some(WeaponId::Pistol),
            "sniper" => Some(WeaponId::Sniper),
            _ => None,
        }
    }
}

/// Static enemy-archetype configuration. Colors are presentation-only and
/// live with the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeSpec {
    pub name: &'static str,
    pub max_health: i32,
}

static SCOUT: ArchetypeSpec = ArchetypeSpec {
    name: "Scout",
    max_health: 50,
};
static TANK: ArchetypeSpec = ArchetypeSpec {
    name: "Tank",
    max_health: 100,
};
static MARKSMAN: ArchetypeSpec = ArchetypeSpec {
    name: "Sniper",
    max_health: 75,
};
static RUSHER: ArchetypeSpec = ArchetypeSpec {
    name: "Rusher",
    max_health: 60,
};

/// One of the four fixed enemy archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyArchetype {
    Scout,
    Tank,
    Sniper,
    Rusher,
}

impl EnemyArchetype {
    pub const ALL: [EnemyArchetype; 4] = [
        EnemyArchetype::Scout,
        EnemyArchetype::Tank,
        EnemyArchetype::Sniper,
        EnemyArchetype::Rusher,
    ];

    pub fn spec(self) -> &'static ArchetypeSpec {
        match self {
            EnemyArchetype::Scout => &SCOUT,
            EnemyArchetype::Tank => &TANK,
            EnemyArchetype::Sniper => &MARKSMAN,
            EnemyArchetype::Rusher => &RUSHER,
        }
    }
}
