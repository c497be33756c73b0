//! Heightfield and obstacle generation
//!
//! The arena floor is a heightfield built from three fixed octaves of
//! coherent noise, clamped so elevation never dips below the ground plane.
//! Mountains are placed separately as an exclusion-zone list: they are solid
//! for player movement but are not part of the heightfield itself.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::noise::Noise2;
use crate::config::WorldConfig;
use crate::consts::OBSTACLE_MARGIN;

/// The three terrain octaves as (frequency, amplitude) pairs:
/// large features, medium variation, small hills.
pub const TERRAIN_OCTAVES: [(f32, f32); 3] = [(0.01, 10.0), (0.05, 5.0), (0.1, 2.0)];

/// Frequency of the obstacle surface-detail noise
const DETAIL_FREQUENCY: f32 = 0.1;
/// Amplitude of the obstacle surface-detail noise
const DETAIL_AMPLITUDE: f32 = 10.0;

/// Immutable grid of terrain elevation samples.
///
/// Samples span `-width/2..width/2` on X and `-depth/2..depth/2` on Z,
/// row-major with `segments + 1` samples per side. Elevation is >= 0
/// everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heightfield {
    heights: Vec<f32>,
    samples_per_side: usize,
    width: f32,
    depth: f32,
}

impl Heightfield {
    /// Generate the heightfield by summing the fixed octaves at each sample's
    /// world coordinate, clamped to a minimum of 0.
    pub fn generate(width: f32, depth: f32, segments: usize, noise: &Noise2) -> Self {
        let samples = segments + 1;
        let mut heights = Vec::with_capacity(samples * samples);
        for jz in 0..samples {
            for ix in 0..samples {
                let x = (ix as f32 / segments as f32 - 0.5) * width;
                let z = (jz as f32 / segments as f32 - 0.5) * depth;
                let mut h = 0.0;
                for (frequency, amplitude) in TERRAIN_OCTAVES {
                    h += noise.sample(x * frequency, z * frequency) * amplitude;
                }
                heights.push(h.max(0.0));
            }
        }
        Self {
            heights,
            samples_per_side: samples,
            width,
            depth,
        }
    }

    /// Grid samples per side.
    pub fn samples_per_side(&self) -> usize {
        self.samples_per_side
    }

    /// Elevation at grid indices (clamped to the grid edge).
    pub fn sample(&self, ix: usize, jz: usize) -> f32 {
        let ix = ix.min(self.samples_per_side - 1);
        let jz = jz.min(self.samples_per_side - 1);
        self.heights[jz * self.samples_per_side + ix]
    }

    /// Elevation at a world position, via the nearest grid sample.
    ///
    /// The grid is only queried at discrete sample points; this is not a
    /// continuous terrain-collision surface.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let segments = (self.samples_per_side - 1) as f32;
        let gx = ((x / self.width + 0.5) * segments).round().clamp(0.0, segments);
        let gz = ((z / self.depth + 0.5) * segments).round().clamp(0.0, segments);
        self.sample(gx as usize, gz as usize)
    }

    /// Raw sample storage, row-major (for mesh construction).
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }
}

/// Mountain archetype; height range varies per kind.
///
/// Surface color/roughness are presentation concerns and live with the
/// renderer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Rocky,
    Ridge,
    Stone,
}

impl ObstacleKind {
    /// (min, max) cone height for this kind
    pub fn height_range(self) -> (f32, f32) {
        match self {
            ObstacleKind::Rocky => (80.0, 150.0),
            ObstacleKind::Ridge => (100.0, 200.0),
            ObstacleKind::Stone => (70.0, 130.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ObstacleKind::Rocky => "rocky",
            ObstacleKind::Ridge => "ridge",
            ObstacleKind::Stone => "stone",
        }
    }
}

/// A collidable mountain with a circular exclusion radius.
///
/// `position.y` is the cone midpoint (`height / 2`); movement collision uses
/// the horizontal distance to the center against `clearance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub position: Vec3,
    pub base_radius: f32,
    pub height: f32,
    /// Exclusion radius; invariant: clearance >= base_radius
    pub clearance: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// Surface displacement for presentation meshes: an independent noise
    /// evaluation at the given local vertex coordinate. Irrelevant to
    /// collision, which uses `clearance` only.
    pub fn surface_offset(&self, detail: &Noise2, x: f32, z: f32) -> f32 {
        detail.sample(x * DETAIL_FREQUENCY, z * DETAIL_FREQUENCY) * DETAIL_AMPLITUDE
    }
}

/// A decorative tree placement. No collision, no per-tick cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub position: Vec3,
}

/// The generated world: heightfield, obstacles, and decor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub heightfield: Heightfield,
    pub obstacles: Vec<Obstacle>,
    pub trees: Vec<Tree>,
    /// Independent noise field for obstacle surface detail
    pub detail_noise: Noise2,
}

impl World {
    /// Generate a world from a seed. Deterministic: equal seed and config
    /// produce an identical world.
    pub fn generate(config: &WorldConfig, seed: u64) -> Self {
        let noise = Noise2::new(seed);
        let heightfield =
            Heightfield::generate(config.width, config.depth, config.segments, &noise);

        let mut rng = Pcg32::seed_from_u64(seed.wrapping_add(0x9e3779b9));
        let obstacles = place_obstacles(config, &mut rng);
        let trees = place_trees(config, &mut rng);

        log::info!(
            "world: {}x{} heightfield ({} samples/side), {} obstacles, {} trees (seed {seed})",
            config.width,
            config.depth,
            heightfield.samples_per_side(),
            obstacles.len(),
            trees.len(),
        );

        Self {
            heightfield,
            obstacles,
            trees,
            detail_noise: Noise2::new(seed.wrapping_add(0x51afd7ed)),
        }
    }
}

fn place_obstacles(config: &WorldConfig, rng: &mut Pcg32) -> Vec<Obstacle> {
    let half_x = config.width * OBSTACLE_MARGIN / 2.0;
    let half_z = config.depth * OBSTACLE_MARGIN / 2.0;
    let mut obstacles = Vec::with_capacity(config.obstacle_count);
    for _ in 0..config.obstacle_count {
        let kind = match rng.random_range(0..3) {
            0 => ObstacleKind::Rocky,
            1 => ObstacleKind::Ridge,
            _ => ObstacleKind::Stone,
        };
        let (min_h, max_h) = kind.height_range();
        let base_radius = rng.random_range(20.0..50.0);
        let height = rng.random_range(min_h..max_h);
        let position = Vec3::new(
            rng.random_range(-half_x..half_x),
            height / 2.0,
            rng.random_range(-half_z..half_z),
        );
        obstacles.push(Obstacle {
            position,
            base_radius,
            height,
            clearance: base_radius,
            kind,
        });
    }
    obstacles
}

fn place_trees(config: &WorldConfig, rng: &mut Pcg32) -> Vec<Tree> {
    let half_x = config.width * 0.45;
    let half_z = config.depth * 0.45;
    (0..config.tree_count)
        .map(|_| Tree {
            position: Vec3::new(
                rng.random_range(-half_x..half_x),
                1.5,
                rng.random_range(-half_z..half_z),
            ),
        })
        .collect()
}
