//! Procedural world generation
//!
//! Runs once at world creation. The output (heightfield + obstacle list +
//! decorative trees) is immutable afterwards and read by the simulation for
//! collision queries and by the presentation layer for mesh construction.

pub mod noise;
pub mod terrain;

pub use noise::Noise2;
pub use terrain::{Heightfield, Obstacle, ObstacleKind, Tree, World, TERRAIN_OCTAVES};
