//! Seeded 2-D gradient noise
//!
//! Coherent noise over an integer lattice: each lattice corner gets a
//! pseudo-random diagonal gradient from a seeded hash, corner contributions
//! are blended with a smoothstep. Deterministic for a given seed, no tables
//! to allocate.

use serde::{Deserialize, Serialize};

/// A seeded 2-D coherent noise field.
///
/// `sample` returns values in roughly [-1, 1]; callers scale by their own
/// amplitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Noise2 {
    seed: u64,
}

impl Noise2 {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Evaluate the noise field at (x, y).
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let x0 = x.floor() as i32;
        let y0 = y.floor() as i32;
        let fx = x - x0 as f32;
        let fy = y - y0 as f32;

        // Smoothstep fade
        let u = fx * fx * (3.0 - 2.0 * fx);
        let v = fy * fy * (3.0 - 2.0 * fy);

        let n00 = grad_dot(hash_corner(x0, y0, self.seed), fx, fy);
        let n10 = grad_dot(hash_corner(x0 + 1, y0, self.seed), fx - 1.0, fy);
        let n01 = grad_dot(hash_corner(x0, y0 + 1, self.seed), fx, fy - 1.0);
        let n11 = grad_dot(hash_corner(x0 + 1, y0 + 1, self.seed), fx - 1.0, fy - 1.0);

        let nx0 = n00 + u * (n10 - n00);
        let nx1 = n01 + u * (n11 - n01);
        nx0 + v * (nx1 - nx0)
    }
}

/// Mix a lattice corner and the field seed into 64 pseudo-random bits.
fn hash_corner(x: i32, y: i32, seed: u64) -> u64 {
    let mut h = seed;
    h = h.wrapping_add(x as u64).wrapping_mul(6364136223846793005);
    h = h.wrapping_add(y as u64).wrapping_mul(6364136223846793005);
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51afd7ed558ccd);
    h ^= h >> 33;
    h
}

/// Dot product with one of four diagonal gradients chosen by the hash.
fn grad_dot(hash: u64, fx: f32, fy: f32) -> f32 {
    match hash & 3 {
        0 => fx + fy,
        1 => -fx + fy,
        2 => fx - fy,
        _ => -fx - fy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_deterministic() {
        let n = Noise2::new(42);
        let a = n.sample(1.5, 2.3);
        let b = n.sample(1.5, 2.3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_noise_seed_changes_field() {
        let a = Noise2::new(42).sample(1.5, 2.3);
        let b = Noise2::new(99).sample(1.5, 2.3);
        assert!((a - b).abs() > 1e-10);
    }

    #[test]
    fn test_noise_bounded() {
        let n = Noise2::new(7);
        for i in 0..200 {
            for j in 0..200 {
                let v = n.sample(i as f32 * 0.37, j as f32 * 0.53);
                assert!(v.abs() <= 2.0, "noise out of range: {v}");
            }
        }
    }

    #[test]
    fn test_noise_not_constant() {
        let n = Noise2::new(3);
        let a = n.sample(0.25, 0.25);
        let b = n.sample(5.75, 9.25);
        assert!((a - b).abs() > 1e-6);
    }
}
