//! Test utilities: deterministic point cloud fixtures.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Point;

/// Uniform points in the cube [-extent, extent]^3 with random normals and
/// colors.
pub fn random_cloud(count: usize, extent: f32, seed: u64) -> Vec<Point> {
  let mut rng = StdRng::seed_from_u64(seed);
  (0..count)
    .map(|_| {
      let position = Vec3::new(
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
      );
      let normal = Vec3::new(
        rng.random_range(-1.0..1.0),
        rng.random_range(-1.0..1.0),
        rng.random_range(-1.0..1.0),
      )
      .normalize_or_zero();
      Point::new(position, normal, rng.random())
    })
    .collect()
}

/// Points on a sphere surface with outward normals.
pub fn sphere_cloud(count: usize, radius: f32, seed: u64) -> Vec<Point> {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut points = Vec::with_capacity(count);
  while points.len() < count {
    let v = Vec3::new(
      rng.random_range(-1.0..1.0),
      rng.random_range(-1.0..1.0),
      rng.random_range(-1.0..1.0),
    );
    let len = v.length();
    if !(0.01..=1.0).contains(&len) {
      continue;
    }
    let normal = v / len;
    points.push(Point::new(normal * radius, normal, [200, 180, 160]));
  }
  points
}

/// Point at a position with a fixed color and no normal.
pub fn point_at(x: f32, y: f32, z: f32) -> Point {
  Point::without_normal(Vec3::new(x, y, z), [128, 128, 128])
}
