//! Per-node appearance aggregation.
//!
//! Two modes, fixed per tree:
//!
//! - **Isotropic**: rounded arithmetic mean of the point colors.
//! - **View-dependent**: one aggregate per canonical view direction. Each
//!   point contributes with weight `max(0, dot(normal, -direction))`, so
//!   points facing away from a direction do not affect it.

use glam::{DVec3, Vec3};

use crate::encoding::{Color16, PolarNormal};
use crate::types::Point;

/// Canonical view directions, in aggregate order.
pub const VIEW_DIRECTIONS: [Vec3; 6] = [
  Vec3::X,     // +X
  Vec3::NEG_X, // -X
  Vec3::Y,     // +Y
  Vec3::NEG_Y, // -Y
  Vec3::Z,     // +Z
  Vec3::NEG_Z, // -Z
];

/// Aggregation mode used when building a tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppearanceMode {
  /// Single mean color per node.
  Isotropic,
  /// Six visibility-weighted normal/color aggregates per node.
  #[default]
  ViewDependent,
}

/// Weighted normal and color seen from one canonical direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionalAppearance {
  pub normal: PolarNormal,
  pub color: Color16,
}

impl DirectionalAppearance {
  /// No point faces this direction.
  pub const EMPTY: Self = Self {
    normal: PolarNormal::EMPTY,
    color: Color16::BLACK,
  };

  /// True when no point contributed to this direction.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.normal.is_empty()
  }
}

/// Aggregated appearance of an octree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeAppearance {
  Isotropic { color: [u8; 3] },
  ViewDependent([DirectionalAppearance; 6]),
}

impl NodeAppearance {
  /// Aggregate a non-empty point set.
  pub fn aggregate(points: &[Point], mode: AppearanceMode) -> Self {
    debug_assert!(!points.is_empty(), "cannot aggregate an empty point set");
    match mode {
      AppearanceMode::Isotropic => Self::Isotropic {
        color: mean_color(points),
      },
      AppearanceMode::ViewDependent => Self::ViewDependent(directional_aggregates(points)),
    }
  }

  /// Packed 16-bit color for isotropic nodes.
  pub fn packed_color(&self) -> Option<Color16> {
    match self {
      Self::Isotropic { color } => Some(Color16::from_rgb(*color)),
      Self::ViewDependent(_) => None,
    }
  }

  /// Approximate color when looking along `view_dir`.
  ///
  /// Directional aggregates are blended with weight `max(0, dot(d, view_dir))`.
  /// Empty directions never contribute. Returns `None` when nothing does.
  pub fn color_towards(&self, view_dir: Vec3) -> Option<[u8; 3]> {
    let directions = match self {
      Self::Isotropic { color } => return Some(*color),
      Self::ViewDependent(directions) => directions,
    };

    let view_dir = view_dir.normalize_or_zero();
    let mut weight_sum = 0.0f32;
    let mut color_sum = Vec3::ZERO;

    for (aggregate, direction) in directions.iter().zip(VIEW_DIRECTIONS) {
      if aggregate.is_empty() {
        continue;
      }
      let weight = direction.dot(view_dir).max(0.0);
      if weight <= 0.0 {
        continue;
      }
      let [r, g, b] = aggregate.color.to_rgb();
      color_sum += weight * Vec3::new(r as f32, g as f32, b as f32);
      weight_sum += weight;
    }

    if weight_sum <= 0.0 {
      return None;
    }
    Some(to_rgb8(color_sum / weight_sum))
  }
}

/// Arithmetic mean of the point colors, `round(sum(c / n))` per channel.
pub fn mean_color(points: &[Point]) -> [u8; 3] {
  let factor = points.len() as f64;
  let mut sum = DVec3::ZERO;
  for point in points {
    sum += DVec3::new(
      point.color[0] as f64,
      point.color[1] as f64,
      point.color[2] as f64,
    ) / factor;
  }
  [
    round_channel(sum.x),
    round_channel(sum.y),
    round_channel(sum.z),
  ]
}

/// Visibility-weighted normal and color for each canonical direction.
pub fn directional_aggregates(points: &[Point]) -> [DirectionalAppearance; 6] {
  let mut weights = [0.0f64; 6];
  let mut normals = [DVec3::ZERO; 6];
  let mut colors = [DVec3::ZERO; 6];

  for point in points {
    let normal = point.normal.normalize_or_zero();
    if normal == Vec3::ZERO {
      continue;
    }
    let normal_d = normal.as_dvec3();
    let color_d = DVec3::new(
      point.color[0] as f64,
      point.color[1] as f64,
      point.color[2] as f64,
    );

    for (i, direction) in VIEW_DIRECTIONS.iter().enumerate() {
      let w = normal.dot(-*direction).max(0.0) as f64;
      if w <= 0.0 {
        continue;
      }
      weights[i] += w;
      normals[i] += w * normal_d;
      colors[i] += w * color_d;
    }
  }

  let mut out = [DirectionalAppearance::EMPTY; 6];
  for i in 0..6 {
    if weights[i] <= 0.0 {
      continue;
    }
    let normal = (normals[i] / weights[i]).as_vec3();
    let color = colors[i] / weights[i];
    out[i] = DirectionalAppearance {
      normal: PolarNormal::encode(normal),
      color: Color16::from_rgb([
        round_channel(color.x),
        round_channel(color.y),
        round_channel(color.z),
      ]),
    };
  }
  out
}

#[inline]
fn round_channel(value: f64) -> u8 {
  value.round().clamp(0.0, 255.0) as u8
}

#[inline]
fn to_rgb8(color: Vec3) -> [u8; 3] {
  [
    color.x.round().clamp(0.0, 255.0) as u8,
    color.y.round().clamp(0.0, 255.0) as u8,
    color.z.round().clamp(0.0, 255.0) as u8,
  ]
}

#[cfg(test)]
#[path = "appearance_test.rs"]
mod appearance_test;
