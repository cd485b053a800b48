//! Core data types shared by the octree builder and its queries.

use glam::Vec3;

use crate::octree::NodeAppearance;

/// Input point, as supplied by the point cloud loader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
  /// Position in the cloud's local space.
  pub position: Vec3,

  /// Surface normal. May be the zero vector when the source has no normals.
  pub normal: Vec3,

  /// 8-bit RGB color.
  pub color: [u8; 3],
}

impl Point {
  /// Create a point with a normal.
  pub fn new(position: Vec3, normal: Vec3, color: [u8; 3]) -> Self {
    Self {
      position,
      normal,
      color,
    }
  }

  /// Create a point without normal data.
  pub fn without_normal(position: Vec3, color: [u8; 3]) -> Self {
    Self::new(position, Vec3::ZERO, color)
  }
}

/// One splat emitted by a traversal, ready for upload to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeVertex {
  /// Center of the node's bounding cube.
  pub position: Vec3,

  /// Edge length of the splat in the same space as `position`.
  pub size: f32,

  /// Aggregated node appearance.
  pub appearance: NodeAppearance,

  /// Bit `i` is set when child octant `i` exists.
  pub children_mask: u8,
}
