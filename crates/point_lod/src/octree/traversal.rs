//! LOD traversal over a built octree arena.
//!
//! Both queries walk the tree depth-first with children in octant order, using
//! an explicit stack. They never mutate the tree.

use glam::Vec3;

use super::{NodeId, OctreeNode};
use crate::types::NodeVertex;

/// Per-call camera parameters, in the octree's local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LodQuery {
  /// Camera position in the same space as the point cloud.
  pub camera_position: Vec3,
  /// Target splat size as a fraction of the viewport height.
  pub splat_size: f32,
  /// Vertical field of view in radians.
  pub fov_y: f32,
}

impl LodQuery {
  pub fn new(camera_position: Vec3, splat_size: f32, fov_y: f32) -> Self {
    Self {
      camera_position,
      splat_size,
      fov_y,
    }
  }

  /// World-space threshold for a node centered at `center`.
  #[inline]
  pub fn threshold_at(&self, center: Vec3) -> f32 {
    world_size_threshold(
      self.camera_position.distance(center),
      self.splat_size,
      self.fov_y,
    )
  }
}

/// Size in world units that `splat_size` covers on screen at `distance`.
///
/// `splat_size * 2 * tan(fov_y / 2) * distance`
#[inline]
pub fn world_size_threshold(distance: f32, splat_size: f32, fov_y: f32) -> f32 {
  splat_size * (2.0 * (0.5 * fov_y).tan()) * distance
}

/// Emit every node smaller than its projected splat threshold, or a leaf;
/// otherwise descend into its children.
///
/// An emitted node with zero edge (coincident points) takes the threshold as
/// its size, so it never vanishes. Any positive edge is kept as is.
pub fn query_by_distance(nodes: &[OctreeNode], query: &LodQuery, out: &mut Vec<NodeVertex>) {
  if nodes.is_empty() {
    return;
  }

  let mut stack: Vec<NodeId> = vec![NodeId::ROOT];
  while let Some(id) = stack.pop() {
    let node = &nodes[id.index()];
    let threshold = query.threshold_at(node.center);

    if node.size < threshold || node.is_leaf() {
      let size = if node.size <= 0.0 {
        threshold
      } else {
        node.size
      };
      out.push(node.vertex_with_size(size));
    } else {
      push_children_reversed(node, &mut stack);
    }
  }
}

/// Emit every node exactly `level` edges below the root.
pub fn query_at_level(nodes: &[OctreeNode], level: u32, out: &mut Vec<NodeVertex>) {
  if nodes.is_empty() {
    return;
  }

  let mut stack: Vec<(NodeId, u32)> = vec![(NodeId::ROOT, level)];
  while let Some((id, remaining)) = stack.pop() {
    let node = &nodes[id.index()];

    if remaining == 0 {
      out.push(node.vertex());
      continue;
    }

    stack.extend(
      node
        .children
        .iter()
        .rev()
        .flatten()
        .map(|&child| (child, remaining - 1)),
    );
  }
}

/// Push children so that octant 0 is popped first.
#[inline]
fn push_children_reversed(node: &OctreeNode, stack: &mut Vec<NodeId>) {
  stack.extend(node.children.iter().rev().flatten().copied());
}

#[cfg(test)]
#[path = "traversal_test.rs"]
mod traversal_test;
