//! OctreeNode - one cube-shaped region of an arena-backed octree.
//!
//! Nodes live in a flat `Vec` owned by [`Octree`](super::Octree) and refer to
//! each other through [`NodeId`] indices. Children are owned through their
//! slot in the parent; the parent link is informational only.

use glam::Vec3;

use super::NodeAppearance;
use crate::types::NodeVertex;

/// Index of a node inside its octree arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
  /// The root is always the first node in the arena.
  pub const ROOT: Self = Self(0);

  #[inline]
  pub fn index(self) -> usize {
    self.0 as usize
  }

  #[inline]
  pub(crate) fn from_index(index: usize) -> Self {
    debug_assert!(index <= u32::MAX as usize, "octree arena overflow");
    Self(index as u32)
  }

  #[inline]
  pub(crate) fn offset(self, by: usize) -> Self {
    Self::from_index(self.index() + by)
  }
}

/// Octant index for a position relative to a cube center.
///
/// - bit 0: `x > center.x`
/// - bit 1: `y > center.y`
/// - bit 2: `z > center.z`
///
/// Coordinates equal to the center fall into the lower half.
#[inline]
pub fn octant_of(position: Vec3, center: Vec3) -> usize {
  (position.x > center.x) as usize
    | ((position.y > center.y) as usize) << 1
    | ((position.z > center.z) as usize) << 2
}

/// Center of child `octant` for a parent cube of edge length `size`.
///
/// Offset is a quarter of the parent edge on each axis, giving a child cube of
/// half the parent edge.
#[inline]
pub fn child_center(center: Vec3, size: f32, octant: usize) -> Vec3 {
  let q = 0.25 * size;
  let sign = |bit: usize| if octant & bit != 0 { q } else { -q };
  center + Vec3::new(sign(1), sign(2), sign(4))
}

/// A single octree node.
#[derive(Clone, Debug, PartialEq)]
pub struct OctreeNode {
  /// Center of the bounding cube.
  pub center: Vec3,
  /// Edge length of the bounding cube (not the half-extent).
  pub size: f32,
  /// Aggregate over every point inside this node.
  pub appearance: NodeAppearance,
  /// Number of edges from the root.
  pub depth: u32,
  /// Number of input points inside this node.
  pub point_count: usize,
  pub(crate) children: [Option<NodeId>; 8],
  pub(crate) parent: Option<NodeId>,
}

impl OctreeNode {
  pub(crate) fn new(
    center: Vec3,
    size: f32,
    appearance: NodeAppearance,
    depth: u32,
    point_count: usize,
    parent: Option<NodeId>,
  ) -> Self {
    Self {
      center,
      size,
      appearance,
      depth,
      point_count,
      children: [None; 8],
      parent,
    }
  }

  /// Child in `octant`, if that octant held any points.
  #[inline]
  pub fn child(&self, octant: usize) -> Option<NodeId> {
    self.children[octant]
  }

  /// All child slots in octant order.
  #[inline]
  pub fn children(&self) -> &[Option<NodeId>; 8] {
    &self.children
  }

  /// Parent node. `None` for the root.
  #[inline]
  pub fn parent(&self) -> Option<NodeId> {
    self.parent
  }

  /// Number of present children.
  #[inline]
  pub fn child_count(&self) -> usize {
    self.children.iter().filter(|c| c.is_some()).count()
  }

  /// A node without children.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.children.iter().all(Option::is_none)
  }

  /// Bit `i` set when child `i` exists.
  #[inline]
  pub fn children_mask(&self) -> u8 {
    self
      .children
      .iter()
      .enumerate()
      .fold(0u8, |mask, (i, c)| if c.is_some() { mask | 1 << i } else { mask })
  }

  /// Vertex for this node with its stored size.
  #[inline]
  pub fn vertex(&self) -> NodeVertex {
    self.vertex_with_size(self.size)
  }

  #[inline]
  pub(crate) fn vertex_with_size(&self, size: f32) -> NodeVertex {
    NodeVertex {
      position: self.center,
      size,
      appearance: self.appearance,
      children_mask: self.children_mask(),
    }
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
