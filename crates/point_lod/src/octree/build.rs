//! Octree construction.
//!
//! Each node aggregates its points, splits them into 8 octant buckets around
//! its center, and creates one child per non-empty bucket:
//!
//! ```text
//!   parent (center c, edge s)
//!     bucket i  = points with (x > c.x, y > c.y, z > c.z) == bits of i
//!     child i   = center c ± s/4 per axis, edge s/2
//! ```
//!
//! The sequential builder uses an explicit work stack, so skewed clouds cannot
//! overflow the call stack. Nodes are emitted in depth-first pre-order with
//! children in octant order.
//!
//! With `OctreeConfig::parallel`, large nodes build their child subtrees on the
//! rayon pool into separate arenas which are then spliced behind the parent.
//! Splicing preserves pre-order, so the result is identical to a sequential
//! build.

use glam::Vec3;
use rayon::prelude::*;

use super::node::{child_center, octant_of};
use super::{NodeAppearance, NodeId, OctreeConfig, OctreeNode};
use crate::types::Point;

/// Pending node in the sequential work stack.
struct BuildTask {
  points: Vec<Point>,
  center: Vec3,
  size: f32,
  depth: u32,
  /// Parent id and the octant slot this node fills.
  parent: Option<(NodeId, usize)>,
}

/// Split points into octant buckets around `center`.
pub fn partition(points: &[Point], center: Vec3) -> [Vec<Point>; 8] {
  let mut buckets: [Vec<Point>; 8] = Default::default();
  for point in points {
    buckets[octant_of(point.position, center)].push(*point);
  }
  buckets
}

/// Build a subtree rooted at `center`/`size`. The returned arena has its root
/// at index 0 with no parent.
pub fn build_nodes(
  points: Vec<Point>,
  center: Vec3,
  size: f32,
  depth: u32,
  config: &OctreeConfig,
) -> Vec<OctreeNode> {
  debug_assert!(!points.is_empty(), "octree node built from an empty point set");

  if config.fork_children(points.len()) && config.termination.should_subdivide(size, depth) {
    build_forked(points, center, size, depth, config)
  } else {
    build_sequential(points, center, size, depth, config)
  }
}

/// Create one node and, if it subdivides, its child buckets.
fn make_node(
  points: &[Point],
  center: Vec3,
  size: f32,
  depth: u32,
  parent: Option<NodeId>,
  config: &OctreeConfig,
) -> (OctreeNode, Option<[Vec<Point>; 8]>) {
  let appearance = NodeAppearance::aggregate(points, config.appearance);

  if config.termination.should_subdivide(size, depth) {
    let node = OctreeNode::new(center, size, appearance, depth, points.len(), parent);
    (node, Some(partition(points, center)))
  } else {
    let size = config.termination.terminal_size(size);
    (OctreeNode::new(center, size, appearance, depth, points.len(), parent), None)
  }
}

fn build_sequential(
  points: Vec<Point>,
  center: Vec3,
  size: f32,
  depth: u32,
  config: &OctreeConfig,
) -> Vec<OctreeNode> {
  let mut nodes: Vec<OctreeNode> = Vec::new();
  let mut stack = vec![BuildTask {
    points,
    center,
    size,
    depth,
    parent: None,
  }];

  while let Some(task) = stack.pop() {
    let id = NodeId::from_index(nodes.len());
    let parent_id = task.parent.map(|(parent, _)| parent);
    let (node, buckets) = make_node(
      &task.points,
      task.center,
      task.size,
      task.depth,
      parent_id,
      config,
    );
    drop(task.points);

    if let Some((parent, octant)) = task.parent {
      nodes[parent.index()].children[octant] = Some(id);
    }
    nodes.push(node);

    let Some(buckets) = buckets else {
      continue;
    };

    // Reverse push so octant 0 is popped (and numbered) first.
    for (octant, bucket) in buckets.into_iter().enumerate().rev() {
      if bucket.is_empty() {
        continue;
      }
      stack.push(BuildTask {
        points: bucket,
        center: child_center(task.center, task.size, octant),
        size: 0.5 * task.size,
        depth: task.depth + 1,
        parent: Some((id, octant)),
      });
    }
  }

  nodes
}

fn build_forked(
  points: Vec<Point>,
  center: Vec3,
  size: f32,
  depth: u32,
  config: &OctreeConfig,
) -> Vec<OctreeNode> {
  let (root, buckets) = make_node(&points, center, size, depth, None, config);
  drop(points);

  let Some(buckets) = buckets else {
    return vec![root];
  };

  tracing::trace!(depth, "forking child subtrees");

  let subtrees: Vec<(usize, Vec<OctreeNode>)> = Vec::from(buckets)
    .into_par_iter()
    .enumerate()
    .filter(|(_, bucket)| !bucket.is_empty())
    .map(|(octant, bucket)| {
      let subtree = build_nodes(
        bucket,
        child_center(center, size, octant),
        0.5 * size,
        depth + 1,
        config,
      );
      (octant, subtree)
    })
    .collect();

  let total = 1 + subtrees.iter().map(|(_, s)| s.len()).sum::<usize>();
  let mut nodes = Vec::with_capacity(total);
  nodes.push(root);

  for (octant, subtree) in subtrees {
    let offset = nodes.len();
    nodes[0].children[octant] = Some(NodeId::from_index(offset));
    nodes.extend(subtree.into_iter().map(|node| rebase(node, offset)));
  }

  nodes
}

/// Shift a spliced node's links by `offset`. A subtree root gets the splice
/// target's root as parent.
fn rebase(mut node: OctreeNode, offset: usize) -> OctreeNode {
  node.parent = Some(node.parent.map_or(NodeId::ROOT, |p| p.offset(offset)));
  for child in node.children.iter_mut().flatten() {
    *child = child.offset(offset);
  }
  node
}

#[cfg(test)]
#[path = "build_test.rs"]
mod build_test;
