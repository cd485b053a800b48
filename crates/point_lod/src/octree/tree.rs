//! Octree - owner of the node arena and entry point for builds and queries.

use glam::Vec3;
use smallvec::SmallVec;
use web_time::Instant;

use super::bounds::{max_distance, Aabb3};
use super::build::build_nodes;
use super::traversal::{self, LodQuery};
use super::{NodeId, OctreeConfig, OctreeNode, OctreeStats};
use crate::error::OctreeError;
use crate::types::{NodeVertex, Point};

/// Immutable LOD octree over a static point cloud.
///
/// The root cube is fitted to the bounding box of the input points. Nodes are
/// stored in one arena, so dropping the octree frees the whole tree at once.
#[derive(Clone, Debug)]
pub struct Octree {
  nodes: Vec<OctreeNode>,
  config: OctreeConfig,
  stats: OctreeStats,
}

impl Octree {
  /// Build an octree whose root cube is fitted to the points' bounding box.
  ///
  /// The root center is the box center and the root edge is the longest box
  /// edge.
  #[tracing::instrument(skip_all, name = "octree::build", fields(points = points.len()))]
  pub fn build(points: Vec<Point>, config: OctreeConfig) -> Result<Self, OctreeError> {
    let (center, size) = {
      let _span = tracing::info_span!("bounds").entered();
      let bounds = Aabb3::from_points(&points).inspect_err(|err| {
        tracing::warn!(%err, "rejected point cloud");
      })?;
      bounds.bounding_cube()
    };
    Self::build_with_root(points, center, size, config)
  }

  /// Build an octree around a caller-chosen root center.
  ///
  /// The root edge is the largest distance from `center` to any point.
  #[tracing::instrument(skip_all, name = "octree::build_around", fields(points = points.len()))]
  pub fn build_around(
    points: Vec<Point>,
    center: Vec3,
    config: OctreeConfig,
  ) -> Result<Self, OctreeError> {
    // Validates emptiness and finiteness.
    Aabb3::from_points(&points).inspect_err(|err| {
      tracing::warn!(%err, "rejected point cloud");
    })?;
    let size = max_distance(&points, center);
    Self::build_with_root(points, center, size, config)
  }

  fn build_with_root(
    points: Vec<Point>,
    center: Vec3,
    size: f32,
    config: OctreeConfig,
  ) -> Result<Self, OctreeError> {
    config.validate()?;

    // Finite positions can still overflow the extent (e.g. ±3e38).
    if !(center.is_finite() && size.is_finite()) {
      let err = OctreeError::NonFiniteRoot { center, size };
      tracing::warn!(%err, "rejected point cloud");
      return Err(err);
    }

    let start = Instant::now();
    let point_count = points.len();

    let nodes = {
      let _span = tracing::info_span!("subdivide").entered();
      build_nodes(points, center, size, 0, &config)
    };

    let stats = {
      let _span = tracing::info_span!("stats").entered();
      OctreeStats::collect(&nodes, point_count, start.elapsed().as_micros() as u64)
    };
    tracing::debug!(
      nodes = stats.node_count,
      leaves = stats.leaf_count,
      max_depth = stats.max_depth,
      build_us = stats.build_us,
      "octree built"
    );

    Ok(Self {
      nodes,
      config,
      stats,
    })
  }

  /// Root cube center and edge length.
  #[inline]
  pub fn root_bounds(&self) -> (Vec3, f32) {
    let root = self.root();
    (root.center, root.size)
  }

  /// The root node.
  #[inline]
  pub fn root(&self) -> &OctreeNode {
    &self.nodes[NodeId::ROOT.index()]
  }

  /// Node by id.
  #[inline]
  pub fn node(&self, id: NodeId) -> &OctreeNode {
    &self.nodes[id.index()]
  }

  /// Node by id, or `None` if the id is out of range.
  #[inline]
  pub fn get(&self, id: NodeId) -> Option<&OctreeNode> {
    self.nodes.get(id.index())
  }

  /// Every node in depth-first pre-order.
  #[inline]
  pub fn nodes(&self) -> &[OctreeNode] {
    &self.nodes
  }

  /// Ids of every node, in arena order.
  pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
    (0..self.nodes.len()).map(NodeId::from_index)
  }

  /// Number of nodes.
  #[inline]
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// Always false: a built octree has at least a root.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Present children of a node, in octant order.
  pub fn children(&self, id: NodeId) -> SmallVec<[NodeId; 8]> {
    self.node(id).children.iter().flatten().copied().collect()
  }

  /// Parent of a node.
  #[inline]
  pub fn parent(&self, id: NodeId) -> Option<NodeId> {
    self.node(id).parent
  }

  /// Configuration the tree was built with.
  #[inline]
  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }

  /// Build statistics.
  #[inline]
  pub fn stats(&self) -> &OctreeStats {
    &self.stats
  }

  /// Distance-driven LOD selection. See [`traversal::query_by_distance`].
  #[tracing::instrument(skip_all, name = "octree::query_by_distance")]
  pub fn query_by_distance(&self, query: &LodQuery) -> Vec<NodeVertex> {
    let mut out = Vec::new();
    self.query_by_distance_into(query, &mut out);
    out
  }

  /// Like [`Self::query_by_distance`], appending to a reusable buffer.
  pub fn query_by_distance_into(&self, query: &LodQuery, out: &mut Vec<NodeVertex>) {
    traversal::query_by_distance(&self.nodes, query, out);
  }

  /// Every node exactly `level` edges below the root.
  #[tracing::instrument(skip_all, name = "octree::query_at_level", fields(level = level))]
  pub fn query_at_level(&self, level: u32) -> Vec<NodeVertex> {
    let mut out = Vec::new();
    self.query_at_level_into(level, &mut out);
    out
  }

  /// Like [`Self::query_at_level`], appending to a reusable buffer.
  pub fn query_at_level_into(&self, level: u32, out: &mut Vec<NodeVertex>) {
    traversal::query_at_level(&self.nodes, level, out);
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
