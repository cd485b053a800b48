//! Build statistics for a finished octree.

use super::OctreeNode;

/// Shape of a built octree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OctreeStats {
	/// Number of input points.
	pub point_count: usize,
	/// Total nodes in the arena.
	pub node_count: usize,
	/// Nodes without children.
	pub leaf_count: usize,
	/// Deepest node depth (root = 0).
	pub max_depth: u32,
	/// Wall-clock build time in microseconds.
	pub build_us: u64,
}

impl OctreeStats {
	/// Collect counts from an arena.
	pub fn collect(nodes: &[OctreeNode], point_count: usize, build_us: u64) -> Self {
		let mut stats = Self {
			point_count,
			node_count: nodes.len(),
			build_us,
			..Default::default()
		};
		for node in nodes {
			if node.is_leaf() {
				stats.leaf_count += 1;
			}
			stats.max_depth = stats.max_depth.max(node.depth);
		}
		stats
	}

	/// Nodes with at least one child.
	#[inline]
	pub fn interior_count(&self) -> usize {
		self.node_count - self.leaf_count
	}

	/// Number of distinct levels (max depth + 1), 0 for an empty arena.
	#[inline]
	pub fn level_count(&self) -> u32 {
		if self.node_count == 0 {
			0
		} else {
			self.max_depth + 1
		}
	}
}
