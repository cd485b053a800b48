//! point_lod - Octree level-of-detail index for static point clouds
//!
//! Builds a sparse octree over a point cloud once, then selects per frame the
//! set of nodes whose projected size matches a target on-screen splat size.
//! Every node carries an aggregated appearance, so a coarse node can be drawn
//! in place of all the points below it.
//!
//! # Features
//!
//! - **Sparse octree**: only non-empty octants get children, stored in a
//!   single arena in depth-first pre-order
//! - **Two termination policies**: fixed maximum depth or minimum node edge
//! - **View-dependent appearance**: six directional color/normal aggregates
//!   per node, packed into 16-bit colors and polar-encoded normals
//! - **Distance-driven selection**: camera-relative splat-size thresholds
//! - **Parallel and async builds**: subtree construction on rayon, with a
//!   pollable off-thread builder
//!
//! # Example
//!
//! ```ignore
//! use point_lod::{LodQuery, Octree, OctreeConfig, Point};
//!
//! let octree = Octree::build(points, OctreeConfig::max_depth(8))?;
//!
//! // Per frame
//! let query = LodQuery::new(camera_position, 0.002, fov_y);
//! let splats = octree.query_by_distance(&query);
//! ```

pub mod encoding;
pub mod error;
pub mod types;

pub use encoding::{Color16, PolarNormal};
pub use error::OctreeError;
pub use types::{NodeVertex, Point};

// Octree construction and queries
pub mod octree;
pub use octree::{
  AppearanceMode, LodQuery, NodeAppearance, NodeId, Octree, OctreeConfig, OctreeNode, OctreeStats,
  TerminationPolicy,
};

// Off-thread builds
pub mod pipeline;
pub use pipeline::{AsyncOctreeBuilder, BuildResult};

// Test utilities
#[cfg(test)]
pub mod test_utils;
