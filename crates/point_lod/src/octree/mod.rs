//! Octree module for LOD splat selection.
//!
//! An explicit, sparse octree built once over a static point cloud and then
//! queried every frame.
//!
//! # Size Convention
//!
//! `size` is always the cube edge length. Each child has half its parent's
//! edge and sits a quarter edge away from the parent center on every axis.
//!
//! ```text
//! child.size   = parent.size / 2
//! child.center = parent.center ± parent.size / 4   (per axis, by octant bit)
//! ```
//!
//! # Module Structure
//!
//! - [`node`]: `OctreeNode`, `NodeId` and octant math
//! - [`appearance`]: isotropic / view-dependent aggregation
//! - [`config`]: `OctreeConfig` and `TerminationPolicy`
//! - [`bounds`]: root cube fitting
//! - [`build`]: iterative and parallel construction
//! - [`tree`]: `Octree` wrapper
//! - [`traversal`]: distance-driven and fixed-level queries

pub mod appearance;
pub mod bounds;
pub mod build;
pub mod config;
pub mod node;
pub mod stats;
pub mod traversal;
pub mod tree;

// Re-exports
pub use appearance::{AppearanceMode, DirectionalAppearance, NodeAppearance, VIEW_DIRECTIONS};
pub use bounds::Aabb3;
pub use config::{OctreeConfig, TerminationPolicy};
pub use node::{NodeId, OctreeNode};
pub use stats::OctreeStats;
pub use traversal::{world_size_threshold, LodQuery};
pub use tree::Octree;
