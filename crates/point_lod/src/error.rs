//! Error types for octree construction.

use glam::Vec3;
use thiserror::Error;

/// Reasons an octree cannot be built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OctreeError {
  #[error("cannot build an octree node from an empty point set")]
  EmptyPointSet,

  #[error("point {index} has a non-finite position")]
  NonFinitePosition { index: usize },

  #[error("root cube at {center} with edge {size} is not finite")]
  NonFiniteRoot { center: Vec3, size: f32 },

  #[error("minimum node size must be positive and finite, got {0}")]
  InvalidMinNodeSize(f32),
}
