//! OctreeConfig - construction settings for the LOD octree.

use super::AppearanceMode;
use crate::error::OctreeError;

/// Default subdivision depth for `TerminationPolicy::MaxDepth`.
pub const DEFAULT_MAX_DEPTH: u32 = 8;

/// Nodes with at least this many points build their children in parallel.
pub const DEFAULT_PARALLEL_MIN_POINTS: usize = 16_384;

/// When a node stops subdividing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TerminationPolicy {
  /// Subdivide while the node depth is below the limit, regardless of size.
  /// `MaxDepth(0)` builds a single root node.
  MaxDepth(u32),

  /// Subdivide while the node edge length exceeds the minimum.
  /// Nodes that stop are clamped to exactly this size.
  MinSize(f32),
}

impl TerminationPolicy {
  /// Should a node with this size and depth get children?
  #[inline]
  pub fn should_subdivide(&self, size: f32, depth: u32) -> bool {
    match *self {
      Self::MaxDepth(max_depth) => depth < max_depth,
      Self::MinSize(min_size) => size > min_size,
    }
  }

  /// Size stored on a node that does not subdivide.
  #[inline]
  pub fn terminal_size(&self, size: f32) -> f32 {
    match *self {
      Self::MaxDepth(_) => size,
      Self::MinSize(min_size) => size.max(min_size),
    }
  }
}

impl Default for TerminationPolicy {
  fn default() -> Self {
    Self::MaxDepth(DEFAULT_MAX_DEPTH)
  }
}

/// Configuration for octree construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctreeConfig {
  /// Subdivision stop rule.
  pub termination: TerminationPolicy,

  /// How node appearance is aggregated.
  pub appearance: AppearanceMode,

  /// Build independent subtrees on the rayon pool.
  pub parallel: bool,

  /// Minimum point count for a node to fork its children in parallel.
  pub parallel_min_points: usize,
}

impl OctreeConfig {
  /// Fixed-depth tree with view-dependent appearance.
  pub fn max_depth(depth: u32) -> Self {
    Self {
      termination: TerminationPolicy::MaxDepth(depth),
      ..Default::default()
    }
  }

  /// Size-thresholded tree with isotropic colors.
  pub fn min_size(min_size: f32) -> Self {
    Self {
      termination: TerminationPolicy::MinSize(min_size),
      appearance: AppearanceMode::Isotropic,
      ..Default::default()
    }
  }

  /// Replace the appearance mode.
  pub fn with_appearance(mut self, appearance: AppearanceMode) -> Self {
    self.appearance = appearance;
    self
  }

  /// Enable or disable parallel construction.
  pub fn with_parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }

  /// Check settings that would otherwise prevent termination.
  pub fn validate(&self) -> Result<(), OctreeError> {
    if let TerminationPolicy::MinSize(min_size) = self.termination {
      if !(min_size.is_finite() && min_size > 0.0) {
        return Err(OctreeError::InvalidMinNodeSize(min_size));
      }
    }
    Ok(())
  }

  /// Whether a node holding `point_count` points should fork its children.
  #[inline]
  pub fn fork_children(&self, point_count: usize) -> bool {
    self.parallel && point_count >= self.parallel_min_points.max(1)
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self {
      termination: TerminationPolicy::default(),
      appearance: AppearanceMode::default(),
      parallel: false,
      parallel_min_points: DEFAULT_PARALLEL_MIN_POINTS,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
