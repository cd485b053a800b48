//! Axis-aligned bounds of a point set and the root cube derived from them.

use glam::Vec3;

use crate::error::OctreeError;
use crate::types::Point;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
	/// Minimum corner (inclusive).
	pub min: Vec3,
	/// Maximum corner (inclusive).
	pub max: Vec3,
}

impl Aabb3 {
	/// Create a new AABB from min and max corners.
	///
	/// # Panics
	/// Debug-asserts that min <= max on all axes.
	pub fn new(min: Vec3, max: Vec3) -> Self {
		debug_assert!(
			min.x <= max.x && min.y <= max.y && min.z <= max.z,
			"AABB min must be <= max on all axes"
		);
		Self { min, max }
	}

	/// Tight bounds around every point position.
	///
	/// Fails on an empty slice or on any non-finite position.
	pub fn from_points(points: &[Point]) -> Result<Self, OctreeError> {
		let first = points.first().ok_or(OctreeError::EmptyPointSet)?;
		let mut min = first.position;
		let mut max = first.position;

		for (index, point) in points.iter().enumerate() {
			if !point.position.is_finite() {
				return Err(OctreeError::NonFinitePosition { index });
			}
			min = min.min(point.position);
			max = max.max(point.position);
		}

		Ok(Self { min, max })
	}

	/// Check if this AABB contains a point.
	#[inline]
	pub fn contains_point(&self, point: Vec3) -> bool {
		point.x >= self.min.x
			&& point.x <= self.max.x
			&& point.y >= self.min.y
			&& point.y <= self.max.y
			&& point.z >= self.min.z
			&& point.z <= self.max.z
	}

	/// Get the size of the AABB (max - min).
	#[inline]
	pub fn size(&self) -> Vec3 {
		self.max - self.min
	}

	/// Get the center of the AABB.
	#[inline]
	pub fn center(&self) -> Vec3 {
		self.min + 0.5 * self.size()
	}

	/// Root cube: box center and the longest box edge.
	#[inline]
	pub fn bounding_cube(&self) -> (Vec3, f32) {
		(self.center(), self.size().max_element())
	}
}

/// Largest Euclidean distance from `center` to any point.
///
/// Used as the root size when the caller fixes the root center.
pub fn max_distance(points: &[Point], center: Vec3) -> f32 {
	points
		.iter()
		.map(|p| p.position.distance(center))
		.fold(0.0f32, f32::max)
}
