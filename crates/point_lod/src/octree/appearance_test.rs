use super::*;

fn point(normal: Vec3, color: [u8; 3]) -> Point {
  Point::new(Vec3::ZERO, normal, color)
}

// =========================================================================
// Isotropic aggregation
// =========================================================================

#[test]
fn test_mean_color_single_point() {
  let points = [point(Vec3::ZERO, [10, 20, 30])];
  assert_eq!(mean_color(&points), [10, 20, 30]);
}

/// Plain arithmetic mean, rounded to nearest.
#[test]
fn test_mean_color_rounds_to_nearest() {
  let points = [
    point(Vec3::ZERO, [0, 255, 1]),
    point(Vec3::ZERO, [1, 0, 2]),
  ];
  // [0.5, 127.5, 1.5] -> round half away from zero
  assert_eq!(mean_color(&points), [1, 128, 2]);
}

#[test]
fn test_mean_color_is_unweighted() {
  // Normals must not affect the isotropic mean.
  let points = [
    point(Vec3::X * 100.0, [0, 0, 0]),
    point(Vec3::ZERO, [90, 90, 90]),
    point(Vec3::NEG_Y, [30, 30, 30]),
  ];
  assert_eq!(mean_color(&points), [40, 40, 40]);
}

#[test]
fn test_aggregate_isotropic_mode() {
  let points = [point(Vec3::Z, [200, 100, 50])];
  let appearance = NodeAppearance::aggregate(&points, AppearanceMode::Isotropic);
  assert_eq!(appearance, NodeAppearance::Isotropic { color: [200, 100, 50] });
  assert_eq!(
    appearance.packed_color(),
    Some(Color16::from_rgb([200, 100, 50]))
  );
}

// =========================================================================
// View-dependent aggregation
// =========================================================================

/// A +Z facing point is visible only when looking along -Z.
#[test]
fn test_directional_single_facing_point() {
  let points = [point(Vec3::Z, [255, 0, 0])];
  let aggregates = directional_aggregates(&points);

  for (i, aggregate) in aggregates.iter().enumerate() {
    if VIEW_DIRECTIONS[i] == Vec3::NEG_Z {
      assert!(!aggregate.is_empty());
      assert_eq!(aggregate.color.to_rgb(), [255, 0, 0]);
      let n = aggregate.normal.decode();
      assert!((n - Vec3::Z).length() < 0.01, "normal {:?}", n);
    } else {
      assert!(aggregate.is_empty(), "direction {} should be empty", i);
      assert_eq!(*aggregate, DirectionalAppearance::EMPTY);
    }
  }
}

/// Points without normals contribute nowhere.
#[test]
fn test_directional_zero_normals_are_empty() {
  let points = [
    point(Vec3::ZERO, [1, 2, 3]),
    point(Vec3::ZERO, [4, 5, 6]),
  ];
  let aggregates = directional_aggregates(&points);
  assert!(aggregates.iter().all(DirectionalAppearance::is_empty));
}

/// Weighting favours points that face the direction head-on.
#[test]
fn test_directional_weighting() {
  let oblique = Vec3::new(1.0, 0.0, 1.0).normalize();
  let points = [
    point(Vec3::Z, [200, 200, 200]),
    point(oblique, [0, 0, 0]),
  ];
  let aggregates = directional_aggregates(&points);

  // Looking along -Z: weights 1.0 and ~0.707.
  let neg_z = aggregates[5];
  let expected = (200.0 * 1.0 / (1.0 + std::f64::consts::FRAC_1_SQRT_2)).round() as u8;
  let [r, _, _] = neg_z.color.to_rgb();
  assert!(
    (r as i32 - expected as i32).abs() <= 5,
    "red {} vs expected {}",
    r,
    expected
  );

  // Looking along -X only the oblique point is visible.
  let neg_x = aggregates[1];
  assert!(!neg_x.is_empty());
  assert_eq!(neg_x.color.to_rgb(), [0, 0, 0]);
  let n = neg_x.normal.decode();
  assert!(n.dot(oblique) > 0.999, "normal {:?}", n);
}

/// Non-unit normals are normalized before weighting.
#[test]
fn test_directional_normalizes_input() {
  let a = directional_aggregates(&[point(Vec3::Z * 10.0, [50, 60, 70])]);
  let b = directional_aggregates(&[point(Vec3::Z, [50, 60, 70])]);
  assert_eq!(a, b);
}

// =========================================================================
// Consumer blending
// =========================================================================

#[test]
fn test_color_towards_isotropic() {
  let appearance = NodeAppearance::Isotropic { color: [1, 2, 3] };
  assert_eq!(appearance.color_towards(Vec3::X), Some([1, 2, 3]));
}

#[test]
fn test_color_towards_skips_empty_directions() {
  let points = [point(Vec3::Z, [255, 255, 255])];
  let appearance = NodeAppearance::aggregate(&points, AppearanceMode::ViewDependent);

  // Looking down onto the +Z face.
  assert_eq!(appearance.color_towards(Vec3::NEG_Z), Some([255, 255, 255]));

  // Looking from below: the only populated direction points away.
  assert_eq!(appearance.color_towards(Vec3::Z), None);
}

#[test]
fn test_color_towards_blends_visible_directions() {
  let points = [
    point(Vec3::Z, [255, 0, 0]),
    point(Vec3::X, [0, 0, 255]),
  ];
  let appearance = NodeAppearance::aggregate(&points, AppearanceMode::ViewDependent);
  let view = Vec3::new(-1.0, 0.0, -1.0);

  let [r, _, b] = appearance.color_towards(view).expect("both faces visible");
  assert!((r as i32 - 128).abs() <= 2, "red {}", r);
  assert!((b as i32 - 128).abs() <= 2, "blue {}", b);
  assert_eq!(appearance.packed_color(), None);
}
