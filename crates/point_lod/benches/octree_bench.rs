//! Octree build and query benchmarks.
//!
//! Workloads use a synthetic sphere shell with outward normals, the closest
//! cheap stand-in for a scanned surface.

use std::f32::consts::FRAC_PI_3;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glam::Vec3;
use point_lod::{AppearanceMode, Color16, LodQuery, Octree, OctreeConfig, Point, PolarNormal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Points on a sphere shell with outward normals and random colors.
fn sphere_shell(count: usize, radius: f32, seed: u64) -> Vec<Point> {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut points = Vec::with_capacity(count);
  while points.len() < count {
    let v = Vec3::new(
      rng.random_range(-1.0..1.0),
      rng.random_range(-1.0..1.0),
      rng.random_range(-1.0..1.0),
    );
    let len = v.length();
    if !(0.01..=1.0).contains(&len) {
      continue;
    }
    let normal = v / len;
    points.push(Point::new(normal * radius, normal, rng.random()));
  }
  points
}

// =============================================================================
// Build
// =============================================================================

fn bench_build(c: &mut Criterion) {
  let mut group = c.benchmark_group("octree_build");
  group.sample_size(20);

  for count in [10_000usize, 100_000] {
    let points = sphere_shell(count, 10.0, 1);
    group.throughput(Throughput::Elements(count as u64));

    let configs = [
      ("sequential", OctreeConfig::max_depth(8)),
      ("parallel", OctreeConfig::max_depth(8).with_parallel(true)),
      (
        "isotropic",
        OctreeConfig::max_depth(8).with_appearance(AppearanceMode::Isotropic),
      ),
    ];

    for (name, config) in configs {
      group.bench_with_input(BenchmarkId::new(name, count), &points, |b, points| {
        b.iter(|| Octree::build(black_box(points.clone()), config))
      });
    }
  }

  group.finish();
}

// =============================================================================
// Queries
// =============================================================================

fn bench_queries(c: &mut Criterion) {
  let octree = match Octree::build(sphere_shell(200_000, 10.0, 2), OctreeConfig::max_depth(10)) {
    Ok(octree) => octree,
    Err(err) => panic!("bench cloud rejected: {err}"),
  };

  let mut group = c.benchmark_group("octree_query");

  for distance in [15.0f32, 40.0, 200.0] {
    let query = LodQuery::new(Vec3::new(0.0, 0.0, distance), 0.002, FRAC_PI_3);
    let mut out = Vec::new();
    group.bench_with_input(BenchmarkId::new("by_distance", distance), &query, |b, query| {
      b.iter(|| {
        out.clear();
        octree.query_by_distance_into(black_box(query), &mut out);
        black_box(out.len())
      })
    });
  }

  for level in [2u32, 5, 8] {
    let mut out = Vec::new();
    group.bench_with_input(BenchmarkId::new("at_level", level), &level, |b, &level| {
      b.iter(|| {
        out.clear();
        octree.query_at_level_into(black_box(level), &mut out);
        black_box(out.len())
      })
    });
  }

  group.finish();
}

// =============================================================================
// Encoding
// =============================================================================

fn bench_encoding(c: &mut Criterion) {
  let points = sphere_shell(4096, 1.0, 3);
  let mut group = c.benchmark_group("encoding");
  group.throughput(Throughput::Elements(points.len() as u64));

  group.bench_function("polar_normal", |b| {
    b.iter(|| {
      points
        .iter()
        .map(|p| PolarNormal::encode(black_box(p.normal)).to_bits() as u32)
        .sum::<u32>()
    })
  });

  group.bench_function("color16", |b| {
    b.iter(|| {
      points
        .iter()
        .map(|p| Color16::from_rgb(black_box(p.color)).bits() as u32)
        .sum::<u32>()
    })
  });

  group.finish();
}

criterion_group!(benches, bench_build, bench_queries, bench_encoding);
criterion_main!(benches);
