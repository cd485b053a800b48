//! Off-thread octree construction.
//!
//! Large clouds take long enough to build that callers on a frame loop hand
//! the work to rayon and poll for the finished tree.

pub mod async_build;

pub use async_build::{AsyncOctreeBuilder, BuildResult};
