//! Off-thread octree builds.
//!
//! One build at a time runs on the rayon pool; the caller polls once per
//! frame and takes the tree when it is ready.
//!
//! ```ignore
//! let mut builder = AsyncOctreeBuilder::new();
//! builder.start(points, OctreeConfig::default());
//!
//! if let Some(result) = builder.poll() {
//!     let octree = result.octree?;
//! }
//! ```

use crossbeam_channel::{Receiver, TryRecvError};
use web_time::Instant;

use crate::error::OctreeError;
use crate::octree::{Octree, OctreeConfig};
use crate::types::Point;

/// Finished build handed back by [`AsyncOctreeBuilder::poll`].
#[derive(Debug)]
pub struct BuildResult {
	pub octree: Result<Octree, OctreeError>,
	/// Worker wall time in microseconds.
	pub build_us: u64,
}

/// Runs [`Octree::build`] on the rayon pool.
#[derive(Default)]
pub struct AsyncOctreeBuilder {
	pending: Option<Receiver<BuildResult>>,
}

impl AsyncOctreeBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// A build was started and its result not yet taken.
	pub fn is_busy(&self) -> bool {
		self.pending.is_some()
	}

	/// Queue a build. Returns `false` and drops the input while another build
	/// is pending.
	pub fn start(&mut self, points: Vec<Point>, config: OctreeConfig) -> bool {
		if self.is_busy() {
			return false;
		}

		let (sender, receiver) = crossbeam_channel::bounded(1);
		rayon::spawn(move || {
			let _span = tracing::info_span!("pipeline::async_build").entered();
			let start = Instant::now();
			let octree = Octree::build(points, config);
			let build_us = start.elapsed().as_micros() as u64;
			// Fails only after cancel().
			let _ = sender.send(BuildResult { octree, build_us });
		});
		self.pending = Some(receiver);
		true
	}

	/// Take the finished build, if any. Never blocks.
	pub fn poll(&mut self) -> Option<BuildResult> {
		let outcome = self.pending.as_ref()?.try_recv();
		match outcome {
			Err(TryRecvError::Empty) => None,
			Ok(result) => {
				self.pending = None;
				Some(result)
			}
			Err(TryRecvError::Disconnected) => {
				tracing::warn!("octree build worker exited without a result");
				self.pending = None;
				None
			}
		}
	}

	/// Forget the pending build. The worker still runs to completion.
	pub fn cancel(&mut self) {
		if self.pending.take().is_some() {
			tracing::debug!("octree build cancelled");
		}
	}
}
