use super::rng::Random;
use super::types::Node;

/// Nodes per square pixel of surface area.
const NODE_DENSITY: f64 = 0.00006;
const MIN_NODES: usize = 18;
const MAX_NODES: usize = 120;

/// A node wraps to the far side once it drifts past this margin outside
/// the surface.
const WRAP_MARGIN: f64 = 10.0;

const DRIFT_SPEED: f64 = 0.18;
const RADIUS_MIN: f64 = 1.0;
const RADIUS_SPAN: f64 = 1.6;
/// Roughly one node in eight renders in the alert palette.
const ALERT_PROBABILITY: f64 = 0.12;

/// Node count for a surface of the given size. Degenerate surfaces still
/// get the minimum population.
pub fn node_count(width: f64, height: f64) -> usize {
	((width * height * NODE_DENSITY).floor() as usize).clamp(MIN_NODES, MAX_NODES)
}

/// The mesh simulation: the node set plus the surface it lives on.
///
/// Sizes are CSS pixels; the device-pixel-ratio scaling of the backing
/// store is the canvas layer's concern, not the simulation's.
pub struct MeshState {
	pub nodes: Vec<Node>,
	pub width: f64,
	pub height: f64,
}

impl MeshState {
	pub fn new(width: f64, height: f64, rng: &mut impl Random) -> Self {
		let mut state = Self {
			nodes: Vec::new(),
			width,
			height,
		};
		state.reseed(rng);
		state
	}

	/// Adopt a new surface size and regenerate every node.
	///
	/// Positions are not meaningful state, so a wholesale reseed on every
	/// call is acceptable and the operation is trivially idempotent.
	pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl Random) {
		self.width = width;
		self.height = height;
		self.reseed(rng);
	}

	fn reseed(&mut self, rng: &mut impl Random) {
		let count = node_count(self.width, self.height);
		self.nodes = (0..count)
			.map(|_| Node {
				x: rng.next_f64() * self.width,
				y: rng.next_f64() * self.height,
				vx: (rng.next_f64() - 0.5) * DRIFT_SPEED,
				vy: (rng.next_f64() - 0.5) * DRIFT_SPEED,
				radius: RADIUS_MIN + rng.next_f64() * RADIUS_SPAN,
				alert: rng.next_f64() < ALERT_PROBABILITY,
			})
			.collect();
	}

	/// Distance under which the proximity pass links two nodes.
	pub fn link_threshold(&self) -> f64 {
		(self.width.min(self.height) * 0.22).clamp(70.0, 130.0)
	}

	/// Drift every node by its velocity. Crossing beyond the wrap margin
	/// jumps the node to the margin on the opposite side (toroidal
	/// topology), keeping edges from popping at the borders.
	pub fn advance(&mut self) {
		for node in &mut self.nodes {
			node.x += node.vx;
			node.y += node.vy;
			if node.x < -WRAP_MARGIN {
				node.x = self.width + WRAP_MARGIN;
			} else if node.x > self.width + WRAP_MARGIN {
				node.x = -WRAP_MARGIN;
			}
			if node.y < -WRAP_MARGIN {
				node.y = self.height + WRAP_MARGIN;
			} else if node.y > self.height + WRAP_MARGIN {
				node.y = -WRAP_MARGIN;
			}
		}
	}
}
