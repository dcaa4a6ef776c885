use super::mst;
use super::state::MeshState;
use super::types::Node;

/// Solid color, alpha supplied per drawing call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const MESH_GREEN: Rgb = Rgb(67, 255, 136);
pub const ALERT_RED: Rgb = Rgb(255, 107, 107);

const LINK_ALPHA: f64 = 0.18;
const LINK_ALPHA_ALERT: f64 = 0.22;
const BACKBONE_ALPHA: f64 = 0.26;
const GLOW_ALPHA: f64 = 0.55;
const DOT_ALPHA: f64 = 0.9;
const DOT_ALPHA_ALERT: f64 = 0.95;
const GLOW_SCALE: f64 = 3.0;

/// Whether the frame loop keeps scheduling itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
	Animated,
	/// Reduced-motion preference: draw one snapshot and stop.
	Static,
}

/// The 2D drawing primitives the mesh needs from its host surface.
/// The wasm implementation wraps a canvas context; tests record calls.
pub trait Surface {
	fn clear(&mut self, width: f64, height: f64);
	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb, alpha: f64);
	fn disc(&mut self, center: (f64, f64), radius: f64, color: Rgb, alpha: f64);
}

/// Render one frame and, when animating, drift the nodes toward the next
/// one. Returns whether another frame should be scheduled.
pub fn run_frame(state: &mut MeshState, surface: &mut impl Surface, motion: Motion) -> bool {
	draw_frame(state, surface);
	match motion {
		Motion::Animated => {
			state.advance();
			true
		}
		Motion::Static => false,
	}
}

fn draw_frame(state: &MeshState, surface: &mut impl Surface) {
	surface.clear(state.width, state.height);
	draw_links(state, surface);
	draw_backbone(state, surface);
	draw_dots(state, surface);
}

fn edge_style(a: &Node, b: &Node) -> (Rgb, f64) {
	if a.alert || b.alert {
		(ALERT_RED, LINK_ALPHA_ALERT)
	} else {
		(MESH_GREEN, LINK_ALPHA)
	}
}

/// Proximity pass: link every pair closer than the threshold, the line
/// fading out linearly as the distance approaches it. O(n^2), but the
/// population is capped at 120 nodes.
fn draw_links(state: &MeshState, surface: &mut impl Surface) {
	let threshold = state.link_threshold();
	for i in 0..state.nodes.len() {
		for j in (i + 1)..state.nodes.len() {
			let (a, b) = (&state.nodes[i], &state.nodes[j]);
			let dist = (a.x - b.x).hypot(a.y - b.y);
			if dist < threshold {
				let (color, base) = edge_style(a, b);
				let alpha = base * (1.0 - dist / threshold);
				surface.line((a.x, a.y), (b.x, b.y), color, alpha);
			}
		}
	}
}

/// MST backbone at fixed opacity, keeping the graph visually connected
/// when the proximity pass leaves isolated clusters.
fn draw_backbone(state: &MeshState, surface: &mut impl Surface) {
	for (node, parent) in mst::mst_edges(&state.nodes) {
		let (a, b) = (&state.nodes[node], &state.nodes[parent]);
		let (color, _) = edge_style(a, b);
		surface.line((a.x, a.y), (b.x, b.y), color, BACKBONE_ALPHA);
	}
}

fn draw_dots(state: &MeshState, surface: &mut impl Surface) {
	for node in &state.nodes {
		let color = if node.alert { ALERT_RED } else { MESH_GREEN };
		let dot_alpha = if node.alert { DOT_ALPHA_ALERT } else { DOT_ALPHA };
		surface.disc((node.x, node.y), node.radius * GLOW_SCALE, color, GLOW_ALPHA);
		surface.disc((node.x, node.y), node.radius, color, dot_alpha);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, PartialEq)]
	enum Op {
		Clear(f64, f64),
		Line {
			from: (f64, f64),
			to: (f64, f64),
			color: Rgb,
			alpha: f64,
		},
		Disc {
			center: (f64, f64),
			radius: f64,
			color: Rgb,
			alpha: f64,
		},
	}

	#[derive(Default)]
	struct RecordingSurface {
		ops: Vec<Op>,
	}

	impl RecordingSurface {
		fn lines(&self) -> Vec<(&(f64, f64), &(f64, f64), Rgb, f64)> {
			self.ops
				.iter()
				.filter_map(|op| match op {
					Op::Line {
						from,
						to,
						color,
						alpha,
					} => Some((from, to, *color, *alpha)),
					_ => None,
				})
				.collect()
		}
	}

	impl Surface for RecordingSurface {
		fn clear(&mut self, width: f64, height: f64) {
			self.ops.push(Op::Clear(width, height));
		}

		fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb, alpha: f64) {
			self.ops.push(Op::Line {
				from,
				to,
				color,
				alpha,
			});
		}

		fn disc(&mut self, center: (f64, f64), radius: f64, color: Rgb, alpha: f64) {
			self.ops.push(Op::Disc {
				center,
				radius,
				color,
				alpha,
			});
		}
	}

	fn node_at(x: f64, y: f64, alert: bool) -> Node {
		Node {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 1.5,
			alert,
		}
	}

	fn state_of(nodes: Vec<Node>, width: f64, height: f64) -> MeshState {
		MeshState {
			nodes,
			width,
			height,
		}
	}

	/// Alpha of the single proximity link between two plain nodes the
	/// given distance apart, on a 500x500 surface (threshold 110).
	fn proximity_alpha(dist: f64) -> f64 {
		let mut state = state_of(
			vec![node_at(100.0, 100.0, false), node_at(100.0 + dist, 100.0, false)],
			500.0,
			500.0,
		);
		let mut surface = RecordingSurface::default();
		run_frame(&mut state, &mut surface, Motion::Static);
		let lines = surface.lines();
		// One proximity line plus the single backbone edge.
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[1].3, BACKBONE_ALPHA);
		lines[0].3
	}

	#[test]
	fn frame_starts_with_a_clear() {
		let mut state = state_of(vec![node_at(10.0, 10.0, false)], 300.0, 200.0);
		let mut surface = RecordingSurface::default();
		run_frame(&mut state, &mut surface, Motion::Static);
		assert_eq!(surface.ops[0], Op::Clear(300.0, 200.0));
	}

	#[test]
	fn link_alpha_scales_with_distance() {
		let threshold = 110.0;
		let expected = |d: f64| LINK_ALPHA * (1.0 - d / threshold);
		assert!((proximity_alpha(55.0) - expected(55.0)).abs() < 1e-12);

		let (near, mid, far) = (proximity_alpha(10.0), proximity_alpha(40.0), proximity_alpha(80.0));
		assert!(near > mid && mid > far);
		assert!(near < LINK_ALPHA);
	}

	#[test]
	fn no_link_at_or_beyond_the_threshold() {
		// 1000x1000 clamps the threshold to exactly 130.
		for dist in [130.0, 180.0] {
			let mut state = state_of(
				vec![node_at(50.0, 100.0, false), node_at(50.0 + dist, 100.0, false)],
				1000.0,
				1000.0,
			);
			let mut surface = RecordingSurface::default();
			run_frame(&mut state, &mut surface, Motion::Static);
			// Only the backbone keeps the pair connected.
			let lines = surface.lines();
			assert_eq!(lines.len(), 1);
			assert_eq!(lines[0].3, BACKBONE_ALPHA);
		}
	}

	#[test]
	fn alert_endpoint_switches_the_palette() {
		let mut state = state_of(
			vec![node_at(100.0, 100.0, true), node_at(150.0, 100.0, false)],
			500.0,
			500.0,
		);
		let mut surface = RecordingSurface::default();
		run_frame(&mut state, &mut surface, Motion::Static);

		let lines = surface.lines();
		assert_eq!(lines.len(), 2);
		let expected = LINK_ALPHA_ALERT * (1.0 - 50.0 / 110.0);
		assert_eq!(lines[0].2, ALERT_RED);
		assert!((lines[0].3 - expected).abs() < 1e-12);
		assert_eq!(lines[1].2, ALERT_RED);
	}

	#[test]
	fn every_node_gets_a_glow_then_a_dot() {
		let mut state = state_of(
			vec![node_at(20.0, 20.0, false), node_at(40.0, 40.0, true)],
			500.0,
			500.0,
		);
		let mut surface = RecordingSurface::default();
		run_frame(&mut state, &mut surface, Motion::Static);

		let discs: Vec<_> = surface
			.ops
			.iter()
			.filter_map(|op| match op {
				Op::Disc {
					radius,
					color,
					alpha,
					..
				} => Some((*radius, *color, *alpha)),
				_ => None,
			})
			.collect();
		assert_eq!(
			discs,
			vec![
				(4.5, MESH_GREEN, GLOW_ALPHA),
				(1.5, MESH_GREEN, DOT_ALPHA),
				(4.5, ALERT_RED, GLOW_ALPHA),
				(1.5, ALERT_RED, DOT_ALPHA_ALERT),
			]
		);
	}

	#[test]
	fn distant_nodes_are_still_spanned_by_the_backbone() {
		// 1000x1000 clamps the threshold to 130; 300px spacing keeps the
		// proximity pass empty, so every line is a backbone edge.
		let nodes: Vec<Node> = (0..5).map(|i| node_at(50.0 + 300.0 * i as f64, 500.0, false)).collect();
		let mut state = state_of(nodes, 2000.0, 1000.0);
		let mut surface = RecordingSurface::default();
		run_frame(&mut state, &mut surface, Motion::Static);

		let lines = surface.lines();
		assert_eq!(lines.len(), 4);
		assert!(lines.iter().all(|l| l.3 == BACKBONE_ALPHA));
	}

	#[test]
	fn static_motion_renders_once_and_stops() {
		let mut state = state_of(vec![node_at(10.0, 10.0, false)], 300.0, 200.0);
		state.nodes[0].vx = 1.0;
		let mut surface = RecordingSurface::default();

		assert!(!run_frame(&mut state, &mut surface, Motion::Static));
		assert_eq!(state.nodes[0].x, 10.0);
	}

	#[test]
	fn animated_motion_advances_and_reschedules() {
		let mut state = state_of(vec![node_at(10.0, 10.0, false)], 300.0, 200.0);
		state.nodes[0].vx = 1.0;
		let mut surface = RecordingSurface::default();

		assert!(run_frame(&mut state, &mut surface, Motion::Animated));
		assert_eq!(state.nodes[0].x, 11.0);
	}
}
