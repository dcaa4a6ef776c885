/// A drifting point in the decorative mesh. Velocity is fixed for the
/// node's lifetime; only the position changes frame to frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	/// Renders the node and any edge touching it in the alert palette.
	pub alert: bool,
}
