use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::render::{Rgb, Surface};

/// Point the backing store at `size x dpr` physical pixels while keeping
/// drawing coordinates in CSS pixels via the context transform.
pub fn configure_canvas(
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
	dpr: f64,
) {
	canvas.set_width((width * dpr) as u32);
	canvas.set_height((height * dpr) as u32);
	let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

/// Canvas-2D implementation of the mesh drawing surface.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

fn rgba(color: Rgb, alpha: f64) -> String {
	format!("rgba({},{},{},{})", color.0, color.1, color.2, alpha)
}

impl Surface for CanvasSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb, alpha: f64) {
		self.ctx.set_stroke_style_str(&rgba(color, alpha));
		self.ctx.set_line_width(1.0);
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
	}

	fn disc(&mut self, center: (f64, f64), radius: f64, color: Rgb, alpha: f64) {
		self.ctx.set_fill_style_str(&rgba(color, alpha));
		self.ctx.begin_path();
		let _ = self.ctx.arc(center.0, center.1, radius, 0.0, 2.0 * PI);
		self.ctx.fill();
	}
}
