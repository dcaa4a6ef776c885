use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::canvas::{CanvasSurface, configure_canvas};
use super::render::{Motion, run_frame};
use super::rng::MathRandom;
use super::state::MeshState;

/// Decorative mesh backdrop for the hero section.
///
/// Fills the element its CSS sizes it to, reseeds on window resize, and
/// honors `prefers-reduced-motion` by drawing a single static snapshot
/// with no animation callback and no resize listener.
#[component]
pub fn MeshCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<MeshState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let rect = canvas.get_bounding_client_rect();
		let (w, h) = (rect.width().floor(), rect.height().floor());
		let dpr = window.device_pixel_ratio().max(1.0);

		let Ok(Some(ctx)) = canvas.get_context("2d") else {
			return;
		};
		let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};

		configure_canvas(&canvas, &ctx, w, h, dpr);
		*state_init.borrow_mut() = Some(MeshState::new(w, h, &mut MathRandom));

		let reduced_motion = window
			.match_media("(prefers-reduced-motion: reduce)")
			.ok()
			.flatten()
			.is_some_and(|media| media.matches());

		let mut surface = CanvasSurface::new(ctx.clone());
		if reduced_motion {
			if let Some(ref mut s) = *state_init.borrow_mut() {
				run_frame(s, &mut surface, Motion::Static);
			}
			return;
		}

		let (state_resize, canvas_resize, ctx_resize) =
			(state_init.clone(), canvas.clone(), ctx.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let rect = canvas_resize.get_bounding_client_rect();
			let (nw, nh) = (rect.width().floor(), rect.height().floor());
			let dpr = win.device_pixel_ratio().max(1.0);
			configure_canvas(&canvas_resize, &ctx_resize, nw, nh, dpr);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh, &mut MathRandom);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let keep_going = match *state_anim.borrow_mut() {
				Some(ref mut s) => run_frame(s, &mut surface, Motion::Animated),
				None => false,
			};
			if keep_going {
				if let (Some(win), Some(cb)) = (web_sys::window(), &*animate_inner.borrow()) {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! { <canvas node_ref=canvas_ref class="mesh-canvas" attr:aria-hidden="true" /> }
}
