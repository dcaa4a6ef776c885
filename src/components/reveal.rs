use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Portion of an element that must enter the viewport before it reveals.
const REVEAL_THRESHOLD: f64 = 0.12;

/// Fades its children in the first time they scroll into view.
///
/// One-shot: the observer disconnects after the first intersection, so
/// scrolling back out never hides the content again. Without an observer
/// (or a mounted element) the content simply stays in its initial state.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
	let node_ref = NodeRef::<leptos::html::Div>::new();
	let seen = RwSignal::new(false);
	let observe_cb: Rc<RefCell<Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>>> =
		Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(el) = node_ref.get() else {
			return;
		};
		let el: web_sys::HtmlElement = el.into();
		let mut slot = observe_cb.borrow_mut();
		if slot.is_some() {
			return;
		}

		*slot = Some(Closure::new(
			move |entries: js_sys::Array, observer: IntersectionObserver| {
				for entry in entries.iter() {
					let entry: IntersectionObserverEntry = entry.unchecked_into();
					if entry.is_intersecting() {
						seen.set(true);
						observer.disconnect();
					}
				}
			},
		));

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
		if let Some(cb) = &*slot {
			if let Ok(observer) =
				IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)
			{
				observer.observe(&el);
			}
		}
	});

	view! {
		<div node_ref=node_ref class="fade-up" class=("in-view", move || seen.get())>
			{children()}
		</div>
	}
}
