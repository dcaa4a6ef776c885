mod login_modal;
pub mod mesh;
mod navbar;
mod reveal;
mod subscribe;

pub use login_modal::LoginModal;
pub use navbar::NavBar;
pub use reveal::Reveal;
pub use subscribe::SubscribeForm;

/// Browser notification used by the fake subscribe form and the unmapped
/// role fallback. Without a window it does nothing.
pub(crate) fn notify(message: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(message);
	}
}
