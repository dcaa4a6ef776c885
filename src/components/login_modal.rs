use leptos::ev;
use leptos::prelude::*;

/// Account types offered by the login chooser. Municipal and ward staff
/// share a login page; citizens have their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
	Municipal,
	Ward,
	Citizen,
}

impl Role {
	pub const ALL: [Role; 3] = [Role::Municipal, Role::Ward, Role::Citizen];

	pub fn from_attr(value: &str) -> Option<Role> {
		match value {
			"municipal" => Some(Role::Municipal),
			"ward" => Some(Role::Ward),
			"citizen" => Some(Role::Citizen),
			_ => None,
		}
	}

	pub fn attr(self) -> &'static str {
		match self {
			Role::Municipal => "municipal",
			Role::Ward => "ward",
			Role::Citizen => "citizen",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Role::Municipal => "Municipal",
			Role::Ward => "Ward",
			Role::Citizen => "Citizen",
		}
	}

	fn description(self) -> &'static str {
		match self {
			Role::Municipal => "City-level dashboards and complaint triage",
			Role::Ward => "Task queue for your ward's reported issues",
			Role::Citizen => "Report issues and track their status",
		}
	}

	pub fn login_url(self) -> &'static str {
		match self {
			Role::Municipal | Role::Ward => "municipal-login.html",
			Role::Citizen => "citizen-login-page.html",
		}
	}
}

/// Destination for a card click, keyed by its `data-role` value.
pub fn role_destination(attr: &str) -> Option<&'static str> {
	Role::from_attr(attr).map(Role::login_url)
}

/// Known roles navigate to their login page; anything unmapped falls back
/// to a notification naming the role instead of navigating.
fn select_role(attr: &str) {
	match role_destination(attr) {
		Some(url) => {
			if let Some(window) = web_sys::window() {
				let _ = window.location().set_href(url);
			}
		}
		None => super::notify(&format!("{attr} login selected. Redirecting to login page...")),
	}
}

/// Role-selection modal. Closes via the close button, a click on the
/// overlay, or Escape; body scroll is locked while it is open.
#[component]
pub fn LoginModal(open: RwSignal<bool>) -> impl IntoView {
	window_event_listener(ev::keydown, move |ev| {
		if ev.key() == "Escape" && open.get_untracked() {
			open.set(false);
		}
	});

	// Scroll lock follows the open state.
	Effect::new(move |_| {
		let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
		else {
			return;
		};
		let style = body.style();
		if open.get() {
			let _ = style.set_property("overflow", "hidden");
		} else {
			let _ = style.remove_property("overflow");
		}
	});

	view! {
		<div
			class="login-modal"
			class=("active", move || open.get())
			attr:aria-hidden=move || (!open.get()).to_string()
			on:click=move |_| open.set(false)
		>
			<div class="login-dialog" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
				<button class="login-close" aria-label="Close login chooser" on:click=move |_| open.set(false)>
					"\u{d7}"
				</button>
				<h2>"Sign in as"</h2>
				<div class="login-cards">
					{Role::ALL.into_iter().map(|role| view! { <RoleCard role /> }).collect_view()}
				</div>
			</div>
		</div>
	}
}

#[component]
fn RoleCard(role: Role) -> impl IntoView {
	view! {
		<button class="login-card" attr:data-role=role.attr() on:click=move |_| select_role(role.attr())>
			<h3>{role.label()}</h3>
			<p>{role.description()}</p>
		</button>
	}
}
