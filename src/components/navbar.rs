use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Site header with the desktop links, the hamburger-driven mobile menu,
/// and the login triggers. Any mobile-menu link closes the menu again.
#[component]
pub fn NavBar(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
	let open = RwSignal::new(false);

	let login = move |ev: MouseEvent| {
		ev.prevent_default();
		on_login.run(());
	};
	let login_mobile = move |ev: MouseEvent| {
		ev.prevent_default();
		open.set(false);
		on_login.run(());
	};

	view! {
		<header class="navbar" class=("mobile-open", move || open.get())>
			<a class="brand" href="#top">"Nagardarpan"</a>
			<nav class="nav-links">
				<a href="#features">"Features"</a>
				<a href="#how-it-works">"How it works"</a>
				<a href="#contact">"Contact"</a>
				<a href="#" class="btn-ghost login-btn" on:click=login>
					"Login"
				</a>
			</nav>
			<button
				class="hamburger"
				aria-label="Toggle navigation"
				attr:aria-controls="mobile-menu"
				attr:aria-expanded=move || open.get().to_string()
				on:click=move |_| open.update(|o| *o = !*o)
			>
				<span></span>
				<span></span>
				<span></span>
			</button>
			<nav id="mobile-menu" class="mobile-menu">
				<a href="#features" on:click=move |_| open.set(false)>
					"Features"
				</a>
				<a href="#how-it-works" on:click=move |_| open.set(false)>
					"How it works"
				</a>
				<a href="#contact" on:click=move |_| open.set(false)>
					"Contact"
				</a>
				<a href="#" class="login-btn" on:click=login_mobile>
					"Login"
				</a>
			</nav>
		</header>
	}
}
