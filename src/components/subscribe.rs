use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Newsletter call-to-action. Accepts any non-empty address, thanks the
/// visitor, and clears the field; nothing is sent anywhere yet.
#[component]
pub fn SubscribeForm() -> impl IntoView {
	let input_ref = NodeRef::<leptos::html::Input>::new();

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let Some(input) = input_ref.get() else {
			return;
		};
		let email = input.value().trim().to_string();
		if !email.is_empty() {
			super::notify("Thanks! We'll notify you when Nagardarpan launches.");
			input.set_value("");
		}
	};

	view! {
		<form class="cta-form" on:submit=on_submit>
			<input
				node_ref=input_ref
				type="email"
				placeholder="you@example.com"
				aria-label="Email address"
			/>
			<button type="submit" class="btn-primary">
				"Notify me"
			</button>
		</form>
	}
}
