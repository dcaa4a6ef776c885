use leptos::prelude::*;

use crate::components::mesh::MeshCanvas;
use crate::components::{LoginModal, NavBar, Reveal, SubscribeForm};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let login_open = RwSignal::new(false);

	view! {
		<NavBar on_login=move |_: ()| login_open.set(true) />

		<main id="top">
			<section class="hero">
				<MeshCanvas />
				<div class="hero-inner">
					<h1>"See your city. Fix your city."</h1>
					<p class="subtitle">
						"Nagardarpan connects citizens, ward officers, and municipal staff around one live map of civic issues."
					</p>
					<div class="hero-actions">
						<a class="btn-primary" href="#cta">
							"Get early access"
						</a>
						<a class="btn-ghost" href="#features">
							"Learn more"
						</a>
					</div>
				</div>
			</section>

			<section id="features" class="features">
				<Reveal>
					<h2>"Why Nagardarpan?"</h2>
				</Reveal>
				<div class="feature-grid">
					<FeatureCard
						title="Report in seconds"
						description="Snap a photo, drop a pin, done. No forms longer than the pothole itself."
					/>
					<FeatureCard
						title="Track every issue"
						description="Each report moves through an open queue you can watch, from filed to fixed."
					/>
					<FeatureCard
						title="Built for wards"
						description="Ward officers get a live board of their own streets, not a city-wide haystack."
					/>
				</div>
			</section>

			<section id="how-it-works" class="how-it-works">
				<Reveal>
					<h2>"How it works"</h2>
				</Reveal>
				<div class="steps">
					<FeatureCard
						title="1. Report"
						description="Citizens file an issue against a location in their ward."
					/>
					<FeatureCard
						title="2. Route"
						description="The report lands with the ward office responsible for that street."
					/>
					<FeatureCard
						title="3. Resolve"
						description="Progress is public until the issue is closed."
					/>
				</div>
			</section>

			<section id="cta" class="cta">
				<Reveal>
					<h2>"Be first to know"</h2>
					<p>"We are rolling out ward by ward. Leave an email and we will tell you when yours is live."</p>
					<SubscribeForm />
				</Reveal>
			</section>
		</main>

		<footer id="contact" class="footer">
			<p>"Nagardarpan \u{b7} a mirror for your city"</p>
			<p>"hello@nagardarpan.example"</p>
		</footer>

		<LoginModal open=login_open />
	}
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
	view! {
		<Reveal>
			<article class="feature-card">
				<h3>{title}</h3>
				<p>{description}</p>
			</article>
		</Reveal>
	}
}
