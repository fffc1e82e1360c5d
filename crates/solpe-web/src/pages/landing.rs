use leptos::prelude::*;
use shared::CONFIG;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-16 text-center">
            <h1 class="text-5xl font-bold mb-4">{CONFIG.name}</h1>
            <p class="text-[var(--ink-light)] mb-8">{CONFIG.tagline}</p>
            <a href="/dashboard" class="font-semibold">"Open dashboard →"</a>
        </main>
    }
}
