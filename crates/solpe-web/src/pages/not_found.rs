use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-16 text-center">
            <p class="mb-4">"404 - Page not found"</p>
            <a href="/">"← back to home"</a>
        </main>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_text() {
        let html = view! { <NotFound /> }.to_html();

        assert!(html.contains("404 - Page not found"));
        assert!(html.contains(r#"href="/""#));
    }
}
