use leptos::prelude::*;

/// Titled block of dashboard content
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section id=id class="mb-10">
            <h2 class="text-2xl font-semibold mb-4">{title}</h2>
            <div class="space-y-2">{children()}</div>
        </section>
    }
}
