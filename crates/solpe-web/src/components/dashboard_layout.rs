use leptos::prelude::*;
use shared::CONFIG;

/// Dashboard layout - fixed heading above the nested dashboard content
#[component]
pub fn DashboardLayout(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <h1 class="mb-16 text-5xl font-bold">{CONFIG.dashboard_title}</h1>
        {children.map(|children| children())}
    }
}
