use leptos::config::LeptosOptions;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;
use shared::CONFIG;

use crate::components::DashboardLayout;
use crate::pages::{DashboardHome, LandingPage, NotFound, VaultPage};

/// HTML document rendered on the server around the app
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/solpe-web.css" />
        <Title text=CONFIG.name />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LandingPage />
                <ParentRoute path=path!("/dashboard") view=DashboardShell>
                    <Route path=path!("") view=DashboardHome />
                    <Route path=path!("vault") view=VaultPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Every /dashboard route renders inside the dashboard layout
#[component]
fn DashboardShell() -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <DashboardLayout>
                <Outlet />
            </DashboardLayout>
        </main>
    }
}
