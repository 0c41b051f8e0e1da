//! GenLeveling Frontend App
//!
//! Shell with navigation, the settings poll, and the three tabs.

use leptos::prelude::*;

use crate::components::{AdminPage, HomePage, NavBar, ServicesPage, ToastHost};
use crate::config::AppConfig;
use crate::context::{AppContext, Page};
use crate::error::ApiError;
use crate::models::SiteSettings;
use crate::poll::use_poll;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    tracing::info!(api_url = %config.api_url, admin_enabled = config.admin.is_some(), "starting");
    let poll_interval = config.poll_interval;

    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Settings are public and shown on every tab
    let settings = RwSignal::new(SiteSettings::default());
    let client = ctx.client();
    use_poll(
        "settings",
        poll_interval,
        move || {
            let client = client.clone();
            async move { client.get_settings().await }
        },
        move |result: Result<SiteSettings, ApiError>| match result {
            Ok(latest) => {
                if settings.with_untracked(|current| current != &latest) {
                    settings.set(latest);
                }
            }
            Err(err) => tracing::warn!(%err, "failed to fetch settings"),
        },
    );

    view! {
        <div class="app-layout">
            <NavBar settings=settings.read_only() />

            <main class="main-content">
                {move || match ctx.page.get() {
                    Page::Home => view! { <HomePage settings=settings.read_only() /> }.into_any(),
                    Page::Services => view! { <ServicesPage /> }.into_any(),
                    Page::Admin => view! { <AdminPage /> }.into_any(),
                }}
            </main>

            <ToastHost />
        </div>
    }
}
