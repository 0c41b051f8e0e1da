//! Navigation Bar Component
//!
//! Site name plus the tab switch between home, services and admin.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};
use crate::models::SiteSettings;

#[component]
pub fn NavBar(settings: ReadSignal<SiteSettings>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="nav-bar">
            <h1 class="nav-title">{move || settings.with(|s| s.site_name.clone())}</h1>
            <div class="nav-tabs">
                {Page::ALL.iter().map(|&page| {
                    let tab_class = move || {
                        if ctx.page.get() == page { "nav-tab active" } else { "nav-tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| ctx.navigate(page)>
                            {page.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </nav>
    }
}
