//! Admin Page Component
//!
//! Shows the login form until the gate opens, then the console. Closing the
//! gate unmounts the console and stops its polling.

use leptos::prelude::*;

use crate::components::{AdminConsole, LoginForm};
use crate::context::use_app_context;

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.admin_open.get() fallback=|| view! { <LoginForm /> }>
            <AdminConsole />
        </Show>
    }
}
