//! Toast Host Component
//!
//! Renders the notification queue in a corner overlay.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = ctx.toasts();

    view! {
        <div class="toast-host">
            {move || toasts.with(|queue| {
                queue.toasts().iter().cloned().map(|toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| ctx.dismiss(id)>
                            <strong>{toast.title}</strong>
                            <p>{toast.description}</p>
                        </div>
                    }
                }).collect_view()
            })}
        </div>
    }
}
