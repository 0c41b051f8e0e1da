//! Services Catalog Component
//!
//! Polls the active services and opens the order dialog for a selected one.

use leptos::prelude::*;

use crate::components::OrderDialog;
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::forms::OrderForm;
use crate::models::Service;
use crate::poll::use_poll;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let ctx = use_app_context();
    let services = RwSignal::new(Vec::<Service>::new());
    let selected = RwSignal::new(None::<Service>);
    let form = RwSignal::new(OrderForm::default());

    let client = ctx.client();
    use_poll(
        "services",
        ctx.config().poll_interval,
        move || {
            let client = client.clone();
            async move { client.list_active_services().await }
        },
        move |result: Result<Vec<Service>, ApiError>| match result {
            Ok(latest) => {
                if services.with_untracked(|current| current != &latest) {
                    services.set(latest);
                }
            }
            Err(err) => tracing::warn!(%err, "failed to fetch services"),
        },
    );

    let open_dialog = move |service: Service| {
        form.set(OrderForm::default());
        selected.set(Some(service));
    };

    view! {
        <div class="services-page">
            <div class="page-header">
                <h1>"Услуги прокачки"</h1>
                <p>"Выберите подходящий пакет для вашего аккаунта"</p>
            </div>

            <div class="service-grid">
                {move || services.get().into_iter().map(|service| {
                    let chosen = service.clone();
                    view! {
                        <div class="card service-card">
                            <div class="service-card-header">
                                <div>
                                    <h3>{service.title}</h3>
                                    <p class="service-description">{service.description}</p>
                                </div>
                                <div class="service-price">{service.price}</div>
                            </div>
                            <div class="service-requirements">
                                <h4>"✓ Требования:"</h4>
                                <p>{service.requirements}</p>
                            </div>
                            <button class="primary-btn" on:click=move |_| open_dialog(chosen.clone())>
                                "Отправить запрос"
                            </button>
                        </div>
                    }
                }).collect_view()}
            </div>

            <OrderDialog selected=selected form=form />
        </div>
    }
}
