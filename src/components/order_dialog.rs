//! Order Dialog Component
//!
//! Collects contact details for the selected service and submits the order
//! after the processing delay.

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::forms::OrderForm;
use crate::models::Service;
use crate::order_flow::{submit_after_delay, submit_outcome};

#[component]
pub fn OrderDialog(
    selected: RwSignal<Option<Service>>,
    form: RwSignal<OrderForm>,
) -> impl IntoView {
    let ctx = use_app_context();
    let submitting = RwSignal::new(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let service_id = selected.with_untracked(|s| s.as_ref().map(|s| s.id));
        let order = match form.with_untracked(|f| f.validate(service_id)) {
            Ok(order) => order,
            Err(err) => {
                ctx.error("Ошибка", err.to_string());
                return;
            }
        };

        submitting.set(true);
        ctx.info("Обработка...", "Ваша заявка обрабатывается");

        let client = ctx.client();
        let delay = ctx.config().order_delay;
        spawn_local(async move {
            let result = submit_after_delay(sleep(delay), || async move {
                client.create_order(&order).await
            })
            .await;

            match &result {
                Ok(()) => tracing::info!(?service_id, "order submitted"),
                Err(err) => tracing::warn!(%err, "order submission failed"),
            }
            let outcome = submit_outcome(&result);
            ctx.notify(outcome.kind, outcome.title, outcome.description);
            if outcome.close_dialog {
                selected.try_set(None);
            }
            if outcome.reset_form {
                form.try_set(OrderForm::default());
            }
            submitting.try_set(outcome.submitting);
        });
    };

    view! {
        <Show when=move || selected.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| selected.set(None)>
                <form
                    class="dialog"
                    on:click=|ev| ev.stop_propagation()
                    on:submit=submit
                >
                    <h2>"Оформление заявки"</h2>
                    <p class="dialog-description">
                        "Заполните данные для заказа услуги: "
                        {move || selected.with(|s| s.as_ref().map(|s| s.title.clone()).unwrap_or_default())}
                    </p>

                    {order_field(
                        form,
                        "phone",
                        "Номер телефона",
                        "+7 (999) 123-45-67",
                        |f| f.phone.clone(),
                        |f, v| f.phone = v,
                    )}
                    {order_field(
                        form,
                        "game_uid",
                        "UID аккаунта из игры",
                        "123456789",
                        |f| f.game_uid.clone(),
                        |f, v| f.game_uid = v,
                    )}
                    {order_field(
                        form,
                        "telegram",
                        "Telegram аккаунт",
                        "@username",
                        |f| f.telegram.clone(),
                        |f, v| f.telegram = v,
                    )}

                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Отправка..." } else { "Отправить заявку" }}
                    </button>
                </form>
            </div>
        </Show>
    }
}

fn order_field(
    form: RwSignal<OrderForm>,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    get: fn(&OrderForm) -> String,
    set: fn(&mut OrderForm, String),
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            <input
                id=id
                type="text"
                placeholder=placeholder
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </div>
    }
}
