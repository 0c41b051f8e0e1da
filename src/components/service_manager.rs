//! Service Manager Component
//!
//! Create form, the full (active + inactive) service list, and the edit
//! dialog. New and edited rows show up on the next poll tick.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ServiceFields;
use crate::context::use_app_context;
use crate::forms::ServiceForm;
use crate::models::Service;
use crate::store::{use_console_store, ConsoleStateStoreFields};

#[component]
pub fn ServiceManager() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_console_store();

    let new_form = RwSignal::new(ServiceForm::default());
    let editing = RwSignal::new(None::<Service>);
    let edit_form = RwSignal::new(ServiceForm::default());

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let service = match new_form.with_untracked(ServiceForm::validate) {
            Ok(service) => service,
            Err(err) => {
                ctx.error("Ошибка", err.to_string());
                return;
            }
        };
        let client = ctx.client();
        spawn_local(async move {
            match client.create_service(&service).await {
                Ok(()) => {
                    tracing::info!(title = %service.title, "service created");
                    ctx.success("Успешно", "Услуга создана");
                    new_form.try_set(ServiceForm::default());
                }
                Err(err) => {
                    tracing::warn!(%err, "service creation failed");
                    ctx.error("Ошибка", "Не удалось создать услугу");
                }
            }
        });
    };

    let start_edit = move |service: Service| {
        edit_form.set(ServiceForm::from(&service));
        editing.set(Some(service));
    };

    let save_edit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(original) = editing.get_untracked() else { return };
        let service = match edit_form.with_untracked(|f| f.validate_update(&original)) {
            Ok(service) => service,
            Err(err) => {
                ctx.error("Ошибка", err.to_string());
                return;
            }
        };
        let client = ctx.client();
        spawn_local(async move {
            match client.update_service(&service).await {
                Ok(()) => {
                    tracing::info!(service_id = service.id, "service updated");
                    ctx.success("Успешно", "Услуга обновлена");
                    editing.try_set(None);
                }
                Err(err) => {
                    tracing::warn!(%err, service_id = service.id, "service update failed");
                    ctx.error("Ошибка", "Не удалось обновить услугу");
                }
            }
        });
    };

    let delete = move |service_id: u32| {
        let client = ctx.client();
        spawn_local(async move {
            match client.delete_service(service_id).await {
                Ok(()) => {
                    tracing::info!(service_id, "service deactivated");
                    ctx.success("Успешно", "Услуга удалена");
                }
                Err(err) => {
                    tracing::warn!(%err, service_id, "service deletion failed");
                    ctx.error("Ошибка", "Не удалось удалить услугу");
                }
            }
        });
    };

    view! {
        <form class="card" on:submit=create>
            <h2>"Создать новую услугу"</h2>
            <ServiceFields form=new_form />
            <button type="submit" class="primary-btn">"Создать услугу"</button>
        </form>

        <div class="card">
            <h2>"Все услуги"</h2>
            <Show
                when=move || !store.services().read().is_empty()
                fallback=|| view! { <p class="empty-state">"Услуг пока нет"</p> }
            >
                <div class="service-list">
                    {move || store.services().get().into_iter().map(|service| {
                        let row_class = if service.is_active { "card service-row" } else { "card service-row inactive" };
                        let badge = if service.is_active { "Активна" } else { "Удалена" };
                        let id = service.id;
                        let is_active = service.is_active;
                        let for_edit = service.clone();
                        view! {
                            <div class=row_class>
                                <div class="service-row-header">
                                    <h3>{service.title.clone()}</h3>
                                    <span class="badge">{badge}</span>
                                </div>
                                <p class="service-description">{service.description.clone()}</p>
                                <p class="service-requirements">
                                    <strong>"Требования: "</strong>
                                    {service.requirements.clone()}
                                </p>
                                <p class="service-price">{service.price.clone()}</p>
                                <Show when=move || is_active>
                                    <div class="service-actions">
                                        <button class="outline-btn" on:click={
                                            let for_edit = for_edit.clone();
                                            move |_| start_edit(for_edit.clone())
                                        }>
                                            "✎ Редактировать"
                                        </button>
                                        <button class="action-btn negative" on:click=move |_| delete(id)>
                                            "🗑 Удалить"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>

        <Show when=move || editing.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| editing.set(None)>
                <form class="dialog" on:click=|ev| ev.stop_propagation() on:submit=save_edit>
                    <h2>"Редактировать услугу"</h2>
                    <p class="dialog-description">"Измените данные услуги и сохраните изменения"</p>
                    <ServiceFields form=edit_form />
                    <button type="submit" class="primary-btn">"Сохранить изменения"</button>
                </form>
            </div>
        </Show>
    }
}
