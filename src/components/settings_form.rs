//! Site Settings Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{store_settings_to_save, use_console_store, ConsoleStateStoreFields};

#[component]
pub fn SettingsForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_console_store();

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let settings = match store_settings_to_save(&store) {
            Ok(settings) => settings,
            Err(err) => {
                ctx.error("Ошибка", err.to_string());
                return;
            }
        };
        let client = ctx.client();
        spawn_local(async move {
            match client.update_settings(&settings).await {
                Ok(()) => {
                    tracing::info!("site settings updated");
                    ctx.success("Успешно", "Настройки сайта обновлены");
                }
                Err(err) => {
                    tracing::warn!(%err, "settings update failed");
                    ctx.error("Ошибка", "Не удалось обновить настройки");
                }
            }
        });
    };

    view! {
        <form class="card" on:submit=save>
            <h2>"Настройки сайта"</h2>
            <div class="form-field">
                <label>"Название сайта"</label>
                <input
                    type="text"
                    placeholder="GenLeveling"
                    prop:value=move || store.settings().read().site_name.clone()
                    on:input=move |ev| store.settings().write().site_name = event_target_value(&ev)
                />
            </div>
            <div class="form-field">
                <label>"Описание сайта"</label>
                <textarea
                    placeholder="Профессиональная прокачка аккаунтов"
                    prop:value=move || store.settings().read().site_description.clone()
                    on:input=move |ev| store.settings().write().site_description = event_target_value(&ev)
                />
            </div>
            <button
                type="submit"
                class="primary-btn"
                disabled=move || !store.settings_loaded().get()
            >
                "Сохранить изменения"
            </button>
        </form>
    }
}
