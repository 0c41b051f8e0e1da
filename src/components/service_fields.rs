//! Service Fields Component
//!
//! The four service inputs shared by the create form and the edit dialog.

use leptos::prelude::*;

use crate::forms::ServiceForm;

#[component]
pub fn ServiceFields(form: RwSignal<ServiceForm>) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>"Название"</label>
            <input
                type="text"
                placeholder="Прокачка до AR 60"
                prop:value=move || form.with(|f| f.title.clone())
                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
            />
        </div>
        <div class="form-field">
            <label>"Описание"</label>
            <textarea
                placeholder="Подробное описание услуги"
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
            />
        </div>
        <div class="form-field">
            <label>"Требования"</label>
            <textarea
                placeholder="AR уровень, доступы и т.д."
                prop:value=move || form.with(|f| f.requirements.clone())
                on:input=move |ev| form.update(|f| f.requirements = event_target_value(&ev))
            />
        </div>
        <div class="form-field">
            <label>"Цена"</label>
            <input
                type="text"
                placeholder="1500 ₽"
                prop:value=move || form.with(|f| f.price.clone())
                on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
            />
        </div>
    }
}
