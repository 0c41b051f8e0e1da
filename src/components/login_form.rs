//! Admin Login Form Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::forms::LoginForm as LoginFields;
use crate::session::{check_login, LoginOutcome};

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let fields = RwSignal::new(LoginFields::default());

    let login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let config = ctx.config();
        let outcome = fields.with_untracked(|f| check_login(config.admin.as_ref(), &f.username, &f.password));
        tracing::info!(?outcome, "admin login attempt");

        match outcome {
            LoginOutcome::Granted => {
                fields.set(LoginFields::default());
                ctx.admin_open.set(true);
                ctx.success("Успешный вход", "Добро пожаловать в админ-панель");
            }
            LoginOutcome::Denied => ctx.error("Ошибка", "Неверный логин или пароль"),
            LoginOutcome::NotConfigured => ctx.error("Ошибка", "Вход в админ-панель не настроен"),
        }
    };

    view! {
        <div class="login-wrapper">
            <form class="card login-card" on:submit=login>
                <h2>"Вход в админ-панель"</h2>
                <div class="form-field">
                    <label for="username">"Логин"</label>
                    <input
                        id="username"
                        type="text"
                        placeholder="Введите логин"
                        prop:value=move || fields.with(|f| f.username.clone())
                        on:input=move |ev| fields.update(|f| f.username = event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label for="password">"Пароль"</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="Введите пароль"
                        prop:value=move || fields.with(|f| f.password.clone())
                        on:input=move |ev| fields.update(|f| f.password = event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="primary-btn">"Войти"</button>
            </form>
        </div>
    }
}
