//! Home Page Component

use leptos::prelude::*;

use crate::context::{use_app_context, Page};
use crate::models::SiteSettings;

const FALLBACK_DESCRIPTION: &str = "Профессиональная прокачка аккаунтов Henshin Impact";

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "⚡",
        "Быстрая прокачка",
        "Профессиональная команда выполнит прокачку вашего аккаунта в кратчайшие сроки",
    ),
    (
        "🛡",
        "Безопасность",
        "Гарантируем безопасность вашего аккаунта. Все данные строго конфиденциальны",
    ),
    (
        "🎧",
        "Поддержка 24/7",
        "Наша служба поддержки всегда на связи и готова ответить на ваши вопросы",
    ),
];

/// Description shown under the hero title
pub fn display_description(settings: &SiteSettings) -> &str {
    if settings.site_description.trim().is_empty() {
        FALLBACK_DESCRIPTION
    } else {
        &settings.site_description
    }
}

#[component]
pub fn HomePage(settings: ReadSignal<SiteSettings>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>{move || settings.with(|s| s.site_name.clone())}</h1>
                <p>{move || settings.with(|s| display_description(s).to_string())}</p>
            </section>

            <section class="feature-grid">
                {FEATURES.iter().map(|(icon, title, text)| view! {
                    <div class="card feature-card">
                        <div class="feature-icon">{*icon}</div>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }).collect_view()}
            </section>

            <section class="cta">
                <h2>"Готовы начать?"</h2>
                <p>"Выберите подходящий пакет прокачки и оставьте заявку"</p>
                <button class="cta-btn" on:click=move |_| ctx.navigate(Page::Services)>
                    "Смотреть услуги"
                </button>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_falls_back() {
        let settings = SiteSettings { site_name: "GenLeveling".into(), site_description: "  ".into() };
        assert_eq!(display_description(&settings), FALLBACK_DESCRIPTION);
    }

    #[test]
    fn test_custom_description_is_shown() {
        let settings = SiteSettings { site_name: "X".into(), site_description: "Лучшая прокачка".into() };
        assert_eq!(display_description(&settings), "Лучшая прокачка");
    }
}
