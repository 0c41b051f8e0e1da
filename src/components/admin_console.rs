//! Admin Console Component
//!
//! Owns the console store and polls orders and all services on a single
//! timer while mounted. The same tick loads the settings draft until the
//! first fetch succeeds.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{OrderList, ServiceManager, SettingsForm};
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::models::{Order, Service, SiteSettings};
use crate::poll::use_poll;
use crate::store::{
    store_load_settings, store_replace_orders, store_replace_services, ConsoleState,
    ConsoleStateStoreFields,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleTab {
    Orders,
    Services,
    Settings,
}

impl ConsoleTab {
    const ALL: [ConsoleTab; 3] = [ConsoleTab::Orders, ConsoleTab::Services, ConsoleTab::Settings];

    fn label(self) -> &'static str {
        match self {
            Self::Orders => "Заявки",
            Self::Services => "Услуги",
            Self::Settings => "Настройки",
        }
    }
}

/// One poll tick. Settings are fetched only until the draft is loaded.
struct ConsoleSnapshot {
    orders: Result<Vec<Order>, ApiError>,
    services: Result<Vec<Service>, ApiError>,
    settings: Option<Result<SiteSettings, ApiError>>,
}

#[component]
pub fn AdminConsole() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(ConsoleState::default());
    provide_context(store);
    let (tab, set_tab) = signal(ConsoleTab::Orders);

    let client = ctx.client();
    use_poll(
        "admin",
        ctx.config().poll_interval,
        move || {
            let client = client.clone();
            let load_settings = !store.settings_loaded().get_untracked();
            async move {
                let orders = client.list_orders().await;
                let services = client.list_all_services().await;
                let settings = if load_settings {
                    Some(client.get_settings().await)
                } else {
                    None
                };
                ConsoleSnapshot { orders, services, settings }
            }
        },
        move |snapshot: ConsoleSnapshot| {
            match snapshot.orders {
                Ok(orders) => store_replace_orders(&store, orders),
                Err(err) => tracing::warn!(%err, "failed to fetch orders"),
            }
            match snapshot.services {
                Ok(services) => store_replace_services(&store, services),
                Err(err) => tracing::warn!(%err, "failed to fetch services"),
            }
            match snapshot.settings {
                Some(Ok(settings)) => {
                    if store_load_settings(&store, settings) {
                        tracing::debug!("settings draft loaded");
                    }
                }
                Some(Err(err)) => tracing::warn!(%err, "failed to load settings draft"),
                None => {}
            }
        },
    );

    let logout = move |_| {
        tracing::info!("admin logout");
        ctx.admin_open.set(false);
    };

    view! {
        <div class="admin-console">
            <div class="console-header">
                <h1>"Панель администратора"</h1>
                <button class="outline-btn" on:click=logout>"Выйти"</button>
            </div>

            <div class="console-tabs">
                {ConsoleTab::ALL.iter().map(|&t| view! {
                    <button
                        class=move || if tab.get() == t { "console-tab active" } else { "console-tab" }
                        on:click=move |_| set_tab.set(t)
                    >
                        {t.label()}
                    </button>
                }).collect_view()}
            </div>

            {move || match tab.get() {
                ConsoleTab::Orders => view! { <OrderList /> }.into_any(),
                ConsoleTab::Services => view! { <ServiceManager /> }.into_any(),
                ConsoleTab::Settings => view! { <SettingsForm /> }.into_any(),
            }}
        </div>
    }
}
