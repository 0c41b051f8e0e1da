//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::time::Duration;

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::toast::{ToastKind, ToastQueue};

const TOAST_LIFETIME: Duration = Duration::from_millis(4000);

/// Top-level tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Services,
    Admin,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Services, Page::Admin];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Главная",
            Self::Services => "Услуги",
            Self::Admin => "Админ-панель",
        }
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    client: StoredValue<ApiClient>,
    /// Currently shown tab
    pub page: RwSignal<Page>,
    /// Admin gate; lives only as long as the page
    pub admin_open: RwSignal<bool>,
    toasts: RwSignal<ToastQueue>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let client = ApiClient::new(config.api_url.clone(), config.admin_token());
        Self {
            config: StoredValue::new(config),
            client: StoredValue::new(client),
            page: RwSignal::new(Page::Home),
            admin_open: RwSignal::new(false),
            toasts: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    pub fn toasts(&self) -> RwSignal<ToastQueue> {
        self.toasts
    }

    /// Show a notification that dismisses itself
    pub fn notify(&self, kind: ToastKind, title: &str, description: impl Into<String>) {
        let mut id = 0;
        self.toasts.update(|queue| id = queue.push(kind, title, description));
        let toasts = self.toasts;
        set_timeout(move || toasts.update(|queue| queue.dismiss(id)), TOAST_LIFETIME);
    }

    pub fn info(&self, title: &str, description: impl Into<String>) {
        self.notify(ToastKind::Info, title, description);
    }

    pub fn success(&self, title: &str, description: impl Into<String>) {
        self.notify(ToastKind::Success, title, description);
    }

    pub fn error(&self, title: &str, description: impl Into<String>) {
        self.notify(ToastKind::Error, title, description);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|queue| queue.dismiss(id));
    }

    pub fn navigate(&self, page: Page) {
        self.page.set(page);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
