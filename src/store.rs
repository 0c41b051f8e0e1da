//! Admin Console State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each poll tick
//! replaces a collection wholesale.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ValidationError;
use crate::models::{Order, Service, SiteSettings};

/// Console state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ConsoleState {
    /// All orders, newest first as returned by the API
    pub orders: Vec<Order>,
    /// Active and inactive services
    pub services: Vec<Service>,
    /// Settings form draft
    pub settings: SiteSettings,
    /// Set once the draft holds the stored settings
    pub settings_loaded: bool,
}

/// Type alias for the store
pub type ConsoleStore = Store<ConsoleState>;

/// Get the console store from context
pub fn use_console_store() -> ConsoleStore {
    expect_context::<ConsoleStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the order list with the latest poll result. An unchanged list
/// is not written, so views do not re-render.
pub fn store_replace_orders(store: &ConsoleStore, orders: Vec<Order>) {
    if *store.orders().read_untracked() != orders {
        *store.orders().write() = orders;
    }
}

/// Replace the service list with the latest poll result
pub fn store_replace_services(store: &ConsoleStore, services: Vec<Service>) {
    if *store.services().read_untracked() != services {
        *store.services().write() = services;
    }
}

/// Fill the settings draft from the first successful fetch. Later fetches
/// are ignored so edits in progress survive. Returns whether the draft was
/// written.
pub fn store_load_settings(store: &ConsoleStore, settings: SiteSettings) -> bool {
    if store.settings_loaded().get_untracked() {
        return false;
    }
    *store.settings().write() = settings;
    store.settings_loaded().set(true);
    true
}

/// The draft to PUT on save, refused until the stored settings were loaded
pub fn store_settings_to_save(store: &ConsoleStore) -> Result<SiteSettings, ValidationError> {
    if !store.settings_loaded().get_untracked() {
        return Err(ValidationError::SettingsNotLoaded);
    }
    Ok(store.settings().get_untracked())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderStatus;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn order(id: u32, status: &str) -> Order {
        Order {
            id,
            service_id: 1,
            service_title: "AR 60".into(),
            phone: "+79991234567".into(),
            game_uid: "700123456".into(),
            telegram: "@player".into(),
            status: OrderStatus::from(status.to_string()),
        }
    }

    fn service(id: u32, is_active: bool) -> Service {
        Service {
            id,
            title: "Прокачка AR".into(),
            description: "До 60 ранга".into(),
            requirements: "Доступ к аккаунту".into(),
            price: "1500".into(),
            is_active,
        }
    }

    /// Memo over a store field that counts how often it recomputes
    fn watch<T, F>(read: F) -> (Memo<T>, Arc<AtomicUsize>)
    where
        T: Clone + PartialEq + Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let memo = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            read()
        });
        memo.get_untracked();
        (memo, runs)
    }

    #[test]
    fn test_equal_orders_do_not_notify() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(ConsoleState::default());
        store_replace_orders(&store, vec![order(1, "pending"), order(2, "accepted")]);

        let (memo, runs) = watch(move || store.orders().read().len());
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        store_replace_orders(&store, vec![order(1, "pending"), order(2, "accepted")]);
        assert_eq!(memo.get_untracked(), 2);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_changed_orders_notify() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(ConsoleState::default());
        store_replace_orders(&store, vec![order(1, "pending")]);

        let (memo, runs) = watch(move || {
            store.orders().read().iter().map(|o| o.status.as_str().to_string()).collect::<Vec<_>>()
        });

        store_replace_orders(&store, vec![order(1, "accepted")]);
        assert_eq!(memo.get_untracked(), vec!["accepted".to_string()]);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_services_replaced_only_when_changed() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(ConsoleState::default());
        store_replace_services(&store, vec![service(1, true)]);

        let (memo, runs) =
            watch(move || store.services().read().iter().filter(|s| s.is_active).count());

        store_replace_services(&store, vec![service(1, true)]);
        assert_eq!(memo.get_untracked(), 1);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        store_replace_services(&store, vec![service(1, false)]);
        assert_eq!(memo.get_untracked(), 0);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_save_before_load_is_refused() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(ConsoleState::default());

        assert_eq!(store_settings_to_save(&store), Err(ValidationError::SettingsNotLoaded));
    }

    #[test]
    fn test_save_after_load_returns_draft() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(ConsoleState::default());
        let stored = SiteSettings {
            site_name: "GenLeveling".into(),
            site_description: "Прокачка без бана".into(),
        };

        assert!(store_load_settings(&store, stored.clone()));
        assert_eq!(store_settings_to_save(&store), Ok(stored));
    }

    #[test]
    fn test_later_load_keeps_edits() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(ConsoleState::default());
        store_load_settings(&store, SiteSettings::default());
        store.settings().write().site_name = "Edited".into();

        let reloaded = SiteSettings { site_name: "Server".into(), site_description: String::new() };
        assert!(!store_load_settings(&store, reloaded));
        assert_eq!(store_settings_to_save(&store).unwrap().site_name, "Edited");
    }
}
