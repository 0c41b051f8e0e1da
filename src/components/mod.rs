//! UI Components
//!
//! Leptos components for the shell, catalog and admin console.

mod admin_console;
mod admin_page;
mod home_page;
mod login_form;
mod nav_bar;
mod order_dialog;
mod order_list;
mod service_fields;
mod service_manager;
mod services_page;
mod settings_form;
mod toast_host;

pub use admin_console::AdminConsole;
pub use admin_page::AdminPage;
pub use home_page::HomePage;
pub use login_form::LoginForm;
pub use nav_bar::NavBar;
pub use order_dialog::OrderDialog;
pub use order_list::OrderList;
pub use service_fields::ServiceFields;
pub use service_manager::ServiceManager;
pub use services_page::ServicesPage;
pub use settings_form::SettingsForm;
pub use toast_host::ToastHost;
