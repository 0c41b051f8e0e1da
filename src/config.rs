//! Build-time Configuration
//!
//! Values are baked in from environment variables when the WASM bundle is
//! built. Admin access stays disabled unless all three secrets are present.

use std::time::Duration;

use crate::session::AdminCredentials;

pub const DEFAULT_API_URL: &str = "https://functions.poehali.dev/1e42669b-4dde-4063-8682-1598ae18ca10";

/// Fixed refresh interval for every polled view
pub const POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Artificial "processing" step before an order is sent
pub const ORDER_DELAY: Duration = Duration::from_millis(3000);

const API_URL_VAR: &str = "GENLEVELING_API_URL";
const ADMIN_USER_VAR: &str = "GENLEVELING_ADMIN_USER";
const ADMIN_PASSWORD_VAR: &str = "GENLEVELING_ADMIN_PASSWORD";
const ADMIN_TOKEN_VAR: &str = "GENLEVELING_ADMIN_TOKEN";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub admin: Option<AdminCredentials>,
    pub poll_interval: Duration,
    pub order_delay: Duration,
}

impl AppConfig {
    /// Resolve from the variables captured at compile time
    pub fn from_build_env() -> Self {
        Self::from_vars(|name| match name {
            API_URL_VAR => option_env!("GENLEVELING_API_URL"),
            ADMIN_USER_VAR => option_env!("GENLEVELING_ADMIN_USER"),
            ADMIN_PASSWORD_VAR => option_env!("GENLEVELING_ADMIN_PASSWORD"),
            ADMIN_TOKEN_VAR => option_env!("GENLEVELING_ADMIN_TOKEN"),
            _ => None,
        })
    }

    pub fn from_vars<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let var = |name: &str| {
            lookup(name)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let api_url = var(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let admin = match (var(ADMIN_USER_VAR), var(ADMIN_PASSWORD_VAR), var(ADMIN_TOKEN_VAR)) {
            (Some(username), Some(password), Some(token)) => {
                Some(AdminCredentials::new(username, password, token))
            }
            _ => None,
        };

        Self {
            api_url,
            admin,
            poll_interval: POLL_INTERVAL,
            order_delay: ORDER_DELAY,
        }
    }

    /// Static admin-auth header value, if admin access is configured
    pub fn admin_token(&self) -> Option<String> {
        self.admin.as_ref().map(|creds| creds.token().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<&'a str> + 'a {
        move |name| vars.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_vars(|_| None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.admin.is_none());
        assert_eq!(config.poll_interval, Duration::from_millis(3000));
        assert_eq!(config.order_delay, Duration::from_millis(3000));
    }

    #[test]
    fn test_admin_requires_all_secrets() {
        let vars = [
            (ADMIN_USER_VAR, "skzry"),
            (ADMIN_PASSWORD_VAR, "568876Qqq"),
        ];
        let config = AppConfig::from_vars(lookup(&vars));
        assert!(config.admin.is_none());
        assert!(config.admin_token().is_none());
    }

    #[test]
    fn test_full_admin_config() {
        let vars = [
            (API_URL_VAR, " https://api.example.test "),
            (ADMIN_USER_VAR, "skzry"),
            (ADMIN_PASSWORD_VAR, "568876Qqq"),
            (ADMIN_TOKEN_VAR, "shared-secret"),
        ];
        let config = AppConfig::from_vars(lookup(&vars));
        assert_eq!(config.api_url, "https://api.example.test");
        assert_eq!(config.admin_token().as_deref(), Some("shared-secret"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let vars = [(API_URL_VAR, "  "), (ADMIN_TOKEN_VAR, "")];
        let config = AppConfig::from_vars(lookup(&vars));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.admin.is_none());
    }
}
