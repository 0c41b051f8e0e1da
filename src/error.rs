//! Error Types

use thiserror::Error;

use crate::models::OrderStatus;

/// Failure talking to the remote API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("admin access is not configured")]
    AdminNotConfigured,
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Client-side rejection that blocks a network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Заполните все поля")]
    MissingField(&'static str),

    #[error("Переход из статуса «{}» в «{}» недоступен", .from.label(), .to.label())]
    ForbiddenTransition { from: OrderStatus, to: OrderStatus },

    #[error("Настройки ещё не загружены")]
    SettingsNotLoaded,
}
