//! Remote API Client
//!
//! Thin wrappers over the single JSON endpoint, organized by domain.

mod orders;
mod request;
mod services;
mod settings;

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub use orders::StatusChange;
pub use request::{ApiRequest, Method, Resource};

/// Handle for the remote API. Cheap to clone.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    admin_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, admin_token: Option<String>) -> Self {
        Self { base_url: base_url.into(), admin_token }
    }

    /// Send a request and return the raw body of a 2xx response
    pub async fn send(&self, request: &ApiRequest) -> Result<String, ApiError> {
        let url = request.url(&self.base_url);
        let headers = request.headers(self.admin_token.as_deref())?;

        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
        };
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        let prepared = match &request.body {
            Some(body) => builder.body(body.clone())?,
            None => builder.build()?,
        };

        tracing::debug!(method = ?request.method, path = request.resource.as_path(), "api request");
        let response = prepared.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !response.ok() {
            tracing::warn!(status, path = request.resource.as_path(), "api request failed");
            return Err(ApiError::Status { status, body });
        }
        Ok(body)
    }

    /// Send a request and decode the JSON response
    pub async fn fetch<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, ApiError> {
        let body = self.send(request).await?;
        decode(&body)
    }

    /// Send a mutating request whose response body is ignored
    pub async fn execute(&self, request: &ApiRequest) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }
}

pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
