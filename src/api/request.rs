//! Request Descriptions
//!
//! Pure values describing a call against the remote API. Building a request
//! never touches the network, so the wire contract is checked by unit tests.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

use crate::error::ApiError;

/// Header carrying the static admin credential
pub const ADMIN_AUTH_HEADER: &str = "X-Admin-Auth";

/// Characters escaped inside the `path` query value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>');

/// Sub-resource selected through the `path` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Settings,
    Services,
    ServicesAll,
    ServicesUpdate,
    ServicesDelete,
    Orders,
    OrdersStatus,
}

impl Resource {
    pub fn as_path(self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Services => "services",
            Self::ServicesAll => "services/all",
            Self::ServicesUpdate => "services/update",
            Self::ServicesDelete => "services/delete",
            Self::Orders => "orders",
            Self::OrdersStatus => "orders/status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub resource: Resource,
    /// Attach the admin-auth header
    pub admin: bool,
    /// Serialized JSON body
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(resource: Resource) -> Self {
        Self { method: Method::Get, resource, admin: false, body: None }
    }

    pub fn post<T: Serialize>(resource: Resource, body: &T) -> Result<Self, ApiError> {
        Self::with_body(Method::Post, resource, body)
    }

    pub fn put<T: Serialize>(resource: Resource, body: &T) -> Result<Self, ApiError> {
        Self::with_body(Method::Put, resource, body)
    }

    fn with_body<T: Serialize>(method: Method, resource: Resource, body: &T) -> Result<Self, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self { method, resource, admin: false, body: Some(json) })
    }

    pub fn admin(mut self) -> Self {
        self.admin = true;
        self
    }

    pub fn url(&self, base_url: &str) -> String {
        let separator = if base_url.contains('?') { '&' } else { '?' };
        let path = utf8_percent_encode(self.resource.as_path(), QUERY_VALUE);
        format!("{}{}path={}", base_url, separator, path)
    }

    /// Headers to send, given the configured admin token
    pub fn headers<'a>(&self, admin_token: Option<&'a str>) -> Result<Vec<(&'static str, &'a str)>, ApiError> {
        let mut headers = Vec::new();
        if self.body.is_some() {
            headers.push(("Content-Type", "application/json"));
        }
        if self.admin {
            let token = admin_token.ok_or(ApiError::AdminNotConfigured)?;
            headers.push((ADMIN_AUTH_HEADER, token));
        }
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const BASE: &str = "https://api.example.test/fn";

    #[rstest]
    #[case(Resource::Settings, "https://api.example.test/fn?path=settings")]
    #[case(Resource::ServicesAll, "https://api.example.test/fn?path=services/all")]
    #[case(Resource::ServicesDelete, "https://api.example.test/fn?path=services/delete")]
    #[case(Resource::OrdersStatus, "https://api.example.test/fn?path=orders/status")]
    fn test_url_carries_path_query(#[case] resource: Resource, #[case] expected: &str) {
        assert_eq!(ApiRequest::get(resource).url(BASE), expected);
    }

    #[test]
    fn test_url_appends_to_existing_query() {
        let url = ApiRequest::get(Resource::Orders).url("https://api.example.test/fn?v=2");
        assert_eq!(url, "https://api.example.test/fn?v=2&path=orders");
    }

    #[test]
    fn test_public_get_has_no_headers() {
        let request = ApiRequest::get(Resource::Services);
        assert!(request.headers(Some("secret")).unwrap().is_empty());
    }

    #[test]
    fn test_body_sets_json_content_type() {
        let request = ApiRequest::post(Resource::Orders, &json!({"service_id": 1})).unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.headers(None).unwrap(), vec![("Content-Type", "application/json")]);
        assert_eq!(request.body.as_deref(), Some(r#"{"service_id":1}"#));
    }

    #[test]
    fn test_admin_header_uses_static_token() {
        let request = ApiRequest::put(Resource::ServicesDelete, &json!({"id": 4})).unwrap().admin();
        let headers = request.headers(Some("shared-secret")).unwrap();
        assert!(headers.contains(&(ADMIN_AUTH_HEADER, "shared-secret")));
    }

    #[test]
    fn test_admin_request_without_token_fails() {
        let request = ApiRequest::get(Resource::Orders).admin();
        assert_eq!(request.headers(None), Err(ApiError::AdminNotConfigured));
    }
}
