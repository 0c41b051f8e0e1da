//! Site Settings Calls

use super::{ApiClient, ApiRequest, Resource};
use crate::error::ApiError;
use crate::models::SiteSettings;

pub fn get_settings_request() -> ApiRequest {
    ApiRequest::get(Resource::Settings)
}

pub fn update_settings_request(settings: &SiteSettings) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::put(Resource::Settings, settings)?.admin())
}

impl ApiClient {
    /// Public read of the singleton settings record
    pub async fn get_settings(&self) -> Result<SiteSettings, ApiError> {
        self.fetch(&get_settings_request()).await
    }

    /// Overwrite the settings record wholesale
    pub async fn update_settings(&self, settings: &SiteSettings) -> Result<(), ApiError> {
        self.execute(&update_settings_request(settings)?).await
    }
}
