//! Service Catalog Calls

use serde::Serialize;

use super::{ApiClient, ApiRequest, Resource};
use crate::error::ApiError;
use crate::models::{NewService, Service};

/// Soft-delete body. `id` is the only key sent; `serviceId` is not used.
#[derive(Serialize)]
struct DeleteServiceArgs {
    id: u32,
}

pub fn list_active_services_request() -> ApiRequest {
    ApiRequest::get(Resource::Services)
}

pub fn list_all_services_request() -> ApiRequest {
    ApiRequest::get(Resource::ServicesAll).admin()
}

pub fn create_service_request(service: &NewService) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::post(Resource::Services, service)?.admin())
}

pub fn update_service_request(service: &Service) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::put(Resource::ServicesUpdate, service)?.admin())
}

pub fn delete_service_request(service_id: u32) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::put(Resource::ServicesDelete, &DeleteServiceArgs { id: service_id })?.admin())
}

/// Keep only active rows
pub fn active_only(services: Vec<Service>) -> Vec<Service> {
    services.into_iter().filter(|s| s.is_active).collect()
}

impl ApiClient {
    pub async fn list_active_services(&self) -> Result<Vec<Service>, ApiError> {
        let services = self.fetch(&list_active_services_request()).await?;
        Ok(active_only(services))
    }

    /// Active and inactive services (admin)
    pub async fn list_all_services(&self) -> Result<Vec<Service>, ApiError> {
        self.fetch(&list_all_services_request()).await
    }

    pub async fn create_service(&self, service: &NewService) -> Result<(), ApiError> {
        self.execute(&create_service_request(service)?).await
    }

    pub async fn update_service(&self, service: &Service) -> Result<(), ApiError> {
        self.execute(&update_service_request(service)?).await
    }

    /// Marks the service inactive; the row stays in the admin list
    pub async fn delete_service(&self, service_id: u32) -> Result<(), ApiError> {
        self.execute(&delete_service_request(service_id)?).await
    }
}
