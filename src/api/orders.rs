//! Order Calls

use serde::Serialize;

use super::{ApiClient, ApiRequest, Resource};
use crate::error::{ApiError, ValidationError};
use crate::models::{NewOrder, Order, OrderStatus};

/// A status change that has already been checked against the transition
/// table. The only way to build one is [`StatusChange::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusChange {
    order_id: u32,
    status: OrderStatus,
}

impl StatusChange {
    pub fn new(order: &Order, next: OrderStatus) -> Result<Self, ValidationError> {
        if !order.status.can_transition_to(&next) {
            return Err(ValidationError::ForbiddenTransition {
                from: order.status.clone(),
                to: next,
            });
        }
        Ok(Self { order_id: order.id, status: next })
    }

    pub fn order_id(&self) -> u32 {
        self.order_id
    }

    pub fn status(&self) -> &OrderStatus {
        &self.status
    }
}

pub fn list_orders_request() -> ApiRequest {
    ApiRequest::get(Resource::Orders).admin()
}

/// Order creation is public: no admin header
pub fn create_order_request(order: &NewOrder) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(Resource::Orders, order)
}

pub fn update_order_status_request(change: &StatusChange) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::put(Resource::OrdersStatus, change)?.admin())
}

impl ApiClient {
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.fetch(&list_orders_request()).await
    }

    pub async fn create_order(&self, order: &NewOrder) -> Result<(), ApiError> {
        self.execute(&create_order_request(order)?).await
    }

    pub async fn update_order_status(&self, change: &StatusChange) -> Result<(), ApiError> {
        self.execute(&update_order_status_request(change)?).await
    }
}
