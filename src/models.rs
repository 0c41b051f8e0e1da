//! Frontend Models
//!
//! Data structures matching the remote API's JSON records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Leveling service offered in the catalog (matches API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub requirements: String,
    /// Display-formatted price, e.g. "1500 ₽"
    pub price: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Customer order (matches API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub service_id: u32,
    /// Title captured by the API when the order was created
    pub service_title: String,
    pub phone: String,
    pub game_uid: String,
    pub telegram: String,
    pub status: OrderStatus,
}

/// Singleton site settings record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub site_description: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "GenLeveling".to_string(),
            site_description: String::new(),
        }
    }
}

/// Order lifecycle state.
///
/// Statuses the frontend does not know are kept verbatim in `Other` so a
/// newer API never breaks the order list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Other(raw) => raw,
        }
    }

    /// Localized badge text
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Ожидает",
            Self::Accepted => "Принято",
            Self::Rejected => "Отклонено",
            Self::Completed => "Выполнено",
            Self::Cancelled => "Отменено",
            Self::Other(raw) => raw,
        }
    }

    /// CSS modifier for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Pending => "badge pending",
            Self::Accepted => "badge accepted",
            Self::Rejected => "badge rejected",
            Self::Completed => "badge completed",
            Self::Cancelled | Self::Other(_) => "badge muted",
        }
    }

    /// Statuses an admin may move an order to from this one.
    pub fn next_statuses(&self) -> &'static [OrderStatus] {
        const FROM_PENDING: &[OrderStatus] = &[OrderStatus::Accepted, OrderStatus::Rejected];
        const FROM_ACCEPTED: &[OrderStatus] = &[OrderStatus::Completed, OrderStatus::Cancelled];
        match self {
            Self::Pending => FROM_PENDING,
            Self::Accepted => FROM_ACCEPTED,
            _ => &[],
        }
    }

    pub fn can_transition_to(&self, next: &OrderStatus) -> bool {
        self.next_statuses().contains(next)
    }

    pub fn is_terminal(&self) -> bool {
        self.next_statuses().is_empty()
    }

    /// Button caption for moving an order into this status
    pub fn action_label(&self) -> &str {
        match self {
            Self::Accepted => "Принять",
            Self::Rejected => "Отклонить",
            Self::Completed => "Выполнено",
            Self::Cancelled => "Отменено",
            other => other.label(),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => Self::Pending,
            "accepted" => Self::Accepted,
            "rejected" => Self::Rejected,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            _ => Self::Other(raw),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a public order submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    pub service_id: u32,
    pub phone: String,
    pub game_uid: String,
    pub telegram: String,
}

/// Body of an admin service creation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub price: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_service_defaults_to_active() {
        let json = r#"{"id":3,"title":"AR 60","description":"d","requirements":"r","price":"1500 ₽"}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert!(service.is_active);
        assert_eq!(service.price, "1500 ₽");
    }

    #[test]
    fn test_order_wire_names() {
        let json = r#"{
            "id": 7, "service_id": 3, "service_title": "AR 60",
            "phone": "+7 999", "game_uid": "123456789", "telegram": "@user",
            "status": "accepted"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.service_title, "AR 60");
        assert_eq!(order.status, OrderStatus::Accepted);
    }

    #[test]
    fn test_unknown_status_is_kept_and_terminal() {
        let status: OrderStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(status, OrderStatus::Other("in_progress".to_string()));
        assert_eq!(status.label(), "in_progress");
        assert!(status.is_terminal());
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"in_progress\"");
    }

    #[rstest]
    #[case(OrderStatus::Pending, &[OrderStatus::Accepted, OrderStatus::Rejected])]
    #[case(OrderStatus::Accepted, &[OrderStatus::Completed, OrderStatus::Cancelled])]
    #[case(OrderStatus::Rejected, &[])]
    #[case(OrderStatus::Completed, &[])]
    #[case(OrderStatus::Cancelled, &[])]
    fn test_transition_table(#[case] from: OrderStatus, #[case] expected: &[OrderStatus]) {
        assert_eq!(from.next_statuses(), expected);
    }

    #[test]
    fn test_completed_order_cannot_move() {
        let completed = OrderStatus::Completed;
        for next in [
            OrderStatus::Pending,
            OrderStatus::Accepted,
            OrderStatus::Rejected,
            OrderStatus::Cancelled,
        ] {
            assert!(!completed.can_transition_to(&next));
        }
    }

    #[test]
    fn test_settings_default_name() {
        let settings = SiteSettings::default();
        assert_eq!(settings.site_name, "GenLeveling");
        assert!(settings.site_description.is_empty());
    }

    #[test]
    fn test_new_order_serializes_snake_case() {
        let order = NewOrder {
            service_id: 1,
            phone: "p".into(),
            game_uid: "g".into(),
            telegram: "t".into(),
        };
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["service_id"], 1);
        assert_eq!(value["game_uid"], "g");
    }
}
