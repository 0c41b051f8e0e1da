//! Form State & Validation
//!
//! Plain structs bound to inputs; `validate` turns them into request bodies
//! or rejects them before any network call.

use crate::error::ValidationError;
use crate::models::{NewOrder, NewService, Service};

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Catalog order dialog fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub phone: String,
    pub game_uid: String,
    pub telegram: String,
}

impl OrderForm {
    pub fn validate(&self, service_id: Option<u32>) -> Result<NewOrder, ValidationError> {
        let service_id = service_id.ok_or(ValidationError::MissingField("service"))?;
        Ok(NewOrder {
            service_id,
            phone: required(&self.phone, "phone")?,
            game_uid: required(&self.game_uid, "game_uid")?,
            telegram: required(&self.telegram, "telegram")?,
        })
    }
}

/// Admin create/edit service fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceForm {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub price: String,
}

impl ServiceForm {
    pub fn validate(&self) -> Result<NewService, ValidationError> {
        Ok(NewService {
            title: required(&self.title, "title")?,
            description: required(&self.description, "description")?,
            requirements: required(&self.requirements, "requirements")?,
            price: required(&self.price, "price")?,
        })
    }

    /// Validate edits against an existing service, keeping its id and
    /// activity flag
    pub fn validate_update(&self, original: &Service) -> Result<Service, ValidationError> {
        let fields = self.validate()?;
        Ok(Service {
            id: original.id,
            title: fields.title,
            description: fields.description,
            requirements: fields.requirements,
            price: fields.price,
            is_active: original.is_active,
        })
    }
}

impl From<&Service> for ServiceForm {
    fn from(service: &Service) -> Self {
        Self {
            title: service.title.clone(),
            description: service.description.clone(),
            requirements: service.requirements.clone(),
            price: service.price.clone(),
        }
    }
}

/// Login form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn filled_order() -> OrderForm {
        OrderForm {
            phone: "+7 (999) 123-45-67".into(),
            game_uid: "123456789".into(),
            telegram: "@username".into(),
        }
    }

    #[test]
    fn test_valid_order() {
        let order = filled_order().validate(Some(4)).unwrap();
        assert_eq!(order.service_id, 4);
        assert_eq!(order.telegram, "@username");
    }

    #[rstest]
    #[case("phone")]
    #[case("game_uid")]
    #[case("telegram")]
    fn test_order_field_required(#[case] field: &'static str) {
        let mut form = filled_order();
        match field {
            "phone" => form.phone = "   ".into(),
            "game_uid" => form.game_uid.clear(),
            _ => form.telegram.clear(),
        }
        assert_eq!(form.validate(Some(1)), Err(ValidationError::MissingField(field)));
    }

    #[test]
    fn test_order_needs_selected_service() {
        assert_eq!(
            filled_order().validate(None),
            Err(ValidationError::MissingField("service"))
        );
    }

    #[test]
    fn test_service_form_requires_all_fields() {
        let form = ServiceForm {
            title: "Прокачка до AR 60".into(),
            price: "1500 ₽".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("description")));
    }

    #[test]
    fn test_update_keeps_identity() {
        let original = Service {
            id: 8,
            title: "Old".into(),
            description: "d".into(),
            requirements: "r".into(),
            price: "100 ₽".into(),
            is_active: true,
        };
        let mut form = ServiceForm::from(&original);
        form.title = "  New  ".into();
        let updated = form.validate_update(&original).unwrap();
        assert_eq!(updated.id, 8);
        assert_eq!(updated.title, "New");
        assert!(updated.is_active);
    }
}
