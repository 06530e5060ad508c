use serde::{Deserialize, Serialize};

use crate::shared::submission::{SubmitRequest, CUSTOMERS_ENDPOINT};

// ============================================================================
// Form fields
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    FirstName,
    LastName,
    PhoneNumber,
}

impl CustomerField {
    /// Render order on the form
    pub const ALL: [CustomerField; 3] = [
        CustomerField::FirstName,
        CustomerField::LastName,
        CustomerField::PhoneNumber,
    ];

    /// `name` and `id` attribute of the text input
    pub fn name(&self) -> &'static str {
        match self {
            CustomerField::FirstName => "firstName",
            CustomerField::LastName => "lastName",
            CustomerField::PhoneNumber => "phoneNumber",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CustomerField::FirstName => "First name",
            CustomerField::LastName => "Last name",
            CustomerField::PhoneNumber => "Phone number",
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// State of the customer form, posted as-is
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerDto {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl CustomerDto {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
        }
    }

    pub fn value(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::FirstName => &self.first_name,
            CustomerField::LastName => &self.last_name,
            CustomerField::PhoneNumber => &self.phone_number,
        }
    }

    pub fn apply_change(&mut self, field: CustomerField, value: &str) {
        let target = match field {
            CustomerField::FirstName => &mut self.first_name,
            CustomerField::LastName => &mut self.last_name,
            CustomerField::PhoneNumber => &mut self.phone_number,
        };
        *target = value.to_string();
    }

    pub fn submit_request(&self) -> serde_json::Result<SubmitRequest> {
        SubmitRequest::post_json(CUSTOMERS_ENDPOINT, self)
    }
}

// ============================================================================
// Saved customer
// ============================================================================

/// Customer as returned by the server after a successful save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub fields: CustomerDto,
}

impl From<CustomerDto> for Customer {
    fn from(fields: CustomerDto) -> Self {
        Self { id: None, fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_metadata() {
        let names: Vec<&str> = CustomerField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["firstName", "lastName", "phoneNumber"]);
        assert_eq!(CustomerField::PhoneNumber.label(), "Phone number");
    }

    #[test]
    fn test_change_only_touches_one_field() {
        let mut dto = CustomerDto::new("Ashley", "Jones", "1234567");
        dto.apply_change(CustomerField::LastName, "Vihrogonova");
        assert_eq!(dto, CustomerDto::new("Ashley", "Vihrogonova", "1234567"));
        assert_eq!(dto.value(CustomerField::LastName), "Vihrogonova");
    }

    #[test]
    fn test_submit_request_carries_whole_state() {
        let mut dto = CustomerDto::new("Anna", "existingValue", "1234567");
        dto.apply_change(CustomerField::LastName, "lastName");
        let request = dto.submit_request().unwrap();

        assert_eq!(request.path, "/customers");
        assert_eq!(request.content_type, "application/json");
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(
            body,
            json!({ "firstName": "Anna", "lastName": "lastName", "phoneNumber": "1234567" })
        );
    }

    #[test]
    fn test_saved_customer_response() {
        let customer: Customer = serde_json::from_value(json!({
            "id": 123,
            "firstName": "Anna",
            "lastName": "Jones",
            "phoneNumber": "1234567"
        }))
        .unwrap();
        assert_eq!(customer.id, Some(123));
        assert_eq!(customer.fields.first_name, "Anna");

        let id_only: Customer = serde_json::from_value(json!({ "id": 7 })).unwrap();
        assert_eq!(id_only.id, Some(7));
        assert_eq!(id_only.fields, CustomerDto::default());

        let unsaved = Customer::from(CustomerDto::default());
        assert_eq!(unsaved.id, None);
        assert_eq!(
            serde_json::to_value(&unsaved).unwrap(),
            json!({ "firstName": "", "lastName": "", "phoneNumber": "" })
        );
    }
}
