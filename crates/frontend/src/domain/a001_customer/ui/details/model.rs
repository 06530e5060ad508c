use crate::shared::api_utils::{send, ApiError};
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto};

/// POST the customer and read back the saved record
pub async fn save_form(dto: &CustomerDto) -> Result<Customer, ApiError> {
    let request = dto.submit_request()?;
    let response = send(&request).await?;
    let body = response.text().await?;

    Ok(saved_customer(dto, serde_json::from_str(&body)))
}

/// Customer to hand back after an ok response.
///
/// A body that is not a customer still counts as saved; the submitted
/// fields are returned instead.
pub fn saved_customer(submitted: &CustomerDto, body: serde_json::Result<Customer>) -> Customer {
    match body {
        Ok(customer) => customer,
        Err(e) => {
            log::warn!("Customer saved but response body was not readable: {}", e);
            Customer::from(submitted.clone())
        }
    }
}
