use crate::shared::api_utils::{send, ApiError};
use contracts::domain::a002_appointment::aggregate::AppointmentDto;

pub async fn save_form(dto: &AppointmentDto) -> Result<(), ApiError> {
    let request = dto.submit_request()?;
    send(&request).await?;
    Ok(())
}
