use serde::{Deserialize, Serialize};

use crate::shared::submission::{SubmitRequest, APPOINTMENT_ENDPOINT};
use crate::shared::time_slots::{parse_timestamp, Timestamp};

// ============================================================================
// Available slots
// ============================================================================

/// Slot the salon can still take a booking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTimeSlot {
    pub starts_at: Timestamp,
}

impl AvailableTimeSlot {
    pub fn new(starts_at: Timestamp) -> Self {
        Self { starts_at }
    }
}

// ============================================================================
// Form fields
// ============================================================================

/// Label of the service select; the slot grid carries no label
pub const SERVICE_LABEL: &str = "Services";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentField {
    Service,
    StartsAt,
}

impl AppointmentField {
    /// `name` (and `id`) attribute of the form control
    pub fn name(&self) -> &'static str {
        match self {
            AppointmentField::Service => "service",
            AppointmentField::StartsAt => "startsAt",
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// State of the appointment form, posted as-is
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDto {
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<Timestamp>,
}

impl AppointmentDto {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            starts_at: None,
        }
    }

    pub fn with_starts_at(mut self, starts_at: Timestamp) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    /// Merge a raw control value into the state.
    ///
    /// A `startsAt` value that is not a timestamp leaves the state untouched.
    pub fn apply_change(&mut self, field: AppointmentField, value: &str) {
        match field {
            AppointmentField::Service => self.service = value.to_string(),
            AppointmentField::StartsAt => {
                if let Some(starts_at) = parse_timestamp(value) {
                    self.starts_at = Some(starts_at);
                }
            }
        }
    }

    pub fn submit_request(&self) -> serde_json::Result<SubmitRequest> {
        SubmitRequest::post_json(APPOINTMENT_ENDPOINT, self)
    }
}
