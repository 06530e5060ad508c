use contracts::domain::a002_appointment::aggregate::AvailableTimeSlot;
use contracts::shared::salon_settings::SalonSettings;
use serde::{Deserialize, Serialize};

/// Id of the `<script type="application/json">` element the host page fills in
pub const BOOKING_DATA_ELEMENT_ID: &str = "booking-data";

/// Data the host page hands to the forms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingData {
    pub settings: SalonSettings,
    pub available_time_slots: Vec<AvailableTimeSlot>,
}

impl BookingData {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read the embedded booking data, falling back to defaults
    pub fn from_document() -> Self {
        let Some(text) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(BOOKING_DATA_ELEMENT_ID))
            .and_then(|e| e.text_content())
        else {
            log::debug!("No #{} element, using default salon settings", BOOKING_DATA_ELEMENT_ID);
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Invalid #{} contents: {}", BOOKING_DATA_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}
