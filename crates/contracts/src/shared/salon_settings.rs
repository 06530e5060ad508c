use serde::{Deserialize, Serialize};

pub const DEFAULT_OPENS_AT: u32 = 9;
pub const DEFAULT_CLOSES_AT: u32 = 19;

/// Services offered when the caller does not supply its own list
pub const DEFAULT_SERVICES: [&str; 6] = [
    "Cut",
    "Blow-dry",
    "Cut & color",
    "Beard trim",
    "Cut & beard trim",
    "Extensions",
];

/// Opening hours and service catalogue of the salon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalonSettings {
    /// Hour of day (0-23) when the first slot starts
    pub opens_at: u32,
    /// Hour of day when the salon closes; the last slot ends here.
    /// Values past 24 are treated as midnight.
    pub closes_at: u32,
    pub selectable_services: Vec<String>,
}

impl Default for SalonSettings {
    fn default() -> Self {
        Self {
            opens_at: DEFAULT_OPENS_AT,
            closes_at: DEFAULT_CLOSES_AT,
            selectable_services: DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SalonSettings {
    pub fn with_hours(mut self, opens_at: u32, closes_at: u32) -> Self {
        self.opens_at = opens_at;
        self.closes_at = closes_at;
        self
    }

    pub fn with_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selectable_services = services.into_iter().map(Into::into).collect();
        self
    }
}
