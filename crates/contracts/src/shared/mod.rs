pub mod salon_settings;
pub mod submission;
pub mod time_slots;
