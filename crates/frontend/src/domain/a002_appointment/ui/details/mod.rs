//! Appointment Details UI Module
//!
//! - model.rs: API function (save)
//! - view_model.rs: ViewModel with commands and state management
//! - time_slot_table.rs: weekly grid of bookable slots
//! - view.rs: Leptos component (pure UI)

mod model;
mod time_slot_table;
mod view;
mod view_model;

pub use time_slot_table::TimeSlotTable;
pub use view::AppointmentForm;
pub use view_model::AppointmentDetailsViewModel;
