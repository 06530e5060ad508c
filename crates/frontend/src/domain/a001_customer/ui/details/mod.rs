//! Customer Details UI Module
//!
//! - model.rs: API function (save)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::CustomerForm;
pub use view_model::CustomerDetailsViewModel;
