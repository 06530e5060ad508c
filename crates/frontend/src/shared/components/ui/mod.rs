pub mod button;
pub mod input;
pub mod radio;
pub mod select;

pub use button::SubmitButton;
pub use input::Input;
pub use radio::Radio;
pub use select::Select;
