//! Common reusable UI components

pub mod button;
pub mod form;
pub mod message;

pub use button::CtaButton;
pub use form::{FormField, SelectField};
pub use message::ErrorMessage;
