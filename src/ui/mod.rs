pub mod common;
pub mod pages;
pub mod scroll_fx;
pub mod waitlist;

pub use scroll_fx::{provide_scroll_position, scroll_to_section};
pub use waitlist::WaitlistForm;
