//! Application pages module
//!
//! Page components for the site:
//! - Landing page (home)
//! - Not found page (404)

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
