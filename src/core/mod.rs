//! Core domain logic for the Survade landing page

pub mod analytics;
#[cfg(feature = "ssr")]
pub mod config;
pub mod effects;
pub mod submit;
pub mod waitlist;

#[cfg(test)]
mod tests;
