//! Scroll and pointer math for the page effects.
//!
//! The numbers live here, separate from the DOM wiring in `ui`, so the
//! behaviors can be unit tested without a browser.

/// Scroll depth past which the fixed navbar gets a drop shadow.
pub const NAVBAR_SHADOW_THRESHOLD: f64 = 50.0;

/// Height of the fixed navbar, subtracted when scrolling to an anchor.
pub const NAVBAR_OFFSET: f64 = 80.0;

/// Fraction of the scroll distance the hero background moves.
pub const PARALLAX_FACTOR: f64 = 0.5;

/// Per-element delay step for staggered scroll-reveal animations.
pub const STAGGER_STEP_MS: u32 = 100;

/// How long a CTA ripple lives before it is removed.
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// Whether the navbar should cast a shadow at this scroll depth.
pub fn navbar_elevated(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SHADOW_THRESHOLD
}

/// Vertical offset of the hero background at this scroll depth.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

/// Scroll target for an in-page anchor, accounting for the fixed navbar.
/// Clamped so near-top sections do not scroll to a negative position.
pub fn anchor_scroll_top(section_top: f64) -> f64 {
    (section_top - NAVBAR_OFFSET).max(0.0)
}

/// Reveal delay for the nth element entering the viewport in one
/// intersection batch.
pub fn stagger_delay_ms(index: u32) -> u32 {
    index * STAGGER_STEP_MS
}

/// Ripple center relative to the button, from page-space pointer
/// coordinates and the button's page offset.
pub fn ripple_origin(page_x: f64, page_y: f64, offset_left: f64, offset_top: f64) -> (f64, f64) {
    (page_x - offset_left, page_y - offset_top)
}
