//! Studio Form UI Components
//!
//! This crate provides the two compound components every content section of
//! the site is assembled from:
//!
//! - **Layout section**: `SectionRoot` with `SectionHeader`, `SectionKicker`,
//!   `SectionTitle`, `SectionLead` and `SectionContent` slots
//! - **Toned card**: `CardRoot` with `CardEyebrow`, `CardTitle` and
//!   `CardBody` slots
//!
//! Roots hand their configuration (section identifier, card tone) to the
//! slots through Dioxus context, so slots never repeat it.
//!
//! ## Motion
//!
//! Section headers fade up once when they first scroll into view and cards
//! lift on hover. Both respect [`MotionPreference`]; with motion disabled,
//! headers render revealed and cards change without easing.

pub mod components;
pub mod motion;
pub mod styles;

pub use components::*;
pub use motion::{
    use_motion_preference, use_reveal, use_scroll_progress, MotionPreference, MotionProvider,
};
pub use styles::COMPONENT_STYLES;
