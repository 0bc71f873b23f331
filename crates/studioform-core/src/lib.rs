//! Studio Form Core Library
//!
//! Framework-free building blocks for the Studio Form site components.
//!
//! ## Overview
//!
//! The UI crate renders two compound components, a layout section and a
//! toned card. Everything they decide that is not markup lives here:
//!
//! - **Tone**: warm/cool accent palette for card labels
//! - **Section config**: validated anchor identifiers and derived heading ids
//! - **Reveal**: one-shot, visibility-triggered entrance state
//! - **Hover lift**: card lift transform and its spring easing
//! - **Scroll**: scroll progress and clamped range mapping for parallax
//!
//! ## Quick Start
//!
//! ```
//! use studioform_core::{RevealState, SectionConfig, Tone, ViewportAmount};
//!
//! let config = SectionConfig::with_identifier("team").unwrap();
//! assert_eq!(config.title_anchor().as_deref(), Some("team-title"));
//!
//! assert_eq!(Tone::default(), Tone::Warm);
//!
//! let mut reveal = RevealState::new();
//! assert!(reveal.observe(0.5, ViewportAmount::default()));
//! assert!(!reveal.observe(0.9, ViewportAmount::default()));
//! ```

pub mod error;
pub mod hover;
pub mod reveal;
pub mod scroll;
pub mod section;
pub mod spring;
pub mod tone;

// Re-exports
pub use error::{LayoutError, Result};
pub use hover::HoverLift;
pub use reveal::{Entrance, RevealState, ViewportAmount};
pub use scroll::{scroll_progress, ScrollMapping};
pub use section::{AnchorId, SectionConfig, TITLE_ANCHOR_SUFFIX};
pub use spring::Spring;
pub use tone::{Tone, COOL_ACCENT, WARM_ACCENT};
