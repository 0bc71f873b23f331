//! Reveal Block Component
//!
//! Wraps grid items so they fade in sequence the first time each one
//! scrolls into view, either rising or settling from a slightly smaller
//! scale.

use dioxus::prelude::*;
use studioform_core::{Entrance, ViewportAmount};

use super::join_classes;
use crate::motion::{next_element_id, use_reveal};

/// Block revealed once on first view, delayed by its position in a grid
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for (i, pillar) in PILLARS.iter().enumerate() {
///         RevealBlock { key: "{pillar.title}", index: i, step_ms: 120,
///             CardRoot { /* ... */ }
///         }
///     }
/// }
/// ```
#[component]
pub fn RevealBlock(
    /// Position within the grid
    #[props(default = 0)]
    index: usize,
    /// Extra delay per position, in milliseconds
    #[props(default = 100)]
    step_ms: u32,
    /// How the block moves into place
    #[props(default)]
    entrance: Entrance,
    /// Additional CSS classes
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    let element_id = use_hook(|| next_element_id("reveal-block"));
    let reveal = use_reveal(element_id.clone(), ViewportAmount::ANY);

    let style = reveal.read().staggered_style(entrance, index, step_ms);
    let full_class = join_classes("reveal-block", class.as_deref());

    rsx! {
        div {
            id: "{element_id}",
            class: "{full_class}",
            style: "{style}",
            {children}
        }
    }
}
