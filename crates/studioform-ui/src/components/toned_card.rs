//! Toned Card Components
//!
//! Glass card scaffold whose label accent follows a single tone:
//! - Warm: peach eyebrow over a warm panel
//! - Cool: pale blue eyebrow over a cool panel
//!
//! Titles and body copy look the same in both tones.

use dioxus::prelude::*;
use studioform_core::{HoverLift, Tone};

use super::join_classes;
use crate::motion::use_motion_preference;

/// Tone a card root shares with its slots
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CardContext {
    pub tone: Tone,
}

/// Tone of the enclosing card; warm when there is none
pub fn use_card_tone() -> Tone {
    try_use_context::<CardContext>()
        .map(|context| context.tone)
        .unwrap_or_default()
}

/// Card shell that lifts on hover.
///
/// The tone is captured when the card mounts; a different tone means a
/// different card.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CardRoot { tone: Tone::Cool,
///         CardEyebrow { "02" }
///         CardTitle { "Concept" }
///         CardBody { "Options, daylight studies and material narratives." }
///     }
/// }
/// ```
#[component]
pub fn CardRoot(
    /// Accent tone for the card's labels
    #[props(default)]
    tone: Tone,
    /// Additional CSS classes
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    let context = use_context_provider(|| CardContext { tone });
    let motion = use_motion_preference();
    let mut hovered = use_signal(|| false);

    let lift = HoverLift::default();
    let transition = use_hook(move || motion.enabled.then(|| lift.transition()));
    let style = lift.style(hovered(), transition.as_deref());

    let tone = context.tone;
    let base = format!("glass-panel {} toned-card", tone.panel_class());
    let full_class = join_classes(&base, class.as_deref());
    let tone_name = tone.as_str();

    rsx! {
        article {
            class: "{full_class}",
            style: "{style}",
            "data-tone": "{tone_name}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            {children}
        }
    }
}

/// Small uppercase label in the card's accent color
#[component]
pub fn CardEyebrow(children: Element) -> Element {
    let tone = use_card_tone();
    let tone_class = tone.eyebrow_class();
    let accent = tone.accent();

    rsx! {
        p {
            class: "toned-card__eyebrow {tone_class}",
            style: "color: {accent};",
            {children}
        }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "toned-card__title", {children} }
    }
}

#[component]
pub fn CardBody(children: Element) -> Element {
    rsx! {
        p { class: "toned-card__body", {children} }
    }
}
