//! Hero Component
//!
//! Full-height opening section. The glow behind the headline drifts up as
//! the page scrolls.

use dioxus::prelude::*;
use studioform_core::{ScrollMapping, Tone};
use studioform_ui::use_scroll_progress;

use crate::components::icons::{Icon, LucideIcon};

#[component]
pub fn Hero() -> Element {
    let progress = use_scroll_progress();
    let offset = ScrollMapping::hero_parallax().map(progress());
    let panel_class = format!("glass-panel {} hero__panel", Tone::Cool.panel_class());

    rsx! {
        section { id: "hero", class: "hero",
            div {
                class: "hero__backdrop",
                style: "transform: translateY({offset}px);",
                div { class: "hero__glow" }
            }

            div { class: "hero__grid",
                div { class: "hero__intro",
                    p { class: "hero__eyebrow", "Melbourne Architecture Studio" }
                    h1 { class: "hero__title", "Form, Atmosphere, Legacy." }
                    p { class: "hero__lead",
                        "High-performance residential architecture with tactile material palettes, quiet luxury, and daylight-first planning."
                    }
                    a { class: "hero__cta", href: "#works",
                        "Explore Projects"
                        LucideIcon { icon: Icon::MoveRight, class: "icon--sm".to_string() }
                    }
                }

                div { class: "{panel_class}",
                    div { class: "spotlight-frame",
                        div { class: "spotlight-frame__inner",
                            span { class: "spotlight-frame__label", "Atmosphere study" }
                            span { class: "spotlight-frame__caption",
                                "Stone, timber, and filtered western light."
                            }
                        }
                    }
                }
            }
        }
    }
}
