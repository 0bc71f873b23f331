//! Team Card Component
//!
//! Portrait placeholder above name, role and bio. Uses the cool panel
//! without the card hover lift.

use dioxus::prelude::*;
use studioform_core::Tone;

use crate::content::TeamMember;

#[component]
pub fn TeamCard(member: TeamMember) -> Element {
    let class = format!("glass-panel {} team-card", Tone::Cool.panel_class());

    rsx! {
        article { class: "{class}",
            div { class: "team-card__portrait", "Portrait" }
            div { class: "team-card__body",
                h3 { class: "team-card__name", "{member.name}" }
                p { class: "team-card__role", "{member.role}" }
                p { class: "team-card__bio", "{member.bio}" }
            }
        }
    }
}
