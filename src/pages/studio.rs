//! Studio page - the whole single-page site.
//!
//! Hero, then the philosophy, works, process and team sections, then the
//! contact block and footer.

use dioxus::prelude::*;
use studioform_core::{Entrance, Tone};
use studioform_ui::{
    CardBody, CardEyebrow, CardRoot, CardTitle, RevealBlock, SectionContent, SectionHeader,
    SectionKicker, SectionLead, SectionRoot, SectionTitle,
};

use crate::components::{
    ContactForm, Hero, LucideIcon, NavHeader, SiteFooter, TeamCard, WorkTile,
};
use crate::content::{ordinal, PILLARS, STEPS, TEAM, WORKS};

/// Ids of every in-page section, in page order
pub const SECTION_IDS: [&str; 6] = ["hero", "philosophy", "works", "process", "team", "contact"];

#[component]
pub fn StudioPage() -> Element {
    rsx! {
        div { class: "theme-obsidian",
            div { class: "backdrop",
                div { class: "aurora aurora-1" }
                div { class: "aurora aurora-2" }
                div { class: "noise-overlay" }
            }

            NavHeader {}

            main {
                Hero {}
                Philosophy {}
                Works {}
                Process {}
                Team {}
                Contact {}
            }

            SiteFooter {}
        }
    }
}

#[component]
fn Philosophy() -> Element {
    rsx! {
        SectionRoot { id: "philosophy".to_string(),
            SectionHeader {
                SectionKicker { "Design Ethos" }
                SectionTitle { "Architecture that feels inevitable." }
                SectionLead {
                    "Our process balances emotional resonance and technical rigour so every space feels calm, clear and deeply livable."
                }
            }
            SectionContent { class: "grid grid-3".to_string(),
                for (i, pillar) in PILLARS.iter().enumerate() {
                    {
                        let label = format!("Principle {}", ordinal(i));
                        rsx! {
                            RevealBlock { key: "{pillar.title}", index: i, step_ms: 120,
                                CardRoot { tone: Tone::Warm,
                                    LucideIcon { icon: pillar.icon, class: "icon--lg".to_string() }
                                    CardEyebrow { "{label}" }
                                    CardTitle { "{pillar.title}" }
                                    CardBody { "{pillar.body}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Works() -> Element {
    rsx! {
        SectionRoot { id: "works".to_string(),
            SectionHeader {
                SectionKicker { "Portfolio" }
                SectionTitle { "Selected Works" }
            }
            SectionContent { class: "grid grid--tight grid-3 works-grid".to_string(),
                for (i, work) in WORKS.iter().enumerate() {
                    RevealBlock {
                        key: "{work.title}",
                        index: i,
                        step_ms: 80,
                        entrance: Entrance::Settle,
                        class: work.span.class().to_string(),
                        WorkTile { work: *work }
                    }
                }
            }
        }
    }
}

#[component]
fn Process() -> Element {
    rsx! {
        SectionRoot { id: "process".to_string(),
            SectionHeader {
                SectionKicker { "Method" }
                SectionTitle { "From brief to built form." }
            }
            SectionContent { class: "grid grid--tight grid-4".to_string(),
                for (i, step) in STEPS.iter().enumerate() {
                    {
                        let label = ordinal(i);
                        rsx! {
                            CardRoot { key: "{step.title}", tone: Tone::alternating(i),
                                CardEyebrow { "{label}" }
                                CardTitle { "{step.title}" }
                                CardBody { "{step.body}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Team() -> Element {
    rsx! {
        SectionRoot { id: "team".to_string(),
            SectionHeader {
                SectionKicker { "People" }
                SectionTitle { "The studio team" }
            }
            SectionContent { class: "grid grid-3".to_string(),
                for (i, member) in TEAM.iter().enumerate() {
                    RevealBlock { key: "{member.name}", index: i, step_ms: 100,
                        TeamCard { member: *member }
                    }
                }
            }
        }
    }
}

#[component]
fn Contact() -> Element {
    rsx! {
        section { id: "contact", class: "contact",
            div { class: "contact__grid",
                div {
                    p { class: "contact__kicker", "Contact" }
                    h2 { id: "contact-title", class: "contact__title", "Start your project" }
                    p { class: "contact__lead",
                        "Collingwood, Melbourne. Available for custom residential work across Victoria."
                    }
                }

                RevealBlock { ContactForm {} }
            }
        }
    }
}
