//! Work Tile Component
//!
//! Portfolio entry sized by its grid span.

use dioxus::prelude::*;

use crate::content::Work;

#[derive(Props, Clone, PartialEq)]
pub struct WorkTileProps {
    pub work: Work,
}

#[component]
pub fn WorkTile(props: WorkTileProps) -> Element {
    let work = props.work;

    rsx! {
        article { class: "work-tile",
            div { class: "work-tile__shade" }
            div { class: "work-tile__body",
                p { class: "work-tile__meta", "{work.kind} · {work.year}" }
                h3 { class: "work-tile__title", "{work.title}" }
                p { class: "work-tile__location", "{work.location}" }
            }
        }
    }
}
