//! Navigation Header Component
//!
//! Desktop: wordmark with inline section links
//! Mobile: wordmark with a menu toggle that drops the links down

use dioxus::prelude::*;

use crate::components::icons::{Icon, LucideIcon};
use crate::content::{NAV_LINKS, STUDIO_NAME};

/// Fixed site header with in-page navigation
#[component]
pub fn NavHeader() -> Element {
    let mut menu_open = use_signal(|| false);

    let toggle_label = if menu_open() { "Close menu" } else { "Open menu" };
    let toggle_icon = if menu_open() { Icon::Close } else { Icon::Menu };

    rsx! {
        header { class: "site-nav",
            div { class: "site-nav__inner",
                a { class: "wordmark", href: "#hero", "{STUDIO_NAME}" }

                nav { class: "site-nav__links",
                    for link in NAV_LINKS.iter() {
                        a {
                            key: "{link.href}",
                            class: "site-nav__link",
                            href: "{link.href}",
                            "{link.label}"
                        }
                    }
                }

                button {
                    class: "menu-toggle",
                    r#type: "button",
                    "aria-label": "{toggle_label}",
                    "aria-expanded": if menu_open() { "true" } else { "false" },
                    onclick: move |_| menu_open.toggle(),
                    LucideIcon { icon: toggle_icon }
                }
            }

            // Mobile drop-down
            div {
                class: if menu_open() { "mobile-menu open" } else { "mobile-menu" },
                div { class: "mobile-menu__links",
                    for link in NAV_LINKS.iter() {
                        a {
                            key: "{link.href}",
                            class: "mobile-menu__link",
                            href: "{link.href}",
                            onclick: move |_| menu_open.set(false),
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
