//! Site Footer Component

use chrono::Datelike;
use dioxus::prelude::*;

use crate::components::icons::{Icon, LucideIcon};
use crate::content::STUDIO_NAME;

/// Copyright line for `year`
pub fn copyright(year: i32) -> String {
    format!("© {} Studio Form · Melbourne", year)
}

#[component]
pub fn SiteFooter() -> Element {
    let year = use_hook(|| chrono::Local::now().year());
    let legal = copyright(year);

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__grid",
                div {
                    p { class: "wordmark", "{STUDIO_NAME}" }
                    p { class: "site-footer__tagline",
                        "Architecture for light, longevity, and calm living."
                    }
                }

                div { class: "site-footer__social",
                    a { href: "#", "aria-label": "Instagram",
                        LucideIcon { icon: Icon::Instagram, class: "icon--sm".to_string() }
                    }
                    a { href: "#", "aria-label": "LinkedIn",
                        LucideIcon { icon: Icon::Linkedin, class: "icon--sm".to_string() }
                    }
                }

                form {
                    class: "newsletter",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        tracing::debug!("Newsletter signup submitted; no backend is wired");
                    },
                    input {
                        class: "newsletter__input",
                        name: "newsletter_email",
                        placeholder: "Newsletter email",
                    }
                    button { class: "newsletter__submit", r#type: "submit", "aria-label": "Subscribe",
                        LucideIcon { icon: Icon::ArrowUpRight, class: "icon--sm".to_string() }
                    }
                }
            }

            p { class: "site-footer__legal", "{legal}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year() {
        assert_eq!(copyright(2026), "© 2026 Studio Form · Melbourne");
    }
}
