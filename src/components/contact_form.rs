//! Contact Form Component
//!
//! Presentational enquiry form. Nothing is sent anywhere; submitting only
//! logs and shows a note.

use dioxus::prelude::*;
use studioform_core::Tone;

use crate::components::icons::{Icon, LucideIcon};
use crate::content::CONTACT_FIELDS;

/// Form field `name` attribute for a visible label
pub fn field_name(label: &str) -> String {
    label.to_ascii_lowercase().replace(' ', "_")
}

#[component]
pub fn ContactForm() -> Element {
    let mut submitted = use_signal(|| false);
    let class = format!("glass-panel {} contact-form", Tone::Warm.panel_class());

    rsx! {
        form {
            class: "{class}",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                tracing::debug!(
                    "Enquiry form submitted with {} fields; no backend is wired",
                    evt.values().len()
                );
                submitted.set(true);
            },

            for field in CONTACT_FIELDS.iter() {
                label { key: "{field}", class: "contact-form__label",
                    "{field}"
                    input {
                        class: "contact-form__input",
                        name: field_name(field),
                        placeholder: "{field}",
                    }
                }
            }

            label { class: "contact-form__label",
                "Vision"
                textarea {
                    class: "contact-form__textarea",
                    name: "vision",
                    rows: "4",
                    placeholder: "Tell us about your site, timeline, and ambitions.",
                }
            }

            button { class: "btn-enquiry", r#type: "submit",
                "Send Enquiry"
                LucideIcon { icon: Icon::ArrowUpRight, class: "icon--sm".to_string() }
            }

            if submitted() {
                p { class: "form-note", "Thanks. We'll be in touch about your project." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_are_snake_case() {
        assert_eq!(field_name("Name"), "name");
        assert_eq!(field_name("Project Type"), "project_type");
    }
}
