//! Layout Section Components
//!
//! Uniform page-section scaffold with named slots:
//! - `SectionRoot`: container width, vertical rhythm, horizontal padding
//! - `SectionHeader`: header region that fades up once on first view
//! - `SectionKicker`: small uppercase label
//! - `SectionTitle`: section heading, linkable as `{id}-title`
//! - `SectionLead`: intro paragraph at a readable width
//! - `SectionContent`: free-form content below the header

use dioxus::prelude::*;
use studioform_core::{SectionConfig, ViewportAmount};

use super::join_classes;
use crate::motion::{next_element_id, use_reveal};

/// Configuration a section root shares with its slots
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SectionContext {
    pub config: SectionConfig,
}

/// Read the enclosing section's context, or an empty one outside a section
pub fn use_section_context() -> SectionContext {
    try_use_context::<SectionContext>().unwrap_or_default()
}

/// Section shell that establishes the identifier for its slots.
///
/// The configuration is captured when the section mounts. An identifier
/// that cannot serve as a DOM id is ignored with a warning.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SectionRoot { id: "team".to_string(),
///         SectionHeader {
///             SectionKicker { "People" }
///             SectionTitle { "The studio team" }
///         }
///         SectionContent { class: "grid-3".to_string(),
///             /* cards */
///         }
///     }
/// }
/// ```
#[component]
pub fn SectionRoot(
    /// Anchor identifier for the section
    #[props(default)]
    id: Option<String>,
    /// Additional CSS classes for the section shell
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    let context = use_context_provider(|| SectionContext {
        config: SectionConfig::lenient(id.as_deref(), class.as_deref()),
    });

    let anchor = context.config.identifier.as_ref().map(|id| id.to_string());
    let full_class = join_classes("layout-section", context.config.class.as_deref());

    rsx! {
        section {
            id: anchor,
            class: "{full_class}",
            {children}
        }
    }
}

/// Header region with a one-shot entrance reveal.
///
/// Hidden until `amount` of its area has intersected the viewport, then
/// revealed for the rest of its life.
#[component]
pub fn SectionHeader(
    /// Additional CSS classes
    #[props(default)]
    class: Option<String>,
    /// Fraction of the header that must be visible to reveal it
    #[props(default = 0.3)]
    amount: f64,
    children: Element,
) -> Element {
    let element_id = use_hook(|| next_element_id("section-header"));
    let amount = use_hook(|| {
        ViewportAmount::new(amount).unwrap_or_else(|e| {
            tracing::warn!("{}, using default", e);
            ViewportAmount::default()
        })
    });
    let reveal = use_reveal(element_id.clone(), amount);

    let style = reveal.read().style();
    let full_class = join_classes("layout-section__header", class.as_deref());

    rsx! {
        header {
            id: "{element_id}",
            class: "{full_class}",
            style: "{style}",
            {children}
        }
    }
}

/// Small uppercase label above the title
#[component]
pub fn SectionKicker(children: Element) -> Element {
    rsx! {
        p { class: "layout-section__kicker", {children} }
    }
}

/// Section heading; carries `{identifier}-title` when the section has one
#[component]
pub fn SectionTitle(children: Element) -> Element {
    let anchor = use_section_context().config.title_anchor();

    rsx! {
        h2 {
            id: anchor,
            class: "layout-section__title",
            {children}
        }
    }
}

#[component]
pub fn SectionLead(children: Element) -> Element {
    rsx! {
        p { class: "layout-section__lead", {children} }
    }
}

/// Primary content slot, offset below the header
#[component]
pub fn SectionContent(
    /// Additional CSS classes (grid layout etc.)
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    let full_class = join_classes("layout-section__content", class.as_deref());

    rsx! {
        div { class: "{full_class}", {children} }
    }
}
