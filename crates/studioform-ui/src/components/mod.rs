//! Compound layout components
//!
//! Slots must be nested inside their root to pick up its configuration;
//! outside a root they fall back to defaults instead of failing.

mod layout_section;
mod reveal_block;
mod toned_card;

pub use layout_section::*;
pub use reveal_block::*;
pub use toned_card::*;

/// Join a base class with optional caller-supplied classes
pub(crate) fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_classes_skips_blank_extra() {
        assert_eq!(join_classes("card", None), "card");
        assert_eq!(join_classes("card", Some("  ")), "card");
        assert_eq!(join_classes("card", Some("p-8")), "card p-8");
    }
}
