//! Color constants for the obsidian palette.
//!
//! Dark ink background, warm parchment text, peach and ice accents.

use studioform_core::{COOL_ACCENT, WARM_ACCENT};

// === INK (Backgrounds) ===
pub const INK: &str = "#090b10";
pub const INK_RAISED: &str = "#0b0f16";
pub const INK_TILE: &str = "#1a2230";

// === TEXT ===
pub const PARCHMENT: &str = "#f5f1ea";
pub const TEXT_SOFT: &str = "rgba(255, 255, 255, 0.72)";
pub const TEXT_MUTED: &str = "rgba(255, 255, 255, 0.6)";
pub const HAIRLINE: &str = "rgba(255, 255, 255, 0.1)";

// === PANELS ===
pub const PANEL_WARM: &str =
    "linear-gradient(150deg, rgba(248, 176, 144, 0.12), rgba(255, 255, 255, 0.03) 55%)";
pub const PANEL_COOL: &str =
    "linear-gradient(150deg, rgba(173, 215, 255, 0.12), rgba(255, 255, 255, 0.03) 55%)";

/// CSS custom properties for the palette, shared by page and component CSS
pub fn root_variables() -> String {
    let vars = [
        ("--ink", INK),
        ("--ink-raised", INK_RAISED),
        ("--ink-tile", INK_TILE),
        ("--parchment", PARCHMENT),
        ("--text-soft", TEXT_SOFT),
        ("--text-muted", TEXT_MUTED),
        ("--hairline", HAIRLINE),
        ("--accent-warm", WARM_ACCENT),
        ("--accent-cool", COOL_ACCENT),
        ("--panel-warm", PANEL_WARM),
        ("--panel-cool", PANEL_COOL),
        ("--font-display", "'Cormorant Garamond', 'Playfair Display', Georgia, serif"),
        ("--font-body", "'Inter', 'Helvetica Neue', Arial, sans-serif"),
    ];

    let body: String = vars
        .iter()
        .map(|(name, value)| format!("  {}: {};\n", name, value))
        .collect();
    format!(":root {{\n{}}}\n", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_variables_carry_tone_accents() {
        let css = root_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--accent-warm: #f8b090;"));
        assert!(css.contains("--accent-cool: #add7ff;"));
        assert!(css.trim_end().ends_with('}'));
    }
}
