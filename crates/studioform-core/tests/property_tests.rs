//! Property-based tests for layout and motion primitives
//!
//! Uses proptest to verify the invariants the components rely on.

use proptest::prelude::*;
use studioform_core::{
    scroll_progress, AnchorId, HoverLift, RevealState, ScrollMapping, SectionConfig, Tone,
    ViewportAmount,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate identifiers usable as DOM anchors
fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9_:.-]{0,30}").expect("valid regex")
}

fn tone_strategy() -> impl Strategy<Value = Tone> {
    prop_oneof![Just(Tone::Warm), Just(Tone::Cool)]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A section's title anchor is its identifier plus "-title", exactly
    #[test]
    fn title_anchor_is_identifier_plus_suffix(id in identifier_strategy()) {
        let config = SectionConfig::with_identifier(&id).unwrap();
        prop_assert_eq!(config.title_anchor(), Some(format!("{}-title", id)));
    }

    /// Identifiers containing whitespace are never accepted
    #[test]
    fn whitespace_identifiers_rejected(
        head in identifier_strategy(),
        tail in identifier_strategy(),
        gap in prop_oneof![Just(" "), Just("\t"), Just("\n")],
    ) {
        let raw = format!("{}{}{}", head, gap, tail);
        prop_assert!(AnchorId::parse(&raw).is_err());
        prop_assert_eq!(SectionConfig::lenient(Some(&raw), None).title_anchor(), None);
    }

    /// Each tone maps to its own accent and never to the other tone's
    #[test]
    fn tone_accent_is_exclusive(tone in tone_strategy()) {
        let other = match tone {
            Tone::Warm => Tone::Cool,
            Tone::Cool => Tone::Warm,
        };
        prop_assert_ne!(tone.accent(), other.accent());
        prop_assert_eq!(tone.to_string().parse::<Tone>().unwrap(), tone);
    }

    /// However the visibility ratio fluctuates, the reveal fires at most once
    #[test]
    fn reveal_fires_at_most_once(
        ratios in prop::collection::vec(0.0f64..=1.0, 0..50),
        amount in 0.0f64..=1.0,
    ) {
        let amount = ViewportAmount::new(amount).unwrap();
        let mut state = RevealState::new();
        let fired = ratios.iter().filter(|r| state.observe(**r, amount)).count();

        let should_fire = ratios.iter().any(|r| amount.is_met_by(*r));
        prop_assert_eq!(fired, usize::from(should_fire));
        prop_assert_eq!(state.is_revealed(), should_fire);
    }

    /// Any sequence of hover toggles ending un-hovered lands on the baseline
    #[test]
    fn hover_reverses_to_baseline(toggles in prop::collection::vec(any::<bool>(), 0..20)) {
        let lift = HoverLift::default();
        for hovered in &toggles {
            let transform = lift.transform(*hovered);
            if *hovered {
                prop_assert_ne!(transform.as_str(), HoverLift::BASELINE);
            }
        }
        prop_assert_eq!(lift.transform(false), HoverLift::BASELINE);
    }

    /// Mapped values always stay inside the output range
    #[test]
    fn scroll_mapping_is_clamped(value in -10.0f64..10.0) {
        let offset = ScrollMapping::hero_parallax().map(value);
        prop_assert!((-120.0..=0.0).contains(&offset));
    }

    /// Progress stays in [0, 1] for any geometry
    #[test]
    fn scroll_progress_in_unit_range(
        top in -5000.0f64..5000.0,
        height in 0.0f64..10000.0,
        viewport in 0.0f64..2000.0,
    ) {
        let progress = scroll_progress(top, height, viewport);
        prop_assert!((0.0..=1.0).contains(&progress));
    }
}
