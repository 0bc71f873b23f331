//! Card hover lift

use crate::spring::Spring;

/// Lift applied to a card while the pointer is over it
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HoverLift {
    /// Upward translation in pixels
    pub lift_px: f64,
    /// Uniform scale while lifted
    pub scale: f64,
    /// Spring driving the transition in both directions
    pub spring: Spring,
}

impl Default for HoverLift {
    fn default() -> Self {
        Self {
            lift_px: 8.0,
            scale: 1.01,
            spring: Spring::default(),
        }
    }
}

impl HoverLift {
    /// Transform with no lift applied
    pub const BASELINE: &'static str = "translateY(0px) scale(1)";

    /// CSS transform for the given hover state
    pub fn transform(&self, hovered: bool) -> String {
        if hovered {
            format!("translateY({}px) scale({})", -self.lift_px, self.scale)
        } else {
            Self::BASELINE.to_string()
        }
    }

    /// Spring transition declaration for the transform.
    ///
    /// Sampling the spring is not free; callers compute this once per
    /// instance and pass it to [`HoverLift::style`].
    pub fn transition(&self) -> String {
        self.spring.css_transition("transform")
    }

    /// Inline style for the card root.
    ///
    /// Without a transition the transform still changes but jumps instead
    /// of easing.
    pub fn style(&self, hovered: bool, transition: Option<&str>) -> String {
        let transform = self.transform(hovered);
        match transition {
            Some(transition) => format!("transform: {}; transition: {};", transform, transition),
            None => format!("transform: {};", transform),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hovered_transform_lifts_and_scales() {
        assert_eq!(
            HoverLift::default().transform(true),
            "translateY(-8px) scale(1.01)"
        );
    }

    #[test]
    fn hover_end_returns_to_baseline() {
        let lift = HoverLift::default();
        let states = [false, true, false, true, false];
        let transforms: Vec<String> = states.iter().map(|h| lift.transform(*h)).collect();
        assert_eq!(transforms[0], HoverLift::BASELINE);
        assert_eq!(transforms[2], HoverLift::BASELINE);
        assert_eq!(transforms[4], HoverLift::BASELINE);
        assert_eq!(transforms[1], transforms[3]);
    }

    #[test]
    fn style_includes_spring_transition_when_animated() {
        let lift = HoverLift::default();
        let transition = lift.transition();
        assert!(lift
            .style(true, Some(&transition))
            .contains("transition: transform"));
        assert!(!lift.style(true, None).contains("transition"));
        assert!(lift.style(false, None).contains(HoverLift::BASELINE));
    }
}
