//! One-shot entrance reveal
//!
//! A section header starts hidden and is revealed the first time enough of
//! it scrolls into view. Once revealed it stays revealed until the instance
//! is dropped.

use crate::error::{LayoutError, Result};

/// Vertical offset of a hidden header, in pixels
pub const HIDDEN_OFFSET_PX: f64 = 24.0;

/// Duration of the hidden → revealed transition, in milliseconds
pub const REVEAL_DURATION_MS: u32 = 700;

/// Scale a settling block starts from
pub const SETTLE_FROM_SCALE: f64 = 0.97;

/// How a hidden element moves into place when revealed
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Entrance {
    /// Fade up from [`HIDDEN_OFFSET_PX`] below
    #[default]
    Rise,
    /// Fade in while growing from [`SETTLE_FROM_SCALE`]
    Settle,
}

impl Entrance {
    fn transform(&self, revealed: bool) -> String {
        match (self, revealed) {
            (Entrance::Rise, false) => format!("translateY({}px)", HIDDEN_OFFSET_PX),
            (Entrance::Rise, true) => "translateY(0px)".to_string(),
            (Entrance::Settle, false) => format!("scale({})", SETTLE_FROM_SCALE),
            (Entrance::Settle, true) => "scale(1)".to_string(),
        }
    }
}

/// Fraction of an element's area that must intersect the viewport
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct ViewportAmount(f64);

impl ViewportAmount {
    /// Any intersection at all
    pub const ANY: Self = Self(0.0);

    pub fn new(amount: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&amount) {
            return Err(LayoutError::AmountOutOfRange(amount));
        }
        Ok(Self(amount))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether an observed intersection ratio meets this amount.
    ///
    /// A zero amount means "any intersection", so a ratio of exactly zero
    /// (element just outside the viewport) does not qualify.
    pub fn is_met_by(&self, ratio: f64) -> bool {
        if self.0 == 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.0
        }
    }
}

impl Default for ViewportAmount {
    fn default() -> Self {
        Self(0.3)
    }
}

/// Per-instance reveal flag: `hidden` → `revealed`, never back
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    /// Start hidden
    pub fn new() -> Self {
        Self::default()
    }

    /// Start already revealed, for when motion is disabled
    pub fn revealed_initially() -> Self {
        Self { revealed: true }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one visibility observation.
    ///
    /// Returns `true` only for the observation that flips the state to
    /// revealed. Every later call returns `false`, however often the
    /// threshold is crossed again.
    pub fn observe(&mut self, ratio: f64, amount: ViewportAmount) -> bool {
        if self.revealed || !amount.is_met_by(ratio) {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Inline style for the current state, rising into place
    pub fn style(&self) -> String {
        self.entrance_style(Entrance::Rise)
    }

    /// Inline style for the current state with the given entrance
    pub fn entrance_style(&self, entrance: Entrance) -> String {
        let transform = entrance.transform(self.revealed);
        if self.revealed {
            format!(
                "opacity: 1; transform: {transform}; transition: opacity {ms}ms ease-out, transform {ms}ms ease-out;",
                transform = transform,
                ms = REVEAL_DURATION_MS
            )
        } else {
            format!("opacity: 0; transform: {};", transform)
        }
    }

    /// Inline style for item `index` of a grid revealing in sequence.
    ///
    /// Each item waits `step_ms` longer than the previous one.
    pub fn staggered_style(&self, entrance: Entrance, index: usize, step_ms: u32) -> String {
        let style = self.entrance_style(entrance);
        let delay = index as u64 * u64::from(step_ms);
        if self.revealed && delay > 0 {
            format!("{} transition-delay: {}ms;", style, delay)
        } else {
            style
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_bounds() {
        assert!(ViewportAmount::new(0.0).is_ok());
        assert!(ViewportAmount::new(1.0).is_ok());
        assert_eq!(
            ViewportAmount::new(1.5),
            Err(LayoutError::AmountOutOfRange(1.5))
        );
        assert!(ViewportAmount::new(-0.1).is_err());
        assert!(ViewportAmount::new(f64::NAN).is_err());
        assert_eq!(ViewportAmount::default().value(), 0.3);
    }

    #[test]
    fn zero_amount_needs_some_intersection() {
        let any = ViewportAmount::new(0.0).unwrap();
        assert!(!any.is_met_by(0.0));
        assert!(any.is_met_by(0.01));
    }

    #[test]
    fn starts_hidden() {
        let state = RevealState::new();
        assert!(!state.is_revealed());
        assert!(state.style().contains("opacity: 0"));
        assert!(state.style().contains("translateY(24px)"));
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let mut state = RevealState::new();
        assert!(!state.observe(0.1, ViewportAmount::default()));
        assert!(!state.observe(0.29, ViewportAmount::default()));
        assert!(!state.is_revealed());
    }

    #[test]
    fn reveals_exactly_once() {
        let amount = ViewportAmount::default();
        let mut state = RevealState::new();
        let transitions = [0.0, 0.4, 0.0, 0.9, 0.1, 1.0]
            .iter()
            .filter(|ratio| state.observe(**ratio, amount))
            .count();
        assert_eq!(transitions, 1);
        assert!(state.is_revealed());
        assert!(state.style().contains("opacity: 1"));
    }

    #[test]
    fn staggered_delay_grows_with_index() {
        let state = RevealState::revealed_initially();
        let rise = Entrance::Rise;
        assert!(!state.staggered_style(rise, 0, 120).contains("transition-delay"));
        assert!(state
            .staggered_style(rise, 2, 120)
            .ends_with("transition-delay: 240ms;"));
        assert!(!RevealState::new()
            .staggered_style(rise, 3, 120)
            .contains("transition-delay"));
    }

    #[test]
    fn settle_grows_into_place() {
        let hidden = RevealState::new().entrance_style(Entrance::Settle);
        assert_eq!(hidden, "opacity: 0; transform: scale(0.97);");
        assert!(!hidden.contains("translateY"));

        let mut state = RevealState::new();
        assert!(state.observe(0.05, ViewportAmount::ANY));
        let shown = state.staggered_style(Entrance::Settle, 1, 80);
        assert!(shown.starts_with("opacity: 1; transform: scale(1);"));
        assert!(shown.ends_with("transition-delay: 80ms;"));
    }

    #[test]
    fn rise_is_the_default_entrance() {
        let state = RevealState::new();
        assert_eq!(state.style(), state.entrance_style(Entrance::default()));
    }

    #[test]
    fn initially_revealed_never_transitions() {
        let mut state = RevealState::revealed_initially();
        assert!(state.is_revealed());
        assert!(!state.observe(1.0, ViewportAmount::default()));
    }
}
