//! Card tone palette
//!
//! A card is either warm or cool. The tone only changes accent coloring of
//! the card's labels and its panel treatment; titles and body copy are the
//! same for both.

use std::fmt;
use std::str::FromStr;

use crate::error::LayoutError;

/// Accent color for warm-toned labels
pub const WARM_ACCENT: &str = "#f8b090";

/// Accent color for cool-toned labels
pub const COOL_ACCENT: &str = "#add7ff";

/// Two-valued visual theme of a card
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Tone {
    /// Peach accent over a warm glass panel
    #[default]
    Warm,
    /// Pale blue accent over a cool glass panel
    Cool,
}

impl Tone {
    /// Accent color applied to the card's eyebrow label
    pub fn accent(&self) -> &'static str {
        match self {
            Tone::Warm => WARM_ACCENT,
            Tone::Cool => COOL_ACCENT,
        }
    }

    /// CSS class for the card's glass panel background
    pub fn panel_class(&self) -> &'static str {
        match self {
            Tone::Warm => "glass-warm",
            Tone::Cool => "glass-cool",
        }
    }

    /// CSS modifier class for the eyebrow label
    pub fn eyebrow_class(&self) -> &'static str {
        match self {
            Tone::Warm => "toned-card__eyebrow--warm",
            Tone::Cool => "toned-card__eyebrow--cool",
        }
    }

    /// Alternating tone for position `index`, starting warm
    pub fn alternating(index: usize) -> Tone {
        if index % 2 == 0 {
            Tone::Warm
        } else {
            Tone::Cool
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Warm => "warm",
            Tone::Cool => "cool",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warm" => Ok(Tone::Warm),
            "cool" => Ok(Tone::Cool),
            other => Err(LayoutError::UnknownTone(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_default_is_warm() {
        assert_eq!(Tone::default(), Tone::Warm);
    }

    #[test]
    fn tone_accents_are_distinct() {
        assert_eq!(Tone::Warm.accent(), "#f8b090");
        assert_eq!(Tone::Cool.accent(), "#add7ff");
        assert_ne!(Tone::Warm.accent(), Tone::Cool.accent());
    }

    #[test]
    fn tone_classes() {
        assert_eq!(Tone::Warm.panel_class(), "glass-warm");
        assert_eq!(Tone::Cool.panel_class(), "glass-cool");
        assert_eq!(Tone::Cool.eyebrow_class(), "toned-card__eyebrow--cool");
    }

    #[test]
    fn alternating_starts_warm() {
        let tones: Vec<Tone> = (0..4).map(Tone::alternating).collect();
        assert_eq!(tones, vec![Tone::Warm, Tone::Cool, Tone::Warm, Tone::Cool]);
    }

    #[test]
    fn tone_parse() {
        assert_eq!("warm".parse::<Tone>(), Ok(Tone::Warm));
        assert_eq!(" Cool ".parse::<Tone>(), Ok(Tone::Cool));
        assert_eq!(
            "neutral".parse::<Tone>(),
            Err(LayoutError::UnknownTone("neutral".to_string()))
        );
        assert_eq!(Tone::Cool.to_string(), "cool");
    }
}
