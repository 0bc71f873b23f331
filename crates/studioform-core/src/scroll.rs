//! Scroll progress and range mapping
//!
//! The hero background drifts upward as the page scrolls. Progress is the
//! fraction of the scrollable distance covered; a [`ScrollMapping`] turns it
//! into a pixel offset.

/// Fraction of the page scrolled, clamped to [0, 1].
///
/// Pages that fit the viewport have nothing to scroll and report 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Clamped linear map from an input range onto an output range
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScrollMapping {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl ScrollMapping {
    pub fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    /// Hero parallax: the first 35% of the page moves the backdrop up 120px
    pub fn hero_parallax() -> Self {
        Self::new((0.0, 0.35), (0.0, -120.0))
    }

    pub fn map(&self, value: f64) -> f64 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;
        let span = in_end - in_start;
        if span == 0.0 || value.is_nan() {
            return out_start;
        }
        let t = ((value - in_start) / span).clamp(0.0, 1.0);
        out_start + (out_end - out_start) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_of_unscrollable_page_is_zero() {
        assert_eq!(scroll_progress(0.0, 800.0, 900.0), 0.0);
        assert_eq!(scroll_progress(50.0, 900.0, 900.0), 0.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(500.0, 1900.0, 900.0), 0.5);
        assert_eq!(scroll_progress(-40.0, 1900.0, 900.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 1900.0, 900.0), 1.0);
    }

    #[test]
    fn hero_parallax_endpoints() {
        let mapping = ScrollMapping::hero_parallax();
        assert_eq!(mapping.map(0.0), 0.0);
        assert_eq!(mapping.map(0.35), -120.0);
        assert_eq!(mapping.map(1.0), -120.0);
        assert!((mapping.map(0.175) - -60.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_input_range_maps_to_start() {
        let mapping = ScrollMapping::new((0.5, 0.5), (10.0, 20.0));
        assert_eq!(mapping.map(0.7), 10.0);
        assert_eq!(ScrollMapping::hero_parallax().map(f64::NAN), 0.0);
    }
}
