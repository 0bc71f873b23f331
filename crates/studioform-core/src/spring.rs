//! Spring easing
//!
//! Cards lift on hover with a spring feel. The webview only understands CSS
//! timing functions, so the spring's step response is sampled into a CSS
//! `linear()` easing over its settle duration.

use std::time::Duration;

/// Distance from rest under which the spring counts as settled
pub const REST_DELTA: f64 = 0.001;

/// Upper bound on settle duration for very soft springs
pub const MAX_SETTLE: Duration = Duration::from_secs(10);

const SAMPLE_STEP_SECS: f64 = 0.001;

/// Damped harmonic oscillator moving from 0 to 1 with zero initial velocity
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for Spring {
    /// The card hover spring: stiffness 180, damping 18
    fn default() -> Self {
        Self::new(180.0, 18.0)
    }
}

impl Spring {
    /// Unit-mass spring
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio ζ; below 1 the spring overshoots
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Normalised position at `t` seconds
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-9 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            1.0 - decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Time after which the spring stays within [`REST_DELTA`] of rest
    pub fn settle_duration(&self) -> Duration {
        let max_steps = (MAX_SETTLE.as_secs_f64() / SAMPLE_STEP_SECS) as usize;
        let mut last_moving = None;
        for step in 0..=max_steps {
            let t = step as f64 * SAMPLE_STEP_SECS;
            if (1.0 - self.position(t)).abs() > REST_DELTA {
                last_moving = Some(step);
            }
        }

        match last_moving {
            None => Duration::ZERO,
            Some(step) if step >= max_steps => MAX_SETTLE,
            Some(step) => Duration::from_secs_f64((step + 1) as f64 * SAMPLE_STEP_SECS),
        }
    }

    /// CSS `linear()` easing with `samples` evenly spaced stops
    pub fn css_easing(&self, samples: usize) -> String {
        let samples = samples.max(2);
        let settle = self.settle_duration().as_secs_f64();
        let stops: Vec<String> = (0..samples)
            .map(|i| {
                if i == samples - 1 {
                    return "1".to_string();
                }
                let t = settle * i as f64 / (samples - 1) as f64;
                format_stop(self.position(t))
            })
            .collect();
        format!("linear({})", stops.join(", "))
    }

    /// Full CSS transition declaration for `property`
    pub fn css_transition(&self, property: &str) -> String {
        format!(
            "{} {}ms {}",
            property,
            self.settle_duration().as_millis(),
            self.css_easing(24)
        )
    }
}

fn format_stop(value: f64) -> String {
    let s = format!("{:.4}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest() {
        assert_eq!(Spring::default().position(0.0), 0.0);
        assert_eq!(Spring::default().position(-1.0), 0.0);
    }

    #[test]
    fn default_spring_is_underdamped_and_overshoots() {
        let spring = Spring::default();
        assert!(spring.damping_ratio() < 1.0);
        let peak = (1..1000)
            .map(|ms| spring.position(ms as f64 / 1000.0))
            .fold(0.0_f64, f64::max);
        assert!(peak > 1.0, "peak was {}", peak);
    }

    #[test]
    fn overdamped_spring_never_overshoots() {
        let spring = Spring::new(100.0, 40.0);
        assert!(spring.damping_ratio() > 1.0);
        for ms in 0..3000 {
            assert!(spring.position(ms as f64 / 1000.0) <= 1.0);
        }
    }

    #[test]
    fn critically_damped_spring_converges() {
        let spring = Spring::new(100.0, 20.0);
        assert!((spring.damping_ratio() - 1.0).abs() < 1e-12);
        assert!((1.0 - spring.position(2.0)).abs() < REST_DELTA);
    }

    #[test]
    fn settles_within_rest_delta() {
        let spring = Spring::default();
        let settle = spring.settle_duration();
        assert!(settle > Duration::ZERO);
        assert!(settle < Duration::from_secs(2));
        let at_settle = spring.position(settle.as_secs_f64());
        assert!((1.0 - at_settle).abs() <= REST_DELTA + 1e-6);
    }

    #[test]
    fn css_easing_shape() {
        let easing = Spring::default().css_easing(8);
        assert!(easing.starts_with("linear(0, "), "{}", easing);
        assert!(easing.ends_with(", 1)"), "{}", easing);
        assert_eq!(easing.matches(',').count(), 7);
    }

    #[test]
    fn css_transition_names_property() {
        let transition = Spring::default().css_transition("transform");
        assert!(transition.starts_with("transform "));
        assert!(transition.contains("ms linear("));
    }

    #[test]
    fn stop_formatting() {
        assert_eq!(format_stop(0.0), "0");
        assert_eq!(format_stop(-0.00001), "0");
        assert_eq!(format_stop(0.5), "0.5");
        assert_eq!(format_stop(1.05812), "1.0581");
    }
}
