use serde::{Deserialize, Serialize};

/// Inclusive clamp range applied after shape-preserving interpolation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f32,
    pub upper: f32,
}

impl Bounds {
    pub fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.lower, self.upper)
    }
}

/// How a variable's time series is reconstructed between sampled points
///
/// Every variable maps to exactly one variant; the temporal resampler
/// dispatches exhaustively over all five. Adding a variable never requires a
/// new variant, only selecting an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationPolicy {
    /// Shape-preserving cubic between samples, optionally clamped afterwards
    Hermite { bounds: Option<Bounds> },
    /// Accumulated total since the previous sample, summed backwards from
    /// the next known cumulative sample (precipitation, snowfall)
    BackwardsSum,
    /// Backwards accumulation weighted by solar position within the
    /// sub-interval (shortwave and direct radiation)
    SolarBackwardsAveraged,
    /// Plain linear blend, no shape or bounds constraint
    Linear,
    /// Linear on a circular domain of degrees [0, 360), shortest angular path
    LinearDegrees,
}

impl InterpolationPolicy {
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            InterpolationPolicy::Hermite { bounds } => *bounds,
            _ => None,
        }
    }

    pub fn is_solar_interpolated(&self) -> bool {
        matches!(self, InterpolationPolicy::SolarBackwardsAveraged)
    }
}

/// Plain linear blend between `a` and `b` at fraction `t`
pub fn linear(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Circular interpolation on degrees [0, 360)
///
/// Takes the shorter angular path between the two directions, so 350° to 10°
/// passes through 0°, never through 180°.
pub fn linear_degrees(a: f32, b: f32, t: f32) -> f32 {
    let delta = (b - a + 180.0).rem_euclid(360.0) - 180.0;
    (a + t * delta).rem_euclid(360.0)
}

/// Shape-preserving cubic (Catmull-Rom form) between `a` and `b`
///
/// `prev` and `next` are the neighbouring samples; `t` is the fraction
/// between `a` and `b`. When `bounds` is present the result is clamped after
/// interpolation, which removes cubic overshoot on bounded quantities such
/// as relative humidity.
pub fn hermite(prev: f32, a: f32, b: f32, next: f32, t: f32, bounds: Option<Bounds>) -> f32 {
    let c0 = a;
    let c1 = 0.5 * (b - prev);
    let c2 = prev - 2.5 * a + 2.0 * b - 0.5 * next;
    let c3 = 0.5 * (next - prev) + 1.5 * (a - b);
    let value = c0 + c1 * t + c2 * t * t + c3 * t * t * t;
    match bounds {
        Some(bounds) => bounds.clamp(value),
        None => value,
    }
}

/// Distribute an accumulated total evenly across `steps` sub-intervals
///
/// Instantaneous values are not physically meaningful between samples of an
/// accumulating flux; the total since the previous sample is spread
/// uniformly instead.
pub fn distribute_backwards_sum(total: f32, steps: usize) -> Vec<f32> {
    if steps == 0 {
        return Vec::new();
    }
    vec![total / steps as f32; steps]
}

/// Distribute an accumulated flux across sub-intervals proportionally to
/// per-step weights
///
/// Used for solar radiation, where the weights come from the solar zenith
/// angle within each sub-interval. A zero weight sum yields all zeros
/// (night-time: no radiation to distribute).
pub fn distribute_weighted(total: f32, weights: &[f32]) -> Vec<f32> {
    let sum: f32 = weights.iter().sum();
    if sum <= 0.0 {
        return vec![0.0; weights.len()];
    }
    weights.iter().map(|w| total * w / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_midpoint() {
        assert_eq!(linear(10.0, 20.0, 0.5), 15.0);
        assert_eq!(linear(10.0, 20.0, 0.0), 10.0);
        assert_eq!(linear(10.0, 20.0, 1.0), 20.0);
    }

    #[test]
    fn test_linear_degrees_wraps_through_north() {
        // 350° to 10° must pass through 0°, not 180°
        assert_eq!(linear_degrees(350.0, 10.0, 0.5), 0.0);
        assert_eq!(linear_degrees(10.0, 350.0, 0.5), 0.0);
    }

    #[test]
    fn test_linear_degrees_short_path() {
        assert_eq!(linear_degrees(80.0, 100.0, 0.5), 90.0);
        // Quarter of the way from 350° towards 10° (20° arc)
        assert_eq!(linear_degrees(350.0, 10.0, 0.25), 355.0);
    }

    #[test]
    fn test_linear_degrees_stays_in_domain() {
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let v = linear_degrees(355.0, 5.0, t);
            assert!((0.0..360.0).contains(&v), "{} out of domain", v);
        }
    }

    #[test]
    fn test_hermite_hits_sample_points() {
        let (prev, a, b, next) = (1.0, 2.0, 4.0, 5.0);
        assert_eq!(hermite(prev, a, b, next, 0.0, None), a);
        assert_eq!(hermite(prev, a, b, next, 1.0, None), b);
    }

    #[test]
    fn test_hermite_bounds_remove_overshoot() {
        // Flat run into a steep rise undershoots below zero at the midpoint
        let raw = hermite(0.0, 0.0, 0.0, 100.0, 0.5, None);
        assert!(raw < 0.0);

        let clamped = hermite(0.0, 0.0, 0.0, 100.0, 0.5, Some(Bounds::new(0.0, 100.0)));
        assert_eq!(clamped, 0.0);
    }

    #[test]
    fn test_hermite_monotonic_segment_stays_reasonable() {
        let v = hermite(0.0, 10.0, 20.0, 30.0, 0.5, None);
        assert_eq!(v, 15.0);
    }

    #[test]
    fn test_distribute_backwards_sum() {
        assert_eq!(distribute_backwards_sum(6.0, 3), vec![2.0, 2.0, 2.0]);
        assert!(distribute_backwards_sum(6.0, 0).is_empty());
    }

    #[test]
    fn test_distribute_weighted_preserves_total() {
        let parts = distribute_weighted(100.0, &[0.0, 1.0, 3.0]);
        assert_eq!(parts, vec![0.0, 25.0, 75.0]);
        assert_eq!(parts.iter().sum::<f32>(), 100.0);
    }

    #[test]
    fn test_distribute_weighted_night() {
        assert_eq!(distribute_weighted(50.0, &[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_policy_accessors() {
        let bounded = InterpolationPolicy::Hermite {
            bounds: Some(Bounds::new(0.0, 100.0)),
        };
        assert_eq!(bounded.bounds(), Some(Bounds::new(0.0, 100.0)));
        assert_eq!(InterpolationPolicy::Linear.bounds(), None);
        assert!(InterpolationPolicy::SolarBackwardsAveraged.is_solar_interpolated());
        assert!(!InterpolationPolicy::BackwardsSum.is_solar_interpolated());
    }
}
