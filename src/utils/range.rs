/// Fractional position of `value` within the half-open interval `[lo, hi)`
///
/// The result is not clamped: values outside the interval yield fractions
/// outside `[0, 1]`, which callers use for extrapolation.
///
/// # Examples
/// ```
/// use kma_registry::utils::fraction_of;
///
/// assert_eq!(fraction_of(300.0, 1000.0, 650.0), 0.5);
/// assert_eq!(fraction_of(0.0, 800.0, 1000.0), 1.25);
/// ```
///
/// # Panics
/// Panics if the interval has zero or negative width. The fixed ranges in
/// the pressure catalog can never trigger this.
pub fn fraction_of(lo: f32, hi: f32, value: f32) -> f32 {
    assert!(
        hi > lo,
        "source interval [{}, {}) must have positive width",
        lo,
        hi
    );
    (value - lo) / (hi - lo)
}

/// Map a fraction into the half-open interval `[lo, hi)`
///
/// Fractions outside `[0, 1]` extrapolate beyond the interval.
///
/// # Examples
/// ```
/// use kma_registry::utils::interpolated;
///
/// assert_eq!(interpolated(2.0, 10.0, 0.5), 6.0);
/// assert_eq!(interpolated(2.0, 10.0, 1.25), 12.0);
/// ```
pub fn interpolated(lo: f32, hi: f32, fraction: f32) -> f32 {
    lo + fraction * (hi - lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_endpoints() {
        assert_eq!(fraction_of(300.0, 1000.0, 300.0), 0.0);
        assert_eq!(fraction_of(300.0, 1000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_fraction_extrapolates_below_and_above() {
        assert!(fraction_of(500.0, 1000.0, 200.0) < 0.0);
        assert!(fraction_of(0.0, 800.0, 1000.0) > 1.0);
    }

    #[test]
    fn test_interpolated_endpoints() {
        assert_eq!(interpolated(0.05, 1.0, 0.0), 0.05);
        assert_eq!(interpolated(0.05, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_round_trip_is_identity() {
        let value = 725.0;
        let fraction = fraction_of(300.0, 1000.0, value);
        assert!((interpolated(300.0, 1000.0, fraction) - value).abs() < 1e-4);
    }

    #[test]
    #[should_panic(expected = "positive width")]
    fn test_zero_width_interval_panics() {
        fraction_of(500.0, 500.0, 500.0);
    }
}
