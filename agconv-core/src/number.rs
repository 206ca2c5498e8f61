//! Numeric helpers shared by the engine and its callers

/// Round `value` to `places` decimal places (half away from zero).
pub fn round_to(value: f64, places: u32) -> f64 {
    let places = i32::try_from(places).unwrap_or(i32::MAX);
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    if !scale.is_finite() || !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// True if `a` and `b` differ by no more than `tolerance`
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.8921796, 4), 0.8922);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(60.0, 2), 60.0);
    }

    #[test]
    fn test_round_to_huge_places_is_identity() {
        assert_eq!(round_to(1.234, 400), 1.234);
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(0.404686, 0.4047, 0.0001));
        assert!(!approx_eq(1.0, 1.1, 0.01));
    }
}
