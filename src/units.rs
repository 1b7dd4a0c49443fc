//! Angle and Unit Utilities
//!
//! Degree/radian helpers, azimuth normalization, and the clamping used
//! before every inverse trigonometric call in the engine.

// ===================== ANGLE HELPERS =====================

/// Clamp a value to [-1, 1] before passing it to `asin`/`acos`.
///
/// Floating-point drift can push a dot product or cosine argument
/// slightly outside the valid domain; this keeps NaN out of every
/// downstream angle.
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/// Normalize an azimuth in degrees to [0, 360).
pub fn normalize_azimuth_deg(deg: f64) -> f64 {
    let az = deg.rem_euclid(360.0);
    // rem_euclid(360.0) can return exactly 360.0 for tiny negative inputs
    if az >= 360.0 { 0.0 } else { az }
}

/// Normalize an azimuth in radians to [0, 2π).
pub fn normalize_azimuth_rad(rad: f64) -> f64 {
    let az = rad.rem_euclid(std::f64::consts::TAU);
    if az >= std::f64::consts::TAU { 0.0 } else { az }
}

// ===================== SEASONAL HELPERS =====================

/// Approximate solar declination in degrees for a day of year (1-366).
///
/// Uses the common engineering approximation
/// δ ≈ 23.45° × sin(360/365 × (d - 81)),
/// which peaks at the solstices and crosses zero at the equinoxes.
/// Convenience for callers that think in calendar dates; the engine
/// itself treats declination as a free parameter.
pub fn declination_for_day_of_year(day_of_year: u32) -> f64 {
    let b = (360.0 / 365.0) * (day_of_year as f64 - 81.0);
    23.45 * b.to_radians().sin()
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_unit_guards_inverse_trig() {
        assert_eq!(clamp_unit(1.0 + 1e-12), 1.0);
        assert_eq!(clamp_unit(-1.0 - 1e-12), -1.0);
        assert_eq!(clamp_unit(0.5), 0.5);
        assert!(clamp_unit(1.0 + 1e-12).asin().is_finite());
    }

    #[test]
    fn test_normalize_azimuth_wraps_into_compass_range() {
        assert!((normalize_azimuth_deg(-90.0) - 270.0).abs() < 1e-12);
        assert!((normalize_azimuth_deg(450.0) - 90.0).abs() < 1e-12);
        assert_eq!(normalize_azimuth_deg(0.0), 0.0);
        assert_eq!(normalize_azimuth_deg(360.0), 0.0);

        // Tiny negative angles must not round up to 360.0 itself
        let az = normalize_azimuth_deg(-1e-15);
        assert!((0.0..360.0).contains(&az), "azimuth {} escaped [0,360)", az);
    }

    #[test]
    fn test_declination_solstices_and_equinoxes() {
        // Summer solstice (~day 172): near +23.45
        let summer = declination_for_day_of_year(172);
        assert!(summer > 23.3, "summer declination {} too low", summer);

        // Winter solstice (~day 355): near -23.45
        let winter = declination_for_day_of_year(355);
        assert!(winter < -23.3, "winter declination {} too high", winter);

        // Spring equinox (day 81): near zero
        let spring = declination_for_day_of_year(81);
        assert!(spring.abs() < 0.1, "equinox declination {} not near zero", spring);
    }
}
