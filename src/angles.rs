//! Solar Angle Calculator
//!
//! Reduces the 3D position model to physically meaningful scalar angles
//! and their display/energy implications. This is the single shared
//! module for these formulas; every consumer (HUD, scene, panel math)
//! goes through it so the day/night test and clamping choices cannot
//! drift apart between call sites.

use serde::Serialize;

use crate::frame::{sun_direction, LocalFrame};
use crate::units::{clamp_unit, normalize_azimuth_rad};

// ===================== CONSTANTS =====================

/// Minimum altitude (radians) used in the shadow-length division.
///
/// Keeps `1/tan(altitude)` finite just above the horizon while still
/// producing "very long shadow" values (1/tan(0.01) ≈ 100).
pub const ALTITUDE_FLOOR_RAD: f64 = 0.01;

// ===================== DERIVED ANGLES =====================

/// Derived solar angles for one parameter snapshot.
///
/// A pure value type, recomputed from scratch on every parameter change.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SolarAngles {
    /// Sun altitude above the horizon plane, degrees in [-90, 90].
    pub altitude_deg: f64,
    /// Zenith angle, exactly `90 - altitude_deg`.
    pub zenith_deg: f64,
    /// Sun compass bearing from North, radians in [0, 2π).
    pub azimuth_rad: f64,
    /// Sun compass bearing from North, degrees in [0, 360).
    pub azimuth_deg: f64,
    /// True iff the sun is strictly above the horizon (altitude > 0).
    pub is_day: bool,
    /// Lambert's cosine law on a horizontal surface: `max(0, sin(alt))`.
    pub relative_irradiance: f64,
    /// Shadow length per unit of object height; `None` when the sun is
    /// at or below the horizon (display layers render "∞"/nothing).
    pub shadow_length_scale: Option<f64>,
    /// Hours of daylight for this latitude/declination, in [0, 24].
    pub day_length_hours: f64,
}

/// Compute all derived solar angles for one (latitude, declination,
/// hour angle) snapshot.
///
/// Total over the documented input domain: never panics, never returns
/// NaN, including at exactly ±90° latitude.
pub fn solar_angles(latitude_deg: f64, declination_deg: f64, hour_angle_deg: f64) -> SolarAngles {
    let frame = LocalFrame::for_latitude(latitude_deg);
    let sun = sun_direction(declination_deg, hour_angle_deg);
    let local_sun = frame.to_local(&sun);

    // sin(altitude) is the sun-zenith dot product; this same quantity
    // drives the day/night flag so there is exactly one day test.
    let sin_alt = clamp_unit(local_sun.z);
    let altitude_rad = sin_alt.asin();
    let altitude_deg = altitude_rad.to_degrees();
    let is_day = altitude_deg > 0.0;

    // Bearing of the horizontal sun projection, from North toward East.
    // atan2(0, 0) is defined (0.0) in Rust, so the sun at the exact
    // zenith yields azimuth 0 rather than NaN.
    let azimuth_rad = normalize_azimuth_rad(local_sun.x.atan2(local_sun.y));

    let relative_irradiance = sin_alt.max(0.0);

    let shadow_length_scale =
        if is_day { Some(1.0 / altitude_rad.max(ALTITUDE_FLOOR_RAD).tan()) } else { None };

    SolarAngles {
        altitude_deg,
        zenith_deg: 90.0 - altitude_deg,
        azimuth_rad,
        azimuth_deg: azimuth_rad.to_degrees(),
        is_day,
        relative_irradiance,
        shadow_length_scale,
        day_length_hours: day_length_hours(latitude_deg, declination_deg),
    }
}

/// Hours of daylight from the sunset hour-angle equation
/// `cos(H) = -tan(lat)·tan(dec)`.
///
/// When the right-hand side falls below -1 the sun never sets (polar
/// day, 24 h); above +1 it never rises (polar night, 0 h).
pub fn day_length_hours(latitude_deg: f64, declination_deg: f64) -> f64 {
    let cos_h = -latitude_deg.to_radians().tan() * declination_deg.to_radians().tan();
    if cos_h < -1.0 {
        24.0
    } else if cos_h > 1.0 {
        0.0
    } else {
        let half_day = cos_h.acos();
        half_day * 24.0 / std::f64::consts::PI
    }
}

// ===================== TESTS =====================
