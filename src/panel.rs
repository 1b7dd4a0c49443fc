//! Panel Geometry and Efficiency Optimizer
//!
//! Models a planar photovoltaic panel's orientation in the observer's
//! local frame, computes its cosine-law capture efficiency against the
//! current sun position, and solves for the orientation that maximizes
//! it ("auto-align").

use nalgebra::{UnitQuaternion, Vector3};
use serde::Serialize;

use crate::angles::SolarAngles;
use crate::units::{clamp_unit, normalize_azimuth_deg};

// ===================== PARAMETERS =====================

/// Panel orientation parameters, owned by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelParameters {
    /// Tilt from horizontal in degrees (0 = flat, 90 = vertical).
    pub tilt_deg: f64,
    /// Compass facing in degrees (0 = North, 90 = East, 180 = South).
    pub azimuth_deg: f64,
}

impl Default for PanelParameters {
    fn default() -> Self {
        // Original defaults: 30 deg tilt, facing south.
        Self { tilt_deg: 30.0, azimuth_deg: 180.0 }
    }
}

// ===================== DERIVED EFFICIENCY =====================

/// Derived panel capture quantities for one snapshot.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PanelEfficiency {
    /// Angle between the sun vector and the panel normal, degrees.
    pub incidence_deg: f64,
    /// Cosine-law capture fraction in [0, 1]; a panel facing away from
    /// the sun produces zero, never negative.
    pub efficiency: f64,
}

/// Compute the incidence angle and efficiency of a panel against the
/// current sun position.
///
/// Closed form:
/// `cos(i) = sin(tilt)·cos(alt)·cos(sun_az - panel_az) + cos(tilt)·sin(alt)`
///
/// Identities preserved: at tilt 0 this reduces to `sin(alt)` (flat panel
/// equals horizontal-surface irradiance); at tilt 90 facing the sun it
/// reduces to `cos(alt)`.
pub fn panel_efficiency(panel: &PanelParameters, sun: &SolarAngles) -> PanelEfficiency {
    let tilt = panel.tilt_deg.to_radians();
    let alt = sun.altitude_deg.to_radians();
    let az_delta = sun.azimuth_rad - panel.azimuth_deg.to_radians();

    let cos_incidence =
        clamp_unit(tilt.sin() * alt.cos() * az_delta.cos() + tilt.cos() * alt.sin());

    PanelEfficiency {
        incidence_deg: cos_incidence.acos().to_degrees(),
        efficiency: cos_incidence.max(0.0),
    }
}

// ===================== ORIENTATION =====================

/// Panel orientation in the local east-north-up frame as a single
/// rotation: compass azimuth about the up (+Z) axis first, then tilt
/// about the rotated east (+X) axis. Order matters. Both angles are
/// negated because the compass runs clockwise (north toward east) while
/// the right-hand rule about +Z runs counter-clockwise.
pub fn panel_orientation(panel: &PanelParameters) -> UnitQuaternion<f64> {
    let q_azimuth =
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -panel.azimuth_deg.to_radians());
    let q_tilt = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -panel.tilt_deg.to_radians());
    q_azimuth * q_tilt
}

/// Unit normal of the panel face in the local frame.
///
/// Equals the composed rotation applied to the flat-panel normal (local
/// up), i.e. `(sin(tilt)·sin(az), sin(tilt)·cos(az), cos(tilt))` in
/// east-north-up components.
pub fn panel_normal(panel: &PanelParameters) -> Vector3<f64> {
    panel_orientation(panel) * Vector3::z()
}

// ===================== AUTO-ALIGN =====================

/// Snap the panel to the orientation that maximizes efficiency for the
/// current sun position.
///
/// Sets tilt to the zenith angle and azimuth to the sun azimuth, which
/// puts the panel normal parallel to the sun vector. When the sun is at
/// or below the horizon there is no meaningful optimum: tilt resets to
/// flat and azimuth is left unchanged. One-shot and idempotent.
pub fn auto_align(panel: &mut PanelParameters, sun: &SolarAngles) {
    if sun.is_day {
        panel.tilt_deg = sun.zenith_deg;
        panel.azimuth_deg = normalize_azimuth_deg(sun.azimuth_deg);
    } else {
        panel.tilt_deg = 0.0;
    }
}

// ===================== TESTS =====================
