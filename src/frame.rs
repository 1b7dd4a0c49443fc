//! Observer and Sun Position Model
//!
//! Converts the scalar angle inputs (latitude, declination, hour angle)
//! into 3D direction vectors in a consistent right-handed world frame:
//! +Y is the polar axis, +Z passes through the observer's meridian at the
//! equator, and +X completes the right-handed set.
//!
//! Longitude is deliberately absent here: the hour angle is already
//! measured from the observer's meridian, so the frame math never needs
//! it. Longitude only shows up as a whole-scene rotation (see `scene`).

use nalgebra::{Unit, Vector3};

// ===================== CONSTANTS =====================

/// Radius of the reference sphere the observer stands on (scene units).
pub const SPHERE_RADIUS: f64 = 20.0;

// ===================== OBSERVER =====================

/// Position of the observer on the reference sphere.
///
/// The observer's meridian is fixed at world longitude 0, so the point is
/// `(0, R·sin(lat), R·cos(lat))`.
pub fn observer_position(latitude_deg: f64) -> Vector3<f64> {
    let lat = latitude_deg.to_radians();
    Vector3::new(0.0, SPHERE_RADIUS * lat.sin(), SPHERE_RADIUS * lat.cos())
}

// ===================== SUN =====================

/// Unit direction from the scene origin toward the sun.
///
/// Standard equatorial-to-Cartesian solar position: the hour angle is a
/// rotation about the polar (+Y) axis and the declination elevates the
/// sun above the equatorial plane.
pub fn sun_direction(declination_deg: f64, hour_angle_deg: f64) -> Unit<Vector3<f64>> {
    let dec = declination_deg.to_radians();
    let ha = hour_angle_deg.to_radians();
    let proj = dec.cos();
    Unit::new_normalize(Vector3::new(proj * ha.sin(), dec.sin(), proj * ha.cos()))
}

// ===================== LOCAL FRAME =====================

/// The {east, zenith, north} orthonormal basis at the observer.
#[derive(Debug, Clone, Copy)]
pub struct LocalFrame {
    pub east: Unit<Vector3<f64>>,
    pub zenith: Unit<Vector3<f64>>,
    pub north: Unit<Vector3<f64>>,
}

impl LocalFrame {
    /// Build the local frame for a latitude.
    ///
    /// `zenith` is the normalized observer position, `north` points
    /// toward the pole along the surface, and `east = north × zenith`.
    ///
    /// At exactly ±90° latitude "north along the surface" is undefined up
    /// to rotation; this construction stays finite (no NaN) but the east
    /// direction flips discontinuously across the pole.
    pub fn for_latitude(latitude_deg: f64) -> Self {
        let lat = latitude_deg.to_radians();
        let zenith = Unit::new_normalize(Vector3::new(0.0, lat.sin(), lat.cos()));
        let north = Unit::new_normalize(Vector3::new(0.0, lat.cos(), -lat.sin()));
        let east = Unit::new_normalize(north.cross(&zenith));
        Self { east, zenith, north }
    }

    /// Express a world-frame vector in this basis as (east, north, zenith)
    /// components.
    ///
    /// The component order is the right-handed east-north-up convention
    /// (`east × north = zenith`); everything expressed "in the local
    /// frame" across the crate uses these axes.
    pub fn to_local(&self, v: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(v.dot(&self.east), v.dot(&self.north), v.dot(&self.zenith))
    }
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_is_orthonormal(f: &LocalFrame) -> bool {
        let e = f.east.into_inner();
        let z = f.zenith.into_inner();
        let n = f.north.into_inner();
        e.dot(&z).abs() < 1e-12
            && e.dot(&n).abs() < 1e-12
            && z.dot(&n).abs() < 1e-12
            && (e.norm() - 1.0).abs() < 1e-12
            && (z.norm() - 1.0).abs() < 1e-12
            && (n.norm() - 1.0).abs() < 1e-12
    }

    #[test]
    fn test_observer_position_equator_and_poles() {
        let eq = observer_position(0.0);
        assert!((eq - Vector3::new(0.0, 0.0, SPHERE_RADIUS)).norm() < 1e-9);

        let np = observer_position(90.0);
        assert!((np - Vector3::new(0.0, SPHERE_RADIUS, 0.0)).norm() < 1e-9);

        let sp = observer_position(-90.0);
        assert!((sp - Vector3::new(0.0, -SPHERE_RADIUS, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn test_sun_direction_is_unit_and_matches_formula() {
        let s = sun_direction(23.5, 45.0);
        assert!((s.norm() - 1.0).abs() < 1e-12);

        let dec = 23.5_f64.to_radians();
        let ha = 45.0_f64.to_radians();
        assert!((s.x - dec.cos() * ha.sin()).abs() < 1e-12);
        assert!((s.y - dec.sin()).abs() < 1e-12);
        assert!((s.z - dec.cos() * ha.cos()).abs() < 1e-12);
    }

    #[test]
    fn test_sun_at_noon_equinox_points_along_observer_meridian() {
        let s = sun_direction(0.0, 0.0);
        assert!((s.into_inner() - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_local_frame_right_handed_across_latitudes() {
        for lat10 in -890..=890 {
            let lat = lat10 as f64 / 10.0;
            let f = LocalFrame::for_latitude(lat);
            assert!(frame_is_orthonormal(&f), "frame not orthonormal at lat {}", lat);

            // Right-handed: east × north == zenith
            let cross = f.east.cross(&f.north);
            assert!(
                (cross - f.zenith.into_inner()).norm() < 1e-9,
                "east x north != zenith at lat {}",
                lat
            );
        }
    }

    #[test]
    fn test_local_frame_equator_is_axis_aligned() {
        let f = LocalFrame::for_latitude(0.0);
        assert!((f.zenith.into_inner() - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-12);
        assert!((f.north.into_inner() - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
        assert!((f.east.into_inner() - Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_local_frame_no_nan_at_exact_poles() {
        for lat in [90.0, -90.0] {
            let f = LocalFrame::for_latitude(lat);
            for v in [f.east, f.zenith, f.north] {
                assert!(v.iter().all(|c| c.is_finite()), "NaN in frame at lat {}", lat);
            }
            assert!(frame_is_orthonormal(&f), "frame not orthonormal at pole {}", lat);
        }
    }

    #[test]
    fn test_to_local_projects_onto_basis() {
        let f = LocalFrame::for_latitude(45.0);
        let sun = sun_direction(10.0, 30.0);
        let local = f.to_local(&sun);

        // Components must reconstruct the original vector
        let rebuilt = f.east.into_inner() * local.x
            + f.north.into_inner() * local.y
            + f.zenith.into_inner() * local.z;
        assert!((rebuilt - sun.into_inner()).norm() < 1e-12);
    }
}
