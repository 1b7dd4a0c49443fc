//! Scene Geometry Builder
//!
//! Turns the position model and derived angles into renderable
//! primitives: pedagogical angle arcs on the reference sphere, the
//! diurnal sun path, the observer's local-frame rotation, the panel
//! orientation, and the human-and-shadow placement. Purely geometric;
//! all physics lives in `angles` and `panel`.

use nalgebra::{Matrix3, Rotation3, UnitQuaternion, Vector3};

use crate::angles::SolarAngles;
use crate::frame::{sun_direction, LocalFrame, SPHERE_RADIUS};
use crate::panel::{panel_orientation, PanelParameters};

// ===================== CONSTANTS =====================

/// Segments per angle arc; each arc yields `ARC_SEGMENTS + 1` points.
pub const ARC_SEGMENTS: usize = 32;

/// Arcs sit slightly above the sphere surface so they render on top.
pub const ARC_RADIUS: f64 = SPHERE_RADIUS * 1.01;

/// Hour-angle sampling step for the sun-path trajectory, degrees.
pub const SUN_PATH_STEP_DEG: f64 = 5.0;

/// Distance from the origin at which the sun marker is placed.
pub const SUN_DISTANCE: f64 = 80.0;

/// Radius of the horizon disc drawn around the observer.
pub const HORIZON_RADIUS: f64 = 8.0;

/// Height of the human figure, in scene units relative to the sphere.
pub const HUMAN_HEIGHT: f64 = 1.2;

/// Longest shadow the scene will draw, as a multiple of object height.
/// The raw physical value can reach ~100 near the horizon; the drawn
/// quad is capped so it stays inside the horizon disc.
pub const SHADOW_DRAW_CAP: f64 = 10.0;

// ===================== VALUE TYPES =====================

/// Human figure placement in the observer's local frame.
#[derive(Debug, Clone, Copy)]
pub struct HumanFigure {
    /// Center of the figure, local east-north-up coordinates.
    pub position: Vector3<f64>,
    /// Facing, radians from local north toward east (follows the sun).
    pub heading_rad: f64,
}

/// Ground shadow quad cast by the human figure; absent at night.
#[derive(Debug, Clone, Copy)]
pub struct ShadowQuad {
    /// Direction the shadow extends, radians from local north (sun
    /// azimuth plus half a turn).
    pub direction_rad: f64,
    /// Drawn length in scene units, capped at
    /// `SHADOW_DRAW_CAP * HUMAN_HEIGHT`.
    pub length: f64,
}

/// All renderable geometry for one parameter snapshot.
///
/// Recomputed whole on every change and discarded after consumption by
/// the renderer; nothing here is mutated in place.
#[derive(Debug, Clone)]
pub struct SceneGeometry {
    /// Meridian arc from the equator up to the observer's latitude.
    pub latitude_arc: Vec<Vector3<f64>>,
    /// Equatorial arc from the observer's meridian to the solar meridian.
    pub hour_angle_arc: Vec<Vector3<f64>>,
    /// Arc from the equator at the solar meridian up to the sub-solar
    /// point.
    pub declination_arc: Vec<Vector3<f64>>,
    /// Diurnal trajectory of the sun marker for the current declination.
    pub sun_path: Vec<Vector3<f64>>,
    /// World position of the sun marker.
    pub sun_position: Vector3<f64>,
    /// World position of the observer on the sphere.
    pub observer_position: Vector3<f64>,
    /// Rotation mapping local east-north-up axes into world space.
    pub observer_rotation: UnitQuaternion<f64>,
    /// Whole-scene rotation encoding the observer's longitude; applied
    /// to the textured sphere by the renderer, and inverted by
    /// click-to-set-location handlers.
    pub world_rotation: UnitQuaternion<f64>,
    /// Panel orientation in the local east-north-up frame (azimuth about
    /// up, then tilt); compose with `observer_rotation` for world space.
    pub panel_orientation: UnitQuaternion<f64>,
    /// Human figure placement.
    pub human: HumanFigure,
    /// Shadow quad, present only while the sun is up.
    pub shadow: Option<ShadowQuad>,
}

// ===================== ARC GENERATORS =====================

/// Interpolate an angle from 0 to `target_rad` in `ARC_SEGMENTS` equal
/// steps, mapping each sample through `point`.
fn sweep_arc(target_rad: f64, point: impl Fn(f64) -> Vector3<f64>) -> Vec<Vector3<f64>> {
    (0..=ARC_SEGMENTS)
        .map(|i| point(target_rad * i as f64 / ARC_SEGMENTS as f64))
        .collect()
}

/// Latitude arc: along the observer's meridian (Y-Z plane) from the
/// equator to the observer.
pub fn latitude_arc(latitude_deg: f64) -> Vec<Vector3<f64>> {
    sweep_arc(latitude_deg.to_radians(), |t| {
        Vector3::new(0.0, ARC_RADIUS * t.sin(), ARC_RADIUS * t.cos())
    })
}

/// Hour-angle arc: along the equator (X-Z plane) from the observer's
/// meridian to the solar meridian.
pub fn hour_angle_arc(hour_angle_deg: f64) -> Vec<Vector3<f64>> {
    sweep_arc(hour_angle_deg.to_radians(), |t| {
        Vector3::new(ARC_RADIUS * t.sin(), 0.0, ARC_RADIUS * t.cos())
    })
}

/// Declination arc: up from the equator at the solar meridian to the
/// sub-solar point.
pub fn declination_arc(declination_deg: f64, hour_angle_deg: f64) -> Vec<Vector3<f64>> {
    let ha = hour_angle_deg.to_radians();
    sweep_arc(declination_deg.to_radians(), |t| {
        Vector3::new(
            ARC_RADIUS * t.cos() * ha.sin(),
            ARC_RADIUS * t.sin(),
            ARC_RADIUS * t.cos() * ha.cos(),
        )
    })
}

/// Diurnal sun path: sweep the hour angle across the full range at the
/// current declination, at the sun-marker distance.
pub fn sun_path(declination_deg: f64) -> Vec<Vector3<f64>> {
    let steps = (360.0 / SUN_PATH_STEP_DEG) as i64;
    (0..=steps)
        .map(|i| {
            let ha = -180.0 + i as f64 * SUN_PATH_STEP_DEG;
            sun_direction(declination_deg, ha).into_inner() * SUN_DISTANCE
        })
        .collect()
}

// ===================== ROTATIONS =====================

/// Rotation taking the local east-north-up axes into world space:
/// +X to east, +Y to north, +Z to the zenith. Everything placed at the
/// observer (panel, human, horizon disc) is expressed in those axes.
///
/// The column order matters: `east × north = zenith`, so this ordered
/// basis has determinant +1 and the matrix is a genuine rotation. Any
/// other pairing of these three columns with +Y up would be a
/// reflection, which has no quaternion.
pub fn observer_rotation(frame: &LocalFrame) -> UnitQuaternion<f64> {
    let basis = Matrix3::from_columns(&[
        frame.east.into_inner(),
        frame.north.into_inner(),
        frame.zenith.into_inner(),
    ]);
    UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(basis))
}

/// Whole-scene longitude rotation about the polar axis.
///
/// The frame math fixes the observer's meridian at world longitude 0;
/// rotating the rendered sphere by the negated longitude makes the
/// texture's `longitude_deg` meridian pass under the observer. The
/// inverse of this rotation recovers a consistent longitude from a
/// clicked world position.
pub fn world_rotation(longitude_deg: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -longitude_deg.to_radians())
}

// ===================== SCENE ASSEMBLY =====================

/// Build the complete renderable scene for one parameter snapshot.
pub fn build_scene(
    latitude_deg: f64,
    longitude_deg: f64,
    declination_deg: f64,
    hour_angle_deg: f64,
    panel: &PanelParameters,
    sun: &SolarAngles,
) -> SceneGeometry {
    let frame = LocalFrame::for_latitude(latitude_deg);

    let shadow = sun.shadow_length_scale.map(|scale| ShadowQuad {
        direction_rad: sun.azimuth_rad + std::f64::consts::PI,
        length: scale.min(SHADOW_DRAW_CAP) * HUMAN_HEIGHT,
    });

    SceneGeometry {
        latitude_arc: latitude_arc(latitude_deg),
        hour_angle_arc: hour_angle_arc(hour_angle_deg),
        declination_arc: declination_arc(declination_deg, hour_angle_deg),
        sun_path: sun_path(declination_deg),
        sun_position: sun_direction(declination_deg, hour_angle_deg).into_inner() * SUN_DISTANCE,
        observer_position: crate::frame::observer_position(latitude_deg),
        observer_rotation: observer_rotation(&frame),
        world_rotation: world_rotation(longitude_deg),
        panel_orientation: panel_orientation(panel),
        human: HumanFigure {
            position: Vector3::new(0.0, 0.0, HUMAN_HEIGHT / 2.0),
            heading_rad: sun.azimuth_rad,
        },
        shadow,
    }
}

// ===================== TESTS =====================
