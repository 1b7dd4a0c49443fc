//! Engine Entry Point
//!
//! Owns the explicit parameter structs and the single `recompute`
//! function that turns them into a full derived snapshot. There is no
//! hidden state and no triggering mechanism: whoever owns the parameters
//! calls `recompute` after every change and hands the result to its
//! consumers (renderer, HUD, status display).

use serde::Serialize;

use crate::angles::{solar_angles, SolarAngles};
use crate::panel::{panel_efficiency, PanelEfficiency, PanelParameters};
use crate::scene::{build_scene, SceneGeometry};
use crate::status::{status_message, LabMode, StatusInput};

// ===================== PARAMETERS =====================

/// The four observer/time parameters driving the simulation.
///
/// All four are independent; declination in particular is a free
/// "season" parameter, never derived from a calendar date here. Range
/// validation happens at the parameter-setting layer (CLI/UI), so every
/// function downstream is total over the documented domains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObserverParameters {
    /// Degrees, [-90, 90].
    pub latitude_deg: f64,
    /// Degrees, [-180, 180]; only affects the scene's world rotation.
    pub longitude_deg: f64,
    /// Degrees, [-23.5, 23.5].
    pub declination_deg: f64,
    /// Degrees, [-180, 180]; 0 is solar noon, 15 per hour.
    pub hour_angle_deg: f64,
}

impl Default for ObserverParameters {
    fn default() -> Self {
        // Original store defaults: 45N, early-summer declination, noon.
        Self { latitude_deg: 45.0, longitude_deg: 0.0, declination_deg: 23.0, hour_angle_deg: 0.0 }
    }
}

// ===================== DERIVED STATE =====================

/// Everything derived from one parameter snapshot.
///
/// An immutable value: recomputed whole on every change, never mutated.
#[derive(Debug, Clone)]
pub struct DerivedState {
    pub angles: SolarAngles,
    pub panel: PanelEfficiency,
    pub scene: SceneGeometry,
    pub status: &'static str,
}

/// Recompute the full derived state from the current parameters.
///
/// Deterministic and side-effect-free; calling it twice with the same
/// inputs yields identical output.
pub fn recompute(
    observer: &ObserverParameters,
    panel: &PanelParameters,
    mode: LabMode,
) -> DerivedState {
    let angles =
        solar_angles(observer.latitude_deg, observer.declination_deg, observer.hour_angle_deg);
    let efficiency = panel_efficiency(panel, &angles);
    let scene = build_scene(
        observer.latitude_deg,
        observer.longitude_deg,
        observer.declination_deg,
        observer.hour_angle_deg,
        panel,
        &angles,
    );
    let status = status_message(&StatusInput {
        lab_mode: mode,
        latitude_deg: observer.latitude_deg,
        declination_deg: observer.declination_deg,
        hour_angle_deg: observer.hour_angle_deg,
        altitude_deg: angles.altitude_deg,
        shadow_length_scale: angles.shadow_length_scale,
        panel_efficiency: efficiency.efficiency,
    });

    DerivedState { angles, panel: efficiency, scene, status }
}

// ===================== ANALYST SNAPSHOT =====================

/// Read-only snapshot handed to an external natural-language explainer.
///
/// The engine only supplies this on request; it never calls out itself.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalystSnapshot {
    pub latitude: f64,
    pub declination: f64,
    pub hour_angle: f64,
    pub altitude: f64,
    pub zenith_angle: f64,
    /// Incidence on a horizontal plane, which is the zenith angle.
    pub incident_angle: f64,
}

impl AnalystSnapshot {
    pub fn new(observer: &ObserverParameters, angles: &SolarAngles) -> Self {
        Self {
            latitude: observer.latitude_deg,
            declination: observer.declination_deg,
            hour_angle: observer.hour_angle_deg,
            altitude: angles.altitude_deg,
            zenith_angle: angles.zenith_deg,
            incident_angle: angles.zenith_deg,
        }
    }
}

// ===================== TESTS =====================
