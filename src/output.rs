//! Output Formatting Module
//!
//! Terminal and JSON rendering of one derived snapshot for the sunlab
//! binary. The engine hands over value types; everything display-shaped
//! (degree signs, the "∞" shadow, percent bars) lives here.

use serde_json::json;

use sunlab::engine::{AnalystSnapshot, DerivedState, ObserverParameters};
use sunlab::panel::PanelParameters;
use sunlab::status::LabMode;

// ===================== FORMAT HELPERS =====================

/// Format an angle for display, one decimal: "25.8°".
pub fn format_angle(deg: f64) -> String {
    format!("{:.1}°", deg)
}

/// Format a unit-interval quantity as a percentage: "87%".
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Format the shadow length scale; the night sentinel renders as "∞".
pub fn format_shadow(scale: Option<f64>) -> String {
    match scale {
        Some(s) => format!("{:.1}× height", s),
        None => "∞".to_string(),
    }
}

/// Format a day length as hours and minutes: "9h 04m".
pub fn format_day_length(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    format!("{}h {:02}m", total_minutes / 60, total_minutes % 60)
}

// ===================== TERMINAL OUTPUT =====================

/// Print the telemetry table for one snapshot.
pub fn print_telemetry(
    observer: &ObserverParameters,
    panel: &PanelParameters,
    state: &DerivedState,
    mode: LabMode,
) {
    println!("\"{}\"", state.status);
    println!("---");
    println!(
        "Observer: lat {}  lon {}  dec {}  ha {}",
        format_angle(observer.latitude_deg),
        format_angle(observer.longitude_deg),
        format_angle(observer.declination_deg),
        format_angle(observer.hour_angle_deg),
    );
    println!("---");
    println!(
        "Solar Altitude: {}   Zenith Angle: {}   Azimuth: {}",
        format_angle(state.angles.altitude_deg),
        format_angle(state.angles.zenith_deg),
        format_angle(state.angles.azimuth_deg),
    );
    println!(
        "Day Length: {}   {}",
        format_day_length(state.angles.day_length_hours),
        if state.angles.is_day { "☀ Day" } else { "🌑 Night" },
    );

    match mode {
        LabMode::Physics => {
            println!(
                "Relative Energy: {}   Shadow: {}",
                format_percent(state.angles.relative_irradiance),
                format_shadow(state.angles.shadow_length_scale),
            );
        }
        LabMode::Panel => {
            println!(
                "Panel: tilt {}  azimuth {}   Incidence: {}   Efficiency: {}",
                format_angle(panel.tilt_deg),
                format_angle(panel.azimuth_deg),
                format_angle(state.panel.incidence_deg),
                format_percent(state.panel.efficiency),
            );
        }
    }
}

/// Print the analyst snapshot payload as pretty JSON.
pub fn print_snapshot(snapshot: &AnalystSnapshot) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(snapshot)?);
    Ok(())
}

// ===================== JSON OUTPUT =====================

/// Serialize the derived state (scalars, not scene buffers) as JSON.
pub fn print_json(
    observer: &ObserverParameters,
    panel: &PanelParameters,
    state: &DerivedState,
) -> serde_json::Result<()> {
    let value = json!({
        "observer": observer,
        "panel": panel,
        "angles": state.angles,
        "efficiency": state.panel,
        "status": state.status,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

// ===================== TESTS =====================
