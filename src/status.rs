//! Status and Preset Heuristics
//!
//! Maps the numeric state to human-readable status text and provides the
//! named parameter presets. The status logic is an ordered rule table:
//! predicates are evaluated top to bottom and the first match wins, with
//! a fallback default per mode.

use serde::Serialize;

// ===================== LAB MODE =====================

/// Which half of the lab is active; selects the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LabMode {
    /// Observer, shadows, and angle arcs.
    #[default]
    Physics,
    /// Solar panel orientation and efficiency.
    Panel,
}

// ===================== STATUS INPUT =====================

/// Snapshot of everything the rule predicates may look at.
#[derive(Debug, Clone, Copy)]
pub struct StatusInput {
    pub lab_mode: LabMode,
    pub latitude_deg: f64,
    pub declination_deg: f64,
    pub hour_angle_deg: f64,
    pub altitude_deg: f64,
    /// `None` when the sun is down.
    pub shadow_length_scale: Option<f64>,
    pub panel_efficiency: f64,
}

// ===================== RULE TABLES =====================

type Rule = (fn(&StatusInput) -> bool, &'static str);

/// Panel-mode rules, in evaluation order.
const PANEL_RULES: &[Rule] = &[
    (|s| s.panel_efficiency > 0.95, "MAXIMUM POWER! ⚡🔋"),
    (|s| s.panel_efficiency > 0.8, "Grid is happy. Efficient! 🟢"),
    (|s| s.panel_efficiency < 0.2, "Are you powering a calculator? 🪫"),
    (|s| s.altitude_deg < 0.0, "Sun's down. Efficiency is zero. 🌑"),
];

const PANEL_DEFAULT: &str = "Adjusting tilt for gains... 🔧";

/// Physics-mode rules, in evaluation order.
const PHYSICS_RULES: &[Rule] = &[
    (|s| s.altitude_deg > 89.0, "Shadows have left the chat. 👻"),
    (|s| s.altitude_deg > 80.0, "Wear sunscreen. Serious sunscreen. 🧴"),
    (|s| s.altitude_deg < -18.0, "Astronomical Twilight. Pure darkness. 🌌"),
    (|s| s.altitude_deg < 0.0, "Vampire hours. 🧛"),
    (
        |s| s.latitude_deg > 66.0 && s.altitude_deg > 0.0 && s.hour_angle_deg.abs() > 170.0,
        "Midnight Sun party! ☀️🕺",
    ),
    (
        |s| s.latitude_deg.abs() < 1.0 && s.declination_deg.abs() < 1.0,
        "Equinox at the Equator. Perfectly balanced. ⚖️",
    ),
    (|s| s.shadow_length_scale.is_some_and(|l| l > 8.0), "Legs for days! (Long shadows) 🦒"),
];

const PHYSICS_DEFAULT: &str = "Just another day on a spinning rock. 🌍";

/// Return the display message for the current state: first matching rule
/// in the active mode's table, or that table's fallback.
pub fn status_message(input: &StatusInput) -> &'static str {
    let (rules, fallback) = match input.lab_mode {
        LabMode::Panel => (PANEL_RULES, PANEL_DEFAULT),
        LabMode::Physics => (PHYSICS_RULES, PHYSICS_DEFAULT),
    };
    rules.iter().find(|(pred, _)| pred(input)).map(|(_, msg)| *msg).unwrap_or(fallback)
}

// ===================== PRESETS =====================

/// Named (latitude, declination, hour angle) scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Equinox noon on the equator: sun at the zenith.
    Equator,
    /// North pole at the summer solstice: the sun never sets.
    MidnightSun,
    /// New York City at winter solstice noon.
    NycWinter,
    /// London at summer solstice noon.
    LondonSummer,
}

impl Preset {
    pub const ALL: [Preset; 4] =
        [Preset::Equator, Preset::MidnightSun, Preset::NycWinter, Preset::LondonSummer];

    /// The (latitude, declination, hour angle) this preset applies.
    pub fn params(self) -> (f64, f64, f64) {
        match self {
            Preset::Equator => (0.0, 0.0, 0.0),
            Preset::MidnightSun => (90.0, 23.5, 0.0),
            Preset::NycWinter => (40.7, -23.5, 0.0),
            Preset::LondonSummer => (51.5, 23.5, 0.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Equator => "equator",
            Preset::MidnightSun => "midnight-sun",
            Preset::NycWinter => "nyc-winter",
            Preset::LondonSummer => "london-summer",
        }
    }

    pub fn from_name(name: &str) -> Option<Preset> {
        Preset::ALL.into_iter().find(|p| p.name() == name)
    }
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;

    fn physics_input(altitude: f64) -> StatusInput {
        StatusInput {
            lab_mode: LabMode::Physics,
            latitude_deg: 40.0,
            declination_deg: 10.0,
            hour_angle_deg: 0.0,
            altitude_deg: altitude,
            shadow_length_scale: if altitude > 0.0 { Some(1.0) } else { None },
            panel_efficiency: 0.0,
        }
    }

    #[test]
    fn test_first_match_wins_at_high_altitude() {
        // 89.5 matches both the >89 and >80 rules; the earlier one wins.
        assert_eq!(status_message(&physics_input(89.5)), "Shadows have left the chat. 👻");
        assert_eq!(status_message(&physics_input(85.0)), "Wear sunscreen. Serious sunscreen. 🧴");
    }

    #[test]
    fn test_night_rules_order() {
        assert_eq!(status_message(&physics_input(-20.0)), "Astronomical Twilight. Pure darkness. 🌌");
        assert_eq!(status_message(&physics_input(-5.0)), "Vampire hours. 🧛");
    }

    #[test]
    fn test_midnight_sun_rule() {
        let mut input = physics_input(5.0);
        input.latitude_deg = 70.0;
        input.hour_angle_deg = 175.0;
        assert_eq!(status_message(&input), "Midnight Sun party! ☀️🕺");
    }

    #[test]
    fn test_equator_equinox_rule() {
        let mut input = physics_input(45.0);
        input.latitude_deg = 0.5;
        input.declination_deg = -0.5;
        assert_eq!(status_message(&input), "Equinox at the Equator. Perfectly balanced. ⚖️");
    }

    #[test]
    fn test_long_shadow_rule_and_fallback() {
        let mut input = physics_input(6.0);
        input.shadow_length_scale = Some(9.5);
        assert_eq!(status_message(&input), "Legs for days! (Long shadows) 🦒");

        input.shadow_length_scale = Some(2.0);
        assert_eq!(status_message(&input), "Just another day on a spinning rock. 🌍");
    }

    #[test]
    fn test_panel_mode_thresholds() {
        let mut input = physics_input(45.0);
        input.lab_mode = LabMode::Panel;

        input.panel_efficiency = 0.99;
        assert_eq!(status_message(&input), "MAXIMUM POWER! ⚡🔋");

        input.panel_efficiency = 0.85;
        assert_eq!(status_message(&input), "Grid is happy. Efficient! 🟢");

        input.panel_efficiency = 0.1;
        assert_eq!(status_message(&input), "Are you powering a calculator? 🪫");

        input.panel_efficiency = 0.5;
        assert_eq!(status_message(&input), "Adjusting tilt for gains... 🔧");
    }

    #[test]
    fn test_panel_mode_night_rule_precedence() {
        // At night efficiency is 0, which is < 0.2, so the calculator
        // quip outranks the sun-down message. Table order is the source
        // of truth here.
        let mut input = physics_input(-10.0);
        input.lab_mode = LabMode::Panel;
        input.panel_efficiency = 0.0;
        assert_eq!(status_message(&input), "Are you powering a calculator? 🪫");
    }

    #[test]
    fn test_preset_round_trip_by_name() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(Preset::from_name("mars"), None);
    }
}
