//! Command-Line Interface Module
//!
//! Argument parsing and range validation for the sunlab binary. All
//! domain clamping happens here, at the parameter-setting boundary, so
//! the engine itself never has to reject an input.

use clap::Parser;

// ===================== CLI =====================

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Observer latitude in decimal degrees (-90 to 90)
    #[arg(long, default_value_t = 45.0, allow_hyphen_values = true, value_parser = parse_latitude, env = "SUNLAB_LATITUDE")]
    pub latitude: f64,

    /// Observer longitude in decimal degrees (-180 to 180); only rotates
    /// the rendered globe, never the angle math
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true, value_parser = parse_longitude, env = "SUNLAB_LONGITUDE")]
    pub longitude: f64,

    /// Solar declination in degrees (-23.5 to 23.5); season proxy
    #[arg(long, default_value_t = 23.0, allow_hyphen_values = true, value_parser = parse_declination, env = "SUNLAB_DECLINATION")]
    pub declination: f64,

    /// Hour angle in degrees (-180 to 180); 0 = solar noon, 15 per hour
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true, value_parser = parse_hour_angle, env = "SUNLAB_HOUR_ANGLE")]
    pub hour_angle: f64,

    /// Derive declination from a calendar date (YYYY-MM-DD or "today");
    /// overrides --declination
    #[arg(long, conflicts_with = "declination")]
    pub date: Option<String>,

    /// Apply a named preset scenario (overrides latitude/declination/hour-angle)
    #[arg(long, value_parser = ["equator", "midnight-sun", "nyc-winter", "london-summer"])]
    pub preset: Option<String>,

    /// Lab mode: which status table and telemetry block to show
    #[arg(long, default_value = "physics", value_parser = ["physics", "panel"], env = "SUNLAB_MODE")]
    pub mode: String,

    // ===================== SOLAR PANEL OPTIONS =====================
    /// Panel tilt in degrees (0 = flat/horizontal, 90 = vertical)
    #[arg(long, default_value_t = 30.0, value_parser = parse_tilt, env = "SUNLAB_PANEL_TILT")]
    pub panel_tilt: f64,

    /// Panel azimuth in degrees (0 = North, 90 = East, 180 = South)
    #[arg(long, default_value_t = 180.0, value_parser = parse_azimuth, env = "SUNLAB_PANEL_AZIMUTH")]
    pub panel_azimuth: f64,

    /// Auto-align the panel to the current sun position before reporting
    /// (tilt = zenith angle, azimuth = sun azimuth; flat at night)
    #[arg(long)]
    pub auto_align: bool,

    // ===================== OUTPUT OPTIONS =====================
    /// Emit the derived state as JSON instead of the telemetry table
    #[arg(long)]
    pub json: bool,

    /// Include the analyst snapshot payload in the output
    #[arg(long)]
    pub snapshot: bool,
}

// ===================== CLI VALUE PARSERS =====================

fn parse_latitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-90.0..=90.0).contains(&v) {
        return Err(format!("Latitude must be between -90 and 90, got {}", v));
    }
    Ok(v)
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-180.0..=180.0).contains(&v) {
        return Err(format!("Longitude must be between -180 and 180, got {}", v));
    }
    Ok(v)
}

fn parse_declination(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-23.5..=23.5).contains(&v) {
        return Err(format!("Declination must be between -23.5 and 23.5, got {}", v));
    }
    Ok(v)
}

fn parse_hour_angle(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-180.0..=180.0).contains(&v) {
        return Err(format!("Hour angle must be between -180 and 180, got {}", v));
    }
    Ok(v)
}

fn parse_tilt(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(0.0..=90.0).contains(&v) {
        return Err(format!("Tilt must be between 0 and 90 degrees, got {}", v));
    }
    Ok(v)
}

fn parse_azimuth(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(0.0..=360.0).contains(&v) {
        return Err(format!("Azimuth must be between 0 and 360 degrees, got {}", v));
    }
    Ok(v)
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_parsers_accept_domain_and_reject_outside() {
        assert!(parse_latitude("45.5").is_ok());
        assert!(parse_latitude("-90").is_ok());
        assert!(parse_latitude("90.01").is_err());
        assert!(parse_latitude("north").is_err());

        assert!(parse_declination("23.5").is_ok());
        assert!(parse_declination("24").is_err());

        assert!(parse_hour_angle("-180").is_ok());
        assert!(parse_hour_angle("181").is_err());

        assert!(parse_tilt("0").is_ok());
        assert!(parse_tilt("-1").is_err());

        assert!(parse_azimuth("359.9").is_ok());
        assert!(parse_azimuth("400").is_err());
    }

    #[test]
    fn test_args_parse_defaults() {
        let args = Args::parse_from(["sunlab"]);
        assert_eq!(args.latitude, 45.0);
        assert_eq!(args.declination, 23.0);
        assert_eq!(args.hour_angle, 0.0);
        assert_eq!(args.panel_tilt, 30.0);
        assert_eq!(args.panel_azimuth, 180.0);
        assert_eq!(args.mode, "physics");
    }

    #[test]
    fn test_args_parse_preset_and_mode() {
        let args = Args::parse_from(["sunlab", "--preset", "nyc-winter", "--mode", "panel"]);
        assert_eq!(args.preset.as_deref(), Some("nyc-winter"));
        assert_eq!(args.mode, "panel");
    }
}
