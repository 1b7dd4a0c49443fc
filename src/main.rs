use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;

use sunlab::engine::{recompute, AnalystSnapshot, ObserverParameters};
use sunlab::panel::{auto_align, PanelParameters};
use sunlab::status::{LabMode, Preset};
use sunlab::units::declination_for_day_of_year;

mod cli;
mod output;

use cli::Args;

// ===================== MAIN =====================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Preset wins over individual sliders, matching the UI buttons.
    let (latitude, declination, hour_angle) = match &args.preset {
        Some(name) => {
            // Names were validated by clap's value_parser list.
            Preset::from_name(name)
                .ok_or_else(|| format!("Unknown preset: {}", name))?
                .params()
        }
        None => (args.latitude, args.declination, args.hour_angle),
    };

    // --date derives declination from the day of year.
    let declination = match &args.date {
        Some(s) => {
            let date = if s == "today" {
                Local::now().date_naive()
            } else {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")?
            };
            declination_for_day_of_year(date.ordinal())
        }
        None => declination,
    };

    let observer = ObserverParameters {
        latitude_deg: latitude,
        longitude_deg: args.longitude,
        declination_deg: declination,
        hour_angle_deg: hour_angle,
    };

    let mode = match args.mode.as_str() {
        "panel" => LabMode::Panel,
        _ => LabMode::Physics,
    };

    let mut panel = PanelParameters { tilt_deg: args.panel_tilt, azimuth_deg: args.panel_azimuth };

    if args.auto_align {
        // Align against the same angles the report will show.
        let angles =
            sunlab::angles::solar_angles(latitude, observer.declination_deg, hour_angle);
        auto_align(&mut panel, &angles);
    }

    let state = recompute(&observer, &panel, mode);

    if args.json {
        output::print_json(&observer, &panel, &state)?;
    } else {
        output::print_telemetry(&observer, &panel, &state, mode);
    }

    if args.snapshot {
        output::print_snapshot(&AnalystSnapshot::new(&observer, &state.angles))?;
    }

    Ok(())
}
