//! sunlab: solar geometry simulation engine
//!
//! A pure, synchronous transform pipeline: four observer/time parameters
//! (latitude, longitude, declination, hour angle) plus two panel
//! parameters (tilt, azimuth) in; derived solar angles, panel
//! efficiency, and renderable scene geometry out. Every derived value is
//! recomputed from scratch on each call. There is no internal state,
//! no I/O, and no error path (the engine is total over its documented
//! input domain).

pub mod angles;
pub mod engine;
pub mod frame;
pub mod panel;
pub mod scene;
pub mod status;
pub mod units;

pub use angles::{solar_angles, SolarAngles};
pub use engine::{recompute, AnalystSnapshot, DerivedState, ObserverParameters};
pub use panel::{auto_align, panel_efficiency, PanelEfficiency, PanelParameters};
pub use scene::SceneGeometry;
pub use status::{LabMode, Preset};
