pub mod frame_builder;
pub mod layout;
pub mod meteogram;
pub mod panel;
pub mod snapshot;
pub mod style;

pub use frame_builder::{PanelSeries, build_panel_frame, panel_axis_range};
pub use meteogram::{LoadToken, Meteogram, PanelSurfaces};
pub use panel::{
    PanelOptions, SeriesKind, humidity_panel, precipitation_panel, temperature_panel, wind_panel,
};
pub use snapshot::{PANEL_SNAPSHOT_JSON_SCHEMA_V1, PanelSnapshot, snapshot_panel};
