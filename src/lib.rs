//! meteogram: multi-panel weather charting engine.
//!
//! This crate renders small time-series panels (temperature, precipitation,
//! wind, relative humidity) into backend-agnostic draw primitives, with
//! automatic "nice" axis ranges, drift-free tick labels, and device-pixel
//! correct surfaces.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Meteogram, PanelOptions, PanelSeries, SeriesKind};
pub use error::{ChartError, ChartResult};
