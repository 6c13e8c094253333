use serde::{Deserialize, Serialize};

use crate::api::frame_builder::{PanelSeries, build_panel_frame, panel_axis_range};
use crate::api::panel::PanelOptions;
use crate::core::range::AxisRange;
use crate::core::ticks::{format_tick, tick_values};
use crate::error::{ChartError, ChartResult};
use crate::render::SurfaceSpec;

pub const PANEL_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Deterministic summary of one rendered panel, used by the trace tool and
/// differential tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub axis: AxisRange,
    pub tick_labels: Vec<String>,
    pub line_count: usize,
    pub rect_count: usize,
    pub polyline_point_count: usize,
    pub text_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: PanelSnapshot,
}

/// Builds the frame for one panel and summarizes it.
#[must_use]
pub fn snapshot_panel(
    spec: SurfaceSpec,
    series: PanelSeries<'_>,
    options: &PanelOptions,
) -> PanelSnapshot {
    let axis = panel_axis_range(series, options);
    let frame = build_panel_frame(spec, series, options);

    PanelSnapshot {
        axis,
        tick_labels: tick_values(axis)
            .iter()
            .map(|&value| format_tick(value, axis.step))
            .collect(),
        line_count: frame.lines.len(),
        rect_count: frame.rects.len(),
        polyline_point_count: frame
            .polylines
            .iter()
            .map(|polyline| polyline.points.len())
            .sum(),
        text_count: frame.texts.len(),
    }
}

impl PanelSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = PanelSnapshotJsonContractV1 {
            schema_version: PANEL_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|err| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {err}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<PanelSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: PanelSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|err| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {err}"))
        })?;
        if payload.schema_version != PANEL_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
