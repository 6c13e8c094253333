use tracing::debug;

use crate::api::frame_builder::{PanelSeries, build_panel_frame};
use crate::api::panel::{
    PanelOptions, humidity_panel, precipitation_panel, temperature_panel, wind_panel,
};
use crate::data::dataset::{CityDataset, normalize};
use crate::data::directory::CityDirectory;
use crate::data::source::DataSource;
use crate::error::ChartResult;
use crate::render::{Renderer, SurfaceSpec};

/// Surface specs for the four standard panels of one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSurfaces {
    pub temperature: SurfaceSpec,
    pub precipitation: SurfaceSpec,
    pub wind: SurfaceSpec,
    pub humidity: SurfaceSpec,
}

impl PanelSurfaces {
    /// Same spec for all four panels, the common stacked-panel layout.
    #[must_use]
    pub const fn uniform(spec: SurfaceSpec) -> Self {
        Self {
            temperature: spec,
            precipitation: spec,
            wind: spec,
            humidity: spec,
        }
    }
}

/// Token tying an in-flight dataset load to this orchestrator.
///
/// Only the most recently issued token may publish its dataset, so
/// overlapping fetches can never clobber the cache with stale data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken {
    seq: u64,
}

/// Chart orchestrator for the four standard weather panels.
///
/// Owns the single cached "last rendered" dataset used for resize-driven
/// repaints. The cache is replaced wholesale on each successful load, never
/// mutated in place.
#[derive(Debug, Default)]
pub struct Meteogram {
    last_dataset: Option<CityDataset>,
    load_seq: u64,
}

impl Meteogram {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders one chart onto one surface. Bad input degrades to empty or
    /// default axes; only backend failures surface as errors.
    pub fn render_panel<R: Renderer>(
        &self,
        renderer: &mut R,
        spec: SurfaceSpec,
        series: PanelSeries<'_>,
        options: &PanelOptions,
    ) -> ChartResult<()> {
        renderer.render(&build_panel_frame(spec, series, options))
    }

    /// Renders the four standard panels and caches the dataset for
    /// resize-driven repaints.
    pub fn render_all_from_dataset<R: Renderer>(
        &mut self,
        renderer: &mut R,
        surfaces: PanelSurfaces,
        dataset: CityDataset,
    ) -> ChartResult<()> {
        let dataset = self.last_dataset.insert(dataset);
        Self::render_standard_panels(renderer, surfaces, dataset)
    }

    /// Repaints the four standard panels from the cached dataset. No-op when
    /// nothing has been rendered yet.
    pub fn rerender_from_cache<R: Renderer>(
        &self,
        renderer: &mut R,
        surfaces: PanelSurfaces,
    ) -> ChartResult<()> {
        match &self.last_dataset {
            Some(dataset) => Self::render_standard_panels(renderer, surfaces, dataset),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn last_dataset(&self) -> Option<&CityDataset> {
        self.last_dataset.as_ref()
    }

    #[must_use]
    pub fn has_rendered(&self) -> bool {
        self.last_dataset.is_some()
    }

    /// Marks the start of a dataset load and invalidates earlier tokens.
    pub fn begin_load(&mut self) -> LoadToken {
        self.load_seq += 1;
        LoadToken { seq: self.load_seq }
    }

    /// Publishes a loaded dataset into the cache.
    ///
    /// Returns `false` and leaves the cache untouched when a newer load has
    /// been issued since `token` was taken.
    pub fn complete_load(&mut self, token: LoadToken, dataset: CityDataset) -> bool {
        if token.seq != self.load_seq {
            debug!(
                token = token.seq,
                current = self.load_seq,
                "discarding dataset from superseded load"
            );
            return false;
        }
        self.last_dataset = Some(dataset);
        true
    }

    /// Fetches, normalizes, caches, and renders one city. The fetch failure
    /// is the only error a caller sees besides backend failures; if the load
    /// was superseded while in flight the result is silently discarded.
    pub fn load_and_render<R: Renderer>(
        &mut self,
        source: &dyn DataSource,
        directory: &CityDirectory,
        slug: &str,
        renderer: &mut R,
        surfaces: PanelSurfaces,
    ) -> ChartResult<()> {
        let token = self.begin_load();
        let raw = source.fetch_city(slug)?;
        let dataset = normalize(slug, &raw, directory);
        if !self.complete_load(token, dataset) {
            return Ok(());
        }
        self.rerender_from_cache(renderer, surfaces)
    }

    fn render_standard_panels<R: Renderer>(
        renderer: &mut R,
        surfaces: PanelSurfaces,
        dataset: &CityDataset,
    ) -> ChartResult<()> {
        debug!(
            city = %dataset.city,
            samples = dataset.len(),
            "rendering standard panels"
        );

        renderer.render(&build_panel_frame(
            surfaces.temperature,
            PanelSeries::new(&dataset.timestamps, &dataset.temp),
            &temperature_panel(),
        ))?;

        let observed_max = dataset
            .precip
            .iter()
            .copied()
            .filter(|value| value.is_finite())
            .fold(0.0_f64, f64::max);
        renderer.render(&build_panel_frame(
            surfaces.precipitation,
            PanelSeries::new(&dataset.timestamps, &dataset.precip),
            &precipitation_panel(observed_max),
        ))?;

        renderer.render(&build_panel_frame(
            surfaces.wind,
            PanelSeries::new(&dataset.timestamps, &dataset.wind),
            &wind_panel(),
        ))?;

        renderer.render(&build_panel_frame(
            surfaces.humidity,
            PanelSeries::new(&dataset.timestamps, &dataset.rh),
            &humidity_panel(),
        ))
    }
}
