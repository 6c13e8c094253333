mod frame;
mod null_renderer;
mod primitives;
mod surface;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, PolylinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};
pub use surface::{
    ENFORCED_CLIENT_HEIGHT_PX, FALLBACK_CLIENT_HEIGHT_PX, FALLBACK_CLIENT_WIDTH_PX,
    MIN_CLIENT_HEIGHT_PX, Surface, SurfaceSpec,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart and dataset logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
