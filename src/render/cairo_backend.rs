use cairo::{Context, Format, ImageSurface, LineCap, LineJoin};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TextVAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub polylines_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo image-surface renderer backend.
///
/// The backing surface is recreated whenever the frame's device-pixel size
/// changes (container resize, DPR change); drawing commands are issued in
/// CSS-pixel units under a uniform scale transform.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(frame_surface: crate::render::Surface) -> ChartResult<Self> {
        let (width, height) = frame_surface.backing_size();
        let surface = create_image_surface(width, height)?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn ensure_backing(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let (width, height) = frame.surface.backing_size();
        if self.surface.width() != width as i32 || self.surface.height() != height as i32 {
            self.surface = create_image_surface(width, height)?;
        }
        Ok(())
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        context.scale(frame.surface.scale(), frame.surface.scale());

        apply_color(context, frame.background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.set_line_cap(LineCap::Butt);
            context.set_line_join(LineJoin::Miter);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for rect in &frame.rects {
            apply_color(context, rect.fill_color);
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            stats.rects_drawn += 1;
        }

        for polyline in &frame.polylines {
            apply_color(context, polyline.color);
            context.set_line_width(polyline.stroke_width);
            context.set_line_cap(LineCap::Round);
            context.set_line_join(LineJoin::Round);
            let mut points = polyline.points.iter();
            if let Some(first) = points.next() {
                context.move_to(first.x, first.y);
                for point in points {
                    context.line_to(point.x, point.y);
                }
            }
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
            stats.polylines_drawn += 1;
        }

        for text in &frame.texts {
            context.select_font_face("sans-serif", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
            context.set_font_size(text.font_size_px);
            let extents = context
                .text_extents(&text.text)
                .map_err(|err| map_backend_error("failed to measure text", err))?;

            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - extents.width() / 2.0,
                TextHAlign::Right => text.x - extents.width(),
            };
            // Toy text API draws from the baseline; approximate the vertical
            // anchor with the ink height.
            let y = match text.v_align {
                TextVAlign::Top => text.y + extents.height(),
                TextVAlign::Middle => text.y + extents.height() / 2.0,
                TextVAlign::Bottom => text.y,
            };

            apply_color(context, text.color);
            context.move_to(x, y);
            context
                .show_text(&text.text)
                .map_err(|err| map_backend_error("failed to draw text", err))?;
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.ensure_backing(frame)?;
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

fn create_image_surface(width: u32, height: u32) -> ChartResult<ImageSurface> {
    if width == 0 || height == 0 {
        return Err(ChartError::InvalidData(
            "cairo surface size must be > 0".to_owned(),
        ));
    }
    ImageSurface::create(Format::ARgb32, width as i32, height as i32)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(stage: &str, err: impl std::fmt::Display) -> ChartError {
    ChartError::InvalidData(format!("{stage}: {err}"))
}
