use crate::error::{ChartError, ChartResult};
use crate::render::surface::Surface;
use crate::render::{Color, LinePrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one panel draw pass.
///
/// Draw order is fixed: background clear, lines (frame border, gridlines),
/// rects (bars), polylines (line series), texts (labels).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub surface: Surface,
    pub background: Color,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    /// Creates an empty frame cleared to opaque white; panels are never
    /// composited over arbitrary backgrounds.
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            background: Color::rgb(1.0, 1.0, 1.0),
            lines: Vec::new(),
            rects: Vec::new(),
            polylines: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.lines.push(line);
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.rects.push(rect);
    }

    pub fn push_polyline(&mut self, polyline: PolylinePrimitive) {
        self.polylines.push(polyline);
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.texts.push(text);
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.surface.is_valid() {
            let (width, height) = self.surface.css_size();
            return Err(ChartError::InvalidSurface { width, height });
        }
        self.background.validate()?;

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.polylines.is_empty()
            && self.texts.is_empty()
    }
}
