use serde::{Deserialize, Serialize};

/// Client heights under this threshold get raised to the enforced height.
pub const MIN_CLIENT_HEIGHT_PX: f64 = 180.0;

/// Height substituted when the container reports a transiently small layout.
pub const ENFORCED_CLIENT_HEIGHT_PX: f64 = 200.0;

/// Defaults used when the container reports no usable size at all.
pub const FALLBACK_CLIENT_WIDTH_PX: f64 = 300.0;
pub const FALLBACK_CLIENT_HEIGHT_PX: f64 = 180.0;

/// Client rectangle and device pixel ratio as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    pub css_width: f64,
    pub css_height: f64,
    pub device_pixel_ratio: f64,
}

impl SurfaceSpec {
    #[must_use]
    pub const fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            css_width,
            css_height,
            device_pixel_ratio,
        }
    }
}

/// Device-pixel-correct drawing surface resolved from a client rectangle.
///
/// The backing resolution is `round(css_size * scale)` per axis; backends
/// apply a uniform `scale` transform so all drawing happens in CSS-pixel
/// units while rendering at full device resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    css_width: f64,
    css_height: f64,
    backing_width: u32,
    backing_height: u32,
    scale: f64,
}

impl Surface {
    /// Resolves a spec into a usable surface.
    ///
    /// Device pixel ratios are floored at 1; unusable client sizes fall back
    /// to 300x180; heights reported under 180 are raised to 200 so charts
    /// stay legible during transient layout states.
    #[must_use]
    pub fn from_spec(spec: SurfaceSpec) -> Self {
        let scale = if spec.device_pixel_ratio.is_finite() {
            spec.device_pixel_ratio.max(1.0)
        } else {
            1.0
        };
        let css_width = if spec.css_width.is_finite() && spec.css_width > 0.0 {
            spec.css_width
        } else {
            FALLBACK_CLIENT_WIDTH_PX
        };
        let mut css_height = if spec.css_height.is_finite() && spec.css_height > 0.0 {
            spec.css_height
        } else {
            FALLBACK_CLIENT_HEIGHT_PX
        };
        if css_height < MIN_CLIENT_HEIGHT_PX {
            css_height = ENFORCED_CLIENT_HEIGHT_PX;
        }

        Self {
            css_width,
            css_height,
            backing_width: (css_width * scale).round() as u32,
            backing_height: (css_height * scale).round() as u32,
            scale,
        }
    }

    /// Drawing-space size in CSS pixels.
    #[must_use]
    pub fn css_size(self) -> (f64, f64) {
        (self.css_width, self.css_height)
    }

    /// Backing-store resolution in device pixels.
    #[must_use]
    pub fn backing_size(self) -> (u32, u32) {
        (self.backing_width, self.backing_height)
    }

    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.css_width.is_finite()
            && self.css_height.is_finite()
            && self.css_width > 0.0
            && self.css_height > 0.0
            && self.backing_width > 0
            && self.backing_height > 0
            && self.scale >= 1.0
    }
}
