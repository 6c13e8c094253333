use crate::render::Color;

/// Panel frame border.
pub const BORDER_COLOR: Color = Color::from_rgb8(0xe5, 0xe7, 0xeb);

/// Horizontal gridlines behind the series.
pub const GRID_COLOR: Color = Color::from_rgb8(0xf1, 0xf5, 0xf9);

/// Axis tick and date labels.
pub const LABEL_COLOR: Color = Color::from_rgb8(0x66, 0x70, 0x85);

/// Series colors used when panel options leave the color unset.
pub const DEFAULT_LINE_COLOR: Color = Color::from_rgb8(0x33, 0x41, 0x55);
pub const DEFAULT_BAR_COLOR: Color = Color::from_rgb8(0x94, 0xa3, 0xb8);

/// Standard panel series colors.
pub const TEMPERATURE_COLOR: Color = Color::from_rgb8(0x25, 0x63, 0xeb);
pub const PRECIPITATION_COLOR: Color = Color::from_rgb8(0x60, 0xa5, 0xfa);
pub const WIND_COLOR: Color = Color::from_rgb8(0x10, 0xb9, 0x81);
pub const HUMIDITY_COLOR: Color = Color::from_rgb8(0xf5, 0x9e, 0x0b);

pub const LABEL_FONT_SIZE_PX: f64 = 12.0;

/// Gap between the plot rectangle and the right-aligned Y tick labels.
pub const Y_LABEL_GAP_PX: f64 = 6.0;

/// Gap between the plot rectangle and the X date labels underneath.
pub const X_LABEL_GAP_PX: f64 = 6.0;

pub const BORDER_STROKE_WIDTH: f64 = 1.0;
pub const GRID_STROKE_WIDTH: f64 = 1.0;
