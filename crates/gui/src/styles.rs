//! Styling constants and theme configuration

use iced::{Color, Size};

// Chart colors
pub const LINE_COLOR: Color = Color::from_rgb(0.173, 0.498, 0.722); // #2c7fb8
pub const AXIS_COLOR: Color = Color::from_rgb(0.75, 0.75, 0.75);
pub const GRID_COLOR: Color = Color::from_rgba(0.75, 0.75, 0.75, 0.3);
pub const LABEL_COLOR: Color = Color::from_rgb(0.85, 0.85, 0.85);

// Text
pub const RESULT_COLOR: Color = Color::from_rgb(0.45, 0.65, 1.0);
pub const HEADER_SIZE: f32 = 22.0;
pub const BODY_SIZE: f32 = 16.0;

// Dimensions
pub const WINDOW_SIZE: Size = Size::new(560.0, 760.0);
pub const MOVE_BUTTON_WIDTH: f32 = 120.0;
pub const CHART_HEIGHT: f32 = 280.0;
pub const CHART_MARGIN: f32 = 44.0;

/// Convert a shared `(r, g, b)` colour
pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::from_rgb8(r, g, b)
}
