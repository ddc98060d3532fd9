//! Constants and default values.
//!
//! Window geometry is expressed in logical (96 DPI) pixels and scaled to the
//! window's DPI when the window is positioned.

use super::geometry::Color;

// === Top-level Window ===

/// Window class and default title of the top-level window.
pub const TOP_LEVEL_CLASS_NAME: &str = "Compositing";

/// Default top-level window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: i32 = 640;

/// Default top-level window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 480;

/// Smallest accepted configured window dimension.
pub const MIN_WINDOW_DIMENSION: i32 = 64;

/// Largest accepted configured window dimension.
pub const MAX_WINDOW_DIMENSION: i32 = 8192;

// === Child Window ===

/// Window class of the embedded child window.
pub const CHILD_CLASS_NAME: &str = "CompositingChild";

/// Default child offset from the parent's client origin, logical pixels.
pub const DEFAULT_CHILD_OFFSET: i32 = 16;

/// Default child client size (square), logical pixels.
pub const DEFAULT_CHILD_SIZE: i32 = 144;

// === Images ===

/// Built-in image shown by the top-level window.
pub const DEFAULT_TOP_LEVEL_IMAGE: u32 = 1;

/// Built-in image shown by the child window.
pub const DEFAULT_CHILD_IMAGE: u32 = 2;

/// Largest built-in image number (`Image99`).
pub const MAX_IMAGE_NUMBER: u32 = 99;

/// Resource category of the built-in images.
pub const IMAGE_RESOURCE_CATEGORY: &str = "Image";

/// Longest dropped file path accepted, in UTF-16 units including the terminator.
pub const MAX_DROPPED_PATH: usize = 260;

// === Drawing ===

/// Gap between the circle and the nearest client edge, in DIPs.
pub const DEFAULT_CIRCLE_MARGIN: f32 = 8.0;

/// Circle fill colour (sea green, 75% opaque).
pub const DEFAULT_CIRCLE_COLOR: Color = Color::new(0.18, 0.55, 0.34, 0.75);

/// Status text colour.
pub const TEXT_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Background of every frame.
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

/// Status text font family.
pub const DEFAULT_FONT_FAMILY: &str = "Verdana";

/// Status text font size in DIPs.
pub const DEFAULT_FONT_SIZE: f32 = 24.0;

/// Smallest accepted font size.
pub const MIN_FONT_SIZE: f32 = 1.0;

/// Largest accepted font size.
pub const MAX_FONT_SIZE: f32 = 400.0;

/// DPI at which logical and physical pixels coincide.
pub const BASE_DPI: u32 = 96;

// === Keys ===

/// Virtual-key code of the Escape key.
pub const KEY_ESCAPE: u32 = 0x1B;
