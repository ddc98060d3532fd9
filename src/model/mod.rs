//! Pure model shared by both surfaces (no FFI).
//!
//! Geometry, image selection and built-in assets live here so they can be
//! tested on any platform. The Windows pipeline is in `platform::windows`.

pub mod assets;
pub mod constants;
pub mod geometry;
pub mod image_source;

pub use constants::*;
pub use geometry::{Color, PixelSize, PointF, RectF, SizeF};
pub use image_source::ImageSource;
