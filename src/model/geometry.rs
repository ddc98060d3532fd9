//! Plain geometry used to lay out a frame.
//!
//! Pixel sizes are physical (swap chain buffers, decoded images); `SizeF`,
//! `PointF` and `RectF` are device-independent pixels as reported by the
//! render target.

use super::constants::BASE_DPI;

/// Size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A zero dimension cannot back a swap chain.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when `self` exceeds `bounds` in either dimension.
    pub fn exceeds(&self, bounds: PixelSize) -> bool {
        self.width > bounds.width || self.height > bounds.height
    }
}

/// Size in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeF {
    pub width: f32,
    pub height: f32,
}

impl SizeF {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle anchored at the origin covering `size`.
    pub fn from_size(size: SizeF) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Straight (non-premultiplied) RGBA colour, components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Centre of an area.
pub fn center_of(area: SizeF) -> PointF {
    PointF::new(area.width / 2.0, area.height / 2.0)
}

/// Radius of the largest circle that fits `area` leaving `margin` on the
/// tighter axis. `None` when nothing would be visible.
pub fn circle_radius(area: SizeF, margin: f32) -> Option<f32> {
    let radius = area.width.min(area.height) / 2.0 - margin;
    (radius > 0.0).then_some(radius)
}

/// Rectangle of `content` size centred in `area`. Content larger than the
/// area overhangs evenly on both sides.
pub fn centered_rect(area: SizeF, content: SizeF) -> RectF {
    let left = (area.width - content.width) / 2.0;
    let top = (area.height - content.height) / 2.0;
    RectF::new(left, top, left + content.width, top + content.height)
}

/// Size an image of `native` size must be scaled to so that it fits inside
/// `bounds` with its aspect ratio kept.
///
/// Returns `None` when the image already fits; images are never upscaled.
pub fn fit_within(native: PixelSize, bounds: PixelSize) -> Option<PixelSize> {
    if native.is_empty() || bounds.is_empty() || !native.exceeds(bounds) {
        return None;
    }

    let (nw, nh) = (native.width as u64, native.height as u64);
    let (bw, bh) = (bounds.width as u64, bounds.height as u64);

    // Integer cross-multiplication keeps the constrained axis exact.
    let (width, height) = if bw * nh <= bh * nw {
        (bw, nh * bw / nw)
    } else {
        (nw * bh / nh, bh)
    };

    Some(PixelSize::new(
        (width as u32).clamp(1, bounds.width),
        (height as u32).clamp(1, bounds.height),
    ))
}

/// Convert a logical (96 DPI) length to physical pixels, rounding up.
pub fn scale_for_dpi(value: i32, dpi: u32) -> i32 {
    let dpi = if dpi == 0 { BASE_DPI } else { dpi };
    (value as f64 * dpi as f64 / BASE_DPI as f64).ceil() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_size_detection() {
        assert!(PixelSize::new(0, 10).is_empty());
        assert!(PixelSize::new(10, 0).is_empty());
        assert!(!PixelSize::new(1, 1).is_empty());
    }

    #[test]
    fn radius_uses_smaller_dimension() {
        let r = circle_radius(SizeF::new(800.0, 600.0), 8.0);
        assert_eq!(r, Some(292.0));
    }

    #[test]
    fn radius_vanishes_in_tiny_area() {
        assert_eq!(circle_radius(SizeF::new(16.0, 100.0), 8.0), None);
    }

    #[test]
    fn centered_rect_is_symmetric() {
        let rect = centered_rect(SizeF::new(100.0, 50.0), SizeF::new(40.0, 20.0));
        assert_eq!(rect, RectF::new(30.0, 15.0, 70.0, 35.0));
    }

    #[test]
    fn fit_keeps_aspect_ratio() {
        let fit = fit_within(PixelSize::new(400, 200), PixelSize::new(100, 100));
        assert_eq!(fit, Some(PixelSize::new(100, 50)));
    }

    #[test]
    fn fit_never_upscales() {
        assert_eq!(fit_within(PixelSize::new(50, 50), PixelSize::new(100, 100)), None);
        assert_eq!(fit_within(PixelSize::new(100, 100), PixelSize::new(100, 100)), None);
    }

    #[test]
    fn dpi_scaling_rounds_up() {
        assert_eq!(scale_for_dpi(640, 96), 640);
        assert_eq!(scale_for_dpi(640, 144), 960);
        assert_eq!(scale_for_dpi(16, 120), 20);
        assert_eq!(scale_for_dpi(7, 120), 9);
        assert_eq!(scale_for_dpi(100, 0), 100);
    }
}
