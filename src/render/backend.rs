//! The seam between the surface lifecycle and the graphics API.

use crate::error::SurfaceError;
use crate::model::{ImageSource, PixelSize, SizeF};

use super::frame::DrawCommand;

/// Result of handing a frame to the compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentOutcome {
    Presented,
    /// The surface is not visible right now. Not an error.
    Occluded,
}

/// Device operations a [`Surface`](super::Surface) drives.
///
/// `Target` bundles every device-dependent handle needed to draw and present
/// (device context, swap chain, composition target and visual, brushes); it
/// is created and dropped as one unit. `Source` is a decoded image and
/// `Bitmap` its device copy, scaled to the client area.
pub trait Backend {
    type Target;
    type Source;
    type Bitmap;

    /// Current client area in physical pixels.
    fn client_size(&self) -> PixelSize;

    /// Build the device-dependent tier with buffers of `size`.
    fn create_target(&mut self, size: PixelSize) -> Result<Self::Target, SurfaceError>;

    /// Resize the swap chain buffers in place and rebind the back buffer.
    fn resize_target(&mut self, target: &mut Self::Target, size: PixelSize)
        -> Result<(), SurfaceError>;

    /// Drawable size of the target in DIPs.
    fn target_size(&self, target: &Self::Target) -> SizeF;

    /// Decode an image.
    fn load_source(&mut self, image: &ImageSource) -> Result<Self::Source, SurfaceError>;

    /// Native size of a decoded image.
    fn source_size(&self, source: &Self::Source) -> Result<PixelSize, SurfaceError>;

    /// Create a device bitmap from `source`, scaled to `scale_to` if given.
    fn create_bitmap(
        &mut self,
        target: &Self::Target,
        source: &Self::Source,
        scale_to: Option<PixelSize>,
    ) -> Result<Self::Bitmap, SurfaceError>;

    /// Size of a device bitmap in DIPs.
    fn bitmap_size(&self, bitmap: &Self::Bitmap) -> SizeF;

    /// Execute `commands` between begin/end drawing.
    fn draw(
        &mut self,
        target: &mut Self::Target,
        commands: &[DrawCommand],
        bitmap: Option<&Self::Bitmap>,
    ) -> Result<(), SurfaceError>;

    /// Present the back buffer to the compositor.
    fn present(&mut self, target: &mut Self::Target) -> Result<PresentOutcome, SurfaceError>;
}
