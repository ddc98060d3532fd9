//! Surface owner: the device-resource lifecycle shared by the top-level and
//! child windows.
//!
//! Device-dependent resources are created lazily by [`Surface::render`] and
//! dropped together whenever the device reports a failure, so the next paint
//! rebuilds them from scratch:
//!
//! ```text
//!   NoDeviceResources ──render ok──▶ DeviceResourcesReady
//!          ▲                                │
//!          └── present / resize failure ────┘
//! ```

use std::path::PathBuf;

use crate::error::SurfaceError;
use crate::events::{EventResponse, SurfaceEvent};
use crate::model::constants::KEY_ESCAPE;
use crate::model::geometry::fit_within;
use crate::model::{ImageSource, PixelSize};

use super::backend::{Backend, PresentOutcome};
use super::frame::{compose, SceneStyle, SurfaceKind};

/// Which tier of resources currently exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    NoDeviceResources,
    DeviceResourcesReady,
}

/// Construction parameters of a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceOptions {
    pub kind: SurfaceKind,
    /// Image shown from the first frame on, if any.
    pub image: Option<ImageSource>,
    pub style: SceneStyle,
}

enum SourceSlot<S> {
    Empty,
    /// Decoding failed; retried only after a new image is selected.
    Failed,
    Loaded(S),
}

/// A window's rendering surface and the resources behind it.
pub struct Surface<B: Backend> {
    kind: SurfaceKind,
    backend: B,
    image: Option<ImageSource>,
    style: SceneStyle,
    target: Option<B::Target>,
    source: SourceSlot<B::Source>,
    bitmap: Option<B::Bitmap>,
}

impl<B: Backend> Surface<B> {
    pub fn new(backend: B, options: SurfaceOptions) -> Self {
        Self {
            kind: options.kind,
            backend,
            image: options.image,
            style: options.style,
            target: None,
            source: SourceSlot::Empty,
            bitmap: None,
        }
    }

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    pub fn state(&self) -> ResourceState {
        if self.target.is_some() {
            ResourceState::DeviceResourcesReady
        } else {
            ResourceState::NoDeviceResources
        }
    }

    pub fn image(&self) -> Option<&ImageSource> {
        self.image.as_ref()
    }

    pub fn has_bitmap(&self) -> bool {
        self.bitmap.is_some()
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// React to a window event.
    pub fn handle(&mut self, event: SurfaceEvent) -> EventResponse {
        match event {
            SurfaceEvent::Resized { width, height } => {
                self.on_resize(width, height);
                EventResponse::Handled
            }
            SurfaceEvent::Paint | SurfaceEvent::DisplayChanged => {
                if let Err(e) = self.render() {
                    log::debug!("{:?} frame skipped: {}", self.kind, e);
                }
                EventResponse::Handled
            }
            SurfaceEvent::FileDropped(path) => self.on_drop_file(path),
            SurfaceEvent::KeyDown(key) => self.on_key_down(key),
            SurfaceEvent::Destroyed => {
                self.discard_device_resources();
                match self.kind {
                    SurfaceKind::TopLevel => EventResponse::Quit,
                    SurfaceKind::Child => EventResponse::Handled,
                }
            }
        }
    }

    /// Render and present one frame, creating device resources first if
    /// needed. A device failure discards every device-dependent resource.
    pub fn render(&mut self) -> Result<PresentOutcome, SurfaceError> {
        let result = self.render_frame();
        if let Err(e) = &result {
            if e.invalidates_device() {
                log::warn!("{:?} surface: {}; discarding device resources", self.kind, e);
                self.discard_device_resources();
            }
        }
        result
    }

    fn render_frame(&mut self) -> Result<PresentOutcome, SurfaceError> {
        let size = self.backend.client_size();
        if size.is_empty() {
            return Err(SurfaceError::EmptyClientArea);
        }

        let target = match self.target.take() {
            Some(target) => target,
            None => {
                let target = self.backend.create_target(size)?;
                log::debug!(
                    "{:?} device resources created ({}x{})",
                    self.kind,
                    size.width,
                    size.height
                );
                target
            }
        };
        let target = self.target.insert(target);

        if self.bitmap.is_none() {
            if let Some(image) = &self.image {
                self.bitmap =
                    prepare_bitmap(&mut self.backend, &mut self.source, image, target, size)?;
            }
        }

        let target_size = self.backend.target_size(target);
        let bitmap_size = self.bitmap.as_ref().map(|b| self.backend.bitmap_size(b));
        let commands = compose(self.kind, target_size, bitmap_size, &self.style);

        self.backend.draw(target, &commands, self.bitmap.as_ref())?;
        self.backend.present(target)
    }

    /// Client area changed. The bitmap is rescaled on the next frame; the
    /// swap chain is resized in place or, failing that, discarded.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        let Some(target) = self.target.as_mut() else {
            return;
        };

        self.bitmap = None;

        let size = PixelSize::new(width, height);
        let result = if size.is_empty() {
            Err(SurfaceError::EmptyClientArea)
        } else {
            self.backend.resize_target(target, size)
        };

        if let Err(e) = result {
            log::debug!("{:?} resize to {}x{}: {}", self.kind, width, height, e);
            self.discard_device_resources();
        }
    }

    /// Show a dropped file. Only the top-level surface accepts drops.
    pub fn on_drop_file(&mut self, path: PathBuf) -> EventResponse {
        if self.kind != SurfaceKind::TopLevel {
            return EventResponse::Unhandled;
        }

        log::info!("Showing {}", path.display());
        self.image = Some(ImageSource::File(path));
        self.discard_bitmap_source();
        EventResponse::Redraw
    }

    /// Escape closes the application from the top-level surface.
    pub fn on_key_down(&mut self, key: u32) -> EventResponse {
        if self.kind == SurfaceKind::TopLevel && key == KEY_ESCAPE {
            EventResponse::Quit
        } else {
            EventResponse::Unhandled
        }
    }

    fn discard_bitmap_source(&mut self) {
        self.bitmap = None;
        self.source = SourceSlot::Empty;
    }

    /// Drop the whole device-dependent tier.
    pub fn discard_device_resources(&mut self) {
        self.discard_bitmap_source();
        self.target = None;
    }
}

/// Decode `image` if needed and create its device bitmap, scaled down to
/// `area`. Image failures are logged and leave the surface without a bitmap.
fn prepare_bitmap<B: Backend>(
    backend: &mut B,
    slot: &mut SourceSlot<B::Source>,
    image: &ImageSource,
    target: &B::Target,
    area: PixelSize,
) -> Result<Option<B::Bitmap>, SurfaceError> {
    if matches!(slot, SourceSlot::Empty) {
        *slot = match backend.load_source(image) {
            Ok(source) => SourceSlot::Loaded(source),
            Err(e) if e.invalidates_device() => return Err(e),
            Err(e) => {
                log::warn!("{}", e);
                SourceSlot::Failed
            }
        };
    }

    let SourceSlot::Loaded(source) = slot else {
        return Ok(None);
    };

    match build_bitmap(backend, source, target, area) {
        Ok(bitmap) => Ok(Some(bitmap)),
        Err(e) if e.invalidates_device() => Err(e),
        Err(e) => {
            log::warn!("{}", e);
            *slot = SourceSlot::Failed;
            Ok(None)
        }
    }
}

fn build_bitmap<B: Backend>(
    backend: &mut B,
    source: &B::Source,
    target: &B::Target,
    area: PixelSize,
) -> Result<B::Bitmap, SurfaceError> {
    let native = backend.source_size(source)?;
    let scale_to = fit_within(native, area);
    if let Some(fit) = scale_to {
        log::debug!(
            "Scaling {}x{} image to {}x{}",
            native.width,
            native.height,
            fit.width,
            fit.height
        );
    }
    backend.create_bitmap(target, source, scale_to)
}
