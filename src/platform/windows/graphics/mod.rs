//! Device-independent graphics objects, created once at start-up.
//!
//! # Module Structure
//!
//! - [`direct3d`]: Hardware Direct3D 11 device
//! - [`direct2d`]: Direct2D factory and WIC decoding
//! - [`directwrite`]: Text formats
//! - [`dxgi`]: Composition swap chains

pub mod direct2d;
pub mod direct3d;
pub mod directwrite;
pub mod dxgi;

pub use direct2d::Direct2D;
pub use direct3d::Direct3D;
pub use directwrite::DirectWrite;
pub use dxgi::Dxgi;

use crate::error::{Error, Result};

/// Factories shared by every surface.
///
/// Immutable after construction and handed out as `Rc<GraphicsContext>`; all
/// surfaces live on the UI thread.
pub struct GraphicsContext {
    pub direct3d: Direct3D,
    pub direct2d: Direct2D,
    pub direct_write: DirectWrite,
    pub dxgi: Dxgi,
}

impl GraphicsContext {
    /// Build every factory. COM must already be initialised.
    pub fn new() -> Result<Self> {
        let direct3d = Direct3D::new()
            .map_err(|e| Error::factory("Unable to create Direct3D device.", e.code().0))?;
        let dxgi_device = direct3d
            .dxgi_device()
            .map_err(|e| Error::factory("Unable to query DXGI device.", e.code().0))?;
        let direct2d = Direct2D::new()
            .map_err(|e| Error::factory("Unable to create Direct2D factory.", e.code().0))?;
        let direct_write = DirectWrite::new()
            .map_err(|e| Error::factory("Unable to create DirectWrite factory.", e.code().0))?;
        let dxgi = Dxgi::new(&dxgi_device)
            .map_err(|e| Error::factory("Unable to create DXGI factory.", e.code().0))?;

        log::debug!("Graphics context created");

        Ok(Self {
            direct3d,
            direct2d,
            direct_write,
            dxgi,
        })
    }
}
