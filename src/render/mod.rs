//! Platform-independent rendering: frame composition and the surface
//! lifecycle, driven through the [`Backend`] trait.

pub mod backend;
pub mod frame;
pub mod surface;

pub use backend::{Backend, PresentOutcome};
pub use frame::{compose, DrawCommand, SceneStyle, SurfaceKind};
pub use surface::{ResourceState, Surface, SurfaceOptions};
