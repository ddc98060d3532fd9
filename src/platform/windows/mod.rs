//! Windows implementation: Direct3D 11, Direct2D, DirectWrite, WIC, DXGI and
//! DirectComposition behind the platform-independent [`Surface`](crate::render::Surface).
//!
//! - [`graphics`]: Process-wide factories (`GraphicsContext`)
//! - [`backend`]: `Backend` implementation drawing into a composition swap chain
//! - [`window`]: Window classes, creation and the window procedure

pub mod backend;
pub mod graphics;
pub mod window;

pub use backend::CompositionBackend;
pub use graphics::GraphicsContext;
pub use window::{create_child, create_top_level, register_window_classes};
