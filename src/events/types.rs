//! Window events as seen by a surface.
//!
//! The platform layer translates native window messages into these events so
//! the surface logic stays pure Rust with no FFI dependencies.

use std::path::PathBuf;

/// Lifecycle and input events routed to a surface owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Client area changed size (physical pixels).
    Resized { width: u32, height: u32 },

    /// The window needs repainting.
    Paint,

    /// Display configuration changed; treated like a paint request.
    DisplayChanged,

    /// A file was dropped on the window.
    FileDropped(PathBuf),

    /// A key was pressed (virtual-key code).
    KeyDown(u32),

    /// The window is being destroyed.
    Destroyed,
}

impl SurfaceEvent {
    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            SurfaceEvent::Resized { .. } => "Client area resized",
            SurfaceEvent::Paint => "Paint requested",
            SurfaceEvent::DisplayChanged => "Display changed",
            SurfaceEvent::FileDropped(_) => "File dropped",
            SurfaceEvent::KeyDown(_) => "Key pressed",
            SurfaceEvent::Destroyed => "Window destroyed",
        }
    }
}

/// What the window procedure should do after a surface handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// Consumed; nothing else to do.
    Handled,
    /// Consumed; invalidate the client area so a paint follows.
    Redraw,
    /// Consumed; end the message loop.
    Quit,
    /// Not for this surface; fall through to default processing.
    Unhandled,
}
