//! Events delivered to surfaces.
//!
//! Native window messages are translated into [`SurfaceEvent`]s by the
//! platform layer; a surface answers each with an [`EventResponse`] telling
//! the window procedure what to do next. Everything runs on the UI thread
//! that owns the windows, so there is no queue in between.
//!
//! # Module Structure
//!
//! - [`types`]: Event and response definitions

pub mod types;

pub use types::{EventResponse, SurfaceEvent};
