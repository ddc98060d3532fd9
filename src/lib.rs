//! Compositing surfaces: an image viewer drawn through Direct2D into
//! DirectComposition swap chains.
//!
//! Everything outside `platform` is plain Rust so tests run as normal
//! integration tests on any host.

pub mod error;
pub mod events;
pub mod model;
pub mod platform;
pub mod render;
pub mod storage;

pub use error::{Error, Result, SurfaceError};
pub use model::Color;

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into a colour.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let t = s.trim();
    let t = t.strip_prefix('#').unwrap_or(t);
    let hex = t.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b, a) = match hex.len() {
        6 => (byte(0)?, byte(2)?, byte(4)?, 255u8),
        8 => (byte(0)?, byte(2)?, byte(4)?, byte(6)?),
        _ => return None,
    };
    Some(Color::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ))
}
