//! Frame composition: which commands a surface issues for a given layout.

use crate::model::constants::{DEFAULT_CIRCLE_COLOR, DEFAULT_CIRCLE_MARGIN, TEXT_COLOR, TRANSPARENT};
use crate::model::geometry::{center_of, centered_rect, circle_radius};
use crate::model::{Color, PointF, RectF, SizeF};

/// Which of the two surface variants is drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Top-level window: circle, bitmap, status text. Accepts dropped files.
    TopLevel,
    /// Child window: bitmap only, transparent background.
    Child,
}

/// A single drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillEllipse {
        center: PointF,
        radius: f32,
        color: Color,
    },
    /// Draw the surface's current bitmap into `dest`.
    DrawBitmap { dest: RectF },
    DrawText {
        text: String,
        layout: RectF,
        color: Color,
    },
}

/// Appearance of a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    pub circle_color: Color,
    pub circle_margin: f32,
    /// Empty means no text.
    pub status_text: String,
    pub text_color: Color,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            circle_color: DEFAULT_CIRCLE_COLOR,
            circle_margin: DEFAULT_CIRCLE_MARGIN,
            status_text: String::new(),
            text_color: TEXT_COLOR,
        }
    }
}

/// Commands for one frame of a `target` sized surface. `bitmap` is the size
/// of the current device bitmap, if any.
pub fn compose(
    kind: SurfaceKind,
    target: SizeF,
    bitmap: Option<SizeF>,
    style: &SceneStyle,
) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Clear(TRANSPARENT)];

    if kind == SurfaceKind::TopLevel {
        if let Some(radius) = circle_radius(target, style.circle_margin) {
            commands.push(DrawCommand::FillEllipse {
                center: center_of(target),
                radius,
                color: style.circle_color,
            });
        }
    }

    if let Some(size) = bitmap {
        commands.push(DrawCommand::DrawBitmap {
            dest: centered_rect(target, size),
        });
    }

    if kind == SurfaceKind::TopLevel && !style.status_text.is_empty() {
        commands.push(DrawCommand::DrawText {
            text: style.status_text.clone(),
            layout: RectF::from_size(target),
            color: style.text_color,
        });
    }

    commands
}
