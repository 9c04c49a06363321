//! Resolution-independent display-list primitives.
//!
//! The draw routines emit [`Shape`] values in pixel coordinates; the
//! host drawing surface consumes the list and owns rasterization. The
//! normalized-to-pixel conversion lives in [`Viewport`] and nowhere
//! else — the fusion engine never performs pixel-space math.

use glam::Vec2;
use serde::Serialize;

use crate::tracking::Point;

/// RGBA color with 0-1 channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// A single stop in a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    /// Position along the gradient axis (0.0 - 1.0)
    pub offset: f32,
    pub color: Color,
}

/// Fill paint for a shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Paint {
    Solid { color: Color },
    LinearGradient {
        from: Vec2,
        to: Vec2,
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self::Solid { color }
    }
}

/// Stroke style for outlines and lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// One display-list entry, in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<Paint>,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
    },
    Path {
        points: Vec<Vec2>,
        closed: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<Paint>,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
    },
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
}

/// Target drawing-surface dimensions.
///
/// Owns the only normalized-to-pixel conversion in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert a normalized anchor point to pixel coordinates.
    pub fn to_pixels(&self, point: &Point) -> Vec2 {
        Vec2::new(point.x * self.width, point.y * self.height)
    }

    /// Convert a normalized horizontal span to pixels.
    pub fn span_to_pixels(&self, span: f32) -> f32 {
        span * self.width
    }
}
