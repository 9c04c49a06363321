//! Overlay module
//!
//! Procedural accessory drawing on top of a tracking snapshot:
//! - Accessory selection and styling
//! - Resolution-independent display-list primitives
//! - Pure shape-generation routines (ring, necklace, tiara)
//!
//! Rasterization belongs to the host drawing surface; this module only
//! produces geometry in pixel space for a given viewport.

pub mod accessory;
pub mod render;
pub mod shapes;

pub use accessory::{AccessoryKind, AccessoryStyle};
pub use render::render;
pub use shapes::{Color, Paint, Shape, Stroke, Viewport};
