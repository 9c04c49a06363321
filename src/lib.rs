//! Bijou - Virtual Accessory Overlay Pipeline
//!
//! A per-frame pipeline that:
//! - Fuses noisy body/face landmark detections into temporally stable
//!   anchor points (bounded-history recency-weighted smoothing with
//!   confidence gating)
//! - Derives composite geometry (neck center, shoulder width, face width)
//! - Places procedurally drawn accessories (ring, necklace, tiara) as a
//!   resolution-independent 2D display list
//!
//! The pose and face-mesh estimators are external collaborators: they feed
//! the pipeline one [`landmark::FrameInput`] packet per video frame. The
//! drawing surface is equally external; it consumes [`overlay::Shape`]
//! display lists and owns rasterization.

pub mod config;
pub mod error;
pub mod landmark;
pub mod overlay;
pub mod pipeline;
pub mod tracking;

pub use config::Config;
pub use error::{BijouError, Result};
pub use pipeline::{FrameOutput, FramePipeline};
pub use tracking::{SmoothTracker, TrackingSnapshot};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
