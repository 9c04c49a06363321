//! Tracking module
//!
//! Temporal fusion of raw landmark frames into stable anchor points:
//! - Bounded per-key history with recency-weighted smoothing
//! - Visibility-based confidence gating for pose landmarks
//! - Derived geometry (neck center, shoulder width, face width)

pub mod fusion;
pub mod history;
pub mod keys;
pub mod snapshot;

pub use fusion::SmoothTracker;
pub use keys::{FaceKey, PoseKey};
pub use snapshot::{Point, TrackingSnapshot};
