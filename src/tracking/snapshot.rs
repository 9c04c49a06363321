//! Per-frame fusion output.

use serde::Serialize;

use crate::landmark::RawLandmark;

/// A smoothed anchor point in normalized frame coordinates.
///
/// Depth defaults to 0 when the source model did not emit it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Build a history sample from a raw landmark, missing depth as 0.
    pub fn from_raw(landmark: &RawLandmark) -> Self {
        Self {
            x: landmark.x,
            y: landmark.y,
            z: landmark.z.unwrap_or(0.0),
        }
    }

    pub fn midpoint(a: Point, b: Point) -> Point {
        Point {
            x: (a.x + b.x) / 2.0,
            y: (a.y + b.y) / 2.0,
            z: (a.z + b.z) / 2.0,
        }
    }
}

/// Consolidated tracking output for one frame.
///
/// Every field is optional: presence depends on which landmarks were
/// delivered this frame and which passed the confidence gate. Absent
/// fields are omitted from serialized output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackingSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_shoulder: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_shoulder: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_wrist: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_wrist: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_index: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_index: Option<Point>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forehead: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chin: Option<Point>,

    /// Midpoint of the smoothed shoulders; present iff both shoulders are.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neck_center: Option<Point>,
    /// Normalized-space shoulder span; present iff both shoulders are.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoulder_width: Option<f32>,
    /// Normalized-space face span, gated independently of forehead/chin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_width: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pose_confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_confidence: Option<f32>,
}
