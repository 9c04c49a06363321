//! Raw landmark input contract.
//!
//! Per-frame packets from the external pose and face-mesh estimators,
//! deserialized from JSON. Coordinates are normalized to the 0-1 frame
//! range; the pose model attaches a per-point `visibility` score, the
//! face mesh does not.

use serde::Deserialize;

/// Pose landmark indices (MediaPipe Pose topology).
pub const POSE_LEFT_SHOULDER: usize = 11;
pub const POSE_RIGHT_SHOULDER: usize = 12;
pub const POSE_LEFT_WRIST: usize = 15;
pub const POSE_RIGHT_WRIST: usize = 16;
pub const POSE_LEFT_INDEX: usize = 19;
pub const POSE_RIGHT_INDEX: usize = 20;

/// Face-mesh landmark indices (MediaPipe Face Mesh topology).
pub const FACE_FOREHEAD: usize = 10;
pub const FACE_CHIN: usize = 152;
pub const FACE_LEFT_EDGE: usize = 234;
pub const FACE_RIGHT_EDGE: usize = 454;

/// A single raw landmark sample in normalized frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawLandmark {
    pub x: f32,
    pub y: f32,
    /// Depth relative to the frame; not all models emit it.
    #[serde(default)]
    pub z: Option<f32>,
    /// Per-point confidence in [0, 1]; only the pose model provides it.
    #[serde(default)]
    pub visibility: Option<f32>,
}

/// One frame of pose landmarks, in fixed index order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PoseFrame {
    pub landmarks: Vec<RawLandmark>,
}

impl PoseFrame {
    /// Landmark at a fixed topology index, or `None` if the list is short.
    pub fn get(&self, index: usize) -> Option<&RawLandmark> {
        self.landmarks.get(index)
    }
}

/// One frame of face-mesh landmarks, in fixed index order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaceFrame {
    pub landmarks: Vec<RawLandmark>,
}

impl FaceFrame {
    /// Landmark at a fixed topology index, or `None` if the list is short.
    pub fn get(&self, index: usize) -> Option<&RawLandmark> {
        self.landmarks.get(index)
    }
}

/// Combined per-frame input. Either source may be absent: a missing
/// result means "no data from this source this frame", not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrameInput {
    #[serde(default)]
    pub pose: Option<PoseFrame>,
    #[serde(default)]
    pub face_mesh: Option<FaceFrame>,
}
