//! Temporal fusion engine.
//!
//! Consumes one raw landmark frame at a time, gates pose samples on
//! visibility, smooths accepted samples through the bounded per-key
//! history, derives composite geometry, and assembles the per-frame
//! [`TrackingSnapshot`]. One instance tracks one subject; history is the
//! only state carried across frames.

use tracing::debug;

use super::history::HistoryBank;
use super::keys::{FaceKey, PoseKey};
use super::snapshot::{Point, TrackingSnapshot};
use crate::landmark::{FaceFrame, FrameInput, PoseFrame, RawLandmark};

/// Minimum pose visibility for a sample to enter history. A sample at
/// exactly the threshold is accepted; the aggregate confidence count
/// uses a strict comparison.
const VISIBILITY_THRESHOLD: f32 = 0.5;

/// The face mesh exposes no per-point confidence; report a fixed score.
const FACE_CONFIDENCE: f32 = 0.8;

/// Per-subject smoothing and fusion engine.
///
/// Call [`process`](Self::process) once per frame; call
/// [`reset`](Self::reset) between frames to drop all smoothing state
/// (tracking-source restart, accessory switch).
#[derive(Debug, Clone, Default)]
pub struct SmoothTracker {
    pose_history: HistoryBank<{ PoseKey::COUNT }>,
    face_history: HistoryBank<{ FaceKey::COUNT }>,
}

impl SmoothTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fuse one frame of raw landmarks into a tracking snapshot.
    ///
    /// Returns `None` when the frame yielded nothing trackable: neither
    /// the shoulder pair nor the forehead produced a usable anchor.
    /// Absent sources and gated-out landmarks are normal conditions,
    /// never errors.
    pub fn process(&mut self, input: &FrameInput) -> Option<TrackingSnapshot> {
        let mut snapshot = TrackingSnapshot::default();
        let mut has_valid_data = false;

        if let Some(pose) = &input.pose {
            let left = self.smooth_pose(PoseKey::LeftShoulder, pose);
            let right = self.smooth_pose(PoseKey::RightShoulder, pose);

            if let (Some(left), Some(right)) = (left, right) {
                snapshot.left_shoulder = Some(left);
                snapshot.right_shoulder = Some(right);
                snapshot.neck_center = Some(Point::midpoint(left, right));
                snapshot.shoulder_width = Some((right.x - left.x).abs());
                has_valid_data = true;
            }

            snapshot.left_wrist = self.smooth_pose(PoseKey::LeftWrist, pose);
            snapshot.right_wrist = self.smooth_pose(PoseKey::RightWrist, pose);
            snapshot.left_index = self.smooth_pose(PoseKey::LeftIndex, pose);
            snapshot.right_index = self.smooth_pose(PoseKey::RightIndex, pose);

            snapshot.pose_confidence = Some(average_visibility(&pose.landmarks));
        }

        if let Some(face) = &input.face_mesh {
            if let Some(forehead) = self.smooth_face(FaceKey::Forehead, face) {
                snapshot.forehead = Some(forehead);
                has_valid_data = true;
            }

            snapshot.chin = self.smooth_face(FaceKey::Chin, face);

            // Edge points drive the width derivation only; they are not
            // part of the snapshot contract.
            let left_edge = self.smooth_face(FaceKey::LeftEdge, face);
            let right_edge = self.smooth_face(FaceKey::RightEdge, face);
            if let (Some(left), Some(right)) = (left_edge, right_edge) {
                snapshot.face_width = Some((right.x - left.x).abs());
            }

            snapshot.face_confidence = Some(FACE_CONFIDENCE);
        }

        if has_valid_data {
            Some(snapshot)
        } else {
            debug!("frame produced no usable anchors");
            None
        }
    }

    /// Discard all accumulated smoothing state in both history banks.
    pub fn reset(&mut self) {
        self.pose_history.clear();
        self.face_history.clear();
        debug!("tracker history cleared");
    }

    /// Gate a pose landmark on visibility, then smooth it.
    ///
    /// A rejected sample does not touch history: the key's buffer simply
    /// goes stale until a confident sample arrives.
    fn smooth_pose(&mut self, key: PoseKey, frame: &PoseFrame) -> Option<Point> {
        let landmark = frame.get(key.landmark_index())?;
        if !passes_gate(landmark) {
            debug!(key = key.as_str(), "pose landmark below visibility threshold");
            return None;
        }
        Some(self.pose_history.push(key.slot(), Point::from_raw(landmark)))
    }

    /// Smooth a face landmark; the face mesh carries no per-point
    /// confidence, so presence is the only gate.
    fn smooth_face(&mut self, key: FaceKey, frame: &FaceFrame) -> Option<Point> {
        let landmark = frame.get(key.landmark_index())?;
        Some(self.face_history.push(key.slot(), Point::from_raw(landmark)))
    }
}

fn passes_gate(landmark: &RawLandmark) -> bool {
    landmark
        .visibility
        .map_or(true, |v| v >= VISIBILITY_THRESHOLD)
}

/// Frame-level pose quality: fraction of landmarks confidently visible.
fn average_visibility(landmarks: &[RawLandmark]) -> f32 {
    if landmarks.is_empty() {
        return 0.0;
    }
    let visible = landmarks
        .iter()
        .filter(|l| l.visibility.is_some_and(|v| v > VISIBILITY_THRESHOLD))
        .count();
    visible as f32 / landmarks.len() as f32
}
