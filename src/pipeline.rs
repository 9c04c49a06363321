//! Per-frame processing pipeline.
//!
//! Composes the three collaborators — landmark source, fusion engine,
//! accessory renderer — into a single synchronous step invoked once per
//! video frame. One pipeline instance tracks one subject.

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::landmark::FrameInput;
use crate::overlay::{self, AccessoryKind, AccessoryStyle, Shape, Viewport};
use crate::tracking::{SmoothTracker, TrackingSnapshot};

/// Result of one pipeline step with usable tracking.
#[derive(Debug, Clone, Serialize)]
pub struct FrameOutput {
    pub snapshot: TrackingSnapshot,
    pub shapes: Vec<Shape>,
}

/// Synchronous per-frame pipeline: raw landmarks in, display list out.
#[derive(Debug)]
pub struct FramePipeline {
    tracker: SmoothTracker,
    accessory: AccessoryKind,
    style: AccessoryStyle,
    viewport: Viewport,
}

impl FramePipeline {
    pub fn new(accessory: AccessoryKind, style: AccessoryStyle, viewport: Viewport) -> Self {
        Self {
            tracker: SmoothTracker::new(),
            accessory,
            style,
            viewport,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.accessory.kind,
            config.accessory.style(),
            Viewport::new(
                config.surface.width as f32,
                config.surface.height as f32,
            ),
        )
    }

    /// Process one frame of raw landmark input.
    ///
    /// Returns `None` when the frame yielded nothing trackable — the
    /// caller renders nothing this frame and simply feeds the next one.
    pub fn advance(&mut self, input: &FrameInput) -> Option<FrameOutput> {
        let snapshot = self.tracker.process(input)?;
        let shapes = overlay::render(self.accessory, &snapshot, &self.style, self.viewport);
        Some(FrameOutput { snapshot, shapes })
    }

    pub fn accessory(&self) -> AccessoryKind {
        self.accessory
    }

    /// Switch the rendered accessory, discarding smoothing state so the
    /// new overlay doesn't inherit anchors from the previous wear.
    pub fn set_accessory(&mut self, accessory: AccessoryKind) {
        if accessory == self.accessory {
            return;
        }
        debug!(
            from = self.accessory.as_str(),
            to = accessory.as_str(),
            "switching accessory"
        );
        self.accessory = accessory;
        self.tracker.reset();
    }

    /// Drop all smoothing state (tracking-source restart).
    pub fn reset(&mut self) {
        self.tracker.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{PoseFrame, RawLandmark, POSE_LEFT_SHOULDER, POSE_RIGHT_SHOULDER};
    use crate::tracking::Point;

    fn shoulders_input() -> FrameInput {
        let mut landmarks = vec![
            RawLandmark {
                x: 0.0,
                y: 0.0,
                z: None,
                visibility: Some(0.0),
            };
            33
        ];
        landmarks[POSE_LEFT_SHOULDER] = RawLandmark {
            x: 0.4,
            y: 0.3,
            z: None,
            visibility: Some(0.9),
        };
        landmarks[POSE_RIGHT_SHOULDER] = RawLandmark {
            x: 0.6,
            y: 0.3,
            z: None,
            visibility: Some(0.9),
        };
        FrameInput {
            pose: Some(PoseFrame { landmarks }),
            face_mesh: None,
        }
    }

    fn pipeline(accessory: AccessoryKind) -> FramePipeline {
        FramePipeline::new(
            accessory,
            AccessoryStyle::default(),
            Viewport::new(1280.0, 720.0),
        )
    }

    #[test]
    fn test_advance_produces_snapshot_and_shapes() {
        let mut pipeline = pipeline(AccessoryKind::Necklace);
        let output = pipeline.advance(&shoulders_input()).unwrap();

        assert_eq!(
            output.snapshot.neck_center,
            Some(Point::new(0.5, 0.3, 0.0))
        );
        assert!(!output.shapes.is_empty());
    }

    #[test]
    fn test_advance_no_data() {
        let mut pipeline = pipeline(AccessoryKind::Ring);
        assert!(pipeline.advance(&FrameInput::default()).is_none());
    }

    #[test]
    fn test_accessory_switch_resets_history() {
        let mut pipeline = pipeline(AccessoryKind::Necklace);

        // Accumulate history away from the test point.
        for _ in 0..5 {
            pipeline.advance(&shoulders_input());
        }

        pipeline.set_accessory(AccessoryKind::Tiara);
        assert_eq!(pipeline.accessory(), AccessoryKind::Tiara);

        // Fresh history: the first frame after the switch passes through.
        let output = pipeline.advance(&shoulders_input()).unwrap();
        assert_eq!(
            output.snapshot.left_shoulder,
            Some(Point::new(0.4, 0.3, 0.0))
        );
    }

    #[test]
    fn test_same_accessory_switch_keeps_history() {
        let mut pipeline = pipeline(AccessoryKind::Necklace);
        pipeline.advance(&shoulders_input());
        pipeline.set_accessory(AccessoryKind::Necklace);

        // History survives: a second distinct frame is smoothed against
        // the first.
        let mut second = shoulders_input();
        if let Some(pose) = &mut second.pose {
            pose.landmarks[POSE_LEFT_SHOULDER].x = 0.1;
        }
        let output = pipeline.advance(&second).unwrap();
        let left = output.snapshot.left_shoulder.unwrap();
        assert!((left.x - 0.2).abs() < 1e-6);
    }
}
