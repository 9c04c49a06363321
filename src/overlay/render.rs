//! Procedural accessory geometry.
//!
//! Pure functions from a tracking snapshot to a display list. A routine
//! whose anchor fields are absent from the snapshot emits nothing; the
//! caller renders whatever comes back.

use glam::Vec2;

use super::accessory::{AccessoryKind, AccessoryStyle};
use super::shapes::{Color, GradientStop, Paint, Shape, Stroke, Viewport};
use crate::tracking::TrackingSnapshot;

const GOLD: Color = Color::rgb(1.0, 0.843, 0.0);
const SILVER: Color = Color::rgb(0.753, 0.753, 0.753);
const PINK: Color = Color::rgb(1.0, 0.412, 0.706);
const DEEP_PINK: Color = Color::rgb(1.0, 0.078, 0.569);
const DARK_MAGENTA: Color = Color::rgb(0.545, 0.0, 0.545);
const RED: Color = Color::rgb(1.0, 0.0, 0.0);
const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

/// Ring band radius in pixels before styling.
const RING_RADIUS: f32 = 12.0;
/// How far the bead arc hangs below the neck line.
const NECKLACE_DROP: f32 = 40.0;
const NECKLACE_BEADS: usize = 15;
/// Necklace width as a fraction of shoulder width.
const NECKLACE_WIDTH_RATIO: f32 = 0.6;
const TIARA_HEIGHT: f32 = 30.0;
const TIARA_PEAKS: usize = 5;
/// Tiara width as a fraction of face width.
const TIARA_WIDTH_RATIO: f32 = 0.8;

/// Generate the display list for one accessory over one snapshot.
pub fn render(
    kind: AccessoryKind,
    snapshot: &TrackingSnapshot,
    style: &AccessoryStyle,
    viewport: Viewport,
) -> Vec<Shape> {
    match kind {
        AccessoryKind::Ring => render_ring(snapshot, style, viewport),
        AccessoryKind::Necklace => render_necklace(snapshot, style, viewport),
        AccessoryKind::Tiara => render_tiara(snapshot, style, viewport),
    }
}

/// One ring per tracked index fingertip.
fn render_ring(
    snapshot: &TrackingSnapshot,
    style: &AccessoryStyle,
    viewport: Viewport,
) -> Vec<Shape> {
    let mut shapes = Vec::new();

    for fingertip in [snapshot.left_index, snapshot.right_index]
        .into_iter()
        .flatten()
    {
        draw_ring(&mut shapes, viewport.to_pixels(&fingertip), style);
    }

    shapes
}

fn draw_ring(shapes: &mut Vec<Shape>, center: Vec2, style: &AccessoryStyle) {
    let s = style.size_scale;
    let radius = RING_RADIUS * s;

    shapes.push(Shape::Circle {
        center,
        radius,
        fill: None,
        stroke: Some(Stroke {
            color: GOLD.with_alpha(style.opacity),
            width: 4.0,
        }),
    });

    // Diamond-cut gem sitting above the band
    let gem = [
        center + Vec2::new(0.0, -radius - 8.0 * s),
        center + Vec2::new(-6.0 * s, -radius - 2.0 * s),
        center + Vec2::new(0.0, -radius + 4.0 * s),
        center + Vec2::new(6.0 * s, -radius - 2.0 * s),
    ];
    shapes.push(Shape::Path {
        points: gem.to_vec(),
        closed: true,
        fill: Some(Paint::solid(PINK.with_alpha(style.opacity))),
        stroke: Some(Stroke {
            color: DARK_MAGENTA.with_alpha(style.opacity),
            width: 1.0,
        }),
    });
}

/// Bead arc hung from the neck center, chain links between beads, and a
/// pendant at the arc bottom. Needs the shoulder-pair derivation.
fn render_necklace(
    snapshot: &TrackingSnapshot,
    style: &AccessoryStyle,
    viewport: Viewport,
) -> Vec<Shape> {
    let (Some(neck_center), Some(shoulder_width)) = (snapshot.neck_center, snapshot.shoulder_width)
    else {
        return Vec::new();
    };

    let center = viewport.to_pixels(&neck_center);
    let width = viewport.span_to_pixels(shoulder_width) * NECKLACE_WIDTH_RATIO * style.size_scale;
    let drop = NECKLACE_DROP * style.size_scale;

    let chain_stroke = Stroke {
        color: SILVER.with_alpha(style.opacity),
        width: 3.0,
    };

    let bead_at = |i: usize| {
        let angle = i as f32 / (NECKLACE_BEADS - 1) as f32 * std::f32::consts::PI;
        center + Vec2::new(-angle.cos() * width / 2.0, angle.sin() * drop)
    };

    let mut shapes = Vec::new();
    for i in 0..NECKLACE_BEADS {
        let bead = bead_at(i);

        if i > 0 {
            shapes.push(Shape::Line {
                from: bead_at(i - 1),
                to: bead,
                stroke: chain_stroke,
            });
        }

        shapes.push(Shape::Circle {
            center: bead,
            radius: 4.0 * style.size_scale,
            fill: Some(Paint::solid(GOLD.with_alpha(style.opacity))),
            stroke: Some(chain_stroke),
        });
    }

    // Pendant below the bottom of the arc
    let pendant = center + Vec2::new(0.0, drop + 20.0 * style.size_scale);
    let s = style.size_scale;
    shapes.push(Shape::Path {
        points: vec![
            pendant + Vec2::new(0.0, -10.0 * s),
            pendant + Vec2::new(-8.0 * s, 5.0 * s),
            pendant + Vec2::new(0.0, 15.0 * s),
            pendant + Vec2::new(8.0 * s, 5.0 * s),
        ],
        closed: true,
        fill: Some(Paint::solid(DEEP_PINK.with_alpha(style.opacity))),
        stroke: Some(Stroke {
            color: DARK_MAGENTA.with_alpha(style.opacity),
            width: 2.0,
        }),
    });

    shapes
}

/// Five-peak crown across the forehead, gradient-filled, with a gem on
/// each peak. Needs the forehead anchor and the face-width derivation.
fn render_tiara(
    snapshot: &TrackingSnapshot,
    style: &AccessoryStyle,
    viewport: Viewport,
) -> Vec<Shape> {
    let (Some(forehead), Some(face_width)) = (snapshot.forehead, snapshot.face_width) else {
        return Vec::new();
    };

    let center = viewport.to_pixels(&forehead);
    let width = viewport.span_to_pixels(face_width) * TIARA_WIDTH_RATIO * style.size_scale;
    let height = TIARA_HEIGHT * style.size_scale;

    let peak_x = |i: usize| center.x - width / 2.0 + i as f32 * width / (TIARA_PEAKS - 1) as f32;
    let peak_height = |i: usize| {
        if i == TIARA_PEAKS / 2 {
            height
        } else {
            height * 0.7
        }
    };

    // Crown outline: peaks with shallow valleys between them
    let mut points = vec![Vec2::new(center.x - width / 2.0, center.y)];
    for i in 0..TIARA_PEAKS {
        points.push(Vec2::new(peak_x(i), center.y - peak_height(i)));
        if i < TIARA_PEAKS - 1 {
            let valley_x = (peak_x(i) + peak_x(i + 1)) / 2.0;
            points.push(Vec2::new(valley_x, center.y - 5.0 * style.size_scale));
        }
    }
    points.push(Vec2::new(center.x + width / 2.0, center.y));

    let mut shapes = vec![Shape::Path {
        points,
        closed: false,
        fill: Some(Paint::LinearGradient {
            from: Vec2::new(center.x, center.y - height),
            to: center,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: GOLD.with_alpha(0.8 * style.opacity),
                },
                GradientStop {
                    offset: 1.0,
                    color: GOLD.with_alpha(0.3 * style.opacity),
                },
            ],
        }),
        stroke: Some(Stroke {
            color: GOLD.with_alpha(style.opacity),
            width: 3.0,
        }),
    }];

    for i in 0..TIARA_PEAKS {
        let color = if i == TIARA_PEAKS / 2 { RED } else { BLUE };
        shapes.push(Shape::Circle {
            center: Vec2::new(peak_x(i), center.y - peak_height(i)),
            radius: 4.0 * style.size_scale,
            fill: Some(Paint::solid(color.with_alpha(style.opacity))),
            stroke: Some(Stroke {
                color: DARK_MAGENTA.with_alpha(style.opacity),
                width: 1.0,
            }),
        });
    }

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::Point;

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 500.0)
    }

    fn style() -> AccessoryStyle {
        AccessoryStyle::default()
    }

    #[test]
    fn test_ring_per_fingertip() {
        let snapshot = TrackingSnapshot {
            left_index: Some(Point::new(0.2, 0.8, 0.0)),
            right_index: Some(Point::new(0.8, 0.8, 0.0)),
            ..Default::default()
        };

        let shapes = render(AccessoryKind::Ring, &snapshot, &style(), viewport());
        // Band circle + gem path per fingertip
        assert_eq!(shapes.len(), 4);

        let Shape::Circle { center, radius, .. } = &shapes[0] else {
            panic!("expected band circle first");
        };
        assert_eq!(*center, Vec2::new(200.0, 400.0));
        assert_eq!(*radius, RING_RADIUS);
    }

    #[test]
    fn test_ring_single_fingertip() {
        let snapshot = TrackingSnapshot {
            right_index: Some(Point::new(0.8, 0.8, 0.0)),
            ..Default::default()
        };
        let shapes = render(AccessoryKind::Ring, &snapshot, &style(), viewport());
        assert_eq!(shapes.len(), 2);
    }

    #[test]
    fn test_ring_no_fingertips() {
        let shapes = render(
            AccessoryKind::Ring,
            &TrackingSnapshot::default(),
            &style(),
            viewport(),
        );
        assert!(shapes.is_empty());
    }

    #[test]
    fn test_necklace_requires_derived_geometry() {
        // Shoulders alone aren't enough: the routine keys on the derived
        // fields, which the fusion engine sets together.
        let snapshot = TrackingSnapshot {
            left_shoulder: Some(Point::new(0.4, 0.3, 0.0)),
            right_shoulder: Some(Point::new(0.6, 0.3, 0.0)),
            ..Default::default()
        };
        let shapes = render(AccessoryKind::Necklace, &snapshot, &style(), viewport());
        assert!(shapes.is_empty());
    }

    #[test]
    fn test_necklace_shape_counts() {
        let snapshot = TrackingSnapshot {
            neck_center: Some(Point::new(0.5, 0.4, 0.0)),
            shoulder_width: Some(0.3),
            ..Default::default()
        };
        let shapes = render(AccessoryKind::Necklace, &snapshot, &style(), viewport());

        // 15 beads, 14 chain links, 1 pendant
        assert_eq!(shapes.len(), 30);
        let beads = shapes
            .iter()
            .filter(|s| matches!(s, Shape::Circle { .. }))
            .count();
        let links = shapes
            .iter()
            .filter(|s| matches!(s, Shape::Line { .. }))
            .count();
        assert_eq!(beads, 15);
        assert_eq!(links, 14);
    }

    #[test]
    fn test_necklace_arc_endpoints() {
        let snapshot = TrackingSnapshot {
            neck_center: Some(Point::new(0.5, 0.4, 0.0)),
            shoulder_width: Some(0.5),
            ..Default::default()
        };
        let shapes = render(AccessoryKind::Necklace, &snapshot, &style(), viewport());

        // width = 0.5 * 1000 * 0.6 = 300 px, so the arc spans ±150 px
        // around the neck center (500, 200) and sags by NECKLACE_DROP.
        let beads: Vec<Vec2> = shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect();

        let first = beads.first().unwrap();
        let middle = beads[NECKLACE_BEADS / 2];
        let last = beads.last().unwrap();

        assert!((first.x - 350.0).abs() < 1e-3);
        assert!((first.y - 200.0).abs() < 1e-3);
        assert!((middle.x - 500.0).abs() < 1e-3);
        assert!((middle.y - (200.0 + NECKLACE_DROP)).abs() < 1e-3);
        assert!((last.x - 650.0).abs() < 1e-3);
        assert!((last.y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_tiara_requires_forehead_and_width() {
        let only_forehead = TrackingSnapshot {
            forehead: Some(Point::new(0.5, 0.2, 0.0)),
            ..Default::default()
        };
        assert!(render(AccessoryKind::Tiara, &only_forehead, &style(), viewport()).is_empty());

        let only_width = TrackingSnapshot {
            face_width: Some(0.3),
            ..Default::default()
        };
        assert!(render(AccessoryKind::Tiara, &only_width, &style(), viewport()).is_empty());
    }

    #[test]
    fn test_tiara_crown_and_gems() {
        let snapshot = TrackingSnapshot {
            forehead: Some(Point::new(0.5, 0.2, 0.0)),
            face_width: Some(0.25),
            ..Default::default()
        };
        let shapes = render(AccessoryKind::Tiara, &snapshot, &style(), viewport());

        // Crown path + one gem per peak
        assert_eq!(shapes.len(), 1 + TIARA_PEAKS);

        let Shape::Path { points, fill, .. } = &shapes[0] else {
            panic!("expected crown path first");
        };
        // Base corner, 5 peaks, 4 valleys, base corner
        assert_eq!(points.len(), 2 + TIARA_PEAKS + (TIARA_PEAKS - 1));
        assert!(matches!(fill, Some(Paint::LinearGradient { .. })));

        // Center peak is the tallest and carries the red gem.
        let Shape::Circle { center: gem, fill, .. } = &shapes[1 + TIARA_PEAKS / 2] else {
            panic!("expected gem circle");
        };
        assert_eq!(gem.y, 100.0 - TIARA_HEIGHT);
        assert_eq!(*fill, Some(Paint::solid(RED)));
    }

    #[test]
    fn test_opacity_applies_to_paint() {
        let snapshot = TrackingSnapshot {
            left_index: Some(Point::new(0.5, 0.5, 0.0)),
            ..Default::default()
        };
        let translucent = AccessoryStyle {
            opacity: 0.4,
            ..Default::default()
        };
        let shapes = render(AccessoryKind::Ring, &snapshot, &translucent, viewport());

        let Shape::Circle { stroke, .. } = &shapes[0] else {
            panic!("expected band circle");
        };
        assert_eq!(stroke.unwrap().color.a, 0.4);
    }

    #[test]
    fn test_size_scale() {
        let snapshot = TrackingSnapshot {
            left_index: Some(Point::new(0.5, 0.5, 0.0)),
            ..Default::default()
        };
        let doubled = AccessoryStyle {
            size_scale: 2.0,
            ..Default::default()
        };
        let shapes = render(AccessoryKind::Ring, &snapshot, &doubled, viewport());

        let Shape::Circle { radius, .. } = &shapes[0] else {
            panic!("expected band circle");
        };
        assert_eq!(*radius, RING_RADIUS * 2.0);
    }
}
