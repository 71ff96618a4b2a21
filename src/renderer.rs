//! Flag geometry: six horizontal stripes, a stack of chevrons converging on the
//! left edge, and a ringed circle on top of the chevron point.
//!
//! Everything is derived from the target rectangle on each call. Nothing is
//! cached between paints, so the same rectangle always yields the same calls.

use log::debug;

use crate::geometry::{
    Color, Point, Rect, BLACK, BLUE, BROWN, DARK_PURPLE, GREEN, LIGHT_BLUE, ORANGE, PINK, PURPLE,
    RED, WHITE, YELLOW,
};
use crate::surface::Surface;

pub const STRIPE_COUNT: i32 = 6;
pub const STRIPE_COLORS: [Color; STRIPE_COUNT as usize] = [RED, ORANGE, YELLOW, GREEN, BLUE, PURPLE];

/// Chevron width is this fraction of the window width.
const CHEVRON_DIVISOR: i32 = 16;
/// Thickness of the dark ring around the inner circle.
pub const RING_THICKNESS: i32 = 10;

/// Sizes derived from the window, all rounded up by one pixel so integer
/// division never leaves a gap at the far edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagMetrics {
    pub stripe_height: i32,
    pub chevron_width: i32,
    pub half_x: i32,
    pub half_y: i32,
}

impl FlagMetrics {
    pub fn from_rect(rect: &Rect) -> Self {
        Self {
            stripe_height: rect.height() / STRIPE_COUNT + 1,
            chevron_width: rect.width() / CHEVRON_DIVISOR + 1,
            half_x: rect.width() / 2 + 1,
            half_y: rect.height() / 2 + 1,
        }
    }
}

/// Placement of one chevron arm pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChevronSpec {
    pub color: Color,
    pub x_offset: i32,
    pub y_offset: i32,
    pub center_offset: i32,
}

/// Fills band `index` of the six stripes. The band overlaps its neighbour by one
/// row, and the last band may run past the bottom edge.
pub fn draw_stripe<S: Surface + ?Sized>(
    surface: &mut S,
    color: Color,
    rect: &Rect,
    stripe_height: i32,
    index: i32,
) {
    debug_assert!((0..STRIPE_COUNT).contains(&index));
    surface.select_brush(color);
    surface.fill_rect(Rect::new(
        0,
        stripe_height * index,
        rect.right + 1,
        stripe_height * (index + 1) + 1,
    ));
}

/// Vertices of the upper and lower arm of one chevron.
///
/// The lower arm shares the three center vertices with the upper arm and
/// reflects the two edge vertices onto the bottom edge.
pub fn chevron_polygons(rect: &Rect, metrics: &FlagMetrics, chevron: &ChevronSpec) -> [[Point; 5]; 2] {
    let FlagMetrics {
        chevron_width: w,
        half_x,
        half_y,
        ..
    } = *metrics;
    let ChevronSpec {
        x_offset,
        y_offset,
        center_offset,
        ..
    } = *chevron;

    let outer = if y_offset != 0 {
        Point::new(0, y_offset - w)
    } else {
        Point::new(w + x_offset, 0)
    };
    let center = Point::new(half_x - center_offset, half_y);
    // An odd half width would otherwise leave a one pixel seam at the point.
    let seam = if half_x % 2 != 0 {
        Point::new(center.x + 1, center.y + 1)
    } else {
        center
    };
    let inner = Point::new(half_x - w - center_offset, half_y);

    let upper = [Point::new(x_offset, y_offset), outer, center, seam, inner];

    let bottom = rect.bottom - y_offset;
    let lower_outer = if y_offset == 0 {
        Point::new(w + x_offset, bottom)
    } else {
        Point::new(x_offset, bottom + w)
    };
    let lower = [Point::new(x_offset, bottom), lower_outer, center, seam, inner];

    [upper, lower]
}

pub fn draw_chevron<S: Surface + ?Sized>(
    surface: &mut S,
    rect: &Rect,
    metrics: &FlagMetrics,
    chevron: &ChevronSpec,
) {
    surface.select_brush(chevron.color);
    for arm in chevron_polygons(rect, metrics, chevron) {
        surface.fill_polygon(&arm);
    }
}

/// The chevron stack from the outermost (black) arm to the three yellow arms
/// that form the point. Each step pulls the arm one chevron width toward the
/// left edge and pushes its center one width further out.
pub fn chevron_layout(chevron_width: i32) -> [ChevronSpec; 8] {
    const COLORS: [Color; 8] = [BLACK, BROWN, LIGHT_BLUE, PINK, WHITE, YELLOW, YELLOW, YELLOW];
    let mut layout = [ChevronSpec {
        color: BLACK,
        x_offset: 0,
        y_offset: 0,
        center_offset: 0,
    }; 8];
    for (step, (slot, color)) in layout.iter_mut().zip(COLORS).enumerate() {
        let step = step as i32;
        *slot = ChevronSpec {
            color,
            x_offset: chevron_width * (5 - step).max(0),
            y_offset: 0,
            center_offset: chevron_width * step,
        };
    }
    layout
}

/// Bounds of the dark ring and of the yellow disc inside it.
pub fn emblem_bounds(metrics: &FlagMetrics) -> (Rect, Rect) {
    let w = metrics.chevron_width;
    let outer = Rect::new(w / 2, metrics.half_y - w, w * 2, metrics.half_y + w);
    (outer, outer.inset(RING_THICKNESS))
}

pub fn draw_flag<S: Surface + ?Sized>(surface: &mut S, rect: &Rect) {
    let metrics = FlagMetrics::from_rect(rect);
    debug!("drawing flag into {:?} with {:?}", rect, metrics);

    // Shapes are drawn without an outline.
    surface.select_null_pen();

    for (index, color) in STRIPE_COLORS.iter().enumerate() {
        draw_stripe(surface, *color, rect, metrics.stripe_height, index as i32);
    }

    for chevron in chevron_layout(metrics.chevron_width).iter() {
        draw_chevron(surface, rect, &metrics, chevron);
    }

    let (ring, disc) = emblem_bounds(&metrics);
    surface.select_brush(DARK_PURPLE);
    surface.fill_ellipse(ring);
    surface.select_brush(YELLOW);
    surface.fill_ellipse(disc);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCall, Recorder};

    const SAMPLE: Rect = Rect::with_size(160, 96);

    fn pt(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test_log::test]
    fn metrics_for_sample_rect() {
        assert_eq!(
            FlagMetrics::from_rect(&SAMPLE),
            FlagMetrics {
                stripe_height: 17,
                chevron_width: 11,
                half_x: 81,
                half_y: 49,
            }
        );
    }

    #[test_log::test]
    fn stripe_emits_one_full_width_rect() {
        let mut rec = Recorder::new();
        draw_stripe(&mut rec, GREEN, &SAMPLE, 17, 3);
        assert_eq!(
            rec.calls(),
            &[DrawCall::Rect {
                color: GREEN,
                rect: Rect::new(0, 51, 161, 69),
            }]
        );
    }

    #[test_log::test]
    fn last_stripe_overdraws_bottom() {
        let mut rec = Recorder::new();
        draw_stripe(&mut rec, PURPLE, &SAMPLE, 17, 5);
        match &rec.calls()[0] {
            DrawCall::Rect { rect, .. } => assert!(rect.bottom > SAMPLE.bottom),
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test_log::test]
    fn chevron_always_emits_two_five_point_polygons() {
        let metrics = FlagMetrics::from_rect(&SAMPLE);
        for (x_offset, y_offset, center_offset) in [(0, 0, 0), (55, 0, 0), (0, 11, 22), (33, 40, 7)] {
            let mut rec = Recorder::new();
            let chevron = ChevronSpec {
                color: PINK,
                x_offset,
                y_offset,
                center_offset,
            };
            draw_chevron(&mut rec, &SAMPLE, &metrics, &chevron);
            assert_eq!(rec.calls().len(), 2);
            for call in rec.calls() {
                match call {
                    DrawCall::Polygon { color, points } => {
                        assert_eq!(*color, PINK);
                        assert_eq!(points.len(), 5);
                    }
                    other => panic!("unexpected call {other:?}"),
                }
            }
        }
    }

    #[test_log::test]
    fn seam_vertex_follows_half_width_parity() {
        let chevron = ChevronSpec {
            color: WHITE,
            x_offset: 11,
            y_offset: 0,
            center_offset: 44,
        };
        let odd = FlagMetrics::from_rect(&SAMPLE);
        assert_eq!(odd.half_x % 2, 1);
        let even = FlagMetrics { half_x: 82, ..odd };

        for arm in chevron_polygons(&SAMPLE, &odd, &chevron) {
            assert_eq!(arm[3], pt(arm[2].x + 1, arm[2].y + 1));
        }
        for arm in chevron_polygons(&SAMPLE, &even, &chevron) {
            assert_eq!(arm[3], arm[2]);
        }
    }

    #[test_log::test]
    fn vertical_offset_rotates_outer_vertex() {
        let metrics = FlagMetrics::from_rect(&SAMPLE);
        let chevron = ChevronSpec {
            color: BLACK,
            x_offset: 0,
            y_offset: 22,
            center_offset: 11,
        };
        let [upper, lower] = chevron_polygons(&SAMPLE, &metrics, &chevron);
        assert_eq!(upper[0], pt(0, 22));
        assert_eq!(upper[1], pt(0, 11));
        assert_eq!(lower[0], pt(0, 74));
        assert_eq!(lower[1], pt(0, 85));
        assert_eq!(upper[2..], lower[2..]);
    }

    #[test_log::test]
    fn layout_walks_toward_the_left_edge() {
        let layout = chevron_layout(11);
        let x: Vec<i32> = layout.iter().map(|c| c.x_offset).collect();
        let center: Vec<i32> = layout.iter().map(|c| c.center_offset).collect();
        assert_eq!(x, vec![55, 44, 33, 22, 11, 0, 0, 0]);
        assert_eq!(center, vec![0, 11, 22, 33, 44, 55, 66, 77]);
        assert!(layout.iter().all(|c| c.y_offset == 0));
        assert_eq!(layout[0].color, BLACK);
        assert!(layout[5..].iter().all(|c| c.color == YELLOW));
    }

    #[test_log::test]
    fn flag_call_sequence() {
        let mut rec = Recorder::new();
        draw_flag(&mut rec, &SAMPLE);
        let calls = rec.calls();
        assert_eq!(calls.len(), 6 + 8 * 2 + 2);

        let stripe_colors: Vec<Color> = calls[..6]
            .iter()
            .map(|c| {
                assert!(matches!(c, DrawCall::Rect { .. }));
                c.color()
            })
            .collect();
        assert_eq!(stripe_colors, STRIPE_COLORS.to_vec());

        assert!(calls[6..22]
            .iter()
            .all(|c| matches!(c, DrawCall::Polygon { points, .. } if points.len() == 5)));

        match (&calls[22], &calls[23]) {
            (
                DrawCall::Ellipse { color: ring_color, bounds: ring },
                DrawCall::Ellipse { color: disc_color, bounds: disc },
            ) => {
                assert_eq!(*ring_color, DARK_PURPLE);
                assert_eq!(*disc_color, YELLOW);
                assert_eq!(*disc, ring.inset(RING_THICKNESS));
                assert!(ring.contains_rect(disc));
            }
            other => panic!("expected two ellipses, got {other:?}"),
        }
    }

    #[test_log::test]
    fn flag_fills_have_no_outline() {
        let mut rec = Recorder::new();
        draw_flag(&mut rec, &SAMPLE);
        assert_eq!(rec.calls().len(), 24);
        assert_eq!(rec.outlined_fills(), 0);
    }

    #[test_log::test]
    fn largest_window_draws_without_overflow() {
        let extent = crate::config::MAX_WINDOW_EXTENT as i32;
        let rect = Rect::with_size(extent, extent);
        let mut rec = Recorder::new();
        draw_flag(&mut rec, &rect);
        match &rec.calls()[5] {
            DrawCall::Rect { rect: last, .. } => {
                assert_eq!(last.right, extent + 1);
                assert!(last.bottom > extent);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test_log::test]
    fn flag_golden_sample() {
        let mut rec = Recorder::new();
        draw_flag(&mut rec, &SAMPLE);
        let calls = rec.into_calls();

        assert_eq!(calls[0], DrawCall::Rect { color: RED, rect: Rect::new(0, 0, 161, 18) });
        assert_eq!(calls[5], DrawCall::Rect { color: PURPLE, rect: Rect::new(0, 85, 161, 103) });

        assert_eq!(
            calls[6],
            DrawCall::Polygon {
                color: BLACK,
                points: vec![pt(55, 0), pt(66, 0), pt(81, 49), pt(82, 50), pt(70, 49)],
            }
        );
        assert_eq!(
            calls[7],
            DrawCall::Polygon {
                color: BLACK,
                points: vec![pt(55, 96), pt(66, 96), pt(81, 49), pt(82, 50), pt(70, 49)],
            }
        );
        assert_eq!(
            calls[21],
            DrawCall::Polygon {
                color: YELLOW,
                points: vec![pt(0, 96), pt(11, 96), pt(4, 49), pt(5, 50), pt(-7, 49)],
            }
        );

        assert_eq!(calls[22], DrawCall::Ellipse { color: DARK_PURPLE, bounds: Rect::new(5, 38, 22, 60) });
        assert_eq!(calls[23], DrawCall::Ellipse { color: YELLOW, bounds: Rect::new(15, 48, 12, 50) });
    }

    #[test_log::test]
    fn repeated_paints_are_identical() {
        let mut first = Recorder::new();
        let mut second = Recorder::new();
        draw_flag(&mut first, &Rect::with_size(641, 359));
        draw_flag(&mut second, &Rect::with_size(641, 359));
        assert_eq!(first.calls(), second.calls());

        // A surface reused across paints sees the same sequence twice.
        let mut reused = Recorder::new();
        draw_flag(&mut reused, &SAMPLE);
        draw_flag(&mut reused, &SAMPLE);
        let (a, b) = reused.calls().split_at(24);
        assert_eq!(a, b);
    }
}
