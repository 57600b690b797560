use std::{collections::BTreeMap, path::Path};

use super::*;
use crate::{
    compose::layers::Layer, compose::plan::LayerSpan, foundation::core::Canvas,
    text::fonts::FontSpec,
};

const BG: Rgb8 = Rgb8::from_u24(0x0B0D10);
const INK: Rgb8 = Rgb8::from_u24(0xC94A42);

fn plan(ops: Vec<DrawOp>) -> DrawPlan {
    sized_plan(32, 24, ops)
}

fn sized_plan(width: u32, height: u32, ops: Vec<DrawOp>) -> DrawPlan {
    let n = ops.len();
    DrawPlan {
        canvas: Canvas { width, height },
        background: BG,
        ops,
        layers: vec![LayerSpan {
            layer: Layer::Grid,
            start: 0,
            end: n,
        }],
    }
}

fn render(ops: Vec<DrawOp>) -> Frame {
    rasterize(&plan(ops), &mut FontSet::empty()).unwrap()
}

#[test]
fn empty_plan_is_solid_background() {
    let frame = render(vec![]);
    assert_eq!((frame.width, frame.height), (32, 24));
    assert_eq!(frame.data.len(), 32 * 24 * 3);
    assert_eq!(frame.pixel(0, 0), Some(BG));
    assert_eq!(frame.pixel(31, 23), Some(BG));
    assert_eq!(frame.pixel(32, 0), None);
}

#[test]
fn filled_rect_covers_exact_pixels() {
    let frame = render(vec![DrawOp::FillRect {
        rect: Rect::new(4.0, 4.0, 8.0, 6.0),
        color: INK,
    }]);
    assert_eq!(frame.pixel(4, 4), Some(INK));
    assert_eq!(frame.pixel(7, 5), Some(INK));
    assert_eq!(frame.pixel(8, 5), Some(BG));
    assert_eq!(frame.pixel(4, 6), Some(BG));
}

#[test]
fn horizontal_line_covers_both_end_pixels() {
    let frame = render(vec![DrawOp::Line {
        from: Point::new(2.0, 10.0),
        to: Point::new(20.0, 10.0),
        color: INK,
        width: 1.0,
    }]);
    assert_eq!(frame.pixel(2, 10), Some(INK));
    assert_eq!(frame.pixel(20, 10), Some(INK));
    assert_eq!(frame.pixel(21, 10), Some(BG));
    assert_eq!(frame.pixel(10, 9), Some(BG));
    assert_eq!(frame.pixel(10, 11), Some(BG));
}

#[test]
fn stroke_rect_leaves_interior_untouched() {
    let frame = render(vec![DrawOp::StrokeRect {
        rect: Rect::new(2.0, 2.0, 20.0, 16.0),
        color: INK,
        width: 2.0,
    }]);
    assert_eq!(frame.pixel(2, 2), Some(INK));
    assert_eq!(frame.pixel(3, 10), Some(INK));
    assert_eq!(frame.pixel(19, 15), Some(INK));
    assert_eq!(frame.pixel(10, 8), Some(BG));
}

#[test]
fn later_ops_paint_over_earlier_ones() {
    let frame = render(vec![
        DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 16.0, 16.0),
            color: INK,
        },
        DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 8.0, 8.0),
            color: BG,
        },
    ]);
    assert_eq!(frame.pixel(4, 4), Some(BG));
    assert_eq!(frame.pixel(12, 12), Some(INK));
}

#[test]
fn ellipse_center_is_filled() {
    let frame = render(vec![
        DrawOp::FillEllipse {
            bbox: Rect::new(10.0, 6.0, 21.0, 17.0),
            color: INK,
        },
        DrawOp::StrokeEllipse {
            bbox: Rect::new(4.5, 2.5, 26.5, 20.5),
            color: INK,
            width: 1.0,
        },
    ]);
    assert_eq!(frame.pixel(15, 11), Some(INK));
    assert_eq!(frame.pixel(0, 0), Some(BG));
}

#[test]
fn rasterizing_twice_is_byte_identical() {
    let ops = vec![
        DrawOp::Line {
            from: Point::new(1.0, 1.0),
            to: Point::new(29.0, 19.0),
            color: INK,
            width: 1.0,
        },
        DrawOp::StrokeEllipse {
            bbox: Rect::new(4.5, 2.5, 26.5, 20.5),
            color: INK,
            width: 1.0,
        },
    ];
    let a = render(ops.clone());
    let b = render(ops);
    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn text_without_a_face_is_a_raster_error() {
    let p = plan(vec![DrawOp::Text {
        origin: Point::new(1.0, 1.0),
        text: "N".to_string(),
        role: FontRole::Coord,
        color: INK,
        underline: None,
    }]);
    assert!(matches!(
        rasterize(&p, &mut FontSet::empty()),
        Err(PosterError::Raster(_))
    ));
}

#[test]
fn border_strips_do_not_overlap() {
    let sides = rect_border(Rect::new(0.0, 0.0, 10.0, 6.0), 2.0);
    let area: f64 = sides.iter().map(|r| r.area()).sum();
    assert_eq!(area, 10.0 * 6.0 - 6.0 * 2.0);
}

#[test]
fn degenerate_line_still_marks_its_pixel() {
    let path = line_outline(Point::new(3.0, 3.0), Point::new(3.0, 3.0), 1.0);
    let bbox = path.bounding_box();
    assert_eq!(bbox, Rect::new(3.0, 3.0, 4.0, 4.0));
}

fn fixture_fonts() -> FontSet {
    let table = BTreeMap::from([(
        FontRole::Cta,
        FontSpec {
            file: "DejaVuSans.ttf".to_string(),
            size_px: 16.0,
        },
    )]);
    FontSet::load(Path::new("tests/data/fonts"), &table).unwrap()
}

/// Inclusive `(x0, y0, x1, y1)` of every pixel that differs from the background.
fn ink_bounds(frame: &Frame) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for y in 0..frame.height {
        for x in 0..frame.width {
            if frame.pixel(x, y) == Some(BG) {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
    }
    bounds
}

fn text_op(text: &str, underline: Option<Underline>) -> DrawOp {
    DrawOp::Text {
        origin: Point::new(20.0, 40.0),
        text: text.to_string(),
        role: FontRole::Cta,
        color: INK,
        underline,
    }
}

#[test]
fn text_run_spreads_across_its_advance_below_the_origin() {
    let mut fonts = fixture_fonts();
    let text = "ARRIVE ARRIVE";
    let advance = fonts.measure(FontRole::Cta, text).unwrap();
    assert!(advance > 60.0, "advance {advance}");

    let p = sized_plan(240, 80, vec![text_op(text, None)]);
    let frame = rasterize(&p, &mut fonts).unwrap();
    let (x0, y0, x1, y1) = ink_bounds(&frame).expect("text left no ink");

    let width = (x1 - x0 + 1) as f32;
    assert!((20..=24).contains(&x0), "ink starts at x={x0}");
    assert!(y0 >= 40, "ink starts above the anchor at y={y0}");
    assert!(y1 < 40 + 20, "ink ends at y={y1}");
    assert!(
        width > advance * 0.85 && width <= advance + 2.0,
        "ink width {width} vs advance {advance}"
    );
}

#[test]
fn underline_spans_the_measured_advance() {
    let mut fonts = fixture_fonts();
    let advance = f64::from(fonts.measure(FontRole::Cta, "ARRIVE").unwrap());
    let end = 20.0 + advance;

    let underline = Underline {
        y: 70.0,
        width: 2.0,
    };
    let p = sized_plan(160, 80, vec![text_op("ARRIVE", Some(underline))]);
    let frame = rasterize(&p, &mut fonts).unwrap();

    assert_eq!(frame.pixel(21, 70), Some(INK));
    assert_eq!(frame.pixel(21, 71), Some(INK));
    assert_eq!(frame.pixel(21, 72), Some(BG));
    assert_eq!(frame.pixel((end - 2.0) as u32, 70), Some(INK));
    assert_eq!(frame.pixel((end + 2.0).ceil() as u32, 70), Some(BG));
}
