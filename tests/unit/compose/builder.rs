use super::*;

fn canvas() -> Canvas {
    Canvas {
        width: 100,
        height: 100,
    }
}

#[test]
fn zero_length_segment_draws_nothing() {
    let p = Point::new(400.0, 520.0);
    assert!(dash_segments(p, p, 7.0, 5.0).is_empty());

    let mut b = PlanBuilder::new(canvas(), Rgb8::default());
    b.dashed_line(p, p, Rgb8::default(), 7.0, 5.0);
    assert!(b.finish().ops.is_empty());
}

#[test]
fn dashes_walk_the_segment_and_clip_the_last_dash() {
    // 0..7, 12..19, 24..25
    let segs = dash_segments(Point::new(0.0, 0.0), Point::new(25.0, 0.0), 7.0, 5.0);
    assert_eq!(segs.len(), 3);
    assert_eq!(segs[0], (Point::new(0.0, 0.0), Point::new(7.0, 0.0)));
    assert_eq!(segs[1], (Point::new(12.0, 0.0), Point::new(19.0, 0.0)));
    assert_eq!(segs[2], (Point::new(24.0, 0.0), Point::new(25.0, 0.0)));
}

#[test]
fn dashes_follow_diagonal_direction() {
    let segs = dash_segments(Point::new(0.0, 0.0), Point::new(30.0, 40.0), 10.0, 5.0);
    // len 50: dashes start at 0, 15, 30, 45
    assert_eq!(segs.len(), 4);
    let (a, b) = segs[1];
    assert!((a - Point::new(9.0, 12.0)).hypot() < 1e-9);
    assert!((b - Point::new(15.0, 20.0)).hypot() < 1e-9);
    let (_, last) = segs[3];
    assert!((last - Point::new(30.0, 40.0)).hypot() < 1e-9);
}

#[test]
fn dash_rejects_non_positive_dash_length() {
    let segs = dash_segments(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 0.0, 5.0);
    assert!(segs.is_empty());
    let segs = dash_segments(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 3.0, -4.0);
    assert!(segs.is_empty());
}

#[test]
fn boxes_include_their_last_pixel() {
    let mut b = PlanBuilder::new(canvas(), Rgb8::default());
    b.fill_box(px(10, 20), px(11, 21), Rgb8::default());
    let plan = b.finish();
    assert_eq!(plan.ops[0].bounds(), Rect::new(10.0, 20.0, 12.0, 22.0));
}

#[test]
fn dot_and_ring_are_centered_on_the_pixel() {
    let mut b = PlanBuilder::new(canvas(), Rgb8::default());
    b.dot(px(50, 50), 5.0, Rgb8::default());
    b.ring(px(50, 50), 10.0, Rgb8::default(), 1.0);
    let plan = b.finish();
    assert_eq!(plan.ops[0].bounds().center(), Point::new(50.5, 50.5));
    assert_eq!(plan.ops[1].bounds().center(), Point::new(50.5, 50.5));
    assert_eq!(plan.ops[1].bounds().width(), 21.0);
}

#[test]
fn layer_spans_track_op_ranges() {
    let mut b = PlanBuilder::new(canvas(), Rgb8::default());
    b.begin_layer(Layer::Grid);
    b.cross(px(10, 10), 4.0, Rgb8::default());
    assert_eq!(b.end_layer(), 2);
    b.begin_layer(Layer::Compass);
    b.text(px(1, 1), "N", FontRole::Coord, Rgb8::default());
    assert_eq!(b.end_layer(), 1);

    let plan = b.finish();
    assert_eq!(plan.layer_ops(Layer::Grid).len(), 2);
    assert_eq!(plan.layer_ops(Layer::Compass)[0].text(), Some("N"));
    assert!(plan.layer_ops(Layer::Mosaic).is_empty());
}
