//! Ringed markers: the origin, the route waypoints and the compass.

use crate::{
    compose::builder::px,
    compose::layers::LayerCtx,
    foundation::core::{Point, Vec2},
    text::fonts::FontRole,
};

const ORIGIN_RINGS: [f64; 5] = [140.0, 112.0, 84.0, 56.0, 28.0];
const DASH: f64 = 7.0;
const GAP: f64 = 5.0;

/// Point at `radius` from `c` along `deg` (clockwise from +x, y down).
fn polar(c: Point, radius: f64, deg: f64) -> Point {
    let rad = deg.to_radians();
    c + Vec2::new(radius * rad.cos(), radius * rad.sin())
}

pub(crate) fn origin(cx: &mut LayerCtx<'_>) {
    let p = cx.cfg.palette;
    let o = cx.cfg.origin;

    for r in ORIGIN_RINGS {
        let c = if r == ORIGIN_RINGS[0] {
            p.secondary
        } else {
            p.dim
        };
        cx.out.ring(o, r, c, 1.0);
    }
    cx.out.dot(o, 5.0, p.accent);

    for deg in (0..360).step_by(15) {
        let c = if deg % 90 == 0 { p.primary } else { p.dim };
        let deg = f64::from(deg);
        cx.out.line(polar(o, 136.0, deg), polar(o, 144.0, deg), c, 1.0);
    }

    cx.out.text(
        o + Vec2::new(160.0, -22.0),
        "ORIGIN",
        FontRole::LabelSmall,
        p.whisper,
    );
    cx.out.text(
        o + Vec2::new(160.0, -6.0),
        "Point of first contact",
        FontRole::Coord,
        p.muted,
    );
}

/// Dashed route from the origin through every waypoint, then the markers on top.
pub(crate) fn waypoints(cx: &mut LayerCtx<'_>) {
    let p = cx.cfg.palette;

    let route: Vec<Point> = std::iter::once(cx.cfg.origin)
        .chain(cx.cfg.waypoints.iter().map(|w| w.center()))
        .collect();
    for leg in route.windows(2) {
        cx.out.dashed_line(leg[0], leg[1], p.dim, DASH, GAP);
    }

    for w in &cx.cfg.waypoints {
        let c = w.center();
        cx.out.ring(c, f64::from(w.radius), p.dim, 1.0);
        cx.out.dot(c, 3.0, p.secondary);
        cx.out.text(
            px(w.x + w.radius + 12, w.y - 6),
            w.label.clone(),
            FontRole::LabelSmall,
            p.whisper,
        );
    }
}

pub(crate) fn compass(cx: &mut LayerCtx<'_>) {
    let p = cx.cfg.palette;
    let c = px(cx.layout.right - 50, cx.layout.bottom - 30);
    let radius = 24.0;

    cx.out.ring(c, radius, p.dim, 1.0);
    for deg in [0.0, 90.0, 180.0, 270.0] {
        // 270 deg points up the page (y grows downward), toward the N label.
        let color = if deg == 270.0 { p.primary } else { p.dim };
        cx.out.line(
            polar(c, radius - 4.0, deg),
            polar(c, radius + 4.0, deg),
            color,
            1.0,
        );
    }
    cx.out.text(
        c + Vec2::new(-3.0, -radius - 14.0),
        "N",
        FontRole::Coord,
        p.whisper,
    );
    cx.out.dot(c, 2.0, p.secondary);
}
