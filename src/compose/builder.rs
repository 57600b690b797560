use crate::{
    compose::layers::Layer,
    compose::plan::{DrawOp, DrawPlan, LayerSpan, Underline},
    foundation::core::{Canvas, Point, Rect, Rgb8},
    text::fonts::FontRole,
};

/// Point on the integer pixel grid.
pub(crate) fn px(x: i32, y: i32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

/// Recording canvas the layers draw onto.
///
/// Methods take the corner conventions of an immediate-mode drawing surface: boxes are
/// given by their first and last covered pixel, ellipses by their bounding box corners,
/// and lines by end-point pixels. The builder turns them into [`DrawOp`] geometry.
pub(crate) struct PlanBuilder {
    canvas: Canvas,
    background: Rgb8,
    ops: Vec<DrawOp>,
    layers: Vec<LayerSpan>,
}

impl PlanBuilder {
    pub(crate) fn new(canvas: Canvas, background: Rgb8) -> Self {
        Self {
            canvas,
            background,
            ops: Vec::new(),
            layers: Vec::new(),
        }
    }

    pub(crate) fn begin_layer(&mut self, layer: Layer) {
        let start = self.ops.len();
        self.layers.push(LayerSpan {
            layer,
            start,
            end: start,
        });
    }

    /// Close the span opened by [`begin_layer`](Self::begin_layer) and return its op count.
    pub(crate) fn end_layer(&mut self) -> usize {
        let end = self.ops.len();
        match self.layers.last_mut() {
            Some(span) => {
                span.end = end;
                span.end - span.start
            }
            None => 0,
        }
    }

    pub(crate) fn line(&mut self, from: Point, to: Point, color: Rgb8, width: f64) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
    }

    /// Filled box covering pixels `a..=b`.
    pub(crate) fn fill_box(&mut self, a: Point, b: Point, color: Rgb8) {
        self.ops.push(DrawOp::FillRect {
            rect: Rect::new(a.x, a.y, b.x + 1.0, b.y + 1.0),
            color,
        });
    }

    /// Box outline covering pixels `a..=b`, `width` pixels thick inward.
    pub(crate) fn outline_box(&mut self, a: Point, b: Point, color: Rgb8, width: f64) {
        self.ops.push(DrawOp::StrokeRect {
            rect: Rect::new(a.x, a.y, b.x + 1.0, b.y + 1.0),
            color,
            width,
        });
    }

    /// Filled ellipse inscribed in the pixels `a..=b`.
    pub(crate) fn fill_ellipse(&mut self, a: Point, b: Point, color: Rgb8) {
        self.ops.push(DrawOp::FillEllipse {
            bbox: Rect::new(a.x, a.y, b.x + 1.0, b.y + 1.0),
            color,
        });
    }

    /// Filled disc of `radius` around `c`, covering `c - r ..= c + r`.
    pub(crate) fn dot(&mut self, c: Point, radius: f64, color: Rgb8) {
        self.fill_ellipse(
            Point::new(c.x - radius, c.y - radius),
            Point::new(c.x + radius, c.y + radius),
            color,
        );
    }

    /// Circle outline of `radius` around `c`, stroked through pixel centers.
    pub(crate) fn ring(&mut self, c: Point, radius: f64, color: Rgb8, width: f64) {
        self.ops.push(DrawOp::StrokeEllipse {
            bbox: Rect::new(
                c.x - radius + 0.5,
                c.y - radius + 0.5,
                c.x + radius + 0.5,
                c.y + radius + 0.5,
            ),
            color,
            width,
        });
    }

    /// Small plus sign of half-size `s` centered on `c`.
    pub(crate) fn cross(&mut self, c: Point, s: f64, color: Rgb8) {
        self.line(
            Point::new(c.x - s, c.y),
            Point::new(c.x + s, c.y),
            color,
            1.0,
        );
        self.line(
            Point::new(c.x, c.y - s),
            Point::new(c.x, c.y + s),
            color,
            1.0,
        );
    }

    pub(crate) fn text(
        &mut self,
        origin: Point,
        text: impl Into<String>,
        role: FontRole,
        color: Rgb8,
    ) {
        self.ops.push(DrawOp::Text {
            origin,
            text: text.into(),
            role,
            color,
            underline: None,
        });
    }

    /// Text with a `width`-pixel line at `y` spanning its measured advance.
    pub(crate) fn underlined_text(
        &mut self,
        origin: Point,
        text: impl Into<String>,
        role: FontRole,
        color: Rgb8,
        underline: Underline,
    ) {
        self.ops.push(DrawOp::Text {
            origin,
            text: text.into(),
            role,
            color,
            underline: Some(underline),
        });
    }

    /// Dashed segment from `p1` to `p2`; see [`dash_segments`].
    pub(crate) fn dashed_line(&mut self, p1: Point, p2: Point, color: Rgb8, dash: f64, gap: f64) {
        for (a, b) in dash_segments(p1, p2, dash, gap) {
            self.line(a, b, color, 1.0);
        }
    }

    pub(crate) fn finish(self) -> DrawPlan {
        DrawPlan {
            canvas: self.canvas,
            background: self.background,
            ops: self.ops,
            layers: self.layers,
        }
    }
}

/// Split `p1 -> p2` into solid runs of `dash` pixels separated by `gap` pixels.
///
/// The last dash is clipped at `p2`. A zero-length segment yields no dashes. `dash` and
/// `gap` must be positive.
pub fn dash_segments(p1: Point, p2: Point, dash: f64, gap: f64) -> Vec<(Point, Point)> {
    let d = p2 - p1;
    let len = d.hypot();
    if len == 0.0 || !len.is_finite() || dash <= 0.0 || gap < 0.0 {
        return Vec::new();
    }
    let u = d / len;

    let mut out = Vec::new();
    let mut pos = 0.0;
    while pos < len {
        let end = (pos + dash).min(len);
        out.push((p1 + u * pos, p1 + u * end));
        pos = end + gap;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compose/builder.rs"]
mod tests;
