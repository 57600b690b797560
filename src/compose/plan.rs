use crate::{
    compose::layers::Layer,
    foundation::core::{Canvas, Point, Rect, Rgb8},
    foundation::math::Fnv1a64,
    text::fonts::FontRole,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Backend-agnostic description of the whole poster.
///
/// Produced by [`compose`](crate::compose) without touching fonts or the filesystem,
/// executed by [`rasterize`](crate::rasterize). Ops are painted in order.
pub struct DrawPlan {
    pub canvas: Canvas,
    pub background: Rgb8,
    pub ops: Vec<DrawOp>,
    pub layers: Vec<LayerSpan>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Range of [`DrawPlan::ops`] produced by one layer.
pub struct LayerSpan {
    pub layer: Layer,
    pub start: usize,
    pub end: usize, // exclusive
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Line drawn under a text run, spanning its measured advance.
pub struct Underline {
    /// Absolute y of the line's top edge.
    pub y: f64,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Draw operation emitted by the layers.
///
/// Shape geometry is in continuous pixel space: a rect `[x0, x1)` covers the pixels
/// `x0..x1`. Line end points are pixel indices; the rasterizer strokes through pixel
/// centers with square caps, so both end pixels are covered.
pub enum DrawOp {
    Line {
        from: Point,
        to: Point,
        color: Rgb8,
        width: f64,
    },
    FillRect {
        rect: Rect,
        color: Rgb8,
    },
    /// Outline drawn inward from `rect`'s edges.
    StrokeRect {
        rect: Rect,
        color: Rgb8,
        width: f64,
    },
    FillEllipse {
        bbox: Rect,
        color: Rgb8,
    },
    /// Outline centered on the ellipse inscribed in `bbox`.
    StrokeEllipse {
        bbox: Rect,
        color: Rgb8,
        width: f64,
    },
    /// `origin` is the top-left of the line box.
    Text {
        origin: Point,
        text: String,
        role: FontRole,
        color: Rgb8,
        underline: Option<Underline>,
    },
}

impl DrawOp {
    /// Area covered by a shape, or the anchor point (as an empty rect) for text.
    pub fn bounds(&self) -> Rect {
        match self {
            DrawOp::Line {
                from, to, width, ..
            } => {
                // Square caps reach half a stroke past each end point's center.
                let half = width / 2.0;
                let (a, b) = (center(*from), center(*to));
                Rect::from_points(a, b).inflate(half, half)
            }
            DrawOp::FillRect { rect, .. } | DrawOp::StrokeRect { rect, .. } => *rect,
            DrawOp::FillEllipse { bbox, .. } => *bbox,
            DrawOp::StrokeEllipse { bbox, width, .. } => bbox.inflate(width / 2.0, width / 2.0),
            DrawOp::Text { origin, .. } => Rect::from_points(*origin, *origin),
        }
    }

    pub fn color(&self) -> Rgb8 {
        match self {
            DrawOp::Line { color, .. }
            | DrawOp::FillRect { color, .. }
            | DrawOp::StrokeRect { color, .. }
            | DrawOp::FillEllipse { color, .. }
            | DrawOp::StrokeEllipse { color, .. }
            | DrawOp::Text { color, .. } => *color,
        }
    }

    /// Text content, for [`DrawOp::Text`] only.
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawOp::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    fn hash_into(&self, h: &mut Fnv1a64) {
        fn point(h: &mut Fnv1a64, p: Point) {
            h.write_f64(p.x);
            h.write_f64(p.y);
        }
        fn rect(h: &mut Fnv1a64, r: Rect) {
            h.write_f64(r.x0);
            h.write_f64(r.y0);
            h.write_f64(r.x1);
            h.write_f64(r.y1);
        }
        fn color(h: &mut Fnv1a64, c: Rgb8) {
            h.write_bytes(&c.to_array());
        }

        match self {
            DrawOp::Line {
                from,
                to,
                color: c,
                width,
            } => {
                h.write_u8(0);
                point(h, *from);
                point(h, *to);
                color(h, *c);
                h.write_f64(*width);
            }
            DrawOp::FillRect { rect: r, color: c } => {
                h.write_u8(1);
                rect(h, *r);
                color(h, *c);
            }
            DrawOp::StrokeRect {
                rect: r,
                color: c,
                width,
            } => {
                h.write_u8(2);
                rect(h, *r);
                color(h, *c);
                h.write_f64(*width);
            }
            DrawOp::FillEllipse { bbox, color: c } => {
                h.write_u8(3);
                rect(h, *bbox);
                color(h, *c);
            }
            DrawOp::StrokeEllipse {
                bbox,
                color: c,
                width,
            } => {
                h.write_u8(4);
                rect(h, *bbox);
                color(h, *c);
                h.write_f64(*width);
            }
            DrawOp::Text {
                origin,
                text,
                role,
                color: c,
                underline,
            } => {
                h.write_u8(5);
                point(h, *origin);
                h.write_str(text);
                h.write_u32(*role as u32);
                color(h, *c);
                match underline {
                    Some(u) => {
                        h.write_u8(1);
                        h.write_f64(u.y);
                        h.write_f64(u.width);
                    }
                    None => h.write_u8(0),
                }
            }
        }
    }
}

/// Pixel index to pixel center.
pub(crate) fn center(p: Point) -> Point {
    Point::new(p.x + 0.5, p.y + 0.5)
}

impl DrawPlan {
    /// Ops produced by `layer`, empty if the layer did not run.
    pub fn layer_ops(&self, layer: Layer) -> &[DrawOp] {
        self.layers
            .iter()
            .find(|s| s.layer == layer)
            .map(|s| &self.ops[s.start..s.end])
            .unwrap_or(&[])
    }

    /// Stable content hash: equal plans always hash equal across runs and platforms.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.canvas.width);
        h.write_u32(self.canvas.height);
        h.write_bytes(&self.background.to_array());
        h.write_u32(self.ops.len() as u32);
        for op in &self.ops {
            op.hash_into(&mut h);
        }
        h.finish()
    }

    /// Copy of the plan without text runs, for rendering without fonts.
    pub fn without_text(&self) -> DrawPlan {
        let mut ops = Vec::with_capacity(self.ops.len());
        let mut layers = Vec::with_capacity(self.layers.len());
        for span in &self.layers {
            let start = ops.len();
            ops.extend(
                self.ops[span.start..span.end]
                    .iter()
                    .filter(|op| !matches!(op, DrawOp::Text { .. }))
                    .cloned(),
            );
            layers.push(LayerSpan {
                layer: span.layer,
                start,
                end: ops.len(),
            });
        }
        DrawPlan {
            canvas: self.canvas,
            background: self.background,
            ops,
            layers,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/plan.rs"]
mod tests;
