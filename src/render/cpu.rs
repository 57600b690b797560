use kurbo::Shape as _;

use crate::{
    compose::plan::{DrawOp, DrawPlan, Underline, center},
    foundation::core::{BezPath, Point, Rect, Rgb8},
    foundation::error::{PosterError, PosterResult},
    render::Frame,
    text::fonts::{FontRole, FontSet},
};

const TOLERANCE: f64 = 0.05;

/// Paint `plan` onto a fresh pixmap.
///
/// The background is filled first, then every op in plan order. Text ops are shaped with
/// the face bound to their role; a role missing from `fonts` is a [`PosterError::Raster`].
#[tracing::instrument(skip(plan, fonts), fields(ops = plan.ops.len()))]
pub fn rasterize(plan: &DrawPlan, fonts: &mut FontSet) -> PosterResult<Frame> {
    let width: u16 = plan
        .canvas
        .width
        .try_into()
        .map_err(|_| PosterError::raster("canvas width exceeds u16"))?;
    let height: u16 = plan
        .canvas
        .height
        .try_into()
        .map_err(|_| PosterError::raster("canvas height exceeds u16"))?;

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    clear_pixmap(&mut pixmap, plan.background);

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(paint(plan.background));
    ctx.fill_rect(&rect_to_cpu(plan.canvas.rect()));

    for op in &plan.ops {
        draw_op(&mut ctx, op, fonts)?;
    }
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    Ok(Frame::from_rgba8(
        plan.canvas.width,
        plan.canvas.height,
        pixmap.data_as_u8_slice(),
    ))
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, c: Rgb8) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&[c.r, c.g, c.b, 255]);
    }
}

fn draw_op(
    ctx: &mut vello_cpu::RenderContext,
    op: &DrawOp,
    fonts: &mut FontSet,
) -> PosterResult<()> {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

    match op {
        DrawOp::Line {
            from,
            to,
            color,
            width,
        } => {
            ctx.set_paint(paint(*color));
            ctx.fill_path(&bezpath_to_cpu(&line_outline(*from, *to, *width)));
        }
        DrawOp::FillRect { rect, color } => {
            ctx.set_paint(paint(*color));
            ctx.fill_rect(&rect_to_cpu(*rect));
        }
        DrawOp::StrokeRect { rect, color, width } => {
            ctx.set_paint(paint(*color));
            for side in rect_border(*rect, *width) {
                ctx.fill_rect(&rect_to_cpu(side));
            }
        }
        DrawOp::FillEllipse { bbox, color } => {
            ctx.set_paint(paint(*color));
            let path = kurbo::Ellipse::from_rect(*bbox).to_path(TOLERANCE);
            ctx.fill_path(&bezpath_to_cpu(&path));
        }
        DrawOp::StrokeEllipse { bbox, color, width } => {
            ctx.set_paint(paint(*color));
            let ellipse = kurbo::Ellipse::from_rect(*bbox);
            let outline = kurbo::stroke(
                ellipse.path_elements(TOLERANCE),
                &kurbo::Stroke::new(*width),
                &kurbo::StrokeOpts::default(),
                TOLERANCE,
            );
            ctx.fill_path(&bezpath_to_cpu(&outline));
        }
        DrawOp::Text {
            origin,
            text,
            role,
            color,
            underline,
        } => draw_text(ctx, fonts, *origin, text, *role, *color, *underline)?,
    }
    Ok(())
}

fn draw_text(
    ctx: &mut vello_cpu::RenderContext,
    fonts: &mut FontSet,
    origin: Point,
    text: &str,
    role: FontRole,
    color: Rgb8,
    underline: Option<Underline>,
) -> PosterResult<()> {
    let shaped = fonts.shape(role, text, color)?;
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));

    for line in shaped.layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let brush = run.style().brush;
            ctx.set_paint(paint(brush));

            // Absolute x and baseline y within the layout box.
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&shaped.font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }

    if let Some(u) = underline {
        let advance = f64::from(shaped.layout.width());
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(paint(color));
        ctx.fill_rect(&rect_to_cpu(Rect::new(
            origin.x,
            u.y,
            origin.x + advance,
            u.y + u.width,
        )));
    }
    Ok(())
}

/// Filled outline of a square-capped stroke through the end pixels' centers.
pub(crate) fn line_outline(from: Point, to: Point, width: f64) -> BezPath {
    let (a, b) = (center(from), center(to));
    if a == b {
        let half = width / 2.0;
        return Rect::new(a.x - half, a.y - half, a.x + half, a.y + half).to_path(TOLERANCE);
    }
    kurbo::stroke(
        kurbo::Line::new(a, b).path_elements(TOLERANCE),
        &kurbo::Stroke::new(width).with_caps(kurbo::Cap::Square),
        &kurbo::StrokeOpts::default(),
        TOLERANCE,
    )
}

/// Four edge strips of `rect`, each `width` thick, inside the rect.
pub(crate) fn rect_border(rect: Rect, width: f64) -> [Rect; 4] {
    let w = width
        .min(rect.width() / 2.0)
        .min(rect.height() / 2.0)
        .max(0.0);
    [
        Rect::new(rect.x0, rect.y0, rect.x1, rect.y0 + w),
        Rect::new(rect.x0, rect.y1 - w, rect.x1, rect.y1),
        Rect::new(rect.x0, rect.y0 + w, rect.x0 + w, rect.y1 - w),
        Rect::new(rect.x1 - w, rect.y0 + w, rect.x1, rect.y1 - w),
    ]
}

fn paint(c: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
