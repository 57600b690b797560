//! Grid, edge coordinates and margin marks: the survey frame around the poster.

use rand::Rng;

use crate::{
    compose::builder::px, compose::layers::LayerCtx, compose::layout::MAJOR_ROW_STEP,
    text::fonts::FontRole,
};

pub(crate) fn grid(cx: &mut LayerCtx<'_>) {
    let p = &cx.cfg.palette;
    let l = cx.layout;

    for &y in &l.rows {
        // Absolute y, not the row index: the shading follows page coordinates.
        let c = if y % MAJOR_ROW_STEP == 0 {
            p.dim
        } else {
            p.faint
        };
        cx.out.line(px(l.margin, y), px(l.right, y), c, 1.0);
    }

    for &x in &l.columns {
        cx.out.line(px(x, l.margin - 30), px(x, l.bottom + 30), p.faint, 1.0);
    }

    for &x in &l.columns {
        for &y in &l.major_rows {
            cx.out.cross(px(x, y), 4.0, p.dim);
        }
    }
}

/// Letter-number row labels on both sides, two-digit column labels top and bottom.
pub(crate) fn edge_coordinates(cx: &mut LayerCtx<'_>) {
    let muted = cx.cfg.palette.muted;
    let l = cx.layout;

    for (i, &y) in l.major_rows.iter().enumerate() {
        let label = row_label(i);
        cx.out.text(
            px(l.margin - 46, y - 4),
            label.clone(),
            FontRole::Coord,
            muted,
        );
        cx.out.text(px(l.right + 14, y - 4), label, FontRole::Coord, muted);
    }

    for (i, &x) in l.label_columns.iter().enumerate() {
        let label = format!("{i:02}");
        cx.out.text(
            px(x - 4, l.margin - 48),
            label.clone(),
            FontRole::Coord,
            muted,
        );
        cx.out.text(px(x - 4, l.bottom + 38), label, FontRole::Coord, muted);
    }
}

/// `A00`, `B01`, ... wrapping the letter after `Z`.
pub(crate) fn row_label(i: usize) -> String {
    let letter = char::from(b'A' + (i % 26) as u8);
    format!("{letter}{i:02}")
}

/// Random crosses in the side margins, then a tick ruler under the grid.
pub(crate) fn margin_marks(cx: &mut LayerCtx<'_>) {
    let dim = cx.cfg.palette.dim;
    let width = cx.cfg.canvas.width as i32;
    let l = cx.layout;

    for _ in 0..20 {
        let left = cx.rng.gen_range(40..=l.margin - 20);
        let right = cx.rng.gen_range(l.right + 20..=width - 40);
        let x = if cx.rng.gen_bool(0.5) { left } else { right };
        let y = cx.rng.gen_range(l.margin..=l.bottom);
        cx.out.cross(px(x, y), 3.0, dim);
    }

    for x in (l.margin..l.right).step_by(20) {
        let th = if x % 100 == 0 { 5 } else { 2 };
        cx.out.line(px(x, l.bottom + 16), px(x, l.bottom + 16 + th), dim, 1.0);
    }
}
