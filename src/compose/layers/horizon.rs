use crate::{compose::builder::px, compose::layers::LayerCtx, text::fonts::FontRole};

const HORIZON_Y: i32 = 1040;
const ECHO_OFFSETS: [i32; 3] = [3, 6, 10];

/// Bold horizon with a ruler on top and faint echoes underneath.
pub(crate) fn horizon(cx: &mut LayerCtx<'_>) {
    let p = cx.cfg.palette;
    let (m, r) = (cx.layout.margin, cx.layout.right);
    let hl = HORIZON_Y;

    cx.out.line(px(m, hl), px(r, hl), p.secondary, 2.0);

    for x in (m..r).step_by(16) {
        let h = if x % 80 == 0 { 5 } else { 2 };
        cx.out.line(px(x, hl - h), px(x, hl), p.dim, 1.0);
    }

    for off in ECHO_OFFSETS {
        cx.out.line(px(m, hl + off), px(r, hl + off), p.faint, 1.0);
    }

    cx.out.text(
        px(r - 200, hl + 14),
        "THRESHOLD  37.7749N",
        FontRole::Coord,
        p.muted,
    );
}
