use rand::Rng;

use crate::{compose::builder::px, compose::layers::LayerCtx, text::fonts::FontRole};

const DITHER_ROWS: i32 = 3;
const DITHER_COLS: i32 = 30;
const DITHER_STEP: i32 = 8;

/// Three territory cards, each ending in a random speckle strip.
pub(crate) fn territories(cx: &mut LayerCtx<'_>) {
    let p = cx.cfg.palette;

    for z in &cx.cfg.zones {
        let (x, y) = (z.x, z.y);
        cx.out.text(px(x, y), z.index.clone(), FontRole::Number, p.dim);
        cx.out.line(px(x + 76, y + 6), px(x + 76, y + 50), p.secondary, 1.0);
        cx.out.text(
            px(x + 92, y + 4),
            z.title.clone(),
            FontRole::Section,
            p.primary,
        );
        cx.out.text(
            px(x + 92, y + 26),
            z.subtitle.clone(),
            FontRole::LabelSmall,
            p.whisper,
        );
        cx.out.text(px(x + 92, y + 42), z.note.clone(), FontRole::Coord, p.muted);

        for row in 0..DITHER_ROWS {
            for col in 0..DITHER_COLS {
                let dx = x + col * DITHER_STEP;
                let dy = y + 62 + row * DITHER_STEP;
                if cx.rng.gen_range(0.0..1.0) > 0.3 {
                    let c = if cx.rng.gen_range(0.0..1.0) > 0.95 {
                        p.secondary
                    } else {
                        p.dim
                    };
                    cx.out.fill_box(px(dx, dy), px(dx + 1, dy + 1), c);
                }
            }
        }
    }
}
