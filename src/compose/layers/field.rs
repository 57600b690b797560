use rand::Rng;
use rand_distr::StandardNormal;

use crate::{compose::layers::LayerCtx, foundation::core::Point};

const SAMPLES: usize = 420;
const CENTER: (f64, f64) = (1350.0, 320.0);
const SIGMA: (f64, f64) = (300.0, 200.0);
/// Lower edge of the star field and top of the mist band.
const FIELD_FLOOR: f64 = 740.0;
const MIST_SPECKS: usize = 60;
const MIST_DEPTH: f64 = 300.0;

/// Gaussian star cluster in the upper right, with a thin mist below it.
pub(crate) fn constellation(cx: &mut LayerCtx<'_>) {
    let p = cx.cfg.palette;
    let m = f64::from(cx.layout.margin);
    let r = f64::from(cx.layout.right);

    for _ in 0..SAMPLES {
        let zx: f64 = cx.rng.sample(StandardNormal);
        let zy: f64 = cx.rng.sample(StandardNormal);
        let x = CENTER.0 + zx * SIGMA.0;
        let y = CENTER.1 + zy * SIGMA.1;
        if !(m + 20.0 < x && x < r - 20.0 && m + 20.0 < y && y < FIELD_FLOOR) {
            continue;
        }

        let b: f64 = cx.rng.gen_range(0.0..1.0);
        if b > 0.94 {
            cx.out.fill_ellipse(
                Point::new(x - 2.0, y - 2.0),
                Point::new(x + 2.0, y + 2.0),
                p.primary,
            );
        } else if b > 0.82 {
            cx.out.fill_ellipse(
                Point::new(x - 1.0, y - 1.0),
                Point::new(x + 1.0, y + 1.0),
                p.secondary,
            );
        } else {
            cx.out.fill_ellipse(Point::new(x, y), Point::new(x + 1.0, y + 1.0), p.dim);
        }
    }

    for _ in 0..MIST_SPECKS {
        let x = m + cx.rng.gen_range(0.0..1.0) * (r - m);
        let y = FIELD_FLOOR + cx.rng.gen_range(0.0..1.0) * MIST_DEPTH;
        cx.out.fill_box(Point::new(x, y), Point::new(x + 1.0, y + 1.0), p.faint);
    }
}
