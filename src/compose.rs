use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{config::PosterConfig, foundation::error::PosterResult};

pub(crate) mod builder;
pub(crate) mod layers;
pub(crate) mod layout;
pub(crate) mod plan;

use builder::PlanBuilder;
use layers::{Layer, LayerCtx};
use layout::Layout;
use plan::DrawPlan;

/// Run every layer in painting order and collect the resulting draw plan.
///
/// Pure: no fonts, no filesystem. The random stream is seeded from `cfg.seed`, so equal
/// configurations always produce equal plans.
#[tracing::instrument(skip(cfg), fields(seed = cfg.seed))]
pub fn compose(cfg: &PosterConfig) -> PosterResult<DrawPlan> {
    cfg.validate()?;

    let layout = Layout::derive(cfg);
    let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);
    let mut out = PlanBuilder::new(cfg.canvas, cfg.palette.bg);

    for layer in Layer::ORDER {
        out.begin_layer(layer);
        let mut cx = LayerCtx {
            cfg,
            layout: &layout,
            rng: &mut rng,
            out: &mut out,
        };
        layer.draw(&mut cx);
        let ops = out.end_layer();
        tracing::debug!(?layer, ops, "layer composed");
    }

    Ok(out.finish())
}
