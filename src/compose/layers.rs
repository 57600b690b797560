use rand_chacha::ChaCha8Rng;

use crate::{compose::builder::PlanBuilder, compose::layout::Layout, config::PosterConfig};

mod chrome;
mod field;
mod horizon;
mod markers;
pub(crate) mod mosaic;
mod structure;
mod territories;
mod typography;

pub use chrome::NAV_ITEMS;

/// One drawing pass of the poster, listed in painting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Layer {
    Grid,
    EdgeCoordinates,
    Constellation,
    Origin,
    Title,
    Territories,
    Horizon,
    Waypoints,
    Monument,
    Mosaic,
    Navigation,
    Footer,
    Compass,
    MarginMarks,
}

/// State handed to each layer. The random stream is shared and consumed in layer order.
pub(crate) struct LayerCtx<'a> {
    pub(crate) cfg: &'a PosterConfig,
    pub(crate) layout: &'a Layout,
    pub(crate) rng: &'a mut ChaCha8Rng,
    pub(crate) out: &'a mut PlanBuilder,
}

impl Layer {
    /// Painting order; later layers cover earlier ones.
    pub const ORDER: [Layer; 14] = [
        Layer::Grid,
        Layer::EdgeCoordinates,
        Layer::Constellation,
        Layer::Origin,
        Layer::Title,
        Layer::Territories,
        Layer::Horizon,
        Layer::Waypoints,
        Layer::Monument,
        Layer::Mosaic,
        Layer::Navigation,
        Layer::Footer,
        Layer::Compass,
        Layer::MarginMarks,
    ];

    /// Whether the layer draws from the random stream.
    pub fn uses_rng(self) -> bool {
        matches!(
            self,
            Layer::Constellation | Layer::Territories | Layer::MarginMarks
        )
    }

    pub(crate) fn draw(self, cx: &mut LayerCtx<'_>) {
        match self {
            Layer::Grid => structure::grid(cx),
            Layer::EdgeCoordinates => structure::edge_coordinates(cx),
            Layer::Constellation => field::constellation(cx),
            Layer::Origin => markers::origin(cx),
            Layer::Title => typography::title(cx),
            Layer::Territories => territories::territories(cx),
            Layer::Horizon => horizon::horizon(cx),
            Layer::Waypoints => markers::waypoints(cx),
            Layer::Monument => typography::monument(cx),
            Layer::Mosaic => mosaic::mosaic(cx),
            Layer::Navigation => chrome::navigation(cx),
            Layer::Footer => chrome::footer(cx),
            Layer::Compass => markers::compass(cx),
            Layer::MarginMarks => structure::margin_marks(cx),
        }
    }
}
