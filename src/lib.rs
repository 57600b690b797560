//! Deterministic renderer for the "Threshold Cartography" poster.
//!
//! A single seeded procedure paints a 2400x2800 cartography-themed poster (survey grid,
//! star field, waypoints, product mosaic, footer) and writes it as a PNG.
//!
//! # Pipeline overview
//!
//! 1. **Compose**: `PosterConfig -> DrawPlan`. Fourteen layers run in painting order
//!    against a recording canvas. Pure, font-free, the only consumer of the seeded
//!    random stream.
//! 2. **Rasterize**: `DrawPlan + FontSet -> Frame` on a CPU pixmap.
//! 3. **Encode**: `Frame -> PNG` on disk.
//!
//! [`render`] runs all three and fails fast: a missing typeface or an unwritable output
//! path aborts the run with a [`PosterError`].
#![forbid(unsafe_code)]

mod compose;
mod config;
mod foundation;
mod pipeline;
mod render;
mod text;

pub use compose::builder::dash_segments;
pub use compose::compose;
pub use compose::layers::{
    Layer,
    NAV_ITEMS,
    mosaic::{CellShade, caption as mosaic_caption, cell_label, cell_shade, pattern_index},
};
pub use compose::layout::Layout;
pub use compose::plan::{DrawOp, DrawPlan, LayerSpan, Underline};
pub use config::{MosaicConfig, Palette, PosterConfig, Waypoint, Zone};
pub use foundation::core::{Canvas, Point, Rect, Rgb8, Vec2};
pub use foundation::error::{PosterError, PosterResult};
pub use pipeline::{RenderReport, render, render_with_fonts};
pub use render::Frame;
pub use render::cpu::rasterize;
pub use render::png::write_png;
pub use text::fonts::{FaceInfo, FontRole, FontSet, FontSpec, ShapedText};
