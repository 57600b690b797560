use std::path::PathBuf;

use crate::{
    compose::compose,
    config::PosterConfig,
    foundation::error::PosterResult,
    render::{cpu::rasterize, png::write_png},
    text::fonts::FontSet,
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Summary of a completed run.
pub struct RenderReport {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub ops: usize,
    /// [`DrawPlan::fingerprint`](crate::DrawPlan::fingerprint) of the composed plan.
    pub plan_fingerprint: u64,
    /// [`Frame::fingerprint`](crate::Frame::fingerprint) of the written pixels.
    pub frame_fingerprint: u64,
}

/// Load fonts, compose, rasterize and write the poster.
///
/// This is the one-shot API. Any failure aborts the run; a partially written file is
/// left as is.
///
/// Pipeline:
/// 1. [`FontSet::load`]
/// 2. [`compose`](crate::compose)
/// 3. [`rasterize`](crate::rasterize)
/// 4. [`write_png`](crate::write_png)
pub fn render(cfg: &PosterConfig) -> PosterResult<RenderReport> {
    cfg.validate()?;
    let mut fonts = FontSet::load(&cfg.fonts_dir, &cfg.fonts)?;
    render_with_fonts(cfg, &mut fonts)
}

/// Like [`render`], with fonts loaded by the caller.
pub fn render_with_fonts(cfg: &PosterConfig, fonts: &mut FontSet) -> PosterResult<RenderReport> {
    let plan = compose(cfg)?;
    let frame = rasterize(&plan, fonts)?;
    write_png(&frame, &cfg.output)?;

    Ok(RenderReport {
        path: cfg.output.clone(),
        width: frame.width,
        height: frame.height,
        ops: plan.ops.len(),
        plan_fingerprint: plan.fingerprint(),
        frame_fingerprint: frame.fingerprint(),
    })
}
