use crate::{
    compose::builder::px,
    compose::layers::LayerCtx,
    config::{MosaicConfig, Palette},
    foundation::core::Rgb8,
    text::fonts::FontRole,
};

/// Which rule picked a cell's color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellShade {
    Accent,
    Secondary,
    /// Index into [`MosaicConfig::palette`].
    Pattern(usize),
}

/// Color rule of the product mosaic: fixed accent cells, then fixed secondary cells,
/// then a reproducible row/col pattern over the cell palette.
pub fn cell_shade(m: &MosaicConfig, row: usize, col: usize) -> CellShade {
    if m.accent_cells.contains(&(row, col)) {
        CellShade::Accent
    } else if m.secondary_cells.contains(&(row, col)) {
        CellShade::Secondary
    } else {
        CellShade::Pattern(pattern_index(row, col, m.palette.len()))
    }
}

pub fn pattern_index(row: usize, col: usize, palette_len: usize) -> usize {
    (row * 3 + col * 7 + row * col * 2) % palette_len
}

fn shade_color(m: &MosaicConfig, p: &Palette, shade: CellShade) -> Rgb8 {
    match shade {
        CellShade::Accent => p.accent,
        CellShade::Secondary => p.secondary,
        CellShade::Pattern(i) => m.palette[i],
    }
}

/// 1-based, row-major, at least two digits.
pub fn cell_label(row: usize, col: usize, cols: usize) -> String {
    format!("{:02}", row * cols + col + 1)
}

pub fn caption(cells: usize) -> String {
    format!("FIG. 01  /  PRODUCT TERRAIN MAP  /  {cells} CURATED OBJECTS")
}

pub(crate) fn mosaic(cx: &mut LayerCtx<'_>) {
    let m = &cx.cfg.mosaic;
    let p = &cx.cfg.palette;
    let l = cx.layout;
    let pitch = m.pitch();

    for row in 0..l.mosaic_rows {
        for col in 0..l.mosaic_cols {
            let gx = l.margin + col as i32 * pitch;
            let gy = m.top + row as i32 * pitch;

            let color = shade_color(m, p, cell_shade(m, row, col));
            // Inclusive far corner: each square is cell + 1 pixels wide.
            cx.out.fill_box(px(gx, gy), px(gx + m.cell, gy + m.cell), color);
            cx.out.text(
                px(gx + 3, gy + 3),
                cell_label(row, col, l.mosaic_cols),
                FontRole::Coord,
                p.whisper,
            );
        }
    }

    cx.out.text(
        px(l.margin, l.caption_y),
        caption(l.mosaic_cells()),
        FontRole::Coord,
        p.muted,
    );
}

#[cfg(test)]
#[path = "../../../tests/unit/layers/mosaic.rs"]
mod tests;
