use crate::config::PosterConfig;

/// Geometry derived once from the configuration and shared by the layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Left and top interior edge, `M`.
    pub margin: i32,
    /// Right interior edge, `W - M`.
    pub right: i32,
    /// Bottom interior edge, `H - M`.
    pub bottom: i32,
    /// Six grid column x positions, `M` to `R` in five equal steps.
    pub columns: Vec<i32>,
    /// Minor grid rows, every 36 px from `M` (exclusive of `H - M`).
    pub rows: Vec<i32>,
    /// Major grid rows carrying tick crosses and letter labels, every 180 px.
    pub major_rows: Vec<i32>,
    /// Column positions of the numeric edge labels, ten steps across the interior.
    pub label_columns: Vec<i32>,
    pub mosaic_cols: usize,
    pub mosaic_rows: usize,
    /// Baseline of the mosaic caption.
    pub caption_y: i32,
    /// Navigation divider.
    pub nav_y: i32,
    /// First footer line.
    pub footer_y: i32,
}

pub(crate) const ROW_STEP: i32 = 36;
pub(crate) const MAJOR_ROW_STEP: i32 = 180;

impl Layout {
    pub fn derive(cfg: &PosterConfig) -> Self {
        let margin = cfg.margin;
        let right = cfg.right();
        let bottom = cfg.bottom();
        let interior = right - margin;

        let column_step = interior / 5;
        let columns = (0..6).map(|i| margin + i * column_step).collect();
        let rows = (margin..bottom).step_by(ROW_STEP as usize).collect();
        let major_rows = (margin..bottom).step_by(MAJOR_ROW_STEP as usize).collect();
        let label_step = (interior / 10).max(1) as usize;
        let label_columns = (margin..=right).step_by(label_step).collect();

        let pitch = cfg.mosaic.pitch();
        let mosaic_cols = if pitch > 0 {
            (interior / pitch).max(0) as usize
        } else {
            0
        };
        let mosaic_rows = cfg.mosaic.rows;
        let caption_y = cfg.mosaic.top + mosaic_rows as i32 * pitch + 8;
        let nav_y = caption_y + 50;
        let footer_y = nav_y + 60;

        Self {
            margin,
            right,
            bottom,
            columns,
            rows,
            major_rows,
            label_columns,
            mosaic_cols,
            mosaic_rows,
            caption_y,
            nav_y,
            footer_y,
        }
    }

    pub fn mosaic_cells(&self) -> usize {
        self.mosaic_rows * self.mosaic_cols
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/layout.rs"]
mod tests;
