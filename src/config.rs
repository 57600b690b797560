use std::{
    collections::{BTreeMap, BTreeSet},
    path::PathBuf,
};

use crate::{
    foundation::core::{Canvas, Point, Rgb8},
    foundation::error::{PosterError, PosterResult},
    text::fonts::{FontRole, FontSpec},
};

/// Named colors of the poster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    pub bg: Rgb8,
    pub primary: Rgb8,
    pub accent: Rgb8,
    pub secondary: Rgb8,
    pub faint: Rgb8,
    pub dim: Rgb8,
    pub whisper: Rgb8,
    pub muted: Rgb8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bg: Rgb8::from_u24(0x0B0D10),
            primary: Rgb8::from_u24(0xE8E4DD),
            accent: Rgb8::from_u24(0xC94A42),
            secondary: Rgb8::from_u24(0x3E6070),
            faint: Rgb8::from_u24(0x141820),
            dim: Rgb8::from_u24(0x222830),
            whisper: Rgb8::from_u24(0x485060),
            muted: Rgb8::from_u24(0x303840),
        }
    }
}

/// A territory card: index glyph, three text lines and a dither strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Zone {
    pub x: i32,
    pub y: i32,
    pub index: String,
    pub title: String,
    pub subtitle: String,
    pub note: String,
}

/// A ringed marker on the dashed route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Waypoint {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub label: String,
}

impl Waypoint {
    pub fn center(&self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Top edge of the first cell row.
    pub top: i32,
    pub cell: i32,
    pub gap: i32,
    pub rows: usize,
    /// `(row, col)` pairs painted with the accent color.
    pub accent_cells: BTreeSet<(usize, usize)>,
    /// `(row, col)` pairs painted with the secondary color, unless also accented.
    pub secondary_cells: BTreeSet<(usize, usize)>,
    /// Shades indexed by the row/col pattern for every other cell.
    pub palette: Vec<Rgb8>,
}

impl MosaicConfig {
    fn threshold_cartography(p: &Palette) -> Self {
        const ACCENT: [(usize, usize); 18] = [
            (0, 3),
            (0, 10),
            (0, 18),
            (1, 7),
            (1, 15),
            (1, 22),
            (2, 1),
            (2, 11),
            (2, 20),
            (3, 5),
            (3, 14),
            (3, 23),
            (4, 0),
            (4, 9),
            (4, 17),
            (5, 4),
            (5, 12),
            (5, 21),
        ];
        const SECONDARY: [(usize, usize); 14] = [
            (0, 7),
            (0, 15),
            (1, 2),
            (1, 19),
            (2, 6),
            (2, 15),
            (3, 10),
            (3, 21),
            (4, 4),
            (4, 14),
            (4, 23),
            (5, 1),
            (5, 9),
            (5, 17),
        ];

        Self {
            top: 1400,
            cell: 68,
            gap: 7,
            rows: 6,
            accent_cells: ACCENT.into_iter().collect(),
            secondary_cells: SECONDARY.into_iter().collect(),
            palette: vec![
                p.bg,
                p.faint,
                p.dim,
                p.secondary,
                Rgb8::from_u24(0x1A2830),
                Rgb8::from_u24(0x151E24),
                p.muted,
                Rgb8::from_u24(0x1E2A34),
            ],
        }
    }

    /// Distance between the top-left corners of neighbouring cells.
    pub fn pitch(&self) -> i32 {
        self.cell + self.gap
    }
}

/// Every compiled-in constant of the poster, gathered into one value.
///
/// [`PosterConfig::default`] is the Threshold Cartography poster; there is no other
/// preset. Fine-grained offsets (label nudges, tick lengths) stay next to the layer that
/// uses them.
#[derive(Clone, Debug)]
pub struct PosterConfig {
    pub canvas: Canvas,
    pub margin: i32,
    pub seed: u64,
    pub palette: Palette,
    pub fonts_dir: PathBuf,
    pub fonts: BTreeMap<FontRole, FontSpec>,
    pub output: PathBuf,
    /// Center of the origin waypoint and start of the dashed route.
    pub origin: Point,
    pub zones: Vec<Zone>,
    pub waypoints: Vec<Waypoint>,
    pub mosaic: MosaicConfig,
}

impl Default for PosterConfig {
    fn default() -> Self {
        let palette = Palette::default();
        let margin = 160;

        let zone = |dx: i32, index: &str, title: &str, subtitle: &str, note: &str| Zone {
            x: margin + dx,
            y: 830,
            index: index.to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            note: note.to_string(),
        };
        let waypoint = |x: i32, y: i32, radius: i32, label: &str| Waypoint {
            x,
            y,
            radius,
            label: label.to_string(),
        };

        Self {
            canvas: Canvas {
                width: 2400,
                height: 2800,
            },
            margin,
            seed: 42,
            mosaic: MosaicConfig::threshold_cartography(&palette),
            palette,
            fonts_dir: PathBuf::from("fonts"),
            fonts: FontRole::default_table(),
            output: PathBuf::from("threshold-cartography.png"),
            origin: Point::new(400.0, 520.0),
            zones: vec![
                zone(
                    20,
                    "01",
                    "HOME",
                    "Decor & Organization",
                    "Threshold objects for dwelling spaces",
                ),
                zone(
                    720,
                    "02",
                    "CRAFT",
                    "Kitchen & Tools",
                    "Essential instruments of daily ritual",
                ),
                zone(
                    1420,
                    "03",
                    "FORM",
                    "Tech & Aesthetic",
                    "Where function meets visual order",
                ),
            ],
            waypoints: vec![
                waypoint(1620, 970, 45, "DISCOVER"),
                waypoint(340, 1580, 55, "CURATE"),
                waypoint(1460, 2060, 38, "COLLECT"),
            ],
        }
    }
}

impl PosterConfig {
    /// Reject configurations the layers or the rasterizer cannot handle.
    pub fn validate(&self) -> PosterResult<()> {
        let Canvas { width, height } = self.canvas;
        if width == 0 || height == 0 {
            return Err(PosterError::validation("canvas must be non-empty"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(PosterError::validation(format!(
                "canvas {width}x{height} exceeds {} px per side",
                u16::MAX
            )));
        }
        if self.margin < 0 || 2 * i64::from(self.margin) >= i64::from(width.min(height)) {
            return Err(PosterError::validation(format!(
                "margin {} leaves no interior on a {width}x{height} canvas",
                self.margin
            )));
        }
        // Margin marks sit between x = 40 and x = M - 20.
        if self.margin < 60 {
            return Err(PosterError::validation(format!(
                "margin {} is too narrow for the margin marks (min 60)",
                self.margin
            )));
        }
        // Grid and coordinate steps are fractions of the interior width.
        if self.interior_width() < 10 {
            return Err(PosterError::validation(
                "interior width must be at least 10 px",
            ));
        }

        let m = &self.mosaic;
        if m.cell <= 0 || m.gap < 0 {
            return Err(PosterError::validation(
                "mosaic cell must be > 0 and gap >= 0",
            ));
        }
        if m.rows == 0 {
            return Err(PosterError::validation("mosaic needs at least one row"));
        }
        if m.palette.is_empty() {
            return Err(PosterError::validation("mosaic palette must be non-empty"));
        }

        for role in FontRole::ALL {
            let spec = self.fonts.get(&role).ok_or_else(|| {
                PosterError::validation(format!("no font configured for role {role:?}"))
            })?;
            if !spec.size_px.is_finite() || spec.size_px <= 0.0 {
                return Err(PosterError::validation(format!(
                    "font size for role {role:?} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    /// Right interior edge, `W - M`.
    pub fn right(&self) -> i32 {
        self.canvas.width as i32 - self.margin
    }

    /// Bottom interior edge, `H - M`.
    pub fn bottom(&self) -> i32 {
        self.canvas.height as i32 - self.margin
    }

    pub fn interior_width(&self) -> i32 {
        self.right() - self.margin
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
