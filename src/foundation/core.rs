use std::fmt;

use crate::foundation::error::{PosterError, PosterResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Opaque 8-bit sRGB color.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_u24(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xff) as u8,
            g: ((v >> 8) & 0xff) as u8,
            b: (v & 0xff) as u8,
        }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn parse_hex(s: &str) -> PosterResult<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(PosterError::validation(format!(
                "color '{s}' must be #RRGGBB"
            )));
        }
        let v = u32::from_str_radix(digits, 16)
            .map_err(|e| PosterError::validation(format!("color '{s}': {e}")))?;
        Ok(Self::from_u24(v))
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Whether `p` lies inside `[0, width) x [0, height)`.
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < f64::from(self.width) && p.y < f64::from(self.height)
    }

    /// Whether `r` lies inside the canvas. The far edges may touch the border since a
    /// covered area `[x0, x1)` ends one past its last pixel.
    pub fn contains_rect(self, r: Rect) -> bool {
        r.x0 >= 0.0
            && r.y0 >= 0.0
            && r.x1 <= f64::from(self.width)
            && r.y1 <= f64::from(self.height)
    }

    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
