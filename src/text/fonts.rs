use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    foundation::core::Rgb8,
    foundation::error::{PosterError, PosterResult},
    text::layout::TextLayoutEngine,
};

/// Logical use of a typeface on the poster.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum FontRole {
    Title,
    Subtitle,
    LabelSmall,
    Monument,
    Section,
    Nav,
    Number,
    Coord,
    Cta,
    SerifItalic,
    MonoSmall,
}

impl FontRole {
    pub const ALL: [FontRole; 11] = [
        FontRole::Title,
        FontRole::Subtitle,
        FontRole::LabelSmall,
        FontRole::Monument,
        FontRole::Section,
        FontRole::Nav,
        FontRole::Number,
        FontRole::Coord,
        FontRole::Cta,
        FontRole::SerifItalic,
        FontRole::MonoSmall,
    ];

    /// Typeface file and pixel size for every role of the poster.
    pub fn default_table() -> BTreeMap<FontRole, FontSpec> {
        let spec = |file: &str, size_px: f32| FontSpec {
            file: file.to_string(),
            size_px,
        };
        BTreeMap::from([
            (FontRole::Title, spec("Italiana-Regular.ttf", 92.0)),
            (FontRole::Subtitle, spec("Jura-Light.ttf", 22.0)),
            (
                FontRole::LabelSmall,
                spec("InstrumentSans-Regular.ttf", 12.0),
            ),
            (FontRole::Monument, spec("Italiana-Regular.ttf", 140.0)),
            (FontRole::Section, spec("Jura-Medium.ttf", 19.0)),
            (FontRole::Nav, spec("InstrumentSans-Bold.ttf", 12.0)),
            (FontRole::Number, spec("Jura-Light.ttf", 50.0)),
            (FontRole::Coord, spec("DMMono-Regular.ttf", 9.0)),
            (FontRole::Cta, spec("InstrumentSans-Bold.ttf", 16.0)),
            (FontRole::SerifItalic, spec("Lora-Italic.ttf", 13.0)),
            (FontRole::MonoSmall, spec("GeistMono-Regular.ttf", 11.0)),
        ])
    }
}

/// Typeface file (relative to the font directory) and pixel size.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontSpec {
    pub file: String,
    pub size_px: f32,
}

struct FontFace {
    file: String,
    path: PathBuf,
    bytes: Arc<Vec<u8>>,
    engine: TextLayoutEngine,
    data: vello_cpu::peniko::FontData,
}

/// A shaped single-line text run plus the face to draw its glyphs with.
pub struct ShapedText {
    pub layout: parley::Layout<Rgb8>,
    pub font: vello_cpu::peniko::FontData,
}

/// Read-only view of one loaded face, for diagnostics.
#[derive(Debug)]
pub struct FaceInfo<'a> {
    pub file: &'a str,
    pub path: &'a Path,
    pub family: &'a str,
    pub bytes: &'a [u8],
    pub roles: Vec<FontRole>,
}

/// Typefaces loaded for the run, keyed by role.
///
/// Faces are read once per file even when several roles share them.
pub struct FontSet {
    faces: Vec<FontFace>,
    roles: BTreeMap<FontRole, (usize, f32)>,
}

impl FontSet {
    /// A set with no faces. Only useful for plans without text.
    pub fn empty() -> Self {
        Self {
            faces: Vec::new(),
            roles: BTreeMap::new(),
        }
    }

    /// Load every face named in `table` from `dir`.
    ///
    /// Fails with [`PosterError::FontLoad`] on the first file that cannot be read or that
    /// holds no usable family; there is no fallback face.
    #[tracing::instrument(skip(dir, table), fields(dir = %dir.display()))]
    pub fn load(dir: &Path, table: &BTreeMap<FontRole, FontSpec>) -> PosterResult<Self> {
        let mut faces: Vec<FontFace> = Vec::new();
        let mut roles = BTreeMap::new();

        for (&role, spec) in table {
            let idx = match faces.iter().position(|f| f.file == spec.file) {
                Some(idx) => idx,
                None => {
                    faces.push(load_face(dir, &spec.file)?);
                    faces.len() - 1
                }
            };
            roles.insert(role, (idx, spec.size_px));
        }

        tracing::debug!(faces = faces.len(), roles = roles.len(), "fonts loaded");
        Ok(Self { faces, roles })
    }

    pub fn has_role(&self, role: FontRole) -> bool {
        self.roles.contains_key(&role)
    }

    /// Shape `text` in the face and size bound to `role`.
    pub fn shape(&mut self, role: FontRole, text: &str, color: Rgb8) -> PosterResult<ShapedText> {
        let &(idx, size_px) = self
            .roles
            .get(&role)
            .ok_or_else(|| PosterError::raster(format!("no face loaded for role {role:?}")))?;
        let face = &mut self.faces[idx];
        let layout = face.engine.layout_line(text, size_px, color)?;
        Ok(ShapedText {
            layout,
            font: face.data.clone(),
        })
    }

    /// Advance width of `text` in pixels.
    pub fn measure(&mut self, role: FontRole, text: &str) -> PosterResult<f32> {
        let shaped = self.shape(role, text, Rgb8::default())?;
        Ok(shaped.layout.width())
    }

    /// Loaded faces in load order, with the roles bound to each.
    pub fn faces(&self) -> Vec<FaceInfo<'_>> {
        self.faces
            .iter()
            .enumerate()
            .map(|(idx, f)| FaceInfo {
                file: &f.file,
                path: &f.path,
                family: f.engine.family_name(),
                bytes: f.bytes.as_slice(),
                roles: self
                    .roles
                    .iter()
                    .filter(|(_, (i, _))| *i == idx)
                    .map(|(role, _)| *role)
                    .collect(),
            })
            .collect()
    }
}

fn load_face(dir: &Path, file: &str) -> PosterResult<FontFace> {
    let path = dir.join(file);
    let bytes = std::fs::read(&path).map_err(|e| PosterError::font_load(&path, e))?;
    let engine = TextLayoutEngine::with_face(&bytes).map_err(|e| match e {
        PosterError::Raster(reason) => PosterError::font_load(&path, reason),
        other => other,
    })?;
    let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes.clone()), 0);

    tracing::debug!(path = %path.display(), family = engine.family_name(), "face registered");
    Ok(FontFace {
        file: file.to_string(),
        path,
        bytes: Arc::new(bytes),
        engine,
        data,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
