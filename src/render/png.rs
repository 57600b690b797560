use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::Path,
};

use image::ImageEncoder as _;

use crate::{
    foundation::error::{PosterError, PosterResult},
    render::Frame,
};

/// Encode `frame` as an RGB8 PNG at `path`, replacing any existing file.
///
/// The parent directory must already exist. Encoding uses the best compression level;
/// PNG is lossless, so there is no quality knob.
#[tracing::instrument(skip(frame, path), fields(path = %path.display()))]
pub fn write_png(frame: &Frame, path: &Path) -> PosterResult<()> {
    let expected = frame.width as usize * frame.height as usize * 3;
    if frame.data.len() != expected {
        return Err(PosterError::output_write(
            path,
            format!(
                "frame holds {} bytes, expected {expected} for {}x{} RGB8",
                frame.data.len(),
                frame.width,
                frame.height
            ),
        ));
    }

    let file = File::create(path).map_err(|e| PosterError::output_write(path, e))?;
    let mut writer = BufWriter::new(file);
    image::codecs::png::PngEncoder::new_with_quality(
        &mut writer,
        image::codecs::png::CompressionType::Best,
        image::codecs::png::FilterType::Adaptive,
    )
    .write_image(
        &frame.data,
        frame.width,
        frame.height,
        image::ExtendedColorType::Rgb8,
    )
    .map_err(|e| PosterError::output_write(path, e))?;
    writer
        .flush()
        .map_err(|e| PosterError::output_write(path, e))?;

    tracing::info!("poster written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/png.rs"]
mod tests;
