use std::path::{Path, PathBuf};

/// Convenience result type used across the renderer.
pub type PosterResult<T> = Result<T, PosterError>;

/// Top-level error taxonomy returned by [`render`](crate::render) and its stages.
#[derive(thiserror::Error, Debug)]
pub enum PosterError {
    /// A typeface file could not be read or holds no usable font.
    #[error("font load error: {path}: {reason}")]
    FontLoad {
        /// Offending typeface path.
        path: PathBuf,
        /// Underlying cause.
        reason: String,
    },

    /// The output image could not be created, encoded or flushed.
    #[error("output write error: {path}: {reason}")]
    OutputWrite {
        /// Output path that failed.
        path: PathBuf,
        /// Underlying cause.
        reason: String,
    },

    /// Configuration rejected before any drawing happens.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterizer precondition failures.
    #[error("raster error: {0}")]
    Raster(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PosterError {
    /// Build a [`PosterError::FontLoad`] value.
    pub fn font_load(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::FontLoad {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`PosterError::OutputWrite`] value.
    pub fn output_write(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::OutputWrite {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`PosterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PosterError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
