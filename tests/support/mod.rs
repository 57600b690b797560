#![allow(dead_code)]

use std::path::{Path, PathBuf};

use threshold_cartography::FontRole;

/// Freely redistributable face bundled for tests (see `LICENSE-DejaVu.txt`).
pub const FIXTURE_FONT: &str = "tests/data/fonts/DejaVuSans.ttf";

/// Typeface directory holding every poster font file name.
///
/// `THRESHOLD_FONTS_DIR` or the repository's `fonts/` directory wins when it holds the
/// real faces. Otherwise the fixture face is copied under each file name into
/// `target/fixture_fonts/<tag>`, so callers running in parallel never share a directory.
pub fn poster_fonts_dir(tag: &str) -> PathBuf {
    if let Some(dir) = real_fonts_dir() {
        return dir;
    }
    let dir = PathBuf::from("target").join("fixture_fonts").join(tag);
    std::fs::create_dir_all(&dir).unwrap();
    for spec in FontRole::default_table().values() {
        std::fs::copy(FIXTURE_FONT, dir.join(&spec.file)).unwrap();
    }
    dir
}

fn real_fonts_dir() -> Option<PathBuf> {
    let dir = std::env::var_os("THRESHOLD_FONTS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fonts"));
    has_every_face(&dir).then_some(dir)
}

fn has_every_face(dir: &Path) -> bool {
    FontRole::default_table()
        .values()
        .all(|spec| dir.join(&spec.file).is_file())
}
