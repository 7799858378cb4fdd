// Cache path utilities.
// Constructs filesystem paths for the per-year, per-day input cache.

use std::path::{Path, PathBuf};

/// Directory holding a year's cached inputs.
pub fn year_dir(root: &Path, year: u32) -> PathBuf {
    root.join(year.to_string())
}

/// Path to the cached input for one day: `<root>/<year>/<day>.txt`.
pub fn input_path(root: &Path, year: u32, day: u32) -> PathBuf {
    year_dir(root, year).join(format!("{day}.txt"))
}
