//! Output filename convention for saved renderings.
//!
//! Saved files land in the current working directory as
//! `ascii_{mode}_{width}x{height}_{stem}.txt`, where width/height are the
//! resolved (post-resample) grid dimensions and `stem` is the source
//! basename up to its first dot (`photo.final.png` → `photo`).

use crate::brightness::BrightnessMode;
use std::path::Path;

/// Build the `.txt` filename for a saved rendering.
pub fn output_filename(mode: BrightnessMode, width: u32, height: u32, source: &Path) -> String {
    let basename = source
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image");
    // split never yields zero items, so the fallback is unreachable
    let stem = basename.split('.').next().unwrap_or(basename);
    format!("ascii_{mode}_{width}x{height}_{stem}.txt")
}
