//! CLI output formatting for the console surface.
//!
//! Every run prints three blocks, in order:
//!
//! 1. **Decoded metadata** — container format, source dimensions, color type.
//! 2. **Resolved configuration** — source path, resolved width/height,
//!    brightness mode, gradient key, save flag.
//! 3. **The rendered text** itself.
//!
//! Each block has a `format_*` function (returns `String`/`Vec<String>`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::pipeline::{RenderConfig, Rendering};
use std::path::Path;

/// Decoded image metadata line, e.g. `Png 800x600 Rgb8`.
///
/// Dimensions here are the *source* dimensions; the resolved output size
/// appears in the configuration block.
pub fn format_metadata(rendering: &Rendering) -> String {
    let format = rendering
        .format
        .map(|f| format!("{f:?}"))
        .unwrap_or_else(|| "unknown".to_string());
    format!(
        "{} {}x{} {:?}",
        format, rendering.source_width, rendering.source_height, rendering.color
    )
}

/// The resolved configuration block, one `Key: value` line per entry.
pub fn format_config(config: &RenderConfig, rendering: &Rendering) -> Vec<String> {
    let source = config
        .source
        .as_deref()
        .unwrap_or(Path::new(""))
        .display()
        .to_string();
    vec![
        format!("Source: {source}"),
        format!("Size: {}x{}", rendering.width, rendering.height),
        format!("Mode: {}", config.mode),
        format!("Key: {}", config.key),
        format!("Save: {}", config.save),
    ]
}

/// Confirmation line after writing a `.txt` file.
pub fn format_saved(filename: &str) -> String {
    format!("Saved {filename}")
}

/// Print metadata, configuration, and the rendered text to stdout.
pub fn print_rendering(config: &RenderConfig, rendering: &Rendering) {
    println!("{}", format_metadata(rendering));
    for line in format_config(config, rendering) {
        println!("{line}");
    }
    println!("{}", rendering.text);
}
