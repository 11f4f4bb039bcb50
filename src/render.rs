//! Assemble a character grid into the final text.
//!
//! Monospace glyphs are roughly twice as tall as they are wide, so each
//! character is repeated horizontally (`repeat` times, default 3) to keep
//! the rendered art close to the source image's proportions.

/// Join `grid` into newline-separated text, repeating each character
/// `repeat` times within its row.
///
/// Rows are emitted top to bottom, characters left to right. The caller
/// guarantees `repeat >= 1` (enforced at the CLI boundary).
pub fn render(grid: &[Vec<char>], repeat: usize) -> String {
    let mut lines = Vec::with_capacity(grid.len());
    for row in grid {
        let mut line = String::with_capacity(row.len() * repeat);
        for &c in row {
            for _ in 0..repeat {
                line.push(c);
            }
        }
        lines.push(line);
    }
    lines.join("\n")
}
