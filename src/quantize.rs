//! Brightness to character quantization against an ordered gradient key.
//!
//! A gradient key is an ordered sequence of characters from visually
//! lightest to darkest. Quantization is linear bucketing: brightness 0
//! picks the first (lightest) character, 255 the last (darkest), and
//! everything in between is assigned by rounding the scaled position.

use std::fmt;
use thiserror::Error;

/// Default 92-character gradient, lightest to darkest.
///
/// Reproduced verbatim, including the leading space and the literal
/// backtick and apostrophe near the light end.
pub const DEFAULT_KEY: &str = " `.-':_,^=;><+!rc*/z?sLTv)J7(|Fi{C}fI31tlu[neoZ5Yxjya]2ESwqkP6h9d4VpOGbUAKXHm8RD#$Bg0MNWQ%&@";

/// An empty gradient key — quantization would be undefined.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("gradient key must contain at least one character")]
pub struct InvalidGradientKey;

/// Validated, non-empty character gradient ordered lightest to darkest.
///
/// Always passed explicitly into quantization rather than living as
/// ambient state, so the quantizer stays pure and testable with
/// arbitrary keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientKey(Vec<char>);

impl GradientKey {
    /// Build a key from a string, rejecting the empty string.
    pub fn new(key: &str) -> Result<Self, InvalidGradientKey> {
        if key.is_empty() {
            return Err(InvalidGradientKey);
        }
        Ok(Self(key.chars().collect()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        // Construction forbids emptiness; kept for the len/is_empty pair.
        self.0.is_empty()
    }
}

impl Default for GradientKey {
    fn default() -> Self {
        Self(DEFAULT_KEY.chars().collect())
    }
}

impl fmt::Display for GradientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Quantize a brightness in [0, 255] to one character of `key`.
///
/// Index = round(brightness / 255 × (len − 1)), with ties rounding away
/// from zero (`f64::round`). The index is clamped into range, so even an
/// out-of-range brightness from a future photometric model cannot index
/// past the key.
pub fn quantize(brightness: f64, key: &GradientKey) -> char {
    let last = key.0.len() - 1;
    // A negative operand saturates to 0 on the usize cast.
    let index = ((brightness / 255.0) * last as f64).round() as usize;
    key.0[index.min(last)]
}

/// Quantize a whole brightness grid, preserving dimensions.
pub fn ascii_grid(brightness: &[Vec<f64>], key: &GradientKey) -> Vec<Vec<char>> {
    brightness
        .iter()
        .map(|row| row.iter().map(|&b| quantize(b, key)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_key_has_92_characters() {
        assert_eq!(GradientKey::default().len(), 92);
        assert_eq!(GradientKey::default(), GradientKey::new(DEFAULT_KEY).unwrap());
    }

    #[test]
    fn default_key_starts_light_ends_dark() {
        assert!(DEFAULT_KEY.starts_with(' '));
        assert!(DEFAULT_KEY.ends_with('@'));
    }

    #[test]
    fn empty_key_is_rejected() {
        assert_eq!(GradientKey::new(""), Err(InvalidGradientKey));
    }

    #[test]
    fn endpoints_map_to_first_and_last() {
        let key = GradientKey::new("AB").unwrap();
        assert_eq!(quantize(0.0, &key), 'A');
        assert_eq!(quantize(255.0, &key), 'B');

        let key = GradientKey::default();
        assert_eq!(quantize(0.0, &key), ' ');
        assert_eq!(quantize(255.0, &key), '@');
    }

    #[test]
    fn single_character_key_is_constant() {
        let key = GradientKey::new("X").unwrap();
        for b in [0.0, 1.0, 53.55, 127.5, 254.9, 255.0] {
            assert_eq!(quantize(b, &key), 'X');
        }
    }

    #[test]
    fn monotonic_non_decreasing_in_brightness() {
        let key = GradientKey::default();
        let index_of = |b: f64| {
            let c = quantize(b, &key);
            DEFAULT_KEY.chars().position(|k| k == c).unwrap()
        };
        let mut previous = index_of(0.0);
        let mut b = 0.0;
        while b <= 255.0 {
            let index = index_of(b);
            assert!(index >= previous, "index dropped at brightness {b}");
            previous = index;
            b += 0.25;
        }
    }

    #[test]
    fn ties_round_away_from_zero() {
        // Two-char key: boundary at brightness 127.5 → index 0.5 → rounds to 1
        let key = GradientKey::new("AB").unwrap();
        assert_eq!(quantize(127.4, &key), 'A');
        assert_eq!(quantize(127.5, &key), 'B');
    }

    #[test]
    fn out_of_range_brightness_is_clamped() {
        let key = GradientKey::new("ABC").unwrap();
        assert_eq!(quantize(300.0, &key), 'C');
        assert_eq!(quantize(-10.0, &key), 'A');
    }

    #[test]
    fn grid_preserves_dimensions() {
        let key = GradientKey::new("AB").unwrap();
        let brightness = vec![vec![0.0, 255.0], vec![255.0, 0.0]];
        let ascii = ascii_grid(&brightness, &key);
        assert_eq!(ascii, vec![vec!['A', 'B'], vec!['B', 'A']]);
    }

    #[test]
    fn multibyte_keys_quantize_per_character() {
        let key = GradientKey::new("░▒▓").unwrap();
        assert_eq!(key.len(), 3);
        assert_eq!(quantize(0.0, &key), '░');
        assert_eq!(quantize(255.0, &key), '▓');
    }
}
