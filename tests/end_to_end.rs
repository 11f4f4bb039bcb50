//! End-to-end pipeline tests over synthetic images on disk.
//!
//! These exercise the public library surface the binary uses: decode a
//! real encoded file, resample, map, quantize, render.

use image::{Rgb, RgbImage};
use img2ascii::brightness::BrightnessMode;
use img2ascii::naming;
use img2ascii::pipeline::{self, RenderConfig};
use img2ascii::quantize::GradientKey;
use img2ascii::resample::SizeBound;
use std::path::Path;

fn write_png(path: &Path, width: u32, height: u32, pixels: &[[u8; 3]]) {
    let image = RgbImage::from_fn(width, height, |x, y| Rgb(pixels[(y * width + x) as usize]));
    image.save(path).unwrap();
}

fn base_config(path: &Path) -> RenderConfig {
    RenderConfig {
        source: Some(path.to_path_buf()),
        repeat: 1,
        key: GradientKey::new("AB").unwrap(),
        ..RenderConfig::default()
    }
}

#[test]
fn black_and_white_row_maps_to_key_endpoints() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("row.png");
    write_png(&path, 2, 1, &[[0, 0, 0], [255, 255, 255]]);

    let rendering = pipeline::run(&base_config(&path)).unwrap();
    assert_eq!(rendering.text, "AB");
}

#[test]
fn default_key_maps_black_to_space_and_white_to_at() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("row.png");
    write_png(&path, 2, 1, &[[0, 0, 0], [255, 255, 255]]);

    let config = RenderConfig {
        key: GradientKey::default(),
        ..base_config(&path)
    };
    assert_eq!(pipeline::run(&config).unwrap().text, " @");
}

#[test]
fn all_modes_agree_on_grayscale_input() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("gray.png");
    write_png(&path, 2, 1, &[[0, 0, 0], [255, 255, 255]]);

    for mode in [
        BrightnessMode::Average,
        BrightnessMode::Lightness,
        BrightnessMode::Luminosity,
    ] {
        let config = RenderConfig {
            mode,
            ..base_config(&path)
        };
        assert_eq!(pipeline::run(&config).unwrap().text, "AB", "mode {mode}");
    }
}

#[test]
fn jpeg_sources_decode_too() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("flat.jpg");
    let image = RgbImage::from_pixel(4, 4, Rgb([128, 128, 128]));
    image.save(&path).unwrap();

    let rendering = pipeline::run(&base_config(&path)).unwrap();
    assert_eq!(rendering.format, Some(image::ImageFormat::Jpeg));
    assert_eq!(rendering.text.lines().count(), 4);
}

#[test]
fn bounding_box_shrinks_output_and_save_name_uses_resolved_size() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("landscape.png");
    let image = RgbImage::from_pixel(200, 100, Rgb([64, 64, 64]));
    image.save(&path).unwrap();

    let config = RenderConfig {
        bound: SizeBound::Rect(20, 20),
        ..base_config(&path)
    };
    let rendering = pipeline::run(&config).unwrap();
    assert_eq!((rendering.width, rendering.height), (20, 10));

    let filename =
        naming::output_filename(config.mode, rendering.width, rendering.height, &path);
    assert_eq!(filename, "ascii_average_20x10_landscape.txt");
}

#[test]
fn repeat_widens_every_line_uniformly() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("square.png");
    let image = RgbImage::from_pixel(3, 3, Rgb([200, 200, 200]));
    image.save(&path).unwrap();

    let config = RenderConfig {
        repeat: 3,
        ..base_config(&path)
    };
    let rendering = pipeline::run(&config).unwrap();
    assert!(rendering.text.lines().all(|line| line.chars().count() == 9));
}
