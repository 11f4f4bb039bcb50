use clap::Parser;
use img2ascii::brightness::BrightnessMode;
use img2ascii::pipeline::{self, RenderConfig};
use img2ascii::quantize::{DEFAULT_KEY, GradientKey};
use img2ascii::resample::SizeBound;
use img2ascii::{naming, output};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "img2ascii")]
#[command(about = "Convert an image to ASCII art")]
#[command(long_about = "\
Convert an image to ASCII art

Each pixel's brightness is mapped to a character from an ordered gradient
key (lightest to darkest). The image can first be fitted into a bounding
box, and each character is repeated horizontally to compensate for glyphs
being taller than they are wide.

Brightness modes:

  average      (R + G + B) / 3
  lightness    (max(R,G,B) + min(R,G,B)) / 2
  luminosity   0.21·R + 0.72·G + 0.07·B

Examples:

  img2ascii photo.png                 # full size, average mode
  img2ascii photo.png 100             # fit within 100x100
  img2ascii photo.png 120 40          # fit within 120x40
  img2ascii photo.png --mode luminosity --repeat 2 --save")]
#[command(version)]
struct Cli {
    /// Path of the source image
    source: Option<PathBuf>,

    /// Max width and height of the final art (one value for both, or width then height)
    #[arg(num_args = 0..=2, value_parser = clap::value_parser!(u32).range(1..))]
    max_size: Vec<u32>,

    /// Method to map RGB to brightness
    #[arg(long, default_value = "average", value_parser = BrightnessMode::from_str)]
    mode: BrightnessMode,

    /// How many times to repeat each character horizontally
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    repeat: u32,

    /// Key translating brightness to characters, from light to dark
    #[arg(long, default_value = DEFAULT_KEY)]
    key: String,

    /// Save the output as a .txt file in the current directory
    #[arg(long)]
    save: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = RenderConfig {
        source: cli.source,
        bound: SizeBound::from_values(&cli.max_size),
        mode: cli.mode,
        repeat: cli.repeat as usize,
        key: GradientKey::new(&cli.key)?,
        save: cli.save,
    };

    let rendering = pipeline::run(&config)?;
    output::print_rendering(&config, &rendering);

    if config.save {
        if let Some(source) = &config.source {
            let filename =
                naming::output_filename(config.mode, rendering.width, rendering.height, source);
            std::fs::write(&filename, &rendering.text)?;
            println!("{}", output::format_saved(&filename));
        }
    }

    Ok(())
}
