//! Prints a VHDL lookup table mapping escape indices to 24-bit colours.

use clap::{Parser, ValueEnum};
use fractal_viewer::{
    ColourSchemeKind, GridStats, MIN_ITERATION_CAP, PaletteLut, colour_map_factory,
    format_vhdl_lut,
};

const SELECTOR: &str = "iteration_s";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scheme {
    Monochrome,
    Stretch,
    Wavelength,
    Rainbow,
}

impl From<Scheme> for ColourSchemeKind {
    fn from(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Monochrome => Self::Monochrome,
            Scheme::Stretch => Self::ContrastStretch,
            Scheme::Wavelength => Self::WavelengthSweep,
            Scheme::Rainbow => Self::BandedRainbow,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "palette_lut")]
#[command(about = "Print a VHDL escape-index colour lookup table")]
struct Args {
    /// Iteration cap; raised to the engine minimum if lower
    #[arg(default_value_t = 128)]
    cap: u32,

    #[arg(value_enum, default_value_t = Scheme::Wavelength)]
    scheme: Scheme,
}

impl Args {
    fn iteration_cap(&self) -> u32 {
        self.cap.max(MIN_ITERATION_CAP)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let iteration_cap = args.iteration_cap();
    let kind = ColourSchemeKind::from(args.scheme);

    let stats = GridStats {
        min: 0,
        max: iteration_cap,
    };
    let map = colour_map_factory(kind, iteration_cap, stats);
    let lut = PaletteLut::build(map.as_ref(), iteration_cap)?;

    log::info!("{} lookup table, cap {}", kind, iteration_cap);
    print!("{}", format_vhdl_lut(&lut, SELECTOR));

    Ok(())
}
