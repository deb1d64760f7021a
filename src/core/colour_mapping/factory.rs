use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::maps::{
    banded_rainbow::BandedRainbow, contrast_stretch::ContrastStretch, monochrome::Monochrome,
    wavelength_sweep::WavelengthSweep,
};
use crate::core::data::iteration_grid::GridStats;

/// `stats` is only consulted by schemes that adapt to the grid contents.
#[must_use]
pub fn colour_map_factory(
    kind: ColourSchemeKind,
    iteration_cap: u32,
    stats: GridStats,
) -> Box<dyn ColourMap> {
    match kind {
        ColourSchemeKind::Monochrome => Box::new(Monochrome::new(iteration_cap)),
        ColourSchemeKind::ContrastStretch => Box::new(ContrastStretch::new(iteration_cap, stats)),
        ColourSchemeKind::WavelengthSweep => Box::new(WavelengthSweep::new(iteration_cap)),
        ColourSchemeKind::BandedRainbow => Box::new(BandedRainbow::new(iteration_cap)),
    }
}
