use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::{ColourMapError, check_within_cap};
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::maps::monochrome::cap_relative_level;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_grid::GridStats;

/// Monochrome ramp spread over the escape indices actually present in a grid.
///
/// Counts are clamped into `[min, max]` before scaling, so the darkest pixel
/// of the grid is black and the brightest is white. A flat grid falls back to
/// the cap-relative ramp.
#[derive(Debug)]
pub struct ContrastStretch {
    iteration_cap: u32,
    stats: GridStats,
}

impl ContrastStretch {
    #[must_use]
    pub fn new(iteration_cap: u32, stats: GridStats) -> Self {
        Self {
            iteration_cap,
            stats,
        }
    }
}

impl ColourMap for ContrastStretch {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        check_within_cap(iterations, self.iteration_cap)?;

        let GridStats { min, max } = self.stats;
        if max <= min {
            return Ok(Colour::gray(cap_relative_level(
                iterations,
                self.iteration_cap,
            )));
        }

        let clamped = iterations.clamp(min, max);
        let level = u64::from(clamped - min) * 255 / u64::from(max - min);

        Ok(Colour::gray(level as u8))
    }

    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::ContrastStretch
    }
}
