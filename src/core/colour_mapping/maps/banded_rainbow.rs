use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::{ColourMapError, check_within_cap};
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::colour::Colour;

/// Four linear bands: red, yellow, green, cyan, blue. Bounded points are black.
#[derive(Debug)]
pub struct BandedRainbow {
    iteration_cap: u32,
}

impl BandedRainbow {
    #[must_use]
    pub fn new(iteration_cap: u32) -> Self {
        Self { iteration_cap }
    }
}

impl ColourMap for BandedRainbow {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        check_within_cap(iterations, self.iteration_cap)?;

        if iterations == self.iteration_cap {
            return Ok(Colour::BLACK);
        }

        let t = f64::from(iterations) / f64::from(self.iteration_cap);

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            (255, (local_t * 255.0) as u8, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            ((255.0 - local_t * 255.0) as u8, 255, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (0, 255, (local_t * 255.0) as u8)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (0, (255.0 - local_t * 255.0) as u8, 255)
        };

        Ok(Colour { r, g, b })
    }

    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::BandedRainbow
    }
}
