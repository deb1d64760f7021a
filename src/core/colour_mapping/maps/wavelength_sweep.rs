use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::{ColourMapError, check_within_cap};
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::colour::Colour;

const VIOLET_NM: f64 = 380.0;
const RED_NM: f64 = 750.0;

/// Maps escape indices onto the visible spectrum.
///
/// Fast escapes sit at the red end (750 nm), slow ones towards violet
/// (380 nm). Bounded points are black.
#[derive(Debug)]
pub struct WavelengthSweep {
    iteration_cap: u32,
}

impl WavelengthSweep {
    #[must_use]
    pub fn new(iteration_cap: u32) -> Self {
        Self { iteration_cap }
    }

    fn wavelength(&self, iterations: u32) -> f64 {
        let cap = f64::from(self.iteration_cap);

        (cap - f64::from(iterations)) * (RED_NM - VIOLET_NM) / cap + VIOLET_NM
    }
}

impl ColourMap for WavelengthSweep {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        check_within_cap(iterations, self.iteration_cap)?;

        if iterations == self.iteration_cap {
            return Ok(Colour::BLACK);
        }

        let (r, g, b) = spectrum_rgb(self.wavelength(iterations));

        Ok(Colour {
            r: (r * 255.0) as u8,
            g: (g * 255.0) as u8,
            b: (b * 255.0) as u8,
        })
    }

    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::WavelengthSweep
    }
}

/// Channel intensities in `[0, 1]` for a wavelength in nanometres.
/// Bands are inclusive at both ends; the first match wins.
fn spectrum_rgb(wavelength: f64) -> (f64, f64, f64) {
    if (380.0..=440.0).contains(&wavelength) {
        let attenuation = 0.3 + 0.7 * (wavelength - 380.0) / (440.0 - 380.0);
        (
            (-(wavelength - 440.0) / (440.0 - 380.0)) * attenuation,
            0.0,
            attenuation,
        )
    } else if (440.0..=490.0).contains(&wavelength) {
        (0.0, (wavelength - 440.0) / (490.0 - 440.0), 1.0)
    } else if (490.0..=510.0).contains(&wavelength) {
        (0.0, 1.0, -(wavelength - 510.0) / (510.0 - 490.0))
    } else if (510.0..=580.0).contains(&wavelength) {
        ((wavelength - 510.0) / (580.0 - 510.0), 1.0, 0.0)
    } else if (580.0..=645.0).contains(&wavelength) {
        (1.0, -(wavelength - 645.0) / (645.0 - 580.0), 0.0)
    } else if (645.0..=750.0).contains(&wavelength) {
        (0.3 + 0.7 * (750.0 - wavelength) / (750.0 - 645.0), 0.0, 0.0)
    } else {
        (0.0, 0.0, 0.0)
    }
}
