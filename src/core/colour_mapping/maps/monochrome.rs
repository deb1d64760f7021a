use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::{ColourMapError, check_within_cap};
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::colour::Colour;

/// Gray level proportional to the escape index: `0` is black, the cap is white.
#[derive(Debug)]
pub struct Monochrome {
    iteration_cap: u32,
}

impl Monochrome {
    #[must_use]
    pub fn new(iteration_cap: u32) -> Self {
        Self { iteration_cap }
    }
}

impl ColourMap for Monochrome {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        check_within_cap(iterations, self.iteration_cap)?;

        Ok(Colour::gray(cap_relative_level(
            iterations,
            self.iteration_cap,
        )))
    }

    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Monochrome
    }
}

pub(crate) fn cap_relative_level(iterations: u32, iteration_cap: u32) -> u8 {
    if iteration_cap == 0 {
        return 0;
    }

    (u64::from(iterations) * 255 / u64::from(iteration_cap)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_iterations_is_black() {
        assert_eq!(Monochrome::new(30).map(0).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_cap_is_white() {
        for cap in [10, 30, 255, 1000] {
            assert_eq!(Monochrome::new(cap).map(cap).unwrap(), Colour::gray(255));
        }
    }

    #[test]
    fn test_integer_scaling() {
        let mapper = Monochrome::new(30);

        assert_eq!(mapper.map(15).unwrap(), Colour::gray(127));
        assert_eq!(mapper.map(1).unwrap(), Colour::gray(8));
    }

    #[test]
    fn test_levels_never_decrease() {
        let mapper = Monochrome::new(77);
        let mut previous = 0;

        for count in 0..=77 {
            let level = mapper.map(count).unwrap().r;
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn test_error_when_iterations_exceed_cap() {
        assert_eq!(
            Monochrome::new(30).map(31),
            Err(ColourMapError::IterationsExceedCap {
                iterations: 31,
                iteration_cap: 30
            })
        );
    }
}
