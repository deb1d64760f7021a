use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::colour::Colour;
use std::fmt::Write;

/// Colours for every escape index `0..=iteration_cap`, precomputed from a
/// [`ColourMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteLut {
    kind: ColourSchemeKind,
    colours: Vec<Colour>,
}

impl PaletteLut {
    pub fn build(map: &dyn ColourMap, iteration_cap: u32) -> Result<Self, ColourMapError> {
        let colours = (0..=iteration_cap)
            .map(|iterations| map.map(iterations))
            .collect::<Result<Vec<_>, _>>()?;

        log::trace!(
            "built {} palette with {} entries",
            map.display_name(),
            colours.len()
        );

        Ok(Self {
            kind: map.kind(),
            colours,
        })
    }

    #[must_use]
    pub fn kind(&self) -> ColourSchemeKind {
        self.kind
    }

    #[must_use]
    pub fn iteration_cap(&self) -> u32 {
        (self.colours.len() - 1) as u32
    }

    #[must_use]
    pub fn get(&self, iterations: u32) -> Option<Colour> {
        self.colours.get(iterations as usize).copied()
    }

    pub fn lookup(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        self.get(iterations)
            .ok_or(ColourMapError::IterationsExceedCap {
                iterations,
                iteration_cap: self.iteration_cap(),
            })
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }
}

/// Renders the escaping entries of `lut` as a VHDL conditional signal
/// assignment keyed on `selector`. The bounded entry becomes the trailing
/// black default.
#[must_use]
pub fn format_vhdl_lut(lut: &PaletteLut, selector: &str) -> String {
    let escaping = &lut.colours()[..lut.colours().len() - 1];
    let mut out = String::with_capacity((escaping.len() + 1) * 40);

    for (iterations, Colour { r, g, b }) in escaping.iter().enumerate() {
        // writing into a String cannot fail
        let _ = writeln!(
            out,
            "x\"{:02x}{:02x}{:02x}\" when {} = {:04x} else",
            r, g, b, selector, iterations
        );
    }
    out.push_str("x\"000000\";\n");

    out
}
