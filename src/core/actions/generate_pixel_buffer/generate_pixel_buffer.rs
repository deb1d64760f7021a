use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::lookup_table::PaletteLut;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratePixelBufferError {
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<ColourMapError> for GeneratePixelBufferError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Caps above this are coloured per pixel instead of through a [`PaletteLut`].
pub const MAX_LUT_ENTRIES: u32 = 1 << 16;

/// Colours every cell of `grid` with `mapper`.
///
/// For caps below [`MAX_LUT_ENTRIES`] the palette is resolved once for
/// `0..=cap` and the per-pixel pass is a table lookup. Larger caps call the
/// map for each pixel, so memory stays proportional to the grid. Both run in
/// parallel over disjoint pixel slices.
pub fn generate_pixel_buffer(
    grid: &IterationGrid,
    mapper: &dyn ColourMap,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let mut buffer = vec![0u8; grid.counts().len() * BYTES_PER_PIXEL];

    if grid.iteration_cap() < MAX_LUT_ENTRIES {
        let lut = PaletteLut::build(mapper, grid.iteration_cap())?;
        fill_pixels(&mut buffer, grid.counts(), |iterations| lut.lookup(iterations))?;
    } else {
        log::trace!(
            "cap {} too large for a lookup table, mapping per pixel",
            grid.iteration_cap()
        );
        fill_pixels(&mut buffer, grid.counts(), |iterations| mapper.map(iterations))?;
    }

    Ok(PixelBuffer::from_data(grid.resolution(), buffer)?)
}

fn fill_pixels<F>(buffer: &mut [u8], counts: &[u32], colour_of: F) -> Result<(), ColourMapError>
where
    F: Fn(u32) -> Result<Colour, ColourMapError> + Sync,
{
    buffer
        .par_chunks_mut(BYTES_PER_PIXEL)
        .zip(counts.par_iter())
        .try_for_each(|(pixel, &iterations)| {
            let colour = colour_of(iterations)?;
            pixel[0] = colour.r;
            pixel[1] = colour.g;
            pixel[2] = colour.b;
            Ok(())
        })
}

/// Builds the map for `kind` from the grid's own cap and statistics, then
/// colours the grid with it.
pub fn colour_grid(
    grid: &IterationGrid,
    kind: ColourSchemeKind,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let mapper = colour_map_factory(kind, grid.iteration_cap(), grid.stats());

    generate_pixel_buffer(grid, mapper.as_ref())
}
