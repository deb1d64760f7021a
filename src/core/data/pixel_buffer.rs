use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    resolution.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        resolution: Resolution,
    },
    BoundsMismatch {
        resolution_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                resolution_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "resolution needs {} bytes but buffer holds {}",
                    resolution_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, resolution } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    pixel.x,
                    pixel.y,
                    resolution.width(),
                    resolution.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB bytes, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    resolution: Resolution,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            buffer: vec![0; resolution_to_buffer_size(resolution)],
        }
    }

    pub fn from_data(
        resolution: Resolution,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let resolution_size = resolution_to_buffer_size(resolution);

        if resolution_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                resolution_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        let index = self.resolution.index_of(pixel)? * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let Some(index) = self.resolution.index_of(pixel) else {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                resolution: self.resolution,
            });
        };

        let offset = index * BYTES_PER_PIXEL;
        self.buffer[offset] = colour.r;
        self.buffer[offset + 1] = colour.g;
        self.buffer[offset + 2] = colour.b;

        Ok(())
    }
}
