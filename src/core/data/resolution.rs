use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    ZeroSize { width: u32, height: u32 },
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { width, height } => {
                write!(f, "resolution must be at least 1x1: {}x{}", width, height)
            }
            Self::TooLarge { width, height } => {
                write!(
                    f,
                    "resolution {}x{} exceeds the addressable pixel range",
                    width, height
                )
            }
        }
    }
}

impl Error for ResolutionError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, ResolutionError> {
        if width == 0 || height == 0 {
            return Err(ResolutionError::ZeroSize { width, height });
        }

        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(ResolutionError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    /// Row-major index of an in-bounds pixel.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        Some(point.y as usize * self.width as usize + point.x as usize)
    }
}
