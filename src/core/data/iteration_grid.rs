use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationGridError {
    SizeMismatch { expected: usize, actual: usize },
    CountExceedsCap { count: u32, iteration_cap: u32 },
}

impl fmt::Display for IterationGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "expected {} iteration counts, got {}", expected, actual)
            }
            Self::CountExceedsCap {
                count,
                iteration_cap,
            } => {
                write!(f, "iteration count {} exceeds cap {}", count, iteration_cap)
            }
        }
    }
}

impl Error for IterationGridError {}

/// Observed range of escape indices in a grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridStats {
    pub min: u32,
    pub max: u32,
}

/// Escape index per pixel, row-major. A value equal to `iteration_cap`
/// marks a bounded orbit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationGrid {
    resolution: Resolution,
    iteration_cap: u32,
    counts: Vec<u32>,
}

impl IterationGrid {
    pub fn from_counts(
        resolution: Resolution,
        iteration_cap: u32,
        counts: Vec<u32>,
    ) -> Result<Self, IterationGridError> {
        if counts.len() != resolution.pixel_count() {
            return Err(IterationGridError::SizeMismatch {
                expected: resolution.pixel_count(),
                actual: counts.len(),
            });
        }

        if let Some(&count) = counts.iter().find(|&&count| count > iteration_cap) {
            return Err(IterationGridError::CountExceedsCap {
                count,
                iteration_cap,
            });
        }

        Ok(Self {
            resolution,
            iteration_cap,
            counts,
        })
    }

    /// Unchecked constructor for counts produced by the evaluator.
    pub(crate) fn from_parts(resolution: Resolution, iteration_cap: u32, counts: Vec<u32>) -> Self {
        debug_assert_eq!(counts.len(), resolution.pixel_count());
        debug_assert!(counts.iter().all(|&count| count <= iteration_cap));

        Self {
            resolution,
            iteration_cap,
            counts,
        }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn iteration_cap(&self) -> u32 {
        self.iteration_cap
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[must_use]
    pub fn get(&self, pixel: Point) -> Option<u32> {
        self.resolution
            .index_of(pixel)
            .map(|index| self.counts[index])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.counts.chunks(self.resolution.width() as usize)
    }

    #[must_use]
    pub fn stats(&self) -> GridStats {
        let (min, max) = self
            .counts
            .iter()
            .fold((u32::MAX, u32::MIN), |(min, max), &count| {
                (min.min(count), max.max(count))
            });

        GridStats { min, max }
    }

    #[must_use]
    pub fn bounded_pixel_count(&self) -> usize {
        self.counts
            .iter()
            .filter(|&&count| count == self.iteration_cap)
            .count()
    }
}
