use crate::core::data::complex::Complex;
use serde::{Deserialize, Serialize};

pub const MIN_ITERATION_CAP: u32 = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FractalMode {
    #[default]
    Mandelbrot,
    Julia,
}

impl FractalMode {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Mandelbrot => Self::Julia,
            Self::Julia => Self::Mandelbrot,
        }
    }
}

impl std::fmt::Display for FractalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Parameters of the iteration formula `z ↦ z^exponent + c`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParams {
    pub mode: FractalMode,
    pub exponent: f64,
    /// Initial `z` for Mandelbrot, the fixed `c` for Julia.
    pub start_value: Complex,
    pub iteration_cap: u32,
}

impl FractalParams {
    /// Builds parameters with the iteration cap clamped to [`MIN_ITERATION_CAP`].
    #[must_use]
    pub fn new(mode: FractalMode, exponent: f64, start_value: Complex, iteration_cap: u32) -> Self {
        Self {
            mode,
            exponent,
            start_value,
            iteration_cap: iteration_cap.max(MIN_ITERATION_CAP),
        }
    }

    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(self.mode, self.exponent, self.start_value, self.iteration_cap)
    }
}

impl Default for FractalParams {
    fn default() -> Self {
        Self::new(FractalMode::Mandelbrot, 2.0, Complex::ZERO, 30)
    }
}
