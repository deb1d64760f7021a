use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::{FractalMode, FractalParams};
use crate::core::fractals::power::Power;

pub const ESCAPE_RADIUS: f64 = 2.0;
const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// Escape index of `point` under `z ↦ z^exponent + c`.
///
/// Mandelbrot iterates from `z = start_value` with `c = point`; Julia swaps
/// the roles. The orbit is tested before every application of the formula,
/// so the result is the first step at which `|z| >= 2`, or `cap` when the
/// orbit stays bounded. A power that is undefined or overflows counts as an
/// escape at the current step.
#[must_use]
pub fn evaluate(
    point: Complex,
    start_value: Complex,
    mode: FractalMode,
    exponent: f64,
    cap: u32,
) -> u32 {
    iterate(point, start_value, mode, Power::new(exponent), cap)
}

/// [`evaluate`] with a pre-resolved power, for per-pixel use.
#[must_use]
pub fn iterate(point: Complex, start_value: Complex, mode: FractalMode, power: Power, cap: u32) -> u32 {
    let (mut z, c) = match mode {
        FractalMode::Mandelbrot => (start_value, point),
        FractalMode::Julia => (point, start_value),
    };

    for step in 0..cap {
        if !z.is_finite() || z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            return step;
        }

        match power.apply(z) {
            Some(next) => z = next + c,
            None => return step,
        }
    }

    cap
}

/// Evaluates `point` with the formula settings of `params`.
#[must_use]
pub fn evaluate_with(point: Complex, params: &FractalParams) -> u32 {
    evaluate(
        point,
        params.start_value,
        params.mode,
        params.exponent,
        params.iteration_cap,
    )
}
