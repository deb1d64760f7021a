use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::iterate;
use crate::core::fractals::power::Power;
use std::convert::Infallible;

/// Escape-time evaluation of every pixel of a viewport snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    viewport: Viewport,
    params: FractalParams,
    power: Power,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, params: FractalParams) -> Self {
        let params = params.clamped();

        Self {
            viewport,
            params,
            power: Power::new(params.exponent),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn params(&self) -> &FractalParams {
        &self.params
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = u32;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let point = self.viewport.pixel_to_point(pixel);

        Ok(iterate(
            point,
            self.params.start_value,
            self.params.mode,
            self.power,
            self.params.iteration_cap,
        ))
    }

    fn resolution(&self) -> Resolution {
        self.viewport.resolution()
    }
}
