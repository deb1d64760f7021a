use std::time::Instant;

use crate::core::actions::generate_fractal::worker_pool::WorkerPool;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::algorithm::EscapeTimeAlgorithm;

/// Full recompute of the escape index of every pixel in `viewport`.
#[must_use]
pub fn compute_grid(pool: &WorkerPool, viewport: &Viewport, params: &FractalParams) -> IterationGrid {
    let algorithm = EscapeTimeAlgorithm::new(*viewport, *params);
    let iteration_cap = algorithm.params().iteration_cap;
    let resolution = viewport.resolution();

    let start = Instant::now();
    let counts = pool
        .generate(&algorithm)
        .unwrap_or_else(|never| match never {});

    log::debug!(
        "computed {}x{} {} grid (cap {}) in {:?}",
        resolution.width(),
        resolution.height(),
        algorithm.params().mode,
        iteration_cap,
        start.elapsed()
    );

    IterationGrid::from_parts(resolution, iteration_cap, counts)
}
