use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Single-threaded reference: row-major results, top row first.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let resolution = algorithm.resolution();
    let width = resolution.width() as i32;
    let height = resolution.height() as i32;
    let mut results = Vec::with_capacity(resolution.pixel_count());

    for y in 0..height {
        for x in 0..width {
            results.push(algorithm.compute(Point { x, y })?);
        }
    }

    Ok(results)
}
