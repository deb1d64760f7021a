use std::time::{Duration, Instant};

use crate::controllers::ports::frame_renderer::FrameRenderer;
use crate::core::actions::compute_grid::compute_grid;
use crate::core::actions::generate_fractal::worker_pool::WorkerPool;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, colour_grid,
};
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::navigation::controller::NavigationState;

/// One fully computed and coloured view.
#[derive(Debug, Clone)]
pub struct Frame {
    pub snapshot: NavigationState,
    pub grid: IterationGrid,
    pub pixels: PixelBuffer,
    pub render_duration: Duration,
}

impl FrameRenderer for WorkerPool {
    fn render(&self, snapshot: &NavigationState) -> Result<Frame, GeneratePixelBufferError> {
        let start = Instant::now();

        let grid = compute_grid(self, &snapshot.viewport, &snapshot.params);
        let pixels = colour_grid(&grid, snapshot.colour.scheme())?;

        Ok(Frame {
            snapshot: *snapshot,
            grid,
            pixels,
            render_duration: start.elapsed(),
        })
    }
}
