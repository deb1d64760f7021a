pub mod colour;
pub mod complex;
pub mod direction;
pub mod fractal_params;
pub mod iteration_grid;
pub mod pixel_buffer;
pub mod point;
pub mod resolution;
pub mod transition;
pub mod viewport;
