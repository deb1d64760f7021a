pub mod compute_grid;
pub mod generate_fractal;
pub mod generate_pixel_buffer;
