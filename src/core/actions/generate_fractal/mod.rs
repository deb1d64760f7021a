pub mod generate_fractal_serial;
pub mod ports;
pub mod worker_pool;
