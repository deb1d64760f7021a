pub mod frame;
pub mod ports;
pub mod render_worker;
pub mod session;
