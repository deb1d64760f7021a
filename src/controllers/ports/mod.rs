pub mod frame_renderer;
pub mod frame_sink;
