pub mod config;
pub mod controllers;
pub mod core;
pub mod storage;

pub use config::{ConfigError, EngineConfig};
pub use controllers::frame::Frame;
pub use controllers::ports::frame_renderer::FrameRenderer;
pub use controllers::ports::frame_sink::FrameSink;
pub use controllers::render_worker::RenderWorker;
pub use controllers::render_worker::events::{FrameData, RenderError, RenderEvent};
pub use controllers::session::{FractalSession, SessionError};
pub use crate::core::actions::compute_grid::compute_grid;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_fractal::worker_pool::{WorkerPool, WorkerPoolError};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, colour_grid, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::colour_mapping::errors::ColourMapError;
pub use crate::core::colour_mapping::factory::colour_map_factory;
pub use crate::core::colour_mapping::kinds::ColourSchemeKind;
pub use crate::core::colour_mapping::lookup_table::{PaletteLut, format_vhdl_lut};
pub use crate::core::colour_mapping::settings::{
    ColourMode, ColourSettings, MonochromeScaling, SpectralVariant,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::direction::{PanDirection, Step, ZoomDirection};
pub use crate::core::data::fractal_params::{FractalMode, FractalParams, MIN_ITERATION_CAP};
pub use crate::core::data::iteration_grid::{GridStats, IterationGrid, IterationGridError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::resolution::{Resolution, ResolutionError};
pub use crate::core::data::transition::Transition;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
pub use crate::core::fractals::escape_time::{ESCAPE_RADIUS, evaluate};
pub use crate::core::navigation::command::Command;
pub use crate::core::navigation::controller::{NavigationController, NavigationState};
pub use crate::core::navigation::limits::{InvalidLimit, NavigationLimits};
pub use storage::write_bmp::{encode_bmp, write_bmp};
