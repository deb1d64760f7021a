use crate::controllers::frame::Frame;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::navigation::controller::NavigationState;

/// Turns a navigation snapshot into a finished frame.
pub trait FrameRenderer: Send + Sync {
    fn render(&self, snapshot: &NavigationState) -> Result<Frame, GeneratePixelBufferError>;
}
